use crate::error::{AppError, Result};
use std::cmp::Ordering;
use std::io::Read;
use std::path::Path;

/// Distinct categorical values found in the training split.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetOptions {
    pub line_names: Vec<String>,
    pub directions: Vec<String>,
}

pub fn read_options(path: &Path) -> Result<DatasetOptions> {
    let file = std::fs::File::open(path).map_err(|e| {
        AppError::StartupLoad(format!("failed to open {}: {}", path.display(), e))
    })?;
    parse_options(file).map_err(|e| match e {
        AppError::StartupLoad(msg) => {
            AppError::StartupLoad(format!("{}: {}", path.display(), msg))
        }
        other => other,
    })
}

pub fn parse_options<R: Read>(reader: R) -> Result<DatasetOptions> {
    let mut rdr = csv::Reader::from_reader(reader);
    let headers = rdr
        .headers()
        .map_err(|e| AppError::StartupLoad(format!("unreadable header row: {}", e)))?
        .clone();

    let idx_line = headers
        .iter()
        .position(|h| h == "line_name")
        .ok_or_else(|| AppError::StartupLoad("missing line_name column".into()))?;
    let idx_direction = headers
        .iter()
        .position(|h| h == "direction")
        .ok_or_else(|| AppError::StartupLoad("missing direction column".into()))?;

    let mut options = DatasetOptions::default();
    for record in rdr.records() {
        let record =
            record.map_err(|e| AppError::StartupLoad(format!("malformed row: {}", e)))?;

        if let Some(line) = record.get(idx_line).map(str::trim).filter(|v| !v.is_empty()) {
            options.line_names.push(line.to_string());
        }
        if let Some(dir) = record
            .get(idx_direction)
            .map(str::trim)
            .filter(|v| !v.is_empty())
        {
            options.directions.push(dir.to_string());
        }
    }

    sort_distinct(&mut options.line_names);
    sort_distinct(&mut options.directions);

    Ok(options)
}

fn sort_distinct(values: &mut Vec<String>) {
    values.sort_by(|a, b| natural_cmp(a, b));
    values.dedup();
}

/// Integer-looking values sort numerically and come before everything else,
/// so route "9" lists ahead of route "10".
fn natural_cmp(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}
