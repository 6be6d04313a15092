use axum::Router;
use busrisk::config::Config;
use busrisk::reference::ReferenceData;
use busrisk::AppState;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "busrisk=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| format!("Failed to load configuration: {}", e))?;

    tracing::info!("Starting bus disruption risk API");

    // Model artifacts and training data are read once; nothing is served if any is missing
    let reference = ReferenceData::load(&config.artifacts).map_err(|e| {
        tracing::error!("{}", e);
        e
    })?;
    let info = reference.model_info();
    tracing::info!("Loaded Random Forest model with {} trees", info.num_trees);
    tracing::info!(
        "Accuracy: {:.2}%, AUC-ROC: {:.4}, F1: {:.4}",
        info.accuracy * 100.0,
        info.auc_roc,
        info.f1
    );
    tracing::info!(
        "{} lines, {} directions in reference data",
        reference.line_names().len(),
        reference.directions().len()
    );

    let state = Arc::new(AppState::new(reference));
    tracing::info!("Risk scorer ready with {} rules", state.scorer.rules().len());

    // Build router with CORS and tracing
    let app = Router::new()
        .nest("/api", busrisk::routes::create_router(state))
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server_address();
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
