use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use mediacert::catalog::Catalog;
use mediacert::config::Config;
use mediacert::state::AppState;
use mediacert::{routes, storage};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mediacert=info,tower_http=info".into()),
        )
        .init();

    let config = Arc::new(Config::from_env()?);
    storage::ensure_dirs(&config.upload_folder, &config.output_folder)?;

    let catalog = Catalog::new(config.templates_folder.clone());
    let state = Arc::new(AppState {
        config: config.clone(),
        catalog,
    });

    let app = Router::new()
        .route("/", get(routes::index).post(routes::generate))
        .route("/historial", get(routes::download_history))
        .layer(axum::extract::DefaultBodyLimit::max(20 * 1024 * 1024))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("Mediacert listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
