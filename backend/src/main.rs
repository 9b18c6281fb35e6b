use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use tokio::net::TcpListener;

use backend::{
    app,
    config::ServerConfig,
    db,
    repositories::contact_repository::ContactRepository,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,backend=debug,tower_http=info"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    let config = ServerConfig::from_env()?;
    let pool = db::build_pool(&config.database_url)
        .with_context(|| format!("Failed to open database {}", config.database_url))?;
    let state = Arc::new(AppState {
        contact_store: Arc::new(ContactRepository::new(pool)),
    });
    let app = app(state, config.frontend_url.as_deref())?;

    tracing::info!("NOVA API server starting on port {}", config.port);
    tracing::info!("Database: {}", config.database_url);
    tracing::info!("GET  /api/health    - Health check");
    tracing::info!("GET  /api/features  - Product features");
    tracing::info!("GET  /api/specs     - Technical specs");
    tracing::info!("POST /api/contact   - Submit contact form");
    tracing::info!("GET  /api/contacts  - List all contacts");

    let listener = TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .with_context(|| format!("Failed to bind port {}", config.port))?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
