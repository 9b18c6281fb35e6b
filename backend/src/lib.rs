use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use diesel::r2d2::{self, ConnectionManager};
use diesel::sqlite::SqliteConnection;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub mod handlers {
    pub mod catalog_handlers;
    pub mod contact_handlers;
}
pub mod models {
    pub mod catalog_models;
    pub mod contact_models;
}
pub mod repositories {
    pub mod contact_repository;
}
pub mod config;
pub mod db;
pub mod error;
pub mod schema;

use handlers::{catalog_handlers, contact_handlers};
use repositories::contact_repository::ContactStore;

pub type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

pub struct AppState {
    pub contact_store: Arc<dyn ContactStore>,
}

fn cors_layer(frontend_url: Option<&str>) -> anyhow::Result<CorsLayer> {
    let origin = match frontend_url {
        Some(url) => AllowOrigin::exact(HeaderValue::from_str(url)?),
        None => AllowOrigin::from(Any),
    };
    Ok(CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(origin)
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN]))
}

/// Builds the `/api` router around the given state.
pub fn app(state: Arc<AppState>, frontend_url: Option<&str>) -> anyhow::Result<Router> {
    let api_routes = Router::new()
        .route("/api/health", get(catalog_handlers::health_check))
        .route("/api/features", get(catalog_handlers::get_features))
        .route("/api/specs", get(catalog_handlers::get_specs))
        .route("/api/contact", post(contact_handlers::submit_contact))
        .route("/api/contacts", get(contact_handlers::list_contacts));

    let app = Router::new()
        .merge(api_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors_layer(frontend_url)?)
        .with_state(state);
    Ok(app)
}
