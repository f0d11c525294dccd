pub mod analysis;
pub mod errors;
pub mod handlers;
pub mod models;

use axum::{
    Extension, Router,
    http::Method,
    routing::get,
};
use tower_http::cors::{Any, CorsLayer};

use crate::handlers::{WeblogStore, create_weblog, health_check, list_weblogs};

pub fn create_router(store: WeblogStore) -> Router {
    // Dashboards are served from a different origin, so CORS stays wide open.
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
        .allow_origin(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/weblogs", get(list_weblogs).post(create_weblog))
        .layer(Extension(store))
        .layer(cors)
}

pub async fn run_server(store: WeblogStore, port: u16) -> anyhow::Result<()> {
    let app = create_router(store);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    tracing::info!("Weblog API running on http://0.0.0.0:{}", port);

    axum::serve(listener, app).await?;

    Ok(())
}
