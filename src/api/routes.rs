use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::middleware::{make_span_with_request_id, request_id_middleware};
use crate::web;

use super::handlers;
use super::AppState;

/// Creates the application router: HTML pages, JSON API and static images
pub fn create_router(state: AppState) -> Router {
    let images = ServeDir::new(&state.images_dir);

    Router::new()
        .route("/health", get(handlers::health_check))
        // Pages
        .route("/", get(web::handlers::index))
        .route("/pages/:slug", get(web::handlers::page))
        .route("/recommend", post(web::handlers::recommend))
        .nest_service("/imgs", images)
        // JSON API
        .nest("/api/v1", api_routes())
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}

/// API routes under /api/v1
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/titles", get(handlers::get_titles))
        .route("/pages", get(handlers::get_pages))
        .route("/recommendations", post(handlers::recommend))
        .layer(CorsLayer::permissive())
}
