//! Route definitions

use axum::routing::{get, patch, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::controllers::todos;

pub fn router() -> Router {
    Router::new()
        .route("/todos", get(todos::index).post(todos::store))
        .route("/todos/bulk", post(todos::store_bulk))
        .route("/todos/verify-bulk", post(todos::verify_bulk))
        .route("/todos/upcoming", get(todos::upcoming))
        .route("/todos/overdue", get(todos::overdue))
        .route("/todos/stats", get(todos::stats))
        .route(
            "/todos/:id",
            patch(todos::update).get(todos::show).delete(todos::destroy),
        )
        .route("/todos/:id/complete", post(todos::complete))
        .route("/todos/:id/verify", post(todos::verify))
        .route("/todos/:id/reject", post(todos::reject))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
