use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/summary", get(handlers::summary_page))
        .route("/api/options", get(handlers::get_options))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route("/api/series/:key", get(handlers::get_series))
        .route("/api/stats/:key", get(handlers::get_stats))
        .route("/api/summary", get(handlers::get_summary))
        .with_state(state)
}
