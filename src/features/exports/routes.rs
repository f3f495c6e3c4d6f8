use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::exports::handlers;
use crate::features::exports::services::ExportService;

/// Create routes for the CSV exports
pub fn routes(service: Arc<ExportService>) -> Router {
    Router::new()
        .route("/api/exports/people", get(handlers::export_people))
        .route("/api/exports/recap", get(handlers::export_recap))
        .with_state(service)
}
