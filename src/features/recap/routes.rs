use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::recap::handlers;
use crate::features::recap::services::RecapService;

/// Create routes for the recap feature
pub fn routes(service: Arc<RecapService>) -> Router {
    Router::new()
        .route("/api/recap", get(handlers::get_recap))
        .with_state(service)
}
