use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::regions::handlers;
use crate::features::regions::services::RegionService;

/// Create routes for the regions feature
pub fn routes(service: Arc<RegionService>) -> Router {
    Router::new()
        .route("/api/regions/provinces", get(handlers::list_provinces))
        .route(
            "/api/regions/provinces/{code}/regencies",
            get(handlers::list_regencies_by_province),
        )
        .route("/api/regions/regencies", get(handlers::list_regencies))
        .route(
            "/api/regions/regencies/{code}/districts",
            get(handlers::list_districts_by_regency),
        )
        .route("/api/regions/districts", get(handlers::list_districts))
        .with_state(service)
}
