use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::people::handlers;
use crate::features::people::services::PersonService;

/// Create routes for the people feature
pub fn routes(service: Arc<PersonService>) -> Router {
    Router::new()
        .route(
            "/api/people",
            get(handlers::list_people).post(handlers::save_person),
        )
        .route(
            "/api/people/{id}",
            get(handlers::get_person)
                .put(handlers::update_person)
                .delete(handlers::delete_person),
        )
        .with_state(service)
}
