// --- File: crates/reservify_common/src/routes.rs ---

use axum::{routing::get, Router};
use reservify_config::BusinessRegistry;
use std::sync::Arc;

use crate::handlers::health_handler;

/// Creates a router containing the routes shared by every deployment (health).
pub fn routes(registry: Arc<BusinessRegistry>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(registry)
}
