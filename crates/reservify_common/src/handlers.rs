// --- File: crates/reservify_common/src/handlers.rs ---
use axum::{extract::State, http::header, response::IntoResponse, Json};
use reservify_config::BusinessRegistry;
use serde::Serialize;
use std::sync::Arc;

/// Liveness payload.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    #[cfg_attr(feature = "openapi", schema(example = "healthy"))]
    pub status: &'static str,
    /// Ids of the businesses that can currently take reservations.
    pub businesses: Vec<String>,
}

/// Reports process liveness. Always succeeds, even with an empty registry.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse)
    ),
    tag = "System"
))]
pub async fn health_handler(State(registry): State<Arc<BusinessRegistry>>) -> impl IntoResponse {
    let body = HealthResponse {
        status: "healthy",
        businesses: registry.ids(),
    };

    (
        [
            (header::CACHE_CONTROL, "no-store, no-cache, must-revalidate"),
            (header::PRAGMA, "no-cache"),
        ],
        Json(body),
    )
}
