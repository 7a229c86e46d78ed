// --- File: crates/services/reservify_backend/src/app.rs ---
//! Router assembly: feature routes, API docs, fallback and middleware.

use axum::{
    http::{StatusCode, Uri},
    response::{IntoResponse, Json, Response},
    Router,
};
use reservify_common::{internal_error, not_found, GatewayProvider, HttpStatusCode};
use reservify_config::{AppConfig, BusinessRegistry};
use reservify_reservation::{ReservationOutcome, ReservationState};
use std::any::Any;
use std::sync::Arc;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use tracing::error;

/// Builds the full application router.
pub fn build_router(
    config: &AppConfig,
    registry: Arc<BusinessRegistry>,
    gateways: Arc<dyn GatewayProvider>,
) -> Router {
    let reservation_state = Arc::new(ReservationState {
        settings: config.reservation.clone(),
        registry: registry.clone(),
        gateways,
    });

    #[allow(unused_mut)] // only mutated with the openapi feature
    let mut app = Router::new()
        .merge(reservify_common::routes(registry))
        .merge(catch_reservation_panics(reservify_reservation::routes(
            reservation_state,
        )));

    #[cfg(feature = "openapi")]
    {
        app = app.merge(swagger_ui());
    }

    with_middleware(app.fallback(route_not_found))
}

/// Answers a panic inside the webhook with the generic reservation outcome.
pub fn catch_reservation_panics(router: Router) -> Router {
    router.layer(CatchPanicLayer::custom(panic_response))
}

/// Wraps `router` in request tracing and a plain 500 for any other panic.
pub fn with_middleware(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn route_not_found(uri: Uri) -> impl IntoResponse {
    let err = not_found(format!("No route for {}", uri.path()));
    let status = StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::NOT_FOUND);
    (status, Json(serde_json::json!({ "error": err.to_string() })))
}

// Same body and status as any other failed reservation.
fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    error!("{}", internal_error(format!("handler panicked: {}", detail)));

    (StatusCode::OK, Json(ReservationOutcome::something_went_wrong())).into_response()
}

#[cfg(feature = "openapi")]
fn swagger_ui() -> utoipa_swagger_ui::SwaggerUi {
    use reservify_reservation::doc::ReservationApiDoc;
    use utoipa::OpenApi;
    use utoipa_swagger_ui::SwaggerUi;

    #[derive(OpenApi)]
    #[openapi(
        info(
            title = "Reservify API",
            version = "0.1.0",
            description = "Reservation webhook for voice agents",
            license(name = "MIT", url = "https://opensource.org/licenses/MIT")
        ),
        paths(reservify_common::handlers::health_handler),
        components(schemas(reservify_common::handlers::HealthResponse)),
        tags((name = "System", description = "Service health")),
    )]
    struct ApiDoc;

    let mut openapi_doc = ApiDoc::openapi();
    openapi_doc.merge(ReservationApiDoc::openapi());
    tracing::info!("Serving Swagger UI at /docs");

    SwaggerUi::new("/docs").url("/docs/openapi.json", openapi_doc)
}
