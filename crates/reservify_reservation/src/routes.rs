// --- File: crates/reservify_reservation/src/routes.rs ---
use crate::handlers::reservation_webhook_handler;
use crate::logic::ReservationState;
use axum::{routing::post, Router};
use std::sync::Arc;

pub fn routes(state: Arc<ReservationState>) -> Router {
    Router::new()
        .route("/webhook/reservation", post(reservation_webhook_handler))
        .with_state(state)
}
