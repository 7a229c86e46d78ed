// --- File: crates/reservify_reservation/src/handlers.rs ---
use crate::logic::{handle_reservation, ReservationState};
use crate::models::{ReservationOutcome, ReservationRequest};
use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use std::sync::Arc;
use tracing::{info_span, warn, Instrument};
use uuid::Uuid;

#[axum::debug_handler]
pub async fn reservation_webhook_handler(
    State(state): State<Arc<ReservationState>>,
    payload: Result<Json<ReservationRequest>, JsonRejection>,
) -> Json<ReservationOutcome> {
    let span = info_span!("reservation", request_id = %Uuid::new_v4());

    async move {
        // Malformed bodies still get a 200 with the generic outcome
        let request = match payload {
            Ok(Json(request)) => request,
            Err(rejection) => {
                warn!("Rejected reservation body: {}", rejection.body_text());
                return Json(ReservationOutcome::something_went_wrong());
            }
        };
        Json(handle_reservation(&state, request).await)
    }
    .instrument(span)
    .await
}
