// --- File: crates/reservify_reservation/src/doc.rs ---
use utoipa::OpenApi;

use crate::models::{ReservationOutcome, ReservationRequest, SuggestedAction};

/// Accepts a reservation, checks the business calendar for conflicts and
/// books the slot. The HTTP status is always 200; `success` carries the result.
#[utoipa::path(
    post,
    path = "/webhook/reservation",
    request_body(content = ReservationRequest, example = json!({
        "business_id": "dollar-shop",
        "customer_name": "Ana Lopez",
        "date": "2025-06-14",
        "time": "19:00",
        "party_size": 4,
        "phone_number": "+1 555 0100",
        "special_requests": "Window seat"
    })),
    responses(
        (status = 200, description = "Reservation confirmed", body = ReservationOutcome, example = json!({
            "success": true,
            "message": "Perfect! Your reservation is confirmed for Ana Lopez at 19:00 on 2025-06-14. We look forward to serving your party of 4!"
        })),
    ),
    tag = "Reservations"
)]
#[allow(dead_code)]
fn doc_reservation_webhook_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(doc_reservation_webhook_handler),
    components(schemas(ReservationRequest, ReservationOutcome, SuggestedAction)),
    tags(
        (name = "Reservations", description = "Voice-agent reservation webhook")
    )
)]
pub struct ReservationApiDoc;
