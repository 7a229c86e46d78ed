// --- File: crates/reservify_reservation/src/lib.rs ---
pub mod availability;
#[cfg(feature = "openapi")]
pub mod doc;
pub mod handlers;
pub mod logic;
pub mod models;
pub mod routes;
#[cfg(test)]
mod test_support;

pub use logic::{handle_reservation, ReservationError, ReservationState};
pub use models::{ReservationOutcome, ReservationRequest, SuggestedAction};
pub use routes::routes;
