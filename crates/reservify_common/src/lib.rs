// --- File: crates/reservify_common/src/lib.rs ---

// Declare modules within this crate
pub mod error; // Error handling
pub mod handlers; // Health handler
pub mod logging; // Logging utilities
pub mod models; // Time windows and calendar event shapes
pub mod routes; // Route definitions
pub mod services; // Calendar service abstractions
#[cfg(test)]
mod models_proptest;
#[cfg(test)]
mod routes_test;

// Re-export the routes function to be used by the main backend service
pub use routes::routes;

// Re-export error types and utilities for easier access
pub use error::{
    config_error, external_service_error, internal_error, not_found, validation_error, Context,
    HttpStatusCode, ReservifyError,
};

pub use logging::{init_from_config, log_result};
pub use models::{CalendarEvent, InsertedEvent, NewCalendarEvent, TimeWindow};
pub use services::{CalendarGateway, GatewayProvider};
