// --- File: crates/reservify_gcal/src/lib.rs ---
pub mod auth;
pub mod provider;
#[cfg(test)]
mod provider_test;
pub mod service;

pub use provider::GoogleGatewayProvider;
pub use service::{GcalServiceError, GoogleCalendarGateway};
