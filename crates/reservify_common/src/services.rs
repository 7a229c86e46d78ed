// --- File: crates/reservify_common/src/services.rs ---
//! Service abstractions for external services.
//!
//! The reservation flow only talks to these traits, so the Google Calendar
//! implementation can be swapped for a mock in tests.

use async_trait::async_trait;
use reservify_config::BusinessConfig;
use std::sync::Arc;

use crate::error::ReservifyError;
use crate::models::{CalendarEvent, InsertedEvent, NewCalendarEvent, TimeWindow};

/// Calendar operations needed to take a reservation.
#[async_trait]
pub trait CalendarGateway: Send + Sync {
    /// List events whose time ranges intersect `window`.
    async fn list_events(
        &self,
        calendar_id: &str,
        window: &TimeWindow,
    ) -> Result<Vec<CalendarEvent>, ReservifyError>;

    /// Create a calendar entry.
    async fn insert_event(
        &self,
        calendar_id: &str,
        event: NewCalendarEvent,
    ) -> Result<InsertedEvent, ReservifyError>;
}

/// Hands out the calendar gateway bound to a business's credentials.
pub trait GatewayProvider: Send + Sync {
    fn gateway_for(
        &self,
        business: &BusinessConfig,
    ) -> Result<Arc<dyn CalendarGateway>, ReservifyError>;
}
