// --- File: crates/reservify_reservation/src/availability.rs ---
//! Decides whether a time window on a business calendar is free.

use reservify_common::{CalendarEvent, CalendarGateway, TimeWindow};
use reservify_config::AvailabilityPolicy;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum Availability {
    /// The calendar returned no events for the window.
    Free,
    /// At least one event intersects the window.
    Busy { conflicts: Vec<CalendarEvent> },
    /// The calendar could not be queried.
    Unverified { reason: String },
}

impl Availability {
    pub fn is_available(&self, policy: AvailabilityPolicy) -> bool {
        match self {
            Availability::Free => true,
            Availability::Busy { .. } => false,
            Availability::Unverified { .. } => policy == AvailabilityPolicy::FailOpen,
        }
    }
}

/// Lists events for `window` and classifies the result.
///
/// Any returned event counts as a conflict, including ones that only touch
/// part of the window; overlap is left to the calendar provider.
pub async fn check_availability(
    gateway: &dyn CalendarGateway,
    calendar_id: &str,
    window: &TimeWindow,
) -> Availability {
    match gateway.list_events(calendar_id, window).await {
        Ok(events) if events.is_empty() => {
            debug!("No events between {} and {}", window.start, window.end);
            Availability::Free
        }
        Ok(events) => {
            info!(
                "{} event(s) conflict with {} - {}",
                events.len(),
                window.start,
                window.end
            );
            Availability::Busy { conflicts: events }
        }
        Err(e) => {
            warn!("Could not check calendar {}: {}", calendar_id, e);
            Availability::Unverified {
                reason: e.to_string(),
            }
        }
    }
}
