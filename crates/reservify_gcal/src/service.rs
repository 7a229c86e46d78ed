// --- File: crates/reservify_gcal/src/service.rs ---
//! Google Calendar implementation of the `CalendarGateway` trait.

use async_trait::async_trait;
use google_calendar3::api::{Event, EventDateTime, Scope};
use reservify_common::{
    external_service_error, CalendarEvent, CalendarGateway, InsertedEvent, NewCalendarEvent,
    ReservifyError, TimeWindow,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use crate::auth::HubType;

/// Service name used when reporting upstream failures.
pub const SERVICE_NAME: &str = "google-calendar";

/// Errors that can occur when interacting with Google Calendar.
#[derive(Error, Debug)]
pub enum GcalServiceError {
    #[error("Google API Error: {0}")]
    ApiError(#[from] google_calendar3::Error),
}

impl From<GcalServiceError> for ReservifyError {
    fn from(err: GcalServiceError) -> Self {
        external_service_error(SERVICE_NAME, err)
    }
}

/// Google Calendar gateway bound to one service account.
pub struct GoogleCalendarGateway {
    calendar_hub: Arc<HubType>,
}

impl GoogleCalendarGateway {
    pub fn new(calendar_hub: Arc<HubType>) -> Self {
        Self { calendar_hub }
    }

    async fn fetch_events(
        &self,
        calendar_id: &str,
        window: &TimeWindow,
    ) -> Result<Vec<CalendarEvent>, GcalServiceError> {
        let (_response, events) = self
            .calendar_hub
            .events()
            .list(calendar_id)
            .time_min(window.start)
            .time_max(window.end)
            .single_events(true) // Expand recurring events
            .order_by("startTime")
            .add_scope(Scope::Full)
            .doit()
            .await?;

        Ok(events
            .items
            .unwrap_or_default()
            .into_iter()
            .map(calendar_event_from_google)
            .collect())
    }

    async fn create_event(
        &self,
        calendar_id: &str,
        event: NewCalendarEvent,
    ) -> Result<InsertedEvent, GcalServiceError> {
        let (_response, created) = self
            .calendar_hub
            .events()
            .insert(google_event_from(event), calendar_id)
            .add_scope(Scope::Full)
            .doit()
            .await?;

        Ok(InsertedEvent {
            event_id: created.id,
            status: created.status.unwrap_or_else(|| "confirmed".to_string()),
            html_link: created.html_link,
        })
    }
}

#[async_trait]
impl CalendarGateway for GoogleCalendarGateway {
    /// Lists events intersecting `window`.
    ///
    /// Google treats `timeMin` as an exclusive bound on event end and
    /// `timeMax` as an exclusive bound on event start, which matches the
    /// half-open window semantics: an event ending exactly at `window.start`
    /// is not returned.
    async fn list_events(
        &self,
        calendar_id: &str,
        window: &TimeWindow,
    ) -> Result<Vec<CalendarEvent>, ReservifyError> {
        let events = self.fetch_events(calendar_id, window).await?;
        debug!(
            calendar_id,
            count = events.len(),
            "Listed events between {} and {}",
            window.start,
            window.end
        );
        Ok(events)
    }

    async fn insert_event(
        &self,
        calendar_id: &str,
        event: NewCalendarEvent,
    ) -> Result<InsertedEvent, ReservifyError> {
        Ok(self.create_event(calendar_id, event).await?)
    }
}

/// Converts a Google event into the provider-neutral shape.
///
/// All-day events carry only a date; they are mapped to midnight UTC bounds.
pub fn calendar_event_from_google(event: Event) -> CalendarEvent {
    fn instant(value: Option<EventDateTime>) -> Option<chrono::DateTime<chrono::Utc>> {
        let value = value?;
        value
            .date_time
            .or_else(|| value.date.and_then(|d| d.and_hms_opt(0, 0, 0)).map(|dt| dt.and_utc()))
    }

    CalendarEvent {
        event_id: event.id,
        summary: event.summary,
        start: instant(event.start),
        end: instant(event.end),
        status: event.status,
    }
}

/// Builds the Google event for a reservation.
pub fn google_event_from(event: NewCalendarEvent) -> Event {
    Event {
        summary: Some(event.summary),
        description: Some(event.description),
        start: Some(EventDateTime {
            date_time: Some(event.window.start),
            time_zone: Some(event.time_zone.clone()),
            ..Default::default()
        }),
        end: Some(EventDateTime {
            date_time: Some(event.window.end),
            time_zone: Some(event.time_zone),
            ..Default::default()
        }),
        ..Default::default()
    }
}
