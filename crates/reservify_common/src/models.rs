// --- File: crates/reservify_common/src/models.rs ---

// Data structures shared between the calendar gateway and the reservation flow.

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{validation_error, ReservifyError};

/// A half-open interval `[start, end)` in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// Builds a window from absolute bounds. `end` must be after `start`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, ReservifyError> {
        if end <= start {
            return Err(validation_error("window end must be after its start"));
        }
        Ok(Self { start, end })
    }

    /// Interprets `date` + `time` as wall-clock time in `tz` and spans `duration` from there.
    ///
    /// A wall-clock time skipped by a DST transition is rejected; an ambiguous
    /// one (clocks turned back) resolves to the earlier instant.
    pub fn starting_at_local(
        date: NaiveDate,
        time: NaiveTime,
        tz: Tz,
        duration: Duration,
    ) -> Result<Self, ReservifyError> {
        let local = date.and_time(time);
        let start = match tz.from_local_datetime(&local) {
            LocalResult::Single(dt) => dt,
            LocalResult::Ambiguous(earliest, _) => earliest,
            LocalResult::None => {
                return Err(validation_error(format!(
                    "{} does not exist in {}",
                    local,
                    tz.name()
                )))
            }
        };
        let start = start.with_timezone(&Utc);
        let end = start
            .checked_add_signed(duration)
            .ok_or_else(|| validation_error("window end is out of range"))?;
        Self::new(start, end)
    }
}

/// An existing calendar entry as returned by the provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub event_id: Option<String>,
    pub summary: Option<String>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub status: Option<String>,
}

/// The calendar entry written for a confirmed reservation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCalendarEvent {
    pub summary: String,
    pub description: String,
    pub window: TimeWindow,
    /// IANA name of the business timezone, stored alongside the start/end.
    pub time_zone: String,
}

/// Result of a successful insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertedEvent {
    pub event_id: Option<String>,
    pub status: String,
    pub html_link: Option<String>,
}
