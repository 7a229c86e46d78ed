// --- File: crates/reservify_reservation/src/logic.rs ---

use chrono::{Duration, NaiveDate, NaiveTime};
use reservify_common::{GatewayProvider, NewCalendarEvent, ReservifyError, TimeWindow};
use reservify_config::{
    BookingFailurePolicy, BusinessConfig, BusinessRegistry, ReservationSettings,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};

use crate::availability::{check_availability, Availability};
use crate::models::{
    ReservationOutcome, ReservationRequest, ValidatedReservation,
    AVAILABILITY_UNVERIFIED_MESSAGE, BOOKING_FAILED_MESSAGE, BUSINESS_NOT_FOUND_MESSAGE,
    INVALID_FORMAT_MESSAGE, MISSING_INFORMATION_MESSAGE, NONEXISTENT_TIME_MESSAGE,
    SLOT_UNAVAILABLE_MESSAGE,
};

#[derive(Error, Debug)]
pub enum ReservationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Invalid {field}: '{value}'")]
    InvalidFormat { field: &'static str, value: String },
    #[error("Business not found: {0}")]
    BusinessNotFound(String),
    #[error("Requested window is outside opening hours {open_hour:02}:00-{close_hour:02}:00")]
    OutsideBusinessHours { open_hour: u32, close_hour: u32 },
    #[error("Local time does not exist: {0}")]
    NonexistentLocalTime(String),
    #[error("Time slot already has {0} conflicting event(s)")]
    SlotUnavailable(usize),
    #[error("Availability could not be verified: {0}")]
    AvailabilityUnverified(String),
    #[error("Calendar insert failed: {0}")]
    BookingFailed(String),
    #[error(transparent)]
    Internal(#[from] ReservifyError),
}

impl From<&ReservationError> for ReservationOutcome {
    fn from(err: &ReservationError) -> Self {
        match err {
            ReservationError::MissingField(_) => Self::failure(MISSING_INFORMATION_MESSAGE),
            ReservationError::InvalidFormat { .. } => Self::failure(INVALID_FORMAT_MESSAGE),
            ReservationError::BusinessNotFound(_) => Self::failure(BUSINESS_NOT_FOUND_MESSAGE),
            ReservationError::OutsideBusinessHours {
                open_hour,
                close_hour,
            } => Self::ask_alternative_time(format!(
                "Sorry, we take reservations between {:02}:00 and {:02}:00. Please choose another time.",
                open_hour, close_hour
            )),
            ReservationError::NonexistentLocalTime(_) => {
                Self::ask_alternative_time(NONEXISTENT_TIME_MESSAGE)
            }
            ReservationError::SlotUnavailable(_) => {
                Self::ask_alternative_time(SLOT_UNAVAILABLE_MESSAGE)
            }
            ReservationError::AvailabilityUnverified(_) => {
                Self::failure(AVAILABILITY_UNVERIFIED_MESSAGE)
            }
            ReservationError::BookingFailed(_) => Self::failure(BOOKING_FAILED_MESSAGE),
            ReservationError::Internal(_) => Self::something_went_wrong(),
        }
    }
}

/// Shared, read-only state for the reservation webhook.
pub struct ReservationState {
    pub settings: ReservationSettings,
    pub registry: Arc<BusinessRegistry>,
    pub gateways: Arc<dyn GatewayProvider>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn required(value: Option<String>, field: &'static str) -> Result<String, ReservationError> {
    non_blank(value).ok_or(ReservationError::MissingField(field))
}

fn parse_time(text: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(text, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M:%S"))
        .ok()
}

impl ReservationRequest {
    /// Checks presence of every required field, then parses date and time.
    pub fn validate(self) -> Result<ValidatedReservation, ReservationError> {
        let customer_name = required(
            non_blank(self.customer_name).or_else(|| non_blank(self.name)),
            "customer_name",
        )?;
        let date_text = required(self.date, "date")?;
        let time_text = required(self.time, "time")?;
        let party_size = self
            .party_size
            .ok_or(ReservationError::MissingField("party_size"))?;
        let phone_number = required(self.phone_number, "phone_number")?;

        let date = NaiveDate::parse_from_str(&date_text, "%Y-%m-%d").map_err(|_| {
            ReservationError::InvalidFormat {
                field: "date",
                value: date_text.clone(),
            }
        })?;
        let time = parse_time(&time_text).ok_or_else(|| ReservationError::InvalidFormat {
            field: "time",
            value: time_text.clone(),
        })?;

        Ok(ValidatedReservation {
            business_id: non_blank(self.business_id),
            customer_name,
            date,
            time,
            date_text,
            time_text,
            party_size,
            phone_number,
            special_requests: non_blank(self.special_requests),
        })
    }
}

/// The local window `[time, time + duration)` must fit inside
/// `[open_hour:00, close_hour:00]` on the requested date.
pub fn check_business_hours(
    reservation: &ValidatedReservation,
    business: &BusinessConfig,
    duration: Duration,
) -> Result<(), ReservationError> {
    let start = reservation.date.and_time(reservation.time);
    let end = start + duration;
    let midnight = reservation.date.and_time(NaiveTime::MIN);
    let open = midnight + Duration::hours(i64::from(business.open_hour));
    let close = midnight + Duration::hours(i64::from(business.close_hour));

    if start < open || end > close {
        return Err(ReservationError::OutsideBusinessHours {
            open_hour: business.open_hour,
            close_hour: business.close_hour,
        });
    }
    Ok(())
}

pub fn event_summary(reservation: &ValidatedReservation) -> String {
    format!(
        "Reservation: {} ({} people)",
        reservation.customer_name, reservation.party_size
    )
}

pub fn event_description(reservation: &ValidatedReservation) -> String {
    let mut description = format!(
        "Phone: {}\nParty Size: {}",
        reservation.phone_number, reservation.party_size
    );
    if let Some(requests) = &reservation.special_requests {
        description.push_str("\nSpecial Requests: ");
        description.push_str(requests);
    }
    description
}

fn reservation_window(
    reservation: &ValidatedReservation,
    business: &BusinessConfig,
    duration: Duration,
) -> Result<TimeWindow, ReservationError> {
    TimeWindow::starting_at_local(reservation.date, reservation.time, business.timezone, duration)
        .map_err(|e| match e {
            ReservifyError::ValidationError(msg) => ReservationError::NonexistentLocalTime(msg),
            other => ReservationError::Internal(other),
        })
}

/// Runs the validate, resolve, check and book workflow for one request.
pub async fn book_reservation(
    state: &ReservationState,
    request: ReservationRequest,
) -> Result<ReservationOutcome, ReservationError> {
    let reservation = request.validate()?;

    let business_id = reservation
        .business_id
        .as_deref()
        .unwrap_or(&state.settings.default_business_id);
    let business = state
        .registry
        .get(business_id)
        .ok_or_else(|| ReservationError::BusinessNotFound(business_id.to_string()))?;

    let duration = Duration::minutes(business.default_duration_minutes);
    if state.settings.enforce_business_hours {
        check_business_hours(&reservation, &business, duration)?;
    }
    let window = reservation_window(&reservation, &business, duration)?;

    let gateway = state.gateways.gateway_for(&business)?;

    let availability = check_availability(gateway.as_ref(), &business.calendar_id, &window).await;
    match &availability {
        Availability::Busy { conflicts } => {
            return Err(ReservationError::SlotUnavailable(conflicts.len()));
        }
        Availability::Unverified { reason }
            if !availability.is_available(state.settings.availability_policy) =>
        {
            return Err(ReservationError::AvailabilityUnverified(reason.clone()));
        }
        Availability::Unverified { .. } => {
            warn!(
                "Booking {} for {} without a verified availability check",
                window.start, business.id
            );
        }
        Availability::Free => {}
    }

    let event = NewCalendarEvent {
        summary: event_summary(&reservation),
        description: event_description(&reservation),
        window,
        time_zone: business.timezone.name().to_string(),
    };
    match gateway.insert_event(&business.calendar_id, event).await {
        Ok(inserted) => info!(
            "Booked {} at {} for {} (event id {:?})",
            reservation.customer_name,
            window.start,
            business.id,
            inserted.event_id
        ),
        Err(e) => match state.settings.booking_failure_policy {
            BookingFailurePolicy::ReportSuccess => error!(
                "Calendar insert failed for {} at {}; confirming anyway: {}",
                business.id, window.start, e
            ),
            BookingFailurePolicy::ReportFailure => {
                return Err(ReservationError::BookingFailed(e.to_string()));
            }
        },
    }

    Ok(ReservationOutcome::confirmed(&reservation))
}

/// Like [`book_reservation`], with every error turned into a caller-facing outcome.
pub async fn handle_reservation(
    state: &ReservationState,
    request: ReservationRequest,
) -> ReservationOutcome {
    match book_reservation(state, request).await {
        Ok(outcome) => outcome,
        Err(e) => {
            match &e {
                ReservationError::Internal(_) | ReservationError::BookingFailed(_) => {
                    error!("Reservation failed: {}", e)
                }
                _ => info!("Reservation declined: {}", e),
            }
            ReservationOutcome::from(&e)
        }
    }
}
