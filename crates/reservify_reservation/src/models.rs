// --- File: crates/reservify_reservation/src/models.rs ---
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Inbound webhook body.
///
/// Every field is optional at the serde level so that a missing field is
/// reported as "missing information" rather than as a malformed body.
#[derive(Deserialize, Debug, Clone, Default)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ReservationRequest {
    /// Falls back to `reservation.default_business_id` when absent.
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(example = "dollar-shop"))]
    pub business_id: Option<String>,
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(example = "Ana Lopez"))]
    pub customer_name: Option<String>,
    /// Alternate spelling of `customer_name`; used when that one is blank.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(example = "2025-06-14"))]
    pub date: Option<String>,
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(example = "19:00"))]
    pub time: Option<String>,
    /// A JSON number or a numeric string.
    #[serde(default, deserialize_with = "party_size_from_any")]
    #[cfg_attr(feature = "openapi", schema(example = 4))]
    pub party_size: Option<u32>,
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(example = "+1 555 0100"))]
    pub phone_number: Option<String>,
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(example = "Window seat"))]
    pub special_requests: Option<String>,
}

// Zero, negative, fractional and non-numeric values all read as absent.
fn party_size_from_any<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let size = match value {
        Some(Value::Number(n)) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Some(Value::String(s)) => s.trim().parse::<u32>().ok(),
        _ => None,
    };
    Ok(size.filter(|n| *n > 0))
}

/// A request whose required fields are present and parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedReservation {
    pub business_id: Option<String>,
    pub customer_name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    /// The caller's own spelling of the date, echoed in the confirmation.
    pub date_text: String,
    pub time_text: String,
    pub party_size: u32,
    pub phone_number: String,
    pub special_requests: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum SuggestedAction {
    AskAlternativeTime,
}

/// Webhook response body. Always returned with HTTP 200.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ReservationOutcome {
    pub success: bool,
    #[cfg_attr(
        feature = "openapi",
        schema(example = "That time slot is not available. Please try another time.")
    )]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_action: Option<SuggestedAction>,
}

impl ReservationOutcome {
    pub fn confirmed(reservation: &ValidatedReservation) -> Self {
        Self {
            success: true,
            message: format!(
                "Perfect! Your reservation is confirmed for {} at {} on {}. We look forward to serving your party of {}!",
                reservation.customer_name,
                reservation.time_text,
                reservation.date_text,
                reservation.party_size
            ),
            suggested_action: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            suggested_action: None,
        }
    }

    pub fn ask_alternative_time(message: impl Into<String>) -> Self {
        Self {
            suggested_action: Some(SuggestedAction::AskAlternativeTime),
            ..Self::failure(message)
        }
    }

    /// The reply for malformed bodies, internal errors and panics.
    pub fn something_went_wrong() -> Self {
        Self::failure(GENERIC_FAILURE_MESSAGE)
    }
}

pub const MISSING_INFORMATION_MESSAGE: &str = "Missing information. Please provide all details.";
pub const INVALID_FORMAT_MESSAGE: &str =
    "Please provide the date as YYYY-MM-DD and the time as HH:MM.";
pub const BUSINESS_NOT_FOUND_MESSAGE: &str = "Business not found.";
pub const SLOT_UNAVAILABLE_MESSAGE: &str =
    "That time slot is not available. Please try another time.";
pub const NONEXISTENT_TIME_MESSAGE: &str =
    "That time does not exist on that date because of a daylight saving change. Please try another time.";
pub const AVAILABILITY_UNVERIFIED_MESSAGE: &str =
    "We couldn't confirm availability right now. Please try again shortly.";
pub const BOOKING_FAILED_MESSAGE: &str = "We couldn't complete your booking. Please try again.";
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";
