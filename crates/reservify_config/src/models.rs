// --- File: crates/reservify_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16, // PORT overrides this at load time
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

// --- Logging Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    /// Minimum level for the `reservify` crates ("trace" .. "error").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON lines instead of the human readable format.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// What to do when the calendar cannot be queried before booking.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityPolicy {
    /// Treat an unverifiable slot as free and go on to book it.
    #[default]
    FailOpen,
    /// Refuse the booking when the slot cannot be verified.
    FailClosed,
}

/// What the caller is told when inserting the calendar event fails.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum BookingFailurePolicy {
    /// Log the failure and still confirm the reservation.
    #[default]
    ReportSuccess,
    /// Surface the failure to the caller.
    ReportFailure,
}

// --- Reservation workflow settings ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReservationSettings {
    /// Business used when a request carries no `business_id`.
    #[serde(default = "default_business_id")]
    pub default_business_id: String,
    #[serde(default)]
    pub availability_policy: AvailabilityPolicy,
    #[serde(default)]
    pub booking_failure_policy: BookingFailurePolicy,
    /// Reject requests whose window falls outside open/close hours.
    #[serde(default)]
    pub enforce_business_hours: bool,
}

impl Default for ReservationSettings {
    fn default() -> Self {
        Self {
            default_business_id: default_business_id(),
            availability_policy: AvailabilityPolicy::default(),
            booking_failure_policy: BookingFailurePolicy::default(),
            enforce_business_hours: false,
        }
    }
}

fn default_business_id() -> String {
    "dollar-shop".to_string()
}

// --- Business Config ---
// Holds non-secret business settings. The calendar id may come from the env,
// the service-account key always does (see credentials_env).
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BusinessSettings {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub calendar_id: Option<String>,
    #[serde(default = "default_calendar_id_env")]
    pub calendar_id_env: String,
    #[serde(default = "default_credentials_env")]
    pub credentials_env: String, // env var holding the service-account JSON
    #[serde(default = "default_timezone")]
    pub timezone: String, // IANA name, e.g. "America/New_York"
    #[serde(default = "default_duration_minutes")]
    pub default_duration_minutes: i64,
    #[serde(default = "default_open_hour")]
    pub open_hour: u32,
    #[serde(default = "default_close_hour")]
    pub close_hour: u32,
}

fn default_calendar_id_env() -> String {
    "GOOGLE_CALENDAR_ID".to_string()
}

fn default_credentials_env() -> String {
    "SERVICE_ACCOUNT_KEY".to_string()
}

fn default_timezone() -> String {
    "America/New_York".to_string()
}

fn default_duration_minutes() -> i64 {
    90
}

fn default_open_hour() -> u32 {
    11
}

fn default_close_hour() -> u32 {
    22
}

fn default_businesses() -> Vec<BusinessSettings> {
    vec![BusinessSettings {
        id: default_business_id(),
        display_name: "Dollar Shop Hot Pot".to_string(),
        calendar_id: None,
        calendar_id_env: default_calendar_id_env(),
        credentials_env: default_credentials_env(),
        timezone: default_timezone(),
        default_duration_minutes: default_duration_minutes(),
        open_hour: default_open_hour(),
        close_hour: default_close_hour(),
    }]
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub reservation: ReservationSettings,
    #[serde(default = "default_businesses")]
    pub businesses: Vec<BusinessSettings>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            reservation: ReservationSettings::default(),
            businesses: default_businesses(),
        }
    }
}
