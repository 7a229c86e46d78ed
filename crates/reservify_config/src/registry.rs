//! Read-only store of the businesses this process can book for.
//!
//! The registry is built once at startup from [`BusinessSettings`] plus the
//! environment (calendar id and service-account key) and then shared as an
//! `Arc<BusinessRegistry>`. A business whose settings cannot be resolved is
//! skipped with a warning, so the process still starts and serves health
//! checks with an empty or partial registry.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chrono_tz::Tz;
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::models::BusinessSettings;

/// Reasons a configured business could not be registered.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("business {business_id}: environment variable {var} is not set")]
    MissingEnv { business_id: String, var: String },
    #[error("business {business_id}: invalid service account key: {reason}")]
    InvalidCredentials { business_id: String, reason: String },
    #[error("business {business_id}: unknown timezone {timezone}")]
    InvalidTimezone { business_id: String, timezone: String },
    #[error("business {business_id}: {reason}")]
    InvalidSettings { business_id: String, reason: String },
}

/// A parsed service-account key.
///
/// Kept as opaque JSON so the calendar crate decides how to use it. The
/// `Debug` impl only shows the client email.
#[derive(Clone)]
pub struct ServiceAccountCredentials(Value);

impl ServiceAccountCredentials {
    /// Parses a service-account JSON blob, requiring string `client_email`
    /// and `private_key` members.
    pub fn parse(raw: &str) -> Result<Self, String> {
        let value: Value = serde_json::from_str(raw).map_err(|e| e.to_string())?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, String> {
        let object = value
            .as_object()
            .ok_or_else(|| "expected a JSON object".to_string())?;
        for field in ["client_email", "private_key"] {
            match object.get(field) {
                Some(Value::String(s)) if !s.is_empty() => {}
                _ => return Err(format!("missing `{}`", field)),
            }
        }
        Ok(Self(value))
    }

    pub fn client_email(&self) -> Option<&str> {
        self.0.get("client_email").and_then(Value::as_str)
    }

    pub fn as_json(&self) -> &Value {
        &self.0
    }
}

impl fmt::Debug for ServiceAccountCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceAccountCredentials")
            .field("client_email", &self.client_email())
            .finish_non_exhaustive()
    }
}

/// Everything needed to take a reservation for one business.
#[derive(Debug, Clone)]
pub struct BusinessConfig {
    pub id: String,
    pub display_name: String,
    pub calendar_id: String,
    pub credentials: ServiceAccountCredentials,
    pub timezone: Tz,
    pub default_duration_minutes: i64,
    pub open_hour: u32,
    pub close_hour: u32,
}

/// Longest reservation a business may configure (one day).
pub const MAX_DURATION_MINUTES: i64 = 24 * 60;

impl BusinessConfig {
    /// Resolves settings against an environment lookup.
    pub fn resolve<F>(settings: &BusinessSettings, lookup: F) -> Result<Self, RegistryError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let business_id = settings.id.clone();

        if settings.default_duration_minutes <= 0
            || settings.default_duration_minutes > MAX_DURATION_MINUTES
        {
            return Err(RegistryError::InvalidSettings {
                business_id,
                reason: format!(
                    "default_duration_minutes must be between 1 and {}",
                    MAX_DURATION_MINUTES
                ),
            });
        }
        if settings.open_hour > 24 || settings.close_hour > 24 || settings.open_hour >= settings.close_hour {
            return Err(RegistryError::InvalidSettings {
                business_id,
                reason: format!(
                    "opening hours {}..{} are not a valid range",
                    settings.open_hour, settings.close_hour
                ),
            });
        }

        let calendar_id = settings
            .calendar_id
            .clone()
            .filter(|id| !id.trim().is_empty())
            .or_else(|| lookup(&settings.calendar_id_env).filter(|id| !id.trim().is_empty()))
            .ok_or_else(|| RegistryError::MissingEnv {
                business_id: business_id.clone(),
                var: settings.calendar_id_env.clone(),
            })?;

        let raw_key = lookup(&settings.credentials_env).ok_or_else(|| RegistryError::MissingEnv {
            business_id: business_id.clone(),
            var: settings.credentials_env.clone(),
        })?;
        let credentials = ServiceAccountCredentials::parse(&raw_key).map_err(|reason| {
            RegistryError::InvalidCredentials {
                business_id: business_id.clone(),
                reason,
            }
        })?;

        let timezone = Tz::from_str(&settings.timezone).map_err(|_| RegistryError::InvalidTimezone {
            business_id: business_id.clone(),
            timezone: settings.timezone.clone(),
        })?;

        Ok(Self {
            id: business_id,
            display_name: settings.display_name.clone(),
            calendar_id,
            credentials,
            timezone,
            default_duration_minutes: settings.default_duration_minutes,
            open_hour: settings.open_hour,
            close_hour: settings.close_hour,
        })
    }
}

/// Immutable mapping from business id to its configuration.
#[derive(Debug, Default)]
pub struct BusinessRegistry {
    businesses: HashMap<String, Arc<BusinessConfig>>,
}

impl BusinessRegistry {
    pub fn new(businesses: impl IntoIterator<Item = BusinessConfig>) -> Self {
        Self {
            businesses: businesses
                .into_iter()
                .map(|b| (b.id.clone(), Arc::new(b)))
                .collect(),
        }
    }

    /// Builds the registry from settings, reading secrets from the process environment.
    pub fn from_settings(settings: &[BusinessSettings]) -> Self {
        Self::from_settings_with(settings, |var| std::env::var(var).ok())
    }

    /// Builds the registry with an explicit environment lookup.
    ///
    /// Businesses that fail to resolve are logged and left out.
    pub fn from_settings_with<F>(settings: &[BusinessSettings], lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut businesses = HashMap::new();
        for entry in settings {
            match BusinessConfig::resolve(entry, &lookup) {
                Ok(business) => {
                    info!(
                        business_id = %business.id,
                        calendar_id = %business.calendar_id,
                        "Business configured: {}",
                        business.display_name
                    );
                    businesses.insert(business.id.clone(), Arc::new(business));
                }
                Err(e) => warn!("Skipping business configuration: {}", e),
            }
        }
        Self { businesses }
    }

    pub fn get(&self, business_id: &str) -> Option<Arc<BusinessConfig>> {
        self.businesses.get(business_id).cloned()
    }

    /// Configured business ids, sorted.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.businesses.keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<BusinessConfig>> {
        self.businesses.values()
    }

    pub fn len(&self) -> usize {
        self.businesses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.businesses.is_empty()
    }
}
