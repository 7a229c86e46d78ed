// --- File: crates/reservify_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type shared by the Reservify crates.
///
/// Crate-specific errors convert into this at crate boundaries (for example
/// the Google Calendar gateway maps its API errors to `ExternalServiceError`).
#[derive(Error, Debug)]
pub enum ReservifyError {
    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred during validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error occurred during external service call
    #[error("External service error: {service_name} - {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },

    /// Error occurred due to a resource not being found
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for ReservifyError {
    fn status_code(&self) -> u16 {
        match self {
            ReservifyError::ConfigError(_) => 500,
            ReservifyError::ValidationError(_) => 400,
            ReservifyError::ExternalServiceError { .. } => 502,
            ReservifyError::NotFoundError(_) => 404,
            ReservifyError::InternalError(_) => 500,
        }
    }
}

/// A trait for adding context to errors.
pub trait Context<T, E> {
    /// Adds context to an error.
    fn context<C>(self, context: C) -> Result<T, ReservifyError>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Adds context to an error with a lazy context provider.
    fn with_context<C, F>(self, f: F) -> Result<T, ReservifyError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E: std::error::Error + Send + Sync + 'static> Context<T, E> for Result<T, E> {
    fn context<C>(self, context: C) -> Result<T, ReservifyError>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|error| ReservifyError::InternalError(format!("{}: {}", context, error)))
    }

    fn with_context<C, F>(self, f: F) -> Result<T, ReservifyError>
    where
        C: fmt::Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        self.map_err(|error| ReservifyError::InternalError(format!("{}: {}", f(), error)))
    }
}

// Utility functions for error handling
pub fn config_error<T: fmt::Display>(message: T) -> ReservifyError {
    ReservifyError::ConfigError(message.to_string())
}

pub fn validation_error<T: fmt::Display>(message: T) -> ReservifyError {
    ReservifyError::ValidationError(message.to_string())
}

pub fn not_found<T: fmt::Display>(message: T) -> ReservifyError {
    ReservifyError::NotFoundError(message.to_string())
}

pub fn external_service_error<T: fmt::Display>(service_name: &str, message: T) -> ReservifyError {
    ReservifyError::ExternalServiceError {
        service_name: service_name.to_string(),
        message: message.to_string(),
    }
}

pub fn internal_error<T: fmt::Display>(message: T) -> ReservifyError {
    ReservifyError::InternalError(message.to_string())
}
