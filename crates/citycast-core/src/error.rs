//! Centralized error types for the CityCast application.
//!
//! This module provides a typed error hierarchy that:
//! - Enables precise error handling throughout the codebase
//! - Provides user-friendly messages suitable for display
//! - Preserves full error context for debugging/logging

use thiserror::Error;

/// Message shown when the provider has no match for the requested city.
pub const CITY_NOT_FOUND_MESSAGE: &str = "City not found. It may be a small village or misspelled.";

/// Message shown for every other lookup failure.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again later.";

/// Top-level application error type.
///
/// All errors in the CityCast application should be convertible to this type.
/// Use `user_message()` to get a display-appropriate message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Weather service error: {0}")]
    Weather(#[from] WeatherError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Returns a user-friendly message suitable for display.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Network(e) => e.user_message(),
            AppError::Storage(e) => e.user_message(),
            AppError::Config(e) => e.user_message(),
            AppError::Weather(e) => e.user_message(),
            AppError::Io(_) => "A file operation failed. Please try again.",
            AppError::Other(_) => GENERIC_FAILURE_MESSAGE,
        }
    }

    /// Recover a typed error from an `anyhow` chain built at the application edge.
    pub fn classify(err: anyhow::Error) -> Self {
        match err.downcast::<ConfigError>() {
            Ok(config) => AppError::Config(config),
            Err(err) => AppError::Other(err),
        }
    }
}

/// Network-related errors (HTTP, connectivity).
///
/// The variants keep the detail for logs; on screen every one of them is the
/// same generic failure.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl NetworkError {
    pub fn user_message(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed(_)
            | NetworkError::Timeout
            | NetworkError::ServerError { .. }
            | NetworkError::InvalidResponse(_) => GENERIC_FAILURE_MESSAGE,
        }
    }
}

/// Local key-value storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to write local store: {0}")]
    WriteFailed(String),
}

impl StorageError {
    pub fn user_message(&self) -> &'static str {
        match self {
            StorageError::WriteFailed(_) => "Failed to save your cities. Please try again.",
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Configuration parse error: {0}")]
    ParseError(String),
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::Invalid(_) => "Invalid configuration. Check your settings.",
            ConfigError::ParseError(_) => "Configuration file is malformed. Check your settings.",
        }
    }
}

/// Weather lookup errors, as surfaced to the user.
///
/// Only two classes are distinguished on screen: the provider had no match
/// for the city, or anything else went wrong.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("City not found: {0}")]
    CityNotFound(String),

    #[error("Missing API key")]
    MissingApiKey,
}

impl WeatherError {
    pub fn user_message(&self) -> &'static str {
        match self {
            WeatherError::CityNotFound(_) => CITY_NOT_FOUND_MESSAGE,
            WeatherError::MissingApiKey => GENERIC_FAILURE_MESSAGE,
        }
    }
}

/// Extension trait for converting reqwest errors to our error types.
pub trait ReqwestErrorExt {
    fn into_network_error(self) -> NetworkError;
}

impl ReqwestErrorExt for reqwest::Error {
    fn into_network_error(self) -> NetworkError {
        if self.is_timeout() {
            NetworkError::Timeout
        } else if self.is_decode() {
            NetworkError::InvalidResponse(self.to_string())
        } else if let Some(status) = self.status() {
            NetworkError::ServerError {
                status: status.as_u16(),
                message: self.to_string(),
            }
        } else {
            NetworkError::ConnectionFailed(self.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages_are_non_empty() {
        let errors: Vec<AppError> = vec![
            NetworkError::Timeout.into(),
            StorageError::WriteFailed("disk full".into()).into(),
            ConfigError::Invalid("test".into()).into(),
            WeatherError::MissingApiKey.into(),
        ];

        for err in errors {
            assert!(!err.user_message().is_empty(), "empty message for {err}");
        }
    }

    #[test]
    fn test_city_not_found_message() {
        let err = AppError::Weather(WeatherError::CityNotFound("Atlantis".into()));
        assert_eq!(err.user_message(), CITY_NOT_FOUND_MESSAGE);
    }

    #[test]
    fn test_missing_key_uses_generic_message() {
        let err = AppError::Weather(WeatherError::MissingApiKey);
        assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
    }

    #[test]
    fn test_app_error_conversion() {
        let err: AppError = NetworkError::Timeout.into();
        assert!(matches!(err, AppError::Network(NetworkError::Timeout)));
    }

    #[test]
    fn test_every_network_error_shows_generic_message() {
        let errors = [
            NetworkError::ConnectionFailed("refused".into()),
            NetworkError::Timeout,
            NetworkError::ServerError {
                status: 503,
                message: String::new(),
            },
            NetworkError::ServerError {
                status: 400,
                message: String::new(),
            },
            NetworkError::InvalidResponse("eof".into()),
        ];
        for err in errors {
            assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE, "{err}");
        }
    }

    #[test]
    fn test_classify_recovers_config_error() {
        let err: anyhow::Error = ConfigError::Invalid("weather.base_url".into()).into();
        let app = AppError::classify(err);
        assert!(matches!(app, AppError::Config(ConfigError::Invalid(_))));
        assert_eq!(app.user_message(), "Invalid configuration. Check your settings.");

        let other = AppError::classify(anyhow::anyhow!("no home directory"));
        assert!(matches!(other, AppError::Other(_)));
        assert_eq!(other.user_message(), GENERIC_FAILURE_MESSAGE);
    }
}
