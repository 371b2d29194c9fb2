//! Error types and handling for the `LankaWeather` service

use thiserror::Error;

/// Main error type for the `LankaWeather` service
#[derive(Error, Debug)]
pub enum WeatherAppError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Upstream weather provider errors
    #[error("Upstream error: {message}")]
    Upstream { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl WeatherAppError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new upstream error
    pub fn upstream<S: Into<String>>(message: S) -> Self {
        Self::Upstream {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            WeatherAppError::Config { .. } => {
                "Configuration error. Please check your environment and API key.".to_string()
            }
            WeatherAppError::Upstream { .. } => "Failed to fetch weather data".to_string(),
            WeatherAppError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            WeatherAppError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            WeatherAppError::General { message } => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = WeatherAppError::config("missing API key");
        assert!(matches!(config_err, WeatherAppError::Config { .. }));

        let upstream_err = WeatherAppError::upstream("connection failed");
        assert!(matches!(upstream_err, WeatherAppError::Upstream { .. }));

        let validation_err = WeatherAppError::validation("unknown city");
        assert!(matches!(validation_err, WeatherAppError::Validation { .. }));
    }

    #[test]
    fn test_user_messages() {
        let config_err = WeatherAppError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let upstream_err = WeatherAppError::upstream("test");
        assert_eq!(upstream_err.user_message(), "Failed to fetch weather data");

        let validation_err = WeatherAppError::validation("test input");
        assert!(validation_err.user_message().contains("test input"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let app_err: WeatherAppError = io_err.into();
        assert!(matches!(app_err, WeatherAppError::Io { .. }));
    }
}
