//! `LankaWeather` - Weather display service for Sri Lankan cities
//!
//! This library provides the city directory and search filter, the mock
//! weather synthesizer, the selection state machine, and the HTTP API
//! (including the OpenWeatherMap proxy route) consumed by the web page.

pub mod api;
pub mod config;
pub mod directory;
pub mod error;
pub mod models;
pub mod station;
pub mod synth;
pub mod upstream;
pub mod web;

// Re-export core types for public API
pub use config::AppConfig;
pub use error::WeatherAppError;
pub use models::{Condition, ForecastDay, WeatherSnapshot};
pub use station::{Station, Status};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, WeatherAppError>;
