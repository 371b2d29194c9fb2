//! Weather snapshot model and display helpers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of days in every synthesized forecast
pub const FORECAST_DAYS: usize = 5;

/// Fixed forecast day labels. The page never derives these from the
/// calendar; the third slot reads "Tuesday" regardless of the real date.
pub const DAY_LABELS: [&str; FORECAST_DAYS] =
    ["Today", "Tomorrow", "Tuesday", "Wednesday", "Thursday"];

/// Sky condition shown on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Condition {
    Sunny,
    Cloudy,
    Rainy,
    PartlyCloudy,
}

impl Condition {
    /// All conditions, in the order the synthesizer samples from
    pub const ALL: [Condition; 4] = [
        Condition::Sunny,
        Condition::Cloudy,
        Condition::Rainy,
        Condition::PartlyCloudy,
    ];

    /// Human-readable label for UI text
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Condition::Sunny => "sunny",
            Condition::Cloudy => "cloudy",
            Condition::Rainy => "rainy",
            Condition::PartlyCloudy => "partly cloudy",
        }
    }
}

/// One entry of the 5-day forecast
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastDay {
    /// Fixed day label from [`DAY_LABELS`]
    pub day: String,
    /// Daily high in Celsius
    pub high: i32,
    /// Daily low in Celsius
    pub low: i32,
    /// Sky condition for the day
    pub condition: Condition,
}

/// One complete synthesized weather reading plus its 5-day forecast.
///
/// Every numeric field is sampled independently; `feels_like` is not a
/// function of `temperature` and `humidity`. A snapshot fully replaces
/// the previous one on every city selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherSnapshot {
    /// Display name of the selected city
    pub city: String,
    /// Always "Sri Lanka"
    pub country: String,
    /// Current temperature in Celsius
    pub temperature: i32,
    /// Current sky condition
    pub condition: Condition,
    /// Relative humidity in percent
    pub humidity: i32,
    /// Wind speed in km/h
    pub wind_speed: i32,
    /// Visibility in km
    pub visibility: i32,
    /// Atmospheric pressure in hPa
    pub pressure: i32,
    /// UV index
    pub uv_index: i32,
    /// Perceived temperature in Celsius
    pub feels_like: i32,
    /// Exactly [`FORECAST_DAYS`] entries
    pub forecast: Vec<ForecastDay>,
    /// Server-side generation timestamp
    pub generated_at: DateTime<Utc>,
}

impl WeatherSnapshot {
    /// Format temperature with unit
    #[must_use]
    pub fn format_temperature(&self) -> String {
        format!("{}°C", self.temperature)
    }

    /// Format the condition line shown under the temperature
    #[must_use]
    pub fn format_condition(&self) -> String {
        format!("{}, feels like {}°C", self.condition.label(), self.feels_like)
    }
}
