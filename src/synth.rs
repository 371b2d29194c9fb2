//! Mock weather synthesizer
//!
//! Produces a fresh [`WeatherSnapshot`] for a city name, every numeric
//! field drawn independently from a uniform integer distribution over a
//! fixed inclusive range. Deliberately non-deterministic in production:
//! two calls for the same city will almost never agree. Tests inject a
//! seeded generator through [`synthesize_with`].

use chrono::Utc;
use rand::RngExt;

use crate::models::{Condition, DAY_LABELS, ForecastDay, WeatherSnapshot};

/// Country shown for every city in the directory
pub const COUNTRY: &str = "Sri Lanka";

/// Synthesize a snapshot using the given random source.
///
/// Pure for a fixed generator state; all randomness flows through `rng`.
pub fn synthesize_with<R: RngExt + ?Sized>(rng: &mut R, city: &str) -> WeatherSnapshot {
    WeatherSnapshot {
        city: city.to_string(),
        country: COUNTRY.to_string(),
        temperature: rng.random_range(25..=34),
        condition: pick_condition(rng),
        humidity: rng.random_range(60..=89),
        wind_speed: rng.random_range(5..=19),
        visibility: rng.random_range(8..=12),
        pressure: rng.random_range(1005..=1024),
        uv_index: rng.random_range(3..=10),
        feels_like: rng.random_range(28..=35),
        forecast: DAY_LABELS
            .iter()
            .map(|day| ForecastDay {
                day: (*day).to_string(),
                high: rng.random_range(28..=35),
                low: rng.random_range(22..=26),
                condition: pick_condition(rng),
            })
            .collect(),
        generated_at: Utc::now(),
    }
}

/// Synthesize a snapshot from the thread-local generator. No seed control;
/// repeated calls with the same city produce different results by design.
#[tracing::instrument(level = "debug")]
pub fn synthesize(city: &str) -> WeatherSnapshot {
    synthesize_with(&mut rand::rng(), city)
}

fn pick_condition<R: RngExt + ?Sized>(rng: &mut R) -> Condition {
    Condition::ALL[rng.random_range(0..Condition::ALL.len())]
}
