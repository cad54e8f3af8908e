//! # Current Weather from Open-Meteo
//!
//! Fetches the current temperature, WMO weather code and today's
//! high/low for the configured location. Open-Meteo needs no API key and
//! answers in well under a second, so there is no cache.
//!
//! The response also carries the location's UTC offset. The board formats
//! times in the configured zone and only checks this offset against it.
//!
//! All errors propagate through [`WeatherError`]; callers are expected to
//! fall back to placeholders (see [`crate::fallback`]).

use crate::config::LocationConfig;
use log::debug;
use serde::Deserialize;
use thiserror::Error;

const FORECAST_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Errors that can occur while fetching the forecast.
#[derive(Error, Debug)]
pub enum WeatherError {
    /// HTTP request failed (network, timeout, or body decoding)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("weather API error: {0}")]
    Status(u16),

    /// Response lacked today's daily values
    #[error("forecast response missing daily values")]
    MissingDaily,
}

/// Rounded current conditions for one location.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Conditions {
    pub temperature_f: i32,
    pub low_f: i32,
    pub high_f: i32,
    /// WMO weather interpretation code
    pub code: u16,
    /// Offset of the location's local time from UTC
    pub utc_offset_seconds: i32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ForecastResponse {
    #[serde(default)]
    utc_offset_seconds: i32,
    current: Current,
    daily: Daily,
}

#[derive(Debug, Deserialize)]
struct Current {
    temperature_2m: f64,
    weather_code: u16,
}

#[derive(Debug, Deserialize)]
struct Daily {
    temperature_2m_max: Vec<f64>,
    temperature_2m_min: Vec<f64>,
}

impl ForecastResponse {
    pub(crate) fn into_conditions(self) -> Result<Conditions, WeatherError> {
        let high = *self
            .daily
            .temperature_2m_max
            .first()
            .ok_or(WeatherError::MissingDaily)?;
        let low = *self
            .daily
            .temperature_2m_min
            .first()
            .ok_or(WeatherError::MissingDaily)?;

        Ok(Conditions {
            temperature_f: round_f(self.current.temperature_2m),
            low_f: round_f(low),
            high_f: round_f(high),
            code: self.current.weather_code,
            utc_offset_seconds: self.utc_offset_seconds,
        })
    }
}

/// Round to the nearest whole degree, halves toward positive infinity.
fn round_f(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// Fetch current conditions for `location`.
pub async fn fetch(
    client: &reqwest::Client,
    location: &LocationConfig,
) -> Result<Conditions, WeatherError> {
    let response = client
        .get(FORECAST_URL)
        .query(&[
            ("latitude", location.latitude.to_string()),
            ("longitude", location.longitude.to_string()),
            ("current", "temperature_2m,weather_code".to_string()),
            (
                "daily",
                "temperature_2m_max,temperature_2m_min".to_string(),
            ),
            ("temperature_unit", "fahrenheit".to_string()),
            ("timezone", location.timezone.clone()),
        ])
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(WeatherError::Status(status.as_u16()));
    }

    let forecast: ForecastResponse = response.json().await?;
    debug!("Forecast response: {:?}", forecast);
    forecast.into_conditions()
}

/// Short label for a WMO weather code; unknown codes read "Unknown".
pub fn describe(code: u16) -> &'static str {
    match code {
        0 => "Clear",
        1 => "Mostly Clear",
        2 => "Partly Cloudy",
        3 => "Overcast",
        45 | 48 => "Foggy",
        51 => "Light Drizzle",
        53 => "Drizzle",
        55 => "Heavy Drizzle",
        61 => "Light Rain",
        63 => "Rain",
        65 => "Heavy Rain",
        66 | 67 => "Freezing Rain",
        71 => "Light Snow",
        73 => "Snow",
        75 => "Heavy Snow",
        77 => "Snow Grains",
        80 => "Light Showers",
        81 => "Showers",
        82 => "Heavy Showers",
        85 => "Snow Showers",
        86 => "Heavy Snow Showers",
        95 => "Thunderstorm",
        96 | 99 => "Thunderstorm w/ Hail",
        _ => "Unknown",
    }
}

/// Render a whole-degree Fahrenheit value the way the board shows it.
pub fn format_fahrenheit(degrees: i32) -> String {
    format!("{degrees}°F")
}
