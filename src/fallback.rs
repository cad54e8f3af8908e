//! # Placeholder Fallback
//!
//! The boundary between the network collaborators and the renderer. The
//! composer only accepts a fully populated [`DisplayData`]; this module is
//! where every missing value turns into visible placeholder text:
//!
//! | Missing | Shown as |
//! |---------|----------|
//! | weather (any failure) | `??°F` for all three temperatures, `Unknown` condition |
//! | next / following bus | `--:--` |
//!
//! It also owns time formatting: the update time uses a two-digit hour
//! (`02:15 PM`), departures a bare hour (`2:20 PM`), both in the zone
//! carried by the `now` the caller passes in.

use crate::weather::{self, Conditions};
use crate::{BusPair, DisplayData, Weather};
use chrono::{DateTime, Offset, TimeZone, Utc};
use std::fmt;

/// Temperature shown when the forecast is unavailable.
pub const MISSING_TEMPERATURE: &str = "??°F";

/// Condition shown when the forecast is unavailable.
pub const UNKNOWN_CONDITION: &str = "Unknown";

/// Departure shown when fewer than two buses are coming.
pub const MISSING_DEPARTURE: &str = "--:--";

/// Build the weather record, substituting placeholders when `conditions`
/// is `None`.
pub fn weather_record<Tz>(conditions: Option<&Conditions>, city: &str, now: &DateTime<Tz>) -> Weather
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let time = now.format("%I:%M %p").to_string();
    match conditions {
        Some(c) => Weather {
            temperature: weather::format_fahrenheit(c.temperature_f),
            low: weather::format_fahrenheit(c.low_f),
            high: weather::format_fahrenheit(c.high_f),
            condition: weather::describe(c.code).to_string(),
            city: city.to_string(),
            time,
        },
        None => Weather {
            temperature: MISSING_TEMPERATURE.to_string(),
            low: MISSING_TEMPERATURE.to_string(),
            high: MISSING_TEMPERATURE.to_string(),
            condition: UNKNOWN_CONDITION.to_string(),
            city: city.to_string(),
            time,
        },
    }
}

/// Format the first two of `departures` (epoch ms, earliest first) in
/// `zone`, padding with placeholders.
pub fn bus_pair<Tz>(departures: &[i64], zone: &Tz) -> BusPair
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let slot = |index: usize| {
        departures
            .get(index)
            .and_then(|&ms| format_departure(ms, zone))
            .unwrap_or_else(|| MISSING_DEPARTURE.to_string())
    };
    BusPair {
        next: slot(0),
        after: slot(1),
    }
}

fn format_departure<Tz>(epoch_ms: i64, zone: &Tz) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let utc = DateTime::from_timestamp_millis(epoch_ms)?;
    Some(utc.with_timezone(zone).format("%-I:%M %p").to_string())
}

/// Assemble a complete [`DisplayData`] from whatever the collaborators
/// managed to fetch. Every time on the board is shown in `now`'s zone.
pub fn resolve<Tz>(
    conditions: Option<&Conditions>,
    north: &[i64],
    south: &[i64],
    city: &str,
    now: DateTime<Tz>,
) -> DisplayData
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let zone = now.timezone();
    DisplayData {
        weather: weather_record(conditions, city, &now),
        north_bus: bus_pair(north, &zone),
        south_bus: bus_pair(south, &zone),
    }
}

/// True if `zone` is `conditions.utc_offset_seconds` east of UTC at `at`.
///
/// A mismatch means the configured zone and the forecast location
/// disagree; the board still renders in `zone`.
pub fn offset_agrees<Tz: TimeZone>(zone: &Tz, conditions: &Conditions, at: DateTime<Utc>) -> bool {
    let offset = zone.offset_from_utc_datetime(&at.naive_utc()).fix();
    offset.local_minus_utc() == conditions.utc_offset_seconds
}
