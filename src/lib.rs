//! # Paperboard Core Library
//!
//! Renders a weather and bus-departure summary into a byte-exact 1-bit BMP
//! sized for an 800x480 e-paper panel.
//!
//! ## Pipeline
//!
//! ```text
//! DisplayData ──► composer ──► Canvas ──► bmp::encode ──► Vec<u8> (48,062 bytes)
//!                    │
//!                    ├─► renderer::draw_text ──► font::lookup
//!                    └─► renderer::draw_horizontal_line
//! ```
//!
//! The rendering path (`font`, `canvas`, `renderer`, `bmp`, `composer`) is
//! pure and total: no I/O, no clock, no errors. Unknown characters render
//! blank and off-canvas pixels are clipped.
//!
//! The collaborator modules (`weather`, `transit`, `config`) talk to the
//! outside world, and [`fallback`] is the boundary between the two halves:
//! it is the only place where a missing value becomes placeholder text.
//! A [`DisplayData`] reaching the composer is always fully populated.

use serde::{Deserialize, Serialize};

pub mod bmp;
pub mod canvas;
pub mod composer;
pub mod config;
pub mod fallback;
pub mod font;
pub mod renderer;
pub mod transit;
pub mod weather;

#[cfg(test)]
mod tests;

/// Current conditions, already formatted for display.
///
/// Temperatures carry their unit, e.g. `"72°F"` or the `"??°F"`
/// placeholder. `city` is carried along but not drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weather {
    pub temperature: String,
    pub low: String,
    pub high: String,
    pub condition: String,
    pub city: String,
    /// Pre-formatted local time of the update, e.g. `"02:15 PM"`.
    pub time: String,
}

/// Next two departures from one stop, formatted for display
/// (e.g. `"2:20 PM"` or the `"--:--"` placeholder).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusPair {
    pub next: String,
    pub after: String,
}

/// Everything the board shows.
///
/// # Example
/// ```
/// use paperboard_lib::{composer, BusPair, DisplayData, Weather};
///
/// let data = DisplayData {
///     weather: Weather {
///         temperature: "72°F".into(),
///         low: "40°F".into(),
///         high: "75°F".into(),
///         condition: "Clear".into(),
///         city: "Boulder, CO".into(),
///         time: "02:15 PM".into(),
///     },
///     north_bus: BusPair { next: "2:20 PM".into(), after: "2:50 PM".into() },
///     south_bus: BusPair { next: "--:--".into(), after: "--:--".into() },
/// };
///
/// let bmp = composer::compose(&data);
/// assert_eq!(bmp.len(), 48_062);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayData {
    pub weather: Weather,
    pub north_bus: BusPair,
    pub south_bus: BusPair,
}
