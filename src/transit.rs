//! # Bus Departures from RTD NextRide
//!
//! Fetches upcoming trips for a stop and reduces them to a sorted list
//! of departure instants (epoch milliseconds). Predicted times win over
//! scheduled ones; trips already departed are dropped.
//!
//! Formatting and the `"--:--"` placeholder for missing departures belong
//! to [`crate::fallback`], not here.

use log::debug;
use serde::Deserialize;
use thiserror::Error;

const NEXTRIDE_URL: &str = "https://nodejs-prod.rtd-denver.com/api/v2/nextride/stops";

/// Errors that can occur while fetching departures.
#[derive(Error, Debug)]
pub enum TransitError {
    /// HTTP request failed (network, timeout, or body decoding)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("RTD API error: {0}")]
    Status(u16),
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct StopResponse {
    #[serde(default)]
    branches: Vec<Branch>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Branch {
    #[serde(default)]
    upcoming_trips: Vec<Trip>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Trip {
    predicted_departure_time: Option<i64>,
    scheduled_departure_time: Option<i64>,
}

impl Trip {
    fn departure(&self) -> Option<i64> {
        self.predicted_departure_time
            .or(self.scheduled_departure_time)
    }
}

/// All departures after `now_ms` across every branch, earliest first.
pub(crate) fn upcoming(response: &StopResponse, now_ms: i64) -> Vec<i64> {
    let mut departures: Vec<i64> = response
        .branches
        .iter()
        .flat_map(|branch| branch.upcoming_trips.iter())
        .filter_map(Trip::departure)
        .filter(|&time| time > now_ms)
        .collect();
    departures.sort_unstable();
    departures
}

/// Fetch upcoming departures for `stop_id`, earliest first.
pub async fn fetch(
    client: &reqwest::Client,
    stop_id: &str,
    now_ms: i64,
) -> Result<Vec<i64>, TransitError> {
    let url = format!("{NEXTRIDE_URL}/{stop_id}");
    let response = client.get(&url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(TransitError::Status(status.as_u16()));
    }

    let stop: StopResponse = response.json().await?;
    let departures = upcoming(&stop, now_ms);
    debug!("Stop {}: {} upcoming departures", stop_id, departures.len());
    Ok(departures)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_753_388_100_000;

    #[test]
    fn test_prefers_predicted_and_sorts_across_branches() {
        let json = format!(
            r#"{{
                "branches": [
                    {{ "upcomingTrips": [
                        {{ "predictedDepartureTime": {b}, "scheduledDepartureTime": {a} }},
                        {{ "scheduledDepartureTime": {d} }}
                    ] }},
                    {{ "upcomingTrips": [
                        {{ "predictedDepartureTime": {c} }}
                    ] }}
                ]
            }}"#,
            a = NOW + 60_000,
            b = NOW + 120_000,
            c = NOW + 90_000,
            d = NOW + 30 * 60_000,
        );
        let stop: StopResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(
            upcoming(&stop, NOW),
            vec![NOW + 90_000, NOW + 120_000, NOW + 30 * 60_000]
        );
    }

    #[test]
    fn test_drops_past_and_timeless_trips() {
        let json = format!(
            r#"{{ "branches": [ {{ "upcomingTrips": [
                {{ "predictedDepartureTime": {past} }},
                {{ "predictedDepartureTime": {now} }},
                {{ "predictedDepartureTime": null, "scheduledDepartureTime": null }},
                {{ "scheduledDepartureTime": {future} }}
            ] }} ] }}"#,
            past = NOW - 1,
            now = NOW,
            future = NOW + 1,
        );
        let stop: StopResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(upcoming(&stop, NOW), vec![NOW + 1]);
    }

    #[test]
    fn test_missing_branches() {
        let stop: StopResponse = serde_json::from_str("{}").unwrap();
        assert!(upcoming(&stop, NOW).is_empty());

        let stop: StopResponse =
            serde_json::from_str(r#"{ "branches": [ {} ] }"#).unwrap();
        assert!(upcoming(&stop, NOW).is_empty());
    }
}
