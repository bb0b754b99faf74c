use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A driver's currently active route and live position. Exactly one record
/// exists per driver at any time; a new submission replaces the old record
/// wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRecord {
    pub driver_id: String,
    pub start: String,
    pub end: String,
    pub major_cities: Vec<String>,
    pub plate: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timestamp: DateTime<Utc>,
}

/// Trip submission as it arrives over the wire. `major_cities` is a single
/// comma-separated string until [`TripRecord::from_submission`] splits it.
#[derive(Debug, Clone, Deserialize)]
pub struct TripSubmission {
    pub driver_id: String,
    pub start: String,
    pub end: String,
    pub major_cities: String,
    pub plate: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl TripRecord {
    /// Builds the stored record, stamping the server clock. The timestamp is
    /// display-only and never drives ordering or eviction.
    pub fn from_submission(submission: TripSubmission) -> Self {
        Self {
            driver_id: submission.driver_id,
            start: submission.start,
            end: submission.end,
            major_cities: split_major_cities(&submission.major_cities),
            plate: submission.plate,
            latitude: submission.latitude,
            longitude: submission.longitude,
            timestamp: Utc::now(),
        }
    }
}

/// Splits on commas and trims each entry. Empty entries are kept: a trailing
/// comma yields an empty-string city, which still participates in matching.
pub fn split_major_cities(input: &str) -> Vec<String> {
    input.split(',').map(|city| city.trim().to_string()).collect()
}
