use crate::{models::trip::TripRecord, services::locations::LocationStore};

/// Answers "which registered trips are relevant to a rider travelling from X
/// to Y" with a loose substring policy over the route's free-text fields.
/// Origin and destination are tested independently: a trip matching only the
/// origin side is still returned.
#[derive(Clone)]
pub struct RouteMatcher {
    store: LocationStore,
}

impl RouteMatcher {
    pub fn new(store: LocationStore) -> Self {
        Self { store }
    }

    /// Scans the current snapshot and returns matching trips ordered
    /// ascending by driver id (lexicographic, the sole ordering key).
    pub async fn find_buses(&self, current_location: &str, destination: &str) -> Vec<TripRecord> {
        let current_location = current_location.to_lowercase();
        let destination = destination.to_lowercase();

        let mut matches: Vec<TripRecord> = self
            .store
            .snapshot()
            .await
            .into_iter()
            .filter(|trip| covers(trip, &current_location) || covers(trip, &destination))
            .collect();

        matches.sort_by(|a, b| a.driver_id.cmp(&b.driver_id));
        matches
    }
}

/// True when `needle` is a substring of the trip's start, end, or any major
/// city, compared case-insensitively. Stored casing is never mutated; an
/// empty needle matches everything.
fn covers(trip: &TripRecord, needle: &str) -> bool {
    trip.start.to_lowercase().contains(needle)
        || trip.end.to_lowercase().contains(needle)
        || trip
            .major_cities
            .iter()
            .any(|city| city.to_lowercase().contains(needle))
}
