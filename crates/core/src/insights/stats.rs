//! Headline statistics for a trip collection

use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::Serialize;
use tripscope_domain::Trip;

/// How many trips went to one destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DestinationCount {
    pub destination: String,
    pub count: usize,
}

/// The soonest trip that has not started yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextTrip {
    pub title: String,
    pub destination: String,
    pub start_date: NaiveDateTime,
    pub days_until: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripSummary {
    pub total_trips: usize,
    pub unique_destinations: usize,
    pub total_nights: i64,
    /// Mean `duration_days`; `None` for an empty collection.
    pub average_duration: Option<f64>,
    pub most_visited: Option<DestinationCount>,
    pub next_trip: Option<NextTrip>,
}

/// Destination visit counts, most visited first. Ties keep the order in
/// which destinations first appear.
#[must_use]
pub fn destination_counts(trips: &[Trip]) -> Vec<DestinationCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<DestinationCount> = Vec::new();

    for trip in trips {
        match index.get(trip.destination.as_str()) {
            Some(&slot) => counts[slot].count += 1,
            None => {
                index.insert(&trip.destination, counts.len());
                counts.push(DestinationCount { destination: trip.destination.clone(), count: 1 });
            }
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Compute the headline numbers as of `now`.
#[must_use]
pub fn summarize(trips: &[Trip], now: NaiveDateTime) -> TripSummary {
    let counts = destination_counts(trips);
    let total_nights: i64 = trips.iter().map(|trip| trip.duration_days).sum();

    #[allow(clippy::cast_precision_loss)]
    let average_duration = (!trips.is_empty()).then(|| total_nights as f64 / trips.len() as f64);

    let next_trip = trips
        .iter()
        .filter(|trip| trip.start_date > now)
        .min_by_key(|trip| trip.start_date)
        .map(|trip| NextTrip {
            title: trip.title.clone(),
            destination: trip.destination.clone(),
            start_date: trip.start_date,
            days_until: (trip.start_date - now).num_days(),
        });

    TripSummary {
        total_trips: trips.len(),
        unique_destinations: counts.len(),
        total_nights,
        average_duration,
        most_visited: counts.into_iter().next(),
        next_trip,
    }
}
