//! Smart ordering of trips relative to "now"
//!
//! Current trips come first, then upcoming ones soonest first, then past
//! trips most recent first.

use chrono::NaiveDateTime;
use tripscope_domain::{Trip, TripStatus};

/// Where a trip sits relative to `now`. Bounds are inclusive for current.
#[must_use]
pub fn trip_status(trip: &Trip, now: NaiveDateTime) -> TripStatus {
    if trip.start_date <= now && now <= trip.end_date {
        TripStatus::Current
    } else if trip.start_date > now {
        TripStatus::Future
    } else {
        TripStatus::Past
    }
}

/// Trips split by status, each bucket already ordered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusPartition {
    pub current: Vec<Trip>,
    pub future: Vec<Trip>,
    pub past: Vec<Trip>,
}

impl StatusPartition {
    #[must_use]
    pub fn len(&self) -> usize {
        self.current.len() + self.future.len() + self.past.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Concatenate the buckets in display order.
    #[must_use]
    pub fn into_ordered(self) -> Vec<Trip> {
        let mut ordered = self.current;
        ordered.extend(self.future);
        ordered.extend(self.past);
        ordered
    }
}

/// Split and order trips. Every input trip lands in exactly one bucket.
#[must_use]
pub fn partition_by_status(
    trips: impl IntoIterator<Item = Trip>,
    now: NaiveDateTime,
) -> StatusPartition {
    let mut partition = StatusPartition::default();

    for trip in trips {
        match trip_status(&trip, now) {
            TripStatus::Current => partition.current.push(trip),
            TripStatus::Future => partition.future.push(trip),
            TripStatus::Past => partition.past.push(trip),
        }
    }

    partition.current.sort_by_key(|trip| trip.start_date);
    partition.future.sort_by_key(|trip| trip.start_date);
    partition.past.sort_by(|a, b| b.start_date.cmp(&a.start_date));

    partition
}

/// Current, then future ascending, then past descending.
#[must_use]
pub fn smart_sort(trips: impl IntoIterator<Item = Trip>, now: NaiveDateTime) -> Vec<Trip> {
    partition_by_status(trips, now).into_ordered()
}
