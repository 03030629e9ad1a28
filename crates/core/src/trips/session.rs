//! In-process trip session
//!
//! Holds the collection from earlier imports so a later feed can be merged
//! into it. Nothing here is persisted.

use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::info;
use tripscope_domain::Trip;

use super::processor::dedupe_trips;

/// What a merge did with the incoming trips.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MergeOutcome {
    pub added: usize,
    /// Trips starting before the newest retained trip.
    pub below_high_water: usize,
    pub duplicates: usize,
}

/// Retained trip collection for the lifetime of the process.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripSession {
    trips: Vec<Trip>,
}

impl TripSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session from an existing collection, deduplicating it.
    #[must_use]
    pub fn load(trips: Vec<Trip>) -> Self {
        let (trips, _) = dedupe_trips(trips);
        Self { trips }
    }

    #[must_use]
    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }

    /// Newest start date among retained trips.
    #[must_use]
    pub fn high_water_mark(&self) -> Option<NaiveDateTime> {
        self.trips.iter().map(|trip| trip.start_date).max()
    }

    /// Merge freshly processed trips into the session.
    ///
    /// Incoming trips are appended and deduplicated by (title, start),
    /// retained trips winning. The high-water mark is only reported: trips
    /// starting before it are counted but still merged.
    pub fn merge(&mut self, fresh: Vec<Trip>) -> MergeOutcome {
        let high_water = self.high_water_mark();
        let incoming = fresh.len();
        let below_high_water = high_water.map_or(0, |mark| {
            fresh.iter().filter(|trip| trip.start_date < mark).count()
        });

        let retained = self.trips.len();
        let (merged, duplicates) =
            dedupe_trips(std::mem::take(&mut self.trips).into_iter().chain(fresh));
        self.trips = merged;

        let outcome =
            MergeOutcome { added: self.trips.len() - retained, below_high_water, duplicates };

        info!(
            incoming,
            added = outcome.added,
            below_high_water = outcome.below_high_water,
            duplicates = outcome.duplicates,
            "trip_session.merged"
        );

        outcome
    }

    /// Hand the collection to the caller, leaving the session empty.
    pub fn take(&mut self) -> Vec<Trip> {
        std::mem::take(&mut self.trips)
    }
}
