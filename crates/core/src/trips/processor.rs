//! Trip collection processing
//!
//! Builds trips for a whole feed, tallies skipped events and drops
//! duplicates. The output keeps feed order; sorting is a presentation
//! concern (see [`super::sorter`]).

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDateTime;
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;
use tripscope_domain::{CalendarEvent, ImportConfig, Trip, TripCandidate};

use super::builder::{SkipReason, TripBuilder};

/// Trips built from one feed plus what was left out.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProcessedTrips {
    pub trips: Vec<Trip>,
    /// Skip counts keyed by [`SkipReason::kind`].
    pub skipped: BTreeMap<&'static str, usize>,
    pub duplicates_dropped: usize,
}

impl ProcessedTrips {
    #[must_use]
    pub fn skipped_total(&self) -> usize {
        self.skipped.values().sum()
    }
}

/// Runs the builder over a feed and deduplicates the result.
#[derive(Debug, Clone, Copy, Default)]
pub struct TripCollectionProcessor {
    builder: TripBuilder,
    parallel: bool,
}

impl TripCollectionProcessor {
    #[must_use]
    pub fn new(config: &ImportConfig) -> Self {
        Self { builder: TripBuilder::new(config), parallel: config.parallel }
    }

    #[must_use]
    pub fn with_builder(mut self, builder: TripBuilder) -> Self {
        self.builder = builder;
        self
    }

    /// Build, tally and deduplicate. Per-event failures never abort the batch.
    #[must_use]
    pub fn process(&self, events: &[CalendarEvent]) -> ProcessedTrips {
        let outcomes: Vec<Result<TripCandidate, SkipReason>> = if self.parallel {
            events.par_iter().map(|event| self.builder.build(event)).collect()
        } else {
            events.iter().map(|event| self.builder.build(event)).collect()
        };

        let mut skipped = BTreeMap::new();
        let mut candidates = Vec::with_capacity(outcomes.len());

        for (event, outcome) in events.iter().zip(outcomes) {
            match outcome {
                Ok(candidate) => candidates.push(Trip::from(candidate)),
                Err(reason) => {
                    debug!(
                        summary = %event.summary,
                        reason = %reason,
                        "trip_builder.event_skipped"
                    );
                    *skipped.entry(reason.kind()).or_insert(0) += 1;
                }
            }
        }

        let (trips, duplicates_dropped) = dedupe_trips(candidates);

        ProcessedTrips { trips, skipped, duplicates_dropped }
    }
}

/// Drop trips whose (title, start) key was already seen, keeping the first.
///
/// Returns the surviving trips in input order and the number dropped.
#[must_use]
pub fn dedupe_trips(trips: impl IntoIterator<Item = Trip>) -> (Vec<Trip>, usize) {
    let mut seen: HashSet<(String, NaiveDateTime)> = HashSet::new();
    let mut kept = Vec::new();
    let mut dropped = 0;

    for trip in trips {
        if seen.insert((trip.title.clone(), trip.start_date)) {
            kept.push(trip);
        } else {
            dropped += 1;
        }
    }

    (kept, dropped)
}
