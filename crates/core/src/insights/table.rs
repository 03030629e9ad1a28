//! Filtered and re-sorted trip table

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tripscope_domain::{impl_domain_label_conversions, Trip, TripStatus};

use crate::trips::{smart_sort, trip_status};

/// Row orderings offered by the trip table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TripSortOrder {
    /// Current, then upcoming, then past.
    #[default]
    NextUpcoming,
    /// Closest start date to today, in either direction.
    MostRecent,
    OldestFirst,
    LongestDuration,
    DestinationAz,
}

impl_domain_label_conversions!(TripSortOrder {
    NextUpcoming => "next-upcoming",
    MostRecent => "most-recent",
    OldestFirst => "oldest-first",
    LongestDuration => "longest-duration",
    DestinationAz => "destination-az",
});

/// Row filter; `None` fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripFilter {
    pub destination: Option<String>,
    pub year: Option<i32>,
}

impl TripFilter {
    #[must_use]
    pub fn matches(&self, trip: &Trip) -> bool {
        self.destination.as_deref().map_or(true, |d| trip.destination == d)
            && self.year.map_or(true, |y| trip.year() == y)
    }
}

/// One displayed table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TripRow {
    pub status: TripStatus,
    pub title: String,
    pub destination: String,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub nights: i64,
}

/// Values offered by the destination and year filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    /// Alphabetical.
    pub destinations: Vec<String>,
    /// Newest first.
    pub years: Vec<i32>,
}

#[must_use]
pub fn filter_options(trips: &[Trip]) -> FilterOptions {
    let mut destinations: Vec<String> = trips.iter().map(|trip| trip.destination.clone()).collect();
    destinations.sort();
    destinations.dedup();

    let mut years: Vec<i32> = trips.iter().map(Trip::year).collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();

    FilterOptions { destinations, years }
}

/// Filter, order and label trips for display. All orderings are stable.
#[must_use]
pub fn trip_table(
    trips: &[Trip],
    filter: &TripFilter,
    order: TripSortOrder,
    now: NaiveDateTime,
) -> Vec<TripRow> {
    let mut selected: Vec<Trip> =
        trips.iter().filter(|trip| filter.matches(trip)).cloned().collect();

    match order {
        TripSortOrder::NextUpcoming => selected = smart_sort(selected, now),
        TripSortOrder::MostRecent => {
            selected.sort_by_key(|trip| (trip.start_date - now).num_days().abs());
        }
        TripSortOrder::OldestFirst => selected.sort_by_key(|trip| trip.start_date),
        TripSortOrder::LongestDuration => {
            selected.sort_by(|a, b| b.duration_days.cmp(&a.duration_days));
        }
        TripSortOrder::DestinationAz => selected.sort_by(|a, b| a.destination.cmp(&b.destination)),
    }

    selected
        .into_iter()
        .map(|trip| TripRow {
            status: trip_status(&trip, now),
            title: trip.title,
            destination: trip.destination,
            start_date: trip.start_date,
            end_date: trip.end_date,
            nights: trip.duration_days,
        })
        .collect()
}
