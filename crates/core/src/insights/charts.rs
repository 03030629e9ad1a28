//! Chart-ready aggregates
//!
//! Rendering is left to the caller; these functions only shape the data.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDateTime};
use serde::Serialize;
use tripscope_domain::constants::{
    MONTHLY_FALLBACK_LIMIT, MONTHLY_WINDOW_DAYS, TIMELINE_LIMIT, TOP_DESTINATIONS_LIMIT,
};
use tripscope_domain::{Trip, TripStatus};

use super::stats::{destination_counts, DestinationCount};
use crate::trips::{smart_sort, trip_status};

/// Trips starting in one calendar month (`YYYY-MM`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyCount {
    pub month: String,
    pub count: usize,
}

/// One bar on the trip timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    pub title: String,
    pub destination: String,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub duration_days: i64,
    pub status: TripStatus,
}

/// The ten most visited destinations.
#[must_use]
pub fn top_destinations(trips: &[Trip]) -> Vec<DestinationCount> {
    let mut counts = destination_counts(trips);
    counts.truncate(TOP_DESTINATIONS_LIMIT);
    counts
}

/// Trips per month over the last year, oldest month first.
///
/// When nothing started within the window, the first twenty trips of the
/// collection are counted instead so the chart is never blank for old
/// calendars.
#[must_use]
pub fn monthly_counts(trips: &[Trip], now: NaiveDateTime) -> Vec<MonthlyCount> {
    let cutoff = now - Duration::days(MONTHLY_WINDOW_DAYS);
    let recent: Vec<&Trip> = trips.iter().filter(|trip| trip.start_date >= cutoff).collect();

    let window: Vec<&Trip> = if recent.is_empty() {
        trips.iter().take(MONTHLY_FALLBACK_LIMIT).collect()
    } else {
        recent
    };

    let mut months: BTreeMap<String, usize> = BTreeMap::new();
    for trip in window {
        *months.entry(trip.start_date.format("%Y-%m").to_string()).or_insert(0) += 1;
    }

    months.into_iter().map(|(month, count)| MonthlyCount { month, count }).collect()
}

/// The twenty most relevant trips in smart-sort order.
#[must_use]
pub fn timeline(trips: &[Trip], now: NaiveDateTime) -> Vec<TimelineEntry> {
    smart_sort(trips.to_vec(), now)
        .into_iter()
        .take(TIMELINE_LIMIT)
        .map(|trip| TimelineEntry {
            status: trip_status(&trip, now),
            title: trip.title,
            destination: trip.destination,
            start_date: trip.start_date,
            end_date: trip.end_date,
            duration_days: trip.duration_days,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tripscope_domain::TripCandidate;

    use super::*;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(0, 0, 0).unwrap()
    }

    fn trip(destination: &str, start: NaiveDateTime) -> Trip {
        Trip::from(TripCandidate {
            title: destination.into(),
            original_title: destination.into(),
            start_date: start,
            end_date: start,
            location: String::new(),
            description: String::new(),
            destination: destination.into(),
            travel_score: 1,
            has_booking_platform: false,
        })
    }

    #[test]
    fn top_destinations_caps_at_ten() {
        let trips: Vec<Trip> =
            (1..=12).map(|d| trip(&format!("City {d}"), at(2024, 1, d))).collect();
        assert_eq!(top_destinations(&trips).len(), TOP_DESTINATIONS_LIMIT);
    }

    #[test]
    fn monthly_counts_cover_last_year() {
        let trips = vec![
            trip("Old", at(2022, 1, 1)),
            trip("Rome", at(2024, 3, 2)),
            trip("Oslo", at(2024, 3, 20)),
            trip("Lima", at(2024, 5, 1)),
        ];

        let months = monthly_counts(&trips, at(2024, 6, 1));

        assert_eq!(
            months,
            vec![
                MonthlyCount { month: "2024-03".into(), count: 2 },
                MonthlyCount { month: "2024-05".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn monthly_counts_fall_back_for_old_calendars() {
        let trips = vec![trip("Old", at(2019, 1, 1)), trip("Older", at(2018, 7, 1))];
        let months = monthly_counts(&trips, at(2024, 6, 1));

        assert_eq!(months.len(), 2);
        assert_eq!(months[0].month, "2018-07");
    }

    #[test]
    fn timeline_is_smart_sorted_and_capped() {
        let mut trips: Vec<Trip> =
            (1..=25).map(|d| trip(&format!("Past {d}"), at(2023, 1, d))).collect();
        trips.push(trip("Soon", at(2024, 7, 1)));

        let entries = timeline(&trips, at(2024, 6, 1));

        assert_eq!(entries.len(), TIMELINE_LIMIT);
        assert_eq!(entries[0].destination, "Soon");
        assert_eq!(entries[0].status, TripStatus::Future);
        assert_eq!(entries[1].destination, "Past 25");
    }
}
