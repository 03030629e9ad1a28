//! Trip records
//!
//! A [`TripCandidate`] is what the per-event builder produces; the collection
//! processor turns candidates into [`Trip`]s by deriving the day count and
//! dropping duplicates.

use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::constants::{MIN_TRIP_DAYS, SECONDS_PER_DAY};
use crate::impl_domain_label_conversions;

/// A classified travel event before collection-level processing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripCandidate {
    pub title: String,
    pub original_title: String,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub location: String,
    pub description: String,
    pub destination: String,
    pub travel_score: u32,
    pub has_booking_platform: bool,
}

/// One travel occurrence derived from a calendar event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    pub title: String,
    pub original_title: String,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub location: String,
    pub description: String,
    pub destination: String,
    pub duration_days: i64,
    pub travel_score: u32,
    pub has_booking_platform: bool,
}

/// Identity of a trip within a collection.
pub type TripKey<'a> = (&'a str, NaiveDateTime);

impl Trip {
    #[must_use]
    pub fn key(&self) -> TripKey<'_> {
        (self.title.as_str(), self.start_date)
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.start_date.year()
    }
}

impl From<TripCandidate> for Trip {
    fn from(candidate: TripCandidate) -> Self {
        let duration_days = duration_days(candidate.start_date, candidate.end_date);
        Self {
            title: candidate.title,
            original_title: candidate.original_title,
            start_date: candidate.start_date,
            end_date: candidate.end_date,
            location: candidate.location,
            description: candidate.description,
            destination: candidate.destination,
            duration_days,
            travel_score: candidate.travel_score,
            has_booking_platform: candidate.has_booking_platform,
        }
    }
}

/// Whole days (nights) covered by a span, never less than one.
///
/// Partial days are floored; a same-day trip and an inverted span both
/// count as one.
#[must_use]
pub fn duration_days(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    let seconds = (end - start).num_seconds();
    (seconds.div_euclid(SECONDS_PER_DAY)).max(MIN_TRIP_DAYS)
}

/// Position of a trip relative to "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripStatus {
    Current,
    Future,
    Past,
}

impl_domain_label_conversions!(TripStatus {
    Current => "current",
    Future => "future",
    Past => "past",
});

impl TripStatus {
    /// Human label used in tables.
    #[must_use]
    pub fn display_label(self) -> &'static str {
        match self {
            Self::Current => "Current",
            Self::Future => "Upcoming",
            Self::Past => "Past",
        }
    }
}
