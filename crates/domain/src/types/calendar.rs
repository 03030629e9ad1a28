//! Calendar input records
//!
//! A [`CalendarEvent`] is the read-only view of one `VEVENT` after the feed
//! adapter has decoded it. Date properties are tagged at that boundary as
//! either a calendar date or a date-time, so nothing downstream has to guess
//! which one it was given.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Time zone qualifier attached to a date-time in the source feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "tzid", rename_all = "snake_case")]
pub enum ZoneHint {
    /// No zone: wall-clock time in whatever zone the reader is in.
    Floating,
    /// `Z` suffix.
    Utc,
    /// `TZID=` parameter.
    Named(String),
}

/// A decoded `DTSTART` / `DTEND` value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventTime {
    /// `VALUE=DATE`, e.g. all-day events.
    Date { date: NaiveDate },
    /// Date-time with an optional zone qualifier.
    DateTime { local: NaiveDateTime, zone: ZoneHint },
}

impl EventTime {
    pub fn date(date: NaiveDate) -> Self {
        Self::Date { date }
    }

    pub fn floating(local: NaiveDateTime) -> Self {
        Self::DateTime { local, zone: ZoneHint::Floating }
    }

    pub fn utc(local: NaiveDateTime) -> Self {
        Self::DateTime { local, zone: ZoneHint::Utc }
    }

    pub fn zoned(local: NaiveDateTime, tzid: impl Into<String>) -> Self {
        Self::DateTime { local, zone: ZoneHint::Named(tzid.into()) }
    }

    /// Naive local representation: dates become midnight, zones are dropped
    /// without conversion.
    #[must_use]
    pub fn to_naive(&self) -> NaiveDateTime {
        match self {
            Self::Date { date } => date.and_time(NaiveTime::MIN),
            Self::DateTime { local, .. } => *local,
        }
    }

    #[must_use]
    pub fn is_all_day(&self) -> bool {
        matches!(self, Self::Date { .. })
    }
}

/// A date property as it arrived from the feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum DateField {
    #[default]
    Absent,
    /// Present but not decodable; carries the raw text for diagnostics.
    Invalid(String),
    Value(EventTime),
}

impl DateField {
    #[must_use]
    pub fn value(&self) -> Option<&EventTime> {
        match self {
            Self::Value(time) => Some(time),
            Self::Absent | Self::Invalid(_) => None,
        }
    }
}

impl From<EventTime> for DateField {
    fn from(value: EventTime) -> Self {
        Self::Value(value)
    }
}

/// Searchable text properties of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventField {
    Summary,
    Location,
    Description,
}

impl EventField {
    /// Scan order used when building the classifier buffer.
    pub const SEARCHABLE: [Self; 3] = [Self::Summary, Self::Location, Self::Description];
}

/// One calendar event (`VEVENT`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub uid: Option<String>,
    pub summary: String,
    pub location: String,
    pub description: String,
    pub start: DateField,
    pub end: DateField,
}

impl CalendarEvent {
    pub fn new(summary: impl Into<String>) -> Self {
        Self { summary: summary.into(), ..Self::default() }
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_start(mut self, start: impl Into<DateField>) -> Self {
        self.start = start.into();
        self
    }

    #[must_use]
    pub fn with_end(mut self, end: impl Into<DateField>) -> Self {
        self.end = end.into();
        self
    }

    /// Text accessor; absent properties read as the empty string.
    #[must_use]
    pub fn text(&self, field: EventField) -> &str {
        match field {
            EventField::Summary => &self.summary,
            EventField::Location => &self.location,
            EventField::Description => &self.description,
        }
    }
}
