//! Event date resolution
//!
//! Turns the tagged `DTSTART`/`DTEND` fields into a naive local span.
//! Dates become midnight, zoned date-times keep their wall-clock reading.

use chrono::NaiveDateTime;
use thiserror::Error;
use tripscope_domain::{duration_days, DateField};

/// Why an event start could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StartError {
    #[error("event has no start date")]
    Missing,
    #[error("unparseable start date: {0}")]
    Unparseable(String),
}

/// Naive local span of one event. `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TripSpan {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TripSpan {
    /// Whole days covered, never less than one.
    #[must_use]
    pub fn duration_days(&self) -> i64 {
        duration_days(self.start, self.end)
    }
}

/// Resolve an event's span.
///
/// A missing or undecodable end collapses to the start, as does an end that
/// precedes the start.
///
/// # Errors
/// Returns [`StartError`] when the start is absent or undecodable.
pub fn resolve_span(start: &DateField, end: &DateField) -> Result<TripSpan, StartError> {
    let start = match start {
        DateField::Value(time) => time.to_naive(),
        DateField::Absent => return Err(StartError::Missing),
        DateField::Invalid(raw) => return Err(StartError::Unparseable(raw.clone())),
    };

    let end = end.value().map_or(start, |time| time.to_naive().max(start));

    Ok(TripSpan { start, end })
}
