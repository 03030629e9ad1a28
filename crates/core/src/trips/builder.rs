//! Per-event trip building
//!
//! Runs one calendar event through the whole extraction pipeline:
//! scan buffer, keyword classification, date resolution, destination
//! extraction and title cleaning. Events are independent, so the builder is
//! `Sync` and can be shared across rayon workers.

use serde::Serialize;
use thiserror::Error;
use tripscope_domain::constants::DEFAULT_DESCRIPTION_MAX_LENGTH;
use tripscope_domain::utils::text::truncate_chars;
use tripscope_domain::{CalendarEvent, ImportConfig, TripCandidate};

use crate::classification::{scan_buffer, KeywordClassifier};
use crate::extraction::{clean_trip_title, extract_destination, resolve_span, StartError};

/// Why an event did not become a trip.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    #[error("excluded by term '{term}'")]
    Excluded { term: String },

    #[error("no travel signal")]
    NotTravel,

    #[error("event has no start date")]
    MissingStart,

    #[error("unparseable start date: {raw}")]
    UnparseableStart { raw: String },
}

impl SkipReason {
    /// Stable label used to tally skips in import reports.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Excluded { .. } => "excluded",
            Self::NotTravel => "not_travel",
            Self::MissingStart => "missing_start",
            Self::UnparseableStart { .. } => "unparseable_start",
        }
    }
}

impl From<StartError> for SkipReason {
    fn from(err: StartError) -> Self {
        match err {
            StartError::Missing => Self::MissingStart,
            StartError::Unparseable(raw) => Self::UnparseableStart { raw },
        }
    }
}

/// Builds a [`TripCandidate`] from one event, or explains why not.
#[derive(Debug, Clone, Copy)]
pub struct TripBuilder {
    classifier: KeywordClassifier,
    description_max_len: usize,
}

impl Default for TripBuilder {
    fn default() -> Self {
        Self {
            classifier: KeywordClassifier::default(),
            description_max_len: DEFAULT_DESCRIPTION_MAX_LENGTH,
        }
    }
}

impl TripBuilder {
    #[must_use]
    pub fn new(config: &ImportConfig) -> Self {
        Self { description_max_len: config.description_max_len, ..Self::default() }
    }

    #[must_use]
    pub fn with_classifier(mut self, classifier: KeywordClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    /// Classify and extract a single event.
    ///
    /// # Errors
    /// Returns the [`SkipReason`] when the event is not travel or has no
    /// usable start date.
    pub fn build(&self, event: &CalendarEvent) -> Result<TripCandidate, SkipReason> {
        let verdict = self.classifier.classify(&scan_buffer(event));

        if let Some(term) = verdict.excluded_by {
            return Err(SkipReason::Excluded { term: term.to_string() });
        }
        if !verdict.accepted {
            return Err(SkipReason::NotTravel);
        }

        let span = resolve_span(&event.start, &event.end)?;

        Ok(TripCandidate {
            title: clean_trip_title(&event.summary),
            original_title: event.summary.clone(),
            start_date: span.start,
            end_date: span.end,
            location: event.location.clone(),
            description: truncate_chars(&event.description, self.description_max_len).to_string(),
            destination: extract_destination(&event.summary, &event.location),
            travel_score: verdict.travel_score,
            has_booking_platform: verdict.has_booking_platform,
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use tripscope_domain::{DateField, EventTime};

    use super::*;

    fn at(d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap().and_hms_opt(h, 0, 0).unwrap()
    }

    #[test]
    fn builds_flight_to_tokyo() {
        let event = CalendarEvent::new("Flight to Tokyo")
            .with_location("Narita Airport")
            .with_start(EventTime::utc(at(1, 10)))
            .with_end(EventTime::utc(at(1, 14)));

        let trip = TripBuilder::default().build(&event).unwrap();

        assert_eq!(trip.title, "Flight to Tokyo");
        assert_eq!(trip.destination, "Tokyo");
        assert_eq!(trip.start_date, at(1, 10));
        assert!(trip.travel_score >= 1);
        assert!(!trip.has_booking_platform);
    }

    #[test]
    fn excluded_event_reports_term() {
        let event = CalendarEvent::new("Dentist appointment").with_start(EventTime::utc(at(1, 9)));

        assert_eq!(
            TripBuilder::default().build(&event),
            Err(SkipReason::Excluded { term: "appointment".into() })
        );
    }

    #[test]
    fn non_travel_event_is_skipped() {
        let event = CalendarEvent::new("Groceries").with_start(EventTime::utc(at(1, 9)));
        assert_eq!(TripBuilder::default().build(&event), Err(SkipReason::NotTravel));
    }

    #[test]
    fn travel_event_without_start_is_skipped() {
        let event = CalendarEvent::new("Hotel check-in");
        assert_eq!(TripBuilder::default().build(&event), Err(SkipReason::MissingStart));

        let event = event.with_start(DateField::Invalid("yesterday".into()));
        assert_eq!(
            TripBuilder::default().build(&event).unwrap_err().kind(),
            "unparseable_start"
        );
    }

    #[test]
    fn description_is_truncated() {
        let config = ImportConfig { description_max_len: 5, ..ImportConfig::default() };
        let event = CalendarEvent::new("Hotel stay")
            .with_description("Confirmation 12345")
            .with_start(EventTime::date(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));

        let trip = TripBuilder::new(&config).build(&event).unwrap();
        assert_eq!(trip.description, "Confi");
    }

    #[test]
    fn custom_classifier_replaces_keyword_tables() {
        let builder = TripBuilder::default()
            .with_classifier(KeywordClassifier::new(&[], &[], &["sabbatical"]));

        let flight = CalendarEvent::new("Flight to Tokyo").with_start(EventTime::utc(at(1, 9)));
        assert_eq!(builder.build(&flight), Err(SkipReason::NotTravel));

        let sabbatical =
            CalendarEvent::new("Sabbatical in Kyoto").with_start(EventTime::utc(at(4, 9)));
        let trip = builder.build(&sabbatical).unwrap();
        assert_eq!(trip.travel_score, 1);
        assert_eq!(trip.title, "Sabbatical in Kyoto");
    }
}
