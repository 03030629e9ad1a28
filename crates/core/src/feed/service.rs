//! Calendar import service - turns a feed into a trip collection

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{info, warn};
use tripscope_domain::{ImportConfig, Trip};

use super::ports::CalendarFeedSource;
use crate::trips::{MergeOutcome, TripCollectionProcessor, TripSession};

/// Result of importing one feed.
///
/// A feed that cannot be read yields an empty report carrying `feed_error`
/// rather than an `Err`, so callers always have something to display.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImportReport {
    pub source: String,
    pub events_parsed: usize,
    pub trips: Vec<Trip>,
    pub duplicates_dropped: usize,
    pub skipped: BTreeMap<&'static str, usize>,
    pub feed_error: Option<String>,
}

impl ImportReport {
    #[must_use]
    pub fn trips_accepted(&self) -> usize {
        self.trips.len()
    }

    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.feed_error.is_none()
    }
}

/// Import service for calendar feeds
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportService {
    processor: TripCollectionProcessor,
}

impl ImportService {
    /// Create a new import service
    #[must_use]
    pub fn new(config: &ImportConfig) -> Self {
        Self { processor: TripCollectionProcessor::new(config) }
    }

    #[must_use]
    pub fn with_processor(processor: TripCollectionProcessor) -> Self {
        Self { processor }
    }

    /// Fetch, classify and deduplicate one feed
    pub fn import(&self, source: &dyn CalendarFeedSource) -> ImportReport {
        let origin = source.describe();

        let events = match source.fetch_events() {
            Ok(events) => events,
            Err(err) => {
                warn!(
                    source = %origin,
                    error = %err,
                    kind = err.label(),
                    "calendar_import.feed_failed"
                );
                return ImportReport {
                    source: origin,
                    feed_error: Some(err.to_string()),
                    ..ImportReport::default()
                };
            }
        };

        let processed = self.processor.process(&events);

        info!(
            source = %origin,
            events = events.len(),
            trips = processed.trips.len(),
            skipped = processed.skipped_total(),
            duplicates = processed.duplicates_dropped,
            "calendar_import.completed"
        );

        ImportReport {
            source: origin,
            events_parsed: events.len(),
            trips: processed.trips,
            duplicates_dropped: processed.duplicates_dropped,
            skipped: processed.skipped,
            feed_error: None,
        }
    }

    /// Import a feed and merge its trips into an existing session.
    ///
    /// The returned report's `trips` are the trips read from this feed; the
    /// merged collection lives in the session.
    pub fn import_into(
        &self,
        source: &dyn CalendarFeedSource,
        session: &mut TripSession,
    ) -> (ImportReport, MergeOutcome) {
        let report = self.import(source);
        let outcome = session.merge(report.trips.clone());
        (report, outcome)
    }
}
