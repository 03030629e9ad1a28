//! Port interfaces for calendar input

use tripscope_domain::{CalendarEvent, Result};

/// Source of decoded calendar events (an `.ics` file, an upload, a fixture).
pub trait CalendarFeedSource: Send + Sync {
    /// Short human-readable origin, used in log fields.
    fn describe(&self) -> String;

    /// Read and decode every `VEVENT` in the feed.
    ///
    /// # Errors
    /// Returns [`tripscope_domain::TripscopeError::Feed`] when the feed as a
    /// whole cannot be read or parsed. Individual bad properties are tagged
    /// on the event instead.
    fn fetch_events(&self) -> Result<Vec<CalendarEvent>>;
}
