//! Scan buffer construction
//!
//! The classifier never looks at individual event fields. It scans one
//! lower-cased buffer built from the searchable text properties.

use tripscope_domain::{CalendarEvent, EventField};

/// Join summary, location and description with single spaces and lower-case
/// the result. Absent properties contribute an empty string.
#[must_use]
pub fn scan_buffer(event: &CalendarEvent) -> String {
    EventField::SEARCHABLE
        .iter()
        .map(|field| event.text(*field))
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_fields_in_order() {
        let event = CalendarEvent::new("Flight to TOKYO")
            .with_location("Narita Airport")
            .with_description("Seat 14A");

        assert_eq!(scan_buffer(&event), "flight to tokyo narita airport seat 14a");
    }

    #[test]
    fn absent_fields_leave_separators() {
        let event = CalendarEvent::new("Hotel");
        assert_eq!(scan_buffer(&event), "hotel  ");
    }
}
