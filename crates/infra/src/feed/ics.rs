//! iCalendar (`.ics`) feed adapter
//!
//! Decodes `VEVENT` components into [`CalendarEvent`] records. Date
//! properties are tagged here: `VALUE=DATE` (or a bare `YYYYMMDD`) becomes a
//! calendar date, a `Z` suffix a UTC date-time, a `TZID` parameter a zoned
//! date-time, and anything else a floating date-time. Values that cannot be
//! decoded are kept as [`DateField::Invalid`] so the trip builder can report
//! them per event instead of failing the whole feed.

use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};
use ical::parser::ical::component::IcalEvent;
use ical::property::Property;
use tracing::debug;
use tripscope_core::feed::CalendarFeedSource;
use tripscope_domain::{CalendarEvent, DateField, EventTime, Result, TripscopeError};

use crate::errors::InfraError;

const DATE_FORMAT: &str = "%Y%m%d";
const DATE_TIME_FORMATS: [&str; 2] = ["%Y%m%dT%H%M%S", "%Y%m%dT%H%M"];

#[derive(Debug, Clone)]
enum IcsOrigin {
    File(PathBuf),
    Memory { name: String, bytes: Vec<u8> },
}

/// An `.ics` export read from disk or from memory.
#[derive(Debug, Clone)]
pub struct IcsFeed {
    origin: IcsOrigin,
}

impl IcsFeed {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self { origin: IcsOrigin::File(path.into()) }
    }

    /// Feed over an in-memory export; `name` is only used for reporting.
    pub fn from_bytes(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self { origin: IcsOrigin::Memory { name: name.into(), bytes: bytes.into() } }
    }
}

impl CalendarFeedSource for IcsFeed {
    fn describe(&self) -> String {
        match &self.origin {
            IcsOrigin::File(path) => path.display().to_string(),
            IcsOrigin::Memory { name, .. } => name.clone(),
        }
    }

    fn fetch_events(&self) -> Result<Vec<CalendarEvent>> {
        let events = match &self.origin {
            IcsOrigin::File(path) => read_file(path)?,
            IcsOrigin::Memory { bytes, .. } => parse_ics(Cursor::new(bytes.as_slice()))?,
        };

        debug!(source = %self.describe(), events = events.len(), "ics_feed.decoded");
        Ok(events)
    }
}

fn read_file(path: &Path) -> std::result::Result<Vec<CalendarEvent>, InfraError> {
    let file = File::open(path).map_err(|err| {
        InfraError(TripscopeError::Feed(format!("cannot open {}: {err}", path.display())))
    })?;

    parse_ics(BufReader::new(file))
}

/// Decode every `VEVENT` of every `VCALENDAR` in the reader.
///
/// Input that holds no calendar at all is a feed error.
pub fn parse_ics<R: BufRead>(reader: R) -> std::result::Result<Vec<CalendarEvent>, InfraError> {
    let mut events = Vec::new();
    let mut calendars = 0usize;

    for calendar_result in ical::IcalParser::new(reader) {
        let calendar = calendar_result?;
        calendars += 1;
        events.extend(calendar.events.iter().map(decode_event));
    }

    if calendars == 0 {
        return Err(InfraError(TripscopeError::Feed("no VCALENDAR found in input".into())));
    }

    Ok(events)
}

fn decode_event(event: &IcalEvent) -> CalendarEvent {
    let mut decoded = CalendarEvent::default();

    for property in &event.properties {
        match property.name.as_str() {
            "SUMMARY" => decoded.summary = text_value(property),
            "LOCATION" => decoded.location = text_value(property),
            "DESCRIPTION" => decoded.description = text_value(property),
            "UID" => decoded.uid = property.value.clone().filter(|uid| !uid.is_empty()),
            "DTSTART" => decoded.start = date_value(property),
            "DTEND" => decoded.end = date_value(property),
            _ => {}
        }
    }

    decoded
}

fn text_value(property: &Property) -> String {
    property.value.as_deref().map(unescape_text).unwrap_or_default()
}

/// Undo RFC 5545 TEXT escaping.
fn unescape_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n' | 'N') => out.push('\n'),
            Some(escaped @ (',' | ';' | '\\')) => out.push(escaped),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}

fn param<'a>(property: &'a Property, name: &str) -> Option<&'a str> {
    property
        .params
        .as_ref()?
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .and_then(|(_, values)| values.first())
        .map(String::as_str)
}

fn date_value(property: &Property) -> DateField {
    let Some(raw) = property.value.as_deref().map(str::trim).filter(|raw| !raw.is_empty()) else {
        return DateField::Absent;
    };

    let is_date = param(property, "VALUE").is_some_and(|value| value.eq_ignore_ascii_case("DATE"))
        || (raw.len() == 8 && raw.bytes().all(|b| b.is_ascii_digit()));

    let decoded = if is_date {
        NaiveDate::parse_from_str(raw, DATE_FORMAT).ok().map(EventTime::date)
    } else if let Some(utc) = raw.strip_suffix(['Z', 'z']) {
        parse_date_time(utc).map(EventTime::utc)
    } else {
        parse_date_time(raw).map(|local| match param(property, "TZID") {
            Some(tzid) => EventTime::zoned(local, tzid),
            None => EventTime::floating(local),
        })
    };

    decoded.map_or_else(|| DateField::Invalid(raw.to_string()), DateField::Value)
}

fn parse_date_time(raw: &str) -> Option<NaiveDateTime> {
    DATE_TIME_FORMATS.iter().find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveTime;
    use tripscope_domain::ZoneHint;

    use super::*;

    fn property(name: &str, value: &str, params: &[(&str, &str)]) -> Property {
        Property {
            name: name.to_string(),
            value: Some(value.to_string()),
            params: (!params.is_empty()).then(|| {
                params.iter().map(|(k, v)| ((*k).to_string(), vec![(*v).to_string()])).collect()
            }),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn unescapes_text_sequences() {
        assert_eq!(unescape_text(r"Kyoto\, Japan"), "Kyoto, Japan");
        assert_eq!(unescape_text(r"line one\nline two"), "line one\nline two");
        assert_eq!(unescape_text(r"a\;b\\c"), "a;b\\c");
        assert_eq!(unescape_text(r"trailing\"), "trailing\\");
    }

    #[test]
    fn value_date_param_yields_calendar_date() {
        let field = date_value(&property("DTSTART", "20250301", &[("VALUE", "DATE")]));
        assert_eq!(field, DateField::Value(EventTime::date(date(2025, 3, 1))));
    }

    #[test]
    fn bare_eight_digits_are_a_date() {
        let field = date_value(&property("DTEND", "20250305", &[]));
        assert_eq!(field.value().map(EventTime::is_all_day), Some(true));
    }

    #[test]
    fn utc_suffix_is_tagged() {
        let field = date_value(&property("DTSTART", "20250301T093000Z", &[]));
        let local = date(2025, 3, 1).and_time(NaiveTime::from_hms_opt(9, 30, 0).unwrap());

        assert_eq!(field, DateField::Value(EventTime::DateTime { local, zone: ZoneHint::Utc }));
    }

    #[test]
    fn tzid_param_is_kept() {
        let field = date_value(&property("DTSTART", "20250301T0930", &[("TZID", "Asia/Tokyo")]));

        match field {
            DateField::Value(EventTime::DateTime { zone: ZoneHint::Named(tzid), .. }) => {
                assert_eq!(tzid, "Asia/Tokyo");
            }
            other => panic!("expected zoned date-time, got {other:?}"),
        }
    }

    #[test]
    fn garbage_is_invalid_not_absent() {
        let field = date_value(&property("DTSTART", "next tuesday", &[]));
        assert_eq!(field, DateField::Invalid("next tuesday".to_string()));

        let empty = date_value(&property("DTSTART", "  ", &[]));
        assert_eq!(empty, DateField::Absent);
    }

    #[test]
    fn input_without_calendar_is_a_feed_error() {
        let err = parse_ics(Cursor::new(b"".as_slice())).unwrap_err();
        assert_eq!(err.0.label(), "feed");

        let err = parse_ics(Cursor::new(b"hello world\n".as_slice())).unwrap_err();
        assert_eq!(err.0.label(), "feed");
    }
}
