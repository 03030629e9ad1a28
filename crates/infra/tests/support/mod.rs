//! Shared fixtures for `tripscope-infra` integration tests.

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};

/// Wrap `VEVENT` blocks in a calendar envelope with CRLF line endings.
pub fn calendar(events: &[&str]) -> String {
    let mut lines = vec!["BEGIN:VCALENDAR", "VERSION:2.0", "PRODID:-//Tripscope//Fixtures//EN"];
    for event in events {
        lines.extend(event.lines().map(str::trim).filter(|line| !line.is_empty()));
    }
    lines.push("END:VCALENDAR");
    lines.join("\r\n") + "\r\n"
}

pub const TOKYO_FLIGHT: &str = "
BEGIN:VEVENT
UID:flight-nrt-1
SUMMARY:Flight to Tokyo
LOCATION:Narita Airport\\, Chiba
DTSTART;TZID=Asia/Tokyo:20250301T093000
DTEND;TZID=Asia/Tokyo:20250305T180000
END:VEVENT";

pub const DENTIST: &str = "
BEGIN:VEVENT
UID:dentist-1
SUMMARY:Dentist appointment
DTSTART:20250302T100000Z
DTEND:20250302T110000Z
END:VEVENT";

pub const MIAMI_STAY: &str = "
BEGIN:VEVENT
SUMMARY:Airbnb: Beach House Miami
DTSTART;VALUE=DATE:20250610
DTEND;VALUE=DATE:20250614
END:VEVENT";

pub const UNDATED_TRIP: &str = "
BEGIN:VEVENT
SUMMARY:Trip to Lisbon
DTSTART:someday
END:VEVENT";

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
}
