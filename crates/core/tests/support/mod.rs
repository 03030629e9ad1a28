//! Shared test helpers for `tripscope-core` integration tests.
//!
//! These helpers provide reusable fixtures and lightweight port
//! implementations so that pipeline tests can focus on behaviour instead of
//! boilerplate.

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use tripscope_core::CalendarFeedSource;
use tripscope_domain::{CalendarEvent, Result as DomainResult, TripscopeError};

/// In-memory feed returning a fixed set of events.
#[derive(Default, Clone)]
pub struct StaticFeed {
    events: Vec<CalendarEvent>,
}

impl StaticFeed {
    pub fn new(events: Vec<CalendarEvent>) -> Self {
        Self { events }
    }

    /// Convenience helper for adding a single event.
    pub fn with_event(mut self, event: CalendarEvent) -> Self {
        self.events.push(event);
        self
    }
}

impl CalendarFeedSource for StaticFeed {
    fn describe(&self) -> String {
        format!("static feed ({} events)", self.events.len())
    }

    fn fetch_events(&self) -> DomainResult<Vec<CalendarEvent>> {
        Ok(self.events.clone())
    }
}

/// Feed that cannot be read at all.
pub struct BrokenFeed;

impl CalendarFeedSource for BrokenFeed {
    fn describe(&self) -> String {
        "broken feed".to_string()
    }

    fn fetch_events(&self) -> DomainResult<Vec<CalendarEvent>> {
        Err(TripscopeError::Feed("expected BEGIN:VCALENDAR".to_string()))
    }
}

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
