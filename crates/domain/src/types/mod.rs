//! Domain types and models

pub mod calendar;
pub mod geo;
pub mod trip;

pub use calendar::{CalendarEvent, DateField, EventField, EventTime, ZoneHint};
pub use geo::Coordinates;
pub use trip::{duration_days, Trip, TripCandidate, TripKey, TripStatus};
