//! Field extraction from calendar events

pub mod date_resolver;
pub mod destination;
pub mod title_cleaner;

pub use date_resolver::{resolve_span, StartError, TripSpan};
pub use destination::extract_destination;
pub use title_cleaner::clean_trip_title;
