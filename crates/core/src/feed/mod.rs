//! Calendar feed input

pub mod ports;
pub mod service;

pub use ports::CalendarFeedSource;
pub use service::{ImportReport, ImportService};
