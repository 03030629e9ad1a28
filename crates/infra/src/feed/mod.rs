//! Calendar feed adapters

pub mod ics;

pub use ics::{parse_ics, IcsFeed};
