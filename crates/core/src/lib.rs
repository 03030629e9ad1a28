//! # Tripscope Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Travel classification of calendar events
//! - Field extraction (dates, destination, display title)
//! - Trip collection processing, session merging and ordering
//! - Tiered coordinate resolution
//! - Presentation aggregates (summary, charts, table, map plan)
//! - Port interfaces (traits) for the calendar feed and coordinate store
//!
//! ## Architecture Principles
//! - Only depends on `tripscope-domain`
//! - No file, network or terminal I/O
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod classification;
pub mod extraction;
pub mod feed;
pub mod geo;
pub mod insights;
pub mod trips;

// Re-export specific items to avoid ambiguity
pub use classification::{Classification, KeywordClassifier};
pub use feed::{CalendarFeedSource, ImportReport, ImportService};
pub use geo::{CoordinateResolver, CoordinateStore, InMemoryCoordinateStore};
pub use trips::{SkipReason, TripBuilder, TripCollectionProcessor, TripSession};
