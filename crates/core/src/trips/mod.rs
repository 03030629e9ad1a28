//! Trip building, collection processing and ordering

pub mod builder;
pub mod processor;
pub mod session;
pub mod sorter;

pub use builder::{SkipReason, TripBuilder};
pub use processor::{dedupe_trips, ProcessedTrips, TripCollectionProcessor};
pub use session::{MergeOutcome, TripSession};
pub use sorter::{partition_by_status, smart_sort, trip_status, StatusPartition};
