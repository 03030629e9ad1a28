//! Persisted state

pub mod coordinate_cache;

pub use coordinate_cache::JsonCoordinateStore;
