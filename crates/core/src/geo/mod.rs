//! Destination geocoding from local data

pub mod gazetteer;
pub mod ports;
pub mod resolver;

pub use ports::{seeded_entries, CoordinateStore, InMemoryCoordinateStore};
pub use resolver::{
    cache_key, embedded_coordinates, CoordinateResolver, Resolution, ResolutionSource,
};
