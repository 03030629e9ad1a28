//! Port interfaces for coordinate storage

use std::collections::BTreeMap;

use parking_lot::RwLock;
use tripscope_domain::{Coordinates, Result};

use super::gazetteer::SEED_CITIES;

/// Destination to coordinate map that only ever grows.
///
/// Implementations must serialize writers; readers may run concurrently.
pub trait CoordinateStore: Send + Sync {
    /// Exact lookup by normalized destination.
    fn get(&self, destination: &str) -> Result<Option<Coordinates>>;

    /// Record coordinates for a destination. Existing entries are kept, so
    /// repeated resolution of the same name always yields the same point.
    ///
    /// Returns `true` when a new entry was added.
    fn insert(&self, destination: &str, coordinates: Coordinates) -> Result<bool>;

    /// All entries, ordered by key.
    fn entries(&self) -> Result<Vec<(String, Coordinates)>>;

    /// Number of entries.
    fn len(&self) -> Result<usize>;

    /// Whether the store holds no entries.
    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

/// Seed table as an owned map.
#[must_use]
pub fn seeded_entries() -> BTreeMap<String, Coordinates> {
    SEED_CITIES.iter().map(|(name, coords)| ((*name).to_string(), *coords)).collect()
}

/// Process-local store, used in tests and when no cache file is configured.
#[derive(Debug, Default)]
pub struct InMemoryCoordinateStore {
    entries: RwLock<BTreeMap<String, Coordinates>>,
}

impl InMemoryCoordinateStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with the seed city table.
    #[must_use]
    pub fn seeded() -> Self {
        Self { entries: RwLock::new(seeded_entries()) }
    }
}

impl CoordinateStore for InMemoryCoordinateStore {
    fn get(&self, destination: &str) -> Result<Option<Coordinates>> {
        Ok(self.entries.read().get(destination).copied())
    }

    fn insert(&self, destination: &str, coordinates: Coordinates) -> Result<bool> {
        let mut entries = self.entries.write();
        if entries.contains_key(destination) {
            return Ok(false);
        }
        entries.insert(destination.to_string(), coordinates);
        Ok(true)
    }

    fn entries(&self) -> Result<Vec<(String, Coordinates)>> {
        Ok(self.entries.read().iter().map(|(k, v)| (k.clone(), *v)).collect())
    }

    fn len(&self) -> Result<usize> {
        Ok(self.entries.read().len())
    }
}
