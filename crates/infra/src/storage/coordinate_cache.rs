//! JSON file backed coordinate cache
//!
//! The file is a single object mapping destination names to `[lat, lng]`
//! pairs. It is read once on open and rewritten in full after every new
//! entry. Writes go through a temporary file in the same directory followed
//! by a rename, so readers never observe a half-written cache.

use std::collections::BTreeMap;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};
use tripscope_core::geo::{seeded_entries, CoordinateStore};
use tripscope_domain::{Coordinates, GeoConfig, Result};

use crate::errors::InfraError;

/// Coordinate store persisted to a JSON file.
#[derive(Debug)]
pub struct JsonCoordinateStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, Coordinates>>,
}

impl JsonCoordinateStore {
    /// Open the cache described by the geo settings.
    pub fn from_config(config: &GeoConfig) -> Result<Self> {
        Self::open(&config.cache_path, config.seed_defaults)
    }

    /// Load the cache at `path`.
    ///
    /// A missing file starts from the seed table (or empty when `seed` is
    /// false); nothing is written until the first new entry. Entries with
    /// out-of-range coordinates are dropped on load.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the file exists but cannot be read or is
    /// not a JSON object of coordinate pairs.
    pub fn open(path: impl AsRef<Path>, seed: bool) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let entries = if path.exists() {
            let loaded = read_entries(&path)?;
            info!(path = %path.display(), entries = loaded.len(), "coordinate_cache.loaded");
            loaded
        } else {
            debug!(path = %path.display(), seed, "coordinate_cache.missing");
            if seed {
                seeded_entries()
            } else {
                BTreeMap::new()
            }
        };

        Ok(Self { path, entries: Mutex::new(entries) })
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(
        &self,
        entries: &BTreeMap<String, Coordinates>,
    ) -> std::result::Result<(), InfraError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;

        let mut staged = NamedTempFile::new_in(&dir)?;
        {
            let mut writer = BufWriter::new(staged.as_file_mut());
            serde_json::to_writer_pretty(&mut writer, entries)?;
            writer.write_all(b"\n")?;
            writer.flush()?;
        }
        staged.persist(&self.path).map_err(|err| InfraError::from(err.error))?;

        debug!(path = %self.path.display(), entries = entries.len(), "coordinate_cache.persisted");
        Ok(())
    }
}

fn read_entries(path: &Path) -> std::result::Result<BTreeMap<String, Coordinates>, InfraError> {
    let contents = fs::read_to_string(path)?;
    let raw: BTreeMap<String, Coordinates> = serde_json::from_str(&contents)?;

    let total = raw.len();
    let valid: BTreeMap<_, _> = raw.into_iter().filter(|(_, coords)| coords.is_valid()).collect();

    if valid.len() < total {
        warn!(
            path = %path.display(),
            dropped = total - valid.len(),
            "coordinate_cache.invalid_entries"
        );
    }

    Ok(valid)
}

impl CoordinateStore for JsonCoordinateStore {
    fn get(&self, destination: &str) -> Result<Option<Coordinates>> {
        Ok(self.entries.lock().get(destination).copied())
    }

    fn insert(&self, destination: &str, coordinates: Coordinates) -> Result<bool> {
        let mut entries = self.entries.lock();
        if entries.contains_key(destination) {
            return Ok(false);
        }

        entries.insert(destination.to_string(), coordinates);
        if let Err(err) = self.persist(&entries) {
            entries.remove(destination);
            return Err(err.into());
        }
        Ok(true)
    }

    fn entries(&self) -> Result<Vec<(String, Coordinates)>> {
        Ok(self.entries.lock().iter().map(|(k, v)| (k.clone(), *v)).collect())
    }

    fn len(&self) -> Result<usize> {
        Ok(self.entries.lock().len())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn missing_file_is_seeded_but_not_written() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cache.json");

        let store = JsonCoordinateStore::open(&path, true).unwrap();

        assert!(store.len().unwrap() > 0);
        assert!(store.get("Tokyo").unwrap().is_some());
        assert!(!path.exists());
    }

    #[test]
    fn unseeded_store_starts_empty() {
        let dir = tempdir().unwrap();
        let store = JsonCoordinateStore::open(dir.path().join("cache.json"), false).unwrap();

        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn insert_writes_through_and_keeps_first_value() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("cache.json");
        let store = JsonCoordinateStore::open(&path, false).unwrap();

        assert!(store.insert("Hakone", Coordinates::fixed(35.2324, 139.1069)).unwrap());
        assert!(!store.insert("Hakone", Coordinates::fixed(0.0, 0.0)).unwrap());

        let on_disk: BTreeMap<String, [f64; 2]> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(on_disk.get("Hakone"), Some(&[35.2324, 139.1069]));
    }

    #[test]
    fn out_of_range_entries_are_dropped_on_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cache.json");
        fs::write(&path, r#"{"Atlantis": [123.0, 0.0], "Oslo": [59.9139, 10.7522]}"#).unwrap();

        let store = JsonCoordinateStore::open(&path, true).unwrap();

        assert_eq!(store.len().unwrap(), 1);
        assert!(store.get("Atlantis").unwrap().is_none());
    }

    #[test]
    fn corrupt_file_is_a_storage_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cache.json");
        fs::write(&path, "[1, 2").unwrap();

        let err = JsonCoordinateStore::open(&path, true).unwrap_err();
        assert_eq!(err.label(), "storage");
    }
}
