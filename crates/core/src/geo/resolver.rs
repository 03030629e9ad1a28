//! Tiered destination coordinate resolution
//!
//! Tiers, first hit wins:
//! 1. Coordinates embedded in the location field (map links, JSON-ish blobs)
//! 2. Exact cache entry for the normalized destination
//! 3. Cache entry contained in the destination, or containing it
//! 4. Gazetteer place name
//! 5. Region hint, then country name
//!
//! Every hit below tier 2 is written back to the store under the
//! normalized destination, so the cache only grows.

use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use tracing::debug;
use tripscope_domain::constants::{UNKNOWN_DESTINATION, UNKNOWN_LOCATION};
use tripscope_domain::utils::text::title_case;
use tripscope_domain::{Coordinates, Result};

use super::gazetteer::{lookup_place, lookup_region};
use super::ports::CoordinateStore;

lazy_static! {
    static ref EMBEDDED_PATTERNS: Vec<Regex> = [
        r"@([-\d.]+),([-\d.]+)",
        r"ll=([-\d.]+),([-\d.]+)",
        r"q=([-\d.]+),([-\d.]+)",
        r#"(?is)latitude["']?\s*:\s*([-\d.]+).*longitude["']?\s*:\s*([-\d.]+)"#,
        r#"(?is)lat["']?\s*:\s*([-\d.]+).*lng["']?\s*:\s*([-\d.]+)"#,
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("EMBEDDED_PATTERNS should compile - this is a bug"))
    .collect();
}

/// Which tier produced a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionSource {
    Embedded,
    CacheExact,
    CacheSubstring,
    Gazetteer,
    Region,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Resolution {
    pub coordinates: Coordinates,
    pub source: ResolutionSource,
}

/// Cache key for a destination: trimmed and title-cased.
#[must_use]
pub fn cache_key(destination: &str) -> String {
    title_case(destination.trim())
}

/// First valid coordinate pair found in a location string.
#[must_use]
pub fn embedded_coordinates(location: &str) -> Option<Coordinates> {
    EMBEDDED_PATTERNS.iter().find_map(|pattern| {
        let captures = pattern.captures(location)?;
        let latitude = captures.get(1)?.as_str().parse::<f64>().ok()?;
        let longitude = captures.get(2)?.as_str().parse::<f64>().ok()?;
        Coordinates::new(latitude, longitude)
    })
}

/// Resolves destinations against a [`CoordinateStore`] and static tables.
#[derive(Clone)]
pub struct CoordinateResolver {
    store: Arc<dyn CoordinateStore>,
}

impl CoordinateResolver {
    pub fn new(store: Arc<dyn CoordinateStore>) -> Self {
        Self { store }
    }

    /// Resolve a destination, consulting the trip's location field first.
    ///
    /// Returns `Ok(None)` when no tier matches; an empty destination never
    /// matches.
    ///
    /// # Errors
    /// Propagates store failures.
    pub fn resolve(&self, destination: &str, location: &str) -> Result<Option<Resolution>> {
        let key = cache_key(destination);
        if key.is_empty() {
            return Ok(None);
        }

        if let Some(coordinates) = embedded_coordinates(location) {
            return self.remember(&key, coordinates, ResolutionSource::Embedded).map(Some);
        }

        if let Some(coordinates) = self.store.get(&key)? {
            return Ok(Some(Resolution { coordinates, source: ResolutionSource::CacheExact }));
        }

        if let Some(coordinates) = self.cache_substring_match(&key)? {
            return self.remember(&key, coordinates, ResolutionSource::CacheSubstring).map(Some);
        }

        if let Some(coordinates) = lookup_place(destination) {
            return self.remember(&key, coordinates, ResolutionSource::Gazetteer).map(Some);
        }

        if let Some(coordinates) = lookup_region(destination) {
            return self.remember(&key, coordinates, ResolutionSource::Region).map(Some);
        }

        debug!(destination = %key, "coordinate_resolver.unresolved");
        Ok(None)
    }

    fn cache_substring_match(&self, key: &str) -> Result<Option<Coordinates>> {
        let lowered = key.to_lowercase();

        Ok(self.store.entries()?.into_iter().find_map(|(cached, coordinates)| {
            let cached = cached.to_lowercase();
            (!cached.is_empty() && (lowered.contains(&cached) || cached.contains(&lowered)))
                .then_some(coordinates)
        }))
    }

    /// Write a fresh resolution back to the store. Sentinel destinations are
    /// returned but never cached.
    fn remember(
        &self,
        key: &str,
        coordinates: Coordinates,
        source: ResolutionSource,
    ) -> Result<Resolution> {
        if key != UNKNOWN_DESTINATION && key != UNKNOWN_LOCATION {
            let added = self.store.insert(key, coordinates)?;
            debug!(destination = %key, ?source, added, "coordinate_resolver.resolved");
        }

        Ok(Resolution { coordinates, source })
    }
}
