//! Geographic coordinates

use serde::{Deserialize, Serialize};

/// Latitude/longitude pair in decimal degrees.
///
/// Serialized as a two-element `[lat, lng]` array, which is the on-disk
/// shape of the coordinate cache.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Build coordinates, rejecting values outside the valid ranges.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        let candidate = Self { latitude, longitude };
        candidate.is_valid().then_some(candidate)
    }

    /// Build coordinates from a trusted constant table.
    #[must_use]
    pub const fn fixed(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Arithmetic mean of a set of points. `None` for an empty set.
    #[must_use]
    pub fn centroid<'a>(points: impl IntoIterator<Item = &'a Self>) -> Option<Self> {
        let (count, lat_sum, lng_sum) =
            points.into_iter().fold((0_u32, 0.0, 0.0), |(n, lat, lng), p| {
                (n + 1, lat + p.latitude, lng + p.longitude)
            });
        (count > 0).then(|| Self::fixed(lat_sum / f64::from(count), lng_sum / f64::from(count)))
    }
}

impl From<[f64; 2]> for Coordinates {
    fn from([latitude, longitude]: [f64; 2]) -> Self {
        Self { latitude, longitude }
    }
}

impl From<Coordinates> for [f64; 2] {
    fn from(value: Coordinates) -> Self {
        [value.latitude, value.longitude]
    }
}
