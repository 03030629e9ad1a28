//! Map plan: which trips to place, where, and how to frame them
//!
//! Produces marker data only. Tiles, styling and popups belong to whatever
//! renders the plan.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::warn;
use tripscope_domain::constants::UNPLACED_PREVIEW_LIMIT;
use tripscope_domain::{impl_domain_label_conversions, Coordinates, Result, Trip, TripStatus};

use crate::geo::{CoordinateResolver, ResolutionSource};
use crate::trips::trip_status;

/// Which trips appear on the map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapFilter {
    /// Trips that have ended.
    Past,
    /// Trips that have not ended yet.
    CurrentAndFuture,
    #[default]
    All,
}

impl_domain_label_conversions!(MapFilter {
    Past => "past",
    CurrentAndFuture => "upcoming",
    All => "all",
});

impl MapFilter {
    #[must_use]
    pub fn includes(self, trip: &Trip, now: NaiveDateTime) -> bool {
        match self {
            Self::Past => trip.end_date < now,
            Self::CurrentAndFuture => trip.end_date >= now,
            Self::All => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub title: String,
    pub destination: String,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
    pub duration_days: i64,
    pub status: TripStatus,
    pub coordinates: Coordinates,
    pub source: ResolutionSource,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MapPlan {
    pub markers: Vec<MapMarker>,
    /// Trips that could not be placed.
    pub unplaced_count: usize,
    /// Destinations of the first few unplaced trips.
    pub unplaced_preview: Vec<String>,
    pub center: Option<Coordinates>,
    pub zoom: Option<u8>,
}

/// Zoom level that frames `placed` markers reasonably.
#[must_use]
pub fn zoom_for(placed: usize) -> Option<u8> {
    match placed {
        0 => None,
        1 => Some(10),
        2..=4 => Some(6),
        5..=9 => Some(4),
        _ => Some(3),
    }
}

/// Resolve coordinates for the selected trips and frame them.
///
/// # Errors
/// Propagates coordinate store failures.
pub fn plan_map(
    trips: &[Trip],
    filter: MapFilter,
    resolver: &CoordinateResolver,
    now: NaiveDateTime,
) -> Result<MapPlan> {
    let mut plan = MapPlan::default();

    for trip in trips.iter().filter(|trip| filter.includes(trip, now)) {
        match resolver.resolve(&trip.destination, &trip.location)? {
            Some(resolution) => plan.markers.push(MapMarker {
                title: trip.title.clone(),
                destination: trip.destination.clone(),
                start_date: trip.start_date,
                end_date: trip.end_date,
                duration_days: trip.duration_days,
                status: trip_status(trip, now),
                coordinates: resolution.coordinates,
                source: resolution.source,
            }),
            None => {
                plan.unplaced_count += 1;
                if plan.unplaced_preview.len() < UNPLACED_PREVIEW_LIMIT {
                    plan.unplaced_preview.push(trip.destination.clone());
                }
            }
        }
    }

    if plan.unplaced_count > 0 {
        warn!(
            unplaced = plan.unplaced_count,
            preview = ?plan.unplaced_preview,
            "map_plan.unplaced_destinations"
        );
    }

    plan.center = Coordinates::centroid(plan.markers.iter().map(|marker| &marker.coordinates));
    plan.zoom = zoom_for(plan.markers.len());

    Ok(plan)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::NaiveDate;
    use tripscope_domain::TripCandidate;

    use super::*;
    use crate::geo::InMemoryCoordinateStore;

    fn at(m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap().and_hms_opt(0, 0, 0).unwrap()
    }

    fn trip(destination: &str, start: NaiveDateTime) -> Trip {
        Trip::from(TripCandidate {
            title: destination.into(),
            original_title: destination.into(),
            start_date: start,
            end_date: start + chrono::Duration::days(2),
            location: String::new(),
            description: String::new(),
            destination: destination.into(),
            travel_score: 1,
            has_booking_platform: false,
        })
    }

    fn resolver() -> CoordinateResolver {
        CoordinateResolver::new(Arc::new(InMemoryCoordinateStore::seeded()))
    }

    #[test]
    fn zoom_heuristic() {
        assert_eq!(zoom_for(0), None);
        assert_eq!(zoom_for(1), Some(10));
        assert_eq!(zoom_for(4), Some(6));
        assert_eq!(zoom_for(9), Some(4));
        assert_eq!(zoom_for(10), Some(3));
    }

    #[test]
    fn plans_markers_and_reports_unplaced() {
        let trips =
            vec![trip("Paris", at(1, 1)), trip("Atlantis", at(2, 1)), trip("Rome", at(9, 1))];

        let plan = plan_map(&trips, MapFilter::All, &resolver(), at(6, 1)).unwrap();

        assert_eq!(plan.markers.len(), 2);
        assert_eq!(plan.unplaced_count, 1);
        assert_eq!(plan.unplaced_preview, ["Atlantis"]);
        assert_eq!(plan.zoom, Some(6));
        assert_eq!(plan.markers[0].status, TripStatus::Past);
        assert_eq!(plan.markers[1].status, TripStatus::Future);

        let center = plan.center.unwrap();
        assert!((center.latitude - (48.8566 + 41.9028) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn filters_by_end_date() {
        let trips = vec![trip("Paris", at(1, 1)), trip("Rome", at(5, 31))];
        let resolver = resolver();

        let past = plan_map(&trips, MapFilter::Past, &resolver, at(6, 1)).unwrap();
        assert_eq!(past.markers.len(), 1);
        assert_eq!(past.markers[0].destination, "Paris");

        let upcoming = plan_map(&trips, MapFilter::CurrentAndFuture, &resolver, at(6, 1)).unwrap();
        assert_eq!(upcoming.markers.len(), 1);
        assert_eq!(upcoming.markers[0].status, TripStatus::Current);
    }

    #[test]
    fn empty_selection_has_no_frame() {
        let plan = plan_map(&[], MapFilter::All, &resolver(), at(6, 1)).unwrap();
        assert_eq!(plan.center, None);
        assert_eq!(plan.zoom, None);
    }
}
