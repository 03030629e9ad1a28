//! Presentation aggregates: summary, charts, table and map data

pub mod charts;
pub mod map;
pub mod stats;
pub mod table;

pub use charts::{monthly_counts, timeline, top_destinations, MonthlyCount, TimelineEntry};
pub use map::{plan_map, zoom_for, MapFilter, MapMarker, MapPlan};
pub use stats::{destination_counts, summarize, DestinationCount, NextTrip, TripSummary};
pub use table::{filter_options, trip_table, FilterOptions, TripFilter, TripRow, TripSortOrder};
