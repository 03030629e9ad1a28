//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Title display
pub const MAX_TITLE_LENGTH: usize = 50;
pub const TITLE_TRUNCATE_SUFFIX: &str = "...";
pub const UNTITLED_TRIP: &str = "Untitled Trip";

// Trip record limits
pub const DEFAULT_DESCRIPTION_MAX_LENGTH: usize = 200;
pub const SECONDS_PER_DAY: i64 = 86_400;
pub const MIN_TRIP_DAYS: i64 = 1;

// Destination sentinels
pub const UNKNOWN_DESTINATION: &str = "Unknown";
pub const UNKNOWN_LOCATION: &str = "Unknown Location";
pub const GENERIC_HOTEL_DESTINATION: &str = "Hotel";

// Presentation aggregates
pub const TOP_DESTINATIONS_LIMIT: usize = 10;
pub const TIMELINE_LIMIT: usize = 20;
pub const MONTHLY_WINDOW_DAYS: i64 = 365;
pub const MONTHLY_FALLBACK_LIMIT: usize = 20;
pub const UNPLACED_PREVIEW_LIMIT: usize = 5;

// Coordinate cache
pub const DEFAULT_CACHE_FILE: &str = "coordinates_cache.json";
