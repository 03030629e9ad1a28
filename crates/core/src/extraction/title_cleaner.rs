//! Display title cleaning

use lazy_static::lazy_static;
use regex::Regex;
use tripscope_domain::constants::{MAX_TITLE_LENGTH, UNTITLED_TRIP};
use tripscope_domain::utils::text::{collapse_whitespace, is_url};
use tripscope_domain::utils::title::{cut_at_natural_break, truncate_title};

/// Preferred cut points for long titles, in order.
const NATURAL_BREAKS: &[&str] = &[" - ", ", ", " ("];

lazy_static! {
    static ref EMBEDDED_URL: Regex =
        Regex::new(r"(?i)https?://\S+").expect("EMBEDDED_URL should compile - this is a bug");
}

/// Label shown instead of a bare booking link, keyed by a URL fragment.
const LINK_LABELS: &[(&str, &str)] = &[
    ("trip.com", "Trip.com Booking"),
    ("booking.com", "Booking.com Reservation"),
    ("airbnb", "Airbnb Stay"),
    ("google.com/maps", "Location"),
    ("maps.google", "Location"),
    ("goo.gl/maps", "Location"),
];

const FALLBACK_LINK_LABEL: &str = "Hotel Booking";

/// Produce a display title of at most 50 characters.
///
/// ```
/// use tripscope_core::extraction::title_cleaner::clean_trip_title;
///
/// assert_eq!(clean_trip_title("https://www.airbnb.com/rooms/42"), "Airbnb Stay");
/// assert_eq!(clean_trip_title("Flight   to Tokyo"), "Flight to Tokyo");
/// assert_eq!(clean_trip_title(""), "Untitled Trip");
/// ```
#[must_use]
pub fn clean_trip_title(title: &str) -> String {
    let title = title.trim();

    if is_url(title) {
        return link_label(title).to_string();
    }

    let cleaned = collapse_whitespace(&EMBEDDED_URL.replace_all(title, " "));

    if cleaned.is_empty() {
        return UNTITLED_TRIP.to_string();
    }

    if cleaned.chars().count() <= MAX_TITLE_LENGTH {
        return cleaned;
    }

    cut_at_natural_break(&cleaned, NATURAL_BREAKS, MAX_TITLE_LENGTH)
        .map(|head| head.trim().to_string())
        .filter(|head| !head.is_empty())
        .unwrap_or_else(|| truncate_title(&cleaned))
}

fn link_label(link: &str) -> &'static str {
    let lowered = link.to_lowercase();
    LINK_LABELS
        .iter()
        .find(|(fragment, _)| lowered.contains(fragment))
        .map_or(FALLBACK_LINK_LABEL, |(_, label)| *label)
}
