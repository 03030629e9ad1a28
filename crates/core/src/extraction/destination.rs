//! Destination extraction
//!
//! Derives a short place name from an event title and location. Rules are
//! ranked and the first success wins:
//!
//! 1. Booking links in the title defer to the location (or a fixed label)
//! 2. The cleaned title itself
//! 3. The first part of the location field
//! 4. Capitalized phrases around travel words in the raw title
//! 5. [`UNKNOWN_DESTINATION`]
//!
//! Extraction never fails and never returns an empty string.

use lazy_static::lazy_static;
use regex::Regex;
use tripscope_domain::constants::{
    GENERIC_HOTEL_DESTINATION, UNKNOWN_DESTINATION, UNKNOWN_LOCATION,
};
use tripscope_domain::utils::text::{collapse_whitespace, is_placeholder, is_url, normalize_name};
use url::Url;

/// Title is cut at the first occurrence of each of these, in order.
const TITLE_SEPARATORS: &[&str] = &[" (Formerly:", " - ", " 〒", "  ", " (Pin"];

const BOOKING_PREFIXES: &[&str] =
    &["Airbnb:", "Booking.com:", "Trip.com:", "Hotels.com:", "Agoda:"];

/// Cleaned titles that name a kind of booking rather than a place.
const GENERIC_TITLES: &[&str] = &["hotel", "airbnb", "booking"];

const PATTERN_STOPWORDS: &[&str] = &["the", "hotel", "flight", "trip", "vacation"];

/// Shortest cleaned title or location accepted as a destination.
const MIN_DESTINATION_CHARS: usize = 3;

lazy_static! {
    /// Japanese postal code and everything after it.
    static ref POSTAL_CODE: Regex =
        Regex::new(r"〒?\d{3}-?\d{4}.*").expect("POSTAL_CODE should compile - this is a bug");

    /// Japanese block address fragment ("1 Chome-2-3 ...").
    static ref CHOME_FRAGMENT: Regex =
        Regex::new(r"\d+ Chome-.*").expect("CHOME_FRAGMENT should compile - this is a bug");

    /// Map pin suffix ("Pin 12 ...").
    static ref PIN_FRAGMENT: Regex =
        Regex::new(r"Pin \d+.*").expect("PIN_FRAGMENT should compile - this is a bug");

    /// "Flight to ", "Trip in ", ... at the start of a title.
    static ref LEADING_TRAVEL_PHRASE: Regex = Regex::new(concat!(
        r"(?i)^(?:flights?|train|bus|drive|road trip|trip|travel|journey|vacation|holiday",
        r"|ferry|cruise)\s+(?:to|in)\s+",
    ))
    .expect("LEADING_TRAVEL_PHRASE should compile - this is a bug");

    /// Venue words dropped from the location field.
    static ref VENUE_WORDS: Regex =
        Regex::new(r"(?i)\b(?:airport|hotel|center|centre|downtown|station)\b")
            .expect("VENUE_WORDS should compile - this is a bug");

    /// Capitalized phrases next to travel words, tried in order.
    static ref TITLE_PATTERNS: Vec<Regex> = [
        r"\b(?:to|in|at)\s+([A-Z][a-zA-Z\s]+?)(?:\s*[-,:]|\s+on\s+|\s+from\s+|$)",
        r"([A-Z][a-zA-Z\s]+?)\s+(?:trip|vacation|holiday|flight|hotel)",
        r"^\s*([A-Z][a-zA-Z\s]+?)\s*[-:]",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("TITLE_PATTERNS should compile - this is a bug"))
    .collect();
}

/// Extract a destination from an event title and location.
///
/// ```
/// use tripscope_core::extraction::destination::extract_destination;
///
/// assert_eq!(extract_destination("Flight to Tokyo", "Narita Airport"), "Tokyo");
/// assert_eq!(extract_destination("Airbnb: Beach House Miami", ""), "Beach House Miami");
/// assert_eq!(extract_destination("Hotel", "Kyoto Station Hotel, Kyoto"), "Kyoto");
/// assert_eq!(extract_destination("", ""), "Unknown");
/// ```
#[must_use]
pub fn extract_destination(title: &str, location: &str) -> String {
    let title = title.trim();
    let location = location.trim();

    if is_url(title) {
        return from_link_title(title, location);
    }

    from_title(title)
        .or_else(|| from_location(location))
        .or_else(|| from_title_patterns(title))
        .unwrap_or_else(|| UNKNOWN_DESTINATION.to_string())
}

fn from_link_title(title: &str, location: &str) -> String {
    let usable_location = !is_placeholder(location) && !is_url(location);

    if usable_location {
        return extract_destination(location, "");
    }

    if is_trip_com_hotel(title) {
        GENERIC_HOTEL_DESTINATION.to_string()
    } else {
        UNKNOWN_LOCATION.to_string()
    }
}

/// A trip.com hotel page carries a numeric `hotelid` query parameter.
fn is_trip_com_hotel(link: &str) -> bool {
    Url::parse(link).is_ok_and(|url| {
        url.host_str().is_some_and(|host| host.ends_with("trip.com"))
            && url.query_pairs().any(|(key, value)| {
                key.eq_ignore_ascii_case("hotelid")
                    && !value.is_empty()
                    && value.chars().all(|c| c.is_ascii_digit())
            })
    })
}

fn from_title(title: &str) -> Option<String> {
    let cleaned = clean_title(title);
    let lowered = cleaned.to_lowercase();

    let usable = cleaned.chars().count() >= MIN_DESTINATION_CHARS
        && !GENERIC_TITLES.contains(&lowered.as_str());
    usable.then(|| normalize_name(&cleaned))
}

/// Strip address noise, booking prefixes and leading travel phrases.
fn clean_title(title: &str) -> String {
    let mut cleaned = title.trim().to_string();

    for separator in TITLE_SEPARATORS {
        if let Some((head, _)) = cleaned.split_once(separator) {
            cleaned = head.trim().to_string();
        }
    }

    for fragment in [&*POSTAL_CODE, &*CHOME_FRAGMENT, &*PIN_FRAGMENT] {
        let stripped = fragment.replace(&cleaned, "").trim().to_string();
        cleaned = stripped;
    }

    for prefix in BOOKING_PREFIXES {
        if let Some(rest) = strip_prefix_ignore_case(&cleaned, prefix) {
            cleaned = rest.trim().to_string();
        }
    }

    let cleaned = LEADING_TRAVEL_PHRASE.replace(&cleaned, "");
    collapse_whitespace(&cleaned)
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let head = text.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &text[prefix.len()..])
}

fn from_location(location: &str) -> Option<String> {
    if is_placeholder(location) || is_url(location) {
        return None;
    }

    let first_part = location.split(',').next().unwrap_or_default();
    let stripped = collapse_whitespace(&VENUE_WORDS.replace_all(first_part, ""));

    (stripped.chars().count() >= MIN_DESTINATION_CHARS).then(|| normalize_name(&stripped))
}

fn from_title_patterns(title: &str) -> Option<String> {
    TITLE_PATTERNS.iter().find_map(|pattern| {
        let capture = pattern.captures(title)?.get(1)?;
        let candidate = collapse_whitespace(capture.as_str());
        let lowered = candidate.to_lowercase();

        let stopword = PATTERN_STOPWORDS.contains(&lowered.as_str());
        (!candidate.is_empty() && !stopword).then_some(candidate)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleaned_title_wins() {
        assert_eq!(extract_destination("Paris Trip", ""), "Paris Trip");
        assert_eq!(extract_destination("Trip to Lisbon", "Airport"), "Lisbon");
        assert_eq!(extract_destination("Vacation in Bali", ""), "Bali");
    }

    #[test]
    fn booking_prefix_is_stripped() {
        assert_eq!(
            extract_destination("Booking.com: Hotel Arts Barcelona", ""),
            "Hotel Arts Barcelona"
        );
        assert_eq!(extract_destination("AGODA: riverside inn", ""), "Riverside Inn");
    }

    #[test]
    fn address_noise_is_removed() {
        assert_eq!(
            extract_destination(
                "Hotel Gracery Shinjuku (Formerly: Shinjuku Hotel) - 1-19-1 Kabukicho",
                ""
            ),
            "Hotel Gracery Shinjuku"
        );
        assert_eq!(extract_destination("Ryokan Sakura 〒600-8216 Kyoto", ""), "Ryokan Sakura");
        assert_eq!(extract_destination("Sakura House 604-8005 Kyoto", ""), "Sakura House");
        assert_eq!(extract_destination("Guesthouse Ume 3 Chome-5-1 Nakagyo", ""), "Guesthouse Ume");
        assert_eq!(extract_destination("Momiji Lodge Pin 42 Arashiyama", ""), "Momiji Lodge");
    }

    #[test]
    fn generic_title_falls_back_to_location() {
        assert_eq!(extract_destination("Hotel", "Kyoto Station Hotel, Kyoto"), "Kyoto");
        assert_eq!(extract_destination("Airbnb", "downtown denver, CO"), "Denver");
        assert_eq!(extract_destination("TA", "Narita Airport"), "Narita");
    }

    #[test]
    fn placeholder_location_is_ignored() {
        assert_eq!(extract_destination("Hotel", "None"), "Unknown");
        assert_eq!(extract_destination("Hotel", "https://maps.google.com/?q=1,2"), "Unknown");
    }

    #[test]
    fn title_patterns_are_last_resort() {
        assert_eq!(extract_destination("Hotel - Kyoto", ""), "Unknown");
        assert_eq!(from_title_patterns("Hotel - Kyoto"), None);
        assert_eq!(from_title_patterns("Drive to Boston, early"), Some("Boston".to_string()));
        assert_eq!(from_title_patterns("Rome vacation"), Some("Rome".to_string()));
        assert_eq!(from_title_patterns("Oslo: ferry"), Some("Oslo".to_string()));
    }

    #[test]
    fn link_titles_defer_to_location() {
        let link = "https://www.trip.com/hotels/detail/?hotelId=123456";

        assert_eq!(extract_destination(link, "Kyoto"), "Kyoto");
        assert_eq!(extract_destination(link, ""), "Hotel");
        assert_eq!(extract_destination("https://www.airbnb.com/rooms/42", ""), "Unknown Location");
        assert_eq!(
            extract_destination("https://www.airbnb.com/rooms/42", "https://airbnb.com"),
            "Unknown Location"
        );
    }

    #[test]
    fn never_empty() {
        for (title, location) in [("", ""), ("  ", "null"), ("??", "x")] {
            assert!(!extract_destination(title, location).is_empty());
        }
    }
}
