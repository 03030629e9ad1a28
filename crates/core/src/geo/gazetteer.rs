//! Static coordinate tables
//!
//! Local lookups used when a destination is not in the coordinate cache.
//! None of these tables ever touch the network.

use tripscope_domain::Coordinates;

/// Cities a fresh coordinate cache starts with.
pub const SEED_CITIES: &[(&str, Coordinates)] = &[
    ("New York", Coordinates::fixed(40.7128, -74.0060)),
    ("London", Coordinates::fixed(51.5074, -0.1278)),
    ("Paris", Coordinates::fixed(48.8566, 2.3522)),
    ("Tokyo", Coordinates::fixed(35.6762, 139.6503)),
    ("Barcelona", Coordinates::fixed(41.3851, 2.1734)),
    ("Rome", Coordinates::fixed(41.9028, 12.4964)),
    ("Berlin", Coordinates::fixed(52.5200, 13.4050)),
    ("Madrid", Coordinates::fixed(40.4168, -3.7038)),
    ("Amsterdam", Coordinates::fixed(52.3676, 4.9041)),
    ("Prague", Coordinates::fixed(50.0755, 14.4378)),
    ("Vienna", Coordinates::fixed(48.2082, 16.3738)),
    ("Bangkok", Coordinates::fixed(13.7563, 100.5018)),
    ("Singapore", Coordinates::fixed(1.3521, 103.8198)),
    ("Dubai", Coordinates::fixed(25.2048, 55.2708)),
    ("Sydney", Coordinates::fixed(-33.8688, 151.2093)),
    ("Miami", Coordinates::fixed(25.7617, -80.1918)),
    ("Los Angeles", Coordinates::fixed(34.0522, -118.2437)),
    ("San Francisco", Coordinates::fixed(37.7749, -122.4194)),
    ("Chicago", Coordinates::fixed(41.8781, -87.6298)),
    ("Boston", Coordinates::fixed(42.3601, -71.0589)),
    // Japan
    ("Fukuoka", Coordinates::fixed(33.5904, 130.4017)),
    ("Yanagawa", Coordinates::fixed(33.1633, 130.4056)),
    ("Hiroshima", Coordinates::fixed(34.3853, 132.4553)),
    ("Miyajima", Coordinates::fixed(34.2956, 132.3195)),
    ("Nishifujinomoricho", Coordinates::fixed(34.9877, 135.7529)),
    ("Murasakino", Coordinates::fixed(35.0377, 135.7529)),
    ("Shinosaka", Coordinates::fixed(34.7338, 135.5004)),
    ("Beppu", Coordinates::fixed(33.2846, 131.4910)),
    ("East 21 Tokyo", Coordinates::fixed(35.6762, 139.6503)),
];

/// Place names matched as case-insensitive substrings of a destination.
pub const GAZETTEER: &[(&str, Coordinates)] = &[
    ("matsubaya", Coordinates::fixed(34.6937, 135.5023)),
    ("osaka", Coordinates::fixed(34.6937, 135.5023)),
    ("kyoto", Coordinates::fixed(35.0116, 135.7681)),
    ("tokyo", Coordinates::fixed(35.6762, 139.6503)),
    ("hiroshima", Coordinates::fixed(34.3853, 132.4553)),
    ("nagasaki", Coordinates::fixed(32.7503, 129.8777)),
    ("fukuoka", Coordinates::fixed(33.5904, 130.4017)),
    ("sapporo", Coordinates::fixed(43.0642, 141.3469)),
    ("nara", Coordinates::fixed(34.6851, 135.8048)),
    ("yokohama", Coordinates::fixed(35.4437, 139.6380)),
];

const JAPAN_CENTROID: Coordinates = Coordinates::fixed(36.2048, 138.2529);

/// Words that place a destination in a region without naming a city.
pub const REGION_HINTS: &[(&[&str], Coordinates)] =
    &[(&["ryokan", "onsen", "shrine", "temple"], JAPAN_CENTROID)];

/// Country names and their approximate centroids, matched as whole words.
pub const COUNTRIES: &[(&[&str], Coordinates)] = &[
    (&["usa", "united states", "america"], Coordinates::fixed(39.8283, -98.5795)),
    (&["uk", "england", "britain"], Coordinates::fixed(54.0, -2.0)),
    (&["spain", "españa"], Coordinates::fixed(40.4637, -3.7492)),
    (&["japan", "日本"], JAPAN_CENTROID),
];

/// First gazetteer place contained in the destination.
#[must_use]
pub fn lookup_place(destination: &str) -> Option<Coordinates> {
    let lowered = destination.to_lowercase();
    GAZETTEER.iter().find(|(place, _)| lowered.contains(place)).map(|(_, coords)| *coords)
}

/// Region hint, then country name.
#[must_use]
pub fn lookup_region(destination: &str) -> Option<Coordinates> {
    let lowered = destination.to_lowercase();

    REGION_HINTS
        .iter()
        .find(|(words, _)| words.iter().any(|word| lowered.contains(word)))
        .or_else(|| {
            COUNTRIES
                .iter()
                .find(|(names, _)| names.iter().any(|name| contains_word(&lowered, name)))
        })
        .map(|(_, coords)| *coords)
}

/// Whole-word (or whole-phrase) containment for ASCII names. Scripts written
/// without spaces fall back to plain containment.
fn contains_word(haystack: &str, needle: &str) -> bool {
    if !needle.is_ascii() {
        return haystack.contains(needle);
    }

    haystack.match_indices(needle).any(|(idx, _)| {
        let before = haystack[..idx].chars().next_back();
        let after = haystack[idx + needle.len()..].chars().next();
        !before.is_some_and(|c| c.is_ascii_alphanumeric())
            && !after.is_some_and(|c| c.is_ascii_alphanumeric())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_and_gazetteer_coordinates_are_valid() {
        assert!(SEED_CITIES.iter().all(|(_, c)| c.is_valid()));
        assert!(GAZETTEER.iter().all(|(_, c)| c.is_valid()));
    }

    #[test]
    fn place_lookup_matches_substrings() {
        assert_eq!(lookup_place("Kyoto Machiya Stay"), Some(Coordinates::fixed(35.0116, 135.7681)));
        assert_eq!(lookup_place("Hotel Matsubaya"), Some(Coordinates::fixed(34.6937, 135.5023)));
        assert_eq!(lookup_place("Lisbon"), None);
    }

    #[test]
    fn region_hint_precedes_country() {
        assert_eq!(lookup_region("Hakone Onsen Ryokan"), Some(JAPAN_CENTROID));
        assert_eq!(
            lookup_region("Road trip across the USA"),
            Some(Coordinates::fixed(39.8283, -98.5795))
        );
        assert_eq!(lookup_region("Cotswolds, England"), Some(Coordinates::fixed(54.0, -2.0)));
    }

    #[test]
    fn country_names_need_word_boundaries() {
        // "uk" inside "Fukuoka" or "Dukes" is not the UK
        assert_eq!(lookup_region("Dukes Hotel"), None);
        assert_eq!(lookup_region("Weekend in the UK"), Some(Coordinates::fixed(54.0, -2.0)));
        assert_eq!(lookup_region("日本旅行"), Some(JAPAN_CENTROID));
    }
}
