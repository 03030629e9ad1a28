//! Keyword sets used by the travel classifier
//!
//! All entries are lower-case and matched as plain substrings of the scan
//! buffer, so multi-word phrases and emoji work the same way as words.

/// Terms that veto an event regardless of any travel signal.
pub const EXCLUSION_TERMS: &[&str] = &[
    "meeting",
    "call",
    "zoom",
    "teams",
    "virtual",
    "webinar",
    "conference call",
    "standup",
    "stand-up",
    "interview",
    "dental",
    "doctor",
    "appointment",
    "birthday",
    "anniversary",
    "party",
    "work",
    "office",
];

/// Booking platforms. Any one of these accepts an event on its own.
pub const BOOKING_PLATFORMS: &[&str] = &[
    "airbnb",
    "booking.com",
    "agoda",
    "trip.com",
    "hotels.com",
    "expedia",
    "kayak",
    "priceline",
    "tripadvisor",
    "hostelworld",
    "vrbo",
    "trivago",
];

/// Every term that contributes one point to the travel score.
pub const TRAVEL_KEYWORDS: &[&str] = &[
    // Booking platforms and hotel chains
    "airbnb",
    "booking.com",
    "agoda",
    "trip.com",
    "hotels.com",
    "expedia",
    "kayak",
    "priceline",
    "tripadvisor",
    "hostelworld",
    "vrbo",
    "trivago",
    "marriott",
    "hilton",
    "hyatt",
    // Transportation
    "flight",
    "flights",
    "fly",
    "flying",
    "airport",
    "airline",
    "train",
    "rail",
    "railway",
    "amtrak",
    "eurostar",
    "bus",
    "coach",
    "greyhound",
    "flixbus",
    "rental car",
    "rent a car",
    "car rental",
    "hire car",
    "uber",
    "lyft",
    "taxi",
    "transfer",
    // Accommodation
    "hotel",
    "hotels",
    "accommodation",
    "motel",
    "resort",
    "hostel",
    "lodge",
    "inn",
    "suite",
    "apartment",
    "villa",
    // Trips and holidays
    "trip",
    "travel",
    "traveling",
    "travelling",
    "journey",
    "vacation",
    "vacations",
    "holiday",
    "holidays",
    "getaway",
    "visit",
    "visiting",
    "tour",
    "tourist",
    "tourism",
    "cruise",
    "cruising",
    "sailing",
    // Check-in/out and reservations
    "check-in",
    "checkin",
    "check in",
    "check-out",
    "checkout",
    "check out",
    "reservation",
    "reservations",
    "booked",
    "booking",
    // Emoji
    "✈️",
    "🏨",
    "🚂",
    "🚗",
    "🏖️",
    "🗺️",
    "🧳",
    "🎫",
    "🏝️",
    "⛱️",
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn keyword_sets_are_lowercase_and_distinct() {
        for set in [EXCLUSION_TERMS, BOOKING_PLATFORMS, TRAVEL_KEYWORDS] {
            let unique: HashSet<_> = set.iter().collect();
            assert_eq!(unique.len(), set.len());
            assert!(set.iter().all(|term| term.to_lowercase() == *term));
        }
    }

    #[test]
    fn every_platform_also_scores() {
        assert!(BOOKING_PLATFORMS.iter().all(|p| TRAVEL_KEYWORDS.contains(p)));
    }
}
