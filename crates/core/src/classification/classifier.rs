//! Rule-based travel classifier
//!
//! Scores a scan buffer (see [`super::normalizer::scan_buffer`]) against
//! three keyword sets:
//! - exclusions, which veto the event before anything else is looked at
//! - booking platforms, any one of which accepts the event
//! - travel keywords, each distinct hit adding one to the score
//!
//! Classification is pure: the same buffer always yields the same verdict.

use serde::Serialize;

use super::keywords::{BOOKING_PLATFORMS, EXCLUSION_TERMS, TRAVEL_KEYWORDS};

/// Verdict for one scan buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub accepted: bool,
    pub travel_score: u32,
    pub has_booking_platform: bool,
    /// First exclusion term found, when the event was vetoed.
    pub excluded_by: Option<&'static str>,
}

impl Classification {
    fn excluded(term: &'static str) -> Self {
        Self {
            accepted: false,
            travel_score: 0,
            has_booking_platform: false,
            excluded_by: Some(term),
        }
    }
}

/// Keyword classifier over static term tables.
#[derive(Debug, Clone, Copy)]
pub struct KeywordClassifier {
    exclusions: &'static [&'static str],
    platforms: &'static [&'static str],
    keywords: &'static [&'static str],
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new(EXCLUSION_TERMS, BOOKING_PLATFORMS, TRAVEL_KEYWORDS)
    }
}

impl KeywordClassifier {
    /// Build a classifier over custom tables. Entries must be lower-case.
    #[must_use]
    pub const fn new(
        exclusions: &'static [&'static str],
        platforms: &'static [&'static str],
        keywords: &'static [&'static str],
    ) -> Self {
        Self { exclusions, platforms, keywords }
    }

    /// Classify a lower-cased scan buffer.
    #[must_use]
    pub fn classify(&self, buffer: &str) -> Classification {
        if let Some(term) = self.exclusions.iter().copied().find(|term| buffer.contains(term)) {
            return Classification::excluded(term);
        }

        let has_booking_platform = self.platforms.iter().any(|p| buffer.contains(p));
        let hits = self.keywords.iter().filter(|k| buffer.contains(*k)).count();
        let travel_score = u32::try_from(hits).unwrap_or(u32::MAX);

        Classification {
            accepted: has_booking_platform || travel_score >= 1,
            travel_score,
            has_booking_platform,
            excluded_by: None,
        }
    }
}
