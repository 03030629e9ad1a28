//! Pure string utility functions for title extraction and manipulation

use crate::constants::{MAX_TITLE_LENGTH, TITLE_TRUNCATE_SUFFIX};

/// Cut a title at the first natural break found inside the display window.
///
/// Separators are tried in order; the first one that occurs within the
/// leading `window` characters wins and everything from its first
/// occurrence onward is dropped.
///
/// ```
/// use tripscope_domain::utils::title::cut_at_natural_break;
///
/// let title = "Hotel Gracery Shinjuku - Kabukicho 1-19-1, Tokyo";
/// assert_eq!(
///     cut_at_natural_break(title, &[" - ", ", "], 50),
///     Some("Hotel Gracery Shinjuku".to_string())
/// );
/// ```
#[must_use]
pub fn cut_at_natural_break(title: &str, separators: &[&str], window: usize) -> Option<String> {
    let head = crate::utils::text::truncate_chars(title, window);
    separators
        .iter()
        .find(|sep| head.contains(*sep))
        .and_then(|sep| title.split(*sep).next())
        .map(ToString::to_string)
}

/// Truncate long titles to a maximum length with ellipsis.
///
/// If the title exceeds `MAX_TITLE_LENGTH` characters, keeps the leading
/// characters and appends `TITLE_TRUNCATE_SUFFIX` so the result is exactly
/// `MAX_TITLE_LENGTH` characters long.
///
/// # Examples
///
/// ```
/// use tripscope_domain::utils::title::truncate_title;
///
/// assert_eq!(truncate_title("Short Title"), "Short Title");
///
/// let long = "x".repeat(200);
/// assert_eq!(truncate_title(&long).chars().count(), 50);
/// ```
#[must_use]
pub fn truncate_title(title: &str) -> String {
    if title.chars().count() > MAX_TITLE_LENGTH {
        let keep = MAX_TITLE_LENGTH - TITLE_TRUNCATE_SUFFIX.len();
        format!("{}{}", crate::utils::text::truncate_chars(title, keep), TITLE_TRUNCATE_SUFFIX)
    } else {
        title.to_string()
    }
}
