//! Pure string helpers shared by the extraction pipeline.

/// Placeholder values some calendar clients write into empty fields.
const PLACEHOLDERS: [&str; 2] = ["none", "null"];

/// Title-case each word while preserving acronyms and mixed-case words.
///
/// ```
/// use tripscope_domain::utils::text::normalize_name;
///
/// assert_eq!(normalize_name("beach house miami"), "Beach House Miami");
/// assert_eq!(normalize_name("JFK terminal"), "JFK Terminal");
/// assert_eq!(normalize_name("McCarran"), "McCarran");
/// ```
#[must_use]
pub fn normalize_name(input: &str) -> String {
    input
        .split_whitespace()
        .map(|word| {
            let has_upper = word.chars().any(char::is_uppercase);
            let has_lower = word.chars().any(char::is_lowercase);

            if has_upper && has_lower
                || word.chars().all(|c| c.is_uppercase() || !c.is_alphabetic())
            {
                word.to_string()
            } else {
                capitalize(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Plain title case: first letter of every word upper, the rest lower.
///
/// Used for cache keys, where "NEW YORK" and "new york" must collapse to the
/// same entry.
#[must_use]
pub fn title_case(input: &str) -> String {
    input.split_whitespace().map(capitalize).collect::<Vec<_>>().join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut result = first.to_uppercase().collect::<String>();
            result.push_str(chars.as_str().to_lowercase().as_str());
            result
        }
    }
}

/// Whether the text is an http(s) link (scheme matched case-insensitively).
#[must_use]
pub fn is_url(text: &str) -> bool {
    let lower = text.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Whether a field is empty or holds a placeholder such as "None".
#[must_use]
pub fn is_placeholder(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.is_empty() || PLACEHOLDERS.iter().any(|p| trimmed.eq_ignore_ascii_case(p))
}

/// Collapse runs of whitespace into single spaces and trim the ends.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Keep at most `max_chars` characters, respecting UTF-8 boundaries.
#[must_use]
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
