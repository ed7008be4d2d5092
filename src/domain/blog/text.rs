use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Strip regular and non-breaking spaces from a category display name
/// so it can be used as a stable lookup key.
pub fn normalize_category_name(name: &str) -> String {
    name.chars().filter(|c| *c != '\u{a0}' && *c != ' ').collect()
}

/// Collapse post text into a single whitespace-normalized line
pub fn normalize_content(text: &str) -> String {
    let spaced = text.replace('\u{a0}', " ");
    WHITESPACE_PATTERN
        .replace_all(&spaced, " ")
        .trim()
        .to_string()
}

/// Double every backslash; the listing endpoint emits unescaped ones.
pub fn escape_backslashes(body: &str) -> String {
    body.replace('\\', "\\\\")
}
