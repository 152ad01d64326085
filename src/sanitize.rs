//! File name sanitization for downloaded assets.

use regex::Regex;
use std::sync::OnceLock;

static STRIP_PATTERN: OnceLock<Regex> = OnceLock::new();

fn strip_pattern() -> &'static Regex {
    STRIP_PATTERN.get_or_init(|| Regex::new("[^a-z0-9-]").unwrap())
}

/// Turn free-form text into a file-system-safe file name.
///
/// The text is lowercased, runs of word separators (whitespace, underscores,
/// hyphens) collapse to a single hyphen, and every remaining character
/// outside `a-z`, `0-9` and `-` is stripped before the extension is
/// appended. Always produces a string; the stem may be empty.
///
/// ```
/// use tapedeck::filenamify;
///
/// assert_eq!(
///     filenamify("Hello/WHAT/ARE/ you /DOING?", ".jpg"),
///     "hellowhatare-you-doing.jpg"
/// );
/// ```
pub fn filenamify(name: &str, extension: &str) -> String {
    let mut kebab = String::with_capacity(name.len());
    let mut pending_separator = false;

    for c in name.chars() {
        if c.is_whitespace() || c == '_' || c == '-' {
            pending_separator = !kebab.is_empty();
            continue;
        }
        if pending_separator {
            kebab.push('-');
            pending_separator = false;
        }
        for lower in c.to_lowercase() {
            kebab.push(lower);
        }
    }

    let stem = strip_pattern().replace_all(&kebab, "");
    format!("{}{}", stem.trim_matches('-'), extension)
}
