//! Flag-line parsing.
//!
//! One trimmed line of CLI help output is matched against a single anchored
//! pattern with three capture groups, evaluated left to right:
//!
//! 1. optional shorthand: a dash followed by a non-space run, recognized
//!    only when followed by a literal `", "` separator;
//! 2. optional longhand: a double dash followed by a non-space run,
//!    optionally followed by a `<...>` value hint;
//! 3. description: the remainder of the line after optional spaces.
//!
//! Parsing never fails. A line with no dash-prefixed tokens yields a
//! description-only [`FlagRecord`], and unmatched groups surface as `None`.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::FlagRecord;

/// Group 1: shorthand (with `-`), group 2: longhand (with `--`, optional
/// value hint), group 3: description. Every group is optional, so the
/// pattern matches any line.
static FLAG_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(-\S+), )?(--\S+(?: <[^>]*>)?)? *(.*)$").expect("static regex must compile")
});

/// Parses one line of help text into a [`FlagRecord`].
///
/// The line is trimmed before matching, so callers may pass raw help lines
/// with their original indentation.
///
/// # Examples
///
/// ```
/// use flagtable_core::parse_flag_line;
///
/// let record = parse_flag_line("  -v, --verbose  Enable verbose output");
/// assert_eq!(record.shorthand.as_deref(), Some("-v"));
/// assert_eq!(record.longhand.as_deref(), Some("--verbose"));
/// assert_eq!(record.description, "Enable verbose output");
///
/// let record = parse_flag_line("A free-text continuation line");
/// assert!(record.is_description_only());
/// assert_eq!(record.description, "A free-text continuation line");
/// ```
pub fn parse_flag_line(line: &str) -> FlagRecord {
    let line = line.trim();
    let Some(captures) = FLAG_LINE_RE.captures(line) else {
        // All groups are optional, so the pattern matches every line; this
        // arm exists only to keep the function total.
        return FlagRecord {
            shorthand: None,
            longhand: None,
            description: line.to_string(),
        };
    };

    FlagRecord {
        shorthand: captures.get(1).map(|m| m.as_str().to_string()),
        longhand: captures.get(2).map(|m| m.as_str().to_string()),
        description: captures
            .get(3)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default(),
    }
}
