//! Core data model for parsed flag lines.
//!
//! The types here are deliberately small: one help line becomes one
//! [`FlagRecord`], and a sequence of records becomes the body of a Markdown
//! table. Serialization support with [`serde`] is provided so records can
//! round-trip through JSON when callers want to inspect or cache them.

use serde::{Deserialize, Serialize};

/// A single parsed help line: optional shorthand, optional longhand, and a
/// free-text description.
///
/// At most the flag halves are absent; a line with no recognizable flag at
/// all still yields a description-only record rather than an error. How
/// absence is rendered is the caller's decision (the table pipeline renders
/// it as an empty cell).
///
/// # Examples
///
/// ```
/// use flagtable_core::FlagRecord;
///
/// let record = FlagRecord {
///     shorthand: Some("-v".to_string()),
///     longhand: Some("--verbose".to_string()),
///     description: "Enable verbose output".to_string(),
/// };
/// assert_eq!(record.to_row(), vec!["`-v`", "`--verbose`", "Enable verbose output"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FlagRecord {
    /// Short form including its dash (e.g. `-v`).
    pub shorthand: Option<String>,
    /// Long form including its dashes and any value hint (e.g. `--name <NAME>`).
    pub longhand: Option<String>,
    /// Description text, possibly empty.
    pub description: String,
}

impl FlagRecord {
    /// Returns `true` if neither flag half was recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use flagtable_core::FlagRecord;
    ///
    /// let record = FlagRecord {
    ///     shorthand: None,
    ///     longhand: None,
    ///     description: "A continuation line".to_string(),
    /// };
    /// assert!(record.is_description_only());
    /// ```
    pub fn is_description_only(&self) -> bool {
        self.shorthand.is_none() && self.longhand.is_none()
    }

    /// Converts the record into a three-cell table row.
    ///
    /// Flag halves are wrapped as inline code; absent halves become empty
    /// cells. The description is passed through as-is.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.shorthand.as_deref().map(code_span).unwrap_or_default(),
            self.longhand.as_deref().map(code_span).unwrap_or_default(),
            self.description.clone(),
        ]
    }
}

/// Wraps a string in Markdown inline-code backticks.
fn code_span(text: &str) -> String {
    format!("`{text}`")
}
