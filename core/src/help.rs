//! Help-text-to-table pipeline.
//!
//! Pure functions from captured help text to a rendered Markdown table, so
//! the whole pipeline is unit-testable against fixture strings without
//! spawning the tool that produced the text. The subprocess boundary lives
//! with the caller.

use tracing::debug;

use crate::parser::parse_flag_line;
use crate::table::render_markdown_table;

/// Literal marker line that opens the flag block in help output.
pub const OPTIONS_MARKER: &str = "Options:\n";

/// Header row prepended to every flag table.
pub const TABLE_HEADER: [&str; 3] = ["Shorthand", "Longhand", "Description"];

/// Returns the text following the first `Options:` line, to end of output.
///
/// The help text is trimmed first, so a trailing `Options:` with no flag
/// lines after it yields `Some("")` only when the marker still ends with a
/// newline; a bare marker at end of text yields `None`.
///
/// # Examples
///
/// ```
/// use flagtable_core::options_section;
///
/// let help = "Usage: tool run [OPTIONS]\n\nOptions:\n  -h, --help  Print help\n";
/// assert_eq!(options_section(help), Some("  -h, --help  Print help"));
/// assert_eq!(options_section("Usage: tool\n"), None);
/// ```
pub fn options_section(help: &str) -> Option<&str> {
    let trimmed = help.trim();
    let start = trimmed.find(OPTIONS_MARKER)? + OPTIONS_MARKER.len();
    Some(&trimmed[start..])
}

/// Builds the three-column flag grid from the text of an options section.
///
/// Each non-empty line is parsed as a flag line and appended as a row
/// (shorthand and longhand as inline code or empty, description as-is).
/// The fixed header row is prepended.
pub fn flag_grid(options_text: &str) -> Vec<Vec<String>> {
    let mut grid = vec![TABLE_HEADER.iter().map(|cell| cell.to_string()).collect()];

    for line in options_text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        grid.push(parse_flag_line(line).to_row());
    }

    grid
}

/// Renders the flag table for a whole help output, if it has an `Options:`
/// section.
///
/// # Examples
///
/// ```
/// use flagtable_core::flag_table_from_help;
///
/// let help = "\
/// Usage: tool run [OPTIONS]
///
/// Options:
///   -v, --verbose  Enable verbose output
///   --name <NAME>  Set the name
/// ";
///
/// let table = flag_table_from_help(help).unwrap();
/// assert!(table.starts_with("Shorthand | Longhand | Description | \n"));
/// assert!(table.contains("`-v` | `--verbose` | Enable verbose output | \n"));
/// assert!(table.contains(" | `--name <NAME>` | Set the name | \n"));
/// ```
pub fn flag_table_from_help(help: &str) -> Option<String> {
    let section = options_section(help)?;
    let grid = flag_grid(section);
    debug!(rows = grid.len() - 1, "assembled flag grid");
    Some(render_markdown_table(&grid))
}
