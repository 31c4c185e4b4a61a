//! Markdown table rendering.
//!
//! The renderer is column-count-agnostic: it emits whatever grid it is
//! given, treating the first row as the header. The flag pipeline always
//! feeds it three columns, but nothing here depends on that.

/// Renders a grid of strings as a Markdown table.
///
/// The first row is emitted as the header, followed by a separator row of
/// `---` cells matching the header's cell count, followed by the remaining
/// rows. Every cell is terminated by `" | "` and every row by a newline.
///
/// Every row must have the same number of cells as the header. This is a
/// caller obligation and is not checked: a ragged grid renders as a
/// silently malformed table. An empty grid renders as an empty string.
///
/// # Examples
///
/// ```
/// use flagtable_core::render_markdown_table;
///
/// let grid = vec![
///     vec!["A".to_string(), "B".to_string()],
///     vec!["1".to_string(), "2".to_string()],
/// ];
/// assert_eq!(render_markdown_table(&grid), "A | B | \n--- | --- | \n1 | 2 | \n");
/// ```
pub fn render_markdown_table(grid: &[Vec<String>]) -> String {
    let mut out = String::new();
    let Some((header, rows)) = grid.split_first() else {
        return out;
    };

    for cell in header {
        out.push_str(cell);
        out.push_str(" | ");
    }
    out.push('\n');
    for _ in header {
        out.push_str("--- | ");
    }
    out.push('\n');

    for row in rows {
        for cell in row {
            out.push_str(cell);
            out.push_str(" | ");
        }
        out.push('\n');
    }

    out
}
