//! Flag-table building blocks for documentation preprocessing.
//!
//! This crate provides the pure pieces of the `mdbook-flagtable`
//! preprocessor: parsing one line of CLI help output into a
//! [`FlagRecord`], rendering a grid of strings as a Markdown table, turning
//! a whole help output into a rendered flag table, and rewriting designated
//! string fields anywhere inside a nested JSON document tree.
//!
//! Nothing here spawns processes or touches stdin/stdout; the subprocess
//! and handshake boundaries live in the `mdbook-flagtable` binary crate, so
//! everything in this crate is unit-testable against literal fixture
//! strings.
//!
//! # Example
//!
//! ```
//! use flagtable_core::{flag_table_from_help, rewrite_string_fields};
//! use serde_json::json;
//!
//! let help = "\
//! Usage: tool run [OPTIONS]
//!
//! Options:
//!   -v, --verbose  Enable verbose output
//! ";
//!
//! let table = flag_table_from_help(help).expect("help has an Options: section");
//!
//! let mut book = json!({
//!     "sections": [{ "Chapter": { "content": "Flags:\n\n{{#flags}}" } }]
//! });
//! rewrite_string_fields(&mut book, "content", |text| {
//!     text.replace("{{#flags}}", &table)
//! });
//!
//! let content = book["sections"][0]["Chapter"]["content"].as_str().unwrap();
//! assert!(content.contains("`--verbose`"));
//! ```

pub mod help;
pub mod parser;
pub mod rewrite;
pub mod table;
pub mod types;

pub use help::{OPTIONS_MARKER, TABLE_HEADER, flag_grid, flag_table_from_help, options_section};
pub use parser::parse_flag_line;
pub use rewrite::rewrite_string_fields;
pub use table::render_markdown_table;
pub use types::FlagRecord;
