//! mdBook preprocessor that injects generated CLI flag-reference tables.
//!
//! Invoked by the book builder, the preprocessor probes a companion tool's
//! `run` and `compile` subcommands for their `-h` output, renders each
//! options block as a Markdown table, and substitutes the
//! `{{#custom run-flags}}` and `{{#custom compile-flags}}` placeholder
//! tokens inside every chapter's `content` field.
//!
//! The parsing and rewriting primitives live in [`flagtable_core`]; this
//! crate adds the subprocess boundary, the stdin/stdout handshake, and the
//! binary entry point.

pub mod config;
pub mod error;
pub mod generator;
pub mod preprocess;
pub mod probe;

pub use config::FlagTableConfig;
pub use error::{PreprocessorError, Result};
pub use generator::{COMPILE_PLACEHOLDER, FlagTables, RUN_PLACEHOLDER};
