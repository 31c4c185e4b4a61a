//! Error types for the preprocessor run.
//!
//! Everything here is fatal: the run is all-or-nothing and no partial
//! output is ever produced. Recoverable oddities (a help line with no
//! recognizable flag) are absorbed into best-effort table rows long before
//! they reach this type.

use std::process::ExitStatus;

use thiserror::Error;

/// Errors that abort a preprocessor run.
#[derive(Debug, Error)]
pub enum PreprocessorError {
    /// Reading stdin or writing stdout failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stdin payload was not valid JSON, or the book could not be
    /// serialized back out.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The stdin payload was valid JSON but not the expected two-element
    /// `[context, book]` array.
    #[error("expected a two-element [context, book] array on stdin")]
    MalformedInput,

    /// The external tool could not be spawned (missing binary, not
    /// executable).
    #[error("failed to spawn '{command}': {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    /// The external tool's help invocation exited unsuccessfully.
    #[error("'{command} {subcommand} -h' exited with {status}")]
    HelpFailed {
        command: String,
        subcommand: String,
        status: ExitStatus,
    },

    /// The captured help output had no `Options:` section to tabulate.
    #[error("no 'Options:' section in help output of '{command} {subcommand}'")]
    MissingOptionsSection { command: String, subcommand: String },
}

/// Convenience alias for results with [`PreprocessorError`].
pub type Result<T> = std::result::Result<T, PreprocessorError>;
