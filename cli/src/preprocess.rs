//! Stdin/stdout framing for the preprocessor handshake.
//!
//! The book builder hands us a two-element JSON array `[context, book]` on
//! stdin and expects the rewritten `book` back on stdout as a single JSON
//! document. The context is opaque passthrough metadata and is not echoed
//! back. The reader and writer are generic so the whole exchange is
//! testable in memory.

use std::io::{Read, Write};

use flagtable_core::rewrite_string_fields;
use serde_json::Value;
use tracing::debug;

use crate::error::{PreprocessorError, Result};
use crate::generator::FlagTables;

/// Field name whose string values carry chapter text.
pub const CONTENT_FIELD: &str = "content";

/// Reads `[context, book]` from `input`, rewrites every `content` field,
/// and writes the book JSON (plus a trailing newline) to `output`.
pub fn run<R: Read, W: Write>(tables: &FlagTables, input: R, mut output: W) -> Result<()> {
    let payload: Value = serde_json::from_reader(input)?;
    let mut book = split_payload(payload)?;

    rewrite_string_fields(&mut book, CONTENT_FIELD, |text| tables.apply(text));
    debug!("rewrote book content fields");

    serde_json::to_writer(&mut output, &book)?;
    output.write_all(b"\n")?;
    Ok(())
}

/// Extracts the book value from the two-element handshake payload.
///
/// The context element is validated for shape only and then dropped.
fn split_payload(payload: Value) -> Result<Value> {
    let Value::Array(mut parts) = payload else {
        return Err(PreprocessorError::MalformedInput);
    };
    if parts.len() != 2 {
        return Err(PreprocessorError::MalformedInput);
    }
    Ok(parts.swap_remove(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_split_payload_returns_book_element() {
        let payload = json!([{ "root": "/book" }, { "sections": [] }]);
        let book = split_payload(payload).expect("two-element array");
        assert_eq!(book, json!({ "sections": [] }));
    }

    #[test]
    fn test_split_payload_rejects_non_array() {
        let err = split_payload(json!({ "book": {} })).unwrap_err();
        assert!(matches!(err, PreprocessorError::MalformedInput));
    }

    #[test]
    fn test_split_payload_rejects_wrong_arity() {
        assert!(split_payload(json!([1])).is_err());
        assert!(split_payload(json!([1, 2, 3])).is_err());
    }
}
