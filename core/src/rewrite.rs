//! Generic document-tree rewriting.
//!
//! Walks an arbitrary nested map/sequence/scalar tree ([`serde_json::Value`])
//! and rewrites every string value stored under a designated field key. The
//! traversal uses an explicit work list instead of call-stack recursion, so
//! arbitrarily deep documents cannot overflow the stack.

use serde_json::Value;
use tracing::debug;

/// Rewrites every string value stored under `field`, in place.
///
/// Every mapping value and sequence element is traversed regardless of key,
/// so matches are found at any depth. A string value under a matching key
/// is replaced with `rewrite`'s result and treated as terminal: the new
/// text is not searched for further matches. A matching key whose value is
/// not a string is traversed like any other container.
///
/// Traversal order is unspecified; each matched field is rewritten
/// independently of the others.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use flagtable_core::rewrite_string_fields;
///
/// let mut book = json!({
///     "sections": [
///         { "Chapter": { "name": "Intro", "content": "hello" } },
///     ]
/// });
///
/// rewrite_string_fields(&mut book, "content", |text| text.to_uppercase());
/// assert_eq!(book["sections"][0]["Chapter"]["content"], "HELLO");
/// assert_eq!(book["sections"][0]["Chapter"]["name"], "Intro");
/// ```
pub fn rewrite_string_fields<F>(root: &mut Value, field: &str, rewrite: F)
where
    F: Fn(&str) -> String,
{
    let mut rewritten = 0usize;
    let mut pending = vec![root];

    while let Some(node) = pending.pop() {
        match node {
            Value::Object(entries) => {
                for (key, value) in entries.iter_mut() {
                    if key == field {
                        if let Value::String(text) = value {
                            *text = rewrite(text);
                            rewritten += 1;
                            // The substituted value is terminal text.
                            continue;
                        }
                    }
                    if value.is_object() || value.is_array() {
                        pending.push(value);
                    }
                }
            }
            Value::Array(items) => {
                for value in items.iter_mut() {
                    if value.is_object() || value.is_array() {
                        pending.push(value);
                    }
                }
            }
            _ => {}
        }
    }

    debug!(field, rewritten, "rewrote string fields");
}
