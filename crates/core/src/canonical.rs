//! Canonical Content Hashing
//!
//! Deterministic SHA-256 hashing of arbitrary structured payloads. Object
//! keys are sorted alphabetically at every nesting level before
//! serialization; array element order is significant and preserved. The
//! signer, the verifier, and any cache key derivation must all go through
//! this module so the same payload always yields the same address.

use serde::Serialize;
use serde_json::Value;
use sha2::{Digest, Sha256};

use crate::error::CanonicalError;

/// Content hash type (SHA-256 hash as lowercase hex string)
pub type ContentHash = String;

/// Computes the canonical SHA-256 content hash of a serializable payload.
///
/// Two payloads that differ only in object key order hash identically; any
/// difference in array order or values produces a different hash.
///
/// # Examples
/// ```
/// use provenant_core::canonical::compute_content_hash;
/// use serde_json::json;
///
/// let a = compute_content_hash(&json!({"b": 1, "a": 2})).unwrap();
/// let b = compute_content_hash(&json!({"a": 2, "b": 1})).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn compute_content_hash<T: Serialize>(payload: &T) -> Result<ContentHash, CanonicalError> {
    let value = serde_json::to_value(payload).map_err(|e| CanonicalError::Serialization {
        reason: e.to_string(),
    })?;
    let canonical = canonicalize(&value);

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    Ok(hex::encode(hasher.finalize()))
}

/// Renders a JSON value as a canonical string: object keys sorted
/// alphabetically (recursively), arrays in their original order, no
/// insignificant whitespace.
pub fn canonicalize(value: &Value) -> String {
    let mut out = String::new();
    write_canonical(value, &mut out);
    out
}

fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => write_escaped(s, out),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();

            out.push('{');
            for (i, key) in keys.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_escaped(key, out);
                out.push(':');
                // Key came from the map, the entry is always present.
                if let Some(v) = map.get(*key) {
                    write_canonical(v, out);
                }
            }
            out.push('}');
        }
    }
}

/// Writes a JSON string literal using the same escaping rules as serde_json:
/// quote, backslash, and control characters only.
fn write_escaped(s: &str, out: &mut String) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
}
