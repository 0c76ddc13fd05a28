//! Canonical serialization for block hashing
//!
//! Produces a compact JSON text whose object keys are sorted
//! lexicographically at every nesting level. The sort is done here rather
//! than relying on `serde_json::Map` iteration order, which changes when the
//! `preserve_order` feature is enabled anywhere in the dependency graph.

use serde_json::Value;
use sha2::{Digest, Sha256};

/// Render `value` as key-sorted, whitespace-free JSON.
pub fn to_canonical_string(value: &Value) -> String {
    let mut out = String::new();
    write_canonical(value, &mut out);
    out
}

fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));

            out.push('{');
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                // Display on a JSON string value yields the escaped, quoted form.
                out.push_str(&Value::String(key.clone()).to_string());
                out.push(':');
                write_canonical(item, out);
            }
            out.push('}');
        }
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
        scalar => out.push_str(&scalar.to_string()),
    }
}

/// SHA-256 of `data`, lowercase hex (64 characters).
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}
