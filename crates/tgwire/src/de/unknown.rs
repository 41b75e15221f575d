//! Detection of payload keys that no declared field consumed.
//!
//! The decoded record is normalized again and compared with the input: any input key
//! with a non-null value that has no counterpart in the normalized mapping was dropped
//! by the decoder.

use serde_json::Value;

use crate::error::Path;

pub fn unknown_paths(input: &Value, normalized: &Value) -> Vec<Path> {
    let mut out = Vec::new();
    walk(input, normalized, &Path::root(), &mut out);
    out
}

fn walk(input: &Value, normalized: &Value, path: &Path, out: &mut Vec<Path>) {
    match (input, normalized) {
        (Value::Object(inp), Value::Object(norm)) => {
            for (key, value) in inp {
                if value.is_null() {
                    continue;
                }
                match norm.get(key) {
                    Some(n) => walk(value, n, &path.key(key.as_str()), out),
                    None => out.push(path.key(key.as_str())),
                }
            }
        }
        (Value::Array(inp), Value::Array(norm)) => {
            for (i, (value, n)) in inp.iter().zip(norm).enumerate() {
                walk(value, n, &path.index(i), out);
            }
        }
        _ => {}
    }
}
