//! Normalization of typed records into wire mappings

use serde::Serialize;
use serde_json::Value;

use crate::{Error, Result, WireMap, options::Options};

pub mod constraints;
mod normalizer;

/// Normalize any serializable value into a wire value.
///
/// Absent optional record fields are elided. A top-level `None` becomes `null`.
pub fn to_value<T: Serialize + ?Sized>(value: &T, options: &Options) -> Result<Value> {
    let out = value
        .serialize(normalizer::Normalizer::new(options))
        .map_err(|e| e.0)?;
    Ok(out.unwrap_or(Value::Null))
}

/// Normalize a record into its ordered wire mapping.
pub fn normalize_with<T: Serialize + ?Sized>(value: &T, options: &Options) -> Result<WireMap> {
    match to_value(value, options)? {
        Value::Object(map) => Ok(map),
        other => Err(Error::NotARecord { found: kind_of(&other) }),
    }
}

pub fn to_string<T: Serialize + ?Sized>(value: &T, options: &Options) -> Result<String> {
    let map = normalize_with(value, options)?;
    Ok(serde_json::to_string(&map)?)
}

pub fn to_string_pretty<T: Serialize + ?Sized>(value: &T, options: &Options) -> Result<String> {
    let map = normalize_with(value, options)?;
    Ok(serde_json::to_string_pretty(&map)?)
}

pub fn to_writer<W: std::io::Write, T: Serialize + ?Sized>(
    writer: W,
    value: &T,
    options: &Options,
) -> Result<()> {
    let map = normalize_with(value, options)?;
    serde_json::to_writer(writer, &map)?;
    Ok(())
}

pub(crate) fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
