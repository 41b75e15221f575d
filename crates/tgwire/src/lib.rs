#![doc = include_str!("../README.md")]

pub mod catalog;
pub mod de;
pub mod error;
pub mod options;
pub mod record;
pub mod ser;
pub mod types;

pub use crate::error::{Error, Path, Result, Segment};
pub use crate::options::{Options, UnknownFields, Validation};
pub use crate::record::{Family, Record};

use std::io::{Read, Write};

use serde::{Serialize, de::DeserializeOwned};

/// Bot API version the catalog tracks.
pub const API_VERSION: &str = "7.10";

/// Ordered wire mapping: field name to wire value, in schema declaration order.
pub type WireMap = serde_json::Map<String, serde_json::Value>;

/// Normalize a record with the default (strict) options.
pub fn normalize<T: Serialize + ?Sized>(value: &T) -> Result<WireMap> {
    crate::ser::normalize_with(value, &Options::default())
}

pub fn normalize_with<T: Serialize + ?Sized>(value: &T, options: &Options) -> Result<WireMap> {
    crate::ser::normalize_with(value, options)
}

pub fn to_string<T: Serialize + ?Sized>(value: &T, options: &Options) -> Result<String> {
    crate::ser::to_string(value, options)
}

pub fn to_string_pretty<T: Serialize + ?Sized>(value: &T, options: &Options) -> Result<String> {
    crate::ser::to_string_pretty(value, options)
}

pub fn to_writer<W: Write, T: Serialize + ?Sized>(writer: W, value: &T, options: &Options) -> Result<()> {
    crate::ser::to_writer(writer, value, options)
}

pub fn from_value<T: DeserializeOwned + Serialize>(value: serde_json::Value, options: &Options) -> Result<T> {
    crate::de::from_value(value, options)
}

pub fn from_str<T: DeserializeOwned + Serialize>(s: &str, options: &Options) -> Result<T> {
    crate::de::from_str(s, options)
}

pub fn from_reader<R: Read, T: DeserializeOwned + Serialize>(reader: R, options: &Options) -> Result<T> {
    crate::de::from_reader(reader, options)
}
