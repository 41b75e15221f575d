//! serde::Deserializer over `serde_json::Value` that reports where decoding failed

use serde::Serialize;
use serde::de::{
    self, DeserializeOwned, DeserializeSeed, EnumAccess, IntoDeserializer, MapAccess, SeqAccess,
    Unexpected, VariantAccess, Visitor,
};
use serde_json::Value;

use crate::error::{Error, Path, Segment};
use crate::options::{Options, UnknownFields};
use crate::{Result, WireMap};

pub mod unknown;

#[derive(Debug)]
enum DeErrorKind {
    MissingField(String),
    UnknownField(String),
    UnknownVariant { value: String, expected: String },
    InvalidType(String),
    Custom(String),
}

/// Decode failure with the path to the offending value, innermost segment first.
#[derive(Debug)]
pub struct DeError {
    kind: DeErrorKind,
    rev_path: Vec<Segment>,
}

impl DeError {
    fn new(kind: DeErrorKind) -> Self {
        Self { kind, rev_path: Vec::new() }
    }

    fn at(mut self, seg: Segment) -> Self {
        self.rev_path.push(seg);
        self
    }
}

impl core::fmt::Display for DeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let path = Path::from_reversed(self.rev_path.clone());
        match &self.kind {
            DeErrorKind::MissingField(field) => write!(f, "missing field `{}` at {}", field, path),
            DeErrorKind::UnknownField(field) => write!(f, "unknown field `{}` at {}", field, path),
            DeErrorKind::UnknownVariant { value, expected } => {
                write!(f, "unknown variant `{}` at {}, expected {}", value, path, expected)
            }
            DeErrorKind::InvalidType(msg) | DeErrorKind::Custom(msg) => {
                write!(f, "{} at {}", msg, path)
            }
        }
    }
}

impl de::Error for DeError {
    fn custom<T: core::fmt::Display>(t: T) -> Self {
        DeError::new(DeErrorKind::Custom(t.to_string()))
    }

    fn invalid_type(unexp: Unexpected<'_>, exp: &dyn de::Expected) -> Self {
        DeError::new(DeErrorKind::InvalidType(format!(
            "invalid type: {}, expected {}",
            unexp, exp
        )))
    }

    fn invalid_value(unexp: Unexpected<'_>, exp: &dyn de::Expected) -> Self {
        DeError::new(DeErrorKind::InvalidType(format!(
            "invalid value: {}, expected {}",
            unexp, exp
        )))
    }

    fn invalid_length(len: usize, exp: &dyn de::Expected) -> Self {
        DeError::new(DeErrorKind::InvalidType(format!(
            "invalid length {}, expected {}",
            len, exp
        )))
    }

    fn unknown_variant(variant: &str, expected: &'static [&'static str]) -> Self {
        DeError::new(DeErrorKind::UnknownVariant {
            value: variant.to_string(),
            expected: one_of(expected),
        })
    }

    fn unknown_field(field: &str, _expected: &'static [&'static str]) -> Self {
        DeError::new(DeErrorKind::UnknownField(field.to_string()))
    }

    fn missing_field(field: &'static str) -> Self {
        DeError::new(DeErrorKind::MissingField(field.to_string()))
    }
}

impl core::error::Error for DeError {}

impl From<DeError> for Error {
    fn from(e: DeError) -> Self {
        let path = Path::from_reversed(e.rev_path);
        match e.kind {
            DeErrorKind::MissingField(field) => Error::MissingField { path, field },
            DeErrorKind::UnknownField(field) => Error::UnknownField { path: path.key(field) },
            DeErrorKind::UnknownVariant { value, expected } => {
                Error::UnknownVariant { path, value, expected }
            }
            DeErrorKind::InvalidType(message) => Error::InvalidType { path, message },
            DeErrorKind::Custom(message) if path.is_root() => Error::Message(message),
            DeErrorKind::Custom(message) => Error::Message(format!("{} at {}", message, path)),
        }
    }
}

fn one_of(names: &[&str]) -> String {
    let quoted: Vec<String> = names.iter().map(|n| format!("`{}`", n)).collect();
    format!("[{}]", quoted.join(", "))
}

fn unexpected(v: &Value) -> Unexpected<'_> {
    match v {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(n) => match (n.as_u64(), n.as_i64()) {
            (Some(u), _) => Unexpected::Unsigned(u),
            (None, Some(i)) => Unexpected::Signed(i),
            _ => Unexpected::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}

pub struct Deserializer {
    value: Value,
}

impl Deserializer {
    pub fn from_value(value: Value) -> Self {
        Self { value }
    }
}

impl<'de> de::Deserializer<'de> for Deserializer {
    type Error = DeError;

    fn deserialize_any<V>(self, visitor: V) -> core::result::Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        match self.value {
            Value::Null => visitor.visit_unit(),
            Value::Bool(b) => visitor.visit_bool(b),
            Value::Number(n) => {
                if let Some(u) = n.as_u64() {
                    visitor.visit_u64(u)
                } else if let Some(i) = n.as_i64() {
                    visitor.visit_i64(i)
                } else {
                    match n.as_f64() {
                        Some(f) => visitor.visit_f64(f),
                        None => Err(de::Error::custom(format!("unrepresentable number {}", n))),
                    }
                }
            }
            Value::String(s) => visitor.visit_string(s),
            Value::Array(arr) => {
                let len = arr.len();
                visitor.visit_seq(SeqDeserializer {
                    iter: arr.into_iter(),
                    idx: 0,
                    len,
                })
            }
            Value::Object(obj) => visitor.visit_map(MapDeserializer {
                iter: obj.into_iter(),
                pending: None,
            }),
        }
    }

    fn deserialize_option<V>(self, visitor: V) -> core::result::Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        match self.value {
            Value::Null => visitor.visit_none(),
            _ => visitor.visit_some(self),
        }
    }

    fn deserialize_newtype_struct<V>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> core::result::Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V>(
        self,
        _name: &'static str,
        _variants: &'static [&'static str],
        visitor: V,
    ) -> core::result::Result<V::Value, Self::Error>
    where
        V: Visitor<'de>,
    {
        match self.value {
            Value::String(s) => visitor.visit_enum(s.into_deserializer()),
            Value::Object(obj) if obj.len() == 1 => {
                let Some((variant, value)) = obj.into_iter().next() else {
                    return Err(de::Error::custom("empty enum map"));
                };
                visitor.visit_enum(EnumDeserializer { variant, value })
            }
            other => Err(de::Error::invalid_type(
                unexpected(&other),
                &"a variant name or a single-key map",
            )),
        }
    }

    serde::forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string bytes byte_buf
        unit unit_struct seq tuple tuple_struct map struct identifier ignored_any
    }
}

struct SeqDeserializer {
    iter: std::vec::IntoIter<Value>,
    idx: usize,
    len: usize,
}

impl<'de> SeqAccess<'de> for SeqDeserializer {
    type Error = DeError;

    fn next_element_seed<T>(&mut self, seed: T) -> core::result::Result<Option<T::Value>, DeError>
    where
        T: DeserializeSeed<'de>,
    {
        let Some(v) = self.iter.next() else {
            return Ok(None);
        };
        let idx = self.idx;
        self.idx += 1;
        seed.deserialize(Deserializer::from_value(v))
            .map(Some)
            .map_err(|e| e.at(Segment::Index(idx)))
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.len - self.idx)
    }
}

struct MapDeserializer {
    iter: serde_json::map::IntoIter,
    pending: Option<(String, Value)>,
}

impl<'de> MapAccess<'de> for MapDeserializer {
    type Error = DeError;

    fn next_key_seed<K>(&mut self, seed: K) -> core::result::Result<Option<K::Value>, DeError>
    where
        K: DeserializeSeed<'de>,
    {
        let Some((key, value)) = self.iter.next() else {
            return Ok(None);
        };
        let de_key: de::value::StringDeserializer<DeError> = key.clone().into_deserializer();
        self.pending = Some((key, value));
        seed.deserialize(de_key).map(Some)
    }

    fn next_value_seed<V>(&mut self, seed: V) -> core::result::Result<V::Value, DeError>
    where
        V: DeserializeSeed<'de>,
    {
        let (key, value) = self
            .pending
            .take()
            .ok_or_else(|| <DeError as de::Error>::custom("value requested before key"))?;
        seed.deserialize(Deserializer::from_value(value))
            .map_err(|e| e.at(Segment::Key(key)))
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.iter.len())
    }
}

struct EnumDeserializer {
    variant: String,
    value: Value,
}

impl<'de> EnumAccess<'de> for EnumDeserializer {
    type Error = DeError;
    type Variant = VariantDeserializer;

    fn variant_seed<V>(self, seed: V) -> core::result::Result<(V::Value, Self::Variant), DeError>
    where
        V: DeserializeSeed<'de>,
    {
        let de_variant: de::value::StrDeserializer<'_, DeError> =
            self.variant.as_str().into_deserializer();
        let v = seed.deserialize(de_variant)?;
        Ok((
            v,
            VariantDeserializer {
                variant: self.variant,
                value: self.value,
            },
        ))
    }
}

struct VariantDeserializer {
    variant: String,
    value: Value,
}

impl<'de> VariantAccess<'de> for VariantDeserializer {
    type Error = DeError;

    fn unit_variant(self) -> core::result::Result<(), DeError> {
        match self.value {
            Value::Null => Ok(()),
            other => Err(<DeError as de::Error>::invalid_type(unexpected(&other), &"unit variant")
                .at(Segment::Key(self.variant))),
        }
    }

    fn newtype_variant_seed<T>(self, seed: T) -> core::result::Result<T::Value, DeError>
    where
        T: DeserializeSeed<'de>,
    {
        seed.deserialize(Deserializer::from_value(self.value))
            .map_err(|e| e.at(Segment::Key(self.variant)))
    }

    fn tuple_variant<V>(self, _len: usize, visitor: V) -> core::result::Result<V::Value, DeError>
    where
        V: Visitor<'de>,
    {
        de::Deserializer::deserialize_seq(Deserializer::from_value(self.value), visitor)
            .map_err(|e| e.at(Segment::Key(self.variant)))
    }

    fn struct_variant<V>(
        self,
        _fields: &'static [&'static str],
        visitor: V,
    ) -> core::result::Result<V::Value, DeError>
    where
        V: Visitor<'de>,
    {
        de::Deserializer::deserialize_map(Deserializer::from_value(self.value), visitor)
            .map_err(|e| e.at(Segment::Key(self.variant)))
    }
}

/// Decode a wire value into a record, then apply the unknown-field policy.
pub fn from_value<T: DeserializeOwned + Serialize>(value: Value, options: &Options) -> Result<T> {
    let original = (options.unknown_fields != UnknownFields::Ignore).then(|| value.clone());
    let record = T::deserialize(Deserializer::from_value(value)).map_err(Error::from)?;
    tracing::debug!(record = core::any::type_name::<T>(), "decoded payload");

    if let Some(input) = original {
        let wire = crate::ser::to_value(&record, &Options::lenient())?;
        let unknown = unknown::unknown_paths(&input, &wire);
        match options.unknown_fields {
            UnknownFields::Deny => {
                if let Some(path) = unknown.into_iter().next() {
                    return Err(Error::UnknownField { path });
                }
            }
            UnknownFields::Warn => {
                for path in unknown {
                    tracing::warn!(path = %path, "ignoring unknown field");
                }
            }
            UnknownFields::Ignore => {}
        }
    }
    Ok(record)
}

pub fn from_map<T: DeserializeOwned + Serialize>(map: WireMap, options: &Options) -> Result<T> {
    from_value(Value::Object(map), options)
}

pub fn from_str<T: DeserializeOwned + Serialize>(s: &str, options: &Options) -> Result<T> {
    let v: Value = serde_json::from_str(s)?;
    from_value(v, options)
}

pub fn from_reader<R: std::io::Read, T: DeserializeOwned + Serialize>(
    reader: R,
    options: &Options,
) -> Result<T> {
    let v: Value = serde_json::from_reader(reader)?;
    from_value(v, options)
}
