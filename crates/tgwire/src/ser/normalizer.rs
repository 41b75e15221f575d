use serde::Serialize;
use serde::ser::*;
use serde_json::{Map, Value};

use crate::error::{Error, Path};
use crate::options::{Options, Validation};
use crate::ser::constraints;

/// Serializer that builds the wire value of a record.
///
/// `Ok(None)` means "absent": the value was an unset `Option`. Struct fields that
/// come back absent are left out of the mapping; everywhere else absence is `null`.
pub(crate) struct Normalizer<'a> {
    opts: &'a Options,
    path: Path,
}

impl<'a> Normalizer<'a> {
    pub(crate) fn new(opts: &'a Options) -> Self {
        Self { opts, path: Path::root() }
    }

    fn child(&self, path: Path) -> Normalizer<'a> {
        Normalizer { opts: self.opts, path }
    }
}

#[derive(Debug)]
pub(crate) struct SerError(pub(crate) Error);

impl core::fmt::Display for SerError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl serde::ser::Error for SerError {
    fn custom<T: core::fmt::Display>(t: T) -> Self {
        SerError(Error::Message(t.to_string()))
    }
}

impl core::error::Error for SerError {}

impl From<Error> for SerError {
    fn from(e: Error) -> Self {
        SerError(e)
    }
}

type Out = Option<Value>;

impl<'a> Serializer for Normalizer<'a> {
    type Ok = Out;
    type Error = SerError;
    type SerializeSeq = SeqNormalizer<'a>;
    type SerializeTuple = SeqNormalizer<'a>;
    type SerializeTupleStruct = SeqNormalizer<'a>;
    type SerializeTupleVariant = SeqNormalizer<'a>;
    type SerializeMap = MapNormalizer<'a>;
    type SerializeStruct = StructNormalizer<'a>;
    type SerializeStructVariant = StructNormalizer<'a>;

    fn serialize_bool(self, v: bool) -> Result<Out, SerError> {
        Ok(Some(Value::Bool(v)))
    }
    fn serialize_i8(self, v: i8) -> Result<Out, SerError> {
        self.serialize_i64(v as i64)
    }
    fn serialize_i16(self, v: i16) -> Result<Out, SerError> {
        self.serialize_i64(v as i64)
    }
    fn serialize_i32(self, v: i32) -> Result<Out, SerError> {
        self.serialize_i64(v as i64)
    }
    fn serialize_i64(self, v: i64) -> Result<Out, SerError> {
        Ok(Some(Value::from(v)))
    }
    fn serialize_u8(self, v: u8) -> Result<Out, SerError> {
        self.serialize_u64(v as u64)
    }
    fn serialize_u16(self, v: u16) -> Result<Out, SerError> {
        self.serialize_u64(v as u64)
    }
    fn serialize_u32(self, v: u32) -> Result<Out, SerError> {
        self.serialize_u64(v as u64)
    }
    fn serialize_u64(self, v: u64) -> Result<Out, SerError> {
        Ok(Some(Value::from(v)))
    }
    fn serialize_f32(self, v: f32) -> Result<Out, SerError> {
        self.serialize_f64(v as f64)
    }
    fn serialize_f64(self, f: f64) -> Result<Out, SerError> {
        match serde_json::Number::from_f64(f) {
            Some(n) => Ok(Some(Value::Number(n))),
            None => Err(SerError(Error::NonFiniteNumber { path: self.path })),
        }
    }
    fn serialize_char(self, v: char) -> Result<Out, SerError> {
        Ok(Some(Value::String(v.to_string())))
    }
    fn serialize_str(self, v: &str) -> Result<Out, SerError> {
        Ok(Some(Value::String(v.to_string())))
    }
    fn serialize_bytes(self, v: &[u8]) -> Result<Out, SerError> {
        Ok(Some(Value::Array(v.iter().map(|b| Value::from(*b)).collect())))
    }
    fn serialize_none(self) -> Result<Out, SerError> {
        Ok(None)
    }
    fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> Result<Out, SerError> {
        value.serialize(self)
    }
    fn serialize_unit(self) -> Result<Out, SerError> {
        Ok(Some(Value::Null))
    }
    fn serialize_unit_struct(self, _name: &'static str) -> Result<Out, SerError> {
        Ok(Some(Value::Null))
    }
    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Out, SerError> {
        Ok(Some(Value::String(variant.to_string())))
    }
    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Out, SerError> {
        value.serialize(self)
    }
    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Out, SerError> {
        let inner = value
            .serialize(self.child(self.path.key(variant)))?
            .unwrap_or(Value::Null);
        let mut m = Map::new();
        m.insert(variant.to_string(), inner);
        Ok(Some(Value::Object(m)))
    }
    fn serialize_seq(self, len: Option<usize>) -> Result<SeqNormalizer<'a>, SerError> {
        Ok(SeqNormalizer {
            elems: Vec::with_capacity(len.unwrap_or(0)),
            variant: None,
            ser: self,
        })
    }
    fn serialize_tuple(self, len: usize) -> Result<SeqNormalizer<'a>, SerError> {
        self.serialize_seq(Some(len))
    }
    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<SeqNormalizer<'a>, SerError> {
        self.serialize_seq(Some(len))
    }
    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SeqNormalizer<'a>, SerError> {
        let path = self.path.key(variant);
        Ok(SeqNormalizer {
            elems: Vec::with_capacity(len),
            variant: Some(variant),
            ser: self.child(path),
        })
    }
    fn serialize_map(self, len: Option<usize>) -> Result<MapNormalizer<'a>, SerError> {
        Ok(MapNormalizer {
            map: Map::with_capacity(len.unwrap_or(0)),
            next_key: None,
            ser: self,
        })
    }
    fn serialize_struct(
        self,
        name: &'static str,
        len: usize,
    ) -> Result<StructNormalizer<'a>, SerError> {
        Ok(StructNormalizer {
            name,
            map: Map::with_capacity(len),
            variant: None,
            ser: self,
        })
    }
    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<StructNormalizer<'a>, SerError> {
        let path = self.path.key(variant);
        Ok(StructNormalizer {
            name: variant,
            map: Map::with_capacity(len),
            variant: Some(variant),
            ser: self.child(path),
        })
    }
}

fn wrap_variant(variant: Option<&'static str>, value: Value) -> Value {
    match variant {
        Some(name) => {
            let mut m = Map::new();
            m.insert(name.to_string(), value);
            Value::Object(m)
        }
        None => value,
    }
}

pub(crate) struct SeqNormalizer<'a> {
    elems: Vec<Value>,
    variant: Option<&'static str>,
    ser: Normalizer<'a>,
}

impl<'a> SeqNormalizer<'a> {
    fn push<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), SerError> {
        let path = self.ser.path.index(self.elems.len());
        let v = value.serialize(self.ser.child(path))?;
        self.elems.push(v.unwrap_or(Value::Null));
        Ok(())
    }

    fn finish(self) -> Result<Out, SerError> {
        Ok(Some(wrap_variant(self.variant, Value::Array(self.elems))))
    }
}

impl<'a> SerializeSeq for SeqNormalizer<'a> {
    type Ok = Out;
    type Error = SerError;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), SerError> {
        self.push(value)
    }
    fn end(self) -> Result<Out, SerError> {
        self.finish()
    }
}

impl<'a> SerializeTuple for SeqNormalizer<'a> {
    type Ok = Out;
    type Error = SerError;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), SerError> {
        self.push(value)
    }
    fn end(self) -> Result<Out, SerError> {
        self.finish()
    }
}

impl<'a> SerializeTupleStruct for SeqNormalizer<'a> {
    type Ok = Out;
    type Error = SerError;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), SerError> {
        self.push(value)
    }
    fn end(self) -> Result<Out, SerError> {
        self.finish()
    }
}

impl<'a> SerializeTupleVariant for SeqNormalizer<'a> {
    type Ok = Out;
    type Error = SerError;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), SerError> {
        self.push(value)
    }
    fn end(self) -> Result<Out, SerError> {
        self.finish()
    }
}

pub(crate) struct MapNormalizer<'a> {
    map: Map<String, Value>,
    next_key: Option<String>,
    ser: Normalizer<'a>,
}

impl<'a> SerializeMap for MapNormalizer<'a> {
    type Ok = Out;
    type Error = SerError;

    fn serialize_key<T: ?Sized + Serialize>(&mut self, key: &T) -> Result<(), SerError> {
        let k = match key.serialize(self.ser.child(self.ser.path.clone()))? {
            Some(Value::String(s)) => s,
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => {
                return Err(SerError(Error::Message(format!(
                    "map key at {} must be a string",
                    self.ser.path
                ))));
            }
        };
        self.next_key = Some(k);
        Ok(())
    }

    fn serialize_value<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), SerError> {
        let key = self.next_key.take().unwrap_or_default();
        let v = value.serialize(self.ser.child(self.ser.path.key(key.as_str())))?;
        self.map.insert(key, v.unwrap_or(Value::Null));
        Ok(())
    }

    fn end(self) -> Result<Out, SerError> {
        Ok(Some(Value::Object(self.map)))
    }
}

pub(crate) struct StructNormalizer<'a> {
    name: &'static str,
    map: Map<String, Value>,
    variant: Option<&'static str>,
    ser: Normalizer<'a>,
}

impl<'a> StructNormalizer<'a> {
    fn field<T: ?Sized + Serialize>(&mut self, key: &'static str, value: &T) -> Result<(), SerError> {
        let path = self.ser.path.key(key);
        if let Some(v) = value.serialize(self.ser.child(path))? {
            self.map.insert(key.to_string(), v);
        }
        Ok(())
    }

    fn finish(self) -> Result<Out, SerError> {
        if self.ser.opts.validation == Validation::Strict {
            constraints::check(self.name, &self.map, &self.ser.path)?;
        }
        Ok(Some(wrap_variant(self.variant, Value::Object(self.map))))
    }
}

impl<'a> SerializeStruct for StructNormalizer<'a> {
    type Ok = Out;
    type Error = SerError;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), SerError> {
        self.field(key, value)
    }

    fn skip_field(&mut self, _key: &'static str) -> Result<(), SerError> {
        Ok(())
    }

    fn end(self) -> Result<Out, SerError> {
        self.finish()
    }
}

impl<'a> SerializeStructVariant for StructNormalizer<'a> {
    type Ok = Out;
    type Error = SerError;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), SerError> {
        self.field(key, value)
    }

    fn end(self) -> Result<Out, SerError> {
        self.finish()
    }
}
