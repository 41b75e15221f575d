//! Bot API object catalog.
//!
//! Field declaration order is wire order. Optional fields are `Option<T>` and are
//! elided by the normalizer when unset; every other field is required and is taken
//! by the record's `new` constructor.

use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Declares a polymorphic family: an internally tagged enum whose variants each wrap
/// one record, plus its `Family` impl and `From` conversions from every variant record.
macro_rules! family {
    (
        $(#[doc = $doc:expr])*
        #[tag = $tag:literal]
        pub enum $name:ident {
            $( $(#[doc = $vdoc:expr])* $wire:literal => $variant:ident($inner:ty), )+
        }
    ) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(tag = $tag)]
        pub enum $name {
            $( $(#[doc = $vdoc])* #[serde(rename = $wire)] $variant($inner), )+
        }

        impl $crate::record::Family for $name {
            const DISCRIMINATOR: &'static str = $tag;
            const VARIANTS: &'static [&'static str] = &[$($wire),+];

            fn discriminator(&self) -> &'static str {
                match self {
                    $( Self::$variant(_) => $wire, )+
                }
            }
        }

        $(
            impl From<$inner> for $name {
                fn from(v: $inner) -> Self {
                    Self::$variant(v)
                }
            }
        )+
    };
}

pub mod callback;
pub mod chat;
pub mod chat_member;
pub mod command;
pub mod inline;
pub mod keyboard;
pub mod media;
pub mod message;
pub mod poll;
pub mod reaction;
pub mod update;
pub mod user;

pub use callback::*;
pub use chat::*;
pub use chat_member::*;
pub use command::*;
pub use inline::*;
pub use keyboard::*;
pub use media::*;
pub use message::*;
pub use poll::*;
pub use reaction::*;
pub use update::*;
pub use user::*;

/// The API's `True` type: a field that is either absent or the literal `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct True;

impl Serialize for True {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(true)
    }
}

impl<'de> Deserialize<'de> for True {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        if bool::deserialize(deserializer)? {
            Ok(True)
        } else {
            Err(de::Error::invalid_value(Unexpected::Bool(false), &"the literal `true`"))
        }
    }
}

impl From<True> for bool {
    fn from(_: True) -> bool {
        true
    }
}
