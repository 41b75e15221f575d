use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::{Options, Result, WireMap};

/// A Bot API object with a fixed, ordered set of wire fields.
pub trait Record: Serialize + DeserializeOwned {
    /// Name of the object in the Bot API documentation.
    const NAME: &'static str;

    fn to_wire(&self) -> Result<WireMap> {
        crate::normalize(self)
    }

    fn to_wire_with(&self, options: &Options) -> Result<WireMap> {
        crate::normalize_with(self, options)
    }

    fn from_wire(map: WireMap) -> Result<Self> {
        crate::de::from_map(map, &Options::default())
    }
}

/// A polymorphic record: one of several concrete shapes picked by a discriminator field.
pub trait Family: Record {
    /// Wire name of the discriminator field (`type` or `status`).
    const DISCRIMINATOR: &'static str;
    /// Every discriminator value, in declaration order.
    const VARIANTS: &'static [&'static str];

    /// Discriminator value of this instance's variant.
    fn discriminator(&self) -> &'static str;
}
