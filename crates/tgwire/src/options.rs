/// Checks applied by the normalizer on outgoing records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validation {
    /// Enforce the constraints the Bot API documents for a record
    /// (exactly-one-of button actions, length limits)
    #[default]
    Strict,
    /// Emit whatever the record holds; the API is left to reject it
    Off,
}

/// Policy for payload keys that no declared field consumes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownFields {
    /// Fail decoding with `Error::UnknownField`
    #[default]
    Deny,
    /// Decode anyway and log every unknown key at warn level
    Warn,
    /// Decode anyway, silently
    Ignore,
}

#[derive(Debug, Clone, Default)]
pub struct Options {
    pub validation: Validation,
    pub unknown_fields: UnknownFields,
}

impl Options {
    /// Permissive settings: no constraint checks, unknown keys dropped.
    pub fn lenient() -> Self {
        Self {
            validation: Validation::Off,
            unknown_fields: UnknownFields::Ignore,
        }
    }
}
