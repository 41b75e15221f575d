use std::fmt;
use std::io;

use thiserror::Error;

/// One step from a record down to a nested value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Key(String),
    Index(usize),
}

/// Location of a value inside a wire mapping, rendered as `message.photo[1].file_id`.
///
/// The empty path is the top-level record and renders as `$`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path(Vec<Segment>);

impl Path {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    pub fn key(&self, key: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.0.push(Segment::Key(key.into()));
        next
    }

    pub fn index(&self, index: usize) -> Self {
        let mut next = self.clone();
        next.0.push(Segment::Index(index));
        next
    }

    pub(crate) fn from_reversed(mut segments: Vec<Segment>) -> Self {
        segments.reverse();
        Self(segments)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("$");
        }
        for (i, seg) in self.0.iter().enumerate() {
            match seg {
                Segment::Key(k) if i == 0 => f.write_str(k)?,
                Segment::Key(k) => write!(f, ".{}", k)?,
                Segment::Index(n) => write!(f, "[{}]", n)?,
            }
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("serde_json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown field at {path}")]
    UnknownField { path: Path },

    #[error("unknown variant `{value}` at {path}, expected one of {expected}")]
    UnknownVariant {
        path: Path,
        value: String,
        expected: String,
    },

    #[error("missing required field `{field}` at {path}")]
    MissingField { path: Path, field: String },

    #[error("invalid type at {path}: {message}")]
    InvalidType { path: Path, message: String },

    #[error("{record} at {path}: {message}")]
    Constraint {
        path: Path,
        record: String,
        message: String,
    },

    #[error("non-finite number at {path}")]
    NonFiniteNumber { path: Path },

    #[error("expected a record at the top level, found {found}")]
    NotARecord { found: &'static str },

    #[error("unknown record type `{0}`")]
    UnknownRecord(String),

    #[error("{0}")]
    Message(String),
}

pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_renders_keys_and_indices() {
        let p = Path::root().key("message").key("photo").index(1).key("file_id");
        assert_eq!(p.to_string(), "message.photo[1].file_id");
    }

    #[test]
    fn root_path_renders_dollar() {
        assert_eq!(Path::root().to_string(), "$");
        assert!(Path::root().is_root());
    }

    #[test]
    fn reversed_segments_are_restored() {
        let p = Path::from_reversed(vec![Segment::Index(0), Segment::Key("results".into())]);
        assert_eq!(p.to_string(), "results[0]");
    }
}
