use crate::parse::{ParseValueError, ValueKind};

pub type Result<T, E = EnvError> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnvError {
    #[error("environment variable {key} is undefined")]
    Undefined { key: String },

    #[error("environment variable {key} is empty")]
    Empty { key: String },

    #[error("could not parse {key} as {}: {source}", .kind.with_article())]
    InvalidFormat {
        key: String,
        kind: ValueKind,
        #[source]
        source: ParseValueError,
    },
}

/// Identity of an [`EnvError`], without the key or diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnvErrorKind {
    Undefined,
    Empty,
    InvalidFormat,
}

impl EnvError {
    pub fn kind(&self) -> EnvErrorKind {
        match self {
            EnvError::Undefined { .. } => EnvErrorKind::Undefined,
            EnvError::Empty { .. } => EnvErrorKind::Empty,
            EnvError::InvalidFormat { .. } => EnvErrorKind::InvalidFormat,
        }
    }

    /// Fully qualified name of the variable that failed.
    pub fn key(&self) -> &str {
        match self {
            EnvError::Undefined { key }
            | EnvError::Empty { key }
            | EnvError::InvalidFormat { key, .. } => key,
        }
    }

    pub fn is_undefined(&self) -> bool {
        self.kind() == EnvErrorKind::Undefined
    }

    pub fn is_empty(&self) -> bool {
        self.kind() == EnvErrorKind::Empty
    }

    pub fn is_invalid_format(&self) -> bool {
        self.kind() == EnvErrorKind::InvalidFormat
    }

    /// True when the variable carries no usable value at all.
    pub fn is_missing(&self) -> bool {
        matches!(self.kind(), EnvErrorKind::Undefined | EnvErrorKind::Empty)
    }
}
