use thiserror::Error;

use crate::schema::FlagKind;

/// Bad schema descriptor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("invalid flag type {marker:?} in {descriptor:?}")]
    InvalidMarker { descriptor: String, marker: char },

    #[error("flag name must be a single letter, got {descriptor:?}")]
    InvalidName { descriptor: String },

    #[error("flag '{0}' declared more than once")]
    Duplicate(char),
}

/// Bad process argument.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("given arg {0:?} not in schema")]
    UnknownFlag(String),

    #[error("can't convert {value:?} for flag '{flag}' to {kind}")]
    Conversion {
        flag: char,
        value: String,
        kind: FlagKind,
    },
}

/// Everything [`crate::Parser`] can fail with.
///
/// Construction failures are wrapped with the stage that failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArgsError {
    #[error("error creating schema: {0}")]
    Schema(#[from] SchemaError),

    #[error("error parsing arguments: {0}")]
    Parse(#[from] ParseError),

    #[error("arg {0:?} is not in schema")]
    NotInSchema(String),

    #[error("flag '{flag}' is {actual}, not {requested}")]
    KindMismatch {
        flag: char,
        requested: FlagKind,
        actual: FlagKind,
    },
}

impl ArgsError {
    pub fn code(&self) -> &'static str {
        match self {
            ArgsError::Schema(_) => "invalid_schema",
            ArgsError::Parse(ParseError::UnknownFlag(_)) => "unknown_flag",
            ArgsError::Parse(ParseError::Conversion { .. }) => "invalid_value",
            ArgsError::NotInSchema(_) => "not_in_schema",
            ArgsError::KindMismatch { .. } => "kind_mismatch",
        }
    }
}
