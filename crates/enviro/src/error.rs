//! Error types for the diagnostic and fallible accessors.
//!
//! The defaulting getters never surface these. They exist so that
//! [`crate::Lookup`] and [`crate::Enviro::try_get`] can say *why* a value
//! was not usable.

use std::fmt;
use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

/// The target type a variable was read as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    String,
    Int,
    Int64,
    Bool,
    Float32,
    Float64,
    List,
}

impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::Int => "int",
            ValueKind::Int64 => "int64",
            ValueKind::Bool => "bool",
            ValueKind::Float32 => "float32",
            ValueKind::Float64 => "float64",
            ValueKind::List => "list",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a present value could not be converted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("value is empty")]
    Empty,

    #[error("invalid integer: {0}")]
    InvalidInteger(#[from] ParseIntError),

    #[error("invalid float: {0}")]
    InvalidFloat(#[from] ParseFloatError),

    /// A syntactically valid number that does not fit the target type.
    #[error("value out of range")]
    OutOfRange,

    #[error("invalid boolean, expected one of 1, t, T, TRUE, true, True, 0, f, F, FALSE, false, False")]
    InvalidBool,
}

/// Errors returned by [`crate::Enviro::try_get`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvError {
    #[error("environment variable {name} is not set")]
    NotPresent { name: String },

    #[error("environment variable {name} is not a valid {kind}: {source}")]
    Invalid {
        name: String,
        kind: ValueKind,
        #[source]
        source: ParseError,
    },
}

impl EnvError {
    /// Name of the variable this error refers to.
    pub fn name(&self) -> &str {
        match self {
            EnvError::NotPresent { name } | EnvError::Invalid { name, .. } => name,
        }
    }

    pub fn is_not_present(&self) -> bool {
        matches!(self, EnvError::NotPresent { .. })
    }
}
