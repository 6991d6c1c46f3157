//! Diagnostic lookup outcome.

use crate::error::{EnvError, ParseError};
use crate::value::EnvValue;

/// What happened when a variable was read as `T`.
///
/// The defaulting getters collapse all three cases with [`Lookup::or`];
/// callers that need to tell "unset" from "misconfigured" can match on it.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    /// The variable is not set.
    Absent,
    /// The variable is set but its text does not convert to `T`.
    Invalid { raw: String, error: ParseError },
    Valid(T),
}

impl<T> Lookup<T> {
    /// The parsed value, or `default` for absent and invalid variables.
    pub fn or(self, default: T) -> T {
        match self {
            Lookup::Valid(value) => value,
            Lookup::Absent | Lookup::Invalid { .. } => default,
        }
    }

    pub fn or_else(self, default: impl FnOnce() -> T) -> T {
        match self {
            Lookup::Valid(value) => value,
            Lookup::Absent | Lookup::Invalid { .. } => default(),
        }
    }

    pub fn ok(self) -> Option<T> {
        match self {
            Lookup::Valid(value) => Some(value),
            Lookup::Absent | Lookup::Invalid { .. } => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Lookup::Absent)
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Lookup::Invalid { .. })
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Lookup::Valid(_))
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Lookup<U> {
        match self {
            Lookup::Absent => Lookup::Absent,
            Lookup::Invalid { raw, error } => Lookup::Invalid { raw, error },
            Lookup::Valid(value) => Lookup::Valid(f(value)),
        }
    }
}

impl<T: EnvValue> Lookup<T> {
    /// Convert raw presence-reporting text into an outcome.
    pub(crate) fn from_raw(raw: Option<String>) -> Self {
        let Some(raw) = raw else {
            return Lookup::Absent;
        };

        match T::parse_env(&raw) {
            Ok(value) => Lookup::Valid(value),
            Err(error) => Lookup::Invalid { raw, error },
        }
    }

    /// Turn the outcome into a `Result`, naming `name` in the error.
    pub fn into_result(self, name: &str) -> Result<T, EnvError> {
        match self {
            Lookup::Valid(value) => Ok(value),
            Lookup::Absent => Err(EnvError::NotPresent {
                name: name.to_string(),
            }),
            Lookup::Invalid { error, .. } => Err(EnvError::Invalid {
                name: name.to_string(),
                kind: T::KIND,
                source: error,
            }),
        }
    }
}
