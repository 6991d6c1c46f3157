//! Text-to-value conversion for each supported variable type.

use std::num::{IntErrorKind, ParseIntError};
use std::str::FromStr;

use crate::error::{ParseError, ValueKind};

/// A type an environment variable can be read as.
///
/// Implemented for `String`, `isize`, `i64`, `bool`, `f32` and `f64`.
pub trait EnvValue: Sized {
    const KIND: ValueKind;

    /// Convert the raw variable text.
    fn parse_env(raw: &str) -> Result<Self, ParseError>;
}

impl EnvValue for String {
    const KIND: ValueKind = ValueKind::String;

    fn parse_env(raw: &str) -> Result<Self, ParseError> {
        Ok(raw.to_string())
    }
}

impl EnvValue for isize {
    const KIND: ValueKind = ValueKind::Int;

    fn parse_env(raw: &str) -> Result<Self, ParseError> {
        parse_integer(raw)
    }
}

impl EnvValue for i64 {
    const KIND: ValueKind = ValueKind::Int64;

    fn parse_env(raw: &str) -> Result<Self, ParseError> {
        parse_integer(raw)
    }
}

impl EnvValue for bool {
    const KIND: ValueKind = ValueKind::Bool;

    fn parse_env(raw: &str) -> Result<Self, ParseError> {
        match raw {
            "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
            "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
            "" => Err(ParseError::Empty),
            _ => Err(ParseError::InvalidBool),
        }
    }
}

impl EnvValue for f32 {
    const KIND: ValueKind = ValueKind::Float32;

    fn parse_env(raw: &str) -> Result<Self, ParseError> {
        let value: f32 = parse_float(raw)?;
        reject_overflow(raw, value.is_infinite())?;
        Ok(value)
    }
}

impl EnvValue for f64 {
    const KIND: ValueKind = ValueKind::Float64;

    fn parse_env(raw: &str) -> Result<Self, ParseError> {
        let value: f64 = parse_float(raw)?;
        reject_overflow(raw, value.is_infinite())?;
        Ok(value)
    }
}

/// Base-10 signed integer, whole string, optional leading sign.
fn parse_integer<T>(raw: &str) -> Result<T, ParseError>
where
    T: FromStr<Err = ParseIntError>,
{
    raw.parse::<T>().map_err(|err| match err.kind() {
        IntErrorKind::Empty => ParseError::Empty,
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ParseError::OutOfRange,
        _ => ParseError::InvalidInteger(err),
    })
}

fn parse_float<T>(raw: &str) -> Result<T, ParseError>
where
    T: FromStr<Err = std::num::ParseFloatError>,
{
    if raw.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(raw.parse::<T>()?)
}

/// A finite literal that rounds to infinity does not fit the target precision.
fn reject_overflow(raw: &str, infinite: bool) -> Result<(), ParseError> {
    if infinite && !is_infinity_literal(raw) {
        return Err(ParseError::OutOfRange);
    }
    Ok(())
}

fn is_infinity_literal(raw: &str) -> bool {
    let unsigned = raw.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(raw);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

/// Split on every literal occurrence of `sep`, keeping empty segments.
///
/// An empty separator yields one element per character.
pub(crate) fn split_list(raw: &str, sep: &str) -> Vec<String> {
    if sep.is_empty() {
        return raw.chars().map(String::from).collect();
    }
    raw.split(sep).map(str::to_string).collect()
}
