//! Typed accessors over an [`EnvironmentPort`].
//!
//! Every getter reads the variable fresh through the port, converts it with
//! the type's [`EnvValue`] rules and falls back to the caller's default when
//! the variable is unset or does not convert. The defaulting getters never
//! fail; use [`Enviro::lookup`] or [`Enviro::try_get`] to see why a default
//! was used.

use std::borrow::Cow;

use crate::adapters::SystemEnvironment;
use crate::error::{EnvError, ValueKind};
use crate::lookup::Lookup;
use crate::ports::EnvironmentPort;
use crate::value::{split_list, EnvValue};

/// Environment accessor.
///
/// ```
/// use enviro::{Enviro, MapEnvironment};
///
/// let env = Enviro::new(MapEnvironment::from_pairs([("APP_WORKERS", "8")])).with_prefix("APP_");
/// assert_eq!(env.get_int64("WORKERS", 1), 8);
/// assert!(!env.get_bool("VERBOSE", false));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Enviro<E = SystemEnvironment> {
    port: E,
    prefix: String,
}

impl Enviro<SystemEnvironment> {
    /// Accessor over the process environment.
    pub fn system() -> Self {
        Self::new(SystemEnvironment::new())
    }
}

impl<E: EnvironmentPort> Enviro<E> {
    pub fn new(port: E) -> Self {
        Self {
            port,
            prefix: String::new(),
        }
    }

    /// Prepend `prefix` verbatim to every variable name looked up.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn port(&self) -> &E {
        &self.port
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    fn key<'a>(&self, name: &'a str) -> Cow<'a, str> {
        if self.prefix.is_empty() {
            Cow::Borrowed(name)
        } else {
            Cow::Owned(format!("{}{}", self.prefix, name))
        }
    }

    fn raw(&self, name: &str) -> Option<String> {
        self.port.get_var(&self.key(name))
    }

    /// The variable's text, or `default` when unset.
    ///
    /// A variable set to the empty string is returned as-is.
    pub fn get(&self, name: &str, default: &str) -> String {
        self.raw(name).unwrap_or_else(|| default.to_string())
    }

    /// Read `name` as `T`, or `default` when unset or unparseable.
    pub fn get_or<T: EnvValue>(&self, name: &str, default: T) -> T {
        let lookup = self.lookup::<T>(name);
        match &lookup {
            Lookup::Valid(_) => {}
            Lookup::Absent => {
                tracing::trace!(
                    var = %self.key(name),
                    kind = %T::KIND,
                    "Environment variable not set, using default"
                );
            }
            Lookup::Invalid { error, .. } => {
                tracing::debug!(
                    var = %self.key(name),
                    kind = %T::KIND,
                    error = %error,
                    "Environment variable could not be parsed, using default"
                );
            }
        }
        lookup.or(default)
    }

    /// Platform-width signed integer.
    pub fn get_int(&self, name: &str, default: isize) -> isize {
        self.get_or(name, default)
    }

    pub fn get_int64(&self, name: &str, default: i64) -> i64 {
        self.get_or(name, default)
    }

    /// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`.
    pub fn get_bool(&self, name: &str, default: bool) -> bool {
        self.get_or(name, default)
    }

    pub fn get_float32(&self, name: &str, default: f32) -> f32 {
        self.get_or(name, default)
    }

    pub fn get_float64(&self, name: &str, default: f64) -> f64 {
        self.get_or(name, default)
    }

    /// Split the variable on every occurrence of `sep`.
    ///
    /// Unset and empty variables both yield `default`. Empty segments between
    /// separators are kept.
    pub fn get_slice(&self, name: &str, sep: &str, default: Vec<String>) -> Vec<String> {
        let raw = self.get(name, "");
        if raw.is_empty() {
            tracing::trace!(
                var = %self.key(name),
                kind = %ValueKind::List,
                "Environment variable empty or not set, using default"
            );
            return default;
        }
        split_list(&raw, sep)
    }

    /// Read `name` as `T`, reporting whether it was absent, invalid or valid.
    ///
    /// Unlike the defaulting getters, a variable set to the empty string is
    /// reported as [`Lookup::Invalid`] for every type but `String`.
    pub fn lookup<T: EnvValue>(&self, name: &str) -> Lookup<T> {
        Lookup::from_raw(self.raw(name))
    }

    pub fn lookup_int(&self, name: &str) -> Lookup<isize> {
        self.lookup(name)
    }

    pub fn lookup_int64(&self, name: &str) -> Lookup<i64> {
        self.lookup(name)
    }

    pub fn lookup_bool(&self, name: &str) -> Lookup<bool> {
        self.lookup(name)
    }

    pub fn lookup_float32(&self, name: &str) -> Lookup<f32> {
        self.lookup(name)
    }

    pub fn lookup_float64(&self, name: &str) -> Lookup<f64> {
        self.lookup(name)
    }

    /// Read `name` as `T`, failing when it is unset or does not parse.
    pub fn try_get<T: EnvValue>(&self, name: &str) -> Result<T, EnvError> {
        self.lookup::<T>(name).into_result(&self.key(name))
    }
}
