//! Environment adapters.
//!
//! - [`SystemEnvironment`] reads the real process environment.
//! - [`MapEnvironment`] is an in-memory map, used by tests and by callers
//!   that want to feed the accessors from somewhere other than the OS.

use std::collections::HashMap;

use crate::ports::EnvironmentPort;

/// System environment variable adapter.
///
/// Uses std::env for reading environment variables from the OS. Nothing is
/// cached, so changes made by the process are visible on the next lookup.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl SystemEnvironment {
    pub fn new() -> Self {
        Self
    }
}

impl EnvironmentPort for SystemEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        // Names the OS cannot hold are never set.
        if key.is_empty() || key.contains(|c: char| c == '=' || c == '\0') {
            return None;
        }

        let value = std::env::var_os(key)?;
        match value.into_string() {
            Ok(value) => Some(value),
            Err(raw) => {
                tracing::warn!(key, "Environment variable is not valid unicode, converting lossily");
                Some(raw.to_string_lossy().into_owned())
            }
        }
    }
}

/// Environment backed by a map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEnvironment {
    vars: HashMap<String, String>,
}

impl MapEnvironment {
    /// Create a new empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an environment from an iterator of key-value pairs.
    pub fn from_pairs<I, K, V>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        iter.into_iter().collect()
    }

    /// Set a variable, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    /// Remove a variable, returning its previous value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.vars.remove(name)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnvironment
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvironmentPort for MapEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}
