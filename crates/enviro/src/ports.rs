//! Environment port for abstracting environment variable access.
//!
//! Accessors read through this port instead of calling `std::env` directly,
//! so the environment can be swapped for an in-memory map or a mock in tests.

use std::sync::Arc;

/// Port for environment variable access.
///
/// Implementations provide the OS environment, test fakes, or alternative
/// configuration sources. Every call must reflect the source's current
/// state; implementations must not cache.
#[cfg_attr(test, mockall::automock)]
pub trait EnvironmentPort: Send + Sync {
    /// Get an environment variable value.
    /// Returns None if the variable is not set.
    fn get_var(&self, key: &str) -> Option<String>;

    /// Get an environment variable or return a default value.
    fn get_var_or(&self, key: &str, default: &str) -> String {
        self.get_var(key).unwrap_or_else(|| default.to_string())
    }
}

impl<P: EnvironmentPort + ?Sized> EnvironmentPort for &P {
    fn get_var(&self, key: &str) -> Option<String> {
        (**self).get_var(key)
    }
}

impl<P: EnvironmentPort + ?Sized> EnvironmentPort for Box<P> {
    fn get_var(&self, key: &str) -> Option<String> {
        (**self).get_var(key)
    }
}

impl<P: EnvironmentPort + ?Sized> EnvironmentPort for Arc<P> {
    fn get_var(&self, key: &str) -> Option<String> {
        (**self).get_var(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_var_or_uses_default_only_when_absent() {
        struct OneVar;

        impl EnvironmentPort for OneVar {
            fn get_var(&self, key: &str) -> Option<String> {
                (key == "SET").then(String::new)
            }
        }

        assert_eq!(OneVar.get_var_or("SET", "fallback"), "");
        assert_eq!(OneVar.get_var_or("UNSET", "fallback"), "fallback");
    }

    #[test]
    fn shared_ports_delegate() {
        let mut mock = MockEnvironmentPort::new();
        mock.expect_get_var()
            .withf(|key: &str| key == "NAME")
            .times(2)
            .returning(|_| Some("value".to_string()));

        let shared: Arc<dyn EnvironmentPort> = Arc::new(mock);
        assert_eq!(shared.get_var("NAME").as_deref(), Some("value"));

        let borrowed = &shared;
        assert_eq!(borrowed.get_var("NAME").as_deref(), Some("value"));
    }
}
