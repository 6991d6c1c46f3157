//! Typed environment variable accessors with default fallback.
//!
//! Each getter reads a variable, converts its text to the requested type and
//! returns the caller's default when the variable is unset or does not
//! convert. The getters never fail.
//!
//! The free functions below read the process environment. [`Enviro`] does the
//! same over any [`EnvironmentPort`], so tests and embedders can supply a
//! [`MapEnvironment`] instead of touching real process state.
//!
//! ```
//! let workers = enviro::get_int64("ENVIRO_DOC_WORKERS", 4);
//! let hosts = enviro::get_slice("ENVIRO_DOC_HOSTS", ",", vec!["localhost".to_string()]);
//! assert_eq!(workers, 4);
//! assert_eq!(hosts, ["localhost"]);
//! ```

pub mod accessor;
pub mod adapters;
pub mod error;
pub mod lookup;
pub mod ports;
pub mod value;

pub use accessor::Enviro;
pub use adapters::{MapEnvironment, SystemEnvironment};
pub use error::{EnvError, ParseError, ValueKind};
pub use lookup::Lookup;
pub use ports::EnvironmentPort;
pub use value::EnvValue;

/// The variable's text, or `default` when unset.
pub fn get(name: &str, default: &str) -> String {
    Enviro::system().get(name, default)
}

/// The variable as a platform-width integer, or `default`.
pub fn get_int(name: &str, default: isize) -> isize {
    Enviro::system().get_int(name, default)
}

/// The variable as a base-10 64-bit integer, or `default`.
pub fn get_int64(name: &str, default: i64) -> i64 {
    Enviro::system().get_int64(name, default)
}

/// The variable as a boolean, or `default`.
pub fn get_bool(name: &str, default: bool) -> bool {
    Enviro::system().get_bool(name, default)
}

/// The variable as an `f32`, or `default`.
pub fn get_float32(name: &str, default: f32) -> f32 {
    Enviro::system().get_float32(name, default)
}

/// The variable as an `f64`, or `default`.
pub fn get_float64(name: &str, default: f64) -> f64 {
    Enviro::system().get_float64(name, default)
}

/// The variable split on `sep`, or `default` when unset or empty.
pub fn get_slice(name: &str, sep: &str, default: Vec<String>) -> Vec<String> {
    Enviro::system().get_slice(name, sep, default)
}
