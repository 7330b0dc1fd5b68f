//! # DelPresence Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`api`]: backend base URL and request timeout
//! - [`attendance`]: countdown tick and server resync intervals
//! - [`logging`]: log level and optional log directory
//!
//! Every struct has a `Default` and a `from_env()` constructor. Callers are
//! expected to load `.env` (via `dotenvy`) before calling `from_env()`.
//!
//! # Example
//!
//! ```ignore
//! use delpresence_config::{ApiConfig, AttendanceConfig};
//!
//! dotenvy::dotenv().ok();
//! let api = ApiConfig::from_env();
//! let attendance = AttendanceConfig::from_env();
//! ```

pub mod api;
pub mod attendance;
pub mod logging;

// Re-export commonly used types at crate root
pub use api::ApiConfig;
pub use attendance::AttendanceConfig;
pub use logging::LogConfig;

/// Parses a looked-up value, ignoring unset or malformed values.
pub(crate) fn parse_var<T, F>(lookup: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key).and_then(|v| v.trim().parse().ok())
}

/// Looks up a non-blank value.
pub(crate) fn string_var<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Environment lookup used by every `from_env()` constructor.
pub(crate) fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
