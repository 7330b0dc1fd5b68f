use std::time::Duration;

use crate::{parse_var, process_env, string_var};

pub const DEFAULT_API_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Backend connection settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without a trailing slash
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(&base_url.into()),
            ..Self::default()
        }
    }

    /// `API_URL` wins over `NEXT_PUBLIC_API_URL`; `API_TIMEOUT_SECS` sets the timeout.
    pub fn from_env() -> Self {
        Self::from_lookup(process_env)
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = string_var(&lookup, "API_URL")
            .or_else(|| string_var(&lookup, "NEXT_PUBLIC_API_URL"))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self {
            base_url: normalize_base_url(&base_url),
            timeout: Duration::from_secs(
                parse_var(&lookup, "API_TIMEOUT_SECS")
                    .filter(|secs: &u64| *secs > 0)
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}
