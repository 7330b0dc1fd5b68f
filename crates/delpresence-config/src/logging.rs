use std::path::PathBuf;

use crate::{process_env, string_var};

/// Logging settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogConfig {
    /// Level for this crate's targets when `RUST_LOG` is unset
    pub level: String,
    /// Directory for daily rolling JSON logs; console only when `None`
    pub log_dir: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_dir: None,
        }
    }
}

impl LogConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(process_env)
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            level: string_var(&lookup, "LOG_LEVEL")
                .map(|l| l.to_lowercase())
                .unwrap_or_else(|| "info".to_string()),
            log_dir: string_var(&lookup, "LOG_DIR").map(PathBuf::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_config_from_lookup() {
        let config = LogConfig::from_lookup(|key| match key {
            "LOG_LEVEL" => Some("DEBUG".to_string()),
            "LOG_DIR" => Some("storage/logs".to_string()),
            _ => None,
        });
        assert_eq!(config.level, "debug");
        assert_eq!(config.log_dir, Some(PathBuf::from("storage/logs")));
    }

    #[test]
    fn test_log_config_defaults() {
        assert_eq!(LogConfig::from_lookup(|_| None), LogConfig::default());
    }
}
