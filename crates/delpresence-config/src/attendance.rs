use std::time::Duration;

use crate::{parse_var, process_env};

/// Intervals driving the attendance session watcher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttendanceConfig {
    /// How often remaining time is recomputed locally
    pub tick_interval: Duration,
    /// How often active sessions are refetched from the server
    pub sync_interval: Duration,
}

impl Default for AttendanceConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_secs(1),
            sync_interval: Duration::from_secs(15),
        }
    }
}

impl AttendanceConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(process_env)
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            tick_interval: parse_var(&lookup, "ATTENDANCE_TICK_SECS")
                .filter(|secs: &u64| *secs > 0)
                .map(Duration::from_secs)
                .unwrap_or(defaults.tick_interval),
            sync_interval: parse_var(&lookup, "ATTENDANCE_SYNC_SECS")
                .filter(|secs: &u64| *secs > 0)
                .map(Duration::from_secs)
                .unwrap_or(defaults.sync_interval),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_intervals() {
        let config = AttendanceConfig::default();
        assert_eq!(config.tick_interval, Duration::from_secs(1));
        assert_eq!(config.sync_interval, Duration::from_secs(15));
    }

    #[test]
    fn test_from_lookup_overrides_and_rejects_zero() {
        let config = AttendanceConfig::from_lookup(|key| match key {
            "ATTENDANCE_TICK_SECS" => Some("0".to_string()),
            "ATTENDANCE_SYNC_SECS" => Some("30".to_string()),
            _ => None,
        });
        assert_eq!(config.tick_interval, Duration::from_secs(1));
        assert_eq!(config.sync_interval, Duration::from_secs(30));
    }
}
