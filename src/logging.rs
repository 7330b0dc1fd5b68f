use std::fs;

use delpresence_config::LogConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter directive for a given level.
fn default_directive(level: &str) -> String {
    format!("{}={level},reqwest=warn,hyper=warn", env!("CARGO_CRATE_NAME"))
}

/// Builds the console filter: `RUST_LOG` wins, then `LOG_LEVEL`.
fn console_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(default_directive(&config.level))
            .unwrap_or_else(|_| EnvFilter::new(default_directive("info")))
    })
}

/// Installs the global subscriber.
///
/// Logs go to stderr in compact form so command output on stdout stays
/// clean. When `LOG_DIR` is set, a daily rolling JSON log is written there as
/// well; keep the returned guard alive until exit so buffered lines are
/// flushed.
pub fn init_tracing(config: &LogConfig) -> Option<WorkerGuard> {
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .compact()
        .with_filter(console_filter(config));

    let (json_layer, guard) = match &config.log_dir {
        Some(dir) => match fs::create_dir_all(dir) {
            Ok(()) => {
                let appender = RollingFileAppender::new(Rotation::DAILY, dir, "delpresence.json");
                let (writer, guard) = tracing_appender::non_blocking(appender);
                let layer = fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_filter(EnvFilter::new(default_directive("info")));
                (Some(layer), Some(guard))
            }
            Err(error) => {
                eprintln!(
                    "⚠️  Failed to create log directory {}: {error}. Continuing without file logging...",
                    dir.display()
                );
                (None, None)
            }
        },
        None => (None, None),
    };

    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(json_layer)
        .try_init();

    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_scopes_crate() {
        assert_eq!(
            default_directive("debug"),
            "delpresence=debug,reqwest=warn,hyper=warn"
        );
    }

    #[test]
    fn test_init_tracing_writes_to_log_dir() {
        let dir = std::env::temp_dir().join(format!("delpresence-logs-{}", uuid::Uuid::new_v4()));
        let config = LogConfig {
            level: "debug".to_string(),
            log_dir: Some(dir.clone()),
        };
        let guard = init_tracing(&config);
        assert!(guard.is_some());
        assert!(dir.exists());
        drop(guard);
        let _ = fs::remove_dir_all(dir);
    }
}
