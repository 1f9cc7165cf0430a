//! Diagnostic logging setup
//!
//! The command runner logs to stderr. The TUI owns the terminal, so it only
//! logs when `log_file` is set in the settings.
//!
//! The filter comes from `BUDGET_CARDS_LOG` (same syntax as `RUST_LOG`) and
//! defaults to `warn`.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{BudgetError, BudgetResult};

/// Environment variable holding the log filter
pub const LOG_ENV_VAR: &str = "BUDGET_CARDS_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    Disabled,
}

impl LogTarget {
    /// The TUI target: the configured file, or nothing
    pub fn for_tui(log_file: Option<PathBuf>) -> Self {
        log_file.map_or(Self::Disabled, Self::File)
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber
pub fn init(target: LogTarget) -> BudgetResult<()> {
    let registry = tracing_subscriber::registry().with(env_filter());

    let result = match target {
        LogTarget::Disabled => return Ok(()),
        LogTarget::Stderr => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true)
                    .with_timer(UtcTime::rfc_3339()),
            )
            .try_init(),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .map_err(|e| {
                    BudgetError::Io(format!("Failed to open log file {}: {}", path.display(), e))
                })?;

            registry
                .with(
                    fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false)
                        .with_target(true)
                        .with_level(true)
                        .with_timer(UtcTime::rfc_3339()),
                )
                .try_init()
        }
    };

    result.map_err(|e| BudgetError::Config(format!("Failed to initialise logging: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tui_target() {
        assert_eq!(LogTarget::for_tui(None), LogTarget::Disabled);
        assert_eq!(
            LogTarget::for_tui(Some(PathBuf::from("/tmp/budgets.log"))),
            LogTarget::File(PathBuf::from("/tmp/budgets.log"))
        );
    }

    #[test]
    fn test_disabled_installs_nothing() {
        assert!(init(LogTarget::Disabled).is_ok());
    }
}
