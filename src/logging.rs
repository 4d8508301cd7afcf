//! Activity log filtering.
//!
//! Routine refresh chatter (successful fetches, cycle markers) is logged at
//! debug level and hidden by default; failures always surface. The threshold
//! is resolved from `RUST_LOG` once at session setup and carried by value
//! into the activity log and the headless console loop.

use crate::error_classifier::LogLevel;
use std::env;

/// Display threshold for poller events.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LogFilter {
    threshold: LogLevel,
}

impl LogFilter {
    /// Resolve the filter from the `RUST_LOG` environment variable.
    pub fn from_env() -> Self {
        let rust_log = env::var("RUST_LOG").unwrap_or_default();
        Self::parse(&rust_log)
    }

    /// Parse common `RUST_LOG` formats: a bare level ("debug") or a
    /// module-qualified list ("botdeck=debug,hyper=info"), first entry wins.
    pub fn parse(rust_log: &str) -> Self {
        let level_str = rust_log
            .split(',')
            .next()
            .unwrap_or(rust_log)
            .split('=')
            .next_back()
            .unwrap_or(rust_log)
            .to_lowercase();

        let threshold = match level_str.as_str() {
            "trace" => LogLevel::Trace,
            "debug" => LogLevel::Debug,
            "info" => LogLevel::Info,
            "warn" | "warning" => LogLevel::Warn,
            "error" => LogLevel::Error,
            _ => LogLevel::Info,
        };
        Self { threshold }
    }

    /// Whether an event at the given level should be shown.
    ///
    /// Warnings and errors always surface regardless of the threshold; only
    /// sub-Info chatter is gated.
    pub fn allows(&self, level: LogLevel) -> bool {
        if level >= LogLevel::Info {
            return true;
        }
        level >= self.threshold
    }
}

impl Default for LogFilter {
    fn default() -> Self {
        Self {
            threshold: LogLevel::Info,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_levels() {
        assert_eq!(LogFilter::parse("debug"), LogFilter::parse("DEBUG"));
        assert!(LogFilter::parse("trace").allows(LogLevel::Trace));
        assert!(LogFilter::parse("debug").allows(LogLevel::Debug));
        assert!(!LogFilter::parse("info").allows(LogLevel::Debug));
    }

    #[test]
    fn test_parse_module_qualified_formats() {
        let filter = LogFilter::parse("botdeck=debug");
        assert!(filter.allows(LogLevel::Debug));

        let filter = LogFilter::parse("botdeck=debug,hyper=info");
        assert!(filter.allows(LogLevel::Debug));
    }

    #[test]
    fn test_unparseable_value_defaults_to_info() {
        assert_eq!(LogFilter::parse("invalid"), LogFilter::default());
        assert_eq!(LogFilter::parse(""), LogFilter::default());
    }

    #[test]
    fn test_failures_always_surface() {
        // Even the strictest threshold never hides a warning or error
        let filter = LogFilter::parse("error");
        assert!(filter.allows(LogLevel::Warn));
        assert!(filter.allows(LogLevel::Error));
        assert!(filter.allows(LogLevel::Info));
        assert!(!filter.allows(LogLevel::Debug));
    }
}
