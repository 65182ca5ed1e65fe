// src/config.rs
// =============================================================================
// Run-wide configuration.
//
// Built once from the command line, validated, then shared read-only by
// every worker. Nothing here changes after startup, so no locking is
// needed to read it.
// =============================================================================

use std::time::Duration;

use crate::error::InputError;
use crate::snippet::Highlight;

pub const DEFAULT_CONTEXT_LENGTH: usize = 200;
pub const DEFAULT_WORKER_COUNT: usize = 10;

/// How results are written to standard output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Colored, human-readable blocks
    Text,
    /// One JSON object per line
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Characters of context on each side of a match
    pub context_length: usize,
    /// Number of workers, which is also the queue capacity
    pub worker_count: usize,
    pub format: OutputFormat,
    pub highlight: Highlight,
    /// Prefix each error line with the URL that failed
    pub tag_errors: bool,
    /// Per-request timeout; None leaves reqwest's default (no timeout)
    pub timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            context_length: DEFAULT_CONTEXT_LENGTH,
            worker_count: DEFAULT_WORKER_COUNT,
            format: OutputFormat::Text,
            highlight: Highlight::Color,
            tag_errors: false,
            timeout: None,
        }
    }
}

impl Config {
    pub fn validate(self) -> Result<Self, InputError> {
        if self.worker_count == 0 {
            return Err(InputError::InvalidWorkerCount(self.worker_count));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.context_length, 200);
        assert_eq!(config.worker_count, 10);
        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_zero_workers_rejected() {
        let config = Config {
            worker_count: 0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(InputError::InvalidWorkerCount(0))
        ));
    }

    #[test]
    fn test_zero_context_is_allowed() {
        let config = Config {
            context_length: 0,
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }
}
