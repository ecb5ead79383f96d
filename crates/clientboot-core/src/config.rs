//! Startup configuration
//!
//! Plain data with defaults; nothing here reads files or arguments.

use std::time::Duration;

use crate::faults::FailureWindow;
use crate::types::ErrorFormat;

/// Knobs for one initialization run
#[derive(Debug, Clone, PartialEq)]
pub struct BootConfig {
    /// Simulated latency of setting up the secret provider
    pub init_latency: Duration,
    /// Simulated latency of each secret fetch
    pub fetch_latency: Duration,
    /// Draws inside this window fail
    pub failure_window: FailureWindow,
    /// Upper bound on connect and on each fetch; `None` waits indefinitely
    pub timeout: Option<Duration>,
    /// Error format of the clients that get built
    pub error_format: ErrorFormat,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            init_latency: Duration::from_secs(3),
            fetch_latency: Duration::from_secs(3),
            failure_window: FailureWindow::DEFAULT,
            timeout: None,
            error_format: ErrorFormat::Minimal,
        }
    }
}

impl BootConfig {
    /// Defaults with no simulated latency
    pub fn instant() -> Self {
        Self::default()
            .with_init_latency(Duration::ZERO)
            .with_fetch_latency(Duration::ZERO)
    }

    pub fn with_init_latency(mut self, latency: Duration) -> Self {
        self.init_latency = latency;
        self
    }

    pub fn with_fetch_latency(mut self, latency: Duration) -> Self {
        self.fetch_latency = latency;
        self
    }

    pub fn with_failure_window(mut self, window: FailureWindow) -> Self {
        self.failure_window = window;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_error_format(mut self, error_format: ErrorFormat) -> Self {
        self.error_format = error_format;
        self
    }
}
