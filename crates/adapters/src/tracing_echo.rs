//! Echo recorder that forwards calls as `tracing` events.

use log_catcher_ports::{LogLevel, LogRecorder};
use std::fmt;

/// `tracing` target used for echoed events.
pub const TRACING_TARGET: &str = "log_catcher";

/// Emits each call as a `tracing` event at a fixed level.
///
/// The event carries the template as the `template` field and the
/// interpolated string as the message.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingRecorder {
    level: LogLevel,
}

impl TracingRecorder {
    /// Create a recorder emitting at `level`.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Level events are emitted at.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }
}

impl LogRecorder for TracingRecorder {
    fn record(&self, format: &str, args: fmt::Arguments<'_>) {
        match self.level {
            LogLevel::Debug => {
                tracing::debug!(target: TRACING_TARGET, template = format, "{}", args);
            },
            LogLevel::Info => {
                tracing::info!(target: TRACING_TARGET, template = format, "{}", args);
            },
            LogLevel::Warn => {
                tracing::warn!(target: TRACING_TARGET, template = format, "{}", args);
            },
            LogLevel::Error => {
                tracing::error!(target: TRACING_TARGET, template = format, "{}", args);
            },
        }
    }
}
