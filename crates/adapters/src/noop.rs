//! Recorder that drops every call.

use log_catcher_ports::LogRecorder;
use std::fmt;

/// Recorder used when neither capture nor echo is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRecorder;

impl LogRecorder for NoopRecorder {
    fn record(&self, _format: &str, _args: fmt::Arguments<'_>) {}
}
