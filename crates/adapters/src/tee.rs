//! Fan-out recorder.

use log_catcher_ports::{LogEntry, LogRecorder, SharedRecorder};
use std::fmt;

/// Forwards every call to each inner recorder, in insertion order.
///
/// Arguments are interpolated once; every inner recorder receives the same
/// rendered text, so a capture and an echo of one call cannot disagree.
#[derive(Clone, Default)]
pub struct TeeRecorder {
    recorders: Vec<SharedRecorder>,
}

impl TeeRecorder {
    /// Create a tee over the given recorders.
    #[must_use]
    pub fn new(recorders: Vec<SharedRecorder>) -> Self {
        Self { recorders }
    }

    /// Append a recorder, builder style.
    #[must_use]
    pub fn with(mut self, recorder: SharedRecorder) -> Self {
        self.recorders.push(recorder);
        self
    }

    /// Append a recorder.
    pub fn push(&mut self, recorder: SharedRecorder) {
        self.recorders.push(recorder);
    }

    /// Number of inner recorders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.recorders.len()
    }

    /// Whether the tee forwards to nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recorders.is_empty()
    }
}

impl fmt::Debug for TeeRecorder {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("TeeRecorder")
            .field("recorders", &self.recorders.len())
            .finish()
    }
}

impl LogRecorder for TeeRecorder {
    fn record(&self, format: &str, args: fmt::Arguments<'_>) {
        if self.recorders.is_empty() {
            return;
        }
        let entry = LogEntry::interpolate(format, args);
        let full = entry.full();
        for recorder in &self.recorders {
            recorder.record(format, format_args!("{full}"));
        }
    }
}
