//! Plain-text echo recorder.

use crate::log_sink::{LogSink, StderrLogSink};
use log_catcher_ports::LogRecorder;
use std::fmt;
use std::sync::Arc;

/// Writes each interpolated message as one line, the way a console log would.
#[derive(Clone)]
pub struct PlainRecorder {
    sink: Arc<dyn LogSink>,
}

impl PlainRecorder {
    /// Create a plain recorder backed by the provided sink.
    #[must_use]
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self { sink }
    }

    /// Create a plain recorder writing to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(Arc::new(StderrLogSink))
    }
}

impl Default for PlainRecorder {
    fn default() -> Self {
        Self::stderr()
    }
}

impl fmt::Debug for PlainRecorder {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("PlainRecorder").finish_non_exhaustive()
    }
}

impl LogRecorder for PlainRecorder {
    fn record(&self, _format: &str, args: fmt::Arguments<'_>) {
        match args.as_str() {
            Some(literal) => self.sink.write_line(literal),
            None => self.sink.write_line(&args.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MemorySink;
    use log_catcher_ports::record_log;

    #[test]
    fn plain_recorder_writes_interpolated_lines() {
        let sink = Arc::new(MemorySink::default());
        let recorder = PlainRecorder::new(sink.clone());

        record_log!(recorder, "Hello {}", "World");
        record_log!(recorder, "done");

        assert_eq!(sink.take(), vec!["Hello World", "done"]);
    }
}
