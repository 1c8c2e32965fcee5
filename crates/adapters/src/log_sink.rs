//! Line destinations for echo recorders.
//!
//! Recorders hand a sink one rendered record at a time, without a line
//! terminator; the sink owns framing and writes each record in one piece so
//! concurrent echoes never interleave mid-line.

use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

/// Destination for rendered echo lines.
pub trait LogSink: Send + Sync {
    /// Write one record. `line` has no trailing newline.
    fn write_line(&self, line: &str);
}

/// Sink writing newline-terminated records to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrLogSink;

impl LogSink for StderrLogSink {
    fn write_line(&self, line: &str) {
        let mut stderr = io::stderr().lock();
        if let Err(error) = writeln!(stderr, "{line}") {
            eprintln!("log sink write failed: {error}");
        }
    }
}

/// Sink writing newline-terminated records to any `Write` target.
#[derive(Debug)]
pub struct WriterLogSink<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterLogSink<W> {
    /// Wrap `writer`.
    pub const fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Recover the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> LogSink for WriterLogSink<W> {
    fn write_line(&self, line: &str) {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let mut framed = String::with_capacity(line.len() + 1);
        framed.push_str(line);
        framed.push('\n');
        if let Err(error) = writer.write_all(framed.as_bytes()) {
            eprintln!("log sink write failed: {error}");
        }
    }
}
