//! Structured JSON echo recorder.

use crate::log_sink::LogSink;
use log_catcher_ports::{LogLevel, LogRecorder};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

const FALLBACK_LINE: &str = "{\"timestampMs\":0,\"level\":\"error\",\"event\":\"recorder.serialize_failed\",\"message\":\"log serialization failed\"}";

/// Echo recorder emitting one JSON object per recorded call.
///
/// Line shape: `{"timestampMs":..,"level":..,"event":..,"format":..,"message":..}`
/// where `message` is the interpolated string.
#[derive(Clone)]
pub struct JsonRecorder {
    sink: Arc<dyn LogSink>,
    level: LogLevel,
    event: Box<str>,
}

impl JsonRecorder {
    /// Create a JSON recorder backed by the provided sink.
    #[must_use]
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self {
            sink,
            level: LogLevel::Info,
            event: "log.captured".into(),
        }
    }

    /// Set the level stamped on every line.
    #[must_use]
    pub const fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Set the event name stamped on every line.
    #[must_use]
    pub fn with_event(mut self, event: impl Into<Box<str>>) -> Self {
        self.event = event.into();
        self
    }
}

impl fmt::Debug for JsonRecorder {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("JsonRecorder")
            .field("level", &self.level)
            .field("event", &self.event)
            .finish_non_exhaustive()
    }
}

impl LogRecorder for JsonRecorder {
    fn record(&self, format: &str, args: fmt::Arguments<'_>) {
        let mut payload = serde_json::Map::new();
        payload.insert("timestampMs".to_string(), Value::from(now_epoch_ms()));
        payload.insert(
            "level".to_string(),
            Value::String(self.level.as_str().to_string()),
        );
        payload.insert("event".to_string(), Value::String(self.event.to_string()));
        payload.insert("format".to_string(), Value::String(format.to_string()));
        payload.insert("message".to_string(), Value::String(args.to_string()));

        match serde_json::to_string(&Value::Object(payload)) {
            Ok(line) => self.sink.write_line(&line),
            Err(_) => self.sink.write_line(FALLBACK_LINE),
        }
    }
}

fn now_epoch_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .ok()
        .and_then(|duration| u64::try_from(duration.as_millis()).ok())
        .unwrap_or_default()
}
