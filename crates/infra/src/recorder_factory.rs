//! Recorder selection from config.

use crate::InfraResult;
use log_catcher_adapters::{
    JsonRecorder, LogSink, NoopRecorder, PlainRecorder, StderrLogSink, TeeRecorder,
    TracingRecorder,
};
use log_catcher_app::{LogCatcher, shared};
use log_catcher_config::{EchoMode, ValidatedCatcherConfig, load_catcher_config_std_env};
use log_catcher_ports::SharedRecorder;
use std::path::Path;
use std::sync::Arc;

/// Build the recorder described by `config`, echoing to stderr.
///
/// When capture is enabled, calls land in `catcher` or, if none is given, in
/// the process-wide catcher. Capture always runs before echo.
pub fn build_recorder(
    config: &ValidatedCatcherConfig,
    catcher: Option<Arc<LogCatcher>>,
) -> SharedRecorder {
    build_recorder_with_sink(config, catcher, Arc::new(StderrLogSink))
}

/// Build the recorder described by `config`, echoing text output to `sink`.
pub fn build_recorder_with_sink(
    config: &ValidatedCatcherConfig,
    catcher: Option<Arc<LogCatcher>>,
    sink: Arc<dyn LogSink>,
) -> SharedRecorder {
    let mut recorders: Vec<SharedRecorder> = Vec::with_capacity(2);

    if config.capture.enabled {
        match catcher {
            Some(catcher) => recorders.push(catcher),
            None => recorders.push(Arc::new(shared::catcher())),
        }
    }

    match config.echo.mode {
        EchoMode::None => {},
        EchoMode::Stderr => recorders.push(Arc::new(PlainRecorder::new(sink))),
        EchoMode::Json => recorders.push(Arc::new(
            JsonRecorder::new(sink)
                .with_level(config.echo.level)
                .with_event(config.echo.event.clone()),
        )),
        EchoMode::Tracing => recorders.push(Arc::new(TracingRecorder::new(config.echo.level))),
    }

    tracing::debug!(
        capture = config.capture.enabled,
        echo = config.echo.mode.as_str(),
        level = config.echo.level.as_str(),
        "log recorder wired"
    );

    match recorders.len() {
        0 => Arc::new(NoopRecorder),
        1 => recorders.swap_remove(0),
        _ => Arc::new(TeeRecorder::new(recorders)),
    }
}

/// Load config from std env and an optional file, then build the recorder.
pub fn build_recorder_std_env(config_path: Option<&Path>) -> InfraResult<SharedRecorder> {
    let config = load_catcher_config_std_env(config_path)?;
    Ok(build_recorder(&config, None))
}

#[cfg(test)]
mod tests {
    use super::*;
    use log_catcher_config::CatcherConfig;
    use log_catcher_domain::{LogEntry, LogLevel};
    use log_catcher_ports::record_log;
    use log_catcher_shared::ErrorCode;
    use log_catcher_testkit::{MemorySink, isolated_catcher};
    use std::fmt;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn config(capture: bool, mode: EchoMode) -> ValidatedCatcherConfig {
        let mut config = CatcherConfig::default();
        config.capture.enabled = capture;
        config.echo.mode = mode;
        config.echo.level = LogLevel::Warn;
        config
            .validate_and_normalize()
            .expect("config should validate")
    }

    fn fixture_path(relative: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("testkit")
            .join("fixtures")
            .join(relative)
    }

    struct Ticket(AtomicUsize);

    impl fmt::Display for Ticket {
        fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "{}", self.0.fetch_add(1, Ordering::SeqCst))
        }
    }

    #[test]
    fn default_config_captures_only() {
        let catcher = Arc::new(LogCatcher::new());
        let sink = Arc::new(MemorySink::new());
        let recorder = build_recorder_with_sink(
            &config(true, EchoMode::None),
            Some(catcher.clone()),
            sink.clone(),
        );

        record_log!(recorder, "Hello {}", "World");

        assert_eq!(catcher.logs(), vec![LogEntry::new("Hello {}", "Hello World")]);
        assert!(sink.take().is_empty());
    }

    #[test]
    fn capture_and_plain_echo_both_receive_calls() {
        let catcher = Arc::new(LogCatcher::new());
        let sink = Arc::new(MemorySink::new());
        let recorder = build_recorder_with_sink(
            &config(true, EchoMode::Stderr),
            Some(catcher.clone()),
            sink.clone(),
        );

        record_log!(recorder, "n={}", 7);

        assert!(catcher.contains_log_with_format_and_full_string("n={}", "n=7"));
        assert_eq!(sink.take(), vec!["n=7"]);
    }

    #[test]
    fn captured_text_equals_echoed_text() {
        let catcher = Arc::new(LogCatcher::new());
        let sink = Arc::new(MemorySink::new());
        let recorder = build_recorder_with_sink(
            &config(true, EchoMode::Stderr),
            Some(catcher.clone()),
            sink.clone(),
        );

        record_log!(recorder, "ticket {}", Ticket(AtomicUsize::new(0)));

        let echoed = sink.take();
        let captured: Vec<String> = catcher
            .logs()
            .iter()
            .map(|entry| entry.full().to_owned())
            .collect();
        assert_eq!(captured, echoed);
        assert_eq!(captured, vec!["ticket 0"]);
    }

    #[test]
    fn json_echo_without_capture_leaves_catcher_empty() {
        let catcher = Arc::new(LogCatcher::new());
        let sink = Arc::new(MemorySink::new());
        let recorder = build_recorder_with_sink(
            &config(false, EchoMode::Json),
            Some(catcher.clone()),
            sink.clone(),
        );

        record_log!(recorder, "charged {}", "alice");

        assert!(catcher.is_empty());
        let lines = sink.take();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("\"level\":\"warn\""), "{}", lines[0]);
        assert!(lines[0].contains("\"message\":\"charged alice\""), "{}", lines[0]);
        assert!(lines[0].contains("\"event\":\"log.captured\""), "{}", lines[0]);
    }

    #[test]
    fn nothing_enabled_yields_inert_recorder() {
        let catcher = Arc::new(LogCatcher::new());
        let sink = Arc::new(MemorySink::new());
        let recorder = build_recorder_with_sink(
            &config(false, EchoMode::None),
            Some(catcher.clone()),
            sink.clone(),
        );

        record_log!(recorder, "dropped");

        assert!(catcher.is_empty());
        assert!(sink.take().is_empty());
    }

    // Assumes no LOG_CATCHER_* variables are set in the test environment.
    #[test]
    fn std_env_recorder_captures_into_process_wide_catcher() -> InfraResult<()> {
        let shared_catcher = isolated_catcher();
        let recorder =
            build_recorder_std_env(Some(&fixture_path("config/catcher-config.valid.toml")))?;

        record_log!(recorder, "order {} shipped", 42);

        assert_eq!(shared_catcher.len(), 1);
        assert!(
            shared_catcher.contains_log_with_format_and_full_string(
                "order {} shipped",
                "order 42 shipped"
            )
        );
        Ok(())
    }

    #[test]
    fn std_env_recorder_rejects_unsupported_extension() {
        let error = build_recorder_std_env(Some(Path::new("catcher.yaml"))).err();
        assert_eq!(
            error.map(|error| error.code),
            Some(ErrorCode::new("config", "unsupported_format"))
        );
    }
}
