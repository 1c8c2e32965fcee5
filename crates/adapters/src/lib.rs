//! # log-catcher-adapters
//!
//! Recorder implementations for the `ports` boundary: no-op, fan-out, plain
//! text, JSON lines, and `tracing` echo.
//! This crate depends on `ports` only.

pub mod json;
pub mod log_sink;
pub mod noop;
pub mod plain;
pub mod tee;
pub mod tracing_echo;

pub use json::JsonRecorder;
pub use log_sink::{LogSink, StderrLogSink, WriterLogSink};
pub use noop::NoopRecorder;
pub use plain::PlainRecorder;
pub use tee::TeeRecorder;
pub use tracing_echo::TracingRecorder;

/// Returns the adapters crate version.
#[must_use]
pub const fn adapters_crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::log_sink::LogSink;
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    pub struct MemorySink {
        lines: Mutex<Vec<String>>,
    }

    impl MemorySink {
        pub fn take(&self) -> Vec<String> {
            let mut guard = self.lines.lock().expect("memory sink lock");
            std::mem::take(&mut *guard)
        }
    }

    impl LogSink for MemorySink {
        fn write_line(&self, line: &str) {
            let mut guard = self.lines.lock().expect("memory sink lock");
            guard.push(line.to_owned());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use log_catcher_ports::ports_crate_version;

    fn workspace_deps() -> Vec<String> {
        let cargo_toml = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml"));
        let mut deps = Vec::new();
        let mut in_deps = false;
        let mut in_dev_deps = false;

        for raw_line in cargo_toml.lines() {
            let line = raw_line.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }
            if line.starts_with('[') {
                in_deps = line == "[dependencies]";
                in_dev_deps = line == "[dev-dependencies]";
                continue;
            }
            if !(in_deps || in_dev_deps) {
                continue;
            }
            if line.starts_with("log-catcher-") {
                let key = line.split('=').next().unwrap_or("").trim();
                let name = key.split('.').next().unwrap_or("").trim();
                deps.push(name.to_string());
            }
        }

        deps
    }

    #[test]
    fn adapters_do_not_depend_on_app_or_infra() {
        let deps = workspace_deps();
        let forbidden = ["log-catcher-app", "log-catcher-infra"];

        for dep in &deps {
            assert!(
                !forbidden.contains(&dep.as_str()),
                "forbidden dependency found: {dep}"
            );
        }
    }

    #[test]
    fn adapters_can_use_ports() {
        assert!(!adapters_crate_version().is_empty());
        assert!(!ports_crate_version().is_empty());
    }
}
