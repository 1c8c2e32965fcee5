//! End-to-end tests: config to recorder to captured queries.

use log_catcher::{
    CatcherConfig, EchoMode, LogCatcher, LogLevel, LogQuery, SharedRecorder, TextMatch, add_log,
    build_recorder_with_sink, parse_catcher_config_toml, record_log, shared,
};
use log_catcher_testkit::{MemorySink, assert_logged, assert_not_logged, isolated_catcher};
use serde_json::Value;
use std::error::Error;
use std::sync::Arc;

struct Checkout {
    log: SharedRecorder,
}

impl Checkout {
    fn charge(&self, user: &str, cents: u64) {
        record_log!(self.log, "charging {} {} cents", user, cents);
        if cents == 0 {
            record_log!(self.log, "skipping empty charge for {}", user);
        }
    }
}

#[test]
fn configured_recorder_captures_and_echoes() -> Result<(), Box<dyn Error>> {
    let config = parse_catcher_config_toml(
        r#"
version = 1

[echo]
mode = "json"
level = "warn"
event = "checkout.log"
"#,
    )?;
    let catcher = Arc::new(LogCatcher::new());
    let sink = Arc::new(MemorySink::new());
    let checkout = Checkout {
        log: build_recorder_with_sink(&config, Some(catcher.clone()), sink.clone()),
    };

    checkout.charge("alice", 250);
    checkout.charge("bob", 0);

    assert_eq!(catcher.len(), 3);
    assert!(catcher.contains_log_with_format_string("charging {} {} cents"));
    assert!(catcher.contains_log_with_full_string("charging alice 250 cents"));
    assert!(catcher.contains_log_with_format_and_full_string(
        "skipping empty charge for {}",
        "skipping empty charge for bob"
    ));
    assert!(!catcher.contains_log_with_format_and_full_string(
        "skipping empty charge for {}",
        "charging alice 250 cents"
    ));
    assert_logged(
        &catcher,
        &LogQuery::any()
            .with_format(TextMatch::contains("charging"))
            .with_full(TextMatch::contains("bob")),
    );
    assert_not_logged(&catcher, &LogQuery::full_contains("carol"));

    let lines = sink.take();
    assert_eq!(lines.len(), 3);
    let first: Value = serde_json::from_str(lines[0].trim_end())?;
    assert_eq!(first.get("event"), Some(&Value::from("checkout.log")));
    assert_eq!(first.get("level"), Some(&Value::from("warn")));
    assert_eq!(
        first.get("message"),
        Some(&Value::from("charging alice 250 cents"))
    );
    Ok(())
}

#[test]
fn default_config_routes_into_process_wide_catcher() -> Result<(), Box<dyn Error>> {
    let isolated = isolated_catcher();
    let config = CatcherConfig::default().validate_and_normalize()?;
    assert_eq!(config.echo.mode, EchoMode::None);
    assert_eq!(config.echo.level, LogLevel::Info);

    let checkout = Checkout {
        log: build_recorder_with_sink(&config, None, Arc::new(MemorySink::new())),
    };
    checkout.charge("dave", 10);
    add_log!("direct {}", "call");

    assert_eq!(isolated.len(), 2);
    assert!(shared::contains_log_with_full_string("charging dave 10 cents"));
    assert!(shared::contains_log_with_format_string_matching("direct"));
    assert!(shared::contains_log_with_full_string_matching("call"));
    Ok(())
}

#[test]
fn process_wide_catcher_reset_between_isolated_holders() {
    {
        let _isolated = isolated_catcher();
        add_log!("first holder");
        assert!(shared::contains_log_with_format_string("first holder"));
    }
    let isolated = isolated_catcher();
    assert!(isolated.is_empty());
    assert!(!shared::contains_log_with_format_string("first holder"));
}
