//! Structured console logging.
//!
//! Each event is one JSON object (`ts`, `level`, `event`, then the event's own
//! fields) written through the `log` facade. In the browser the facade is
//! backed by `console_log`.

use log::Level;
use serde_json::{Map, Number, Value};

#[cfg(target_arch = "wasm32")]
pub fn init(level: Level) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(level);
}

pub fn log_event(level: Level, event: &str, fields: Value) {
    if level > log::max_level() {
        return;
    }

    let payload = event_payload(now_unix_millis(), level, event, fields);
    log::log!(level, "{payload}");
}

pub fn event_payload(ts: u64, level: Level, event: &str, fields: Value) -> Value {
    let mut payload = Map::new();
    payload.insert("ts".to_string(), Value::Number(Number::from(ts)));
    payload.insert(
        "level".to_string(),
        Value::String(level.as_str().to_ascii_lowercase()),
    );
    payload.insert("event".to_string(), Value::String(event.to_string()));

    if let Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    Value::Object(payload)
}

/// Milliseconds from navigation start to the end of the load event. `None`
/// while the browser has not filled both marks in.
pub fn page_load_millis(navigation_start: f64, load_event_end: f64) -> Option<u64> {
    if navigation_start <= 0.0 || load_event_end < navigation_start {
        return None;
    }

    Some((load_event_end - navigation_start).round() as u64)
}

#[cfg(target_arch = "wasm32")]
fn now_unix_millis() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(target_arch = "wasm32"))]
fn now_unix_millis() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_carries_envelope_and_fields() {
        let payload = event_payload(
            1_700_000_000_000,
            Level::Warn,
            "contact_submit_failed",
            json!({ "reason": "transport" }),
        );

        assert_eq!(payload["ts"], json!(1_700_000_000_000_u64));
        assert_eq!(payload["level"], json!("warn"));
        assert_eq!(payload["event"], json!("contact_submit_failed"));
        assert_eq!(payload["reason"], json!("transport"));
    }

    #[test]
    fn non_object_fields_are_dropped() {
        let payload = event_payload(1, Level::Info, "site_ready", json!("ignored"));

        assert_eq!(payload.as_object().map(Map::len), Some(3));
    }

    #[test]
    fn page_load_time_needs_both_marks() {
        assert_eq!(page_load_millis(1_000.0, 1_842.4), Some(842));
        assert_eq!(page_load_millis(1_000.0, 0.0), None);
        assert_eq!(page_load_millis(0.0, 0.0), None);
    }
}
