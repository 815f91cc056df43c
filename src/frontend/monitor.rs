use super::dom::{self, WindowListener};
use crate::telemetry::{log_event, page_load_millis};
use gloo_timers::callback::Timeout;
use js_sys::Reflect;
use log::Level;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{console, window, ErrorEvent, Event};

const WELCOME_LINES: [(&str, &str); 3] = [
    (
        "%c👋 Welcome to Muhammad's Portfolio!",
        "color: #667eea; font-size: 20px; font-weight: bold;",
    ),
    (
        "%c🚀 Built with Rust and WebAssembly",
        "color: #764ba2; font-size: 14px;",
    ),
    (
        "%c💼 Looking to collaborate? Get in touch!",
        "color: #f093fb; font-size: 14px;",
    ),
];

fn report_page_load() {
    let Some(timing) = window()
        .and_then(|w| w.performance())
        .map(|performance| performance.timing())
    else {
        return;
    };

    if let Some(duration_ms) = page_load_millis(timing.navigation_start(), timing.load_event_end())
    {
        log_event(
            Level::Info,
            "page_loaded",
            serde_json::json!({ "duration_ms": duration_ms }),
        );
    }
}

/// `loadEventEnd` is only filled in after the load handlers return, so the
/// read is deferred by one tick.
pub fn attach_page_load_timing() {
    let already_loaded = dom::document()
        .and_then(|d| Reflect::get(&d, &JsValue::from_str("readyState")).ok())
        .and_then(|state| state.as_string())
        .is_some_and(|state| state == "complete");

    if already_loaded {
        Timeout::new(0, report_page_load).forget();
        return;
    }

    if let Some(listener) = WindowListener::new("load", |_: Event| {
        Timeout::new(0, report_page_load).forget();
    }) {
        listener.forget();
    }
}

pub fn attach_connectivity_logging() {
    let online = WindowListener::new("online", |_: Event| {
        log_event(Level::Info, "connectivity", serde_json::json!({ "online": true }));
    });
    let offline = WindowListener::new("offline", |_: Event| {
        log_event(Level::Warn, "connectivity", serde_json::json!({ "online": false }));
    });

    for listener in [online, offline].into_iter().flatten() {
        listener.forget();
    }
}

pub fn attach_error_logging() {
    let listener = WindowListener::new("error", |event: Event| {
        let message = event
            .dyn_ref::<ErrorEvent>()
            .map(ErrorEvent::message)
            .unwrap_or_else(|| "unknown error".to_string());

        log_event(
            Level::Error,
            "uncaught_error",
            serde_json::json!({ "message": message }),
        );
    });

    if let Some(listener) = listener {
        listener.forget();
    }
}

pub fn print_welcome_banner() {
    for (text, style) in WELCOME_LINES {
        console::log_2(&JsValue::from_str(text), &JsValue::from_str(style));
    }
}
