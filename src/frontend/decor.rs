use super::dom;
use crate::layout;
use crate::telemetry::log_event;
use crate::typing::TypingEffect;
use gloo_timers::callback::Timeout;
use gloo_timers::future::sleep;
use log::Level;
use std::time::Duration;
use wasm_bindgen::{closure::Closure, JsCast};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event, HtmlElement, MouseEvent};

const TYPING_TARGET_SELECTOR: &str = ".hero-subtitle";
const INTERACTIVE_SELECTOR: &str = "a, button, input, textarea";

const CURSOR_CLASS: &str = "custom-cursor";
const CURSOR_STYLE: &str = "width: 10px; height: 10px; background: var(--primary-color); \
    border-radius: 50%; position: fixed; pointer-events: none; z-index: 9999; \
    transition: transform 0.1s ease; display: none;";
const CURSOR_RADIUS_PX: i32 = 5;

const FOLLOWER_CLASS: &str = "custom-cursor-follower";
const FOLLOWER_STYLE: &str = "width: 40px; height: 40px; border: 2px solid var(--primary-color); \
    border-radius: 50%; position: fixed; pointer-events: none; z-index: 9998; \
    transition: all 0.15s ease; display: none;";
const FOLLOWER_RADIUS_PX: i32 = 20;
const FOLLOWER_LAG_MS: u32 = 50;

fn create_overlay(document: &Document, class_name: &str, style: &str) -> Option<HtmlElement> {
    let element = document
        .create_element("div")
        .ok()?
        .dyn_into::<HtmlElement>()
        .ok()?;
    element.set_class_name(class_name);
    let _ = element.set_attribute("style", style);
    Some(element)
}

fn place(element: &HtmlElement, client_x: i32, client_y: i32, radius: i32) {
    let style = element.style();
    let _ = style.set_property("left", &format!("{}px", client_x - radius));
    let _ = style.set_property("top", &format!("{}px", client_y - radius));
}

fn scale(elements: &[HtmlElement], factor: &str) {
    for element in elements {
        let _ = element
            .style()
            .set_property("transform", &format!("scale({factor})"));
    }
}

/// A dot that tracks the pointer and a ring that trails it. Desktop-sized
/// viewports only.
pub fn attach_cursor_follower() {
    let Some(document) = dom::document() else {
        return;
    };
    let Some(body) = document.body() else {
        return;
    };
    let (Some(cursor), Some(follower)) = (
        create_overlay(&document, CURSOR_CLASS, CURSOR_STYLE),
        create_overlay(&document, FOLLOWER_CLASS, FOLLOWER_STYLE),
    ) else {
        return;
    };

    let _ = body.append_child(&cursor);
    let _ = body.append_child(&follower);

    if !layout::cursor_effect_allowed(dom::viewport_width()) {
        return;
    }

    for overlay in [&cursor, &follower] {
        let _ = overlay.style().set_property("display", "block");
    }

    let on_move = {
        let cursor = cursor.clone();
        let follower = follower.clone();
        Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
            let (x, y) = (event.client_x(), event.client_y());
            place(&cursor, x, y, CURSOR_RADIUS_PX);

            let follower = follower.clone();
            Timeout::new(FOLLOWER_LAG_MS, move || place(&follower, x, y, FOLLOWER_RADIUS_PX))
                .forget();
        })
    };
    if document
        .add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref())
        .is_ok()
    {
        on_move.forget();
    }

    let overlays = [cursor, follower];
    for element in dom::query_all(INTERACTIVE_SELECTOR) {
        let grown = overlays.clone();
        dom::listen(&element, "mouseenter", move |_: Event| scale(&grown, "1.5"));
        let restored = overlays.clone();
        dom::listen(&element, "mouseleave", move |_: Event| scale(&restored, "1"));
    }

    log_event(Level::Debug, "cursor_effect_enabled", serde_json::json!({}));
}

pub fn start_typing(words: Vec<String>, delay_ms: u32) {
    let Some(target) = dom::query_first(TYPING_TARGET_SELECTOR) else {
        return;
    };
    let Some(mut effect) = TypingEffect::new(words, delay_ms) else {
        log_event(
            Level::Warn,
            "typing_effect_skipped",
            serde_json::json!({ "reason": "no_words" }),
        );
        return;
    };

    spawn_local(async move {
        loop {
            let frame = effect.step();
            target.set_text_content(Some(&frame.text));
            sleep(Duration::from_millis(u64::from(frame.next_delay_ms))).await;
        }
    });
}
