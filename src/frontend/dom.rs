use crate::config::SiteConfig;
use crate::layout::{self, SectionBounds};
use crate::telemetry::log_event;
use crate::toast::TOAST_KEYFRAMES;
use log::Level;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{
    window, Document, Element, Event, HtmlElement, ScrollBehavior, ScrollToOptions, Storage,
};

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn element_by_id(id: &str) -> Option<Element> {
    document()?.get_element_by_id(id)
}

pub fn html_element_by_id(id: &str) -> Option<HtmlElement> {
    element_by_id(id)?.dyn_into::<HtmlElement>().ok()
}

pub fn query_first(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(nodes) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query_all_html(selector: &str) -> Vec<HtmlElement> {
    query_all(selector)
        .into_iter()
        .filter_map(|element| element.dyn_into::<HtmlElement>().ok())
        .collect()
}

pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

pub fn scroll_y() -> f64 {
    window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0)
}

pub fn viewport_height() -> f64 {
    window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0)
}

pub fn smooth_scroll_to(top: f64) {
    let Some(win) = window() else {
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    win.scroll_to_with_scroll_to_options(&options);
}

/// Smooth-scrolls to the element with `id`, leaving room for the fixed
/// header. Returns `false` when there is no such element.
pub fn scroll_to_anchor(id: &str) -> bool {
    let Some(target) = html_element_by_id(id) else {
        return false;
    };

    smooth_scroll_to(layout::anchor_scroll_top(f64::from(target.offset_top())));
    true
}

pub fn section_bounds() -> Vec<SectionBounds> {
    query_all_html("section[id]")
        .into_iter()
        .map(|section| SectionBounds {
            id: section.id(),
            top: f64::from(section.offset_top()),
            height: f64::from(section.offset_height()),
        })
        .collect()
}

pub fn read_site_config() -> SiteConfig {
    let Some(body) = document().and_then(|d| d.body()) else {
        return SiteConfig::default();
    };

    SiteConfig::from_lookup(|key| body.get_attribute(key))
}

pub fn page_url() -> Option<String> {
    window()?.location().href().ok()
}

pub fn inject_toast_keyframes() {
    let Some(document) = document() else {
        return;
    };
    let Some(head) = document.head() else {
        return;
    };
    let Ok(style) = document.create_element("style") else {
        return;
    };

    style.set_text_content(Some(TOAST_KEYFRAMES));
    let _ = head.append_child(&style);
}

/// A listener registered on `window`. Dropping it unregisters the callback.
pub struct WindowListener {
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    pub fn new(event: &'static str, handler: impl FnMut(Event) + 'static) -> Option<Self> {
        let win = window()?;
        let callback = Closure::<dyn FnMut(Event)>::new(handler);

        if win
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .is_err()
        {
            log_event(
                Level::Warn,
                "listener_register_failed",
                serde_json::json!({ "event": event }),
            );
            return None;
        }

        Some(Self { event, callback })
    }

    /// Keeps the listener for the rest of the page's life.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(win) = window() {
            let _ = win.remove_event_listener_with_callback(
                self.event,
                self.callback.as_ref().unchecked_ref(),
            );
        }
    }
}

pub fn listen(target: &Element, event: &str, handler: impl FnMut(Event) + 'static) {
    let callback = Closure::<dyn FnMut(Event)>::new(handler);

    if target
        .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        .is_ok()
    {
        callback.forget();
    }
}
