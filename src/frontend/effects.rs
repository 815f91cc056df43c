use super::dom::{self, WindowListener};
use crate::layout;
use crate::telemetry::log_event;
use gloo_timers::callback::Timeout;
use js_sys::Array;
use log::Level;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Element, Event, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

const REVEAL_SELECTOR: &str = ".fade-in, .fade-in-up, .fade-in-left, .fade-in-right";
const REVEAL_THRESHOLD: f64 = 0.1;
const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
const SKILLS_SECTION_ID: &str = "skills";
const SKILL_BAR_SELECTOR: &str = ".skill-progress";
const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";
const PARALLAX_SELECTOR: &str = ".shape";
const IN_PAGE_ANCHOR_SELECTOR: &str = "a[href^=\"#\"]:not(.nav-link):not(.nav-logo)";

type IntersectionCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Builds an observer that calls `on_visible` once per element and then stops
/// watching it.
fn one_shot_observer(
    options: Option<&IntersectionObserverInit>,
    on_visible: impl Fn(&Element) + 'static,
) -> Option<IntersectionObserver> {
    let callback: IntersectionCallback =
        Closure::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }

                let target = entry.target();
                on_visible(&target);
                observer.unobserve(&target);
            }
        });

    let observer = match options {
        Some(options) => {
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), options)
        }
        None => IntersectionObserver::new(callback.as_ref().unchecked_ref()),
    }
    .ok()?;

    callback.forget();
    Some(observer)
}

fn set_animation_state(element: &Element, state: &str) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let _ = element.style().set_property("animation-play-state", state);
    }
}

pub fn attach_scroll_reveal() {
    let elements = dom::query_all(REVEAL_SELECTOR);
    if elements.is_empty() {
        return;
    }

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);

    let Some(observer) = one_shot_observer(Some(&options), |target| {
        set_animation_state(target, "running");
    }) else {
        // Nothing was paused yet, so the CSS animations simply play.
        log_event(
            Level::Warn,
            "observer_unavailable",
            serde_json::json!({ "component": "scroll_reveal", "elements": elements.len() }),
        );
        return;
    };

    for element in &elements {
        set_animation_state(element, "paused");
        observer.observe(element);
    }
}

fn load_lazy_image(image: &Element) {
    if let Some(source) = image.get_attribute("data-src") {
        let _ = image.set_attribute("src", &source);
        let _ = image.remove_attribute("data-src");
    }
}

pub fn attach_lazy_images() {
    let images = dom::query_all(LAZY_IMAGE_SELECTOR);
    if images.is_empty() {
        return;
    }

    let Some(observer) = one_shot_observer(None, load_lazy_image) else {
        images.iter().for_each(load_lazy_image);
        return;
    };

    for image in &images {
        observer.observe(image);
    }
}

fn animate_skill_bars(bars: &[HtmlElement]) {
    for (index, bar) in bars.iter().enumerate() {
        let bar = bar.clone();
        Timeout::new(layout::skill_bar_delay_ms(index), move || {
            let style = bar.style();
            if let Ok(progress) = style.get_property_value("--progress") {
                let progress = progress.trim();
                if !progress.is_empty() {
                    let _ = style.set_property("width", progress);
                }
            }
        })
        .forget();
    }
}

pub fn attach_skill_bars() {
    let Some(section) = dom::html_element_by_id(SKILLS_SECTION_ID) else {
        return;
    };
    let bars = dom::query_all_html(SKILL_BAR_SELECTOR);
    let animated = Rc::new(Cell::new(false));

    let check = Rc::new(move || {
        if animated.get() {
            return;
        }

        let reached = layout::skills_reveal_reached(
            dom::scroll_y(),
            dom::viewport_height(),
            f64::from(section.offset_top()),
            f64::from(section.offset_height()),
        );
        if !reached {
            return;
        }

        animated.set(true);
        animate_skill_bars(&bars);
        log_event(
            Level::Debug,
            "skills_animated",
            serde_json::json!({ "bars": bars.len() }),
        );
    });

    check();

    let on_scroll = Rc::clone(&check);
    if let Some(listener) = WindowListener::new("scroll", move |_: Event| on_scroll()) {
        listener.forget();
    }
}

pub fn attach_parallax() {
    let shapes = dom::query_all_html(PARALLAX_SELECTOR);
    if shapes.is_empty() {
        return;
    }

    let listener = WindowListener::new("scroll", move |_: Event| {
        let scrolled = dom::scroll_y();
        for (index, shape) in shapes.iter().enumerate() {
            let offset = layout::parallax_offset(index, scrolled);
            let _ = shape
                .style()
                .set_property("transform", &format!("translateY({offset}px)"));
        }
    });

    if let Some(listener) = listener {
        listener.forget();
    }
}

/// In-page anchors outside the navbar, e.g. hero call-to-action buttons.
pub fn attach_smooth_anchors() {
    for anchor in dom::query_all(IN_PAGE_ANCHOR_SELECTOR) {
        let target = anchor.clone();
        dom::listen(&anchor, "click", move |event: Event| {
            let Some(href) = target.get_attribute("href") else {
                return;
            };
            if let Some(id) = layout::link_target_id(&href) {
                if dom::scroll_to_anchor(id) {
                    event.prevent_default();
                }
            }
        });
    }
}
