use super::dom::{document, local_storage};
use crate::telemetry::log_event;
use crate::theme::{Theme, BODY_TRANSITION, THEME_ATTRIBUTE, THEME_KEY};
use js_sys::{Function, Reflect};
use log::Level;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, MouseEvent};
use yew::prelude::*;

fn read_stored_theme() -> Theme {
    let stored = local_storage().and_then(|storage| storage.get_item(THEME_KEY).ok().flatten());
    Theme::resolve(stored.as_deref())
}

fn apply_theme(theme: Theme) {
    if let Some(root) = document().and_then(|d| d.document_element()) {
        let _ = root.set_attribute(THEME_ATTRIBUTE, theme.as_str());
    }
}

/// Applies the saved theme even when no toggle is mounted.
pub fn apply_stored_theme() {
    apply_theme(read_stored_theme());
}

fn persist_theme(theme: Theme) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(THEME_KEY, theme.as_str());
    }
}

fn enable_body_transition() {
    if let Some(body) = document().and_then(|d| d.body()) {
        let _ = body.style().set_property("transition", BODY_TRANSITION);
    }
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn apply_theme_with_transition(theme: Theme) {
    if prefers_reduced_motion() {
        apply_theme(theme);
        return;
    }

    let Some(document) = document() else {
        apply_theme(theme);
        return;
    };

    let document_js: JsValue = document.into();
    let Ok(start_view_transition) =
        Reflect::get(&document_js, &JsValue::from_str("startViewTransition"))
    else {
        apply_theme(theme);
        return;
    };

    let Some(start_view_transition) = start_view_transition.dyn_ref::<Function>() else {
        apply_theme(theme);
        return;
    };

    let callback = Closure::once_into_js(move || apply_theme(theme));

    if start_view_transition.call1(&document_js, &callback).is_err() {
        apply_theme(theme);
    }
}

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme = use_state(read_stored_theme);

    {
        let current = *theme;
        use_effect_with((), move |_| {
            apply_theme(current);
            || ()
        });
    }

    let onclick = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            let next = (*theme).toggled();
            persist_theme(next);
            enable_body_transition();
            apply_theme_with_transition(next);
            theme.set(next);
            log_event(
                Level::Debug,
                "theme_toggled",
                serde_json::json!({ "theme": next.as_str() }),
            );
        })
    };

    html! {
        <button
            id="themeToggle"
            class="theme-toggle"
            type="button"
            aria-label={(*theme).toggle_label()}
            aria-pressed={(*theme).pressed().to_string()}
            onclick={onclick}
        >
            <i class={(*theme).icon_class()} aria-hidden="true"></i>
        </button>
    }
}
