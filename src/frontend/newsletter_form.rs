use super::toasts::use_toasts;
use crate::newsletter::{Subscription, SUBSCRIBED_MESSAGE};
use crate::telemetry::log_event;
use crate::toast::ToastKind;
use log::Level;
use web_sys::{HtmlInputElement, InputEvent, SubmitEvent};
use yew::prelude::*;

#[function_component(NewsletterForm)]
pub fn newsletter_form() -> Html {
    let email = use_state(String::new);
    let toasts = use_toasts();

    let oninput = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            email.set(input.value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let toasts = toasts.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            match Subscription::new(&email) {
                Ok(subscription) => {
                    log_event(
                        Level::Info,
                        "newsletter_subscribed",
                        serde_json::json!({ "email": subscription.email() }),
                    );
                    toasts.show(ToastKind::Success, SUBSCRIBED_MESSAGE);
                    email.set(String::new());
                }
                Err(error) => toasts.show(ToastKind::Error, error.to_string()),
            }
        })
    };

    html! {
        <>
            <form id="newsletterForm" class="newsletter-form" onsubmit={onsubmit}>
                <input
                    type="email"
                    name="newsletter-email"
                    placeholder="Your email address"
                    aria-label="Email address"
                    value={(*email).clone()}
                    oninput={oninput}
                />
                <button type="submit" class="btn btn-primary">{"Subscribe"}</button>
            </form>
            { toasts.view() }
        </>
    }
}
