use super::toasts::use_toasts;
use crate::contact::{
    self, ContactAction, ContactField, ContactResponse, ContactSubmission, SubmitError,
    SubmitPhase, FORM_CONTENT_TYPE, SUCCESS_RESET_DELAY_MS,
};
use crate::telemetry::log_event;
use crate::toast::ToastKind;
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use log::Level;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement, InputEvent, SubmitEvent};
use yew::prelude::*;

async fn send_submission(
    endpoint: &str,
    submission: &ContactSubmission,
) -> Result<ContactResponse, SubmitError> {
    let request = Request::post(endpoint)
        .header("Content-Type", FORM_CONTENT_TYPE)
        .body(submission.to_form_body())
        .map_err(|_| SubmitError::Transport)?;

    let response = request.send().await.map_err(|error| {
        log_event(
            Level::Error,
            "contact_request_failed",
            serde_json::json!({ "message": error.to_string() }),
        );
        SubmitError::Transport
    })?;

    let http_ok = response.ok();
    let status = response.status();
    let raw = response.text().await.map_err(|_| SubmitError::Transport)?;
    let parsed = contact::parse_response(&raw);

    log_event(
        Level::Info,
        "contact_server_response",
        serde_json::json!({
            "status": status,
            "parsed": parsed.is_some(),
            "result": parsed.as_ref().and_then(|body| body.status.clone()),
        }),
    );

    contact::interpret_response(http_ok, parsed)
}

impl Reducible for ContactSubmission {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

fn field_input(
    fields: &UseReducerHandle<ContactSubmission>,
    field: ContactField,
) -> Callback<InputEvent> {
    let fields = fields.clone();
    Callback::from(move |event: InputEvent| {
        let value = event
            .target_dyn_into::<HtmlInputElement>()
            .map(|input| input.value())
            .or_else(|| {
                event
                    .target_dyn_into::<HtmlTextAreaElement>()
                    .map(|area| area.value())
            })
            .unwrap_or_default();

        fields.dispatch(ContactAction::SetField(field, value));
    })
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub endpoint: AttrValue,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let fields = use_reducer(ContactSubmission::default);
    let phase = use_state_eq(SubmitPhase::default);
    let toasts = use_toasts();

    let onsubmit = {
        let fields = fields.clone();
        let phase = phase.clone();
        let toasts = toasts.clone();
        let endpoint = props.endpoint.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            if !(*phase).accepts_submit() {
                return;
            }

            let submission = (*fields).clone();
            if let Err(error) = submission.validate() {
                toasts.show(ToastKind::Error, error.to_string());
                return;
            }

            phase.set(SubmitPhase::Sending);
            log_event(
                Level::Info,
                "contact_submit_start",
                serde_json::json!({ "endpoint": endpoint.as_str() }),
            );

            let fields = fields.clone();
            let phase = phase.clone();
            let toasts = toasts.clone();
            let endpoint = endpoint.clone();
            spawn_local(async move {
                match send_submission(endpoint.as_str(), &submission).await {
                    Ok(_) => {
                        log_event(Level::Info, "contact_submit_complete", serde_json::json!({}));
                        phase.set(SubmitPhase::Sent);
                        Timeout::new(SUCCESS_RESET_DELAY_MS, move || {
                            fields.dispatch(ContactAction::Reset);
                            phase.set(SubmitPhase::Editing);
                        })
                        .forget();
                    }
                    Err(error) => {
                        log_event(
                            Level::Warn,
                            "contact_submit_failed",
                            serde_json::json!({
                                "error_class": match error {
                                    SubmitError::Rejected(_) => "rejected",
                                    SubmitError::Transport => "transport",
                                },
                            }),
                        );
                        toasts.show(ToastKind::Error, error.to_string());
                        phase.set(SubmitPhase::Editing);
                    }
                }
            });
        })
    };

    let busy = (*phase).button_busy();
    let sent = !(*phase).form_visible();

    html! {
        <>
            <form
                id="contactForm"
                class="contact-form"
                style={sent.then_some("display: none;")}
                onsubmit={onsubmit}
            >
                <div class="form-group">
                    <input
                        type="text"
                        id="name"
                        name="name"
                        placeholder="Your Name"
                        value={fields.name.clone()}
                        oninput={field_input(&fields, ContactField::Name)}
                    />
                </div>
                <div class="form-group">
                    <input
                        type="email"
                        id="email"
                        name="email"
                        placeholder="Your Email"
                        value={fields.email.clone()}
                        oninput={field_input(&fields, ContactField::Email)}
                    />
                </div>
                <div class="form-group">
                    <input
                        type="text"
                        id="subject"
                        name="subject"
                        placeholder="Subject"
                        value={fields.subject.clone()}
                        oninput={field_input(&fields, ContactField::Subject)}
                    />
                </div>
                <div class="form-group">
                    <textarea
                        id="message"
                        name="message"
                        rows="5"
                        placeholder="Your Message"
                        value={fields.message.clone()}
                        oninput={field_input(&fields, ContactField::Message)}
                    />
                </div>
                <button type="submit" class="btn btn-primary" disabled={busy}>
                    if busy {
                        <i class="fas fa-spinner fa-spin" aria-hidden="true"></i>
                        {" Sending..."}
                    } else {
                        <i class="fas fa-paper-plane" aria-hidden="true"></i>
                        {" Send Message"}
                    }
                </button>
            </form>
            <div
                id="formSuccess"
                class={classes!("form-success", sent.then_some("show"))}
                style={if sent { "display: block;" } else { "display: none;" }}
                role="status"
            >
                <i class="fas fa-check-circle" aria-hidden="true"></i>
                <h3>{"Message Sent!"}</h3>
                <p>{"Thank you for reaching out. I'll get back to you soon."}</p>
            </div>
            { toasts.view() }
        </>
    }
}
