use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use std::sync::LazyLock;
use thiserror::Error;
use url::form_urlencoded;

pub const DEFAULT_CONTACT_ENDPOINT: &str = "send_email.php";
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
pub const SUCCESS_RESET_DELAY_MS: u32 = 5_000;
const REJECTED_FALLBACK_MESSAGE: &str = "Failed to send message.";

/// Browser whitespace: the `Zs` spaces plus tab, VT, FF, BOM and the four
/// line terminators. Unicode `\s` differs on U+0085 and U+FEFF.
const NOT_WHITESPACE_OR_AT: &str =
    r"[^\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}@]";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let part = NOT_WHITESPACE_OR_AT;
    Regex::new(&format!(r"^{part}+@{part}+\.{part}+$")).expect("email pattern is a valid regex")
});

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

fn is_browser_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

fn is_blank(value: &str) -> bool {
    value.trim_matches(is_browser_whitespace).is_empty()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your name")]
    MissingName,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter a subject")]
    MissingSubject,
    #[error("Please enter your message")]
    MissingMessage,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The endpoint answered but did not report success.
    #[error("{0}")]
    Rejected(String),
    #[error("Something went wrong. Please try again later.")]
    Transport,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

/// Edits to the form fields, applied in dispatch order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactAction {
    SetField(ContactField, String),
    Reset,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if is_blank(&self.name) {
            return Err(ValidationError::MissingName);
        }

        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }

        if is_blank(&self.subject) {
            return Err(ValidationError::MissingSubject);
        }

        if is_blank(&self.message) {
            return Err(ValidationError::MissingMessage);
        }

        Ok(())
    }

    /// Returns the state after `action`, built on top of `self`.
    pub fn apply(&self, action: ContactAction) -> Self {
        match action {
            ContactAction::SetField(field, value) => {
                let mut next = self.clone();
                next.set(field, value);
                next
            }
            ContactAction::Reset => Self::default(),
        }
    }

    /// Fields are sent exactly as typed.
    pub fn to_form_body(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("name", &self.name)
            .append_pair("email", &self.email)
            .append_pair("subject", &self.subject)
            .append_pair("message", &self.message)
            .finish()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactResponse {
    pub status: Option<String>,
    /// Already rendered as banner text; absent when the server sent a falsy value.
    pub message: Option<String>,
}

#[derive(Deserialize)]
struct ReplyFields {
    #[serde(default)]
    status: Value,
    #[serde(default)]
    message: Value,
}

impl ContactResponse {
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some("success")
    }
}

/// `null`, `false`, `0` and `""` carry no message.
fn truthy_text(value: Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text),
        Value::Number(number) if number.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}

/// `None` means the body could not be read as a reply at all: invalid JSON
/// or a bare `null`. Any other JSON value is a reply, and only an object can
/// carry `status` and `message`.
pub fn parse_response(raw: &str) -> Option<ContactResponse> {
    let value: Value = serde_json::from_str(raw).ok()?;
    if value.is_null() {
        return None;
    }
    if !value.is_object() {
        return Some(ContactResponse::default());
    }

    let fields: ReplyFields = serde_json::from_value(value).ok()?;
    Some(ContactResponse {
        status: fields.status.as_str().map(str::to_owned),
        message: truthy_text(fields.message),
    })
}

pub fn interpret_response(
    http_ok: bool,
    response: Option<ContactResponse>,
) -> Result<ContactResponse, SubmitError> {
    let Some(response) = response else {
        return Err(SubmitError::Transport);
    };

    if http_ok && response.is_success() {
        return Ok(response);
    }

    let message = response
        .message
        .unwrap_or_else(|| REJECTED_FALLBACK_MESSAGE.to_string());

    Err(SubmitError::Rejected(message))
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Editing,
    Sending,
    Sent,
}

impl SubmitPhase {
    pub fn accepts_submit(self) -> bool {
        matches!(self, Self::Editing)
    }

    pub fn button_busy(self) -> bool {
        matches!(self, Self::Sending)
    }

    pub fn form_visible(self) -> bool {
        !matches!(self, Self::Sent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactSubmission {
        ContactSubmission {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Nice site".to_string(),
        }
    }

    #[test]
    fn complete_submission_validates() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn first_failing_field_is_reported() {
        let empty = ContactSubmission::default();
        assert_eq!(empty.validate(), Err(ValidationError::MissingName));

        let mut submission = filled();
        submission.email = "not-an-email".to_string();
        submission.subject = String::new();
        assert_eq!(submission.validate(), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn whitespace_only_fields_count_as_empty() {
        let mut submission = filled();
        submission.subject = "   ".to_string();
        assert_eq!(submission.validate(), Err(ValidationError::MissingSubject));

        submission.subject = "Hi".to_string();
        submission.message = "\n\t".to_string();
        assert_eq!(submission.validate(), Err(ValidationError::MissingMessage));
    }

    #[test]
    fn validation_messages_are_user_facing() {
        assert_eq!(ValidationError::MissingName.to_string(), "Please enter your name");
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn email_pattern_requires_user_domain_and_dot() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email(" a@b.co"));
        assert!(!is_valid_email("a@@b.co"));
    }

    #[test]
    fn form_body_is_url_encoded_in_field_order() {
        let mut submission = filled();
        submission.message = "Hi & bye".to_string();

        assert_eq!(
            submission.to_form_body(),
            "name=Ada&email=ada%40example.com&subject=Hello&message=Hi+%26+bye"
        );
    }

    #[test]
    fn set_updates_only_the_named_field() {
        let mut submission = ContactSubmission::default();
        submission.set(ContactField::Subject, "Work".to_string());

        assert_eq!(submission.subject, "Work");
        assert!(submission.name.is_empty());
    }

    #[test]
    fn success_response_is_accepted() {
        let parsed = parse_response(r#"{"status":"success","message":"Sent"}"#);
        let result = interpret_response(true, parsed).expect("success response");

        assert_eq!(result.message.as_deref(), Some("Sent"));
    }

    #[test]
    fn error_status_surfaces_server_message() {
        let parsed = parse_response(r#"{"status":"error","message":"Mailer offline"}"#);

        assert_eq!(
            interpret_response(true, parsed),
            Err(SubmitError::Rejected("Mailer offline".to_string()))
        );
    }

    #[test]
    fn rejection_without_message_uses_fallback() {
        let parsed = parse_response(r#"{"status":"error","message":""}"#);
        assert_eq!(
            interpret_response(true, parsed),
            Err(SubmitError::Rejected("Failed to send message.".to_string()))
        );

        let missing_status = parse_response("{}");
        assert_eq!(
            interpret_response(true, missing_status),
            Err(SubmitError::Rejected("Failed to send message.".to_string()))
        );
    }

    #[test]
    fn http_failure_overrides_success_status() {
        let parsed = parse_response(r#"{"status":"success"}"#);

        assert!(matches!(
            interpret_response(false, parsed),
            Err(SubmitError::Rejected(_))
        ));
    }

    #[test]
    fn unparseable_body_is_a_transport_failure() {
        let parsed = parse_response("<html>502</html>");

        assert_eq!(parsed, None);
        assert_eq!(interpret_response(true, parsed), Err(SubmitError::Transport));
        assert_eq!(
            SubmitError::Transport.to_string(),
            "Something went wrong. Please try again later."
        );
    }

    #[test]
    fn array_body_is_rejected_not_accepted() {
        let parsed = parse_response(r#"["success"]"#);

        assert_eq!(parsed, Some(ContactResponse::default()));
        assert_eq!(
            interpret_response(true, parsed),
            Err(SubmitError::Rejected("Failed to send message.".to_string()))
        );
    }

    #[test]
    fn null_body_is_a_transport_failure() {
        let parsed = parse_response("null");

        assert_eq!(parsed, None);
        assert_eq!(interpret_response(true, parsed), Err(SubmitError::Transport));
    }

    #[test]
    fn non_string_message_is_shown_as_text() {
        let parsed = parse_response(r#"{"status":"error","message":42}"#);
        assert_eq!(
            interpret_response(true, parsed),
            Err(SubmitError::Rejected("42".to_string()))
        );

        let zero = parse_response(r#"{"status":"error","message":0}"#);
        assert_eq!(
            interpret_response(true, zero),
            Err(SubmitError::Rejected("Failed to send message.".to_string()))
        );
    }

    #[test]
    fn non_string_status_is_not_success() {
        let parsed = parse_response(r#"{"status":true,"message":"Queued"}"#);

        assert_eq!(
            interpret_response(true, parsed),
            Err(SubmitError::Rejected("Queued".to_string()))
        );
    }

    #[test]
    fn email_whitespace_follows_browser_rules() {
        assert!(is_valid_email("a\u{85}b@c.de"));
        assert!(!is_valid_email("\u{FEFF}a@b.co"));
        assert!(!is_valid_email("a\u{3000}b@c.de"));
        assert!(!is_valid_email("a@b.c\u{2028}o"));
    }

    #[test]
    fn byte_order_mark_alone_counts_as_empty() {
        let mut submission = filled();
        submission.name = "\u{FEFF}".to_string();
        assert_eq!(submission.validate(), Err(ValidationError::MissingName));

        submission.name = "Ada".to_string();
        submission.message = "\u{85}".to_string();
        assert_eq!(submission.validate(), Ok(()));
    }

    #[test]
    fn dispatched_field_edits_accumulate() {
        let start = ContactSubmission::default();
        let after_name = start.apply(ContactAction::SetField(ContactField::Name, "Ada".to_string()));
        let after_email = after_name.apply(ContactAction::SetField(
            ContactField::Email,
            "ada@example.com".to_string(),
        ));

        assert_eq!(after_email.name, "Ada");
        assert_eq!(after_email.email, "ada@example.com");
        assert_eq!(after_email.apply(ContactAction::Reset), ContactSubmission::default());
    }

    #[test]
    fn only_editing_phase_accepts_submit() {
        assert!(SubmitPhase::Editing.accepts_submit());
        assert!(!SubmitPhase::Sending.accepts_submit());
        assert!(!SubmitPhase::Sent.accepts_submit());
        assert!(SubmitPhase::Sending.button_busy());
        assert!(!SubmitPhase::Sent.form_visible());
    }
}
