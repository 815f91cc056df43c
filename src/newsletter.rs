use crate::contact::{is_valid_email, ValidationError};

pub const SUBSCRIBED_MESSAGE: &str = "Thank you for subscribing!";

/// A newsletter sign-up. There is no endpoint behind it; accepting one only
/// logs the address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Subscription {
    email: String,
}

impl Subscription {
    pub fn new(email: &str) -> Result<Self, ValidationError> {
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }

        Ok(Self {
            email: email.to_string(),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_address_is_accepted() {
        let subscription = Subscription::new("reader@example.org").expect("valid address");
        assert_eq!(subscription.email(), "reader@example.org");
    }

    #[test]
    fn invalid_address_reports_contact_form_message() {
        let error = Subscription::new("reader@example").expect_err("missing tld");
        assert_eq!(error.to_string(), "Please enter a valid email address");
        assert!(Subscription::new("").is_err());
    }
}
