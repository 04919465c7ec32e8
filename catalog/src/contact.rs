use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

// the site has no backend of its own, so enquiries go to a hosted form inbox
pub const FORM_ENDPOINT: &str = "https://formspree.io/f/xrbygvqk";

pub const CONTACT_EMAIL: &str = "akhilbarackal@botsoverkill.com";
pub const CONTACT_PHONE: &str = "+91 94473 60345";
pub const WHATSAPP_URL: &str = "https://wa.me/919447360345";
pub const HEADQUARTERS: &str = "Bhopal, India";

// shared between the html pattern attribute and the pre-send check
pub const PHONE_PATTERN: &str = "[0-9]{10}";

static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();

// the phone field is optional, but anything entered must be ten digits
pub fn phone_acceptable(phone: &str) -> bool {
    if phone.is_empty() {
        return true;
    }

    PHONE_REGEX
        .get_or_init(|| {
            Regex::new(&format!("^{PHONE_PATTERN}$")).expect("phone pattern failed to compile")
        })
        .is_match(phone)
}

// structs and types

// field names follow the inbox convention so replies quote them nicely
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

// a single problem reported by the form service, either tied to one field
// or general to the whole submission
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct SubmitError {
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SubmitErrors(Vec<SubmitError>);

impl SubmitErrors {
    pub fn new(errors: Vec<SubmitError>) -> Self {
        SubmitErrors(errors)
    }

    // wrap a one-off problem, such as a transport failure, so that the ui
    // only ever deals with one error shape
    pub fn from_message(message: impl Into<String>) -> Self {
        SubmitErrors(vec![SubmitError {
            field: None,
            code: None,
            message: message.into(),
        }])
    }

    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a SubmitError> {
        self.0
            .iter()
            .filter(move |error| error.field.as_deref() == Some(field))
    }

    pub fn general(&self) -> impl Iterator<Item = &SubmitError> {
        self.0.iter().filter(|error| error.field.is_none())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    Delivered,
    Rejected(SubmitErrors),
}

#[derive(Clone, Debug, Default, Deserialize)]
struct RejectionBody {
    #[serde(default)]
    errors: Vec<SubmitError>,
}

// post an enquiry to the form inbox
//
// a clean send resolves to Delivered, a send the service refused resolves to
// Rejected with its error list, and only transport problems surface as Err
pub async fn send_message(message: &ContactMessage) -> anyhow::Result<SubmitOutcome> {
    let resp = gloo_net::http::Request::post(FORM_ENDPOINT)
        .header("Accept", "application/json")
        .json(message)?
        .send()
        .await?;

    if resp.ok() {
        return Ok(SubmitOutcome::Delivered);
    }

    let errors = match resp.json::<RejectionBody>().await {
        Ok(body) if !body.errors.is_empty() => SubmitErrors::new(body.errors),
        _ => SubmitErrors::from_message(format!(
            "The form service answered with status {}",
            resp.status()
        )),
    };

    Ok(SubmitOutcome::Rejected(errors))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_serializes_with_inbox_field_names() {
        let message = ContactMessage {
            first_name: String::from("Asha"),
            last_name: String::from("Nair"),
            email: String::from("asha@example.com"),
            phone: String::from("9447360345"),
            subject: String::from("ROV pricing"),
            message: String::from("Looking for a quote on two units."),
        };

        let value = serde_json::to_value(&message).unwrap();

        assert_eq!(value["firstName"], "Asha");
        assert_eq!(value["lastName"], "Nair");
        assert_eq!(value["email"], "asha@example.com");
        assert_eq!(value["phone"], "9447360345");
        assert_eq!(value["subject"], "ROV pricing");
        assert_eq!(value["message"], "Looking for a quote on two units.");
    }

    #[test]
    fn rejection_body_parses_the_service_error_list() {
        let raw = r#"{"errors":[
            {"field":"email","code":"TYPE_EMAIL","message":"should be an email"},
            {"message":"form is disabled"}
        ]}"#;

        let body: RejectionBody = serde_json::from_str(raw).unwrap();
        let errors = SubmitErrors::new(body.errors);

        let email: Vec<_> = errors.for_field("email").collect();
        assert_eq!(email.len(), 1);
        assert_eq!(email[0].message, "should be an email");
        assert_eq!(email[0].code.as_deref(), Some("TYPE_EMAIL"));

        let general: Vec<_> = errors.general().collect();
        assert_eq!(general.len(), 1);
        assert_eq!(general[0].message, "form is disabled");

        assert_eq!(errors.for_field("phone").count(), 0);
    }

    #[test]
    fn rejection_body_tolerates_unknown_shapes() {
        let body: RejectionBody = serde_json::from_str(r#"{"errors":[]}"#).unwrap();
        assert!(body.errors.is_empty());

        // some refusals carry no error list at all
        let body: RejectionBody = serde_json::from_str("{}").unwrap();
        assert!(body.errors.is_empty());
    }

    #[test]
    fn transport_problems_become_a_single_general_error() {
        let errors = SubmitErrors::from_message("connection refused");

        assert!(!errors.is_empty());
        assert_eq!(errors.general().count(), 1);
        assert_eq!(errors.for_field("email").count(), 0);
    }

    #[test]
    fn empty_phone_is_acceptable() {
        assert!(phone_acceptable(""));
    }

    #[test]
    fn ten_digits_are_acceptable() {
        assert!(phone_acceptable("9447360345"));
        assert!(phone_acceptable("0000000000"));
    }

    #[test]
    fn partial_or_decorated_numbers_are_not() {
        assert!(!phone_acceptable("94473"));
        assert!(!phone_acceptable("94473603456"));
        assert!(!phone_acceptable("94473 6034"));
        assert!(!phone_acceptable("+919447360345"));
        assert!(!phone_acceptable("94473-6034"));
    }
}
