use dioxus::prelude::*;
use tracing::debug;

use catalog::contact::{
    CONTACT_EMAIL, ContactMessage, PHONE_PATTERN, SubmitError, SubmitErrors, SubmitOutcome,
    WHATSAPP_URL, phone_acceptable, send_message,
};

// Submission lifecycle for the enquiry form.
//
// Failed retracts back to Idle as soon as the user edits a field, while
// Succeeded replaces the form with a confirmation and stays there until the
// explicit reset action.
#[derive(Clone, Debug, Default, PartialEq)]
enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(SubmitErrors),
}

impl SubmitState {
    // move to Submitting unless a send is already in flight or the
    // confirmation view is up
    fn begin(&mut self) -> bool {
        match self {
            SubmitState::Idle | SubmitState::Failed(_) => {
                *self = SubmitState::Submitting;
                true
            }
            SubmitState::Submitting | SubmitState::Succeeded => false,
        }
    }

    fn finish(&mut self, outcome: SubmitOutcome) {
        *self = match outcome {
            SubmitOutcome::Delivered => SubmitState::Succeeded,
            SubmitOutcome::Rejected(errors) => SubmitState::Failed(errors),
        };
    }

    // editing a field retracts a failure
    fn edited(&mut self) {
        if matches!(self, SubmitState::Failed(_)) {
            *self = SubmitState::Idle;
        }
    }

    fn reset(&mut self) {
        *self = SubmitState::Idle;
    }

    fn is_submitting(&self) -> bool {
        matches!(self, SubmitState::Submitting)
    }

    fn succeeded(&self) -> bool {
        matches!(self, SubmitState::Succeeded)
    }

    fn errors(&self) -> Option<&SubmitErrors> {
        match self {
            SubmitState::Failed(errors) => Some(errors),
            _ => None,
        }
    }
}

// admission for a single submit attempt
//
// the in-flight check runs first, so a stray submit event can never displace
// a send that is already out.  the phone is then re-checked locally, since a
// browser that skips constraint validation must not reach the network call
fn admit_submission(state: &mut SubmitState, phone: &str) -> bool {
    if !state.begin() {
        return false;
    }

    if !phone_acceptable(phone) {
        state.finish(SubmitOutcome::Rejected(SubmitErrors::new(vec![SubmitError {
            field: Some(String::from("phone")),
            code: None,
            message: String::from("Enter a 10-digit phone number or leave it blank."),
        }])));
        return false;
    }

    true
}

#[derive(Clone, PartialEq, Props)]
struct FieldErrorsProps {
    state: Signal<SubmitState>,
    // the wire name of the field, as the form service reports it
    field: &'static str,
}

#[component]
fn FieldErrors(props: FieldErrorsProps) -> Element {
    let state = props.state;
    let current = state.read();

    let Some(errors) = current.errors() else {
        return rsx! {};
    };

    rsx! {
        for (idx, error) in errors.for_field(props.field).enumerate() {
            div { class: "form-error", key: "{idx}", "{error.message}" }
        }
    }
}

#[component]
pub fn Contact() -> Element {
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut subject = use_signal(String::new);
    let mut message = use_signal(String::new);

    let mut state = use_signal(SubmitState::default);

    let handle_submit = move |_: FormEvent| async move {
        if !admit_submission(&mut state.write(), &phone()) {
            return;
        }

        let outgoing = ContactMessage {
            first_name: first_name(),
            last_name: last_name(),
            email: email(),
            phone: phone(),
            subject: subject(),
            message: message(),
        };

        debug!("sending contact message");

        match send_message(&outgoing).await {
            Ok(outcome) => {
                if matches!(outcome, SubmitOutcome::Delivered) {
                    first_name.set(String::new());
                    last_name.set(String::new());
                    email.set(String::new());
                    phone.set(String::new());
                    subject.set(String::new());
                    message.set(String::new());
                }

                state.write().finish(outcome);
            }
            Err(err) => {
                debug!("contact message failed to send: {err}");
                state.write().finish(SubmitOutcome::Rejected(SubmitErrors::from_message(
                    format!("Could not reach the form service: {err}"),
                )));
            }
        }
    };

    let (submitting, succeeded, general_errors) = {
        let current = state.read();
        let general: Vec<String> = current
            .errors()
            .map(|errors| errors.general().map(|error| error.message.clone()).collect())
            .unwrap_or_default();

        (current.is_submitting(), current.succeeded(), general)
    };

    rsx! {
        div { class: "contact-page",
            div { class: "container",
                div { class: "contact-header",
                    h1 { "Get In Touch" }
                    p { "Have a question or want to discuss a project? We'd love to hear from you." }
                }

                div { class: "contact-layout",
                    div { class: "contact-channels",
                        a { class: "channel-card", href: "mailto:{CONTACT_EMAIL}",
                            div { class: "channel-icon",
                                svg {
                                    width: "22",
                                    height: "22",
                                    view_box: "0 0 24 24",
                                    fill: "none",
                                    stroke: "currentColor",
                                    stroke_width: "2",
                                    stroke_linecap: "round",
                                    stroke_linejoin: "round",
                                    path { d: "M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z" }
                                    polyline { points: "22,6 12,13 2,6" }
                                }
                            }
                            div {
                                h3 { "Email Us" }
                                p { "{CONTACT_EMAIL}" }
                            }
                        }
                        a {
                            class: "channel-card",
                            href: WHATSAPP_URL,
                            target: "_blank",
                            rel: "noopener",
                            div { class: "channel-icon",
                                svg {
                                    width: "22",
                                    height: "22",
                                    view_box: "0 0 24 24",
                                    fill: "none",
                                    stroke: "currentColor",
                                    stroke_width: "2",
                                    stroke_linecap: "round",
                                    stroke_linejoin: "round",
                                    path { d: "M21 11.5a8.38 8.38 0 0 1-.9 3.8 8.5 8.5 0 0 1-7.6 4.7 8.38 8.38 0 0 1-3.8-.9L3 21l1.9-5.7a8.38 8.38 0 0 1-.9-3.8 8.5 8.5 0 0 1 4.7-7.6 8.38 8.38 0 0 1 3.8-.9h.5a8.48 8.48 0 0 1 8 8v.5z" }
                                }
                            }
                            div {
                                h3 { "WhatsApp" }
                                p { "Chat with us directly" }
                            }
                        }
                    }

                    div { class: "contact-form-panel",
                        if succeeded {
                            SentConfirmation { state }
                        } else {
                            h2 { class: "form-panel-title", "Send Message" }
                            p { class: "form-panel-blurb",
                                "Fill out the form below and we'll get back to you as soon as possible."
                            }
                            form { onsubmit: handle_submit,
                                if !general_errors.is_empty() {
                                    div { class: "form-banner",
                                        for (idx, text) in general_errors.iter().enumerate() {
                                            p { key: "{idx}", "{text}" }
                                        }
                                    }
                                }

                                div { class: "form-row",
                                    div { class: "form-group",
                                        label { class: "form-label", r#for: "contact-first-name", "First Name *" }
                                        input {
                                            id: "contact-first-name",
                                            class: "form-input",
                                            r#type: "text",
                                            placeholder: "John",
                                            required: true,
                                            value: "{first_name}",
                                            oninput: move |evt| {
                                                first_name.set(evt.value());
                                                state.write().edited();
                                            },
                                        }
                                        FieldErrors { state, field: "firstName" }
                                    }
                                    div { class: "form-group",
                                        label { class: "form-label", r#for: "contact-last-name", "Last Name *" }
                                        input {
                                            id: "contact-last-name",
                                            class: "form-input",
                                            r#type: "text",
                                            placeholder: "Doe",
                                            required: true,
                                            value: "{last_name}",
                                            oninput: move |evt| {
                                                last_name.set(evt.value());
                                                state.write().edited();
                                            },
                                        }
                                        FieldErrors { state, field: "lastName" }
                                    }
                                }

                                div { class: "form-group",
                                    label { class: "form-label", r#for: "contact-email", "Email *" }
                                    input {
                                        id: "contact-email",
                                        class: "form-input",
                                        r#type: "email",
                                        placeholder: "john@example.com",
                                        required: true,
                                        value: "{email}",
                                        oninput: move |evt| {
                                            email.set(evt.value());
                                            state.write().edited();
                                        },
                                    }
                                    FieldErrors { state, field: "email" }
                                }

                                div { class: "form-group",
                                    label { class: "form-label", r#for: "contact-phone", "Phone" }
                                    input {
                                        id: "contact-phone",
                                        class: "form-input",
                                        r#type: "tel",
                                        placeholder: "9876543210",
                                        pattern: PHONE_PATTERN,
                                        title: "Please enter a valid 10-digit phone number",
                                        value: "{phone}",
                                        oninput: move |evt| {
                                            phone.set(evt.value());
                                            state.write().edited();
                                        },
                                    }
                                    FieldErrors { state, field: "phone" }
                                }

                                div { class: "form-group",
                                    label { class: "form-label", r#for: "contact-subject", "Subject" }
                                    input {
                                        id: "contact-subject",
                                        class: "form-input",
                                        r#type: "text",
                                        placeholder: "Inquiry about...",
                                        value: "{subject}",
                                        oninput: move |evt| {
                                            subject.set(evt.value());
                                            state.write().edited();
                                        },
                                    }
                                    FieldErrors { state, field: "subject" }
                                }

                                div { class: "form-group",
                                    label { class: "form-label", r#for: "contact-message", "Message *" }
                                    textarea {
                                        id: "contact-message",
                                        class: "form-textarea",
                                        placeholder: "Your message...",
                                        required: true,
                                        value: "{message}",
                                        oninput: move |evt| {
                                            message.set(evt.value());
                                            state.write().edited();
                                        },
                                    }
                                    FieldErrors { state, field: "message" }
                                }

                                button {
                                    class: "btn btn-primary btn-submit",
                                    r#type: "submit",
                                    disabled: submitting,
                                    if submitting { "Sending..." } else { "Send Message" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct SentConfirmationProps {
    state: Signal<SubmitState>,
}

#[component]
fn SentConfirmation(props: SentConfirmationProps) -> Element {
    let mut state = props.state;

    rsx! {
        div { class: "sent-confirmation",
            div { class: "sent-icon",
                svg {
                    width: "32",
                    height: "32",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "2",
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    path { d: "M22 11.08V12a10 10 0 1 1-5.93-9.14" }
                    polyline { points: "22 4 12 14.01 9 11.27" }
                }
            }
            h2 { "Message Sent!" }
            p { "Thank you for reaching out. We have received your message and will get back to you soon." }
            button {
                class: "btn btn-secondary",
                onclick: move |_| state.write().reset(),
                "Send Another Message"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_fresh_form_is_ready_to_submit() {
        let mut state = SubmitState::default();

        assert!(!state.is_submitting());
        assert!(state.begin());
        assert!(state.is_submitting());
    }

    #[test]
    fn a_send_in_flight_blocks_further_submits() {
        let mut state = SubmitState::default();

        assert!(state.begin());
        assert!(!state.begin());

        // editing while a send is pending does not derail it either
        state.edited();
        assert!(state.is_submitting());
    }

    #[test]
    fn an_invalid_resubmit_cannot_displace_a_send_in_flight() {
        let mut state = SubmitState::default();

        assert!(admit_submission(&mut state, "9447360345"));
        assert!(state.is_submitting());

        // a second submit event while the send is out must not push the
        // form into Failed, not even by failing validation
        assert!(!admit_submission(&mut state, "94473"));
        assert!(state.is_submitting());
        assert!(state.errors().is_none());
    }

    #[test]
    fn a_bad_phone_is_rejected_before_anything_is_sent() {
        let mut state = SubmitState::default();

        assert!(!admit_submission(&mut state, "94473"));

        let errors = state.errors().expect("rejection should carry errors");
        assert_eq!(errors.for_field("phone").count(), 1);

        // a corrected number goes straight through
        assert!(admit_submission(&mut state, "9447360345"));
        assert!(state.is_submitting());
    }

    #[test]
    fn success_is_terminal_until_the_manual_reset() {
        let mut state = SubmitState::default();

        let _ = state.begin();
        state.finish(SubmitOutcome::Delivered);
        assert!(state.succeeded());

        state.edited();
        assert!(state.succeeded());
        assert!(!state.begin());

        state.reset();
        assert!(!state.succeeded());
        assert!(state.begin());
    }

    #[test]
    fn failure_surfaces_errors_and_allows_a_resubmit() {
        let mut state = SubmitState::default();

        let _ = state.begin();
        state.finish(SubmitOutcome::Rejected(SubmitErrors::from_message(
            "form is disabled",
        )));

        let errors = state.errors().expect("failure should carry errors");
        assert_eq!(errors.general().count(), 1);

        assert!(state.begin());
    }

    #[test]
    fn editing_a_field_retracts_a_failure() {
        let mut state = SubmitState::default();

        let _ = state.begin();
        state.finish(SubmitOutcome::Rejected(SubmitErrors::from_message(
            "form is disabled",
        )));

        state.edited();
        assert_eq!(state, SubmitState::Idle);
        assert!(state.errors().is_none());
    }
}
