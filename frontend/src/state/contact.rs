use std::rc::Rc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use yew::functional::Reducible;

use crate::error::FetchError;

pub const CONTACT_PATH: &str = "/contact";
pub const FILL_ALL_FIELDS: &str = "Please fill in all fields";
pub const SEND_FAILED: &str = "Failed to send message. Please try again.";

/// Posts a contact form to the API.
#[async_trait(?Send)]
pub trait ContactTransport {
    async fn send_contact(&self, form: &ContactForm) -> Result<ContactReply, FetchError>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    /// Whitespace counts as content.
    pub fn has_empty_field(&self) -> bool {
        self.name.is_empty()
            || self.email.is_empty()
            || self.subject.is_empty()
            || self.message.is_empty()
    }
}

/// What `POST /contact` answers. A reply without `success` counts as a failure.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ContactReply {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum SubmissionStatus {
    #[default]
    None,
    Success(String),
    Error(String),
}

impl SubmissionStatus {
    pub fn message(&self) -> Option<&str> {
        match self {
            SubmissionStatus::None => None,
            SubmissionStatus::Success(msg) | SubmissionStatus::Error(msg) => Some(msg),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionStatus::Success(_))
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactFormState {
    pub form: ContactForm,
    pub status: SubmissionStatus,
    pub submitting: bool,
}

impl ContactFormState {
    /// Field edits leave the current status message alone.
    pub fn edit(&mut self, field: Field, value: String) {
        self.form.set(field, value);
    }

    /// Validates the form and enters the in-flight phase. Returns the payload
    /// to send, or `None` when nothing should go over the wire.
    pub fn begin_submit(&mut self) -> Option<ContactForm> {
        if self.submitting {
            return None;
        }
        if self.form.has_empty_field() {
            self.status = SubmissionStatus::Error(FILL_ALL_FIELDS.to_string());
            return None;
        }
        self.status = SubmissionStatus::None;
        self.submitting = true;
        Some(self.form.clone())
    }

    pub fn finish_submit(&mut self, outcome: Result<ContactReply, FetchError>) {
        self.submitting = false;
        match outcome {
            Ok(reply) if reply.success => {
                self.status = SubmissionStatus::Success(reply.message);
                self.form = ContactForm::default();
            }
            Ok(reply) => {
                log::warn!("Contact form rejected by server: {}", reply.message);
                self.status = SubmissionStatus::Error(SEND_FAILED.to_string());
            }
            Err(e) => {
                log::warn!("Contact form submission failed: {}", e);
                self.status = SubmissionStatus::Error(SEND_FAILED.to_string());
            }
        }
    }
}

/// Runs one full submission against `transport`.
pub async fn submit<T>(state: &mut ContactFormState, transport: &T)
where
    T: ContactTransport + ?Sized,
{
    if let Some(payload) = state.begin_submit() {
        let outcome = transport.send_contact(&payload).await;
        state.finish_submit(outcome);
    }
}

pub enum ContactAction {
    Edit(Field, String),
    BeginSubmit,
    FinishSubmit(Result<ContactReply, FetchError>),
}

impl Reducible for ContactFormState {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ContactAction::Edit(field, value) => next.edit(field, value),
            ContactAction::BeginSubmit => {
                next.begin_submit();
            }
            ContactAction::FinishSubmit(outcome) => next.finish_submit(outcome),
        }
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    struct RecordingTransport {
        reply: Result<ContactReply, FetchError>,
        sent: RefCell<Vec<ContactForm>>,
    }

    impl RecordingTransport {
        fn replying(reply: Result<ContactReply, FetchError>) -> Self {
            Self {
                reply,
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl ContactTransport for RecordingTransport {
        async fn send_contact(&self, form: &ContactForm) -> Result<ContactReply, FetchError> {
            self.sent.borrow_mut().push(form.clone());
            self.reply.clone()
        }
    }

    fn filled_state() -> ContactFormState {
        let mut state = ContactFormState::default();
        state.edit(Field::Name, "John Doe".to_string());
        state.edit(Field::Email, "john@example.com".to_string());
        state.edit(Field::Subject, "Product Inquiry".to_string());
        state.edit(Field::Message, "Is there a travel case?".to_string());
        state
    }

    fn ok_reply(message: &str) -> Result<ContactReply, FetchError> {
        Ok(ContactReply {
            success: true,
            message: message.to_string(),
        })
    }

    #[test]
    fn any_empty_field_blocks_the_request() {
        for field in [Field::Name, Field::Email, Field::Subject, Field::Message] {
            let mut state = filled_state();
            state.edit(field, String::new());
            let transport = RecordingTransport::replying(ok_reply("sent"));

            block_on(submit(&mut state, &transport));

            assert_eq!(state.status, SubmissionStatus::Error(FILL_ALL_FIELDS.to_string()));
            assert!(transport.sent.borrow().is_empty());
            assert!(!state.submitting);
        }
    }

    #[test]
    fn whitespace_is_not_trimmed() {
        let mut state = filled_state();
        state.edit(Field::Subject, "   ".to_string());
        assert!(state.begin_submit().is_some());
    }

    #[test]
    fn success_clears_fields_and_shows_server_message() {
        let mut state = filled_state();
        let transport = RecordingTransport::replying(ok_reply("Thanks, talk soon"));

        block_on(submit(&mut state, &transport));

        assert_eq!(state.status, SubmissionStatus::Success("Thanks, talk soon".to_string()));
        assert_eq!(state.form, ContactForm::default());
        assert!(!state.submitting);
        let sent = transport.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].email, "john@example.com");
    }

    #[test]
    fn network_failure_keeps_fields() {
        let mut state = filled_state();
        let transport =
            RecordingTransport::replying(Err(FetchError::Network("offline".to_string())));

        block_on(submit(&mut state, &transport));

        assert_eq!(state.status, SubmissionStatus::Error(SEND_FAILED.to_string()));
        assert_eq!(state.form, filled_state().form);
        assert!(!state.submitting);
    }

    #[test]
    fn server_rejection_uses_the_generic_message() {
        let mut state = filled_state();
        let transport = RecordingTransport::replying(Ok(ContactReply {
            success: false,
            message: "All fields are required".to_string(),
        }));

        block_on(submit(&mut state, &transport));

        assert_eq!(state.status.message(), Some(SEND_FAILED));
        assert_eq!(state.form.name, "John Doe");
    }

    #[test]
    fn reply_without_success_flag_is_a_failure() {
        let reply: ContactReply = serde_json::from_str(r#"{"message": "ok?"}"#).unwrap();
        let mut state = filled_state();
        state.begin_submit();
        state.finish_submit(Ok(reply));
        assert!(!state.status.is_success());
    }

    #[test]
    fn second_submit_while_in_flight_is_refused() {
        let mut state = filled_state();
        assert!(state.begin_submit().is_some());
        assert!(state.submitting);
        assert!(state.begin_submit().is_none());
        assert_eq!(state.status, SubmissionStatus::None);
    }

    #[test]
    fn editing_does_not_clear_status() {
        let mut state = ContactFormState::default();
        state.begin_submit();
        assert_eq!(state.status.message(), Some(FILL_ALL_FIELDS));
        state.edit(Field::Name, "J".to_string());
        assert_eq!(state.status.message(), Some(FILL_ALL_FIELDS));
    }

    #[test]
    fn reducer_walks_the_same_machine() {
        let state = Rc::new(filled_state());
        let state = state.reduce(ContactAction::BeginSubmit);
        assert!(state.submitting);
        let state = state.reduce(ContactAction::FinishSubmit(ok_reply("done")));
        assert!(state.status.is_success());
        assert!(state.form.name.is_empty());
        let state = state.reduce(ContactAction::Edit(Field::Email, "a@b.c".to_string()));
        assert_eq!(state.form.get(Field::Email), "a@b.c");
        assert!(state.status.is_success());
    }
}
