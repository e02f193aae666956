//! Contact form controller
//!
//! Owns the form values, the submit state machine and the conditional
//! "custom service" field. It knows nothing about the DOM: the Leptos
//! component reads [`FormController::submit_button`] and
//! [`FormController::custom_service_field`] and forwards user events.
//!
//! ```text
//! Idle ──submit──▶ Sending ──gateway returns──▶ Resolved(outcome)
//!                     ▲                                │
//!                     └────────────submit──────────────┘
//! ```

use chrono::{DateTime, Utc};

use super::gateway::{GatewayError, SubmissionGateway};
use super::model::{
    ContactField, ContactForm, ContactFormError, ContactSubmission, StoredSubmission, is_others,
};
use crate::core::notification::Notification;

/// Submit button text while idle
pub const SUBMIT_LABEL: &str = "Send Message";

/// Submit button text while a request is in flight
pub const SENDING_LABEL: &str = "Sending...";

pub const SUCCESS_MESSAGE: &str =
    "Message sent successfully! We'll get back to you within 24 hours.";

pub const ERROR_MESSAGE: &str = "Error sending message. Please try again or contact us directly.";

/// Shown for any validation failure; which field failed is left to the inputs
pub const INVALID_FORM_MESSAGE: &str = "Please complete the required fields and try again.";

/// How the last submission ended
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

/// Submit lifecycle of one form instance
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Sending,
    Resolved(Outcome),
}

impl SubmitState {
    pub fn is_sending(&self) -> bool {
        matches!(self, SubmitState::Sending)
    }
}

/// Visibility and required flag of a conditional field
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldVisibility {
    pub visible: bool,
    pub required: bool,
}

/// What the submit button should look like
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: &'static str,
    pub disabled: bool,
}

/// Why a submit event did not start a request
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejected {
    #[error("A submission is already in progress")]
    AlreadySending,

    #[error(transparent)]
    Invalid(#[from] ContactFormError),
}

impl SubmitRejected {
    /// Text shown next to the form, if any.
    ///
    /// Every validation failure gets the same message; a repeated click while
    /// sending shows nothing.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            SubmitRejected::AlreadySending => None,
            SubmitRejected::Invalid(_) => Some(INVALID_FORM_MESSAGE),
        }
    }
}

/// Rendering-agnostic controller for the contact form
#[derive(Debug, Clone)]
pub struct FormController<G> {
    gateway: G,
    form: ContactForm,
    state: SubmitState,
    custom_service: FieldVisibility,
}

impl<G: SubmissionGateway> FormController<G> {
    /// Create an idle controller with an empty form
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            form: ContactForm::default(),
            state: SubmitState::Idle,
            custom_service: FieldVisibility::default(),
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    /// Update a field from an input event.
    ///
    /// Writes to the service selector go through [`Self::select_service`] so
    /// the conditional field stays in sync.
    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        match field {
            ContactField::Service => self.select_service(value),
            other => self.form.set(other, value),
        }
    }

    /// Handle a change of the service selector
    pub fn select_service(&mut self, value: impl Into<String>) {
        self.form.service = value.into();
        let others = is_others(&self.form.service);
        self.custom_service = FieldVisibility {
            visible: others,
            required: others,
        };
    }

    pub fn custom_service_field(&self) -> FieldVisibility {
        self.custom_service
    }

    pub fn submit_button(&self) -> SubmitButton {
        if self.state.is_sending() {
            SubmitButton {
                label: SENDING_LABEL,
                disabled: true,
            }
        } else {
            SubmitButton {
                label: SUBMIT_LABEL,
                disabled: false,
            }
        }
    }

    /// Enter `Sending` and build the record to send.
    ///
    /// Stamps the record with the current time.
    pub fn begin_submit(&mut self) -> Result<ContactSubmission, SubmitRejected> {
        self.begin_submit_at(Utc::now())
    }

    /// Same as [`Self::begin_submit`] with an explicit timestamp
    pub fn begin_submit_at(
        &mut self,
        submitted_at: DateTime<Utc>,
    ) -> Result<ContactSubmission, SubmitRejected> {
        if self.state.is_sending() {
            return Err(SubmitRejected::AlreadySending);
        }

        let record = self.form.to_submission(submitted_at)?;
        self.state = SubmitState::Sending;
        Ok(record)
    }

    /// Leave `Sending` with the gateway's answer and produce the toast to show.
    ///
    /// Called exactly once per successful [`Self::begin_submit`], whatever the
    /// outcome, so the submit button always comes back.
    pub fn finish_submit(
        &mut self,
        result: Result<StoredSubmission, GatewayError>,
    ) -> Notification {
        match result {
            Ok(_) => {
                self.state = SubmitState::Resolved(Outcome::Success);
                self.reset();
                Notification::success("Message sent", SUCCESS_MESSAGE)
            }
            Err(_) => {
                self.state = SubmitState::Resolved(Outcome::Failure);
                Notification::error("Message not sent", ERROR_MESSAGE)
            }
        }
    }

    /// Run one full submit cycle against the injected gateway
    pub async fn submit(&mut self) -> Result<Notification, SubmitRejected> {
        let record = self.begin_submit()?;
        let result = self.gateway.submit(&record).await;
        Ok(self.finish_submit(result))
    }

    /// Clear every field and hide the custom service input
    fn reset(&mut self) {
        self.form = ContactForm::default();
        self.custom_service = FieldVisibility::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::contact::gateway::{GatewayResult, RemoteError};
    use crate::core::contact::model::OTHERS_SENTINEL;
    use crate::core::notification::NotificationType;
    use std::cell::RefCell;

    /// Records every record it receives and answers with a canned result
    #[derive(Default)]
    struct RecordingGateway {
        received: RefCell<Vec<ContactSubmission>>,
        fail: bool,
    }

    impl RecordingGateway {
        fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }
    }

    impl SubmissionGateway for RecordingGateway {
        async fn submit(&self, record: &ContactSubmission) -> GatewayResult<StoredSubmission> {
            self.received.borrow_mut().push(record.clone());
            if self.fail {
                Err(GatewayError::Rejected {
                    status: 401,
                    body: RemoteError::with_message("Invalid API key"),
                })
            } else {
                Ok(StoredSubmission::from_submission(record.clone()))
            }
        }

        async fn test_connection(&self) -> bool {
            !self.fail
        }
    }

    fn fill(controller: &mut FormController<RecordingGateway>) {
        controller.set_field(ContactField::Name, "A");
        controller.set_field(ContactField::Email, "a@b.com");
        controller.set_field(ContactField::Message, "hi");
        controller.select_service("ai-agents");
    }

    #[test]
    fn test_initial_state() {
        let controller = FormController::new(RecordingGateway::default());

        assert_eq!(controller.state(), SubmitState::Idle);
        assert!(controller.form().is_empty());
        assert_eq!(
            controller.custom_service_field(),
            FieldVisibility {
                visible: false,
                required: false
            }
        );
        assert_eq!(
            controller.submit_button(),
            SubmitButton {
                label: "Send Message",
                disabled: false
            }
        );
    }

    #[test]
    fn test_custom_field_follows_selector() {
        let mut controller = FormController::new(RecordingGateway::default());

        let sequence = [
            "others",
            "others",
            "chatbots",
            "others",
            "",
            "consulting",
            "consulting",
            "others",
        ];
        for value in sequence {
            controller.select_service(value);
            let field = controller.custom_service_field();
            let expected = value == OTHERS_SENTINEL;
            assert_eq!(field.visible, expected, "visibility after {value:?}");
            assert_eq!(field.required, expected, "required after {value:?}");
        }
    }

    #[test]
    fn test_set_field_on_service_updates_conditional_field() {
        let mut controller = FormController::new(RecordingGateway::default());

        controller.set_field(ContactField::Service, "others");
        assert!(controller.custom_service_field().visible);

        controller.set_field(ContactField::Service, "chatbots");
        assert!(!controller.custom_service_field().visible);
    }

    #[test]
    fn test_begin_submit_enters_sending() {
        let mut controller = FormController::new(RecordingGateway::default());
        fill(&mut controller);

        let record = controller.begin_submit().unwrap();

        assert_eq!(record.service, "ai-agents");
        assert_eq!(record.user_id, None);
        assert!(controller.state().is_sending());
        assert_eq!(
            controller.submit_button(),
            SubmitButton {
                label: "Sending...",
                disabled: true
            }
        );
    }

    #[test]
    fn test_second_submit_while_sending_is_rejected() {
        let mut controller = FormController::new(RecordingGateway::default());
        fill(&mut controller);

        controller.begin_submit().unwrap();
        assert_eq!(
            controller.begin_submit(),
            Err(SubmitRejected::AlreadySending)
        );
    }

    #[test]
    fn test_invalid_form_does_not_enter_sending() {
        let mut controller = FormController::new(RecordingGateway::default());
        fill(&mut controller);
        controller.select_service(OTHERS_SENTINEL);

        assert_eq!(
            controller.begin_submit(),
            Err(SubmitRejected::Invalid(
                ContactFormError::MissingCustomService
            ))
        );
        assert_eq!(controller.state(), SubmitState::Idle);
        assert!(!controller.submit_button().disabled);
    }

    #[tokio::test]
    async fn test_success_clears_form() {
        let mut controller = FormController::new(RecordingGateway::default());
        fill(&mut controller);
        controller.select_service(OTHERS_SENTINEL);
        controller.set_field(ContactField::CustomService, "Custom X");

        let notification = controller.submit().await.unwrap();

        assert_eq!(notification.notification_type, NotificationType::Success);
        assert_eq!(notification.message, SUCCESS_MESSAGE);
        assert!(controller.form().is_empty());
        assert_eq!(controller.custom_service_field(), FieldVisibility::default());
        assert_eq!(controller.state(), SubmitState::Resolved(Outcome::Success));
        assert_eq!(controller.submit_button().label, SUBMIT_LABEL);
        assert!(!controller.submit_button().disabled);
    }

    #[tokio::test]
    async fn test_failure_keeps_fields() {
        let mut controller = FormController::new(RecordingGateway::failing());
        fill(&mut controller);
        let before = controller.form().clone();

        let notification = controller.submit().await.unwrap();

        assert_eq!(notification.notification_type, NotificationType::Error);
        assert_eq!(notification.message, ERROR_MESSAGE);
        assert_eq!(controller.form(), &before);
        assert_eq!(controller.state(), SubmitState::Resolved(Outcome::Failure));
        assert_eq!(controller.submit_button().label, SUBMIT_LABEL);
        assert!(!controller.submit_button().disabled);
    }

    #[tokio::test]
    async fn test_resubmit_after_failure_creates_new_record() {
        let mut controller = FormController::new(RecordingGateway::failing());
        fill(&mut controller);

        controller.submit().await.unwrap();
        controller.submit().await.unwrap();

        assert_eq!(controller.gateway().received.borrow().len(), 2);
    }

    #[tokio::test]
    async fn test_rejected_submit_makes_no_call() {
        let mut controller = FormController::new(RecordingGateway::default());

        let result = controller.submit().await;

        assert_eq!(
            result,
            Err(SubmitRejected::Invalid(ContactFormError::MissingName))
        );
        assert!(controller.gateway().received.borrow().is_empty());
    }

    #[test]
    fn test_rejections_show_one_generic_message() {
        let errors = [
            ContactFormError::MissingName,
            ContactFormError::MissingEmail,
            ContactFormError::InvalidEmail,
            ContactFormError::MissingService,
            ContactFormError::MissingCustomService,
        ];

        for err in errors {
            let message = SubmitRejected::Invalid(err.clone()).user_message();
            assert_eq!(message, Some(INVALID_FORM_MESSAGE));
            assert_ne!(message, Some(err.to_string().as_str()));
        }
        assert_eq!(SubmitRejected::AlreadySending.user_message(), None);
    }
}
