//! Contact form data model
//!
//! Raw form input (`ContactForm`), the record persisted for each submission
//! (`ContactSubmission`), the row acknowledged by the backend
//! (`StoredSubmission`) and the service catalog offered by the selector.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Selector value meaning "I'll describe the service myself"
pub const OTHERS_SENTINEL: &str = "others";

// ============================================================================
// Service Catalog
// ============================================================================

/// Services offered in the contact form selector
#[derive(Clone, Copy, Debug, PartialEq, Eq, derive_more::Display)]
pub enum ServiceOption {
    #[display("workflow-automation")]
    WorkflowAutomation,
    #[display("ai-agents")]
    AiAgents,
    #[display("chatbots")]
    Chatbots,
    #[display("voice-agents")]
    VoiceAgents,
    #[display("crm-integration")]
    CrmIntegration,
    #[display("data-automation")]
    DataAutomation,
    #[display("custom-development")]
    CustomDevelopment,
    #[display("consulting")]
    Consulting,
    #[display("others")]
    Others,
}

impl ServiceOption {
    /// All options in the order they appear in the selector
    pub const ALL: [ServiceOption; 9] = [
        ServiceOption::WorkflowAutomation,
        ServiceOption::AiAgents,
        ServiceOption::Chatbots,
        ServiceOption::VoiceAgents,
        ServiceOption::CrmIntegration,
        ServiceOption::DataAutomation,
        ServiceOption::CustomDevelopment,
        ServiceOption::Consulting,
        ServiceOption::Others,
    ];

    /// Value submitted by the `<select>` element
    pub fn value(&self) -> &'static str {
        match self {
            ServiceOption::WorkflowAutomation => "workflow-automation",
            ServiceOption::AiAgents => "ai-agents",
            ServiceOption::Chatbots => "chatbots",
            ServiceOption::VoiceAgents => "voice-agents",
            ServiceOption::CrmIntegration => "crm-integration",
            ServiceOption::DataAutomation => "data-automation",
            ServiceOption::CustomDevelopment => "custom-development",
            ServiceOption::Consulting => "consulting",
            ServiceOption::Others => OTHERS_SENTINEL,
        }
    }

    /// Human readable label shown in the selector
    pub fn label(&self) -> &'static str {
        match self {
            ServiceOption::WorkflowAutomation => "Workflow Automation",
            ServiceOption::AiAgents => "AI Agents",
            ServiceOption::Chatbots => "Chatbots",
            ServiceOption::VoiceAgents => "Voice Agents",
            ServiceOption::CrmIntegration => "CRM Integration",
            ServiceOption::DataAutomation => "Data Automation",
            ServiceOption::CustomDevelopment => "Custom Development",
            ServiceOption::Consulting => "Consulting",
            ServiceOption::Others => "Others",
        }
    }

    /// One-line pitch used on the service cards
    pub fn summary(&self) -> &'static str {
        match self {
            ServiceOption::WorkflowAutomation => {
                "Connect your tools and retire repetitive manual steps end to end."
            }
            ServiceOption::AiAgents => {
                "Autonomous agents that research, draft and act inside your systems."
            }
            ServiceOption::Chatbots => {
                "Website and messaging assistants that answer and qualify around the clock."
            }
            ServiceOption::VoiceAgents => {
                "Phone agents that book appointments and handle routine calls."
            }
            ServiceOption::CrmIntegration => {
                "Keep your CRM accurate with synced contacts, deals and activity."
            }
            ServiceOption::DataAutomation => {
                "Scheduled extraction, cleanup and reporting without spreadsheets."
            }
            ServiceOption::CustomDevelopment => {
                "Bespoke integrations and internal tools when off-the-shelf falls short."
            }
            ServiceOption::Consulting => {
                "An audit of your processes with a prioritised automation roadmap."
            }
            ServiceOption::Others => "Something else in mind? Tell us about it.",
        }
    }

    /// Options shown as service cards (everything except the free-text entry)
    pub fn offered() -> impl Iterator<Item = ServiceOption> {
        Self::ALL.into_iter().filter(|option| *option != ServiceOption::Others)
    }

    /// `(value, label)` pairs for rendering a select field
    pub fn select_options() -> Vec<(String, String)> {
        Self::ALL
            .iter()
            .map(|option| (option.value().to_string(), option.label().to_string()))
            .collect()
    }
}

/// Whether a selector value is the free-text sentinel
pub fn is_others(value: &str) -> bool {
    value == OTHERS_SENTINEL
}

// ============================================================================
// Validation
// ============================================================================

/// Reasons a contact form cannot be submitted
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactFormError {
    #[error("Please enter your name")]
    MissingName,

    #[error("Please enter your email address")]
    MissingEmail,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Please select a service")]
    MissingService,

    #[error("Please describe the service you need")]
    MissingCustomService,
}

/// Check that an address looks like `local@domain.tld`.
///
/// This mirrors what a browser's `type="email"` input accepts closely enough
/// for a marketing form; the backend remains the source of truth.
pub fn is_plausible_email(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

// ============================================================================
// Form Input
// ============================================================================

/// Individual inputs of the contact form
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Service,
    CustomService,
    Message,
}

/// Raw values of the contact form, exactly as typed
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub custom_service: String,
    pub message: String,
}

impl ContactForm {
    /// Read a single field
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Service => &self.service,
            ContactField::CustomService => &self.custom_service,
            ContactField::Message => &self.message,
        }
    }

    /// Overwrite a single field
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Phone => self.phone = value,
            ContactField::Service => self.service = value,
            ContactField::CustomService => self.custom_service = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Whether every field is empty
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// The service value that gets persisted.
    ///
    /// The sentinel is replaced by the custom text, taken verbatim.
    pub fn effective_service(&self) -> &str {
        if is_others(&self.service) {
            &self.custom_service
        } else {
            &self.service
        }
    }

    /// Check the constraints a submission must satisfy
    pub fn validate(&self) -> Result<(), ContactFormError> {
        if self.name.trim().is_empty() {
            return Err(ContactFormError::MissingName);
        }

        let email = self.email.trim();
        if email.is_empty() {
            return Err(ContactFormError::MissingEmail);
        }
        if !is_plausible_email(email) {
            return Err(ContactFormError::InvalidEmail);
        }

        if self.service.is_empty() {
            return Err(ContactFormError::MissingService);
        }
        if is_others(&self.service) && self.custom_service.trim().is_empty() {
            return Err(ContactFormError::MissingCustomService);
        }

        Ok(())
    }

    /// Validate and build the record sent to the backend
    pub fn to_submission(
        &self,
        submitted_at: DateTime<Utc>,
    ) -> Result<ContactSubmission, ContactFormError> {
        self.validate()?;

        Ok(ContactSubmission {
            name: self.name.clone(),
            email: self.email.trim().to_string(),
            phone: non_empty(&self.phone),
            service: self.effective_service().to_string(),
            message: non_empty(&self.message),
            submitted_at,
            user_id: None,
        })
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

// ============================================================================
// Persisted Records
// ============================================================================

/// Row inserted into the `contact_submissions` table
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub service: String,
    pub message: Option<String>,
    pub submitted_at: DateTime<Utc>,
    /// There is no sign-in on the site, so this is always `None`
    pub user_id: Option<Uuid>,
}

impl ContactSubmission {
    /// Constraints every persisted record satisfies.
    ///
    /// The form checks these before sending; the contact API repeats them
    /// for records that did not come from the form.
    pub fn validate(&self) -> Result<(), ContactFormError> {
        if self.name.trim().is_empty() {
            return Err(ContactFormError::MissingName);
        }

        let email = self.email.trim();
        if email.is_empty() {
            return Err(ContactFormError::MissingEmail);
        }
        if !is_plausible_email(email) {
            return Err(ContactFormError::InvalidEmail);
        }

        if self.service.trim().is_empty() {
            return Err(ContactFormError::MissingService);
        }
        // The sentinel is always replaced before a record is built
        if is_others(&self.service) {
            return Err(ContactFormError::MissingCustomService);
        }

        Ok(())
    }
}

/// Row returned by the backend after an insert
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoredSubmission {
    /// Primary key as the table defines it (uuid, bigint, ...)
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub submission: ContactSubmission,
}

impl StoredSubmission {
    /// Acknowledgement for a record the backend stored without extra columns
    pub fn from_submission(submission: ContactSubmission) -> Self {
        Self {
            id: None,
            created_at: None,
            submission,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn filled_form() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: String::new(),
            service: "chatbots".to_string(),
            custom_service: String::new(),
            message: "Hello".to_string(),
        }
    }

    fn timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap()
    }

    #[test]
    fn test_service_option_values() {
        for option in ServiceOption::ALL {
            assert_eq!(option.to_string(), option.value());
        }
        let options = ServiceOption::select_options();
        assert_eq!(options.len(), 9);
        assert_eq!(options[8], ("others".to_string(), "Others".to_string()));
    }

    #[test]
    fn test_offered_services_exclude_others() {
        let offered: Vec<_> = ServiceOption::offered().collect();
        assert_eq!(offered.len(), 8);
        assert!(!offered.contains(&ServiceOption::Others));
        assert!(offered.iter().all(|option| !option.summary().is_empty()));
    }

    #[test]
    fn test_plausible_emails() {
        assert!(is_plausible_email("a@b.com"));
        assert!(is_plausible_email("first.last+tag@sub.example.co"));

        assert!(!is_plausible_email(""));
        assert!(!is_plausible_email("plainaddress"));
        assert!(!is_plausible_email("@example.com"));
        assert!(!is_plausible_email("user@localhost"));
        assert!(!is_plausible_email("user@.com"));
        assert!(!is_plausible_email("user@example."));
        assert!(!is_plausible_email("us er@example.com"));
        assert!(!is_plausible_email("a@b@c.com"));
    }

    #[test]
    fn test_validate_required_fields() {
        let mut form = filled_form();
        assert_eq!(form.validate(), Ok(()));

        form.name = "   ".to_string();
        assert_eq!(form.validate(), Err(ContactFormError::MissingName));

        let mut form = filled_form();
        form.email.clear();
        assert_eq!(form.validate(), Err(ContactFormError::MissingEmail));

        form.email = "not-an-email".to_string();
        assert_eq!(form.validate(), Err(ContactFormError::InvalidEmail));

        let mut form = filled_form();
        form.service.clear();
        assert_eq!(form.validate(), Err(ContactFormError::MissingService));
    }

    #[test]
    fn test_custom_service_required_only_for_others() {
        let mut form = filled_form();
        form.custom_service.clear();
        assert_eq!(form.validate(), Ok(()));

        form.service = OTHERS_SENTINEL.to_string();
        assert_eq!(
            form.validate(),
            Err(ContactFormError::MissingCustomService)
        );

        form.custom_service = "  ".to_string();
        assert_eq!(
            form.validate(),
            Err(ContactFormError::MissingCustomService)
        );

        form.custom_service = "Invoice OCR".to_string();
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn test_submission_uses_selector_value() {
        let mut form = filled_form();
        form.custom_service = "ignored".to_string();

        let record = form.to_submission(timestamp()).unwrap();

        assert_eq!(record.service, "chatbots");
        assert_eq!(record.user_id, None);
        assert_eq!(record.phone, None);
        assert_eq!(record.message.as_deref(), Some("Hello"));
        assert_eq!(record.submitted_at, timestamp());
    }

    #[test]
    fn test_submission_replaces_sentinel_verbatim() {
        let mut form = filled_form();
        form.service = OTHERS_SENTINEL.to_string();
        form.custom_service = " Custom X ".to_string();

        let record = form.to_submission(timestamp()).unwrap();

        assert_eq!(record.service, " Custom X ");
    }

    #[test]
    fn test_submission_serializes_expected_keys() {
        let record = filled_form().to_submission(timestamp()).unwrap();
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["name"], "Ada");
        assert_eq!(json["email"], "ada@example.com");
        assert!(json["phone"].is_null());
        assert_eq!(json["service"], "chatbots");
        assert!(json["user_id"].is_null());
        assert_eq!(json["submitted_at"], "2025-03-14T09:26:53Z");
        assert!(json.get("custom_service").is_none());
    }

    #[test]
    fn test_submission_validation() {
        let valid = filled_form().to_submission(timestamp()).unwrap();
        assert_eq!(valid.validate(), Ok(()));

        let cases = [
            (
                ContactSubmission {
                    name: "  ".to_string(),
                    ..valid.clone()
                },
                ContactFormError::MissingName,
            ),
            (
                ContactSubmission {
                    email: "not-an-email".to_string(),
                    ..valid.clone()
                },
                ContactFormError::InvalidEmail,
            ),
            (
                ContactSubmission {
                    email: String::new(),
                    ..valid.clone()
                },
                ContactFormError::MissingEmail,
            ),
            (
                ContactSubmission {
                    service: String::new(),
                    ..valid.clone()
                },
                ContactFormError::MissingService,
            ),
            (
                ContactSubmission {
                    service: OTHERS_SENTINEL.to_string(),
                    ..valid.clone()
                },
                ContactFormError::MissingCustomService,
            ),
        ];

        for (record, expected) in cases {
            assert_eq!(record.validate(), Err(expected));
        }
    }

    #[test]
    fn test_stored_submission_accepts_extra_columns() {
        let json = serde_json::json!({
            "id": "0b7c7b3e-6a0e-4d59-9a53-0c3d1c7bb7e1",
            "created_at": "2025-03-14T09:26:54Z",
            "name": "Ada",
            "email": "ada@example.com",
            "phone": null,
            "service": "chatbots",
            "message": null,
            "submitted_at": "2025-03-14T09:26:53Z",
            "user_id": null
        });

        let stored: StoredSubmission = serde_json::from_value(json).unwrap();

        assert_eq!(
            stored.id,
            Some(serde_json::json!("0b7c7b3e-6a0e-4d59-9a53-0c3d1c7bb7e1"))
        );
        assert!(stored.created_at.is_some());
        assert_eq!(stored.submission.name, "Ada");
    }

    #[test]
    fn test_form_field_access() {
        let mut form = ContactForm::default();
        assert!(form.is_empty());

        form.set(ContactField::Phone, "+1 555 0100");
        assert_eq!(form.get(ContactField::Phone), "+1 555 0100");
        assert!(!form.is_empty());
    }
}
