//! Toast notification model
//!
//! Rendering lives in `ui::notifications`; this is the data the controller
//! hands to it.

use serde::{Deserialize, Serialize};

/// How long a toast stays on screen before removing itself
pub const AUTO_DISMISS_MS: u32 = 5000;

/// Severity of a notification, drives its colour and icon
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum NotificationType {
    #[display("success")]
    Success,
    #[display("error")]
    Error,
    #[display("info")]
    Info,
}

/// A transient, dismissible message shown to the visitor
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
    /// `None` keeps the toast until it is dismissed by hand
    pub auto_dismiss_ms: Option<u32>,
}

impl Notification {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationType::Success, title, message)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationType::Error, title, message)
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationType::Info, title, message)
    }

    fn new(
        notification_type: NotificationType,
        title: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            notification_type,
            title: title.into(),
            message: message.into(),
            auto_dismiss_ms: Some(AUTO_DISMISS_MS),
        }
    }

    /// CSS modifier used by the toast, e.g. `notification-success`
    pub fn css_class(&self) -> String {
        format!("notification-{}", self.notification_type)
    }
}
