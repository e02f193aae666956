//! Submission gateway abstraction
//!
//! A gateway performs exactly one write of a [`ContactSubmission`] to the
//! persistence backend and reports the outcome as a `Result`. It never
//! retries and never panics on failure; every problem comes back as a
//! [`GatewayError`].

use std::future::Future;

use serde::{Deserialize, Serialize};

use super::model::{ContactSubmission, StoredSubmission};

/// Table the contact form writes to
pub const CONTACT_TABLE: &str = "contact_submissions";

/// Failure while talking to the persistence backend
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    #[error("Persistence backend is not configured")]
    NotConfigured,

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Backend rejected the request ({status}): {}", .body.message)]
    Rejected { status: u16, body: RemoteError },
}

impl GatewayError {
    /// HTTP status the contact API answers with for this error
    pub fn status_code(&self) -> u16 {
        match self {
            GatewayError::NotConfigured => 503,
            GatewayError::Transport(_) => 502,
            GatewayError::Rejected { status, .. } => *status,
        }
    }
}

/// Error payload as returned by PostgREST
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteError {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
}

impl RemoteError {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }
}

/// Result of a single gateway write
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Boundary between the contact form and wherever submissions are stored.
///
/// Implementations: `SupabaseGateway` on the server, `ApiGateway` in the
/// browser, and in-memory doubles in tests.
pub trait SubmissionGateway {
    /// Insert one record into the contact table
    fn submit(
        &self,
        record: &ContactSubmission,
    ) -> impl Future<Output = GatewayResult<StoredSubmission>>;

    /// Cheap read against the contact table; any failure yields `false`
    fn test_connection(&self) -> impl Future<Output = bool>;
}
