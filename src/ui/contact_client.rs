//! Browser-side submission gateway
//!
//! Sends contact submissions to the site's own `/api/contact` endpoint,
//! which forwards them to Supabase. Requests are only made from the
//! hydrated page; during server rendering there is nothing to submit.

use crate::core::contact::{
    ContactSubmission, GatewayError, GatewayResult, StoredSubmission, SubmissionGateway,
};

/// Contact API endpoint served by the site
pub const CONTACT_ENDPOINT: &str = "/api/contact";

/// Health check endpoint served by the site
pub const HEALTH_ENDPOINT: &str = "/api/contact/health";

/// Gateway that posts submissions to the contact API
#[derive(Clone, Debug)]
pub struct ApiGateway {
    endpoint: String,
    health_endpoint: String,
}

impl Default for ApiGateway {
    fn default() -> Self {
        Self::new(CONTACT_ENDPOINT, HEALTH_ENDPOINT)
    }
}

impl ApiGateway {
    pub fn new(endpoint: impl Into<String>, health_endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            health_endpoint: health_endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Error body returned by the contact API
#[cfg(feature = "hydrate")]
#[derive(serde::Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[cfg(feature = "hydrate")]
#[derive(serde::Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl SubmissionGateway for ApiGateway {
    async fn submit(&self, record: &ContactSubmission) -> GatewayResult<StoredSubmission> {
        #[cfg(feature = "hydrate")]
        {
            use crate::core::contact::RemoteError;
            use gloo_net::http::Request;

            let request = Request::post(&self.endpoint)
                .header("Content-Type", "application/json")
                .json(record)
                .map_err(|e| GatewayError::Transport(e.to_string()))?;

            let response = request
                .send()
                .await
                .map_err(|e| GatewayError::Transport(e.to_string()))?;

            if !response.ok() {
                let status = response.status();
                let message = match response.json::<ApiErrorBody>().await {
                    Ok(body) => body.error.message,
                    Err(_) => response.status_text(),
                };
                leptos::logging::warn!("Contact submission rejected ({}): {}", status, message);
                return Err(GatewayError::Rejected {
                    status,
                    body: RemoteError::with_message(message),
                });
            }

            // A 2xx means the row is stored, even if the echo is unreadable
            match response.json::<StoredSubmission>().await {
                Ok(stored) => Ok(stored),
                Err(e) => {
                    leptos::logging::warn!("Unreadable contact API acknowledgement: {}", e);
                    Ok(StoredSubmission::from_submission(record.clone()))
                }
            }
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = record;
            Err(GatewayError::Transport(format!(
                "{} is only reachable from the browser",
                self.endpoint
            )))
        }
    }

    async fn test_connection(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            #[derive(serde::Deserialize)]
            struct Health {
                connected: bool,
            }

            match Request::get(&self.health_endpoint).send().await {
                Ok(response) if response.ok() => response
                    .json::<Health>()
                    .await
                    .map(|h| h.connected)
                    .unwrap_or(false),
                _ => false,
            }
        }

        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoints() {
        let gateway = ApiGateway::default();
        assert_eq!(gateway.endpoint(), "/api/contact");
        assert_eq!(gateway.health_endpoint, "/api/contact/health");
    }
}
