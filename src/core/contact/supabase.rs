//! Supabase (PostgREST) submission gateway
//!
//! Talks to `{SUPABASE_URL}/rest/v1/contact_submissions` with the project's
//! anon key. Only built into the server; the browser goes through the
//! contact API instead so the key never ships in the bundle.

use reqwest::{Client, Response, StatusCode};

use super::gateway::{
    CONTACT_TABLE, GatewayError, GatewayResult, RemoteError, SubmissionGateway,
};
use super::model::{ContactSubmission, StoredSubmission};
use crate::core::config::Config;

/// Credentials for a Supabase project
#[derive(Clone)]
struct Credentials {
    base_url: String,
    api_key: String,
}

/// Gateway writing contact submissions through the PostgREST API
#[derive(Clone)]
pub struct SupabaseGateway {
    client: Client,
    credentials: Option<Credentials>,
}

impl std::fmt::Debug for SupabaseGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SupabaseGateway")
            .field(
                "base_url",
                &self.credentials.as_ref().map(|c| c.base_url.as_str()),
            )
            .field("has_api_key", &self.credentials.is_some())
            .finish()
    }
}

impl SupabaseGateway {
    /// Create a gateway for the given project URL and API key
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: Client::new(),
            credentials: Some(Credentials {
                base_url: base_url.trim_end_matches('/').to_string(),
                api_key: api_key.into(),
            }),
        }
    }

    /// Gateway that fails every call with [`GatewayError::NotConfigured`]
    pub fn unconfigured() -> Self {
        Self {
            client: Client::new(),
            credentials: None,
        }
    }

    /// Build from application config.
    ///
    /// Missing credentials are not an error here: the site still renders and
    /// submissions fail at call time.
    pub fn from_config(config: &Config) -> Self {
        match (config.supabase_url.as_deref(), config.supabase_anon_key.as_deref()) {
            (Some(url), Some(key)) if !url.is_empty() && !key.is_empty() => Self::new(url, key),
            _ => Self::unconfigured(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }

    fn table_url(credentials: &Credentials) -> String {
        format!("{}/rest/v1/{}", credentials.base_url, CONTACT_TABLE)
    }

    fn authorized(
        &self,
        builder: reqwest::RequestBuilder,
        credentials: &Credentials,
    ) -> reqwest::RequestBuilder {
        builder
            .header("apikey", &credentials.api_key)
            .header("Authorization", format!("Bearer {}", credentials.api_key))
    }

    /// Insert one row and return it as stored
    pub async fn insert_submission(
        &self,
        record: &ContactSubmission,
    ) -> GatewayResult<StoredSubmission> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(GatewayError::NotConfigured)?;

        tracing::debug!(table = CONTACT_TABLE, service = %record.service, "Inserting contact submission");

        let response = self
            .authorized(self.client.post(Self::table_url(credentials)), credentials)
            .header("Prefer", "return=representation")
            .json(&[record])
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Contact submission request failed: {}", e);
                GatewayError::Transport(e.to_string())
            })?;

        let response = check_status(response).await?;

        // A 2xx means the row is stored; the body only adds detail
        let body = response.text().await.unwrap_or_default();
        Ok(stored_row(&body).unwrap_or_else(|| StoredSubmission::from_submission(record.clone())))
    }

    /// Bounded count query against the contact table
    pub async fn check_connection(&self) -> bool {
        let Some(credentials) = self.credentials.as_ref() else {
            tracing::debug!("Connection check skipped: Supabase is not configured");
            return false;
        };

        let request = self
            .authorized(self.client.get(Self::table_url(credentials)), credentials)
            .query(&[("select", "count"), ("limit", "1")]);

        match request.send().await {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                tracing::warn!("Connection check failed with status {}", response.status());
                false
            }
            Err(e) => {
                tracing::warn!("Connection check failed: {}", e);
                false
            }
        }
    }
}

/// First row of a `return=representation` body, if it reads as a submission.
///
/// Row-level security can hide the inserted row from the anon role, and the
/// table may carry columns typed differently from ours.
fn stored_row(body: &str) -> Option<StoredSubmission> {
    let rows: Vec<serde_json::Value> = match serde_json::from_str(body) {
        Ok(rows) => rows,
        Err(e) => {
            tracing::warn!("Insert acknowledged with an unreadable body: {}", e);
            return None;
        }
    };

    let row = rows.into_iter().next()?;
    match serde_json::from_value(row) {
        Ok(stored) => Some(stored),
        Err(e) => {
            tracing::warn!("Insert acknowledged with an unexpected row shape: {}", e);
            None
        }
    }
}

/// Turn a non-2xx response into [`GatewayError::Rejected`]
async fn check_status(response: Response) -> GatewayResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let body = serde_json::from_str::<RemoteError>(&text).unwrap_or_else(|_| {
        RemoteError::with_message(if text.is_empty() {
            status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string()
        } else {
            text
        })
    });

    tracing::warn!(
        status = status.as_u16(),
        code = ?body.code,
        "Supabase rejected contact submission: {}",
        body.message
    );

    Err(GatewayError::Rejected {
        status: rejected_status(status),
        body,
    })
}

fn rejected_status(status: StatusCode) -> u16 {
    if status.is_client_error() || status.is_server_error() {
        status.as_u16()
    } else {
        StatusCode::BAD_GATEWAY.as_u16()
    }
}

impl SubmissionGateway for SupabaseGateway {
    async fn submit(&self, record: &ContactSubmission) -> GatewayResult<StoredSubmission> {
        self.insert_submission(record).await
    }

    async fn test_connection(&self) -> bool {
        self.check_connection().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Json, Router,
        extract::{Query, State},
        http::{HeaderMap, StatusCode},
        response::{IntoResponse, Response},
        routing::post,
    };
    use chrono::{TimeZone, Utc};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    const KEY: &str = "anon-test-key";

    #[derive(Clone, Default)]
    struct FakePostgrest {
        inserted: Arc<Mutex<Vec<serde_json::Value>>>,
        headers: Arc<Mutex<Vec<HeaderMap>>>,
        reject_with: Option<u16>,
        /// Extra columns merged into every returned row
        extra_columns: Option<serde_json::Value>,
    }

    async fn insert(
        State(fake): State<FakePostgrest>,
        headers: HeaderMap,
        Json(rows): Json<serde_json::Value>,
    ) -> Response {
        fake.headers.lock().unwrap().push(headers.clone());

        if let Some(status) = fake.reject_with {
            let body = serde_json::json!({
                "message": "new row violates row-level security policy",
                "code": "42501",
                "details": null,
                "hint": "check the policies"
            });
            return (StatusCode::from_u16(status).unwrap(), Json(body)).into_response();
        }

        let mut stored = Vec::new();
        for row in rows.as_array().cloned().unwrap_or_default() {
            fake.inserted.lock().unwrap().push(row.clone());
            let mut row = row;
            row["id"] = serde_json::json!("5b0c1d2e-3f40-4a5b-8c6d-7e8f9a0b1c2d");
            if let Some(extra) = fake.extra_columns.as_ref().and_then(|e| e.as_object()) {
                for (column, value) in extra {
                    row[column] = value.clone();
                }
            }
            stored.push(row);
        }
        (StatusCode::CREATED, Json(serde_json::Value::Array(stored))).into_response()
    }

    async fn count(
        State(fake): State<FakePostgrest>,
        Query(params): Query<HashMap<String, String>>,
    ) -> Response {
        if fake.reject_with.is_some() {
            return StatusCode::UNAUTHORIZED.into_response();
        }
        assert_eq!(params.get("select").map(String::as_str), Some("count"));
        assert_eq!(params.get("limit").map(String::as_str), Some("1"));
        Json(serde_json::json!([{ "count": 3 }])).into_response()
    }

    async fn spawn_fake(fake: FakePostgrest) -> String {
        let app = Router::new()
            .route("/rest/v1/contact_submissions", post(insert).get(count))
            .with_state(fake);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/", addr)
    }

    fn record() -> ContactSubmission {
        ContactSubmission {
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            phone: None,
            service: "Custom X".to_string(),
            message: Some("hi".to_string()),
            submitted_at: Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap(),
            user_id: None,
        }
    }

    #[tokio::test]
    async fn test_insert_sends_headers_and_single_row() {
        let fake = FakePostgrest::default();
        let url = spawn_fake(fake.clone()).await;
        let gateway = SupabaseGateway::new(url, KEY);

        let stored = gateway.submit(&record()).await.unwrap();

        assert_eq!(
            stored.id,
            Some(serde_json::json!("5b0c1d2e-3f40-4a5b-8c6d-7e8f9a0b1c2d"))
        );
        assert_eq!(stored.submission, record());

        let inserted = fake.inserted.lock().unwrap();
        assert_eq!(inserted.len(), 1);
        assert_eq!(inserted[0]["service"], "Custom X");
        assert!(inserted[0]["user_id"].is_null());
        assert_eq!(inserted[0]["submitted_at"], "2025-01-02T03:04:05Z");

        let headers = fake.headers.lock().unwrap();
        assert_eq!(headers[0]["apikey"], KEY);
        assert_eq!(headers[0]["authorization"], format!("Bearer {}", KEY));
        assert_eq!(headers[0]["prefer"], "return=representation");
    }

    #[tokio::test]
    async fn test_bigint_primary_key_is_accepted() {
        let fake = FakePostgrest {
            extra_columns: Some(serde_json::json!({ "id": 42 })),
            ..FakePostgrest::default()
        };
        let url = spawn_fake(fake.clone()).await;
        let gateway = SupabaseGateway::new(url, KEY);

        let stored = gateway.submit(&record()).await.unwrap();

        assert_eq!(stored.id, Some(serde_json::json!(42)));
        assert_eq!(stored.submission, record());
        assert_eq!(fake.inserted.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unexpected_row_shape_still_counts_as_stored() {
        let fake = FakePostgrest {
            extra_columns: Some(serde_json::json!({ "created_at": "yesterday", "user_id": 7 })),
            ..FakePostgrest::default()
        };
        let url = spawn_fake(fake.clone()).await;
        let gateway = SupabaseGateway::new(url, KEY);

        let stored = gateway.submit(&record()).await.unwrap();

        assert_eq!(stored, StoredSubmission::from_submission(record()));
        assert_eq!(fake.inserted.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_stored_row_falls_back_on_empty_or_invalid_body() {
        assert!(stored_row("[]").is_none());
        assert!(stored_row("").is_none());
        assert!(stored_row("not json").is_none());
    }

    #[tokio::test]
    async fn test_rejection_carries_remote_error() {
        let fake = FakePostgrest {
            reject_with: Some(401),
            ..FakePostgrest::default()
        };
        let url = spawn_fake(fake.clone()).await;
        let gateway = SupabaseGateway::new(url, KEY);

        let err = gateway.submit(&record()).await.unwrap_err();

        match err {
            GatewayError::Rejected { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(body.code.as_deref(), Some("42501"));
                assert_eq!(body.hint.as_deref(), Some("check the policies"));
            }
            other => panic!("expected rejection, got {other:?}"),
        }
        assert!(fake.inserted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let gateway = SupabaseGateway::new(format!("http://{}", addr), KEY);

        assert!(matches!(
            gateway.submit(&record()).await,
            Err(GatewayError::Transport(_))
        ));
        assert!(!gateway.test_connection().await);
    }

    #[tokio::test]
    async fn test_unconfigured_gateway_fails_at_call_time() {
        let gateway = SupabaseGateway::from_config(&Config {
            supabase_url: Some("https://example.supabase.co".to_string()),
            supabase_anon_key: None,
            check_connection_on_start: false,
        });

        assert!(!gateway.is_configured());
        assert_eq!(
            gateway.submit(&record()).await,
            Err(GatewayError::NotConfigured)
        );
        assert!(!gateway.test_connection().await);
    }

    #[tokio::test]
    async fn test_connection_check() {
        let url = spawn_fake(FakePostgrest::default()).await;
        assert!(SupabaseGateway::new(url, KEY).test_connection().await);

        let url = spawn_fake(FakePostgrest {
            reject_with: Some(401),
            ..FakePostgrest::default()
        })
        .await;
        assert!(!SupabaseGateway::new(url, KEY).test_connection().await);
    }

    #[test]
    fn test_debug_hides_key() {
        let gateway = SupabaseGateway::new("https://example.supabase.co/", KEY);
        let debug = format!("{:?}", gateway);

        assert!(debug.contains("https://example.supabase.co"));
        assert!(!debug.contains(KEY));
    }
}
