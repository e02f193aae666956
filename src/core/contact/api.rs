//! Contact API server-side handler
//!
//! The browser posts contact submissions here and the server forwards them
//! to Supabase, so the API key stays on the server.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::gateway::GatewayError;
use super::model::ContactSubmission;
use super::supabase::SupabaseGateway;

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub message: String,
    pub code: u16,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub connected: bool,
}

/// Create the contact API router
pub fn contact_api_router(gateway: SupabaseGateway) -> Router {
    let state = Arc::new(gateway);

    Router::new()
        .route("/api/contact", post(submit_handler))
        .route("/api/contact/health", get(health_handler))
        .with_state(state)
}

async fn submit_handler(
    State(gateway): State<Arc<SupabaseGateway>>,
    Json(record): Json<ContactSubmission>,
) -> Response {
    tracing::info!(service = %record.service, "Contact submission received");

    if let Err(err) = record.validate() {
        tracing::warn!("Contact submission refused: {}", err);
        return error_body(StatusCode::UNPROCESSABLE_ENTITY, err.to_string());
    }

    // user_id is reserved for signed-in visitors, which the site doesn't have
    let record = ContactSubmission {
        user_id: None,
        ..record
    };

    match gateway.insert_submission(&record).await {
        Ok(stored) => {
            tracing::info!(id = ?stored.id, "Contact submission stored");
            (StatusCode::CREATED, Json(stored)).into_response()
        }
        Err(err) => {
            tracing::error!("Contact submission failed: {}", err);
            error_response(&err)
        }
    }
}

async fn health_handler(State(gateway): State<Arc<SupabaseGateway>>) -> Json<HealthResponse> {
    let connected = gateway.check_connection().await;
    Json(HealthResponse { connected })
}

/// Create an error response
fn error_response(err: &GatewayError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let message = match err {
        GatewayError::Rejected { body, .. } => body.message.clone(),
        other => other.to_string(),
    };

    error_body(status, message)
}

fn error_body(status: StatusCode, message: String) -> Response {
    let error = ErrorResponse {
        error: ErrorDetail {
            message,
            code: status.as_u16(),
        },
    };

    (status, Json(error)).into_response()
}
