//! Error -> HTTP response mapping.
//!
//! Bodies are always `{"error": <sanitized message>, "code": <client code>}`.
//! The full error (paths, parser positions) goes to the log only.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use policyfeed_core::error::{ClientCode, PolicyFeedError};

#[derive(Debug)]
pub struct ApiError(pub PolicyFeedError);

impl From<PolicyFeedError> for ApiError {
    fn from(e: PolicyFeedError) -> Self {
        Self(e)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0.client_code() {
            ClientCode::NotFound => StatusCode::NOT_FOUND,
            // Missing or broken data is a server-side fault.
            ClientCode::FileNotFound
            | ClientCode::IoError
            | ClientCode::ParseError
            | ClientCode::SchemaError
            | ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.0.client_code().as_str();

        if status.is_server_error() {
            tracing::error!(code, error = %self.0, "policy request failed");
        } else {
            tracing::debug!(code, error = %self.0, "policy request rejected");
        }

        let body = json!({
            "error": self.0.client_message(),
            "code": code,
        });
        (status, Json(body)).into_response()
    }
}
