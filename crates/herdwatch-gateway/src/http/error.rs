use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use herdwatch_core::error::{ClientCode, HerdError};

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Handler error. Client errors keep their message; internal failures are
/// logged and collapse to a generic body.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] HerdError);

impl ApiError {
    pub fn inner(&self) -> &HerdError {
        &self.0
    }
}

pub fn status_for(code: ClientCode) -> StatusCode {
    match code {
        ClientCode::BadRequest => StatusCode::BAD_REQUEST,
        ClientCode::NotFound => StatusCode::NOT_FOUND,
        ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let code = self.0.client_code();
        let msg = match self.0 {
            HerdError::BadRequest(msg) | HerdError::NotFound(msg) => msg,
            HerdError::Internal(detail) => {
                tracing::error!(%detail, "request failed");
                "Internal server error".to_string()
            }
        };
        (
            status_for(code),
            Json(json!({ "error": msg, "code": code.as_str() })),
        )
            .into_response()
    }
}

// Malformed input is not classified further.
impl From<JsonRejection> for ApiError {
    fn from(r: JsonRejection) -> Self {
        Self(HerdError::Internal(format!("json body rejected: {r}")))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(r: QueryRejection) -> Self {
        Self(HerdError::Internal(format!("query string rejected: {r}")))
    }
}

impl From<PathRejection> for ApiError {
    fn from(r: PathRejection) -> Self {
        Self(HerdError::Internal(format!("path rejected: {r}")))
    }
}
