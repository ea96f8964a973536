use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use veracity_common::VeracityError;

/// API-layer error type
#[derive(Debug)]
pub enum ApiError {
    /// 400 - nothing to analyze
    BadRequest(String),

    /// 404 - unknown or ended session
    SessionNotFound(Uuid),

    /// 422 - the article could not be retrieved
    Unprocessable(String),

    /// 500 - Internal error
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::SessionNotFound(id) => (
                StatusCode::NOT_FOUND,
                "session_not_found",
                format!("No session {id}"),
            ),
            ApiError::Unprocessable(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "retrieval_failed", msg)
            }
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg),
        };

        let body = ErrorBody {
            error: error_type.into(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<VeracityError> for ApiError {
    fn from(err: VeracityError) -> Self {
        match err {
            VeracityError::MissingInput | VeracityError::EmptyArticle { .. } => {
                ApiError::BadRequest(err.to_string())
            }
            VeracityError::Retrieval { .. } => ApiError::Unprocessable(err.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}
