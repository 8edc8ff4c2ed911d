use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validation::ValidationError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    BadRequest(String),

    #[error("Too many requests from this IP, please try again later.")]
    RateLimited,

    // Transport detail is logged at the failure site; callers only get a
    // retry prompt.
    #[error("Error al enviar la cotización. Por favor intenta nuevamente.")]
    Dispatch,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    FormValidation,
    BadRequest,
    RateLimited,
    DispatchFailed,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub request_id: Option<String>,
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    fn to_error_code(&self) -> ErrorCode {
        match self {
            ApiError::Validation(_) => ErrorCode::FormValidation,
            ApiError::BadRequest(_) => ErrorCode::BadRequest,
            ApiError::RateLimited => ErrorCode::RateLimited,
            ApiError::Dispatch => ErrorCode::DispatchFailed,
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ApiError::Dispatch => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.to_error_code();
        let message = self.to_string();

        let error_response = ErrorResponse {
            request_id: None,
            error: ErrorDetail {
                code,
                message,
                details: None,
            },
        };

        (status, Json(error_response)).into_response()
    }
}
