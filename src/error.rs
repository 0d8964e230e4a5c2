use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

use crate::service::pagination::PageError;

#[derive(Debug, ThisError)]
pub enum TriviaError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("field `{0}` has an invalid type")]
    InvalidType(&'static str),

    #[error("resource not found")]
    NotFound,

    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("Config error: {0}")]
    Config(#[from] figment::Error),
}

impl From<PageError> for TriviaError {
    fn from(e: PageError) -> Self {
        match e {
            PageError::OutOfRange { .. } => TriviaError::NotFound,
        }
    }
}

impl TriviaError {
    pub fn status(&self) -> StatusCode {
        match self {
            TriviaError::MissingField(_) | TriviaError::BadRequest(_) => StatusCode::BAD_REQUEST,
            TriviaError::InvalidType(_) => StatusCode::UNPROCESSABLE_ENTITY,
            TriviaError::NotFound => StatusCode::NOT_FOUND,
            TriviaError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            TriviaError::Database(_) | TriviaError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for TriviaError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let message = match status {
            StatusCode::BAD_REQUEST => "Bad request",
            StatusCode::UNPROCESSABLE_ENTITY => "Unprocessable entity",
            StatusCode::NOT_FOUND => "Not Found",
            StatusCode::METHOD_NOT_ALLOWED => "Method not allowed",
            _ => {
                tracing::error!(error = %self, "internal fault while handling request");
                "Internal server error"
            }
        };
        let body = ApiErrorResponse {
            success: false,
            error: status.as_u16(),
            message: message.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Body shared by every error response.
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub success: bool,
    pub error: u16,
    pub message: String,
}
