use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use tracing::error;

use super::reply::MISSING_MESSAGE_REPLY;

pub const GENERIC_FAILURE: &str = "Unable to generate a response right now.";

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("message is missing or blank")]
    MissingMessage,

    #[error("malformed chat request: {0}")]
    MalformedRequest(#[from] serde_json::Error),
}

impl ChatError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingMessage => StatusCode::BAD_REQUEST,
            Self::MalformedRequest(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::MissingMessage => json!({ "reply": MISSING_MESSAGE_REPLY }),
            Self::MalformedRequest(source) => {
                error!(error = %source, "chat route error");
                json!({ "error": GENERIC_FAILURE })
            }
        };

        (status, Json(body)).into_response()
    }
}
