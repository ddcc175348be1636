//! Request-path errors. Every variant is a client error answered with a
//! plain-text body; nothing here is retried or recorded server side.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Missing required parameter or undecodable body.
    #[error("{0}")]
    InvalidRequest(&'static str),
    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl ApiError {
    pub const MISSING_USER_ID: Self = Self::InvalidRequest("User ID is required");
    pub const INVALID_BODY: Self = Self::InvalidRequest("Invalid request body");

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_map_to_client_error_statuses() {
        assert_eq!(ApiError::MISSING_USER_ID.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::INVALID_BODY.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::MethodNotAllowed.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
    }

    #[test]
    fn message_is_the_plain_text_body() {
        assert_eq!(ApiError::MISSING_USER_ID.to_string(), "User ID is required");
        assert_eq!(ApiError::MethodNotAllowed.to_string(), "Method not allowed");
    }
}
