//! Errors returned by the HTTP handlers.
//!
//! Every variant renders as `{"error": "<message>"}` with its own status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

use crate::country_actor::CountryError;

/// The message sent back when an append does not declare a JSON body.
pub const NOT_JSON: &str = "Request must be JSON";

#[derive(Debug, Error, PartialEq)]
pub enum ApiError {
    /// The request's `Content-Type` is missing or not a JSON media type.
    #[error("{}", NOT_JSON)]
    UnsupportedMediaType,

    /// The body is declared as JSON but cannot be used as a record.
    #[error("{0}")]
    BadRequest(String),

    /// The body is longer than the handler is willing to buffer.
    #[error("Request body too large")]
    PayloadTooLarge,

    /// The collection cannot assign another id.
    #[error("{0}")]
    Exhausted(String),

    /// The collection actor is gone. The detail is logged, not returned.
    #[error("Service unavailable")]
    Unavailable(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Exhausted(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl From<CountryError> for ApiError {
    fn from(e: CountryError) -> Self {
        match e {
            CountryError::InvalidPayload(msg) => ApiError::BadRequest(msg),
            exhausted @ CountryError::IdSpaceExhausted(_) => {
                ApiError::Exhausted(exhausted.to_string())
            }
            CountryError::ActorCommunicationError(detail) => ApiError::Unavailable(detail),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::Unavailable(detail) => error!(%status, detail = %detail, "Request failed"),
            e if status.is_server_error() => error!(%status, error = %e, "Request failed"),
            e => warn!(%status, error = %e, "Request rejected"),
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::UnsupportedMediaType.status(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
        assert_eq!(
            ApiError::BadRequest("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::PayloadTooLarge.status(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            ApiError::Exhausted("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Unavailable("x".into()).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_domain_errors_map_to_api_errors() {
        assert_eq!(
            ApiError::from(CountryError::InvalidPayload("not an object".into())),
            ApiError::BadRequest("not an object".into())
        );
        assert_eq!(
            ApiError::from(CountryError::ActorCommunicationError("Actor closed".into())),
            ApiError::Unavailable("Actor closed".into())
        );
        assert!(matches!(
            ApiError::from(CountryError::IdSpaceExhausted("4294967295".into())),
            ApiError::Exhausted(_)
        ));
    }

    #[test]
    fn test_unsupported_media_type_message() {
        assert_eq!(ApiError::UnsupportedMediaType.to_string(), "Request must be JSON");
    }
}
