use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;
use textrelay_common::TextRelayError;

/// Structured error body returned by every route
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Request-boundary wrapper converting [`TextRelayError`] into an HTTP
/// response with the taxonomy's status code and an `{error}` JSON body.
#[derive(Debug)]
pub struct ApiError(pub TextRelayError);

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<TextRelayError> for ApiError {
    fn from(err: TextRelayError) -> Self {
        Self(err)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.0.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let err = ApiError(TextRelayError::NoMarkersFound);
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

        let err = ApiError(TextRelayError::missing_field("prompt"));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err = ApiError(TextRelayError::upstream("body"));
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }
}
