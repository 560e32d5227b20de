/// TextRelay error types
#[derive(Debug, thiserror::Error)]
pub enum TextRelayError {
    /// A required request field was empty or absent
    #[error("Missing required field: {0}")]
    MissingRequiredField(String),

    /// Marker-mode split found no chapter markers (strict path only)
    #[error("No chapter format found (第X章 or Chương + number)")]
    NoMarkersFound,

    /// Unrecognized split method token
    #[error("Invalid split method: {0}")]
    InvalidSplitMethod(String),

    /// Non-success response from the completion service, body verbatim
    #[error("API Error: {0}")]
    Upstream(String),

    /// Completion response lacked the expected fields
    #[error("Unexpected response shape: {0}")]
    UnexpectedResponseShape(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network/HTTP error
    #[error("Network error: {0}")]
    Network(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General error (anyhow integration)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TextRelayError {
    /// Create missing-field error
    pub fn missing_field<S: Into<String>>(field: S) -> Self {
        Self::MissingRequiredField(field.into())
    }

    /// Create invalid split method error
    pub fn invalid_split_method<S: Into<String>>(token: S) -> Self {
        Self::InvalidSplitMethod(token.into())
    }

    /// Create upstream error
    pub fn upstream<S: Into<String>>(body: S) -> Self {
        Self::Upstream(body.into())
    }

    /// Create response shape error
    pub fn unexpected_shape<S: Into<String>>(msg: S) -> Self {
        Self::UnexpectedResponseShape(msg.into())
    }

    /// Create config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create network error
    pub fn network<S: Into<String>>(msg: S) -> Self {
        Self::Network(msg.into())
    }
}

// HTTP response conversion (for actix-web)
impl TextRelayError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MissingRequiredField(_) => 400,
            Self::InvalidSplitMethod(_) => 400,
            Self::NoMarkersFound => 422,
            Self::Upstream(_) => 502,
            Self::UnexpectedResponseShape(_) => 502,
            Self::Config(_) => 500,
            Self::Network(_) => 503,
            Self::Io(_) => 500,
            Self::Json(_) => 400,
            Self::Other(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(TextRelayError::missing_field("prompt").status_code(), 400);
        assert_eq!(TextRelayError::NoMarkersFound.status_code(), 422);
        assert_eq!(TextRelayError::invalid_split_method("bogus").status_code(), 400);
        assert_eq!(TextRelayError::upstream("{}").status_code(), 502);
        assert_eq!(TextRelayError::network("refused").status_code(), 503);
    }

    #[test]
    fn test_upstream_body_passes_through_verbatim() {
        let body = r#"{"error":{"code":429,"message":"rate limited"}}"#;
        let err = TextRelayError::upstream(body);
        assert_eq!(err.to_string(), format!("API Error: {}", body));
    }

    #[test]
    fn test_missing_field_message() {
        let err = TextRelayError::missing_field("api_key");
        assert_eq!(err.to_string(), "Missing required field: api_key");
    }
}
