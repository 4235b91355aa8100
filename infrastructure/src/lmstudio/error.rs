//! Error types for the LM Studio adapter

use council_application::GatewayError;
use thiserror::Error;

/// Result type alias for LM Studio operations
pub type Result<T> = std::result::Result<T, LmStudioError>;

/// Errors that can occur when talking to the inference server
#[derive(Error, Debug)]
pub enum LmStudioError {
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    #[error("Cannot reach {url}: {message}")]
    Unreachable { url: String, message: String },

    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to parse response: {error}\nRaw response: {raw}")]
    ParseError { error: String, raw: String },

    #[error("Response contained no choices")]
    NoChoices,
}

impl LmStudioError {
    /// Classify a transport error from reqwest
    pub(crate) fn from_reqwest(err: reqwest::Error, url: &str, timeout_secs: u64) -> Self {
        if err.is_timeout() {
            LmStudioError::Timeout(timeout_secs)
        } else {
            LmStudioError::Unreachable {
                url: url.to_string(),
                message: err.to_string(),
            }
        }
    }
}

impl From<LmStudioError> for GatewayError {
    fn from(err: LmStudioError) -> Self {
        match err {
            LmStudioError::ClientBuild(msg) => GatewayError::Other(msg),
            e @ LmStudioError::Unreachable { .. } => GatewayError::ConnectionError(e.to_string()),
            LmStudioError::Timeout(secs) => GatewayError::Timeout(secs),
            e @ LmStudioError::Status { .. } => GatewayError::RequestFailed(e.to_string()),
            LmStudioError::ParseError { error, .. } => GatewayError::InvalidResponse(error),
            LmStudioError::NoChoices => GatewayError::EmptyResponse,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_maps_to_request_failed() {
        let err: GatewayError = LmStudioError::Status {
            status: 404,
            body: "model not found".into(),
        }
        .into();
        assert!(matches!(err, GatewayError::RequestFailed(_)));
        assert!(err.to_string().contains("HTTP 404: model not found"));
    }

    #[test]
    fn test_timeout_keeps_seconds() {
        let err: GatewayError = LmStudioError::Timeout(300).into();
        assert_eq!(err.to_string(), "Request timed out after 300 seconds");
    }

    #[test]
    fn test_no_choices_is_empty_response() {
        let err: GatewayError = LmStudioError::NoChoices.into();
        assert!(matches!(err, GatewayError::EmptyResponse));
    }
}
