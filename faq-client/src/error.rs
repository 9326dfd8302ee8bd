use thiserror::Error;

/// Status and body of an HTTP response, as seen by the FAQ client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Failure reported by an [`HttpClient`](crate::HttpClient) implementation.
///
/// Only [`TransportError::Status`] carries a response. The FAQ client keeps
/// parsing that response's body; every other variant ends the fetch.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP POST failed: {0}")]
    Request(String),
    #[error("HTTP POST returned status {}", .0.status)]
    Status(HttpResponse),
    #[error("failed to read response body: {0}")]
    Body(String),
}

impl TransportError {
    /// The HTTP response attached to this failure, if the server answered.
    pub fn response(&self) -> Option<&HttpResponse> {
        match self {
            TransportError::Status(response) => Some(response),
            TransportError::Request(_) | TransportError::Body(_) => None,
        }
    }

    pub fn has_response(&self) -> bool {
        self.response().is_some()
    }

    pub fn into_response(self) -> Option<HttpResponse> {
        match self {
            TransportError::Status(response) => Some(response),
            TransportError::Request(_) | TransportError::Body(_) => None,
        }
    }
}

/// Errors raised while building a client or loading its configuration.
///
/// Fetching never fails with this type, see [`FaqClient::get_faq`](crate::FaqClient::get_faq).
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
    #[error("failed to build HTTP client: {0}")]
    Build(String),
    #[error(transparent)]
    Config(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_exposes_response() {
        let err = TransportError::Status(HttpResponse::new(503, "{}"));
        assert!(err.has_response());
        assert_eq!(err.response().map(|r| r.status), Some(503));
        assert_eq!(err.to_string(), "HTTP POST returned status 503");
        assert_eq!(err.into_response(), Some(HttpResponse::new(503, "{}")));
    }

    #[test]
    fn request_error_has_no_response() {
        let err = TransportError::Request("connection refused".to_string());
        assert!(!err.has_response());
        assert!(err.into_response().is_none());

        let err = TransportError::Body("truncated".to_string());
        assert!(err.response().is_none());
    }
}
