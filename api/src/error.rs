use thiserror::Error;

/// Errors from calls against the recharge backend.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced an HTTP response (DNS, TLS, refused, timeout).
    #[error("network failure: {0}")]
    Network(#[source] reqwest::Error),
    /// The backend answered with a non-2xx status.
    #[error("server responded with {status}: {message}")]
    Server { status: u16, message: String },
    /// The backend answered 2xx but the body did not have the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
    /// The request was rejected before being sent.
    #[error("invalid request: {0}")]
    Validation(String),
    #[error("invalid backend url {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl ApiError {
    /// Whether the failure happened before any response was received.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            Self::Server {
                status: status.as_u16(),
                message: e.to_string(),
            }
        } else {
            Self::Network(e)
        }
    }
}
