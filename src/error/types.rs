//! Error types.

use crate::execution::response::ResponseEnvelope;
use thiserror::Error;

/// Failure of the underlying HTTP exchange.
///
/// Cancellation and deadline expiry are reported as their own kinds so callers
/// can tell an aborted call apart from a broken connection.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The request context was cancelled.
    #[error("request cancelled")]
    Cancelled,

    /// The request context deadline (or the client timeout) expired.
    #[error("deadline exceeded")]
    DeadlineExceeded,

    /// The connection to the service could not be established.
    #[error("connection failed: {0}")]
    Connect(String),

    /// The response body stream failed.
    #[error("body stream failed: {0}")]
    Body(String),

    /// Any other failure while sending the request.
    #[error("request failed: {0}")]
    Request(String),
}

/// Error reported by the Domain Reputation service itself.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("API error: [{code}] {message}")]
pub struct ApiError {
    pub code: i64,
    pub message: String,
}

impl ApiError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Error returned by client operations.
///
/// `Read`, `Parse` and `Status` carry the response envelope that was received
/// (possibly partial) so its bytes stay available for diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    /// The caller supplied an invalid argument. Raised before any I/O.
    #[error("invalid argument: \"{name}\" {message}")]
    Argument {
        name: &'static str,
        message: &'static str,
    },

    /// The request could not be exchanged with the service.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The response body could not be read to completion.
    #[error("cannot read response: {cause}")]
    Read {
        cause: String,
        response: Box<ResponseEnvelope>,
    },

    /// The response body was received but is not a well-formed payload.
    #[error("cannot parse response: {cause}")]
    Parse {
        cause: String,
        response: Box<ResponseEnvelope>,
    },

    /// The service answered with a status outside the 2xx range.
    #[error("API failed with status code: {code}")]
    Status {
        code: u16,
        response: Box<ResponseEnvelope>,
    },

    /// The service returned a structured error payload.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The client could not be configured.
    #[error("invalid configuration: {0}")]
    Configuration(String),
}

impl Error {
    pub(crate) fn read(cause: impl Into<String>, response: ResponseEnvelope) -> Self {
        Self::Read {
            cause: cause.into(),
            response: Box::new(response),
        }
    }

    pub(crate) fn parse(cause: impl Into<String>, response: ResponseEnvelope) -> Self {
        Self::Parse {
            cause: cause.into(),
            response: Box::new(response),
        }
    }

    pub(crate) fn status(response: ResponseEnvelope) -> Self {
        Self::Status {
            code: response.status,
            response: Box::new(response),
        }
    }

    /// The response envelope received before the failure, if any.
    pub fn response(&self) -> Option<&ResponseEnvelope> {
        match self {
            Self::Read { response, .. }
            | Self::Parse { response, .. }
            | Self::Status { response, .. } => Some(response),
            _ => None,
        }
    }

    /// Consume the error, returning the carried response envelope.
    pub fn into_response(self) -> Option<ResponseEnvelope> {
        match self {
            Self::Read { response, .. }
            | Self::Parse { response, .. }
            | Self::Status { response, .. } => Some(*response),
            _ => None,
        }
    }

    /// HTTP status of the response that caused this error, when one arrived.
    pub fn status_code(&self) -> Option<u16> {
        self.response().map(|r| r.status)
    }

    /// The service-reported error, if this is one.
    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }

    /// Whether repeating the same call may succeed.
    ///
    /// The client never retries on its own; this is a hint for callers that
    /// wrap it.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(TransportError::Cancelled) => false,
            Self::Transport(_) | Self::Read { .. } => true,
            Self::Status { code, .. } => *code == 429 || (500..600).contains(code),
            Self::Argument { .. } | Self::Parse { .. } | Self::Api(_) | Self::Configuration(_) => {
                false
            }
        }
    }
}
