//! Error types for the SPV Channels client.
//!
//! Every failure is returned to the immediate caller. Nothing in this crate
//! retries or swallows an error.
//!
//! | Variant | Raised when |
//! |---------|-------------|
//! | [`Error::InvalidRequest`] | The request could not be built (bad URL, bad method) |
//! | [`Error::Transport`] | DNS, connect, TLS or timeout failure |
//! | [`Error::Cancelled`] | The caller's cancellation token fired |
//! | [`Error::Server`] | Failure status with a decodable error envelope |
//! | [`Error::UnknownStatus`] | Failure status with any other body |
//! | [`Error::Decode`] | Success status but the body did not match the target type |

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by [`ChannelsClient`](crate::ChannelsClient).
#[derive(Debug, Error)]
pub enum Error {
    /// The request could not be constructed. No network call was made.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The HTTP layer failed: client setup, connect, TLS, timeout or body read.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// The caller cancelled the call before it completed.
    #[error("request cancelled")]
    Cancelled,

    /// The server answered with a failure status and an error envelope.
    ///
    /// Displays as the server's message verbatim.
    #[error("{message}")]
    Server {
        /// HTTP status of the response.
        status: u16,
        /// `code` field of the envelope.
        code: i64,
        /// `message` field of the envelope.
        message: String,
    },

    /// The server answered with a failure status and an unrecognised body.
    #[error("unknown error, status code: {0}")]
    UnknownStatus(u16),

    /// A success response whose body could not be decoded.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    /// True if the call was aborted through its cancellation token.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled)
    }

    /// True if the underlying transport hit the request timeout.
    pub fn is_timeout(&self) -> bool {
        match self {
            Error::Transport(e) => e.is_timeout(),
            _ => false,
        }
    }

    /// True if the server rejected the credentials (401 or 403).
    pub fn is_access_denied(&self) -> bool {
        self.status()
            .map(crate::client::is_access_denied_status)
            .unwrap_or(false)
    }

    /// HTTP status carried by the error, if the server responded at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Server { status, .. } | Error::UnknownStatus(status) => Some(*status),
            Error::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
