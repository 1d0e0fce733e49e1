use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the candela workspace.
///
/// This wraps transport and decode failures from history sources, invalid
/// arguments, capability mismatches, and source-tagged failures. Recoverable
/// conditions (an empty or fully rejected series) are states, not errors, and
/// never appear here.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CandelaError {
    /// The request never produced an HTTP response (connect, send, or timeout).
    #[error("transport failure: {msg}")]
    Transport {
        /// Human-readable description of the underlying transport failure.
        msg: String,
    },

    /// The endpoint answered with a non-success HTTP status.
    #[error("unexpected http status: {code}")]
    Status {
        /// The HTTP status code returned by the endpoint.
        code: u16,
    },

    /// The response body could not be decoded into raw samples.
    #[error("malformed response body: {0}")]
    Decode(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// An individual history source returned an error.
    #[error("{name} failed: {msg}")]
    Source {
        /// Source name that failed.
        name: String,
        /// Human-readable error message.
        msg: String,
    },

    /// The requested capability is not implemented by the target source.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// A capability string describing what was requested (e.g. "history/4h").
        capability: String,
    },
}

impl CandelaError {
    /// Helper: build a `Transport` error from any displayable failure.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport { msg: msg.into() }
    }

    /// Helper: build a `Status` error for an HTTP status code.
    #[must_use]
    pub const fn status(code: u16) -> Self {
        Self::Status { code }
    }

    /// Helper: build a `Decode` error from any displayable failure.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Helper: build a `Source` error with the source name and message.
    pub fn source(name: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Source {
            name: name.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build an `Unsupported` error for a capability string.
    pub fn unsupported(capability: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: capability.into(),
        }
    }
}
