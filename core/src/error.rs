//! Error types for the pipeline-manager client.
//!
//! # Design
//! A documented error status (for example 404 on a pipeline lookup) is not
//! an `ApiError`: it decodes into the endpoint's typed variant. `ApiError`
//! covers everything else: transport failures, undocumented statuses when
//! the client is configured to raise, bodies that do not match the declared
//! schema, and request bodies that cannot be encoded.

use thiserror::Error;

/// Errors returned by `PipelineClient` build, parse and call methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The blocking transport failed (connection refused, timeout, TLS).
    #[error("HTTP transport failed: {0}")]
    Transport(#[from] ureq::Error),

    /// The async transport failed (connection refused, timeout, TLS).
    #[error("HTTP transport failed: {0}")]
    AsyncTransport(#[from] reqwest::Error),

    /// The server returned a status the endpoint does not document and
    /// `raise_on_unexpected_status` is set.
    #[error("unexpected status code {status}: {}", String::from_utf8_lossy(.body))]
    UnexpectedStatus { status: u16, body: Vec<u8> },

    /// A required key is absent from a JSON object.
    #[error("{model}: missing required field `{field}`")]
    MissingField {
        model: &'static str,
        field: &'static str,
    },

    /// A declared key is present but its value has the wrong shape.
    #[error("{model}: invalid value for field `{field}`: {message}")]
    InvalidField {
        model: &'static str,
        field: &'static str,
        message: String,
    },

    /// The response body is not JSON, or not a JSON object.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The client configuration could not be loaded.
    #[error("invalid client configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// Create a missing field error
    pub fn missing_field(model: &'static str, field: &'static str) -> Self {
        Self::MissingField { model, field }
    }

    /// Create an unexpected status error
    pub fn unexpected_status(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self::UnexpectedStatus {
            status,
            body: body.into(),
        }
    }

    /// True for network-level failures from either transport.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_) | ApiError::AsyncTransport(_))
    }
}

/// Result type alias for the pipeline-manager client
pub type Result<T> = std::result::Result<T, ApiError>;
