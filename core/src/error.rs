//! Error type for the announcements client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers commonly distinguish
//! "the announcement does not exist" from other rejections; it still carries
//! the raw body. All other non-2xx responses land in `HttpError` with the raw
//! status code and body. The async
//! operations return these values exactly as produced by the transport or the
//! parser; nothing above this layer rewraps them.

use thiserror::Error;

/// Errors returned by `AnnouncementClient` parse methods, transports, and the
/// async `Announcements` operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found: {body}")]
    NotFound { body: String },

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),

    /// The request never produced a response (connect, timeout, TLS, ...).
    #[error("transport failed: {0}")]
    Transport(String),
}
