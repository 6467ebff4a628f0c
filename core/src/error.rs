//! Error types for the NoteHub API client.
//!
//! # Design
//! Transport failures and non-2xx responses are both surfaced as `ApiError`
//! variants without further classification or retries. `NotFound` gets a
//! dedicated variant because callers frequently distinguish "the note does
//! not exist" from "the server returned an unexpected status"; all other
//! non-2xx responses land in `Http` with the raw status code and body.

use thiserror::Error;

/// Errors returned by `NoteClient` operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS
    /// failure, timeout at the transport's default).
    #[error("transport error: {0}")]
    Transport(String),

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The server returned 404 — the requested note does not exist.
    #[error("note not found")]
    NotFound,

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The server returned a note carrying neither `id` nor `_id`.
    #[error("note has neither `id` nor `_id`")]
    MissingId,
}
