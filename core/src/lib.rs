//! Client adapter for the NoteHub notes API.
//!
//! # Overview
//! Wraps the remote NoteHub REST API behind a stable internal shape: the
//! server is inconsistent about identifier fields (`id` vs `_id`) and only
//! reports `totalPages`, so every response is adapted before it reaches the
//! caller. Bearer-token authentication is injected from an explicit
//! [`NoteClientConfig`] rather than process-global state.
//!
//! # Design
//! - Each operation is split into a pure `build_*` (produces an
//!   `HttpRequest`) and `parse_*` (consumes an `HttpResponse`) pair, so the
//!   adapter logic is deterministic and unit-testable without a network.
//! - The same [`NoteClient`] also exposes async `fetch_notes` /
//!   `create_note` / `delete_note` methods that execute the round-trip over
//!   reqwest.
//! - Error policy is asymmetric: `fetch_notes` never fails outwardly (errors
//!   are logged and replaced by an empty page), while `create_note` and
//!   `delete_note` log and propagate.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod types;

pub use client::{NoteClient, DEFAULT_PAGE, DEFAULT_PER_PAGE};
pub use config::{NoteClientConfig, DEFAULT_BASE_URL, TOKEN_ENV_VAR};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{
    CreateNoteParams, DeleteNoteResponse, FetchNotesParams, FetchNotesResponse, Note, NoteTag,
    RawNote,
};
