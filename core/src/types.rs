//! Domain DTOs for the NoteHub API.
//!
//! # Design
//! `RawNote` mirrors the wire shape exactly (including its `id` / `_id`
//! inconsistency); `Note` is the normalized shape handed to callers, which
//! always carries a non-empty `_id`. Keeping both explicit makes the
//! adaptation step a total, testable function instead of an ad-hoc patch on
//! a dynamic value.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// The fixed category assigned to every note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoteTag {
    Todo,
    Work,
    Personal,
    Meeting,
    Shopping,
}

/// A note exactly as the server returns it, before identifier normalization.
///
/// The server is inconsistent: depending on the endpoint the identifier
/// arrives as `id` or `_id`, and `content` may be absent entirely.
#[derive(Debug, Clone, Deserialize)]
pub struct RawNote {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, rename = "_id")]
    pub mongo_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    pub tag: NoteTag,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<String>,
    #[serde(default, rename = "updatedAt")]
    pub updated_at: Option<String>,
}

impl RawNote {
    /// Normalize into a [`Note`], preferring `id` over `_id` when both are
    /// present. Fails with [`ApiError::MissingId`] when neither field holds
    /// a non-empty value, so callers never see a note without an identifier.
    pub fn normalize(self) -> Result<Note, ApiError> {
        let id = self
            .id
            .or(self.mongo_id)
            .filter(|id| !id.is_empty())
            .ok_or(ApiError::MissingId)?;
        Ok(Note {
            id,
            title: self.title,
            content: self.content,
            tag: self.tag,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// A note after adaptation. The identifier is always present and non-empty,
/// and serializes as `_id` to match the shape downstream code expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub tag: NoteTag,
    #[serde(default, rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Request-shaping parameters for listing notes. Unset fields fall back to
/// `page = 1`, `perPage = 12`; `search` is omitted from the query entirely
/// when `None`.
#[derive(Debug, Clone, Default)]
pub struct FetchNotesParams {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub search: Option<String>,
}

/// Wire shape of the list endpoint, before adaptation. `notes` defaults to
/// empty and `totalPages` may be absent.
#[derive(Debug, Deserialize)]
pub struct RawNotesPage {
    #[serde(default)]
    pub notes: Vec<RawNote>,
    #[serde(default, rename = "totalPages")]
    pub total_pages: Option<u64>,
}

/// Adapted result of listing notes.
///
/// `total` is derived as `totalPages × perPage` when the server reports
/// `totalPages` and 0 otherwise — an approximation of the item count, not an
/// exact figure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchNotesResponse {
    pub data: Vec<Note>,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
}

/// Request payload for creating a note. `content` is omitted from the JSON
/// body when `None`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateNoteParams {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub tag: NoteTag,
}

/// Server acknowledgement of a delete.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeleteNoteResponse {
    #[serde(rename = "deletedCount")]
    pub deleted_count: u64,
}
