//! In-memory NoteHub API server for tests.
//!
//! Implements the wire protocol the client adapts: notes serialize with a
//! plain `id` field (never `_id`), list responses report `totalPages`, and
//! every route requires a bearer token so tests can exercise the
//! unauthenticated path.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::Response,
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: Option<String>,
    pub tag: String,
}

#[derive(Deserialize)]
pub struct CreateNote {
    pub title: String,
    pub content: Option<String>,
    pub tag: String,
}

#[derive(Deserialize)]
pub struct ListParams {
    pub page: Option<usize>,
    #[serde(rename = "perPage")]
    pub per_page: Option<usize>,
    pub search: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct NotesPage {
    pub notes: Vec<Note>,
    #[serde(rename = "totalPages")]
    pub total_pages: usize,
}

#[derive(Serialize, Deserialize)]
pub struct DeleteResult {
    #[serde(rename = "deletedCount")]
    pub deleted_count: usize,
}

// Vec keeps insertion order so pagination is deterministic.
pub type Db = Arc<RwLock<Vec<Note>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Vec::new()));
    Router::new()
        .route("/notes", get(list_notes).post(create_note))
        .route("/notes/{id}", delete(delete_note))
        .layer(middleware::from_fn(require_bearer))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn require_bearer(request: Request, next: Next) -> Result<Response, StatusCode> {
    let authorized = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.starts_with("Bearer "))
        .unwrap_or(false);
    if !authorized {
        return Err(StatusCode::UNAUTHORIZED);
    }
    Ok(next.run(request).await)
}

async fn list_notes(State(db): State<Db>, Query(params): Query<ListParams>) -> Json<NotesPage> {
    let page = params.page.unwrap_or(1).max(1);
    let per_page = params.per_page.unwrap_or(12).max(1);

    let notes = db.read().await;
    let filtered: Vec<Note> = notes
        .iter()
        .filter(|note| matches_search(note, params.search.as_deref()))
        .cloned()
        .collect();

    let total_pages = filtered.len().div_ceil(per_page);
    let page_notes = filtered
        .into_iter()
        .skip((page - 1) * per_page)
        .take(per_page)
        .collect();

    Json(NotesPage {
        notes: page_notes,
        total_pages,
    })
}

fn matches_search(note: &Note, search: Option<&str>) -> bool {
    let Some(query) = search else { return true };
    let query = query.to_lowercase();
    if query.is_empty() {
        return true;
    }
    note.title.to_lowercase().contains(&query)
        || note
            .content
            .as_deref()
            .map(|content| content.to_lowercase().contains(&query))
            .unwrap_or(false)
}

async fn create_note(
    State(db): State<Db>,
    Json(input): Json<CreateNote>,
) -> (StatusCode, Json<Note>) {
    let note = Note {
        id: Uuid::new_v4().to_string(),
        title: input.title,
        content: input.content,
        tag: input.tag,
    };
    db.write().await.push(note.clone());
    (StatusCode::CREATED, Json(note))
}

async fn delete_note(
    State(db): State<Db>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResult>, StatusCode> {
    let mut notes = db.write().await;
    let before = notes.len();
    notes.retain(|note| note.id != id);
    let deleted_count = before - notes.len();
    if deleted_count == 0 {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(DeleteResult { deleted_count }))
}
