//! Request builder, response adapter, and executing client for the NoteHub
//! API.
//!
//! # Design
//! `NoteClient` holds only its config and a connection pool; no mutable
//! state is shared between calls. Each operation is split into a `build_*`
//! method that produces an `HttpRequest` and a `parse_*` method that
//! consumes an `HttpResponse`, with async `fetch_notes` / `create_note` /
//! `delete_note` wiring the two together over reqwest.
//!
//! The error policy is deliberately asymmetric, reproducing the upstream
//! contract: `fetch_notes` never fails outwardly (any transport or parse
//! error degrades to an empty page), while `create_note` and `delete_note`
//! log and propagate.

use crate::config::NoteClientConfig;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{
    CreateNoteParams, DeleteNoteResponse, FetchNotesParams, FetchNotesResponse, Note, RawNote,
    RawNotesPage,
};

/// Page number used when `FetchNotesParams::page` is unset.
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when `FetchNotesParams::per_page` is unset.
pub const DEFAULT_PER_PAGE: u32 = 12;

/// Client for the NoteHub notes API.
///
/// Cheap to clone; the underlying reqwest client shares its connection pool
/// across clones. Carries no mutable state, so concurrent calls are
/// independent and unordered.
#[derive(Debug, Clone)]
pub struct NoteClient {
    config: NoteClientConfig,
    http: reqwest::Client,
}

impl NoteClient {
    pub fn new(config: NoteClientConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Client against the public NoteHub API with the token taken from the
    /// environment (see [`NoteClientConfig::from_env`]).
    pub fn from_env() -> Self {
        Self::new(NoteClientConfig::from_env())
    }

    /// Headers attached to every request. The authorization header is only
    /// present when a token is configured; without it requests go out
    /// unauthenticated.
    fn base_headers(&self) -> Vec<(String, String)> {
        let mut headers = vec![(
            "content-type".to_string(),
            "application/json".to_string(),
        )];
        if let Some(token) = self.config.token() {
            headers.push(("authorization".to_string(), format!("Bearer {token}")));
        }
        headers
    }

    // --- build_* / parse_* (pure, no I/O) ---

    pub fn build_fetch_notes(&self, params: &FetchNotesParams) -> HttpRequest {
        let page = params.page.unwrap_or(DEFAULT_PAGE);
        let per_page = params.per_page.unwrap_or(DEFAULT_PER_PAGE);
        let mut path = format!(
            "{}/notes?page={page}&perPage={per_page}",
            self.config.base_url()
        );
        if let Some(search) = &params.search {
            path.push_str("&search=");
            path.push_str(&urlencoding::encode(search));
        }
        HttpRequest {
            method: HttpMethod::Get,
            path,
            headers: self.base_headers(),
            body: None,
        }
    }

    pub fn build_create_note(&self, payload: &CreateNoteParams) -> Result<HttpRequest, ApiError> {
        let body =
            serde_json::to_string(payload).map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/notes", self.config.base_url()),
            headers: self.base_headers(),
            body: Some(body),
        })
    }

    pub fn build_delete_note(&self, id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/notes/{id}", self.config.base_url()),
            headers: self.base_headers(),
            body: None,
        }
    }

    /// Adapt a raw list response: normalize identifiers and derive `total`
    /// from `totalPages × perPage` (0 when the server omits `totalPages`).
    /// Raw notes carrying no identifier at all are dropped with a warning
    /// rather than failing the whole page.
    pub fn parse_fetch_notes(
        &self,
        page: u32,
        per_page: u32,
        response: HttpResponse,
    ) -> Result<FetchNotesResponse, ApiError> {
        check_status(&response)?;
        let raw: RawNotesPage = serde_json::from_str(&response.body)
            .map_err(|e| ApiError::Deserialization(e.to_string()))?;

        let total = raw
            .total_pages
            .map(|total_pages| total_pages * u64::from(per_page))
            .unwrap_or(0);

        let mut data = Vec::with_capacity(raw.notes.len());
        for note in raw.notes {
            match note.normalize() {
                Ok(note) => data.push(note),
                Err(_) => log::warn!("[NoteClient] dropping note without `id` or `_id`"),
            }
        }

        Ok(FetchNotesResponse {
            data,
            total,
            page,
            per_page,
        })
    }

    pub fn parse_create_note(&self, response: HttpResponse) -> Result<Note, ApiError> {
        check_status(&response)?;
        let raw: RawNote = serde_json::from_str(&response.body)
            .map_err(|e| ApiError::Deserialization(e.to_string()))?;
        raw.normalize()
    }

    pub fn parse_delete_note(&self, response: HttpResponse) -> Result<DeleteNoteResponse, ApiError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    // --- async executing surface ---

    /// List notes. Never fails outwardly: any transport or server error is
    /// logged and replaced by an empty page echoing the resolved
    /// `page`/`perPage`.
    pub async fn fetch_notes(&self, params: &FetchNotesParams) -> FetchNotesResponse {
        let page = params.page.unwrap_or(DEFAULT_PAGE);
        let per_page = params.per_page.unwrap_or(DEFAULT_PER_PAGE);
        let request = self.build_fetch_notes(params);
        log::debug!("[NoteClient] GET {}", request.path);

        match self.round_trip_fetch(page, per_page, request).await {
            Ok(adapted) => {
                log::debug!(
                    "[NoteClient] adapted /notes response: {} notes, total {}",
                    adapted.data.len(),
                    adapted.total
                );
                adapted
            }
            Err(e) => {
                log::error!("[NoteClient] fetch_notes failed: {e}");
                FetchNotesResponse {
                    data: Vec::new(),
                    total: 0,
                    page,
                    per_page,
                }
            }
        }
    }

    async fn round_trip_fetch(
        &self,
        page: u32,
        per_page: u32,
        request: HttpRequest,
    ) -> Result<FetchNotesResponse, ApiError> {
        let response = self.execute(request).await?;
        log::debug!("[NoteClient] raw /notes response: {}", response.body);
        self.parse_fetch_notes(page, per_page, response)
    }

    /// Create a note. Errors are logged and propagated unchanged.
    pub async fn create_note(&self, payload: &CreateNoteParams) -> Result<Note, ApiError> {
        let result = self.round_trip_create(payload).await;
        match &result {
            Ok(note) => log::debug!("[NoteClient] note created: {}", note.id),
            Err(e) => log::error!("[NoteClient] create_note failed: {e}"),
        }
        result
    }

    async fn round_trip_create(&self, payload: &CreateNoteParams) -> Result<Note, ApiError> {
        let request = self.build_create_note(payload)?;
        log::debug!("[NoteClient] POST {}", request.path);
        let response = self.execute(request).await?;
        log::debug!("[NoteClient] raw create response: {}", response.body);
        self.parse_create_note(response)
    }

    /// Delete a note by id. Errors are logged and propagated unchanged.
    pub async fn delete_note(&self, id: &str) -> Result<DeleteNoteResponse, ApiError> {
        let request = self.build_delete_note(id);
        log::debug!("[NoteClient] DELETE {}", request.path);

        let result = async {
            let response = self.execute(request).await?;
            log::debug!("[NoteClient] raw delete response: {}", response.body);
            self.parse_delete_note(response)
        }
        .await;

        match &result {
            Ok(resp) => log::debug!("[NoteClient] note deleted, count {}", resp.deleted_count),
            Err(e) => log::error!("[NoteClient] delete_note failed: {e}"),
        }
        result
    }

    /// Execute a built request over reqwest. Non-2xx statuses are returned
    /// as data for `parse_*` to interpret; only network-level failures map
    /// to `ApiError::Transport`.
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = match request.method {
            HttpMethod::Get => self.http.get(&request.path),
            HttpMethod::Post => self.http.post(&request.path),
            HttpMethod::Delete => self.http.delete(&request.path),
        };
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(HttpResponse { status, body })
    }
}

/// Map non-2xx status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NoteTag;

    fn client() -> NoteClient {
        NoteClient::new(NoteClientConfig::new(
            "http://localhost:3000",
            Some("test-token".to_string()),
        ))
    }

    fn client_without_token() -> NoteClient {
        NoteClient::new(NoteClientConfig::new("http://localhost:3000", None))
    }

    fn ok_response(body: &str) -> HttpResponse {
        HttpResponse {
            status: 200,
            body: body.to_string(),
        }
    }

    #[test]
    fn build_fetch_notes_applies_defaults() {
        let req = client().build_fetch_notes(&FetchNotesParams::default());
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/notes?page=1&perPage=12");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_fetch_notes_passes_explicit_paging() {
        let params = FetchNotesParams {
            page: Some(2),
            per_page: Some(5),
            search: None,
        };
        let req = client().build_fetch_notes(&params);
        assert_eq!(req.path, "http://localhost:3000/notes?page=2&perPage=5");
    }

    #[test]
    fn build_fetch_notes_encodes_search() {
        let params = FetchNotesParams {
            page: None,
            per_page: None,
            search: Some("buy milk".to_string()),
        };
        let req = client().build_fetch_notes(&params);
        assert_eq!(
            req.path,
            "http://localhost:3000/notes?page=1&perPage=12&search=buy%20milk"
        );
    }

    #[test]
    fn built_requests_carry_bearer_and_content_type() {
        let req = client().build_fetch_notes(&FetchNotesParams::default());
        assert!(req
            .headers
            .contains(&("content-type".to_string(), "application/json".to_string())));
        assert!(req
            .headers
            .contains(&("authorization".to_string(), "Bearer test-token".to_string())));
    }

    #[test]
    fn missing_token_omits_authorization_header() {
        let req = client_without_token().build_fetch_notes(&FetchNotesParams::default());
        assert!(!req.headers.iter().any(|(name, _)| name == "authorization"));
    }

    #[test]
    fn build_create_note_produces_json_body() {
        let payload = CreateNoteParams {
            title: "Buy milk".to_string(),
            content: Some("2 liters".to_string()),
            tag: NoteTag::Shopping,
        };
        let req = client().build_create_note(&payload).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/notes");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["title"], "Buy milk");
        assert_eq!(body["content"], "2 liters");
        assert_eq!(body["tag"], "Shopping");
    }

    #[test]
    fn build_delete_note_targets_note_path() {
        let req = client().build_delete_note("abc");
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:3000/notes/abc");
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_fetch_notes_normalizes_plain_id() {
        let body = r#"{"notes":[{"id":"n1","title":"A","tag":"Todo"}],"totalPages":1}"#;
        let resp = client().parse_fetch_notes(1, 12, ok_response(body)).unwrap();
        assert_eq!(resp.data.len(), 1);
        assert_eq!(resp.data[0].id, "n1");
    }

    #[test]
    fn parse_fetch_notes_preserves_underscore_id() {
        let body = r#"{"notes":[{"_id":"mongo1","title":"A","tag":"Work"}],"totalPages":1}"#;
        let resp = client().parse_fetch_notes(1, 12, ok_response(body)).unwrap();
        assert_eq!(resp.data[0].id, "mongo1");
    }

    #[test]
    fn parse_fetch_notes_derives_total_from_total_pages() {
        let body = r#"{"notes":[],"totalPages":3}"#;
        let resp = client().parse_fetch_notes(2, 5, ok_response(body)).unwrap();
        assert_eq!(resp.total, 15);
        assert_eq!(resp.page, 2);
        assert_eq!(resp.per_page, 5);
    }

    #[test]
    fn parse_fetch_notes_total_is_zero_without_total_pages() {
        let resp = client()
            .parse_fetch_notes(1, 12, ok_response(r#"{"notes":[]}"#))
            .unwrap();
        assert_eq!(resp.total, 0);
    }

    #[test]
    fn parse_fetch_notes_tolerates_missing_notes_field() {
        let resp = client().parse_fetch_notes(1, 12, ok_response("{}")).unwrap();
        assert!(resp.data.is_empty());
        assert_eq!(resp.total, 0);
    }

    #[test]
    fn parse_fetch_notes_drops_notes_without_id() {
        let body = r#"{"notes":[{"title":"orphan","tag":"Todo"},{"id":"n2","title":"kept","tag":"Todo"}],"totalPages":1}"#;
        let resp = client().parse_fetch_notes(1, 12, ok_response(body)).unwrap();
        assert_eq!(resp.data.len(), 1);
        assert_eq!(resp.data[0].id, "n2");
    }

    #[test]
    fn parse_fetch_notes_bad_json() {
        let err = client()
            .parse_fetch_notes(1, 12, ok_response("not json"))
            .unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn parse_fetch_notes_server_error() {
        let response = HttpResponse {
            status: 500,
            body: "internal error".to_string(),
        };
        let err = client().parse_fetch_notes(1, 12, response).unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 500, .. }));
    }

    #[test]
    fn parse_create_note_normalizes_id() {
        let response = HttpResponse {
            status: 201,
            body: r#"{"id":"created1","title":"New","tag":"Meeting"}"#.to_string(),
        };
        let note = client().parse_create_note(response).unwrap();
        assert_eq!(note.id, "created1");
        assert_eq!(note.tag, NoteTag::Meeting);
    }

    #[test]
    fn parse_create_note_rejects_missing_id() {
        let response = HttpResponse {
            status: 201,
            body: r#"{"title":"New","tag":"Todo"}"#.to_string(),
        };
        let err = client().parse_create_note(response).unwrap_err();
        assert!(matches!(err, ApiError::MissingId));
    }

    #[test]
    fn parse_delete_note_returns_server_count() {
        let resp = client()
            .parse_delete_note(ok_response(r#"{"deletedCount":1}"#))
            .unwrap();
        assert_eq!(resp.deleted_count, 1);
    }

    #[test]
    fn parse_delete_note_not_found() {
        let response = HttpResponse {
            status: 404,
            body: String::new(),
        };
        let err = client().parse_delete_note(response).unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = NoteClient::new(NoteClientConfig::new("http://localhost:3000/", None));
        let req = client.build_fetch_notes(&FetchNotesParams::default());
        assert_eq!(req.path, "http://localhost:3000/notes?page=1&perPage=12");
    }
}
