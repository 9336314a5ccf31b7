use crate::app_state::AppState;
use crate::error::ApiError;
use crate::models::{CreateNoteRequest, NoteResponse};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

/// Cache key for the stats body. The route takes no parameters, so a single
/// fixed key covers it.
const STATS_CACHE_KEY: &str = "stats";

#[derive(Debug, Deserialize)]
pub struct ListNotesQuery {
    pub project: Option<String>,
}

/// POST /api/notes
///
/// The body is taken as a raw JSON value so that an unparseable payload, a
/// wrong-typed field, and a missing or empty field all fall through the same
/// undifferentiated 400. Rate limiting happens in middleware before this
/// handler runs.
pub async fn create_note(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let Json(value) = payload.map_err(|_| ApiError::Validation)?;
    let request = CreateNoteRequest::from_json(&value).ok_or(ApiError::Validation)?;

    let note = state
        .notes
        .create(&request.title, &request.body, &request.project)
        .await?;
    debug!(id = note.id, project = %note.project, "note created");

    Ok((
        StatusCode::CREATED,
        Json(json!({"message": "Note created", "id": note.id})),
    ))
}

/// GET /api/notes
///
/// An absent or empty `project` parameter lists everything; otherwise the
/// result is the exact-match subset for that tag.
pub async fn list_notes(
    State(state): State<AppState>,
    Query(query): Query<ListNotesQuery>,
) -> Result<Json<Vec<NoteResponse>>, ApiError> {
    let notes = match query.project.as_deref().filter(|p| !p.is_empty()) {
        Some(project) => state.notes.list_by_project(project).await?,
        None => state.notes.list_all().await?,
    };

    Ok(Json(notes.into_iter().map(NoteResponse::from).collect()))
}

/// GET /api/stats
///
/// Cache-aside around `count_all`: a hit returns the stored body untouched,
/// a miss recomputes and stores it for the configured TTL. Counts created
/// inside the TTL window are deliberately stale.
pub async fn stats(State(state): State<AppState>) -> Result<Response, ApiError> {
    if let Some(cached) = state.stats_cache.get(STATS_CACHE_KEY) {
        debug!("stats served from cache");
        return Ok(json_body(cached));
    }

    let total = state.notes.count_all().await?;
    let body = json!({"total_notes": total}).to_string();
    state.stats_cache.set(STATS_CACHE_KEY, body.clone());

    Ok(json_body(body))
}

fn json_body(body: String) -> Response {
    ([(header::CONTENT_TYPE, "application/json")], body).into_response()
}
