use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

/// Practical column bound for note titles.
pub const TITLE_MAX_LEN: usize = 120;
/// Practical column bound for project tags.
pub const PROJECT_MAX_LEN: usize = 50;

/// A persisted note row. Notes are created once and never updated or deleted
/// by this service.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub project: String,
    pub created_at: DateTime<Utc>,
}

/// Validated payload for note creation.
#[derive(Debug, Deserialize)]
pub struct CreateNoteRequest {
    pub title: String,
    pub body: String,
    pub project: String,
}

impl CreateNoteRequest {
    /// Extracts a creation payload from an arbitrary JSON value.
    ///
    /// Returns `None` for anything that is not an object carrying non-empty
    /// `title`, `body`, and `project` strings within the column bounds. All
    /// failure causes collapse into the same rejection; the API deliberately
    /// surfaces a single undifferentiated 400 for every malformed create.
    pub fn from_json(value: &Value) -> Option<Self> {
        let title = value.get("title")?.as_str()?;
        let body = value.get("body")?.as_str()?;
        let project = value.get("project")?.as_str()?;

        if title.is_empty() || title.len() > TITLE_MAX_LEN {
            return None;
        }
        if body.is_empty() {
            return None;
        }
        if project.is_empty() || project.len() > PROJECT_MAX_LEN {
            return None;
        }

        Some(Self {
            title: title.to_string(),
            body: body.to_string(),
            project: project.to_string(),
        })
    }
}

/// Wire shape for a note in the JSON listing.
#[derive(Debug, Serialize)]
pub struct NoteResponse {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub project: String,
    pub created_at: DateTime<Utc>,
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            title: note.title,
            body: note.body,
            project: note.project,
            created_at: note.created_at,
        }
    }
}
