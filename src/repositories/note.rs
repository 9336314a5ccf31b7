use crate::models::Note;
use chrono::Utc;
use sqlx::SqlitePool;

/// Data access for the single `notes` table. Exactly four operations exist;
/// callers validate input before `create` is invoked.
#[derive(Clone)]
pub struct NoteRepository {
    pool: SqlitePool,
}

impl NoteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Persists a new note with a server-assigned id and creation timestamp.
    pub async fn create(&self, title: &str, body: &str, project: &str) -> Result<Note, sqlx::Error> {
        let created_at = Utc::now();

        sqlx::query_as::<_, Note>(
            r#"
            INSERT INTO notes (title, body, project, created_at)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id, title, body, project, created_at
            "#,
        )
        .bind(title)
        .bind(body)
        .bind(project)
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
    }

    /// Returns every note in storage order. Callers needing a display order
    /// sort the result themselves.
    pub async fn list_all(&self) -> Result<Vec<Note>, sqlx::Error> {
        sqlx::query_as::<_, Note>(
            r#"
            SELECT id, title, body, project, created_at
            FROM notes
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    /// Returns notes whose project tag exactly equals the argument,
    /// case-sensitively.
    pub async fn list_by_project(&self, project: &str) -> Result<Vec<Note>, sqlx::Error> {
        sqlx::query_as::<_, Note>(
            r#"
            SELECT id, title, body, project, created_at
            FROM notes
            WHERE project = ?1
            "#,
        )
        .bind(project)
        .fetch_all(&self.pool)
        .await
    }

    pub async fn count_all(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM notes")
            .fetch_one(&self.pool)
            .await
    }
}
