use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::time::Duration;
use tracing::info;

/// Initial schema. `id` rides the SQLite rowid, so assignment is unique and
/// monotonic without any extra bookkeeping.
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS notes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    body TEXT NOT NULL,
    project TEXT NOT NULL,
    created_at TEXT NOT NULL
);
"#;

/// Opens the connection pool for the given database URL.
///
/// Use `sqlite:notes.db?mode=rwc` for an on-disk database created on first
/// run, or `sqlite::memory:` (with a single connection) for tests.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(10))
        .idle_timeout(None)
        .connect(database_url)
        .await
}

/// Creates the notes table if it does not exist yet.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(SCHEMA).execute(pool).await?;
    info!("database schema ready");
    Ok(())
}

/// Cheap liveness probe against the pool.
pub async fn health_check(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn schema_init_is_idempotent() {
        let pool = create_pool("sqlite::memory:", 1).await.unwrap();
        init_schema(&pool).await.unwrap();
        init_schema(&pool).await.unwrap();
        health_check(&pool).await.unwrap();
    }
}
