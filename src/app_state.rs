use crate::cache::ResponseCache;
use crate::database;
use crate::middleware::rate_limit::RateLimiter;
use crate::repositories::NoteRepository;
use anyhow::Result;
use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::Duration;

/// Shared application context, constructed once at startup and injected into
/// handlers through `Router::with_state`. Nothing in here is a process-wide
/// singleton.
#[derive(Clone)]
pub struct AppState {
    pub notes: NoteRepository,
    pub rate_limiter: Arc<RateLimiter>,
    pub stats_cache: Arc<ResponseCache>,
    pub pool: SqlitePool,
}

impl AppState {
    /// Opens the database per `config` and wires the full context.
    pub async fn new(config: &AppConfig) -> Result<Self> {
        let pool = database::create_pool(&config.database_url, config.database_max_connections).await?;
        database::init_schema(&pool).await?;
        Ok(Self::with_pool(pool, config))
    }

    /// Wires the context around an already-initialized pool. Tests use this
    /// with an in-memory database.
    pub fn with_pool(pool: SqlitePool, config: &AppConfig) -> Self {
        let notes = NoteRepository::new(pool.clone());
        let rate_limiter = Arc::new(RateLimiter::new(
            config.rate_limit_max_requests,
            Duration::from_secs(config.rate_limit_window_secs),
        ));
        let stats_cache = Arc::new(ResponseCache::new(Duration::from_secs(
            config.stats_cache_ttl_secs,
        )));

        Self {
            notes,
            rate_limiter,
            stats_cache,
            pool,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub server_host: String,
    pub server_port: u16,
    pub rate_limit_max_requests: usize,
    pub rate_limit_window_secs: u64,
    pub stats_cache_ttl_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: env_or("DATABASE_URL", "sqlite:notes.db?mode=rwc"),
            database_max_connections: env_or("DATABASE_MAX_CONNECTIONS", "5")
                .parse()
                .unwrap_or(5),
            server_host: env_or("SERVER_HOST", "0.0.0.0"),
            server_port: env_or("SERVER_PORT", "8000").parse().unwrap_or(8000),
            rate_limit_max_requests: env_or("RATE_LIMIT_MAX_REQUESTS", "5").parse().unwrap_or(5),
            rate_limit_window_secs: env_or("RATE_LIMIT_WINDOW_SECS", "60").parse().unwrap_or(60),
            stats_cache_ttl_secs: env_or("STATS_CACHE_TTL_SECS", "60").parse().unwrap_or(60),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
