use crate::app_state::AppState;
use crate::error::ApiError;
use axum::extract::{ConnectInfo, Request, State};
use axum::middleware::Next;
use axum::response::Response;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Process-local sliding-log rate limiter.
///
/// Each key keeps the timestamps of its requests inside the trailing window;
/// the nth+1 request within the window is refused until an earlier one rolls
/// off. Keys whose window has fully drained are pruned on the way.
pub struct RateLimiter {
    limit: usize,
    window: Duration,
    hits: Mutex<HashMap<String, Vec<Instant>>>,
}

impl RateLimiter {
    pub fn new(limit: usize, window: Duration) -> Self {
        Self {
            limit,
            window,
            hits: Mutex::new(HashMap::new()),
        }
    }

    /// Consumes one slot for `client_key` if the window has room.
    pub fn allow(&self, client_key: &str) -> bool {
        let now = Instant::now();
        let mut hits = self.hits.lock().unwrap();

        hits.retain(|_, stamps| {
            stamps.retain(|stamp| now.duration_since(*stamp) < self.window);
            !stamps.is_empty()
        });

        let stamps = hits.entry(client_key.to_string()).or_default();
        if stamps.len() >= self.limit {
            return false;
        }
        stamps.push(now);
        true
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(5, Duration::from_secs(60))
    }
}

/// Rate-limiting middleware for the note-creation route.
///
/// Refused requests never reach the handler; the client sees a 429 and may
/// retry once its window rolls forward.
pub async fn create_rate_limit_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let key = client_key(&request);
    if !state.rate_limiter.allow(&key) {
        return Err(ApiError::RateLimited);
    }
    Ok(next.run(request).await)
}

/// Derives the limiter key for a request: the first hop of
/// `X-Forwarded-For` when a proxy supplied one, otherwise the peer address.
fn client_key(request: &Request) -> String {
    if let Some(forwarded) = request
        .headers()
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
    {
        if let Some(ip) = forwarded.split(',').next() {
            let ip = ip.trim();
            if !ip.is_empty() {
                return ip.to_string();
            }
        }
    }

    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
