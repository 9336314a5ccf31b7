//! Project Notes Backend
//!
//! A small note-taking web service built with Rust and Axum. Clients create
//! and list text notes tagged by a free-form `project` string, view an
//! aggregate count, and browse a server-rendered listing page.
//!
//! ## Architecture
//!
//! The application follows a layered architecture:
//!
//! - **Models**: Data structures and request validation
//! - **Repositories**: Data access layer with SQLite
//! - **Handlers**: HTTP request/response handling
//! - **Middleware**: Cross-cutting concerns (rate limiting, request IDs)
//! - **Cache**: In-process TTL cache for the stats response
//! - **Router**: API endpoint routing and middleware composition
//!
//! ## Quick Start
//!
//! ```no_run
//! use project_notes_backend::{app_state::{AppConfig, AppState}, router::create_app_router};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = AppConfig::default();
//!     let state = AppState::new(&config).await?;
//!     let app = create_app_router(state);
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

pub mod app_state;
pub mod cache;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod router;

// Re-export commonly used types
pub use app_state::{AppConfig, AppState};
pub use error::ApiError;
