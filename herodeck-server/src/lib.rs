//! herodeck-server: hero CRUD over SQLite plus a demo home page
//!
//! Exposes a small JSON API over a single `hero` table, two stateless
//! item echo endpoints, and an HTML home page that renders synthetic
//! people next to a todo fetched from an external API.

pub mod db;
pub mod http;
pub mod models;
pub mod state;
pub mod templates;
pub mod todos;

pub use http::{create_router, run_server, ApiError, ServerConfig, ServerError};
pub use state::AppState;
