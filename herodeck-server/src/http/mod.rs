//! HTTP server layer
//!
//! Axum server with:
//! - CORS (localhost only by default)
//! - Request tracing
//! - Static files under `/static`
//! - Graceful shutdown
//! - JSON error responses

pub mod server;
pub mod error;
pub mod extractors;
pub mod routes;

#[cfg(test)]
pub(crate) mod test_support;

pub use server::{create_router, run_server, ServerConfig, ServerError};
pub use error::ApiError;
