//! Database layer - connection pool, request sessions and repositories
//!
//! # Design Principles
//!
//! - One pool for the process, handed to handlers through `AppState`
//! - One transaction per request, rolled back unless committed
//! - Single-statement writes, store enforces id uniqueness

pub mod pool;
pub mod repos;
pub mod session;

pub use pool::{create_memory_pool, create_pool, ensure_schema};
pub use repos::*;
pub use session::Session;
