//! Repository implementations for database access
//!
//! Repositories borrow a connection rather than the pool, so every
//! operation runs inside the caller's request session.

pub mod heroes;

pub use heroes::{DbError, HeroRepo};
