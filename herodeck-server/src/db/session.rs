//! Per-request database session
//!
//! A [`Session`] is a transaction opened when a handler extracts it.
//! Handlers that write call [`Session::commit`]; on any other exit path the
//! transaction is rolled back when dropped and the connection goes back to
//! the pool.

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use sqlx::{Sqlite, SqliteConnection, SqlitePool, Transaction};

use super::repos::DbError;
use crate::http::error::ApiError;

/// Request-scoped transaction
pub struct Session(Transaction<'static, Sqlite>);

impl Session {
    /// Begin a session on the given pool.
    pub async fn begin(pool: &SqlitePool) -> Result<Self, DbError> {
        Ok(Self(pool.begin().await?))
    }

    /// Connection for repositories to run on.
    pub fn conn(&mut self) -> &mut SqliteConnection {
        &mut self.0
    }

    /// Commit everything done in this session.
    pub async fn commit(self) -> Result<(), DbError> {
        self.0.commit().await?;
        Ok(())
    }
}

impl<S> FromRequestParts<S> for Session
where
    SqlitePool: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let pool = SqlitePool::from_ref(state);
        Ok(Self::begin(&pool).await?)
    }
}
