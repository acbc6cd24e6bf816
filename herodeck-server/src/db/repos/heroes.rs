//! Hero repository
//!
//! - create: INSERT ... RETURNING, id assigned by SQLite
//! - list: plain LIMIT/OFFSET in store order
//! - delete: single DELETE, absence detected from rows affected

use sqlx::SqliteConnection;

use crate::models::{Hero, HeroCreate, ListWindow};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

/// Hero repository over one session's connection
pub struct HeroRepo<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> HeroRepo<'c> {
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        Self { conn }
    }

    /// Insert a hero and return the stored row with its new id.
    pub async fn create(&mut self, hero: &HeroCreate) -> Result<Hero, DbError> {
        let hero = sqlx::query_as::<_, Hero>(
            r#"
            INSERT INTO hero (name, age, secret_name)
            VALUES (?, ?, ?)
            RETURNING id, name, age, secret_name
            "#,
        )
        .bind(&hero.name)
        .bind(hero.age)
        .bind(&hero.secret_name)
        .fetch_one(&mut *self.conn)
        .await?;

        tracing::debug!(hero_id = hero.id, "hero created");
        Ok(hero)
    }

    /// List heroes in store order, skipping `offset` and returning at most `limit`.
    pub async fn list(&mut self, window: ListWindow) -> Result<Vec<Hero>, DbError> {
        let heroes = sqlx::query_as::<_, Hero>(
            r#"
            SELECT id, name, age, secret_name
            FROM hero
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(window.limit())
        .bind(window.offset())
        .fetch_all(&mut *self.conn)
        .await?;

        tracing::debug!(
            offset = window.offset(),
            limit = window.limit(),
            returned = heroes.len(),
            "heroes listed"
        );
        Ok(heroes)
    }

    /// Get a single hero by id.
    pub async fn get(&mut self, id: i64) -> Result<Hero, DbError> {
        sqlx::query_as::<_, Hero>("SELECT id, name, age, secret_name FROM hero WHERE id = ?")
            .bind(id)
            .fetch_optional(&mut *self.conn)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Delete a hero by id. Absent ids leave the table untouched.
    pub async fn delete(&mut self, id: i64) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM hero WHERE id = ?")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }

        tracing::debug!(hero_id = id, "hero deleted");
        Ok(())
    }
}

fn not_found(id: i64) -> DbError {
    DbError::NotFound {
        resource: "Hero",
        id: id.to_string(),
    }
}
