//! Application state shared across handlers

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::templates::Templates;
use crate::todos::TodoSource;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    pool: SqlitePool,
    templates: Templates,
    todos: Arc<dyn TodoSource>,
}

impl AppState {
    pub fn new(pool: SqlitePool, templates: Templates, todos: Arc<dyn TodoSource>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                pool,
                templates,
                todos,
            }),
        }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.inner.pool
    }

    pub fn templates(&self) -> &Templates {
        &self.inner.templates
    }

    pub fn todos(&self) -> &dyn TodoSource {
        self.inner.todos.as_ref()
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> Self {
        state.pool().clone()
    }
}
