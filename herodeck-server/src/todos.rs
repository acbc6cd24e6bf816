//! External todo fetcher
//!
//! One GET per home page view against a fixed JSON endpoint. The body is
//! handed to the template untouched.
//!
//! Note: the endpoint returns a single todo object, not a list, and the
//! payload is not mapped onto [`Todo`]. Callers get whatever JSON the
//! upstream sent.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default todo endpoint
pub const DEFAULT_TODO_URL: &str = "https://jsonplaceholder.typicode.com/todos/1";

/// Declared shape of an upstream todo
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub title: String,
    pub completed: bool,
}

/// Todo fetch error
#[derive(Debug, thiserror::Error)]
pub enum TodoError {
    #[error("todo request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Source of todo data for the home page
#[async_trait]
pub trait TodoSource: Send + Sync {
    /// Fetch the current todo payload.
    async fn fetch(&self) -> Result<Value, TodoError>;
}

/// Fetches todos over HTTP. No timeout, retry or caching.
#[derive(Debug, Clone)]
pub struct HttpTodoSource {
    client: Client,
    url: String,
}

impl HttpTodoSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), url)
    }

    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for HttpTodoSource {
    fn default() -> Self {
        Self::new(DEFAULT_TODO_URL)
    }
}

#[async_trait]
impl TodoSource for HttpTodoSource {
    async fn fetch(&self) -> Result<Value, TodoError> {
        tracing::debug!(url = %self.url, "fetching todos");

        let payload = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;

        Ok(payload)
    }
}

/// Serves a fixed payload (offline runs and tests)
#[derive(Debug, Clone)]
pub struct FixedTodoSource(pub Value);

#[async_trait]
impl TodoSource for FixedTodoSource {
    async fn fetch(&self) -> Result<Value, TodoError> {
        Ok(self.0.clone())
    }
}
