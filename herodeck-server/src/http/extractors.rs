//! Custom Axum extractors

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;

use super::error::ApiError;
use crate::models::{ListParams, ListWindow, ValidationError};

/// Extract and validate the `offset`/`limit` query window
pub struct ValidWindow(pub ListWindow);

impl<S> FromRequestParts<S> for ValidWindow
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params): Query<ListParams> = Query::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                ApiError::Validation(ValidationError::InvalidFormat {
                    field: "offset/limit",
                    reason: "must be integers",
                })
            })?;

        let window = ListWindow::try_from(params)?;
        Ok(Self(window))
    }
}
