//! Offset/limit window for hero listings

use serde::Deserialize;

use super::ValidationError;

/// Maximum rows returned by one list call
pub const MAX_LIMIT: i64 = 100;

/// Rows returned when no limit is given
pub const DEFAULT_LIMIT: i64 = 100;

/// Validated list window.
///
/// Unlike page-based pagination this never clamps: a limit above
/// [`MAX_LIMIT`] is an error the caller has to see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListWindow {
    offset: i64,
    limit: i64,
}

impl ListWindow {
    /// Create a window, rejecting negative values and limits above 100.
    pub fn new(offset: i64, limit: i64) -> Result<Self, ValidationError> {
        if offset < 0 {
            return Err(ValidationError::Negative { field: "offset" });
        }
        if limit < 0 {
            return Err(ValidationError::Negative { field: "limit" });
        }
        if limit > MAX_LIMIT {
            return Err(ValidationError::TooLarge {
                field: "limit",
                max: MAX_LIMIT,
            });
        }

        Ok(Self { offset, limit })
    }

    /// SQL OFFSET value.
    pub fn offset(&self) -> i64 {
        self.offset
    }

    /// SQL LIMIT value.
    pub fn limit(&self) -> i64 {
        self.limit
    }
}

impl Default for ListWindow {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Query parameters for hero listings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

impl TryFrom<ListParams> for ListWindow {
    type Error = ValidationError;

    fn try_from(params: ListParams) -> Result<Self, Self::Error> {
        Self::new(
            params.offset.unwrap_or(0),
            params.limit.unwrap_or(DEFAULT_LIMIT),
        )
    }
}
