//! Item shapes for the stateless echo endpoints

use serde::{Deserialize, Serialize};

/// Item request body
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Item {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub is_offer: Option<bool>,
}

/// Optional query for GET /items/{item_id}
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemQuery {
    pub q: Option<String>,
}

/// GET /items/{item_id} response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemEcho {
    pub item_id: i64,
    pub q: Option<String>,
}

/// PUT /items/{item_id} response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemUpdated {
    pub item_name: String,
    pub item_id: i64,
}
