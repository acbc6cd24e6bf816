//! Item echo endpoints - no storage behind them

use axum::{
    extract::{Path, Query},
    routing::get,
    Json, Router,
};

use crate::models::{Item, ItemEcho, ItemQuery, ItemUpdated};
use crate::state::AppState;

/// GET /items/{item_id}?q=
async fn read_item(Path(item_id): Path<i64>, Query(query): Query<ItemQuery>) -> Json<ItemEcho> {
    Json(ItemEcho {
        item_id,
        q: query.q,
    })
}

/// PUT /items/{item_id}
async fn update_item(Path(item_id): Path<i64>, Json(item): Json<Item>) -> Json<ItemUpdated> {
    Json(ItemUpdated {
        item_name: item.name,
        item_id,
    })
}

/// Item routes
pub fn router() -> Router<AppState> {
    Router::new().route("/items/{item_id}", get(read_item).put(update_item))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::http::test_support::{get, send_json, test_app};

    #[tokio::test]
    async fn read_item_echoes_query() {
        let app = test_app().await;

        let (status, body) = get(&app, "/items/5?q=x").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(&body[..], br#"{"item_id":5,"q":"x"}"#);
    }

    #[tokio::test]
    async fn read_item_without_query_is_null() {
        let app = test_app().await;

        let (status, body) = get(&app, "/items/5").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(&body[..], br#"{"item_id":5,"q":null}"#);
    }

    #[tokio::test]
    async fn read_item_rejects_non_integer_id() {
        let app = test_app().await;

        let (status, _) = get(&app, "/items/five").await;
        assert!(status.is_client_error());
    }

    #[tokio::test]
    async fn update_item_echoes_name_and_id() {
        let app = test_app().await;

        let (status, body) = send_json(
            &app,
            "PUT",
            "/items/3",
            r#"{"name": "Hammer", "price": 12.5, "is_offer": true}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(&body[..], br#"{"item_name":"Hammer","item_id":3}"#);
    }

    #[tokio::test]
    async fn update_item_requires_price() {
        let app = test_app().await;

        let (status, _) = send_json(&app, "PUT", "/items/3", r#"{"name": "Hammer"}"#).await;
        assert!(status.is_client_error());
    }
}
