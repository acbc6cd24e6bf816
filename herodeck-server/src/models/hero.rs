//! Hero entity

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Hero row as stored and returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Hero {
    pub id: i64,
    pub name: String,
    pub age: Option<i64>,
    pub secret_name: String,
}

/// Create hero request.
///
/// An `id` in the body is ignored; the store assigns it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HeroCreate {
    pub name: String,
    pub age: Option<i64>,
    pub secret_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_ignores_client_id_and_defaults_age() {
        let input: HeroCreate =
            serde_json::from_str(r#"{"id": 42, "name": "Deadpond", "secret_name": "Dive Wilson"}"#)
                .unwrap();

        assert_eq!(input.name, "Deadpond");
        assert_eq!(input.age, None);
        assert_eq!(input.secret_name, "Dive Wilson");
    }

    #[test]
    fn create_requires_secret_name() {
        let result = serde_json::from_str::<HeroCreate>(r#"{"name": "Deadpond"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn hero_serializes_null_age() {
        let hero = Hero {
            id: 1,
            name: "Rusty-Man".into(),
            age: None,
            secret_name: "Tommy Sharp".into(),
        };

        let value = serde_json::to_value(&hero).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 1,
                "name": "Rusty-Man",
                "age": null,
                "secret_name": "Tommy Sharp"
            })
        );
    }
}
