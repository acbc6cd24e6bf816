//! Home page rendering with Tera
//!
//! The stock `index.html` is compiled into the binary. A templates
//! directory can replace it as long as it provides `index.html`.

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tera::{Context, Tera};

use crate::models::Person;

/// Template rendered for GET /
pub const INDEX_TEMPLATE: &str = "index.html";

/// Fixed string handed to the home page
pub const SOMETHING_HERE: &str = "I can add string this to template";

const BUILTIN_INDEX: &str = include_str!("../templates/index.html");

/// Template error
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("template error: {0}")]
    Tera(#[from] tera::Error),

    #[error("no index.html in {0}")]
    MissingIndex(String),
}

/// Context for the home page template
#[derive(Debug, Serialize)]
pub struct HomePage<'a> {
    pub something_here: &'a str,
    pub people: &'a [Person],
    pub todos: &'a Value,
}

/// Loaded template set
#[derive(Clone)]
pub struct Templates {
    tera: Arc<Tera>,
}

impl Templates {
    /// Templates shipped with the crate.
    pub fn builtin() -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        tera.add_raw_template(INDEX_TEMPLATE, BUILTIN_INDEX)?;
        Ok(Self {
            tera: Arc::new(tera),
        })
    }

    /// Load every `*.html` under `dir`.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, TemplateError> {
        let dir = dir.as_ref();
        let tera = Tera::new(&format!("{}/**/*.html", dir.display()))?;

        if !tera.get_template_names().any(|name| name == INDEX_TEMPLATE) {
            return Err(TemplateError::MissingIndex(dir.display().to_string()));
        }

        tracing::info!(dir = %dir.display(), "templates loaded");
        Ok(Self {
            tera: Arc::new(tera),
        })
    }

    /// Render the home page.
    pub fn render_home(&self, page: &HomePage<'_>) -> Result<String, TemplateError> {
        let context = Context::from_serialize(page)?;
        Ok(self.tera.render(INDEX_TEMPLATE, &context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::generate_people;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    #[test]
    fn builtin_renders_people_and_todo() {
        let people = generate_people(&mut StdRng::seed_from_u64(1), 3);
        let todos = json!({"userId": 1, "id": 1, "title": "write docs", "completed": false});

        let html = Templates::builtin()
            .unwrap()
            .render_home(&HomePage {
                something_here: SOMETHING_HERE,
                people: &people,
                todos: &todos,
            })
            .unwrap();

        assert!(html.contains(SOMETHING_HERE));
        assert!(html.contains("write docs"));
        for person in &people {
            assert!(html.contains(&format!("data-person-id=\"{}\"", person.id)));
        }
    }

    #[test]
    fn from_dir_uses_custom_index() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(INDEX_TEMPLATE),
            "{{ people | length }} people, {{ something_here }}",
        )
        .unwrap();

        let people = generate_people(&mut StdRng::seed_from_u64(2), 4);
        let html = Templates::from_dir(dir.path())
            .unwrap()
            .render_home(&HomePage {
                something_here: "hi",
                people: &people,
                todos: &Value::Null,
            })
            .unwrap();

        assert_eq!(html, "4 people, hi");
    }

    #[test]
    fn from_dir_without_index_fails() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("other.html"), "nope").unwrap();

        let err = Templates::from_dir(dir.path()).err().unwrap();
        assert!(matches!(err, TemplateError::MissingIndex(_)));
    }
}
