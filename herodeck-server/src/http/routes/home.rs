//! Home page

use axum::{extract::State, response::Html, routing::get, Router};

use crate::http::error::ApiError;
use crate::models::{random_people, PEOPLE_PER_PAGE};
use crate::state::AppState;
use crate::templates::{HomePage, SOMETHING_HERE};

/// GET / - fetch the todo, generate people, render HTML
async fn home(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let todos = state.todos().fetch().await?;
    let people = random_people(PEOPLE_PER_PAGE);

    let html = state.templates().render_home(&HomePage {
        something_here: SOMETHING_HERE,
        people: &people,
        todos: &todos,
    })?;

    Ok(Html(html))
}

/// Home routes
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(home))
}
