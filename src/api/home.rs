//! Home page

use axum::{extract::State, response::Html};
use serde_json::json;

use crate::{error::AppResult, views, AppState};

/// Dashboard with the number of authors and books
pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    let dashboard = state.services.catalog.dashboard().await?;

    state.views.render(
        views::INDEX,
        &json!({
            "title": "Bibliothèque",
            "author_count": dashboard.author_count,
            "book_count": dashboard.book_count,
        }),
    )
}
