//! Author pages

use axum::{
    extract::State,
    response::{Html, Response},
};
use serde_json::json;

use super::{redirect, FormOrJson, RecordId};
use crate::{error::AppResult, models::AuthorForm, views, AppState};

const LIST: &str = "/authors";

/// List all authors
pub async fn list_authors(State(state): State<AppState>) -> AppResult<Html<String>> {
    let authors = state.services.catalog.list_authors().await?;
    state
        .views
        .render(views::AUTHORS, &json!({"title": "Auteurs", "authors": authors}))
}

/// Empty creation form
pub async fn new_author(State(state): State<AppState>) -> AppResult<Html<String>> {
    state
        .views
        .render(views::NEW_AUTHOR, &json!({"title": "Nouvel auteur"}))
}

pub async fn create_author(
    State(state): State<AppState>,
    FormOrJson(form): FormOrJson<AuthorForm>,
) -> AppResult<Response> {
    state.services.catalog.create_author(form).await?;
    Ok(redirect(LIST))
}

/// Edition form pre-filled with the stored author
pub async fn edit_author(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<Html<String>> {
    let author = state.services.catalog.get_author(id).await?;
    state.views.render(
        views::EDIT_AUTHOR,
        &json!({"title": "Modifier un auteur", "author": author}),
    )
}

pub async fn update_author(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    FormOrJson(form): FormOrJson<AuthorForm>,
) -> AppResult<Response> {
    state.services.catalog.update_author(id, form).await?;
    Ok(redirect(LIST))
}

pub async fn delete_author(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<Response> {
    state.services.catalog.delete_author(id).await?;
    Ok(redirect(LIST))
}
