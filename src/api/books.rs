//! Book pages

use axum::{
    extract::State,
    response::{Html, Response},
};
use serde_json::json;

use super::{redirect, FormOrJson, RecordId};
use crate::{error::AppResult, models::BookForm, views, AppState};

const LIST: &str = "/books";

/// List all books with their author resolved
pub async fn list_books(State(state): State<AppState>) -> AppResult<Html<String>> {
    let books = state.services.catalog.list_books().await?;
    state
        .views
        .render(views::BOOKS, &json!({"title": "Livres", "books": books}))
}

/// Creation form offering every author as a choice
pub async fn new_book(State(state): State<AppState>) -> AppResult<Html<String>> {
    let authors = state.services.catalog.list_authors().await?;
    state.views.render(
        views::NEW_BOOK,
        &json!({
            "title": "Nouveau livre",
            "authors": views::author_choices(&authors, None),
        }),
    )
}

pub async fn create_book(
    State(state): State<AppState>,
    FormOrJson(form): FormOrJson<BookForm>,
) -> AppResult<Response> {
    state.services.catalog.create_book(form).await?;
    Ok(redirect(LIST))
}

/// Edition form pre-filled with the stored book and its current author selected
pub async fn edit_book(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<Html<String>> {
    let book = state.services.catalog.get_book(id).await?;
    let authors = state.services.catalog.list_authors().await?;
    let choices = views::author_choices(&authors, book.book.author_id);

    state.views.render(
        views::EDIT_BOOK,
        &json!({"title": "Modifier un livre", "book": book, "authors": choices}),
    )
}

pub async fn update_book(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    FormOrJson(form): FormOrJson<BookForm>,
) -> AppResult<Response> {
    state.services.catalog.update_book(id, form).await?;
    Ok(redirect(LIST))
}

pub async fn delete_book(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<Response> {
    state.services.catalog.delete_book(id).await?;
    Ok(redirect(LIST))
}
