//! HTML views rendered with Handlebars
//!
//! Templates are embedded in the binary and registered once at startup.

use axum::response::Html;
use handlebars::{Handlebars, TemplateError};
use serde::Serialize;
use uuid::Uuid;

use crate::{error::AppResult, models::Author};

pub const INDEX: &str = "index";
pub const AUTHORS: &str = "authors";
pub const NEW_AUTHOR: &str = "new_author";
pub const EDIT_AUTHOR: &str = "edit_author";
pub const BOOKS: &str = "books";
pub const NEW_BOOK: &str = "new_book";
pub const EDIT_BOOK: &str = "edit_book";

const TEMPLATES: &[(&str, &str)] = &[
    (INDEX, include_str!("../../templates/index.hbs")),
    (AUTHORS, include_str!("../../templates/authors.hbs")),
    (NEW_AUTHOR, include_str!("../../templates/new_author.hbs")),
    (EDIT_AUTHOR, include_str!("../../templates/edit_author.hbs")),
    (BOOKS, include_str!("../../templates/books.hbs")),
    (NEW_BOOK, include_str!("../../templates/new_book.hbs")),
    (EDIT_BOOK, include_str!("../../templates/edit_book.hbs")),
];

const PARTIALS: &[(&str, &str)] = &[
    ("header", include_str!("../../templates/partials/header.hbs")),
    ("footer", include_str!("../../templates/partials/footer.hbs")),
    ("author_fields", include_str!("../../templates/partials/author_fields.hbs")),
    ("book_fields", include_str!("../../templates/partials/book_fields.hbs")),
];

/// One entry of the author drop-down on book forms
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorChoice {
    pub id: Uuid,
    pub name: String,
    pub selected: bool,
}

/// Build the author drop-down, marking the currently referenced author
pub fn author_choices(authors: &[Author], current: Option<Uuid>) -> Vec<AuthorChoice> {
    authors
        .iter()
        .map(|author| AuthorChoice {
            id: author.id,
            name: author.display_name(),
            selected: Some(author.id) == current,
        })
        .collect()
}

pub struct Views {
    registry: Handlebars<'static>,
}

impl Views {
    pub fn new() -> Result<Self, TemplateError> {
        let mut registry = Handlebars::new();

        for (name, source) in PARTIALS {
            registry.register_partial(name, *source)?;
        }
        for (name, source) in TEMPLATES {
            registry.register_template_string(name, *source)?;
        }

        Ok(Self { registry })
    }

    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> AppResult<Html<String>> {
        Ok(Html(self.registry.render(name, data)?))
    }
}
