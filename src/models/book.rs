//! Book model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::{author::Author, form};
use crate::error::AppResult;

/// Book as stored: the author is only referenced by id
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Book {
    pub id: Uuid,
    pub title: Option<String>,
    /// Not checked against existing authors; may dangle
    pub author_id: Option<Uuid>,
    pub summary: Option<String>,
    pub isbn: Option<String>,
}

/// Book with its author reference resolved for display.
///
/// `author` is `None` when the book has no reference or when the referenced
/// author no longer exists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookWithAuthor {
    #[serde(flatten)]
    pub book: Book,
    pub author: Option<Author>,
}

/// Book form as submitted by the create and edit pages
#[derive(Debug, Default, Deserialize)]
pub struct BookForm {
    #[serde(rename = "titre", default, deserialize_with = "form::lenient_text")]
    pub title: Option<String>,
    /// Author id, blank for none
    #[serde(rename = "auteur")]
    pub author: Option<String>,
    #[serde(rename = "resume", default, deserialize_with = "form::lenient_text")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "form::lenient_text")]
    pub isbn: Option<String>,
}

/// Every writable book field; used for inserts and full overwrites
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookInput {
    pub title: Option<String>,
    pub author_id: Option<Uuid>,
    pub summary: Option<String>,
    pub isbn: Option<String>,
}

impl BookForm {
    pub fn into_input(self) -> AppResult<BookInput> {
        Ok(BookInput {
            title: form::text(self.title),
            author_id: form::reference("auteur", self.author)?,
            summary: form::text(self.summary),
            isbn: form::text(self.isbn),
        })
    }
}

impl BookInput {
    pub fn into_book(self, id: Uuid) -> Book {
        Book {
            id,
            title: self.title,
            author_id: self.author_id,
            summary: self.summary,
            isbn: self.isbn,
        }
    }
}
