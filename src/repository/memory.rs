//! In-memory `CatalogStore` used by router tests

use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use super::CatalogStore;
use crate::{
    error::{AppError, AppResult},
    models::{Author, AuthorInput, Book, BookInput, BookWithAuthor},
};

#[derive(Default)]
pub struct MemoryStore {
    authors: Mutex<Vec<Author>>,
    books: Mutex<Vec<Book>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn authors(&self) -> Vec<Author> {
        self.authors.lock().unwrap().clone()
    }

    pub fn books(&self) -> Vec<Book> {
        self.books.lock().unwrap().clone()
    }

    fn resolve(&self, book: Book) -> BookWithAuthor {
        let author = book.author_id.and_then(|author_id| {
            self.authors
                .lock()
                .unwrap()
                .iter()
                .find(|a| a.id == author_id)
                .cloned()
        });
        BookWithAuthor { book, author }
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }

    async fn authors_count(&self) -> AppResult<i64> {
        Ok(self.authors.lock().unwrap().len() as i64)
    }

    async fn authors_list(&self) -> AppResult<Vec<Author>> {
        Ok(self.authors())
    }

    async fn authors_get(&self, id: Uuid) -> AppResult<Author> {
        self.authors()
            .into_iter()
            .find(|a| a.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Auteur {} introuvable", id)))
    }

    async fn authors_create(&self, data: &AuthorInput) -> AppResult<Author> {
        let author = data.clone().into_author(Uuid::new_v4());
        self.authors.lock().unwrap().push(author.clone());
        Ok(author)
    }

    async fn authors_update(&self, id: Uuid, data: &AuthorInput) -> AppResult<bool> {
        let mut authors = self.authors.lock().unwrap();
        match authors.iter_mut().find(|a| a.id == id) {
            Some(slot) => {
                *slot = data.clone().into_author(id);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn authors_delete(&self, id: Uuid) -> AppResult<()> {
        self.authors.lock().unwrap().retain(|a| a.id != id);
        Ok(())
    }

    async fn books_count(&self) -> AppResult<i64> {
        Ok(self.books.lock().unwrap().len() as i64)
    }

    async fn books_list_with_author(&self) -> AppResult<Vec<BookWithAuthor>> {
        Ok(self.books().into_iter().map(|b| self.resolve(b)).collect())
    }

    async fn books_get_with_author(&self, id: Uuid) -> AppResult<BookWithAuthor> {
        self.books()
            .into_iter()
            .find(|b| b.id == id)
            .map(|b| self.resolve(b))
            .ok_or_else(|| AppError::NotFound(format!("Livre {} introuvable", id)))
    }

    async fn books_create(&self, data: &BookInput) -> AppResult<Book> {
        let book = data.clone().into_book(Uuid::new_v4());
        self.books.lock().unwrap().push(book.clone());
        Ok(book)
    }

    async fn books_update(&self, id: Uuid, data: &BookInput) -> AppResult<bool> {
        let mut books = self.books.lock().unwrap();
        match books.iter_mut().find(|b| b.id == id) {
            Some(slot) => {
                *slot = data.clone().into_book(id);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn books_delete(&self, id: Uuid) -> AppResult<()> {
        self.books.lock().unwrap().retain(|b| b.id != id);
        Ok(())
    }
}
