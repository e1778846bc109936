//! Catalog service: authors and books

use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Author, AuthorForm, Book, BookForm, BookWithAuthor},
    repository::CatalogStore,
};

/// Record counts shown on the home page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    pub author_count: i64,
    pub book_count: i64,
}

#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn CatalogStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    pub async fn ping(&self) -> AppResult<()> {
        self.store.ping().await
    }

    pub async fn dashboard(&self) -> AppResult<Dashboard> {
        Ok(Dashboard {
            author_count: self.store.authors_count().await?,
            book_count: self.store.books_count().await?,
        })
    }

    pub async fn list_authors(&self) -> AppResult<Vec<Author>> {
        self.store.authors_list().await
    }

    pub async fn get_author(&self, id: Uuid) -> AppResult<Author> {
        self.store.authors_get(id).await
    }

    pub async fn create_author(&self, form: AuthorForm) -> AppResult<Author> {
        let input = form.into_input()?;
        let author = self.store.authors_create(&input).await?;
        tracing::info!("Created author id={}", author.id);
        Ok(author)
    }

    /// Replace all fields of an author with the submitted ones.
    /// An unknown id is a no-op.
    pub async fn update_author(&self, id: Uuid, form: AuthorForm) -> AppResult<()> {
        let input = form.into_input()?;
        if self.store.authors_update(id, &input).await? {
            tracing::info!("Updated author id={}", id);
        } else {
            tracing::debug!("Author {} absent, nothing updated", id);
        }
        Ok(())
    }

    /// Delete an author; books that reference it keep a dangling reference
    pub async fn delete_author(&self, id: Uuid) -> AppResult<()> {
        self.store.authors_delete(id).await?;
        tracing::info!("Deleted author id={}", id);
        Ok(())
    }

    pub async fn list_books(&self) -> AppResult<Vec<BookWithAuthor>> {
        self.store.books_list_with_author().await
    }

    pub async fn get_book(&self, id: Uuid) -> AppResult<BookWithAuthor> {
        self.store.books_get_with_author(id).await
    }

    pub async fn create_book(&self, form: BookForm) -> AppResult<Book> {
        let input = form.into_input()?;
        let book = self.store.books_create(&input).await?;
        tracing::info!("Created book id={}", book.id);
        Ok(book)
    }

    /// Replace all fields of a book with the submitted ones.
    /// An unknown id is a no-op.
    pub async fn update_book(&self, id: Uuid, form: BookForm) -> AppResult<()> {
        let input = form.into_input()?;
        if self.store.books_update(id, &input).await? {
            tracing::info!("Updated book id={}", id);
        } else {
            tracing::debug!("Book {} absent, nothing updated", id);
        }
        Ok(())
    }

    pub async fn delete_book(&self, id: Uuid) -> AppResult<()> {
        self.store.books_delete(id).await?;
        tracing::info!("Deleted book id={}", id);
        Ok(())
    }
}
