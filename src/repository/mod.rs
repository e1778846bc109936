//! Repository layer for database operations

pub mod authors;
pub mod books;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Author, AuthorInput, Book, BookInput, BookWithAuthor},
};

/// Storage operations used by the catalog.
///
/// Every method is a single round trip to the backing store. Lookups of a
/// missing id fail with `AppError::NotFound`; updates and deletes of a
/// missing id succeed without writing anything.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Check that the store answers
    async fn ping(&self) -> AppResult<()>;

    async fn authors_count(&self) -> AppResult<i64>;
    async fn authors_list(&self) -> AppResult<Vec<Author>>;
    async fn authors_get(&self, id: Uuid) -> AppResult<Author>;
    async fn authors_create(&self, data: &AuthorInput) -> AppResult<Author>;
    /// Overwrite every field of an existing author; `false` when no author has this id
    async fn authors_update(&self, id: Uuid, data: &AuthorInput) -> AppResult<bool>;
    async fn authors_delete(&self, id: Uuid) -> AppResult<()>;

    async fn books_count(&self) -> AppResult<i64>;
    async fn books_list_with_author(&self) -> AppResult<Vec<BookWithAuthor>>;
    async fn books_get_with_author(&self, id: Uuid) -> AppResult<BookWithAuthor>;
    async fn books_create(&self, data: &BookInput) -> AppResult<Book>;
    /// Overwrite every field of an existing book; `false` when no book has this id
    async fn books_update(&self, id: Uuid, data: &BookInput) -> AppResult<bool>;
    async fn books_delete(&self, id: Uuid) -> AppResult<()>;
}

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub authors: authors::AuthorsRepository,
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            authors: authors::AuthorsRepository::new(pool.clone()),
            books: books::BooksRepository::new(pool.clone()),
            pool,
        }
    }
}

#[async_trait]
impl CatalogStore for Repository {
    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    async fn authors_count(&self) -> AppResult<i64> {
        self.authors.count().await
    }

    async fn authors_list(&self) -> AppResult<Vec<Author>> {
        self.authors.list().await
    }

    async fn authors_get(&self, id: Uuid) -> AppResult<Author> {
        self.authors.get_by_id(id).await
    }

    async fn authors_create(&self, data: &AuthorInput) -> AppResult<Author> {
        self.authors.create(data).await
    }

    async fn authors_update(&self, id: Uuid, data: &AuthorInput) -> AppResult<bool> {
        self.authors.update(id, data).await
    }

    async fn authors_delete(&self, id: Uuid) -> AppResult<()> {
        self.authors.delete(id).await
    }

    async fn books_count(&self) -> AppResult<i64> {
        self.books.count().await
    }

    async fn books_list_with_author(&self) -> AppResult<Vec<BookWithAuthor>> {
        self.books.list_with_author().await
    }

    async fn books_get_with_author(&self, id: Uuid) -> AppResult<BookWithAuthor> {
        self.books.get_with_author(id).await
    }

    async fn books_create(&self, data: &BookInput) -> AppResult<Book> {
        self.books.create(data).await
    }

    async fn books_update(&self, id: Uuid, data: &BookInput) -> AppResult<bool> {
        self.books.update(id, data).await
    }

    async fn books_delete(&self, id: Uuid) -> AppResult<()> {
        self.books.delete(id).await
    }
}
