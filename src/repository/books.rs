//! Books repository

use chrono::NaiveDate;
use sqlx::{FromRow, Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{Author, Book, BookInput, BookWithAuthor},
};

/// Book joined with its (possibly missing) author
const SELECT_WITH_AUTHOR: &str = r#"
    SELECT b.id, b.title, b.author_id, b.summary, b.isbn,
           a.id AS a_id, a.last_name AS a_last_name, a.first_name AS a_first_name,
           a.birth_date AS a_birth_date, a.death_date AS a_death_date
    FROM books b
    LEFT JOIN authors a ON a.id = b.author_id
"#;

#[derive(FromRow)]
struct BookAuthorRow {
    id: Uuid,
    title: Option<String>,
    author_id: Option<Uuid>,
    summary: Option<String>,
    isbn: Option<String>,
    a_id: Option<Uuid>,
    a_last_name: Option<String>,
    a_first_name: Option<String>,
    a_birth_date: Option<NaiveDate>,
    a_death_date: Option<NaiveDate>,
}

impl From<BookAuthorRow> for BookWithAuthor {
    fn from(row: BookAuthorRow) -> Self {
        let author = row.a_id.map(|id| Author {
            id,
            last_name: row.a_last_name,
            first_name: row.a_first_name,
            birth_date: row.a_birth_date,
            death_date: row.a_death_date,
        });

        BookWithAuthor {
            book: Book {
                id: row.id,
                title: row.title,
                author_id: row.author_id,
                summary: row.summary,
                isbn: row.isbn,
            },
            author,
        }
    }
}

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*)::bigint FROM books")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// List all books with their author resolved
    pub async fn list_with_author(&self) -> AppResult<Vec<BookWithAuthor>> {
        let query = format!("{} ORDER BY b.title NULLS LAST, b.id", SELECT_WITH_AUTHOR);
        let rows = sqlx::query_as::<_, BookAuthorRow>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(BookWithAuthor::from).collect())
    }

    /// Get book by ID with its author resolved
    pub async fn get_with_author(&self, id: Uuid) -> AppResult<BookWithAuthor> {
        let query = format!("{} WHERE b.id = $1", SELECT_WITH_AUTHOR);
        sqlx::query_as::<_, BookAuthorRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .map(BookWithAuthor::from)
            .ok_or_else(|| AppError::NotFound(format!("Livre {} introuvable", id)))
    }

    /// Create a book with a freshly generated id
    pub async fn create(&self, data: &BookInput) -> AppResult<Book> {
        let row = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (id, title, author_id, summary, isbn)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&data.title)
        .bind(data.author_id)
        .bind(&data.summary)
        .bind(&data.isbn)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Replace every field of a book. Returns `false` if no book has this id.
    pub async fn update(&self, id: Uuid, data: &BookInput) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE books
            SET title = $1, author_id = $2, summary = $3, isbn = $4
            WHERE id = $5
            "#,
        )
        .bind(&data.title)
        .bind(data.author_id)
        .bind(&data.summary)
        .bind(&data.isbn)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            tracing::debug!("Book {} already absent, nothing deleted", id);
        }
        Ok(())
    }
}
