//! Authors repository

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{Author, AuthorInput},
};

#[derive(Clone)]
pub struct AuthorsRepository {
    pool: Pool<Postgres>,
}

impl AuthorsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*)::bigint FROM authors")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// List all authors
    pub async fn list(&self) -> AppResult<Vec<Author>> {
        let rows = sqlx::query_as::<_, Author>(
            "SELECT * FROM authors ORDER BY last_name NULLS LAST, first_name NULLS LAST, id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get author by ID
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<Author> {
        sqlx::query_as::<_, Author>("SELECT * FROM authors WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Auteur {} introuvable", id)))
    }

    /// Create an author with a freshly generated id
    pub async fn create(&self, data: &AuthorInput) -> AppResult<Author> {
        let row = sqlx::query_as::<_, Author>(
            r#"
            INSERT INTO authors (id, last_name, first_name, birth_date, death_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&data.last_name)
        .bind(&data.first_name)
        .bind(data.birth_date)
        .bind(data.death_date)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Replace every field of an author. Returns `false` if no author has this id.
    pub async fn update(&self, id: Uuid, data: &AuthorInput) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE authors
            SET last_name = $1, first_name = $2, birth_date = $3, death_date = $4
            WHERE id = $5
            "#,
        )
        .bind(&data.last_name)
        .bind(&data.first_name)
        .bind(data.birth_date)
        .bind(data.death_date)
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete an author. Books referencing it are left untouched.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            tracing::debug!("Author {} already absent, nothing deleted", id);
        }
        Ok(())
    }
}
