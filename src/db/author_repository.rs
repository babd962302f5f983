// src/db/author_repository.rs
// DOCUMENTATION: Author database operations
// PURPOSE: Map author rows to Author records

use crate::db::AuthorRepository;
use crate::errors::RepositoryError;
use crate::models::Author;
use async_trait::async_trait;
use sqlx::PgPool;

/// AuthorRepository backed by PostgreSQL
pub struct PgAuthorRepository {
    pool: PgPool,
}

impl PgAuthorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthorRepository for PgAuthorRepository {
    async fn get_by_id(&self, id: i64) -> Result<Author, RepositoryError> {
        let author = sqlx::query_as::<_, Author>(
            r#"
            SELECT id, name, created_at, updated_at
            FROM author
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            log::error!("Database error fetching author {}: {}", id, e);
            RepositoryError::Database(e)
        })?
        .ok_or_else(|| {
            log::warn!("Author not found: {}", id);
            RepositoryError::not_found("Author", id)
        })?;

        Ok(author)
    }

    async fn store(&self, author: &mut Author) -> Result<(), RepositoryError> {
        let inserted: (i64,) = sqlx::query_as(
            r#"
            INSERT INTO author (name, created_at, updated_at)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&author.name)
        .bind(author.created_at)
        .bind(author.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            log::error!("Failed to create author: {}", e);
            RepositoryError::Database(e)
        })?;

        author.id = inserted.0;
        log::info!("Created author with id: {}", author.id);
        Ok(())
    }
}
