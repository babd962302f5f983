// src/db/article_repository.rs
// DOCUMENTATION: Article database operations
// PURPOSE: Handle CRUD operations and cursor paging for articles

use crate::db::cursor::{decode_cursor, encode_cursor};
use crate::db::ArticleRepository;
use crate::errors::{ensure_single_row, RepositoryError};
use crate::models::Article;
use async_trait::async_trait;
use sqlx::PgPool;

/// ArticleRepository backed by PostgreSQL
pub struct PgArticleRepository {
    pool: PgPool,
}

impl PgArticleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ArticleRepository for PgArticleRepository {
    /// DOCUMENTATION: Articles sharing a created_at with the last row of a
    /// page are skipped by the next page, since the cursor is exclusive
    async fn fetch(
        &self,
        cursor: Option<&str>,
        num: i64,
    ) -> Result<(Vec<Article>, Option<String>), RepositoryError> {
        if num <= 0 {
            return Ok((Vec::new(), None));
        }

        let query = match cursor {
            Some(c) => sqlx::query_as::<_, Article>(
                r#"
                    SELECT id, title, content, author_id, created_at, updated_at
                    FROM article
                    WHERE created_at > $1
                    ORDER BY created_at ASC
                    LIMIT $2
                    "#,
            )
            .bind(decode_cursor(c)?)
            .bind(num),
            None => sqlx::query_as::<_, Article>(
                r#"
                    SELECT id, title, content, author_id, created_at, updated_at
                    FROM article
                    ORDER BY created_at ASC
                    LIMIT $1
                    "#,
            )
            .bind(num),
        };

        let articles = query.fetch_all(&self.pool).await.map_err(|e| {
            log::error!("Failed to fetch articles: {}", e);
            RepositoryError::Database(e)
        })?;

        let next_cursor = articles.last().map(|a| encode_cursor(&a.created_at));
        Ok((articles, next_cursor))
    }

    async fn get_by_id(&self, id: i64) -> Result<Article, RepositoryError> {
        let article = sqlx::query_as::<_, Article>(
            r#"
            SELECT id, title, content, author_id, created_at, updated_at
            FROM article
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            log::error!("Database error fetching article {}: {}", id, e);
            RepositoryError::Database(e)
        })?
        .ok_or_else(|| {
            log::warn!("Article not found: {}", id);
            RepositoryError::not_found("Article", id)
        })?;

        Ok(article)
    }

    async fn get_by_title(&self, title: &str) -> Result<Article, RepositoryError> {
        sqlx::query_as::<_, Article>(
            r#"
            SELECT id, title, content, author_id, created_at, updated_at
            FROM article
            WHERE title = $1
            ORDER BY id ASC
            LIMIT 1
            "#,
        )
        .bind(title)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            log::error!("Database error fetching article titled {:?}: {}", title, e);
            RepositoryError::Database(e)
        })?
        .ok_or_else(|| {
            log::warn!("Article not found with title: {:?}", title);
            RepositoryError::not_found("Article", title)
        })
    }

    async fn store(&self, article: &mut Article) -> Result<(), RepositoryError> {
        let inserted: (i64,) = sqlx::query_as(
            r#"
            INSERT INTO article (title, content, author_id, updated_at, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&article.title)
        .bind(&article.content)
        .bind(article.author_id)
        .bind(article.updated_at)
        .bind(article.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            log::error!("Failed to create article: {}", e);
            RepositoryError::Database(e)
        })?;

        article.id = inserted.0;
        log::info!("Created article with id: {}", article.id);
        Ok(())
    }

    async fn update(&self, article: &Article) -> Result<(), RepositoryError> {
        let rows = sqlx::query(
            r#"
            UPDATE article
            SET title = $1,
                content = $2,
                author_id = $3,
                updated_at = $4
            WHERE id = $5
            "#,
        )
        .bind(&article.title)
        .bind(&article.content)
        .bind(article.author_id)
        .bind(article.updated_at)
        .bind(article.id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            log::error!("Update failed for article {}: {}", article.id, e);
            RepositoryError::Database(e)
        })?
        .rows_affected();

        ensure_single_row(rows).map_err(|e| {
            log::warn!("Update of article {}: {}", article.id, e);
            e
        })?;

        log::info!("Updated article: {}", article.id);
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        let rows = sqlx::query("DELETE FROM article WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                log::error!("Delete failed for article {}: {}", id, e);
                RepositoryError::Database(e)
            })?
            .rows_affected();

        ensure_single_row(rows).map_err(|e| {
            log::warn!("Delete of article {}: {}", id, e);
            e
        })?;

        log::info!("Deleted article: {}", id);
        Ok(())
    }
}
