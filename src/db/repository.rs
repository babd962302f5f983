// src/db/repository.rs
// DOCUMENTATION: Repository interfaces consumed by callers
// PURPOSE: Decouple the service layer from the PostgreSQL implementations

use crate::errors::RepositoryError;
use crate::models::{Article, Author};
use async_trait::async_trait;

/// Data access for authors
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Fetch one author by id
    /// Returns NotFound when no row matches
    async fn get_by_id(&self, id: i64) -> Result<Author, RepositoryError>;

    /// Insert the author and write the generated id back into it
    async fn store(&self, author: &mut Author) -> Result<(), RepositoryError>;
}

/// Data access for articles
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Page through articles in creation order
    /// DOCUMENTATION: Returns up to `num` articles created after `cursor`
    /// together with the cursor of the last one, to resume from
    async fn fetch(
        &self,
        cursor: Option<&str>,
        num: i64,
    ) -> Result<(Vec<Article>, Option<String>), RepositoryError>;

    async fn get_by_id(&self, id: i64) -> Result<Article, RepositoryError>;

    async fn get_by_title(&self, title: &str) -> Result<Article, RepositoryError>;

    /// Insert the article and write the generated id back into it
    async fn store(&self, article: &mut Article) -> Result<(), RepositoryError>;

    /// Overwrite title, content, author and updated_at of an existing article
    /// Fails unless exactly one row was changed
    async fn update(&self, article: &Article) -> Result<(), RepositoryError>;

    /// Remove an article
    /// Fails unless exactly one row was removed
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
