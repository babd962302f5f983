// src/lib.rs
// DOCUMENTATION: Crate root
// PURPOSE: Data-access layer mapping authors and articles to PostgreSQL rows

pub mod config;
pub mod db;
pub mod errors;
pub mod models;

pub use db::{ArticleRepository, AuthorRepository, PgArticleRepository, PgAuthorRepository};
pub use errors::RepositoryError;
pub use models::{Article, Author};
