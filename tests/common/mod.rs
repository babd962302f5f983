// tests/common/mod.rs
// Shared setup for repository tests against PostgreSQL.
//
// Tests run only when TEST_DATABASE_URL is set. Each test gets a
// single-connection pool with temporary author/article tables, so rows never
// leak between tests and nothing needs cleaning up.

#![allow(dead_code)]

use article_repository::{Article, ArticleRepository, Author, AuthorRepository, PgAuthorRepository};
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::env;

const CREATE_AUTHOR: &str = r#"
    CREATE TEMP TABLE author (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL,
        updated_at TIMESTAMPTZ NOT NULL
    )
"#;

const CREATE_ARTICLE: &str = r#"
    CREATE TEMP TABLE article (
        id BIGSERIAL PRIMARY KEY,
        title TEXT NOT NULL,
        content TEXT NOT NULL,
        author_id BIGINT NOT NULL REFERENCES author(id),
        created_at TIMESTAMPTZ NOT NULL,
        updated_at TIMESTAMPTZ NOT NULL
    )
"#;

/// Pool with the schema in place, or None when no test database is configured
pub async fn test_pool() -> Option<PgPool> {
    dotenv::dotenv().ok();
    let _ = env_logger::builder().is_test(true).try_init();

    let Ok(url) = env::var("TEST_DATABASE_URL") else {
        log::warn!("TEST_DATABASE_URL not set - skipping database test");
        return None;
    };

    // Temporary tables live on one connection, so the pool must never open a second
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&url)
        .await
        .expect("connect to TEST_DATABASE_URL");

    sqlx::query(CREATE_AUTHOR)
        .execute(&pool)
        .await
        .expect("create author table");
    sqlx::query(CREATE_ARTICLE)
        .execute(&pool)
        .await
        .expect("create article table");

    Some(pool)
}

/// Store an author and return it with its generated id
pub async fn seed_author(pool: &PgPool, name: &str) -> Author {
    let mut author = Author::new(name);
    PgAuthorRepository::new(pool.clone())
        .store(&mut author)
        .await
        .expect("store author");
    author
}

/// Store an article and return it with its generated id
pub async fn seed_article<R: ArticleRepository>(repo: &R, mut article: Article) -> Article {
    repo.store(&mut article).await.expect("store article");
    article
}

pub async fn count_articles(pool: &PgPool) -> i64 {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM article")
        .fetch_one(pool)
        .await
        .expect("count articles");
    count
}
