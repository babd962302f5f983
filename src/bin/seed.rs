// src/bin/seed.rs
// Stores one author and one article, then reads the article back.
// Usage: seed <author name> <title> <content>

use anyhow::{bail, Context, Result};
use article_repository::config::{init_db_pool, init_logging, Config};
use article_repository::{
    Article, ArticleRepository, Author, AuthorRepository, PgArticleRepository, PgAuthorRepository,
};
use std::env;
use std::sync::Arc;
use validator::Validate;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();
    init_logging(&config);
    if let Err(e) = config.validate() {
        bail!("Configuration error: {}", e);
    }

    let args: Vec<String> = env::args().skip(1).collect();
    let [name, title, content] = args.as_slice() else {
        bail!("usage: seed <author name> <title> <content>");
    };

    let pool = init_db_pool(&config)
        .await
        .context("failed to connect to database")?;

    let authors: Arc<dyn AuthorRepository> = Arc::new(PgAuthorRepository::new(pool.clone()));
    let articles: Arc<dyn ArticleRepository> = Arc::new(PgArticleRepository::new(pool));

    let mut author = Author::new(name.as_str());
    authors.store(&mut author).await?;

    let mut article = Article::new(title.as_str(), content.as_str(), author.id);
    article.validate().context("invalid article")?;
    articles.store(&mut article).await?;

    let saved = articles.get_by_id(article.id).await?;
    let owner = authors.get_by_id(saved.author_id).await?;
    log::info!(
        "Seeded article {} {:?} by {} ({})",
        saved.id,
        saved.title,
        owner.name,
        saved.created_at
    );

    Ok(())
}
