// src/models/article.rs

use super::author::now;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Article row
/// DOCUMENTATION: author_id is a foreign key to author.id; the article
/// owns no other entities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, Validate)]
pub struct Article {
    pub id: i64,
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "content is required"))]
    pub content: String,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Unsaved article; id stays 0 until stored
    pub fn new(title: impl Into<String>, content: impl Into<String>, author_id: i64) -> Self {
        let now = now();
        Article {
            id: 0,
            title: title.into(),
            content: content.into(),
            author_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Bump updated_at before saving a modified article
    pub fn touch(&mut self) {
        self.updated_at = now();
    }
}
