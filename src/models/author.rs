// src/models/author.rs

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Article author
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Author {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Author {
    /// Unsaved author; id stays 0 until stored
    pub fn new(name: impl Into<String>) -> Self {
        let now = now();
        Author {
            id: 0,
            name: name.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Current time at TIMESTAMPTZ precision (microseconds)
pub(crate) fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}
