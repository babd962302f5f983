// src/db/cursor.rs
// DOCUMENTATION: Pagination cursors for article fetches
// PURPOSE: Convert between created_at instants and opaque cursor strings

use crate::errors::RepositoryError;
use chrono::{DateTime, SecondsFormat, Utc};

/// Encode a creation instant as a cursor (RFC 3339, microseconds, UTC)
pub fn encode_cursor(created_at: &DateTime<Utc>) -> String {
    created_at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Decode a cursor produced by encode_cursor
pub fn decode_cursor(cursor: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(cursor)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| {
            log::warn!("Rejected cursor {:?}: {}", cursor, e);
            RepositoryError::InvalidCursor(cursor.to_string())
        })
}
