// src/db/mod.rs
// DOCUMENTATION: Database module organization
// PURPOSE: Re-export database components

pub mod article_repository;
pub mod author_repository;
pub mod cursor;
pub mod repository;

pub use article_repository::*;
pub use author_repository::*;
pub use cursor::*;
pub use repository::*;
