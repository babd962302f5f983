// src/models/mod.rs
// DOCUMENTATION: Models module organization
// PURPOSE: Re-export model components

pub mod article;
pub mod author;

pub use article::*;
pub use author::*;
