//! Typed error taxonomy for the taskdeck library.
//!
//! The library surfaces three client-facing failure classes (missing entity,
//! name conflict, invalid input) plus a transparent wrapper for store
//! failures. The command layer converts these into user messages; nothing in
//! the library retries or recovers automatically.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// No task exists with the given id.
    #[error("task {0} not found")]
    TaskNotFound(i64),

    /// No tag exists with the given id.
    #[error("tag {0} not found")]
    TagNotFound(i64),

    /// Tag names are unique; creating a duplicate is a conflict.
    #[error("tag '{0}' already exists")]
    TagExists(String),

    /// Input violated a data-model constraint before reaching the store.
    #[error("{0}")]
    Validation(String),

    /// Store-level failure; the surrounding transaction has rolled back.
    #[error(transparent)]
    Db(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
