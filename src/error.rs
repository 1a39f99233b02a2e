//! Error types for wordbank store operations

use thiserror::Error;

/// Failures reported by [`crate::VocabularyStore`] and the listing writer.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("The word \"{0}\" already exists in the database.")]
    DuplicateWord(String),

    #[error("No word with ID {0}")]
    NotFound(i64),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// True for a UNIQUE constraint violation coming out of SQLite.
    pub(crate) fn is_unique_violation(err: &rusqlite::Error) -> bool {
        matches!(
            err,
            rusqlite::Error::SqliteFailure(e, _)
                if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
        )
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
