//! Storage error handling
//!
//! Provides typed errors for storage operations with descriptive messages.
//! Raw SQLite errors are classified so callers can tell a constraint
//! violation from an unusable database.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open the database file
    #[error("Failed to open database '{path}': {source}")]
    Connection {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Failed to create the directory holding the database
    #[error("Failed to create data directory '{path}': {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A write violated a schema constraint
    #[error("Constraint violation: {0}")]
    Constraint(#[source] rusqlite::Error),

    /// The post insert did not yield an identifier
    #[error("post could not be created")]
    PostNotCreated,

    /// Any other SQLite error
    #[error("Database error: {0}")]
    Database(#[source] rusqlite::Error),
}

impl StorageError {
    /// Classify a SQLite error
    pub fn from_sqlite(error: rusqlite::Error) -> Self {
        if is_constraint_violation(&error) {
            StorageError::Constraint(error)
        } else {
            StorageError::Database(error)
        }
    }

    /// Check if this error is a constraint violation
    pub fn is_constraint(&self) -> bool {
        matches!(self, StorageError::Constraint(_))
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(error: rusqlite::Error) -> Self {
        Self::from_sqlite(error)
    }
}

fn is_constraint_violation(error: &rusqlite::Error) -> bool {
    match error {
        rusqlite::Error::SqliteFailure(err, _) => {
            err.code == rusqlite::ErrorCode::ConstraintViolation
        }
        _ => false,
    }
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;
