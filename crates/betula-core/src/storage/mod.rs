//! Storage layer
//!
//! Owns the SQLite file that holds posts and their categories.
//!
//! ## Tables
//!
//! - `Posts` - Post records, ids and creation times assigned by SQLite
//! - `CategoriesToPosts` - Category name to post id associations

pub mod database;
pub mod error;
pub mod schema;

pub use database::{Database, Execution};
pub use error::{StorageError, StorageResult};
pub use schema::{init_schema, needs_init};
