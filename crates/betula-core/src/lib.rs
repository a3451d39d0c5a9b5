//! Betula Core Library
//!
//! This crate provides the data layer for Betula, a personal bookmark
//! manager. Posts (links with a title, description, visibility and
//! categories) are stored in a single SQLite file.
//!
//! # Quick Start
//!
//! ```text
//! let mut store = Store::open()?;
//!
//! let mut post = Post::new("https://example.com", "Example");
//! post.add_category("tech");
//! let post = store.create_post(post)?;
//! println!("saved as {}", post.id.unwrap());
//! ```
//!
//! # Modules
//!
//! - `store`: Post creation and queries (main entry point)
//! - `models`: Data structures for posts, categories and visibility
//! - `storage`: SQLite connection, schema and errors
//! - `config`: Application configuration

pub mod config;
pub mod models;
pub mod storage;
pub mod store;

pub use config::Config;
pub use models::{Category, Post, Visibility};
pub use storage::{Database, Execution, StorageError, StorageResult};
pub use store::Store;
