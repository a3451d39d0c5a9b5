//! Post storage interface
//!
//! The `Store` owns the database handle and implements post creation:
//! the post row is inserted first, then its category associations are
//! written as one batch keyed by the new post id.
//!
//! The two steps commit separately. If the category batch fails, the post
//! row stays in place without categories.
//!
//! ## Usage
//!
//! ```ignore
//! let mut store = Store::open()?;
//!
//! let mut post = Post::new("https://example.com", "Example");
//! post.add_category("tech");
//! let post = store.create_post(post)?;
//! ```

use rusqlite::params;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::models::{Category, Post, Visibility};
use crate::storage::{Database, StorageError, StorageResult};

const INSERT_POST: &str =
    "INSERT INTO Posts (URL, Title, Description, Visibility) VALUES (?, ?, ?, ?)";

const INSERT_CATEGORY: &str = "INSERT INTO CategoriesToPosts (CatName, PostID) VALUES (?, ?)";

/// Storage interface for Betula posts
pub struct Store {
    db: Database,
}

impl Store {
    /// Open the store at the configured database path
    pub fn open() -> anyhow::Result<Self> {
        let config = Config::load()?;
        Ok(Self::open_with_config(&config)?)
    }

    /// Open the store with a specific configuration
    pub fn open_with_config(config: &Config) -> StorageResult<Self> {
        Ok(Self::new(Database::open(&config.database)?))
    }

    /// Open a store backed by an in-memory database (for testing)
    pub fn open_in_memory() -> StorageResult<Self> {
        Ok(Self::new(Database::open_in_memory()?))
    }

    /// Wrap an already opened database
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Get access to the underlying database
    pub fn database(&self) -> &Database {
        &self.db
    }

    // ==================== Post Creation ====================

    /// Persist a new post and its categories
    ///
    /// Returns the post with the id assigned by the store. Any id already set
    /// on `post` is ignored. `creation_time` is filled in by the database and
    /// can be read back with [`Store::get_post`].
    pub fn create_post(&mut self, mut post: Post) -> StorageResult<Post> {
        let id = self
            .db
            .execute(
                INSERT_POST,
                params![post.url, post.title, post.description, post.visibility],
            )?
            .last_insert_id
            .ok_or(StorageError::PostNotCreated)?;
        post.id = Some(id);

        if !post.categories.is_empty() {
            if let Err(e) = self.create_categories(&post.categories, id) {
                warn!("Post {} was saved but its categories were not: {}", id, e);
                return Err(e);
            }
        }

        info!("Created post {} with {} categories", id, post.categories.len());
        Ok(post)
    }

    /// Associate categories with an existing post, as one batch
    pub fn create_categories(
        &mut self,
        categories: &[Category],
        post_id: i64,
    ) -> StorageResult<usize> {
        debug!(
            "Writing {} category associations for post {}",
            categories.len(),
            post_id
        );
        self.db.execute_many(
            INSERT_CATEGORY,
            categories.iter().map(|c| (c.name.as_str(), post_id)),
        )
    }

    // ==================== Queries ====================

    /// Get a post by ID (includes categories)
    pub fn get_post(&self, id: i64) -> StorageResult<Option<Post>> {
        let mut stmt = self.db.connection().prepare(
            "SELECT ID, URL, Title, Description, Visibility, CreationTime FROM Posts WHERE ID = ?",
        )?;

        let mut rows = stmt.query(params![id])?;

        let row = match rows.next()? {
            Some(row) => row,
            None => return Ok(None),
        };

        let visibility: Visibility = row.get(4)?;
        Ok(Some(Post {
            id: Some(row.get(0)?),
            url: row.get(1)?,
            title: row.get(2)?,
            description: row.get(3)?,
            visibility,
            categories: self.categories_for_post(id)?,
            creation_time: Some(row.get(5)?),
        }))
    }

    /// Get the categories of a post in the order they were written
    pub fn categories_for_post(&self, post_id: i64) -> StorageResult<Vec<Category>> {
        let mut stmt = self
            .db
            .connection()
            .prepare("SELECT CatName FROM CategoriesToPosts WHERE PostID = ? ORDER BY rowid")?;

        let names = stmt.query_map(params![post_id], |row| row.get::<_, String>(0))?;

        let mut categories = Vec::new();
        for name in names {
            categories.push(Category::new(name?));
        }
        Ok(categories)
    }

    /// Get every category name with the number of posts using it
    pub fn categories_with_counts(&self) -> StorageResult<Vec<Category>> {
        let mut stmt = self.db.connection().prepare(
            r#"
            SELECT CatName, COUNT(DISTINCT PostID)
            FROM CategoriesToPosts
            GROUP BY CatName
            ORDER BY CatName
            "#,
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(Category {
                name: row.get(0)?,
                post_count: row.get(1)?,
            })
        })?;

        let mut categories = Vec::new();
        for category in rows {
            categories.push(category?);
        }
        Ok(categories)
    }

    /// Get count of posts
    pub fn post_count(&self) -> StorageResult<i64> {
        let count = self
            .db
            .connection()
            .query_row("SELECT COUNT(*) FROM Posts", [], |row| row.get(0))?;
        Ok(count)
    }
}
