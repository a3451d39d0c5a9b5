//! Data models for Betula
//!
//! Defines the core data structures: Post, Category, and Visibility.
//! Integer codes for visibility only exist at the SQLite boundary.

use chrono::{DateTime, Utc};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};

/// Who can see a post
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Only the owner can see the post
    Private,
    /// Everyone can see the post
    #[default]
    Public,
}

impl Visibility {
    /// Storage code for this visibility
    pub fn code(self) -> i64 {
        match self {
            Visibility::Private => 0,
            Visibility::Public => 1,
        }
    }

    /// Map a storage code back to a visibility
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Visibility::Private),
            1 => Some(Visibility::Public),
            _ => None,
        }
    }

    /// Parse the textual form. Anything but `private` is public.
    pub fn from_name(name: &str) -> Self {
        if name == "private" {
            Visibility::Private
        } else {
            Visibility::Public
        }
    }

    /// Pick the visibility from a "private" flag
    pub fn from_private_flag(private: bool) -> Self {
        if private {
            Visibility::Private
        } else {
            Visibility::Public
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Visibility::Private => "private",
            Visibility::Public => "public",
        }
    }
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ToSql for Visibility {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.code()))
    }
}

impl FromSql for Visibility {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let code = i64::column_result(value)?;
        Visibility::from_code(code).ok_or(FromSqlError::OutOfRange(code))
    }
}

/// A category label attached to posts
///
/// Categories are identified by name only. `post_count` is derived state and
/// stays zero unless the category was loaded through a counting query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub post_count: i64,
}

impl Category {
    /// Create a new category
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            post_count: 0,
        }
    }

    /// Get the category name
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A saved link with metadata
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Post {
    /// Assigned by the store on creation; `None` before that
    pub id: Option<i64>,
    /// The URL, any protocol
    pub url: String,
    /// Name for the link
    pub title: String,
    /// Free-form document, stored as plain text
    pub description: String,
    /// Who can see the post
    pub visibility: Visibility,
    /// Categories in the order they were given
    pub categories: Vec<Category>,
    /// UNIX seconds, assigned by the store on creation
    pub creation_time: Option<i64>,
}

impl Post {
    /// Create a new public post with an empty description
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: None,
            url: url.into(),
            title: title.into(),
            description: String::new(),
            visibility: Visibility::Public,
            categories: Vec::new(),
            creation_time: None,
        }
    }

    /// Update the description
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Update the visibility
    pub fn set_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }

    /// Append a category. Duplicates are kept.
    pub fn add_category(&mut self, category: impl Into<Category>) {
        self.categories.push(category.into());
    }

    /// Set all categories (replacing existing)
    pub fn set_categories(&mut self, categories: Vec<Category>) {
        self.categories = categories;
    }

    /// Whether the store has assigned an id yet
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    /// Creation time as a timestamp
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.creation_time
            .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_new() {
        let post = Post::new("https://example.com", "Example");
        assert_eq!(post.url, "https://example.com");
        assert_eq!(post.title, "Example");
        assert!(post.description.is_empty());
        assert_eq!(post.visibility, Visibility::Public);
        assert!(post.categories.is_empty());
        assert!(post.id.is_none());
        assert!(post.creation_time.is_none());
        assert!(!post.is_persisted());
    }

    #[test]
    fn test_post_categories_keep_duplicates() {
        let mut post = Post::new("gemini://example.org", "Capsule");
        post.add_category("rust");
        post.add_category("rust");
        post.add_category(String::from("web"));

        let names: Vec<&str> = post.categories.iter().map(Category::name).collect();
        assert_eq!(names, vec!["rust", "rust", "web"]);
    }

    #[test]
    fn test_visibility_codes() {
        assert_eq!(Visibility::Private.code(), 0);
        assert_eq!(Visibility::Public.code(), 1);
        assert_eq!(Visibility::from_code(0), Some(Visibility::Private));
        assert_eq!(Visibility::from_code(1), Some(Visibility::Public));
        assert_eq!(Visibility::from_code(2), None);
    }

    #[test]
    fn test_visibility_from_name() {
        assert_eq!(Visibility::from_name("private"), Visibility::Private);
        assert_eq!(Visibility::from_name("public"), Visibility::Public);
        assert_eq!(Visibility::from_name("anything"), Visibility::Public);
        assert_eq!(Visibility::from_name(""), Visibility::Public);
    }

    #[test]
    fn test_visibility_from_private_flag() {
        assert_eq!(Visibility::from_private_flag(true), Visibility::Private);
        assert_eq!(Visibility::from_private_flag(false), Visibility::Public);
        assert_eq!(Visibility::default(), Visibility::Public);
    }

    #[test]
    fn test_category_new() {
        let category = Category::new("tech");
        assert_eq!(category.name(), "tech");
        assert_eq!(category.post_count, 0);
        assert_eq!(format!("{}", category), "tech");

        let from_str: Category = "tech".into();
        assert_eq!(category, from_str);
    }

    #[test]
    fn test_created_at() {
        let mut post = Post::new("https://example.com", "Example");
        assert!(post.created_at().is_none());

        post.creation_time = Some(1_700_000_000);
        let created = post.created_at().unwrap();
        assert_eq!(created.timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_post_serialization() {
        let mut post = Post::new("https://example.com", "Example");
        post.set_visibility(Visibility::Private);
        post.add_category("tech");

        let json = serde_json::to_string(&post).unwrap();
        assert!(json.contains("\"visibility\":\"private\""));

        let deserialized: Post = serde_json::from_str(&json).unwrap();
        assert_eq!(post, deserialized);
    }
}
