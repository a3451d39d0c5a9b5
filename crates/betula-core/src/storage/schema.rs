//! SQLite schema for posts and their categories
//!
//! Categories have no table of their own. They only exist as rows of
//! `CategoriesToPosts`, keyed by name.

use rusqlite::{Connection, Result};

/// Initialize the database schema
pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS Posts (
            ID INTEGER PRIMARY KEY AUTOINCREMENT,
            URL TEXT NOT NULL,
            Title TEXT NOT NULL,
            Description TEXT NOT NULL DEFAULT '',
            Visibility INTEGER NOT NULL CHECK (Visibility IN (0, 1)),
            CreationTime INTEGER NOT NULL DEFAULT (CAST(strftime('%s', 'now') AS INTEGER))
        );

        -- Post-category junction; no uniqueness, duplicates are kept
        CREATE TABLE IF NOT EXISTS CategoriesToPosts (
            CatName TEXT NOT NULL CHECK (CatName <> ''),
            PostID INTEGER NOT NULL,
            FOREIGN KEY (PostID) REFERENCES Posts(ID)
        );
        "#,
    )
}

/// Check if the schema still has to be created
pub fn needs_init(conn: &Connection) -> bool {
    let table_count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN ('Posts', 'CategoriesToPosts')",
            [],
            |row| row.get(0),
        )
        .unwrap_or(0);

    table_count < 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_schema() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();

        let tables: Vec<String> = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect();

        assert!(tables.contains(&"Posts".to_string()));
        assert!(tables.contains(&"CategoriesToPosts".to_string()));
    }

    #[test]
    fn test_needs_init() {
        let conn = Connection::open_in_memory().unwrap();
        assert!(needs_init(&conn));

        init_schema(&conn).unwrap();
        assert!(!needs_init(&conn));
    }

    #[test]
    fn test_init_schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        init_schema(&conn).unwrap();
        assert!(!needs_init(&conn));
    }

    #[test]
    fn test_creation_time_default() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();

        conn.execute(
            "INSERT INTO Posts (URL, Title, Description, Visibility) VALUES ('https://example.com', 'Example', '', 1)",
            [],
        )
        .unwrap();

        let created: i64 = conn
            .query_row("SELECT CreationTime FROM Posts", [], |row| row.get(0))
            .unwrap();
        let now = chrono::Utc::now().timestamp();
        assert!(created > 0);
        assert!((now - created).abs() < 60);
    }

    #[test]
    fn test_visibility_check() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();

        let result = conn.execute(
            "INSERT INTO Posts (URL, Title, Visibility) VALUES ('https://example.com', 'Example', 2)",
            [],
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_category_name_rejected() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        conn.execute(
            "INSERT INTO Posts (URL, Title, Visibility) VALUES ('https://example.com', 'Example', 1)",
            [],
        )
        .unwrap();

        let result = conn.execute(
            "INSERT INTO CategoriesToPosts (CatName, PostID) VALUES ('', 1)",
            [],
        );
        assert!(result.is_err());
    }
}
