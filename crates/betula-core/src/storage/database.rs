//! SQLite connection handle
//!
//! `Database` owns the single connection a process uses. Every call commits
//! on its own: `execute` runs in autocommit mode and `execute_many` wraps its
//! batch in one transaction. Nothing spans two calls.

use std::path::{Path, PathBuf};

use rusqlite::{Connection, Params};
use tracing::debug;

use crate::storage::error::{StorageError, StorageResult};
use crate::storage::schema::{init_schema, needs_init};

/// Outcome of a single statement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Execution {
    /// Rows inserted, updated or deleted by the statement
    pub rows_affected: usize,
    /// Row id of the inserted row; `None` when the statement wrote nothing
    pub last_insert_id: Option<i64>,
}

/// Connection to the bookmark database
pub struct Database {
    conn: Connection,
    path: Option<PathBuf>,
}

impl Database {
    /// Open or create the database file at `path`
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| StorageError::CreateDirectory {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        debug!("Opening database at {:?}", path);
        let conn = Connection::open(path).map_err(|source| StorageError::Connection {
            path: path.to_path_buf(),
            source,
        })?;

        bootstrap(&conn)?;

        Ok(Self {
            conn,
            path: Some(path.to_path_buf()),
        })
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> StorageResult<Self> {
        let conn = Connection::open_in_memory().map_err(|source| StorageError::Connection {
            path: PathBuf::from(":memory:"),
            source,
        })?;

        bootstrap(&conn)?;

        Ok(Self { conn, path: None })
    }

    /// Get a reference to the underlying connection
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Path of the database file, `None` for in-memory databases
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Run one parameterized statement and commit it
    ///
    /// For inserts, the returned `Execution` carries the new row id.
    pub fn execute<P: Params>(&self, sql: &str, params: P) -> StorageResult<Execution> {
        let rows_affected = self.conn.execute(sql, params)?;
        let last_insert_id = (rows_affected > 0).then(|| self.conn.last_insert_rowid());

        Ok(Execution {
            rows_affected,
            last_insert_id,
        })
    }

    /// Run the same statement once per parameter tuple, as one batch
    ///
    /// The batch commits together. If any row fails, the rows written so far
    /// by this batch are rolled back. Returns the number of rows written.
    pub fn execute_many<I, P>(&mut self, sql: &str, rows: I) -> StorageResult<usize>
    where
        I: IntoIterator<Item = P>,
        P: Params,
    {
        let tx = self.conn.transaction()?;
        let mut written = 0;
        {
            let mut stmt = tx.prepare(sql)?;
            for params in rows {
                written += stmt.execute(params)?;
            }
        }
        tx.commit()?;

        Ok(written)
    }
}

fn bootstrap(conn: &Connection) -> StorageResult<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;

    if needs_init(conn) {
        debug!("Initializing database schema");
        init_schema(conn)?;
    }

    Ok(())
}
