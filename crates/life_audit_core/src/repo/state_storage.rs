//! Blob storage port and its SQLite / in-memory implementations.
//!
//! # Responsibility
//! - Hold the single serialized aggregate under one storage key.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - A write replaces the whole blob; there are no partial updates.
//! - `clear()` on an empty store is a no-op.

use crate::db::DbError;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::cell::RefCell;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Key the aggregate is stored under.
pub const STORAGE_KEY: &str = "life-audit-data";

pub type StorageResult<T> = Result<T, StorageError>;

/// Error raised by a storage backend.
#[derive(Debug)]
pub enum StorageError {
    Db(DbError),
    /// Aggregate could not be serialized into a blob.
    Serialize(serde_json::Error),
    /// Backend refused the operation (quota, read-only medium, ...).
    Unavailable(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize state: {err}"),
            Self::Unavailable(message) => write!(f, "storage unavailable: {message}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) => Some(err),
            Self::Unavailable(_) => None,
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Single-blob storage port.
pub trait StateStorage {
    fn read_blob(&self) -> StorageResult<Option<String>>;
    fn write_blob(&self, blob: &str) -> StorageResult<()>;
    fn clear(&self) -> StorageResult<()>;
}

impl<S: StateStorage + ?Sized> StateStorage for &S {
    fn read_blob(&self) -> StorageResult<Option<String>> {
        (**self).read_blob()
    }

    fn write_blob(&self, blob: &str) -> StorageResult<()> {
        (**self).write_blob(blob)
    }

    fn clear(&self) -> StorageResult<()> {
        (**self).clear()
    }
}

/// SQLite-backed storage over the `storage_entries` table.
pub struct SqliteStateStorage<'conn> {
    conn: &'conn Connection,
    key: String,
}

impl<'conn> SqliteStateStorage<'conn> {
    /// Storage bound to [`STORAGE_KEY`]. `conn` must come from `open_db*`.
    pub fn new(conn: &'conn Connection) -> Self {
        Self::with_key(conn, STORAGE_KEY)
    }

    pub fn with_key(conn: &'conn Connection, key: impl Into<String>) -> Self {
        Self {
            conn,
            key: key.into(),
        }
    }

    /// Epoch milliseconds of the last write, if any.
    pub fn updated_at(&self) -> StorageResult<Option<i64>> {
        let updated_at = self
            .conn
            .query_row(
                "SELECT updated_at FROM storage_entries WHERE key = ?1;",
                params![self.key],
                |row| row.get::<_, i64>(0),
            )
            .optional()?;
        Ok(updated_at)
    }
}

impl StateStorage for SqliteStateStorage<'_> {
    fn read_blob(&self) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM storage_entries WHERE key = ?1;",
                params![self.key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write_blob(&self, blob: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO storage_entries (key, value, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![self.key, blob, Utc::now().timestamp_millis()],
        )?;
        Ok(())
    }

    fn clear(&self) -> StorageResult<()> {
        self.conn.execute(
            "DELETE FROM storage_entries WHERE key = ?1;",
            params![self.key],
        )?;
        Ok(())
    }
}

/// Process-local storage for tests and previews.
#[derive(Debug, Default)]
pub struct MemoryStateStorage {
    blob: RefCell<Option<String>>,
}

impl MemoryStateStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-filled with `blob`, e.g. a corrupted payload.
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: RefCell::new(Some(blob.into())),
        }
    }

    pub fn snapshot(&self) -> Option<String> {
        self.blob.borrow().clone()
    }
}

impl StateStorage for MemoryStateStorage {
    fn read_blob(&self) -> StorageResult<Option<String>> {
        Ok(self.blob.borrow().clone())
    }

    fn write_blob(&self, blob: &str) -> StorageResult<()> {
        *self.blob.borrow_mut() = Some(blob.to_string());
        Ok(())
    }

    fn clear(&self) -> StorageResult<()> {
        self.blob.borrow_mut().take();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{MemoryStateStorage, SqliteStateStorage, StateStorage};
    use crate::db::open_db_in_memory;

    #[test]
    fn sqlite_write_overwrites_and_clear_removes() {
        let conn = open_db_in_memory().unwrap();
        let storage = SqliteStateStorage::new(&conn);
        assert_eq!(storage.read_blob().unwrap(), None);

        storage.write_blob("{\"a\":1}").unwrap();
        storage.write_blob("{\"a\":2}").unwrap();
        assert_eq!(storage.read_blob().unwrap().as_deref(), Some("{\"a\":2}"));
        assert!(storage.updated_at().unwrap().is_some());

        storage.clear().unwrap();
        storage.clear().unwrap();
        assert_eq!(storage.read_blob().unwrap(), None);
    }

    #[test]
    fn keys_are_isolated() {
        let conn = open_db_in_memory().unwrap();
        let primary = SqliteStateStorage::new(&conn);
        let other = SqliteStateStorage::with_key(&conn, "other");
        primary.write_blob("1").unwrap();
        assert_eq!(other.read_blob().unwrap(), None);
    }

    #[test]
    fn memory_storage_roundtrips() {
        let storage = MemoryStateStorage::new();
        storage.write_blob("x").unwrap();
        assert_eq!(storage.snapshot().as_deref(), Some("x"));
        storage.clear().unwrap();
        assert_eq!(storage.read_blob().unwrap(), None);
    }
}
