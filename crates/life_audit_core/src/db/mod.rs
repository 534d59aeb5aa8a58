//! SQLite home of the persisted Life Audit blob.
//!
//! # Responsibility
//! - Open the `life_audit.db` file (or an in-memory twin for tests).
//! - Create the `storage_entries` key/value table that holds the whole
//!   aggregate as one JSON row under `STORAGE_KEY`.
//!
//! # Invariants
//! - The schema is one table; the aggregate shape lives in JSON, not columns.
//! - A file written by a newer build is refused, never downgraded.
//! - `SqliteStateStorage` only sees connections whose schema is current.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

/// Result alias for connection bootstrap and migrations.
pub type DbResult<T> = Result<T, DbError>;

/// Error returned while opening or migrating a database.
#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "database schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
