// Database connection management
use rusqlite::Connection;
use std::path::{Path, PathBuf};

use super::operations::DbOperations;
use crate::error::StorageError;

/// Location of the bouquet database.
///
/// No connection is held between calls: every operation opens its own
/// through [`DatabaseConnection::open`] and drops it when done, so nothing
/// leaks from one call into the next.
#[derive(Debug, Clone)]
pub struct DatabaseConnection {
    db_path: PathBuf,
}

impl DatabaseConnection {
    pub fn new(db_path: PathBuf) -> Result<Self, StorageError> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| StorageError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let db = Self { db_path };

        DbOperations::ensure_schema(&db)?;

        tracing::debug!(path = %db.db_path.display(), "bouquet database ready");
        Ok(db)
    }

    /// Open a fresh connection; it closes when dropped.
    pub fn open(&self) -> Result<Connection, StorageError> {
        Ok(Connection::open(&self.db_path)?)
    }

    pub fn path(&self) -> &Path {
        &self.db_path
    }
}
