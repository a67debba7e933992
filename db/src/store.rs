use std::path::{Path, PathBuf};

use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use log::{debug, error};

use crate::{DbConnection, DbError};

/// Default location of the Bible database, relative to the working directory.
pub const DEFAULT_DATABASE_PATH: &str = "bibles.db";

/// Where the Bible database lives.
#[derive(Clone, Debug, PartialEq)]
pub struct StoreConfig {
    pub database_path: PathBuf,
}

impl StoreConfig {
    pub fn new<P: Into<PathBuf>>(database_path: P) -> Self {
        Self {
            database_path: database_path.into(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATABASE_PATH)
    }
}

/// Scoped access to the Bible database.
///
/// A `Store` holds no open connection. Every call to
/// [with_connection](Store::with_connection) opens its own connection, and the
/// connection is dropped when the call returns, whichever way it returns.
#[derive(Clone, Debug)]
pub struct Store {
    config: StoreConfig,
}

impl Store {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    pub fn path(&self) -> &Path {
        &self.config.database_path
    }

    /// Opens a query-only connection to the database.
    ///
    /// SQLite happily creates a missing database file, so the path is
    /// checked first and a missing file is reported as unavailable instead.
    pub fn open(&self) -> Result<DbConnection, DbError> {
        let path = self.path();
        if !path.is_file() {
            error!("Bible database not found at {}", path.display());
            return Err(DbError::StorageUnavailable {
                cause: format!("{} does not exist", path.display()),
            });
        }

        let url = path.to_string_lossy();
        let mut conn = DbConnection::establish(&url).map_err(|e| {
            error!("Could not open {}: {}", url, e);
            DbError::StorageUnavailable {
                cause: e.to_string(),
            }
        })?;
        conn.batch_execute("PRAGMA query_only = ON;")
            .map_err(|e| DbError::StorageUnavailable {
                cause: e.to_string(),
            })?;

        debug!("Opened connection to {}", url);
        Ok(conn)
    }

    /// Runs `f` with a freshly opened connection.
    pub fn with_connection<T, F>(&self, f: F) -> Result<T, DbError>
    where
        F: FnOnce(&mut DbConnection) -> Result<T, DbError>,
    {
        let mut conn = self.open()?;
        f(&mut conn)
    }
}
