#[macro_use]
extern crate diesel;

use thiserror::Error;

/// Type of a single SQLite connection to the Bible database.
pub type DbConnection = diesel::SqliteConnection;

#[derive(Clone, Error, Debug, PartialEq)]
pub enum DbError {
    #[error("{} '{}' was not found.", entity, key)]
    NotFound { entity: &'static str, key: String },

    #[error("No verses were found for '{}'.", reference)]
    NoVersesMatched { reference: String },

    #[error("{}", message)]
    InvalidArgument { message: String },

    #[error("The Bible database is unavailable. Root cause: {:?}.", cause)]
    StorageUnavailable { cause: String },

    #[error("There was a database error. Root cause: {:?}.", cause)]
    Other { cause: String },
}

impl DbError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        DbError::InvalidArgument {
            message: message.into(),
        }
    }

    pub(crate) fn not_found(entity: &'static str, key: impl ToString) -> Self {
        DbError::NotFound {
            entity,
            key: key.to_string(),
        }
    }
}

impl From<diesel::result::Error> for DbError {
    fn from(e: diesel::result::Error) -> Self {
        log::error!("Query failed: {}", e);
        match e {
            diesel::result::Error::DeserializationError(cause) => DbError::Other {
                cause: cause.to_string(),
            },
            e => DbError::StorageUnavailable {
                cause: e.to_string(),
            },
        }
    }
}

pub mod composer;
pub mod models;
mod schema;
mod store;
#[cfg(test)]
mod test;

pub use composer::{
    Composer, SqliteComposer, DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT, MIN_SEARCH_QUERY_LENGTH,
};
pub use store::{Store, StoreConfig, DEFAULT_DATABASE_PATH};
