use std::convert::From;

use actix_web::error::BlockingError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use thiserror::Error;

use db::DbError;

use crate::responder::ErrorData;

/// Error type for the Bible API.
#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("{}", message)]
    NotFound { message: String },

    #[error("{}", message)]
    InvalidArgument { message: String },

    #[error("The Bible database is unavailable.")]
    StorageUnavailable,

    #[error("There was an unexpected error.")]
    Unhandled,
}

impl Error {
    /// Machine-readable name of the error, sent with every error response.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::NotFound { .. } => "not_found",
            Error::InvalidArgument { .. } => "invalid_argument",
            Error::StorageUnavailable => "storage_unavailable",
            Error::Unhandled => "unhandled",
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Error::InvalidArgument {
            message: message.into(),
        }
    }
}

impl From<DbError> for Error {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { .. } | DbError::NoVersesMatched { .. } => Error::NotFound {
                message: e.to_string(),
            },
            DbError::InvalidArgument { message } => Error::InvalidArgument { message },
            DbError::StorageUnavailable { .. } => {
                error!("{}", e);
                Error::StorageUnavailable
            }
            DbError::Other { .. } => {
                error!("{}", e);
                Error::Unhandled
            }
        }
    }
}

#[derive(Error, Debug)]
#[error("Error: {}", _0)]
/// Error to display as JSON
pub struct JsonError(pub Error);

impl From<Error> for JsonError {
    fn from(e: Error) -> Self {
        JsonError(e)
    }
}

impl From<DbError> for JsonError {
    fn from(e: DbError) -> Self {
        JsonError(e.into())
    }
}

impl From<BlockingError> for JsonError {
    fn from(e: BlockingError) -> Self {
        error!("The blocking database task failed: {}", e);
        JsonError(Error::Unhandled)
    }
}

impl ResponseError for JsonError {
    fn status_code(&self) -> StatusCode {
        match self.0 {
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
            Error::InvalidArgument { .. } => StatusCode::BAD_REQUEST,
            Error::StorageUnavailable | Error::Unhandled => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorData::from_error(&self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_db_error() {
        assert_eq!(
            Error::from(DbError::NotFound {
                entity: "Book",
                key: "Hezekiah".to_string()
            }),
            Error::NotFound {
                message: "Book 'Hezekiah' was not found.".to_string()
            }
        );
        assert_eq!(
            Error::from(DbError::InvalidArgument {
                message: "Testament must be OT or NT".to_string()
            }),
            Error::invalid("Testament must be OT or NT")
        );
        assert_eq!(
            Error::from(DbError::StorageUnavailable {
                cause: "/srv/bibles.db does not exist".to_string()
            }),
            Error::StorageUnavailable
        );
        assert_eq!(
            Error::from(DbError::Other {
                cause: "Unexpected testament 'XT' in the Bible".to_string()
            }),
            Error::Unhandled
        );
    }

    #[test]
    fn server_errors_hide_their_cause() {
        let e = JsonError::from(DbError::StorageUnavailable {
            cause: "/srv/bibles.db does not exist".to_string(),
        });

        assert_eq!(e.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!e.to_string().contains("/srv"));
    }

    #[actix_rt::test]
    async fn storage_error_body() {
        let resp = JsonError::from(DbError::StorageUnavailable {
            cause: "disk I/O error".to_string(),
        })
        .error_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
        let data: ErrorData = serde_json::from_slice(&body).unwrap();
        assert_eq!(data.error, "storage_unavailable");
        assert_eq!(data.detail, "The Bible database is unavailable.");
    }

    #[test]
    fn status_codes() {
        assert_eq!(
            JsonError(Error::NotFound {
                message: String::new()
            })
            .status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            JsonError(Error::invalid("bad")).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            JsonError(Error::Unhandled).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
