use serde_derive::{Deserialize, Serialize};

use crate::error::Error;

/// Name reported by the index endpoint.
pub const NAME: &str = "Bible Translations API";

/// Error data returned with every failed request.
#[derive(Clone, Deserialize, Serialize, Debug, PartialEq)]
pub struct ErrorData {
    pub error: String,
    pub detail: String,
}

impl ErrorData {
    /// Creates new error data from an [Error](crate::error::Error).
    pub fn from_error(e: &Error) -> Self {
        Self {
            error: e.kind().to_string(),
            detail: e.to_string(),
        }
    }
}

/// Top-level resources listed by the index endpoint.
#[derive(Clone, Deserialize, Serialize, Debug, PartialEq)]
pub struct Endpoints {
    pub translations: String,
    pub books: String,
    pub verses: String,
}

/// Data for the index endpoint.
#[derive(Clone, Deserialize, Serialize, Debug, PartialEq)]
pub struct IndexData {
    pub message: String,
    pub version: String,
    pub endpoints: Endpoints,
}

impl IndexData {
    pub fn new() -> Self {
        Self {
            message: format!("Welcome to the {}", NAME),
            version: env!("CARGO_PKG_VERSION").to_string(),
            endpoints: Endpoints {
                translations: "/translations".to_string(),
                books: "/books".to_string(),
                verses: "/verses".to_string(),
            },
        }
    }
}

impl Default for IndexData {
    fn default() -> Self {
        Self::new()
    }
}

/// Data for the health check endpoint.
#[derive(Clone, Deserialize, Serialize, Debug, PartialEq)]
pub struct HealthData {
    pub status: String,
}

impl HealthData {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}
