//! Request handling errors and their HTTP rendering

use super::schema::MessageBody;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request body")]
    InvalidBody(#[source] serde_json::Error),

    #[error("{0}")]
    InvalidInput(String),

    #[error("years must not exceed {max} (got {years})")]
    TooManyPeriods { years: i64, max: u32 },

    #[error("Not found")]
    NotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Unable to read file")]
    StaticFile(#[source] std::io::Error),

    #[error("Error marshalling response")]
    Serialization(#[source] serde_json::Error),
}

impl ApiError {
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::InvalidBody(_)
            | ApiError::InvalidInput(_)
            | ApiError::TooManyPeriods { .. } => 400,
            ApiError::NotFound => 404,
            ApiError::MethodNotAllowed => 405,
            ApiError::StaticFile(_) | ApiError::Serialization(_) => 500,
        }
    }

    /// JSON body `{"message": ...}` describing the error
    pub fn body(&self) -> String {
        MessageBody::new(self.to_string()).to_json()
    }
}
