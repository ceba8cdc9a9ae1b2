use crate::model::Field;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Invalid {field}: {reason}")]
    Validation { field: Field, reason: String },

    #[error("Student id {0} is already registered")]
    DuplicateKey(String),

    #[error("Student with id {0} not found")]
    NotFound(String),

    #[error("Corrupt data file {}: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Storage(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl RosterError {
    pub fn validation(field: Field, reason: impl Into<String>) -> Self {
        RosterError::Validation {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
