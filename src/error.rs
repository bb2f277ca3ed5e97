use std::io;

use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("'{0}' key not found")]
    MissingKey(&'static str),
    #[error("Unexpected '{key}' value: {value}")]
    UnexpectedValue { key: &'static str, value: String },
    #[error("Need to implement {0}")]
    NotImplemented(&'static str),
}
