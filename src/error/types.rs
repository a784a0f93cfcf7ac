// src/error/types.rs
use crate::domain::DomainError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Catalog returned status {0}")]
    HttpStatus(u16),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Malformed stored data under '{key}': {reason}")]
    MalformedData { key: String, reason: String },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Pool error: {0}")]
    Pool(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Wallpaper bridge failed: {0}")]
    Bridge(String),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Other error: {0}")]
    Other(String),
}

impl AppError {
    /// Whether offering the user a "try again" action makes sense.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            AppError::Network(_) | AppError::HttpStatus(_) | AppError::Bridge(_)
        )
    }

    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            AppError::Storage(_)
                | AppError::MalformedData { .. }
                | AppError::Database(_)
                | AppError::Pool(_)
                | AppError::Serialization(_)
        )
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => AppError::HttpStatus(status.as_u16()),
            None => AppError::Network(err.to_string()),
        }
    }
}

impl From<base64::DecodeError> for AppError {
    fn from(err: base64::DecodeError) -> Self {
        AppError::Bridge(format!("Invalid base64 image data: {}", err))
    }
}

impl From<r2d2::Error> for AppError {
    fn from(err: r2d2::Error) -> Self {
        AppError::Pool(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
