// src/application/error_handling.rs
//
// Error Handling for Commands
//
// ARCHITECTURE:
// - Maps internal errors → user-facing responses with an explicit dialog
// - Never exposes internal implementation details in the message
// - Logs errors for debugging
// - Retrying is always a user action; nothing here retries

use serde::{Deserialize, Serialize};

use crate::error::AppError;

// ============================================================================
// DIALOGS
// ============================================================================

/// Everything the UI shell may show in a modal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Dialog {
    Info(InfoDialog),
    Error(ErrorDialog),
    ConfirmRemoval(ConfirmRemovalDialog),
    PermissionRequired(PermissionDialog),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoDialog {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDialog {
    pub title: String,
    pub message: String,
    /// Whether to offer a "Try again" button
    pub retryable: bool,
}

/// Asked before a bulk removal from favorites
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfirmRemovalDialog {
    pub title: String,
    pub message: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PermissionDialog {
    pub title: String,
    pub message: String,
}

impl Dialog {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Dialog::Info(InfoDialog {
            title: title.into(),
            message: message.into(),
        })
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>, retryable: bool) -> Self {
        Dialog::Error(ErrorDialog {
            title: title.into(),
            message: message.into(),
            retryable,
        })
    }

    pub fn confirm_removal(count: usize) -> Self {
        let noun = if count == 1 { "item" } else { "items" };
        Dialog::ConfirmRemoval(ConfirmRemovalDialog {
            title: "Remove Favorites".to_string(),
            message: format!("Remove {} {} from your favorites?", count, noun),
            count,
        })
    }

    pub fn permission_required(message: impl Into<String>) -> Self {
        Dialog::PermissionRequired(PermissionDialog {
            title: "Permission Required".to_string(),
            message: message.into(),
        })
    }

    pub fn title(&self) -> &str {
        match self {
            Dialog::Info(d) => &d.title,
            Dialog::Error(d) => &d.title,
            Dialog::ConfirmRemoval(d) => &d.title,
            Dialog::PermissionRequired(d) => &d.title,
        }
    }
}

// ============================================================================
// ERROR RESPONSES
// ============================================================================

/// Standard error response for the UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
    pub dialog: Dialog,
}

/// Error categories for the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    Validation,
    DomainError,
    /// Catalog or image host unreachable, or answered with an error status
    Network,
    /// Key-value store, database, or stored data unreadable
    Storage,
    Permission,
    /// The platform wallpaper call failed
    Bridge,
    FileSystem,
    Internal,
}

/// What the user was doing, used to title the error dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Browse,
    Search,
    Recommend,
    Favorites,
    SetWallpaper,
    SaveWallpaper,
}

impl Operation {
    fn error_title(&self) -> &'static str {
        match self {
            Operation::Browse => "Error",
            Operation::Search => "Search Error",
            Operation::Recommend => "Error",
            Operation::Favorites => "Favorites Error",
            Operation::SetWallpaper => "Error Setting Wallpaper",
            Operation::SaveWallpaper => "Download Failed",
        }
    }

    fn network_message(&self) -> &'static str {
        match self {
            Operation::Browse => "Could not fetch anime wallpapers. Please try again.",
            Operation::Search => "Could not search anime. Please try again.",
            Operation::Recommend => "Unable to load recommendations. Please try again.",
            Operation::Favorites => "Could not reach the catalog. Please try again.",
            Operation::SetWallpaper => "Could not download the wallpaper. Please try again.",
            Operation::SaveWallpaper => {
                "Sorry, there was an error downloading the image. Please try again."
            }
        }
    }
}

impl ErrorResponse {
    pub fn from_app_error(error: AppError, operation: Operation) -> Self {
        let title = operation.error_title();
        let retryable = error.is_retryable();

        match error {
            AppError::Domain(domain_error) => Self::build(
                ErrorType::DomainError,
                "Validation failed".to_string(),
                Some(domain_error.to_string()),
                Dialog::error(title, domain_error.to_string(), false),
            ),

            AppError::Config(message) => Self::build(
                ErrorType::Validation,
                "Invalid configuration".to_string(),
                Some(message.clone()),
                Dialog::error(title, message, false),
            ),

            AppError::Network(_) | AppError::HttpStatus(_) => {
                log::warn!("Network error during {:?}: {}", operation, error);
                Self::build(
                    ErrorType::Network,
                    operation.network_message().to_string(),
                    Some(error.to_string()),
                    Dialog::error(title, operation.network_message(), retryable),
                )
            }

            AppError::Bridge(reason) => {
                log::error!("Wallpaper bridge failed: {}", reason);
                Self::build(
                    ErrorType::Bridge,
                    "Failed to set wallpaper".to_string(),
                    Some(reason.clone()),
                    Dialog::error(
                        title,
                        format!("Failed to set wallpaper.\n\n{}", reason),
                        retryable,
                    ),
                )
            }

            AppError::PermissionDenied(message) => Self::build(
                ErrorType::Permission,
                "Permission denied".to_string(),
                None,
                Dialog::permission_required(message),
            ),

            AppError::Storage(_)
            | AppError::MalformedData { .. }
            | AppError::Database(_)
            | AppError::Pool(_)
            | AppError::Serialization(_) => {
                log::error!("Storage error during {:?}: {:?}", operation, error);
                Self::build(
                    ErrorType::Storage,
                    "Could not save your changes".to_string(),
                    Some("Check logs for details".to_string()),
                    Dialog::error(title, "Could not save your changes.", false),
                )
            }

            AppError::Io(io_error) => {
                log::error!("IO error during {:?}: {:?}", operation, io_error);
                Self::build(
                    ErrorType::FileSystem,
                    "File system operation failed".to_string(),
                    Some(io_error.to_string()),
                    Dialog::error(title, "File system operation failed.", false),
                )
            }

            AppError::Other(message) => {
                log::error!("Other error during {:?}: {}", operation, message);
                Self::build(
                    ErrorType::Internal,
                    message.clone(),
                    None,
                    Dialog::error(title, message, false),
                )
            }
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::build(
            ErrorType::Validation,
            message.clone(),
            None,
            Dialog::error("Error", message, false),
        )
    }

    fn build(
        error_type: ErrorType,
        message: String,
        details: Option<String>,
        dialog: Dialog,
    ) -> Self {
        Self {
            success: false,
            error_type,
            message,
            details,
            dialog,
        }
    }
}

/// Shorthand used by command handlers
pub trait IntoErrorResponse<T> {
    fn for_op(self, operation: Operation) -> Result<T, ErrorResponse>;
}

impl<T> IntoErrorResponse<T> for Result<T, AppError> {
    fn for_op(self, operation: Operation) -> Result<T, ErrorResponse> {
        self.map_err(|e| ErrorResponse::from_app_error(e, operation))
    }
}
