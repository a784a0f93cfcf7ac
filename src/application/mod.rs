// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - The boundary between a UI shell and the services
// - Translates between DTOs and domain entities
// - Turns every error into an explicit dialog for the shell to show

pub mod commands;
pub mod dto;
pub mod error_handling;
pub mod state;

pub use commands::*;
pub use dto::*;
pub use error_handling::{
    ConfirmRemovalDialog, Dialog, ErrorDialog, ErrorResponse, ErrorType, InfoDialog,
    IntoErrorResponse, Operation, PermissionDialog,
};
pub use state::AppState;
