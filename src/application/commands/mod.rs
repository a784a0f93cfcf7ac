// src/application/commands/mod.rs
//
// Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between the UI shell and services
// - Commands accept DTOs or plain values, return DTOs
// - Every error leaves here as an ErrorResponse with its dialog
// - Commands NEVER contain business logic

pub mod catalog_commands;
pub mod favorites_commands;
pub mod recommendation_commands;
pub mod search_commands;
pub mod wallpaper_commands;

pub use catalog_commands::*;
pub use favorites_commands::*;
pub use recommendation_commands::*;
pub use search_commands::*;
pub use wallpaper_commands::*;
