// src/events/handlers/mod.rs
//
// Event Handlers - INTERNAL MODULE
//
// Handlers use closure-based subscription via EventBus::subscribe.

pub mod activity_handler;

// Only export the registration function
pub use activity_handler::register_activity_handlers;
