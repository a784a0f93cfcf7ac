// src/infrastructure/mod.rs
//
// Infrastructure Layer
//
// Implementation details that support the services but are not part of the
// domain itself.
//
// RULES:
// - Infrastructure never dictates domain behavior
// - Infrastructure is replaceable

pub mod download_workspace;

pub use download_workspace::DownloadWorkspace;
