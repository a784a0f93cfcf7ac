// src/infrastructure/download_workspace.rs
//
// Download Workspace Management
//
// CRITICAL RULES:
// - One workspace per wallpaper download
// - Workspaces only ever live under the configured download root
// - Cleanup runs on success AND failure (explicitly, and again on drop)

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::{AppError, AppResult};

const IMAGE_FILE_NAME: &str = "wallpaper.jpg";

/// A scoped temporary directory holding one downloaded image
///
/// INVARIANTS:
/// - Each workspace has a unique ID and its own directory
/// - Cleanup never deletes anything outside the download root
#[derive(Debug)]
pub struct DownloadWorkspace {
    pub id: Uuid,
    root: PathBuf,
    workspace_dir: PathBuf,
    pub created_at: DateTime<Utc>,
    is_cleaned: bool,
}

impl DownloadWorkspace {
    /// Create `{root}/{uuid}/`
    pub fn create(root: &Path) -> AppResult<Self> {
        let id = Uuid::new_v4();
        let workspace_dir = root.join(id.to_string());

        fs::create_dir_all(&workspace_dir)?;
        log::debug!("Created download workspace {}", workspace_dir.display());

        Ok(Self {
            id,
            root: root.to_path_buf(),
            workspace_dir,
            created_at: Utc::now(),
            is_cleaned: false,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.workspace_dir
    }

    /// Where the downloaded image should be written
    pub fn image_path(&self) -> PathBuf {
        self.workspace_dir.join(IMAGE_FILE_NAME)
    }

    pub fn is_valid(&self) -> bool {
        !self.is_cleaned && self.workspace_dir.exists()
    }

    pub fn is_cleaned(&self) -> bool {
        self.is_cleaned
    }

    /// Remove the workspace directory and everything in it
    pub fn cleanup(&mut self) -> AppResult<()> {
        if self.is_cleaned {
            return Ok(());
        }

        if !self.workspace_dir.starts_with(&self.root) || self.workspace_dir == self.root {
            return Err(AppError::Other(
                "Workspace directory is not in expected download location".to_string(),
            ));
        }

        if self.workspace_dir.exists() {
            fs::remove_dir_all(&self.workspace_dir)?;
        }

        self.is_cleaned = true;
        log::debug!("Cleaned download workspace {}", self.id);
        Ok(())
    }
}

impl Drop for DownloadWorkspace {
    fn drop(&mut self) {
        if !self.is_cleaned {
            if let Err(e) = self.cleanup() {
                log::warn!("Failed to clean download workspace {}: {}", self.id, e);
            }
        }
    }
}
