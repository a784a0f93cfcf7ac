// src/integrations/wallpaper/bridge.rs
//
// The platform call that actually changes the wallpaper. On a phone this is a
// native module; here the contract is a trait with a file-system backed
// implementation.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use base64::Engine;

use crate::domain::WallpaperTarget;

/// Image bytes in (base64), success message or error description out
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WallpaperBridge: Send + Sync {
    async fn set_wallpaper(&self, target: WallpaperTarget, base64_image: &str)
        -> Result<String, String>;
}

pub const HOME_FILE_NAME: &str = "home.jpg";
pub const LOCK_FILE_NAME: &str = "lock.jpg";

/// Writes the decoded image to `home.jpg` and/or `lock.jpg` under a directory
/// that a desktop shell (or a test) can pick up.
pub struct FileSystemWallpaperBridge {
    output_dir: PathBuf,
}

impl FileSystemWallpaperBridge {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn path_for(&self, target: WallpaperTarget) -> Vec<PathBuf> {
        let mut paths = Vec::with_capacity(2);
        if target.includes_home() {
            paths.push(self.output_dir.join(HOME_FILE_NAME));
        }
        if target.includes_lock() {
            paths.push(self.output_dir.join(LOCK_FILE_NAME));
        }
        paths
    }
}

/// Accepts both bare base64 and `data:image/...;base64,` URLs
pub fn decode_image(payload: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let data = match payload.split_once(',') {
        Some((prefix, rest)) if prefix.starts_with("data:") => rest,
        _ => payload,
    };

    base64::engine::general_purpose::STANDARD.decode(data.trim())
}

#[async_trait]
impl WallpaperBridge for FileSystemWallpaperBridge {
    async fn set_wallpaper(
        &self,
        target: WallpaperTarget,
        base64_image: &str,
    ) -> Result<String, String> {
        let bytes =
            decode_image(base64_image).map_err(|e| format!("Failed to decode image: {}", e))?;

        if bytes.is_empty() {
            return Err("Image data is empty".to_string());
        }

        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| format!("Failed to create wallpaper directory: {}", e))?;

        for path in self.path_for(target) {
            tokio::fs::write(&path, &bytes)
                .await
                .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
        }

        Ok(target.success_message().to_string())
    }
}
