// src/integrations/wallpaper/permission.rs

use async_trait::async_trait;

/// Media-library write access, asked for right before saving to the gallery
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StoragePermission: Send + Sync {
    async fn request_access(&self) -> bool;
}

/// Desktop platforms have no media-library permission; access is implied
#[derive(Debug, Default, Clone, Copy)]
pub struct ImplicitStoragePermission;

#[async_trait]
impl StoragePermission for ImplicitStoragePermission {
    async fn request_access(&self) -> bool {
        true
    }
}
