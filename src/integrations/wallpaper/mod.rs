// src/integrations/wallpaper/mod.rs

pub mod bridge;
pub mod image_source;
pub mod permission;

pub use bridge::{decode_image, FileSystemWallpaperBridge, WallpaperBridge};
pub use image_source::{HttpImageSource, ImageSource};
pub use permission::{ImplicitStoragePermission, StoragePermission};
