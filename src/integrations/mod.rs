// src/integrations/mod.rs
//
// External Integrations Module
//
// - kitsu: the public anime catalog
// - wallpaper: the platform wallpaper call, image downloads, gallery access

pub mod kitsu;
pub mod wallpaper;

pub use kitsu::{CatalogClient, KitsuClient};
pub use wallpaper::{
    FileSystemWallpaperBridge, HttpImageSource, ImageSource, ImplicitStoragePermission,
    StoragePermission, WallpaperBridge,
};
