// src/services/wallpaper_service.rs
//
// Applying and saving wallpapers.
//
// CRITICAL RULES:
// - Every download for the bridge lives in its own workspace
// - The workspace is removed whether the bridge succeeds or fails
// - Gallery saves require storage permission first

use std::path::{Path, PathBuf};
use std::sync::Arc;

use base64::Engine;
use chrono::Utc;
use regex::Regex;

use crate::config::AppConfig;
use crate::domain::WallpaperTarget;
use crate::error::{AppError, AppResult};
use crate::events::{EventBus, WallpaperApplied, WallpaperSavedToGallery};
use crate::infrastructure::DownloadWorkspace;
use crate::integrations::{ImageSource, StoragePermission, WallpaperBridge};

/// File naming for images saved to the gallery:
/// `AnimeWallpaper_{clean_title}_{timestamp}.jpg`
pub struct GalleryNaming {
    /// Anything that is not an ASCII letter, digit or whitespace
    disallowed: Regex,
    whitespace_run: Regex,
}

impl GalleryNaming {
    pub fn new() -> AppResult<Self> {
        Ok(Self {
            disallowed: Regex::new(r"[^a-zA-Z0-9\s]")
                .map_err(|e| AppError::Other(e.to_string()))?,
            whitespace_run: Regex::new(r"\s+").map_err(|e| AppError::Other(e.to_string()))?,
        })
    }

    pub fn clean_title(&self, title: &str) -> String {
        let stripped = self.disallowed.replace_all(title, "");
        self.whitespace_run.replace_all(&stripped, "_").into_owned()
    }

    pub fn file_name(&self, title: &str, timestamp_millis: i64) -> String {
        format!(
            "AnimeWallpaper_{}_{}.jpg",
            self.clean_title(title),
            timestamp_millis
        )
    }
}

pub struct WallpaperService {
    image_source: Arc<dyn ImageSource>,
    bridge: Arc<dyn WallpaperBridge>,
    permission: Arc<dyn StoragePermission>,
    event_bus: Arc<EventBus>,
    download_root: PathBuf,
    gallery_dir: PathBuf,
    naming: GalleryNaming,
}

impl WallpaperService {
    pub fn new(
        image_source: Arc<dyn ImageSource>,
        bridge: Arc<dyn WallpaperBridge>,
        permission: Arc<dyn StoragePermission>,
        event_bus: Arc<EventBus>,
        config: &AppConfig,
    ) -> AppResult<Self> {
        Ok(Self {
            image_source,
            bridge,
            permission,
            event_bus,
            download_root: config.download_root.clone(),
            gallery_dir: config.gallery_dir.clone(),
            naming: GalleryNaming::new()?,
        })
    }

    /// Download `url`, hand it to the bridge for `target`, return the
    /// bridge's success message. The download workspace is always removed.
    pub async fn apply(&self, url: &str, target: WallpaperTarget) -> AppResult<String> {
        let mut workspace = DownloadWorkspace::create(&self.download_root)?;

        let outcome = self.apply_in(&workspace, url, target).await;

        if let Err(e) = workspace.cleanup() {
            log::warn!("Failed to clean download workspace {}: {}", workspace.id, e);
        }

        match &outcome {
            Ok(message) => log::info!("{} ({})", message, target),
            Err(e) => log::error!("Setting {} wallpaper failed: {}", target, e),
        }

        outcome
    }

    async fn apply_in(
        &self,
        workspace: &DownloadWorkspace,
        url: &str,
        target: WallpaperTarget,
    ) -> AppResult<String> {
        let image_path = workspace.image_path();
        let size = self.image_source.download(url, &image_path).await?;
        if size == 0 {
            return Err(AppError::Network("Downloaded file is empty".to_string()));
        }

        let payload = encode_file(&image_path).await?;

        let message = self
            .bridge
            .set_wallpaper(target, &payload)
            .await
            .map_err(AppError::Bridge)?;

        self.event_bus.emit(WallpaperApplied::new(target));
        Ok(message)
    }

    /// Save `url` into the gallery directory under a name derived from
    /// `title`. Returns the saved file's path.
    pub async fn save_to_gallery(&self, url: &str, title: &str) -> AppResult<PathBuf> {
        if !self.permission.request_access().await {
            return Err(AppError::PermissionDenied(
                "Storage permission is needed to save wallpapers to your gallery. \
                 Please grant permission in your device settings."
                    .to_string(),
            ));
        }

        tokio::fs::create_dir_all(&self.gallery_dir).await?;

        let file_name = self
            .naming
            .file_name(title, Utc::now().timestamp_millis());
        let destination = self.gallery_dir.join(&file_name);

        if let Err(e) = self.image_source.download(url, &destination).await {
            // Do not leave a partial file in the gallery
            match tokio::fs::remove_file(&destination).await {
                Ok(()) => {}
                Err(io) if io.kind() == std::io::ErrorKind::NotFound => {}
                Err(io) => log::warn!(
                    "Failed to remove partial download {}: {}",
                    destination.display(),
                    io
                ),
            }
            return Err(e);
        }

        self.event_bus.emit(WallpaperSavedToGallery::new(file_name));
        Ok(destination)
    }
}

async fn encode_file(path: &Path) -> AppResult<String> {
    let bytes = tokio::fs::read(path).await?;
    Ok(base64::engine::general_purpose::STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrations::wallpaper::bridge::MockWallpaperBridge;
    use crate::integrations::wallpaper::image_source::MockImageSource;
    use crate::integrations::wallpaper::permission::MockStoragePermission;
    use crate::integrations::ImplicitStoragePermission;

    fn config(root: &Path) -> AppConfig {
        AppConfig {
            download_root: root.join("downloads"),
            gallery_dir: root.join("gallery"),
            ..AppConfig::default()
        }
    }

    fn writing_source() -> MockImageSource {
        let mut source = MockImageSource::new();
        source.expect_download().returning(|_, destination| {
            std::fs::write(destination, b"jpeg").unwrap();
            Ok(4)
        });
        source
    }

    fn leftover_workspaces(root: &Path) -> usize {
        std::fs::read_dir(root.join("downloads")).unwrap().count()
    }

    #[test]
    fn test_clean_title() {
        let naming = GalleryNaming::new().unwrap();
        assert_eq!(
            naming.clean_title("Attack on Titan: Final Season"),
            "Attack_on_Titan_Final_Season"
        );
        assert_eq!(naming.clean_title("Re:Zero  −  Starting Life"), "ReZero_Starting_Life");
        assert_eq!(
            naming.file_name("Steins;Gate", 1700000000000),
            "AnimeWallpaper_SteinsGate_1700000000000.jpg"
        );
    }

    #[tokio::test]
    async fn test_apply_sends_base64_and_cleans_up() {
        let dir = tempfile::tempdir().unwrap();

        let mut bridge = MockWallpaperBridge::new();
        bridge
            .expect_set_wallpaper()
            .withf(|target, payload| *target == WallpaperTarget::Both && payload == "anBlZw==")
            .times(1)
            .returning(|target, _| Ok(target.success_message().to_string()));

        let bus = Arc::new(EventBus::new());
        let service = WallpaperService::new(
            Arc::new(writing_source()),
            Arc::new(bridge),
            Arc::new(ImplicitStoragePermission),
            bus.clone(),
            &config(dir.path()),
        )
        .unwrap();

        let message = service
            .apply("https://media.kitsu.io/1/original.jpg", WallpaperTarget::Both)
            .await
            .unwrap();

        assert_eq!(message, "Both wallpapers set successfully");
        assert_eq!(leftover_workspaces(dir.path()), 0);
        assert_eq!(bus.get_event_log()[0].event_type, "WallpaperApplied");
    }

    #[tokio::test]
    async fn test_bridge_failure_still_cleans_up() {
        let dir = tempfile::tempdir().unwrap();

        let mut bridge = MockWallpaperBridge::new();
        bridge
            .expect_set_wallpaper()
            .returning(|_, _| Err("Wallpaper manager unavailable".to_string()));

        let service = WallpaperService::new(
            Arc::new(writing_source()),
            Arc::new(bridge),
            Arc::new(ImplicitStoragePermission),
            Arc::new(EventBus::new()),
            &config(dir.path()),
        )
        .unwrap();

        let result = service.apply("https://img/1.jpg", WallpaperTarget::Home).await;

        assert!(
            matches!(result, Err(AppError::Bridge(ref m)) if m == "Wallpaper manager unavailable")
        );
        assert_eq!(leftover_workspaces(dir.path()), 0);
    }

    #[tokio::test]
    async fn test_download_failure_skips_bridge() {
        let dir = tempfile::tempdir().unwrap();

        let mut source = MockImageSource::new();
        source
            .expect_download()
            .returning(|_, _| Err(AppError::HttpStatus(404)));
        let mut bridge = MockWallpaperBridge::new();
        bridge.expect_set_wallpaper().never();

        let service = WallpaperService::new(
            Arc::new(source),
            Arc::new(bridge),
            Arc::new(ImplicitStoragePermission),
            Arc::new(EventBus::new()),
            &config(dir.path()),
        )
        .unwrap();

        let result = service.apply("https://img/missing.jpg", WallpaperTarget::Lock).await;
        assert!(matches!(result, Err(AppError::HttpStatus(404))));
        assert_eq!(leftover_workspaces(dir.path()), 0);
    }

    #[tokio::test]
    async fn test_empty_download_skips_bridge() {
        let dir = tempfile::tempdir().unwrap();

        let mut source = MockImageSource::new();
        source.expect_download().returning(|_, destination| {
            std::fs::write(destination, b"").unwrap();
            Ok(0)
        });
        let mut bridge = MockWallpaperBridge::new();
        bridge.expect_set_wallpaper().never();

        let service = WallpaperService::new(
            Arc::new(source),
            Arc::new(bridge),
            Arc::new(ImplicitStoragePermission),
            Arc::new(EventBus::new()),
            &config(dir.path()),
        )
        .unwrap();

        let result = service.apply("https://img/empty.jpg", WallpaperTarget::Home).await;
        assert!(matches!(result, Err(AppError::Network(ref m)) if m == "Downloaded file is empty"));
        assert_eq!(leftover_workspaces(dir.path()), 0);
    }

    #[tokio::test]
    async fn test_failed_save_leaves_no_partial_file() {
        let dir = tempfile::tempdir().unwrap();

        let mut source = MockImageSource::new();
        source.expect_download().returning(|_, destination| {
            std::fs::write(destination, b"jp").unwrap();
            Err(AppError::Network("connection reset".to_string()))
        });

        let service = WallpaperService::new(
            Arc::new(source),
            Arc::new(MockWallpaperBridge::new()),
            Arc::new(ImplicitStoragePermission),
            Arc::new(EventBus::new()),
            &config(dir.path()),
        )
        .unwrap();

        let result = service.save_to_gallery("https://img/1.jpg", "Trigun").await;
        assert!(matches!(result, Err(AppError::Network(_))));
        assert_eq!(std::fs::read_dir(dir.path().join("gallery")).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_save_to_gallery_writes_named_file() {
        let dir = tempfile::tempdir().unwrap();

        let service = WallpaperService::new(
            Arc::new(writing_source()),
            Arc::new(MockWallpaperBridge::new()),
            Arc::new(ImplicitStoragePermission),
            Arc::new(EventBus::new()),
            &config(dir.path()),
        )
        .unwrap();

        let path = service
            .save_to_gallery("https://img/1.jpg", "Cowboy Bebop!")
            .await
            .unwrap();

        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("AnimeWallpaper_Cowboy_Bebop_"));
        assert!(name.ends_with(".jpg"));
        assert_eq!(std::fs::read(&path).unwrap(), b"jpeg");
    }

    #[tokio::test]
    async fn test_save_without_permission_is_denied() {
        let dir = tempfile::tempdir().unwrap();

        let mut permission = MockStoragePermission::new();
        permission.expect_request_access().returning(|| false);
        let mut source = MockImageSource::new();
        source.expect_download().never();

        let service = WallpaperService::new(
            Arc::new(source),
            Arc::new(MockWallpaperBridge::new()),
            Arc::new(permission),
            Arc::new(EventBus::new()),
            &config(dir.path()),
        )
        .unwrap();

        let result = service.save_to_gallery("https://img/1.jpg", "Trigun").await;
        assert!(matches!(result, Err(AppError::PermissionDenied(_))));
        assert!(!dir.path().join("gallery").exists());
    }
}
