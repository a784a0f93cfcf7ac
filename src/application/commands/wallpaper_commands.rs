// src/application/commands/wallpaper_commands.rs
//
// Wallpaper Command Handlers

use crate::application::dto::SavedWallpaperDto;
use crate::application::error_handling::{Dialog, ErrorResponse, IntoErrorResponse, Operation};
use crate::application::state::AppState;
use crate::domain::WallpaperTarget;

/// Apply the image at `url`. `target` is "home", "lock" or "both".
pub async fn set_wallpaper(
    state: &AppState,
    url: &str,
    target: &str,
) -> Result<Dialog, ErrorResponse> {
    let target: WallpaperTarget = target.parse().map_err(ErrorResponse::validation)?;

    state
        .wallpapers
        .apply(url, target)
        .await
        .for_op(Operation::SetWallpaper)?;

    Ok(Dialog::info("✅ Success!", "Wallpaper has been set successfully!"))
}

/// Download the image at `url` into the gallery
pub async fn save_wallpaper(
    state: &AppState,
    url: &str,
    title: &str,
) -> Result<SavedWallpaperDto, ErrorResponse> {
    let path = state
        .wallpapers
        .save_to_gallery(url, title)
        .await
        .for_op(Operation::SaveWallpaper)?;

    Ok(SavedWallpaperDto {
        path: path.to_string_lossy().into_owned(),
        dialog: Dialog::info(
            "✅ Download Complete!",
            format!("\"{}\" has been saved successfully!", title),
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error_handling::ErrorType;
    use crate::application::state::test_support::Parts;
    use crate::error::AppError;
    use crate::integrations::wallpaper::permission::MockStoragePermission;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_set_wallpaper_success_dialog() {
        let dir = tempfile::tempdir().unwrap();
        let mut parts = Parts::new(dir.path());
        parts.image_source.expect_download().returning(|_, destination| {
            std::fs::write(destination, b"jpeg").unwrap();
            Ok(4)
        });
        parts
            .bridge
            .expect_set_wallpaper()
            .withf(|target, _| *target == WallpaperTarget::Lock)
            .returning(|target, _| Ok(target.success_message().to_string()));
        let state = parts.build();

        let dialog = set_wallpaper(&state, "https://img/1.jpg", "lock").await.unwrap();
        assert_eq!(dialog.title(), "✅ Success!");
    }

    #[tokio::test]
    async fn test_unknown_target_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut parts = Parts::new(dir.path());
        parts.image_source.expect_download().never();
        let state = parts.build();

        let error = set_wallpaper(&state, "https://img/1.jpg", "desk").await.unwrap_err();
        assert_eq!(error.error_type, ErrorType::Validation);
    }

    #[tokio::test]
    async fn test_bridge_error_is_retryable() {
        let dir = tempfile::tempdir().unwrap();
        let mut parts = Parts::new(dir.path());
        parts.image_source.expect_download().returning(|_, destination| {
            std::fs::write(destination, b"jpeg").unwrap();
            Ok(4)
        });
        parts
            .bridge
            .expect_set_wallpaper()
            .returning(|_, _| Err("Wallpaper manager unavailable".to_string()));
        let state = parts.build();

        let error = set_wallpaper(&state, "https://img/1.jpg", "both").await.unwrap_err();
        assert_eq!(error.error_type, ErrorType::Bridge);
        assert!(matches!(error.dialog, Dialog::Error(ref d) if d.retryable));
    }

    #[tokio::test]
    async fn test_save_wallpaper_complete_dialog() {
        let dir = tempfile::tempdir().unwrap();
        let mut parts = Parts::new(dir.path());
        parts.image_source.expect_download().returning(|_, destination| {
            std::fs::write(destination, b"jpeg").unwrap();
            Ok(4)
        });
        let state = parts.build();

        let saved = save_wallpaper(&state, "https://img/1.jpg", "Cowboy Bebop")
            .await
            .unwrap();
        assert!(saved.path.contains("AnimeWallpaper_Cowboy_Bebop_"));
        assert_eq!(
            saved.dialog,
            Dialog::info("✅ Download Complete!", "\"Cowboy Bebop\" has been saved successfully!")
        );
    }

    #[tokio::test]
    async fn test_save_without_permission_asks_for_it() {
        let dir = tempfile::tempdir().unwrap();
        let mut parts = Parts::new(dir.path());
        let mut permission = MockStoragePermission::new();
        permission.expect_request_access().returning(|| false);
        parts.permission = Arc::new(permission);
        let state = parts.build();

        let error = save_wallpaper(&state, "https://img/1.jpg", "Trigun").await.unwrap_err();
        assert_eq!(error.error_type, ErrorType::Permission);
        match error.dialog {
            Dialog::PermissionRequired(dialog) => {
                assert!(dialog.message.starts_with("Storage permission is needed"))
            }
            other => panic!("unexpected dialog {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_download_failure_dialog() {
        let dir = tempfile::tempdir().unwrap();
        let mut parts = Parts::new(dir.path());
        parts
            .image_source
            .expect_download()
            .returning(|_, _| Err(AppError::HttpStatus(404)));
        let state = parts.build();

        let error = save_wallpaper(&state, "https://img/1.jpg", "Trigun").await.unwrap_err();
        assert_eq!(error.dialog.title(), "Download Failed");
    }
}
