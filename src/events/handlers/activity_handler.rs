// src/events/handlers/activity_handler.rs
//
// Activity handlers: turn user-visible changes into log lines.
//
// CRITICAL RULES:
// - Observes only, never mutates services
// - Uses closure-based subscription (EventHandler is internal to bus)

use crate::events::types::{
    CollectionCreated, CollectionMembersChanged, FavoriteAdded, FavoriteRemoved, FavoritesRemoved,
    WallpaperApplied, WallpaperSavedToGallery,
};
use crate::events::EventBus;

pub fn register_activity_handlers(bus: &EventBus) {
    bus.subscribe::<FavoriteAdded, _>(|event| {
        log::info!("[FAVORITES] Added '{}' (id={})", event.title, event.item_id);
    });

    bus.subscribe::<FavoriteRemoved, _>(|event| {
        log::info!("[FAVORITES] Removed id={}", event.item_id);
    });

    bus.subscribe::<FavoritesRemoved, _>(|event| {
        log::info!("[FAVORITES] Bulk removed {} items", event.item_ids.len());
    });

    bus.subscribe::<CollectionCreated, _>(|event| {
        log::info!(
            "[COLLECTIONS] Created '{}' (id={}) with {} members",
            event.name,
            event.collection_id,
            event.member_count
        );
    });

    bus.subscribe::<CollectionMembersChanged, _>(|event| {
        log::info!(
            "[COLLECTIONS] {}: +{} -{}",
            event.collection_id,
            event.added,
            event.removed
        );
    });

    bus.subscribe::<WallpaperApplied, _>(|event| {
        log::info!("[WALLPAPER] Applied to {}", event.target);
    });

    bus.subscribe::<WallpaperSavedToGallery, _>(|event| {
        log::info!("[WALLPAPER] Saved {} to gallery", event.file_name);
    });

    log::debug!("[ACTIVITY] Handlers registered");
}
