// src/application/commands/favorites_commands.rs
//
// Favorites & Collections Command Handlers
//
// RULES:
// - Accept DTOs
// - Call the favorites store
// - Return DTOs plus the dialog the shell should show
// - A failed write still leaves the in-memory change in place

use crate::application::dto::{
    CatalogItemDto, CollectionDto, CreateCollectionDto, FavoriteDto, ToggleFavoriteDto,
};
use crate::application::error_handling::{Dialog, ErrorResponse, IntoErrorResponse, Operation};
use crate::application::state::AppState;
use crate::domain::{FavoriteFilter, FavoriteItem, FavoriteSort};

/// Heart tapped on a catalog card
pub fn toggle_favorite(
    state: &AppState,
    item: CatalogItemDto,
) -> Result<ToggleFavoriteDto, ErrorResponse> {
    let title = item.title.clone();

    let mut favorite = FavoriteItem::new(item.id, item.title, item.poster_url);
    favorite.rating = item.rating;
    favorite.episode_count = item.episode_count;

    let is_favorite = state
        .favorites_lock()
        .and_then(|mut favorites| favorites.toggle_favorite(favorite))
        .for_op(Operation::Favorites)?;

    let dialog = if is_favorite {
        Dialog::info("⭐ Added", format!("{} added to favorites", title))
    } else {
        Dialog::info("❤️ Removed", format!("{} removed from favorites", title))
    };

    Ok(ToggleFavoriteDto { is_favorite, dialog })
}

/// Favorites for the grid.
///
/// `collection_id` of `None` (or an unknown id) lists everything;
/// `sort` is one of "recent", "name", "rating".
pub fn list_favorites(
    state: &AppState,
    collection_id: Option<String>,
    sort: &str,
) -> Result<Vec<FavoriteDto>, ErrorResponse> {
    let sort: FavoriteSort = sort.parse().map_err(ErrorResponse::validation)?;
    let filter = collection_id.map_or(FavoriteFilter::All, FavoriteFilter::Collection);

    let favorites = state.favorites_lock().for_op(Operation::Favorites)?;

    Ok(favorites
        .list_favorites(&filter, sort)
        .into_iter()
        .map(FavoriteDto::from)
        .collect())
}

/// Dialog to show before `remove_favorites`
pub fn confirm_remove_favorites(item_ids: &[String]) -> Result<Dialog, ErrorResponse> {
    if item_ids.is_empty() {
        return Err(ErrorResponse::validation("No favorites selected"));
    }
    Ok(Dialog::confirm_removal(item_ids.len()))
}

/// Remove the selected favorites. Collection membership is untouched.
pub fn remove_favorites(state: &AppState, item_ids: Vec<String>) -> Result<usize, ErrorResponse> {
    state
        .favorites_lock()
        .and_then(|mut favorites| favorites.remove_favorites(&item_ids))
        .for_op(Operation::Favorites)
}

pub fn list_collections(state: &AppState) -> Result<Vec<CollectionDto>, ErrorResponse> {
    let favorites = state.favorites_lock().for_op(Operation::Favorites)?;

    Ok(favorites
        .collections()
        .iter()
        .map(|c| CollectionDto::from_collection(c, favorites.live_member_count(&c.id)))
        .collect())
}

/// Returns the new collection, or `None` when the name was blank
pub fn create_collection(
    state: &AppState,
    dto: CreateCollectionDto,
) -> Result<Option<CollectionDto>, ErrorResponse> {
    let mut favorites = state.favorites_lock().for_op(Operation::Favorites)?;

    let created = favorites
        .create_collection(&dto.name, &dto.emoji, dto.member_ids)
        .for_op(Operation::Favorites)?;

    Ok(created.and_then(|id| {
        favorites
            .collection(&id)
            .map(|c| CollectionDto::from_collection(c, favorites.live_member_count(&id)))
    }))
}

pub fn add_to_collection(
    state: &AppState,
    collection_id: &str,
    item_ids: Vec<String>,
) -> Result<usize, ErrorResponse> {
    state
        .favorites_lock()
        .and_then(|mut favorites| favorites.add_to_collection(collection_id, &item_ids))
        .for_op(Operation::Favorites)
}

pub fn remove_from_collection(
    state: &AppState,
    collection_id: &str,
    item_ids: Vec<String>,
) -> Result<usize, ErrorResponse> {
    state
        .favorites_lock()
        .and_then(|mut favorites| favorites.remove_from_collection(collection_id, &item_ids))
        .for_op(Operation::Favorites)
}
