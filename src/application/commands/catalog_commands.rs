// src/application/commands/catalog_commands.rs
//
// Catalog Command Handlers
//
// RULES:
// - Call services / clients
// - Return DTOs
// - Never contain business logic

use crate::application::dto::{CatalogPageDto, CategoryDto};
use crate::application::error_handling::{ErrorResponse, IntoErrorResponse, Operation};
use crate::application::state::AppState;
use crate::domain::{CatalogFilter, Category};

/// Browse categories in display order
pub fn list_categories() -> Vec<CategoryDto> {
    Category::all().into_iter().map(CategoryDto::from).collect()
}

/// Trending listing, one page at `offset`
pub async fn fetch_trending(
    state: &AppState,
    offset: u32,
) -> Result<CatalogPageDto, ErrorResponse> {
    fetch_filter(state, CatalogFilter::Trending, offset).await
}

/// Listing for a category chosen by display name ("Slice of Life", ...)
pub async fn fetch_category(
    state: &AppState,
    category_name: &str,
    offset: u32,
) -> Result<CatalogPageDto, ErrorResponse> {
    let category = Category::from_display_name(category_name);
    fetch_filter(state, category.filter(), offset).await
}

async fn fetch_filter(
    state: &AppState,
    filter: CatalogFilter,
    offset: u32,
) -> Result<CatalogPageDto, ErrorResponse> {
    let limit = state.config.page_size_for(&filter);

    let page = state
        .catalog
        .fetch(&filter, limit, offset)
        .await
        .for_op(Operation::Browse)?;

    Ok(CatalogPageDto::from_page(&page, |id| state.is_favorite(id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error_handling::{Dialog, ErrorType};
    use crate::application::state::test_support::Parts;
    use crate::domain::{CatalogItem, CatalogPage, FavoriteItem, PosterImage};
    use crate::error::AppError;

    fn page_of(ids: &[&str]) -> CatalogPage {
        CatalogPage {
            items: ids
                .iter()
                .map(|id| CatalogItem {
                    id: id.to_string(),
                    title: format!("Anime {}", id),
                    synopsis: None,
                    average_rating: Some(80.0),
                    start_date: None,
                    episode_count: Some(12),
                    poster: PosterImage::default(),
                })
                .collect(),
            offset: 0,
            next_offset: Some(ids.len() as u32),
        }
    }

    #[test]
    fn test_list_categories_order() {
        let names: Vec<String> = list_categories().into_iter().map(|c| c.name).collect();
        assert_eq!(
            names,
            vec!["Popular", "Action", "Romance", "Fantasy", "Slice of Life", "Sci-Fi"]
        );
    }

    #[tokio::test]
    async fn test_trending_marks_favorites() {
        let dir = tempfile::tempdir().unwrap();
        let mut parts = Parts::new(dir.path());
        parts
            .catalog
            .expect_fetch()
            .withf(|filter, limit, offset| {
                *filter == CatalogFilter::Trending && *limit == 20 && *offset == 0
            })
            .returning(|_, _, _| Ok(page_of(&["1", "2"])));
        let state = parts.build();

        state
            .favorites_lock()
            .unwrap()
            .toggle_favorite(FavoriteItem::new("2", "Anime 2", "https://img/2.jpg"))
            .unwrap();

        let page = fetch_trending(&state, 0).await.unwrap();
        assert!(!page.items[0].is_favorite);
        assert!(page.items[1].is_favorite);
        assert_eq!(page.next_offset, Some(2));
    }

    #[tokio::test]
    async fn test_category_uses_slug_and_category_page_size() {
        let dir = tempfile::tempdir().unwrap();
        let mut parts = Parts::new(dir.path());
        parts
            .catalog
            .expect_fetch()
            .withf(|filter, limit, offset| {
                *filter == CatalogFilter::category("slice-of-life") && *limit == 15 && *offset == 15
            })
            .times(1)
            .returning(|_, _, _| Ok(page_of(&["9"])));
        let state = parts.build();

        let page = fetch_category(&state, "Slice of Life", 15).await.unwrap();
        assert_eq!(page.items.len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_failure_offers_retry() {
        let dir = tempfile::tempdir().unwrap();
        let mut parts = Parts::new(dir.path());
        parts
            .catalog
            .expect_fetch()
            .returning(|_, _, _| Err(AppError::Network("connection reset".to_string())));
        let state = parts.build();

        let error = fetch_trending(&state, 0).await.unwrap_err();
        assert_eq!(error.error_type, ErrorType::Network);
        match error.dialog {
            Dialog::Error(dialog) => {
                assert_eq!(dialog.message, "Could not fetch anime wallpapers. Please try again.");
                assert!(dialog.retryable);
            }
            other => panic!("unexpected dialog {:?}", other),
        }
    }
}
