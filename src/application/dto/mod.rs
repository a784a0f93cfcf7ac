// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are UI-friendly representations (camelCase, dates as RFC 3339)
// - DTOs NEVER leak domain invariants
// - Conversion FROM domain entities only (never TO)

use serde::{Deserialize, Serialize};

use crate::application::error_handling::Dialog;
use crate::domain::{CatalogItem, CatalogPage, Category, Collection, FavoriteItem};
use crate::services::{Recommendation, SearchOutcome};

// ============================================================================
// CATALOG DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItemDto {
    pub id: String,
    pub title: String,
    pub synopsis: Option<String>,
    pub rating: Option<f64>,
    pub episode_count: Option<u32>,
    pub start_date: Option<String>,
    pub poster_url: String,
    pub wallpaper_url: Option<String>,
    pub is_favorite: bool,
}

impl CatalogItemDto {
    pub fn from_item(item: &CatalogItem, is_favorite: bool) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            synopsis: item.synopsis.clone(),
            rating: item.average_rating,
            episode_count: item.episode_count,
            start_date: item.start_date.clone(),
            poster_url: item.poster.best_display_url().to_string(),
            wallpaper_url: item.poster.wallpaper_url().map(str::to_string),
            is_favorite,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPageDto {
    pub items: Vec<CatalogItemDto>,
    pub offset: u32,
    pub next_offset: Option<u32>,
}

impl CatalogPageDto {
    /// `is_favorite` marks the heart on each card
    pub fn from_page<F>(page: &CatalogPage, is_favorite: F) -> Self
    where
        F: Fn(&str) -> bool,
    {
        Self {
            items: page
                .items
                .iter()
                .map(|item| CatalogItemDto::from_item(item, is_favorite(&item.id)))
                .collect(),
            offset: page.offset,
            next_offset: page.next_offset,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDto {
    pub name: String,
    pub icon: String,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            name: category.display_name().to_string(),
            icon: category.icon().to_string(),
        }
    }
}

// ============================================================================
// FAVORITE & COLLECTION DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteDto {
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub rating: Option<f64>,
    pub episode_count: Option<u32>,
    pub date_added: String,
}

impl From<FavoriteItem> for FavoriteDto {
    fn from(item: FavoriteItem) -> Self {
        Self {
            id: item.id,
            title: item.title,
            image_url: item.image_url,
            rating: item.rating,
            episode_count: item.episode_count,
            date_added: item.date_added.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionDto {
    pub id: String,
    pub name: String,
    pub emoji: String,
    /// Members that are still favorites
    pub member_count: usize,
    pub date_created: String,
}

impl CollectionDto {
    pub fn from_collection(collection: &Collection, member_count: usize) -> Self {
        Self {
            id: collection.id.clone(),
            name: collection.name.clone(),
            emoji: collection.emoji.clone(),
            member_count,
            date_created: collection.date_created.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCollectionDto {
    pub name: String,
    pub emoji: String,
    #[serde(default)]
    pub member_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleFavoriteDto {
    pub is_favorite: bool,
    pub dialog: Dialog,
}

// ============================================================================
// SEARCH & RECOMMENDATION DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchResultDto {
    Cleared,
    Results { page: CatalogPageDto },
    Superseded,
}

impl SearchResultDto {
    pub fn from_outcome<F>(outcome: &SearchOutcome, is_favorite: F) -> Self
    where
        F: Fn(&str) -> bool,
    {
        match outcome {
            SearchOutcome::Cleared => SearchResultDto::Cleared,
            SearchOutcome::Superseded => SearchResultDto::Superseded,
            SearchOutcome::Results(page) => SearchResultDto::Results {
                page: CatalogPageDto::from_page(page, is_favorite),
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationDto {
    pub kind: String,
    pub title: String,
    pub keyword: String,
    pub items: Vec<CatalogItemDto>,
}

impl RecommendationDto {
    pub fn from_recommendation<F>(recommendation: &Recommendation, is_favorite: F) -> Self
    where
        F: Fn(&str) -> bool,
    {
        Self {
            kind: recommendation.kind.to_string(),
            title: recommendation.title.clone(),
            keyword: recommendation.filter.keyword().to_string(),
            items: recommendation
                .items
                .iter()
                .map(|item| CatalogItemDto::from_item(item, is_favorite(&item.id)))
                .collect(),
        }
    }
}

// ============================================================================
// WALLPAPER DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedWallpaperDto {
    pub path: String,
    pub dialog: Dialog,
}
