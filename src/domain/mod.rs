// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file declares all domain modules and re-exports their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod catalog;
pub mod collection;
pub mod favorite;
pub mod recommendation;
pub mod search;
pub mod wallpaper;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Catalog Domain
pub use catalog::{CatalogFilter, CatalogItem, CatalogPage, Category, PosterImage};

// Favorite Domain
pub use favorite::{validate_favorite, FavoriteFilter, FavoriteItem, FavoriteSort, ItemId};

// Collection Domain
pub use collection::{default_collections, validate_collection, Collection};

// Recommendation Domain
pub use recommendation::{
    DayPart, Holiday, RecommendationInteraction, RecommendationKind, SeasonBucket,
};

// Search Domain
pub use search::{BoundedHistory, RecentSearches};

// Wallpaper Domain
pub use wallpaper::WallpaperTarget;

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
