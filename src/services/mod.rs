// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod favorites_service;
pub mod recommendation_service;
pub mod search_service;
pub mod wallpaper_service;

pub use favorites_service::FavoritesService;

pub use recommendation_service::{Clock, Recommendation, RecommendationService, SystemClock};

pub use search_service::{SearchOutcome, SearchService, MIN_QUERY_LEN};

pub use wallpaper_service::{GalleryNaming, WallpaperService};
