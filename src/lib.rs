// src/lib.rs
// AnimeWall - anime wallpaper catalog, favorites and wallpaper bridge core
//
// Architecture:
// - Domain-centric: catalog, favorites, collections, recommendations
// - Event-driven: store changes are announced on the event bus
// - Explicit: state is built by the shell, no global singletons
// - Local-first: favorites and history live in a local key-value store
// - Application Layer: commands and dialogs for a UI shell

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod events;
pub mod infrastructure;
pub mod logging;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;
pub mod integrations;

// ============================================================================
// PUBLIC API - Configuration & Logging
// ============================================================================

pub use config::AppConfig;
pub use logging::init_logger;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    default_collections,
    validate_collection,
    validate_favorite,
    // Search
    BoundedHistory,
    // Catalog
    CatalogFilter,
    CatalogItem,
    CatalogPage,
    Category,
    // Collection
    Collection,
    // Favorite
    FavoriteFilter,
    FavoriteItem,
    FavoriteSort,
    ItemId,
    PosterImage,
    RecentSearches,
    // Recommendation
    RecommendationInteraction,
    RecommendationKind,
    // Wallpaper
    WallpaperTarget,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    create_event_bus,
    register_activity_handlers,
    CollectionCreated,
    CollectionMembersChanged,
    DomainEvent,
    EventBus,
    EventLogEntry,
    FavoriteAdded,
    FavoriteRemoved,
    FavoritesRemoved,
    WallpaperApplied,
    WallpaperSavedToGallery,
};

// ============================================================================
// PUBLIC API - Database & Repositories
// ============================================================================

pub use db::{create_connection_pool, initialize_database, ConnectionPool};

pub use repositories::{
    CollectionRepository,
    FavoriteRepository,
    HistoryRepository,
    InMemoryKeyValueStore,
    KeyValueStore,
    KvCollectionRepository,
    KvFavoriteRepository,
    KvHistoryRepository,
    SqliteKeyValueStore,
};

// ============================================================================
// PUBLIC API - Infrastructure
// ============================================================================

pub use infrastructure::DownloadWorkspace;

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    Clock,
    FavoritesService,
    GalleryNaming,
    Recommendation,
    RecommendationService,
    SearchOutcome,
    SearchService,
    SystemClock,
    WallpaperService,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{AppState, Dialog, ErrorResponse};

pub use application::commands;
pub use application::dto;

// ============================================================================
// PUBLIC API - Integrations
// ============================================================================

pub use integrations::{
    CatalogClient, FileSystemWallpaperBridge, HttpImageSource, ImageSource,
    ImplicitStoragePermission, KitsuClient, StoragePermission, WallpaperBridge,
};
