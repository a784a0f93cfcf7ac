// src/application/state.rs
//
// Application state shared by every command.
// Built explicitly by the shell; there are no global singletons.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::config::AppConfig;
use crate::db::{
    create_connection_pool, get_connection, initialize_database, verify_database_integrity,
};
use crate::error::{AppError, AppResult};
use crate::events::{register_activity_handlers, EventBus};
use crate::integrations::{
    CatalogClient, FileSystemWallpaperBridge, HttpImageSource, ImageSource,
    ImplicitStoragePermission, KitsuClient, StoragePermission, WallpaperBridge,
};
use crate::repositories::{
    CollectionRepository, FavoriteRepository, HistoryRepository, KeyValueStore,
    KvCollectionRepository, KvFavoriteRepository, KvHistoryRepository, SqliteKeyValueStore,
};
use crate::services::{FavoritesService, RecommendationService, SearchService, WallpaperService};

/// All services are Arc-wrapped for sharing across commands.
/// The favorites store is single-owner and sits behind a mutex.
pub struct AppState {
    pub config: AppConfig,
    pub event_bus: Arc<EventBus>,
    pub catalog: Arc<dyn CatalogClient>,
    pub favorites: Mutex<FavoritesService>,
    pub search: Arc<SearchService>,
    pub recommendations: Arc<RecommendationService>,
    pub wallpapers: Arc<WallpaperService>,
}

impl AppState {
    /// Production wiring: SQLite key-value store, Kitsu catalog, HTTP image
    /// downloads and the file-system wallpaper bridge.
    pub fn new(config: AppConfig) -> AppResult<Self> {
        config.validate()?;

        // 1. INFRASTRUCTURE
        let pool = Arc::new(create_connection_pool(&config.database_path)?);
        {
            let conn = get_connection(&pool)?;
            initialize_database(&conn)?;
            verify_database_integrity(&conn)?;
        }
        let store: Arc<dyn KeyValueStore> = Arc::new(SqliteKeyValueStore::new(pool));

        // 2. INTEGRATIONS
        let catalog: Arc<dyn CatalogClient> = Arc::new(KitsuClient::new(&config)?);
        let image_source: Arc<dyn ImageSource> = Arc::new(HttpImageSource::new(&config)?);
        let bridge: Arc<dyn WallpaperBridge> =
            Arc::new(FileSystemWallpaperBridge::new(config.wallpaper_dir.clone()));
        let permission: Arc<dyn StoragePermission> = Arc::new(ImplicitStoragePermission);

        let state = Self::with_parts(config, store, catalog, image_source, bridge, permission)?;
        register_activity_handlers(&state.event_bus);

        log::info!("Application state initialized");
        Ok(state)
    }

    /// Wire the services over caller-supplied infrastructure
    pub fn with_parts(
        config: AppConfig,
        store: Arc<dyn KeyValueStore>,
        catalog: Arc<dyn CatalogClient>,
        image_source: Arc<dyn ImageSource>,
        bridge: Arc<dyn WallpaperBridge>,
        permission: Arc<dyn StoragePermission>,
    ) -> AppResult<Self> {
        let event_bus = Arc::new(EventBus::new());

        // REPOSITORIES
        let favorite_repo: Arc<dyn FavoriteRepository> =
            Arc::new(KvFavoriteRepository::new(store.clone()));
        let collection_repo: Arc<dyn CollectionRepository> =
            Arc::new(KvCollectionRepository::new(store.clone()));
        let history_repo: Arc<dyn HistoryRepository> = Arc::new(KvHistoryRepository::new(store));

        // SERVICES
        let favorites = FavoritesService::new(favorite_repo, collection_repo, event_bus.clone());
        let search = SearchService::new(
            catalog.clone(),
            history_repo.clone(),
            config.search_page_size,
            config.recent_search_capacity,
        );
        let recommendations =
            RecommendationService::new(catalog.clone(), history_repo, config.clone());
        let wallpapers =
            WallpaperService::new(image_source, bridge, permission, event_bus.clone(), &config)?;

        Ok(Self {
            config,
            event_bus,
            catalog,
            favorites: Mutex::new(favorites),
            search: Arc::new(search),
            recommendations: Arc::new(recommendations),
            wallpapers: Arc::new(wallpapers),
        })
    }

    /// Read persisted favorites, collections and histories.
    ///
    /// Every part is attempted; the first failure is returned.
    pub fn load(&self) -> AppResult<()> {
        let results = [
            self.favorites_lock().and_then(|mut favorites| favorites.load()),
            self.search.load_recent(),
            self.recommendations.load_history(),
        ];

        results.into_iter().collect::<AppResult<Vec<()>>>().map(|_| ())
    }

    pub fn favorites_lock(&self) -> AppResult<MutexGuard<'_, FavoritesService>> {
        self.favorites
            .lock()
            .map_err(|_| AppError::Other("Favorites store lock poisoned".to_string()))
    }

    /// Heart state for a catalog card; false when the store is unavailable
    pub fn is_favorite(&self, item_id: &str) -> bool {
        self.favorites_lock()
            .map(|favorites| favorites.is_favorite(item_id))
            .unwrap_or(false)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::integrations::kitsu::client::MockCatalogClient;
    use crate::integrations::wallpaper::bridge::MockWallpaperBridge;
    use crate::integrations::wallpaper::image_source::MockImageSource;
    use crate::repositories::InMemoryKeyValueStore;

    pub struct Parts {
        pub catalog: MockCatalogClient,
        pub image_source: MockImageSource,
        pub bridge: MockWallpaperBridge,
        pub permission: Arc<dyn StoragePermission>,
        pub config: AppConfig,
    }

    impl Parts {
        pub fn new(root: &std::path::Path) -> Self {
            Self {
                catalog: MockCatalogClient::new(),
                image_source: MockImageSource::new(),
                bridge: MockWallpaperBridge::new(),
                permission: Arc::new(ImplicitStoragePermission),
                config: AppConfig {
                    download_root: root.join("downloads"),
                    gallery_dir: root.join("gallery"),
                    wallpaper_dir: root.join("wallpaper"),
                    ..AppConfig::default()
                },
            }
        }

        pub fn build(self) -> AppState {
            let state = AppState::with_parts(
                self.config,
                Arc::new(InMemoryKeyValueStore::new()),
                Arc::new(self.catalog),
                Arc::new(self.image_source),
                Arc::new(self.bridge),
                self.permission,
            )
            .unwrap();
            state.load().unwrap();
            state
        }
    }
}
