// src/services/favorites_service.rs
//
// Favorites & Collections Store
//
// Owns the in-memory favorites set and the user's collections, persisting
// the whole set after every mutation.
//
// CRITICAL RULES:
// - Memory is updated first; a failed write is reported, never rolled back
// - Collections never own favorites: removing a favorite leaves member ids
//   in place and every read filters them out
// - Unknown collection ids are no-ops for writes and "all" for reads

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;

use crate::domain::{
    default_collections, validate_collection, validate_favorite, Collection, FavoriteFilter,
    FavoriteItem, FavoriteSort, ItemId,
};
use crate::error::{AppError, AppResult};
use crate::events::{
    CollectionCreated, CollectionMembersChanged, EventBus, FavoriteAdded, FavoriteRemoved,
    FavoritesRemoved,
};
use crate::repositories::{CollectionRepository, FavoriteRepository};

pub struct FavoritesService {
    favorite_repo: Arc<dyn FavoriteRepository>,
    collection_repo: Arc<dyn CollectionRepository>,
    event_bus: Arc<EventBus>,
    favorites: Vec<FavoriteItem>,
    collections: Vec<Collection>,
}

impl FavoritesService {
    pub fn new(
        favorite_repo: Arc<dyn FavoriteRepository>,
        collection_repo: Arc<dyn CollectionRepository>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            favorite_repo,
            collection_repo,
            event_bus,
            favorites: Vec::new(),
            collections: Vec::new(),
        }
    }

    /// Read favorites and collections from storage.
    ///
    /// On first run (no collections stored) the default collections are
    /// seeded and written back. Whatever could be read is kept; the first
    /// error is returned.
    pub fn load(&mut self) -> AppResult<()> {
        let mut first_error: Option<AppError> = None;

        match self.favorite_repo.load_all() {
            Ok(favorites) => self.favorites = favorites,
            Err(e) => {
                log::error!("Failed to load favorites: {}", e);
                first_error.get_or_insert(e);
            }
        }

        match self.collection_repo.load_all() {
            Ok(Some(collections)) => self.collections = collections,
            Ok(None) => {
                log::info!("No collections stored, seeding defaults");
                self.collections = default_collections();
                if let Err(e) = self.persist_collections() {
                    first_error.get_or_insert(e);
                }
            }
            Err(e) => {
                log::error!("Failed to load collections: {}", e);
                first_error.get_or_insert(e);
            }
        }

        log::debug!(
            "Loaded {} favorites, {} collections",
            self.favorites.len(),
            self.collections.len()
        );

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    // ========================================================================
    // FAVORITES
    // ========================================================================

    /// Insert `item` if absent, remove it if present.
    ///
    /// Returns whether the item is a favorite afterward. When the write fails
    /// the in-memory change stands and the storage error is returned.
    pub fn toggle_favorite(&mut self, item: FavoriteItem) -> AppResult<bool> {
        validate_favorite(&item)?;

        let now_favorite = match self.favorites.iter().position(|f| f.id == item.id) {
            Some(index) => {
                let removed = self.favorites.remove(index);
                self.event_bus.emit(FavoriteRemoved::new(removed.id));
                false
            }
            None => {
                self.event_bus
                    .emit(FavoriteAdded::new(item.id.clone(), item.title.clone()));
                self.favorites.push(item);
                true
            }
        };

        self.persist_favorites()?;
        Ok(now_favorite)
    }

    pub fn is_favorite(&self, item_id: &str) -> bool {
        self.favorites.iter().any(|f| f.id == item_id)
    }

    /// Favorites in insertion order
    pub fn favorites(&self) -> &[FavoriteItem] {
        &self.favorites
    }

    /// Filtered, sorted copy of the favorites. Does not mutate state.
    pub fn list_favorites(
        &self,
        filter: &FavoriteFilter,
        sort: FavoriteSort,
    ) -> Vec<FavoriteItem> {
        let collection = match filter {
            FavoriteFilter::All => None,
            FavoriteFilter::Collection(id) => self.collection(id),
        };

        let mut items: Vec<FavoriteItem> = self
            .favorites
            .iter()
            .filter(|f| collection.map_or(true, |c| c.contains(&f.id)))
            .cloned()
            .collect();

        sort.apply(&mut items);
        items
    }

    /// Remove every listed id from the favorites set. Collection membership
    /// is left untouched. Returns how many favorites were removed.
    pub fn remove_favorites(&mut self, item_ids: &[ItemId]) -> AppResult<usize> {
        let targets: HashSet<&str> = item_ids.iter().map(String::as_str).collect();

        let mut removed: Vec<ItemId> = Vec::new();
        self.favorites.retain(|f| {
            if targets.contains(f.id.as_str()) {
                removed.push(f.id.clone());
                false
            } else {
                true
            }
        });

        if removed.is_empty() {
            return Ok(0);
        }

        let count = removed.len();
        self.event_bus.emit(FavoritesRemoved::new(removed));
        self.persist_favorites()?;
        Ok(count)
    }

    // ========================================================================
    // COLLECTIONS
    // ========================================================================

    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    pub fn collection(&self, collection_id: &str) -> Option<&Collection> {
        self.collections.iter().find(|c| c.id == collection_id)
    }

    /// Create a collection named `name` (trimmed).
    ///
    /// A blank name is a no-op returning `None`. Otherwise returns the new id,
    /// derived from the current time in milliseconds.
    pub fn create_collection(
        &mut self,
        name: &str,
        emoji: &str,
        initial_member_ids: Vec<ItemId>,
    ) -> AppResult<Option<String>> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(None);
        }

        let collection = Collection::new(
            self.next_collection_id(),
            name.to_string(),
            emoji.to_string(),
            initial_member_ids,
        );
        validate_collection(&collection)?;

        let id = collection.id.clone();
        self.event_bus.emit(CollectionCreated::new(
            id.clone(),
            collection.name.clone(),
            collection.member_ids.len(),
        ));
        self.collections.push(collection);

        self.persist_collections()?;
        Ok(Some(id))
    }

    /// Union `item_ids` into the collection. Unknown ids change nothing.
    /// Returns how many ids were new members.
    pub fn add_to_collection(
        &mut self,
        collection_id: &str,
        item_ids: &[ItemId],
    ) -> AppResult<usize> {
        let Some(collection) = self.collections.iter_mut().find(|c| c.id == collection_id) else {
            log::debug!("add_to_collection: unknown collection {}", collection_id);
            return Ok(0);
        };

        let added = collection.add_members(item_ids);
        if added == 0 {
            return Ok(0);
        }

        self.event_bus.emit(CollectionMembersChanged::new(
            collection_id.to_string(),
            added,
            0,
        ));
        self.persist_collections()?;
        Ok(added)
    }

    /// Returns how many of `item_ids` were removed from the collection
    pub fn remove_from_collection(
        &mut self,
        collection_id: &str,
        item_ids: &[ItemId],
    ) -> AppResult<usize> {
        let Some(collection) = self.collections.iter_mut().find(|c| c.id == collection_id) else {
            return Ok(0);
        };

        let removed = collection.remove_members(item_ids);
        if removed == 0 {
            return Ok(0);
        }

        self.event_bus.emit(CollectionMembersChanged::new(
            collection_id.to_string(),
            0,
            removed,
        ));
        self.persist_collections()?;
        Ok(removed)
    }

    /// Members that are still favorites; orphaned ids are not counted
    pub fn live_member_count(&self, collection_id: &str) -> usize {
        self.collection(collection_id)
            .map(|c| self.favorites.iter().filter(|f| c.contains(&f.id)).count())
            .unwrap_or(0)
    }

    // ========================================================================
    // INTERNAL
    // ========================================================================

    fn next_collection_id(&self) -> String {
        let mut candidate = Utc::now().timestamp_millis();
        while self.collection(&candidate.to_string()).is_some() {
            candidate += 1;
        }
        candidate.to_string()
    }

    fn persist_favorites(&self) -> AppResult<()> {
        self.favorite_repo.save_all(&self.favorites).map_err(|e| {
            log::error!("Failed to persist favorites: {}", e);
            e
        })
    }

    fn persist_collections(&self) -> AppResult<()> {
        self.collection_repo
            .save_all(&self.collections)
            .map_err(|e| {
                log::error!("Failed to persist collections: {}", e);
                e
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::collection_repository::MockCollectionRepository;
    use crate::repositories::favorite_repository::MockFavoriteRepository;
    use crate::repositories::{
        InMemoryKeyValueStore, KeyValueStore, KvCollectionRepository, KvFavoriteRepository,
        COLLECTIONS_KEY,
    };
    use chrono::{Duration, TimeZone};

    fn service_with_store(store: Arc<InMemoryKeyValueStore>) -> FavoritesService {
        let mut service = FavoritesService::new(
            Arc::new(KvFavoriteRepository::new(store.clone())),
            Arc::new(KvCollectionRepository::new(store)),
            Arc::new(EventBus::new()),
        );
        service.load().unwrap();
        service
    }

    fn service() -> FavoritesService {
        service_with_store(Arc::new(InMemoryKeyValueStore::new()))
    }

    fn item(id: &str, title: &str) -> FavoriteItem {
        FavoriteItem::new(id, title, format!("https://img/{}.jpg", id))
    }

    fn ids(values: &[&str]) -> Vec<ItemId> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_first_load_seeds_and_persists_defaults() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        let service = service_with_store(store.clone());

        let names: Vec<&str> = service.collections().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Watched", "Want to Watch"]);
        assert!(store.get(COLLECTIONS_KEY).unwrap().is_some());
    }

    #[test]
    fn test_existing_empty_collections_are_not_reseeded() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        store.set(COLLECTIONS_KEY, "[]").unwrap();

        let service = service_with_store(store);
        assert!(service.collections().is_empty());
    }

    #[test]
    fn test_toggle_parity() {
        let mut service = service();

        for n in 1..=5 {
            let now_favorite = service.toggle_favorite(item("1", "Trigun")).unwrap();
            assert_eq!(now_favorite, n % 2 == 1);
            assert_eq!(service.is_favorite("1"), n % 2 == 1);
        }
    }

    #[test]
    fn test_favorites_survive_reload() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        {
            let mut service = service_with_store(store.clone());
            service.toggle_favorite(item("1", "Trigun")).unwrap();
            service.toggle_favorite(item("2", "Monster")).unwrap();
        }

        let reloaded = service_with_store(store);
        assert!(reloaded.is_favorite("1"));
        assert!(reloaded.is_favorite("2"));
    }

    #[test]
    fn test_sort_by_name() {
        let mut service = service();
        service.toggle_favorite(item("1", "B")).unwrap();
        service.toggle_favorite(item("2", "A")).unwrap();

        let listed = service.list_favorites(&FavoriteFilter::All, FavoriteSort::Name);
        let order: Vec<&str> = listed.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(order, vec!["2", "1"]);
    }

    #[test]
    fn test_sort_by_rating_treats_missing_as_lowest() {
        let mut service = service();
        service.toggle_favorite(item("1", "Unrated")).unwrap();
        service.toggle_favorite(item("2", "Good").with_rating(80.0)).unwrap();
        service.toggle_favorite(item("3", "Great").with_rating(91.5)).unwrap();

        let listed = service.list_favorites(&FavoriteFilter::All, FavoriteSort::Rating);
        let ratings: Vec<f64> = listed.iter().map(|f| f.sort_rating()).collect();
        assert!(ratings.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(listed.last().unwrap().id, "1");
    }

    #[test]
    fn test_sort_recent_uses_date_added() {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let favorites = vec![
            item("old", "Old").added_at(base),
            item("new", "New").added_at(base + Duration::days(3)),
        ];

        let mut repo = MockFavoriteRepository::new();
        repo.expect_load_all().return_once(move || Ok(favorites));
        let mut collections = MockCollectionRepository::new();
        collections
            .expect_load_all()
            .return_once(|| Ok(Some(Vec::new())));

        let mut service =
            FavoritesService::new(Arc::new(repo), Arc::new(collections), Arc::new(EventBus::new()));
        service.load().unwrap();

        let listed = service.list_favorites(&FavoriteFilter::All, FavoriteSort::Recent);
        assert_eq!(listed[0].id, "new");
        // Listing is a projection
        assert_eq!(service.favorites()[0].id, "old");
    }

    #[test]
    fn test_blank_collection_name_is_noop() {
        let mut service = service();
        let before = service.collections().to_vec();

        assert_eq!(service.create_collection("", "📁", Vec::new()).unwrap(), None);
        assert_eq!(service.create_collection("   ", "📁", ids(&["1"])).unwrap(), None);

        assert_eq!(service.collections(), before.as_slice());
    }

    #[test]
    fn test_create_collection_trims_and_gets_unique_ids() {
        let mut service = service();

        let a = service.create_collection("  Mecha  ", "🤖", ids(&["1"])).unwrap().unwrap();
        let b = service.create_collection("Mecha 2", "🤖", Vec::new()).unwrap().unwrap();

        assert_ne!(a, b);
        let created = service.collection(&a).unwrap();
        assert_eq!(created.name, "Mecha");
        assert!(created.contains("1"));
        assert_eq!(service.collections().len(), 4);
    }

    #[test]
    fn test_add_to_unknown_collection_changes_nothing() {
        let mut service = service();
        let before = service.collections().to_vec();

        assert_eq!(service.add_to_collection("unknown-id", &ids(&["1", "2"])).unwrap(), 0);
        assert_eq!(service.collections(), before.as_slice());
    }

    #[test]
    fn test_add_to_collection_is_idempotent_union() {
        let mut service = service();

        assert_eq!(service.add_to_collection("watched", &ids(&["1", "2"])).unwrap(), 2);
        assert_eq!(service.add_to_collection("watched", &ids(&["2", "3"])).unwrap(), 1);
        assert_eq!(service.add_to_collection("watched", &ids(&["1"])).unwrap(), 0);

        assert_eq!(service.collection("watched").unwrap().member_ids.len(), 3);
    }

    #[test]
    fn test_remove_from_collection() {
        let mut service = service();
        service.add_to_collection("watched", &ids(&["1", "2"])).unwrap();

        assert_eq!(service.remove_from_collection("watched", &ids(&["2", "9"])).unwrap(), 1);
        assert!(!service.collection("watched").unwrap().contains("2"));
        assert_eq!(service.remove_from_collection("nope", &ids(&["1"])).unwrap(), 0);
    }

    #[test]
    fn test_remove_favorites_leaves_members_but_reads_filter_them() {
        let mut service = service();
        service.toggle_favorite(item("1", "Trigun")).unwrap();
        service.toggle_favorite(item("2", "Monster")).unwrap();
        service.add_to_collection("watched", &ids(&["1", "2"])).unwrap();

        assert_eq!(service.remove_favorites(&ids(&["1", "404"])).unwrap(), 1);

        assert!(service.collection("watched").unwrap().contains("1"));
        assert_eq!(service.live_member_count("watched"), 1);

        let listed = service.list_favorites(
            &FavoriteFilter::Collection("watched".to_string()),
            FavoriteSort::Recent,
        );
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, "2");
    }

    #[test]
    fn test_unknown_collection_filter_lists_everything() {
        let mut service = service();
        service.toggle_favorite(item("1", "Trigun")).unwrap();

        let listed = service.list_favorites(
            &FavoriteFilter::Collection("gone".to_string()),
            FavoriteSort::Name,
        );
        assert_eq!(listed.len(), 1);
    }

    #[test]
    fn test_persistence_failure_keeps_memory_change() {
        let mut repo = MockFavoriteRepository::new();
        repo.expect_load_all().return_once(|| Ok(Vec::new()));
        repo.expect_save_all()
            .returning(|_| Err(AppError::Storage("disk full".to_string())));

        let mut collections = MockCollectionRepository::new();
        collections
            .expect_load_all()
            .return_once(|| Ok(Some(Vec::new())));

        let mut service =
            FavoritesService::new(Arc::new(repo), Arc::new(collections), Arc::new(EventBus::new()));
        service.load().unwrap();

        let result = service.toggle_favorite(item("1", "Trigun"));
        assert!(matches!(result, Err(AppError::Storage(_))));
        assert!(service.is_favorite("1"));
    }

    #[test]
    fn test_malformed_collections_reported_and_favorites_still_loaded() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        KvFavoriteRepository::new(store.clone())
            .save_all(&[item("1", "Trigun")])
            .unwrap();
        store.set(COLLECTIONS_KEY, "{broken").unwrap();

        let mut service = FavoritesService::new(
            Arc::new(KvFavoriteRepository::new(store.clone())),
            Arc::new(KvCollectionRepository::new(store)),
            Arc::new(EventBus::new()),
        );

        let result = service.load();
        assert!(matches!(result, Err(AppError::MalformedData { .. })));
        assert!(service.is_favorite("1"));
        assert!(service.collections().is_empty());
    }

    #[test]
    fn test_invalid_item_rejected_without_change() {
        let mut service = service();
        let result = service.toggle_favorite(item(" ", "Blank"));
        assert!(matches!(result, Err(AppError::Domain(_))));
        assert!(service.favorites().is_empty());
    }

    #[test]
    fn test_events_emitted() {
        let bus = Arc::new(EventBus::new());
        let store = Arc::new(InMemoryKeyValueStore::new());
        let mut service = FavoritesService::new(
            Arc::new(KvFavoriteRepository::new(store.clone())),
            Arc::new(KvCollectionRepository::new(store)),
            bus.clone(),
        );
        service.load().unwrap();

        service.toggle_favorite(item("1", "Trigun")).unwrap();
        service.create_collection("Rewatch", "🔁", Vec::new()).unwrap();
        service.remove_favorites(&ids(&["1"])).unwrap();

        let types: Vec<String> = bus.get_event_log().into_iter().map(|e| e.event_type).collect();
        assert_eq!(
            types,
            vec!["FavoriteAdded", "CollectionCreated", "FavoritesRemoved"]
        );
    }
}
