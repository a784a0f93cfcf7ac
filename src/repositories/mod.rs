// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers over the key-value store
// - NO business logic
// - NO invariant enforcement
// - NO event emission
// - NO cross-repository calls

pub mod collection_repository;
pub mod favorite_repository;
pub mod history_repository;
pub mod key_value_store;

pub use collection_repository::{CollectionRepository, KvCollectionRepository, COLLECTIONS_KEY};
pub use favorite_repository::{
    FavoriteRepository, KvFavoriteRepository, FAVORITE_DETAILS_KEY, FAVORITE_IDS_KEY,
};
pub use history_repository::{
    HistoryRepository, KvHistoryRepository, RECENT_SEARCHES_KEY, RECOMMENDATION_HISTORY_KEY,
};
pub use key_value_store::{
    read_json, write_json, InMemoryKeyValueStore, KeyValueStore, SqliteKeyValueStore,
};
