// src/repositories/collection_repository.rs

use std::sync::Arc;

use crate::domain::collection::Collection;
use crate::error::AppResult;
use crate::repositories::key_value_store::{read_json, write_json, KeyValueStore};

pub const COLLECTIONS_KEY: &str = "anime_collections";

#[cfg_attr(test, mockall::automock)]
pub trait CollectionRepository: Send + Sync {
    /// `None` when collections were never stored (first run)
    fn load_all(&self) -> AppResult<Option<Vec<Collection>>>;
    fn save_all(&self, collections: &[Collection]) -> AppResult<()>;
}

pub struct KvCollectionRepository {
    store: Arc<dyn KeyValueStore>,
}

impl KvCollectionRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

impl CollectionRepository for KvCollectionRepository {
    fn load_all(&self) -> AppResult<Option<Vec<Collection>>> {
        read_json(self.store.as_ref(), COLLECTIONS_KEY)
    }

    fn save_all(&self, collections: &[Collection]) -> AppResult<()> {
        write_json(self.store.as_ref(), COLLECTIONS_KEY, collections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::collection::default_collections;
    use crate::repositories::key_value_store::InMemoryKeyValueStore;

    #[test]
    fn test_first_run_has_no_collections_key() {
        let repo = KvCollectionRepository::new(Arc::new(InMemoryKeyValueStore::new()));
        assert_eq!(repo.load_all().unwrap(), None);
    }

    #[test]
    fn test_empty_list_is_distinct_from_missing() {
        let repo = KvCollectionRepository::new(Arc::new(InMemoryKeyValueStore::new()));
        repo.save_all(&[]).unwrap();
        assert_eq!(repo.load_all().unwrap(), Some(Vec::new()));
    }

    #[test]
    fn test_round_trip_keeps_members() {
        let repo = KvCollectionRepository::new(Arc::new(InMemoryKeyValueStore::new()));
        let mut collections = default_collections();
        collections[0].add_members(&vec!["5".to_string(), "3".to_string()]);

        repo.save_all(&collections).unwrap();

        assert_eq!(repo.load_all().unwrap(), Some(collections));
    }
}
