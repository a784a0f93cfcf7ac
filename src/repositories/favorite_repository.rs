// src/repositories/favorite_repository.rs

use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::favorite::{FavoriteItem, ItemId};
use crate::error::AppResult;
use crate::repositories::key_value_store::{read_json, write_json, KeyValueStore};

/// Ordered list of favorite ids
pub const FAVORITE_IDS_KEY: &str = "@anime_favorites";

/// Full favorite records, used to render favorites offline
pub const FAVORITE_DETAILS_KEY: &str = "@favorite_animes_data";

#[cfg_attr(test, mockall::automock)]
pub trait FavoriteRepository: Send + Sync {
    fn load_all(&self) -> AppResult<Vec<FavoriteItem>>;
    fn save_all(&self, favorites: &[FavoriteItem]) -> AppResult<()>;
}

pub struct KvFavoriteRepository {
    store: Arc<dyn KeyValueStore>,
}

impl KvFavoriteRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

impl FavoriteRepository for KvFavoriteRepository {
    fn load_all(&self) -> AppResult<Vec<FavoriteItem>> {
        let ids: Option<Vec<ItemId>> = read_json(self.store.as_ref(), FAVORITE_IDS_KEY)?;
        let details: Vec<FavoriteItem> =
            read_json(self.store.as_ref(), FAVORITE_DETAILS_KEY)?.unwrap_or_default();

        // The id list is authoritative when present; detail records without a
        // matching id are leftovers from an interrupted write.
        let favorites = match ids {
            None => details,
            Some(ids) => {
                let wanted: HashSet<&str> = ids.iter().map(String::as_str).collect();
                let mut seen: HashSet<ItemId> = HashSet::new();
                details
                    .into_iter()
                    .filter(|item| wanted.contains(item.id.as_str()))
                    .filter(|item| seen.insert(item.id.clone()))
                    .collect()
            }
        };

        Ok(favorites)
    }

    fn save_all(&self, favorites: &[FavoriteItem]) -> AppResult<()> {
        let ids: Vec<&str> = favorites.iter().map(|f| f.id.as_str()).collect();
        write_json(self.store.as_ref(), FAVORITE_IDS_KEY, &ids)?;
        write_json(self.store.as_ref(), FAVORITE_DETAILS_KEY, favorites)?;
        Ok(())
    }
}
