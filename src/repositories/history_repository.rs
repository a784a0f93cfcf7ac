// src/repositories/history_repository.rs
//
// Recent searches and recommendation interactions. Both are newest-first
// JSON arrays; capping happens in the domain types, not here.

use std::sync::Arc;

use crate::domain::recommendation::RecommendationInteraction;
use crate::error::AppResult;
use crate::repositories::key_value_store::{read_json, write_json, KeyValueStore};

pub const RECENT_SEARCHES_KEY: &str = "recent_searches";
pub const RECOMMENDATION_HISTORY_KEY: &str = "recommendation_history";

#[cfg_attr(test, mockall::automock)]
pub trait HistoryRepository: Send + Sync {
    fn load_recent_searches(&self) -> AppResult<Vec<String>>;
    fn save_recent_searches(&self, queries: &[String]) -> AppResult<()>;
    fn load_recommendation_history(&self) -> AppResult<Vec<RecommendationInteraction>>;
    fn save_recommendation_history(&self, history: &[RecommendationInteraction]) -> AppResult<()>;
}

pub struct KvHistoryRepository {
    store: Arc<dyn KeyValueStore>,
}

impl KvHistoryRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

impl HistoryRepository for KvHistoryRepository {
    fn load_recent_searches(&self) -> AppResult<Vec<String>> {
        Ok(read_json(self.store.as_ref(), RECENT_SEARCHES_KEY)?.unwrap_or_default())
    }

    fn save_recent_searches(&self, queries: &[String]) -> AppResult<()> {
        write_json(self.store.as_ref(), RECENT_SEARCHES_KEY, queries)
    }

    fn load_recommendation_history(&self) -> AppResult<Vec<RecommendationInteraction>> {
        Ok(read_json(self.store.as_ref(), RECOMMENDATION_HISTORY_KEY)?.unwrap_or_default())
    }

    fn save_recommendation_history(&self, history: &[RecommendationInteraction]) -> AppResult<()> {
        write_json(self.store.as_ref(), RECOMMENDATION_HISTORY_KEY, history)
    }
}
