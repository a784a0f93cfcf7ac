// src/services/search_service.rs
//
// Catalog search with request sequencing and a recent-search list.
//
// Every search takes a new generation number. A response is only delivered
// if no newer search (or clear) started while it was in flight.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::domain::{CatalogFilter, CatalogPage, RecentSearches};
use crate::error::{AppError, AppResult};
use crate::integrations::CatalogClient;
use crate::repositories::HistoryRepository;

/// Queries shorter than this (in characters, after trimming) are not sent
pub const MIN_QUERY_LEN: usize = 2;

#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Query too short; the caller should clear its results
    Cleared,
    Results(CatalogPage),
    /// A newer search started; this response was discarded
    Superseded,
}

pub struct SearchService {
    catalog: Arc<dyn CatalogClient>,
    history_repo: Arc<dyn HistoryRepository>,
    generation: AtomicU64,
    recent: Mutex<RecentSearches>,
    page_size: u32,
}

impl SearchService {
    pub fn new(
        catalog: Arc<dyn CatalogClient>,
        history_repo: Arc<dyn HistoryRepository>,
        page_size: u32,
        recent_capacity: usize,
    ) -> Self {
        Self {
            catalog,
            history_repo,
            generation: AtomicU64::new(0),
            recent: Mutex::new(RecentSearches::with_capacity(recent_capacity)),
            page_size,
        }
    }

    /// Restore the recent-search list from storage
    pub fn load_recent(&self) -> AppResult<()> {
        let stored = self.history_repo.load_recent_searches()?;
        let mut recent = self.recent_lock()?;
        let capacity = recent.capacity();
        *recent = RecentSearches::from_entries(stored, capacity);
        Ok(())
    }

    pub async fn search(&self, query: &str) -> AppResult<SearchOutcome> {
        self.search_page(query, 0).await
    }

    /// Next page of `query`, starting at `offset`
    pub async fn search_page(&self, query: &str, offset: u32) -> AppResult<SearchOutcome> {
        let query = query.trim();
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        if query.chars().count() < MIN_QUERY_LEN {
            return Ok(SearchOutcome::Cleared);
        }

        let filter = CatalogFilter::Text(query.to_string());
        let result = self.catalog.fetch(&filter, self.page_size, offset).await;

        if !self.is_current(generation) {
            log::debug!("Discarding superseded search '{}' (generation {})", query, generation);
            return Ok(SearchOutcome::Superseded);
        }

        let page = result?;

        if offset == 0 {
            self.remember(query);
        }

        Ok(SearchOutcome::Results(page))
    }

    /// Invalidate any search still in flight
    pub fn cancel_pending(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    pub fn recent_searches(&self) -> Vec<String> {
        self.recent_lock()
            .map(|r| r.entries().to_vec())
            .unwrap_or_default()
    }

    pub fn clear_recent(&self) -> AppResult<()> {
        self.recent_lock()?.clear();
        self.history_repo.save_recent_searches(&[])
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    /// Recent-search persistence is best effort; a failed write is logged only
    fn remember(&self, query: &str) {
        let entries = match self.recent_lock() {
            Ok(mut recent) => {
                recent.push(query);
                recent.entries().to_vec()
            }
            Err(e) => {
                log::warn!("{}", e);
                return;
            }
        };

        if let Err(e) = self.history_repo.save_recent_searches(&entries) {
            log::warn!("Failed to persist recent searches: {}", e);
        }
    }

    fn recent_lock(&self) -> AppResult<MutexGuard<'_, RecentSearches>> {
        self.recent
            .lock()
            .map_err(|_| AppError::Other("Recent searches lock poisoned".to_string()))
    }
}
