// src/services/recommendation_service.rs
//
// Recommendation rows: one catalog filter per request, picked from the wall
// clock (and the favorites count for "similar"), plus a capped log of what
// was shown.

use std::sync::{Arc, Mutex};

use chrono::{Local, NaiveDateTime};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::config::AppConfig;
use crate::domain::recommendation::{recommendation_title, select_filter};
use crate::domain::{
    BoundedHistory, CatalogFilter, CatalogItem, RecommendationInteraction, RecommendationKind,
};
use crate::error::{AppError, AppResult};
use crate::integrations::CatalogClient;
use crate::repositories::HistoryRepository;

/// Source of "now" in local time
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub title: String,
    pub filter: CatalogFilter,
    pub items: Vec<CatalogItem>,
}

pub struct RecommendationService {
    catalog: Arc<dyn CatalogClient>,
    history_repo: Arc<dyn HistoryRepository>,
    clock: Arc<dyn Clock>,
    rng: Mutex<StdRng>,
    history: Mutex<BoundedHistory<RecommendationInteraction>>,
    config: AppConfig,
}

impl RecommendationService {
    pub fn new(
        catalog: Arc<dyn CatalogClient>,
        history_repo: Arc<dyn HistoryRepository>,
        config: AppConfig,
    ) -> Self {
        Self::with_parts(
            catalog,
            history_repo,
            Arc::new(SystemClock),
            StdRng::from_entropy(),
            config,
        )
    }

    pub fn with_parts(
        catalog: Arc<dyn CatalogClient>,
        history_repo: Arc<dyn HistoryRepository>,
        clock: Arc<dyn Clock>,
        rng: StdRng,
        config: AppConfig,
    ) -> Self {
        let history = BoundedHistory::new(config.recommendation_history_capacity);
        Self {
            catalog,
            history_repo,
            clock,
            rng: Mutex::new(rng),
            history: Mutex::new(history),
            config,
        }
    }

    pub fn load_history(&self) -> AppResult<()> {
        let stored = self.history_repo.load_recommendation_history()?;
        let mut history = self.history_lock()?;
        let capacity = history.capacity();
        *history = BoundedHistory::from_entries(stored, capacity);
        Ok(())
    }

    /// Newest first
    pub fn history(&self) -> Vec<RecommendationInteraction> {
        self.history_lock()
            .map(|h| h.entries().to_vec())
            .unwrap_or_default()
    }

    /// The filter `kind` maps to right now
    pub fn pick_filter(
        &self,
        kind: RecommendationKind,
        favorites_count: usize,
    ) -> AppResult<CatalogFilter> {
        let now = self.clock.now();
        let mut rng = self
            .rng
            .lock()
            .map_err(|_| AppError::Other("Recommendation rng lock poisoned".to_string()))?;
        Ok(select_filter(kind, now, favorites_count, &mut *rng))
    }

    /// Fetch one recommendation row for `kind`.
    ///
    /// Keeps the first few items of the page; a non-empty row is logged to
    /// the interaction history.
    pub async fn recommend(
        &self,
        kind: RecommendationKind,
        favorites_count: usize,
    ) -> AppResult<Recommendation> {
        let now = self.clock.now();
        let filter = self.pick_filter(kind, favorites_count)?;
        let limit = self.config.page_size_for(&filter);

        log::debug!("Recommending {} via {}", kind, filter);

        let mut page = self.catalog.fetch(&filter, limit, 0).await?;
        page.items.truncate(self.config.recommendation_limit);

        if !page.items.is_empty() {
            self.record(RecommendationInteraction::viewed(kind));
        }

        Ok(Recommendation {
            kind,
            title: recommendation_title(kind, now).to_string(),
            filter,
            items: page.items,
        })
    }

    /// History persistence is best effort; a failed write is logged only
    fn record(&self, interaction: RecommendationInteraction) {
        let entries = match self.history_lock() {
            Ok(mut history) => {
                history.push_front(interaction);
                history.entries().to_vec()
            }
            Err(e) => {
                log::warn!("{}", e);
                return;
            }
        };

        if let Err(e) = self.history_repo.save_recommendation_history(&entries) {
            log::warn!("Failed to persist recommendation history: {}", e);
        }
    }

    fn history_lock(
        &self,
    ) -> AppResult<std::sync::MutexGuard<'_, BoundedHistory<RecommendationInteraction>>> {
        self.history
            .lock()
            .map_err(|_| AppError::Other("Recommendation history lock poisoned".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CatalogPage, PosterImage};
    use crate::integrations::kitsu::client::MockCatalogClient;
    use crate::repositories::history_repository::MockHistoryRepository;
    use crate::repositories::{InMemoryKeyValueStore, KvHistoryRepository};
    use chrono::NaiveDate;

    struct FixedClock(NaiveDateTime);

    impl Clock for FixedClock {
        fn now(&self) -> NaiveDateTime {
            self.0
        }
    }

    fn at(month: u32, day: u32, hour: u32) -> Arc<FixedClock> {
        Arc::new(FixedClock(
            NaiveDate::from_ymd_opt(2024, month, day)
                .unwrap()
                .and_hms_opt(hour, 0, 0)
                .unwrap(),
        ))
    }

    fn items(n: usize) -> CatalogPage {
        CatalogPage {
            items: (0..n)
                .map(|i| CatalogItem {
                    id: i.to_string(),
                    title: format!("Title {}", i),
                    synopsis: None,
                    average_rating: None,
                    start_date: None,
                    episode_count: None,
                    poster: PosterImage::default(),
                })
                .collect(),
            offset: 0,
            next_offset: None,
        }
    }

    fn service(
        catalog: MockCatalogClient,
        history: Arc<dyn HistoryRepository>,
        clock: Arc<FixedClock>,
    ) -> RecommendationService {
        RecommendationService::with_parts(
            Arc::new(catalog),
            history,
            clock,
            StdRng::seed_from_u64(7),
            AppConfig::default(),
        )
    }

    fn memory_history() -> Arc<KvHistoryRepository> {
        Arc::new(KvHistoryRepository::new(Arc::new(InMemoryKeyValueStore::new())))
    }

    #[tokio::test]
    async fn test_mood_in_the_morning_asks_for_adventure_and_keeps_eight() {
        let mut catalog = MockCatalogClient::new();
        catalog
            .expect_fetch()
            .withf(|filter, limit, _| {
                *filter == CatalogFilter::category("adventure") && *limit == 15
            })
            .times(1)
            .returning(|_, _, _| Ok(items(15)));

        let service = service(catalog, memory_history(), at(6, 1, 9));
        let row = service.recommend(RecommendationKind::Mood, 0).await.unwrap();

        assert_eq!(row.items.len(), 8);
        assert_eq!(row.title, "⚡ Morning Energy");
        assert_eq!(service.history().len(), 1);
        assert_eq!(service.history()[0].kind, RecommendationKind::Mood);
    }

    #[tokio::test]
    async fn test_event_before_halloween_asks_for_horror() {
        let mut catalog = MockCatalogClient::new();
        catalog
            .expect_fetch()
            .withf(|filter, _, _| *filter == CatalogFilter::category("horror"))
            .returning(|_, _, _| Ok(items(3)));

        let service = service(catalog, memory_history(), at(10, 27, 12));
        let row = service.recommend(RecommendationKind::Event, 0).await.unwrap();
        assert_eq!(row.items.len(), 3);
    }

    #[tokio::test]
    async fn test_similar_without_favorites_is_trending() {
        let mut catalog = MockCatalogClient::new();
        catalog
            .expect_fetch()
            .withf(|filter, limit, _| *filter == CatalogFilter::Trending && *limit == 20)
            .returning(|_, _, _| Ok(items(1)));

        let service = service(catalog, memory_history(), at(3, 3, 3));
        let row = service.recommend(RecommendationKind::Similar, 0).await.unwrap();
        assert_eq!(row.filter, CatalogFilter::Trending);
    }

    #[tokio::test]
    async fn test_empty_row_not_recorded() {
        let mut catalog = MockCatalogClient::new();
        catalog.expect_fetch().returning(|_, _, _| Ok(items(0)));

        let mut history = MockHistoryRepository::new();
        history.expect_save_recommendation_history().never();

        let service = service(catalog, Arc::new(history), at(1, 10, 20));
        let row = service.recommend(RecommendationKind::Time, 0).await.unwrap();

        assert!(row.items.is_empty());
        assert!(service.history().is_empty());
    }

    #[tokio::test]
    async fn test_history_capped_at_fifty_newest_first() {
        let mut catalog = MockCatalogClient::new();
        catalog.expect_fetch().returning(|_, _, _| Ok(items(2)));

        let repo = memory_history();
        let service = service(catalog, repo.clone(), at(7, 1, 14));

        for _ in 0..50 {
            service.recommend(RecommendationKind::Mood, 0).await.unwrap();
        }
        service.recommend(RecommendationKind::Time, 0).await.unwrap();

        let history = service.history();
        assert_eq!(history.len(), 50);
        assert_eq!(history[0].kind, RecommendationKind::Time);
        assert_eq!(repo.load_recommendation_history().unwrap().len(), 50);
    }

    #[tokio::test]
    async fn test_fetch_error_propagates_without_history() {
        let mut catalog = MockCatalogClient::new();
        catalog
            .expect_fetch()
            .returning(|_, _, _| Err(AppError::Network("offline".to_string())));

        let service = service(catalog, memory_history(), at(12, 20, 10));
        let result = service.recommend(RecommendationKind::Event, 0).await;

        assert!(matches!(result, Err(AppError::Network(_))));
        assert!(service.history().is_empty());
    }

    #[test]
    fn test_load_history_restores_entries() {
        let repo = memory_history();
        repo.save_recommendation_history(&[RecommendationInteraction::viewed(
            RecommendationKind::Similar,
        )])
        .unwrap();

        let service = service(MockCatalogClient::new(), repo, at(1, 1, 1));
        service.load_history().unwrap();
        assert_eq!(service.history().len(), 1);
    }
}
