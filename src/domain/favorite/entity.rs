use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::domain::catalog::CatalogItem;

/// Catalog identifier of a content item ("1", "12", ...)
pub type ItemId = String;

/// A content item the user saved, with enough metadata to render it offline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteItem {
    /// Catalog id, unique within the favorites set
    pub id: ItemId,

    pub title: String,

    /// Poster used for the grid and as wallpaper source
    pub image_url: String,

    /// Average rating (0-100) when the catalog reports one
    pub rating: Option<f64>,

    pub episode_count: Option<u32>,

    /// When the item was favorited
    pub date_added: DateTime<Utc>,
}

impl FavoriteItem {
    pub fn new(
        id: impl Into<ItemId>,
        title: impl Into<String>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            image_url: image_url.into(),
            rating: None,
            episode_count: None,
            date_added: Utc::now(),
        }
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn with_episode_count(mut self, episode_count: u32) -> Self {
        self.episode_count = Some(episode_count);
        self
    }

    pub fn added_at(mut self, date_added: DateTime<Utc>) -> Self {
        self.date_added = date_added;
        self
    }

    /// Snapshot a catalog entry at the moment it is favorited
    pub fn from_catalog(item: &CatalogItem) -> Self {
        Self {
            id: item.id.clone(),
            title: item.title.clone(),
            image_url: item.poster.best_display_url().to_string(),
            rating: item.average_rating,
            episode_count: item.episode_count,
            date_added: Utc::now(),
        }
    }

    /// Rating used for ordering; missing ratings count as zero
    pub fn sort_rating(&self) -> f64 {
        self.rating.unwrap_or(0.0)
    }
}

/// Which favorites a listing should include
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FavoriteFilter {
    #[default]
    All,
    Collection(String),
}

/// Ordering of a favorites listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteSort {
    /// Newest first
    #[default]
    Recent,
    /// Title ascending, ignoring case
    Name,
    /// Highest rating first
    Rating,
}

impl FavoriteSort {
    pub fn compare(&self, a: &FavoriteItem, b: &FavoriteItem) -> Ordering {
        match self {
            FavoriteSort::Recent => b.date_added.cmp(&a.date_added),
            FavoriteSort::Name => a
                .title
                .to_lowercase()
                .cmp(&b.title.to_lowercase())
                .then_with(|| a.title.cmp(&b.title)),
            FavoriteSort::Rating => b.sort_rating().total_cmp(&a.sort_rating()),
        }
    }

    /// Stable sort, so equal keys keep their insertion order
    pub fn apply(&self, items: &mut [FavoriteItem]) {
        items.sort_by(|a, b| self.compare(a, b));
    }
}

impl std::str::FromStr for FavoriteSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recent" => Ok(FavoriteSort::Recent),
            "name" => Ok(FavoriteSort::Name),
            "rating" => Ok(FavoriteSort::Rating),
            other => Err(format!("Unknown sort key: {}", other)),
        }
    }
}

impl std::fmt::Display for FavoriteItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.title, self.id)
    }
}
