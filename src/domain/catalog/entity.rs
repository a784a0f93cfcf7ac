use serde::{Deserialize, Serialize};

use crate::domain::favorite::ItemId;

/// A content item as served by the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: ItemId,
    pub title: String,
    pub synopsis: Option<String>,
    /// 0-100 scale
    pub average_rating: Option<f64>,
    /// ISO date as reported ("2013-04-07")
    pub start_date: Option<String>,
    pub episode_count: Option<u32>,
    pub poster: PosterImage,
}

/// Poster renditions, smallest to largest
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PosterImage {
    pub small: Option<String>,
    pub medium: Option<String>,
    pub large: Option<String>,
    pub original: Option<String>,
}

impl PosterImage {
    /// Rendition for grids and favorites: large, then medium
    pub fn best_display_url(&self) -> &str {
        self.large
            .as_deref()
            .or(self.medium.as_deref())
            .or(self.small.as_deref())
            .or(self.original.as_deref())
            .unwrap_or_default()
    }

    /// Rendition used as wallpaper source: original first
    pub fn wallpaper_url(&self) -> Option<&str> {
        self.original
            .as_deref()
            .or(self.large.as_deref())
            .or(self.medium.as_deref())
    }
}

/// One page of catalog results plus the offset of the next page, if any
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogPage {
    pub items: Vec<CatalogItem>,
    pub offset: u32,
    pub next_offset: Option<u32>,
}

impl CatalogPage {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// What the catalog should be asked for
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CatalogFilter {
    /// Sorted by popularity rank
    Trending,
    /// `filter[categories]=<slug>`
    Category(String),
    /// `filter[text]=<query>`
    Text(String),
}

impl CatalogFilter {
    pub fn category(slug: &str) -> Self {
        CatalogFilter::Category(slug.to_string())
    }

    /// Keyword shown to the user and recorded in history
    pub fn keyword(&self) -> &str {
        match self {
            CatalogFilter::Trending => "trending",
            CatalogFilter::Category(slug) => slug,
            CatalogFilter::Text(query) => query,
        }
    }
}

impl std::fmt::Display for CatalogFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogFilter::Trending => write!(f, "trending"),
            CatalogFilter::Category(slug) => write!(f, "category:{}", slug),
            CatalogFilter::Text(query) => write!(f, "text:{}", query),
        }
    }
}
