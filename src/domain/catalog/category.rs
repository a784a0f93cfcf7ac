use serde::{Deserialize, Serialize};

use super::entity::CatalogFilter;

/// Browse categories offered on the wallpaper screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Popular,
    Action,
    Romance,
    Fantasy,
    SliceOfLife,
    SciFi,
}

impl Category {
    pub fn all() -> [Self; 6] {
        [
            Self::Popular,
            Self::Action,
            Self::Romance,
            Self::Fantasy,
            Self::SliceOfLife,
            Self::SciFi,
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Popular => "Popular",
            Self::Action => "Action",
            Self::Romance => "Romance",
            Self::Fantasy => "Fantasy",
            Self::SliceOfLife => "Slice of Life",
            Self::SciFi => "Sci-Fi",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Popular => "🔥",
            Self::Action => "⚔️",
            Self::Romance => "💕",
            Self::Fantasy => "🧙",
            Self::SliceOfLife => "🌸",
            Self::SciFi => "🚀",
        }
    }

    /// Popular maps to the trending listing, everything else to a category slug
    pub fn filter(&self) -> CatalogFilter {
        match self {
            Self::Popular => CatalogFilter::Trending,
            Self::Action => CatalogFilter::category("action"),
            Self::Romance => CatalogFilter::category("romance"),
            Self::Fantasy => CatalogFilter::category("fantasy"),
            Self::SliceOfLife => CatalogFilter::category("slice-of-life"),
            Self::SciFi => CatalogFilter::category("sci-fi"),
        }
    }

    /// Lookup by display name; unknown names fall back to Action
    pub fn from_display_name(name: &str) -> Self {
        Self::all()
            .into_iter()
            .find(|c| c.display_name() == name)
            .unwrap_or(Self::Action)
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::Popular
    }
}
