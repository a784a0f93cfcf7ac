// src/integrations/kitsu/dto.rs
//
// JSON:API shapes returned by the Kitsu `/anime` endpoint, and their mapping
// into catalog items. Only the attributes the app reads are declared.

use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

use crate::domain::{CatalogItem, PosterImage};

#[derive(Debug, Deserialize)]
pub struct KitsuListResponse {
    #[serde(default)]
    pub data: Vec<KitsuAnime>,
    #[serde(default)]
    pub links: Option<KitsuLinks>,
}

#[derive(Debug, Default, Deserialize)]
pub struct KitsuLinks {
    pub next: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct KitsuAnime {
    pub id: String,
    #[serde(default)]
    pub attributes: KitsuAttributes,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KitsuAttributes {
    pub canonical_title: Option<String>,
    #[serde(default)]
    pub titles: HashMap<String, Option<String>>,
    pub synopsis: Option<String>,
    /// Reported as a decimal string ("82.14"), occasionally as a number
    #[serde(default, deserialize_with = "lenient_rating")]
    pub average_rating: Option<f64>,
    pub start_date: Option<String>,
    pub episode_count: Option<u32>,
    pub poster_image: Option<KitsuPosterImage>,
}

#[derive(Debug, Default, Deserialize)]
pub struct KitsuPosterImage {
    pub tiny: Option<String>,
    pub small: Option<String>,
    pub medium: Option<String>,
    pub large: Option<String>,
    pub original: Option<String>,
}

/// Unparsable or non-finite ratings are treated as absent
fn lenient_rating<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    let rating = match raw {
        Some(serde_json::Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        _ => None,
    };
    Ok(rating.filter(|r| r.is_finite()))
}

impl KitsuAttributes {
    fn display_title(&self) -> Option<String> {
        let fallback = || {
            ["en", "en_jp", "ja_jp"]
                .iter()
                .find_map(|lang| self.titles.get(*lang).cloned().flatten())
        };

        self.canonical_title
            .clone()
            .filter(|t| !t.trim().is_empty())
            .or_else(fallback)
    }
}

impl From<KitsuPosterImage> for PosterImage {
    fn from(image: KitsuPosterImage) -> Self {
        PosterImage {
            small: image.small.or(image.tiny),
            medium: image.medium,
            large: image.large,
            original: image.original,
        }
    }
}

impl From<KitsuAnime> for CatalogItem {
    fn from(anime: KitsuAnime) -> Self {
        let title = anime
            .attributes
            .display_title()
            .unwrap_or_else(|| "Unknown title".to_string());
        let attributes = anime.attributes;

        CatalogItem {
            id: anime.id,
            title,
            synopsis: attributes.synopsis,
            average_rating: attributes.average_rating,
            start_date: attributes.start_date,
            episode_count: attributes.episode_count,
            poster: attributes.poster_image.map(Into::into).unwrap_or_default(),
        }
    }
}
