// src/config.rs
//
// Runtime configuration
//
// Every value has a default; ANIMEWALL_* environment variables override them.
// A `.env` file in the working directory is honoured when present.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::db::get_database_path;
use crate::domain::CatalogFilter;
use crate::error::{AppError, AppResult};

pub const DEFAULT_CATALOG_BASE_URL: &str = "https://kitsu.io/api/edge";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Catalog API root, without the `/anime` resource
    pub catalog_base_url: String,
    pub trending_page_size: u32,
    pub search_page_size: u32,
    pub category_page_size: u32,
    pub http_timeout: Duration,
    pub user_agent: String,
    pub database_path: PathBuf,
    /// Where the file-system bridge writes home.jpg / lock.jpg
    pub wallpaper_dir: PathBuf,
    pub gallery_dir: PathBuf,
    /// Parent of the per-download temporary workspaces
    pub download_root: PathBuf,
    pub recommendation_limit: usize,
    pub recent_search_capacity: usize,
    pub recommendation_history_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("animewall");

        let database_path =
            get_database_path().unwrap_or_else(|_| data_dir.join("animewall.db"));

        let gallery_dir = dirs::picture_dir()
            .map(|p| p.join("AnimeWallpapers"))
            .unwrap_or_else(|| data_dir.join("gallery"));

        Self {
            catalog_base_url: DEFAULT_CATALOG_BASE_URL.to_string(),
            trending_page_size: 20,
            search_page_size: 20,
            category_page_size: 15,
            http_timeout: Duration::from_secs(30),
            user_agent: format!("animewall/{}", env!("CARGO_PKG_VERSION")),
            database_path,
            wallpaper_dir: data_dir.join("wallpapers"),
            gallery_dir,
            download_root: std::env::temp_dir().join("animewall").join("downloads"),
            recommendation_limit: 8,
            recent_search_capacity: 5,
            recommendation_history_capacity: 50,
        }
    }
}

impl AppConfig {
    /// Defaults overridden by the process environment (and `.env`)
    pub fn from_env() -> AppResult<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            log::debug!("Loaded environment from {}", path.display());
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each ANIMEWALL_* key
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("ANIMEWALL_CATALOG_URL") {
            config.catalog_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(v) = parse_var(&lookup, "ANIMEWALL_TRENDING_PAGE_SIZE")? {
            config.trending_page_size = v;
        }
        if let Some(v) = parse_var(&lookup, "ANIMEWALL_SEARCH_PAGE_SIZE")? {
            config.search_page_size = v;
        }
        if let Some(v) = parse_var(&lookup, "ANIMEWALL_CATEGORY_PAGE_SIZE")? {
            config.category_page_size = v;
        }
        if let Some(secs) = parse_var::<u64, _>(&lookup, "ANIMEWALL_HTTP_TIMEOUT_SECS")? {
            config.http_timeout = Duration::from_secs(secs);
        }
        if let Some(agent) = lookup("ANIMEWALL_USER_AGENT") {
            config.user_agent = agent;
        }
        if let Some(path) = lookup("ANIMEWALL_DATABASE_PATH") {
            config.database_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("ANIMEWALL_WALLPAPER_DIR") {
            config.wallpaper_dir = PathBuf::from(path);
        }
        if let Some(path) = lookup("ANIMEWALL_GALLERY_DIR") {
            config.gallery_dir = PathBuf::from(path);
        }
        if let Some(path) = lookup("ANIMEWALL_DOWNLOAD_DIR") {
            config.download_root = PathBuf::from(path);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.catalog_base_url.trim().is_empty() {
            return Err(AppError::Config("catalog base URL is empty".to_string()));
        }
        if self.trending_page_size == 0
            || self.search_page_size == 0
            || self.category_page_size == 0
        {
            return Err(AppError::Config("page sizes must be positive".to_string()));
        }
        if self.http_timeout.is_zero() {
            return Err(AppError::Config("HTTP timeout must be positive".to_string()));
        }
        Ok(())
    }

    /// Page size the catalog is asked for, per kind of listing
    pub fn page_size_for(&self, filter: &CatalogFilter) -> u32 {
        match filter {
            CatalogFilter::Trending => self.trending_page_size,
            CatalogFilter::Category(_) => self.category_page_size,
            CatalogFilter::Text(_) => self.search_page_size,
        }
    }

    /// The `/anime` collection endpoint
    pub fn anime_endpoint(&self) -> String {
        format!("{}/anime", self.catalog_base_url)
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> AppResult<Option<T>>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| AppError::Config(format!("{} has invalid value '{}'", key, raw))),
    }
}
