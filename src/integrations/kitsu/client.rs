// src/integrations/kitsu/client.rs
//
// Kitsu catalog client
//
// ARCHITECTURE:
// - Plain REST GET against the JSON:API `/anime` endpoint
// - Maps external DTOs into catalog items (no favorites/collection mutation)
// - One request per call; no retries, no caching
//
// CRITICAL RULES:
// - This is INFRASTRUCTURE, not DOMAIN
// - Non-2xx responses surface as `AppError::HttpStatus`

use async_trait::async_trait;
use reqwest::{header, Client};

use crate::config::AppConfig;
use crate::domain::{CatalogFilter, CatalogItem, CatalogPage};
use crate::error::{AppError, AppResult};

use super::dto::KitsuListResponse;

/// Source of catalog pages. The services only depend on this seam.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogClient: Send + Sync {
    async fn fetch(&self, filter: &CatalogFilter, limit: u32, offset: u32)
        -> AppResult<CatalogPage>;
}

pub struct KitsuClient {
    http_client: Client,
    endpoint: String,
}

impl KitsuClient {
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(config.http_timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| AppError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            endpoint: config.anime_endpoint(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Query pairs for one page of `filter`
    pub fn query_params(
        filter: &CatalogFilter,
        limit: u32,
        offset: u32,
    ) -> Vec<(&'static str, String)> {
        let mut params = vec![("page[limit]", limit.to_string())];

        if offset > 0 {
            params.push(("page[offset]", offset.to_string()));
        }

        match filter {
            CatalogFilter::Trending => params.push(("sort", "popularityRank".to_string())),
            CatalogFilter::Category(slug) => params.push(("filter[categories]", slug.clone())),
            CatalogFilter::Text(query) => params.push(("filter[text]", query.trim().to_string())),
        }

        params
    }
}

#[async_trait]
impl CatalogClient for KitsuClient {
    async fn fetch(
        &self,
        filter: &CatalogFilter,
        limit: u32,
        offset: u32,
    ) -> AppResult<CatalogPage> {
        log::debug!("Fetching catalog page: {} (limit={}, offset={})", filter, limit, offset);

        let response = self
            .http_client
            .get(&self.endpoint)
            .header(header::ACCEPT, "application/vnd.api+json")
            .query(&Self::query_params(filter, limit, offset))
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Catalog request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("Catalog returned {} for {}", status, filter);
            return Err(AppError::HttpStatus(status.as_u16()));
        }

        let body: KitsuListResponse = response
            .json()
            .await
            .map_err(|e| AppError::Network(format!("Failed to parse catalog response: {}", e)))?;

        Ok(build_page(body, limit, offset))
    }
}

/// A next page exists when the API links one, or when a full page came back
/// and no links were sent at all.
fn build_page(body: KitsuListResponse, limit: u32, offset: u32) -> CatalogPage {
    let has_next = match &body.links {
        Some(links) => links.next.is_some(),
        None => body.data.len() as u32 >= limit && limit > 0,
    };

    let items: Vec<CatalogItem> = body.data.into_iter().map(Into::into).collect();
    let next_offset = has_next.then(|| offset + items.len() as u32);

    CatalogPage {
        items,
        offset,
        next_offset,
    }
}
