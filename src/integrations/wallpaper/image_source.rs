// src/integrations/wallpaper/image_source.rs

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};

/// Downloads a remote image to a local file
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageSource: Send + Sync {
    /// Returns the number of bytes written to `destination`
    async fn download(&self, url: &str, destination: &Path) -> AppResult<u64>;
}

pub struct HttpImageSource {
    http_client: Client,
}

impl HttpImageSource {
    pub fn new(config: &AppConfig) -> AppResult<Self> {
        Self::with_timeout(config.http_timeout, &config.user_agent)
    }

    pub fn with_timeout(timeout: Duration, user_agent: &str) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent.to_string())
            .build()
            .map_err(|e| AppError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { http_client })
    }
}

#[async_trait]
impl ImageSource for HttpImageSource {
    async fn download(&self, url: &str, destination: &Path) -> AppResult<u64> {
        log::debug!("Downloading {} -> {}", url, destination.display());

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Image download failed: {}", e)))?;

        // Anything but a plain 200 is treated as a failed download
        if response.status() != StatusCode::OK {
            return Err(AppError::HttpStatus(response.status().as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::Network(format!("Image download interrupted: {}", e)))?;

        if let Some(parent) = destination.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(destination, &bytes).await?;

        Ok(bytes.len() as u64)
    }
}
