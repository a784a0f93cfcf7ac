// src/integrations/kitsu/mod.rs

pub mod client;
pub mod dto;

pub use client::{CatalogClient, KitsuClient};
