pub mod category;
pub mod entity;

pub use category::Category;
pub use entity::{CatalogFilter, CatalogItem, CatalogPage, PosterImage};
