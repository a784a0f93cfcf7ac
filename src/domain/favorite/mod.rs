pub mod entity;
pub mod invariants;

pub use entity::{FavoriteFilter, FavoriteItem, FavoriteSort, ItemId};
pub use invariants::validate_favorite;
