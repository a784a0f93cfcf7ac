use super::entity::FavoriteItem;
use crate::domain::{DomainError, DomainResult};

/// Validates all FavoriteItem invariants
pub fn validate_favorite(item: &FavoriteItem) -> DomainResult<()> {
    if item.id.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Favorite id cannot be empty".to_string(),
        ));
    }
    if let Some(rating) = item.rating {
        if !rating.is_finite() {
            return Err(DomainError::InvariantViolation(format!(
                "Rating of '{}' must be a finite number",
                item.title
            )));
        }
    }
    Ok(())
}

/// Invariants that must hold true for the favorites set:
///
/// 1. `id` is unique within the set
/// 2. Items are immutable once added; re-favoriting creates a new snapshot
/// 3. Removing a favorite does not touch collection membership
