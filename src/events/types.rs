// events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events carry only the data needed to react
// - No business logic in event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{ItemId, WallpaperTarget};

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    fn event_id(&self) -> Uuid;

    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

macro_rules! impl_domain_event {
    ($ty:ident) => {
        impl DomainEvent for $ty {
            fn event_id(&self) -> Uuid {
                self.event_id
            }
            fn occurred_at(&self) -> DateTime<Utc> {
                self.occurred_at
            }
            fn event_type(&self) -> &'static str {
                stringify!($ty)
            }
        }
    };
}

// ============================================================================
// FAVORITE EVENTS
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteAdded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub item_id: ItemId,
    pub title: String,
}

impl FavoriteAdded {
    pub fn new(item_id: ItemId, title: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            item_id,
            title,
        }
    }
}

impl_domain_event!(FavoriteAdded);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteRemoved {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub item_id: ItemId,
}

impl FavoriteRemoved {
    pub fn new(item_id: ItemId) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            item_id,
        }
    }
}

impl_domain_event!(FavoriteRemoved);

/// Bulk removal from the selection mode
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoritesRemoved {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub item_ids: Vec<ItemId>,
}

impl FavoritesRemoved {
    pub fn new(item_ids: Vec<ItemId>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            item_ids,
        }
    }
}

impl_domain_event!(FavoritesRemoved);

// ============================================================================
// COLLECTION EVENTS
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionCreated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub collection_id: String,
    pub name: String,
    pub member_count: usize,
}

impl CollectionCreated {
    pub fn new(collection_id: String, name: String, member_count: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            collection_id,
            name,
            member_count,
        }
    }
}

impl_domain_event!(CollectionCreated);

/// Members were added to or removed from an existing collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionMembersChanged {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub collection_id: String,
    pub added: usize,
    pub removed: usize,
}

impl CollectionMembersChanged {
    pub fn new(collection_id: String, added: usize, removed: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            collection_id,
            added,
            removed,
        }
    }
}

impl_domain_event!(CollectionMembersChanged);

// ============================================================================
// WALLPAPER EVENTS
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallpaperApplied {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub target: WallpaperTarget,
}

impl WallpaperApplied {
    pub fn new(target: WallpaperTarget) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            target,
        }
    }
}

impl_domain_event!(WallpaperApplied);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallpaperSavedToGallery {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub file_name: String,
}

impl WallpaperSavedToGallery {
    pub fn new(file_name: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            file_name,
        }
    }
}

impl_domain_event!(WallpaperSavedToGallery);
