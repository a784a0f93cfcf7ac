use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::favorite::ItemId;

/// Represents a user-defined collection of favorites
/// Collections are purely organizational and do not affect the favorites set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    /// Stable identifier ("watched", or a millisecond timestamp for user collections)
    pub id: String,

    /// Collection name, already trimmed
    pub name: String,

    /// Icon shown next to the name
    pub emoji: String,

    /// Ids of the favorites grouped here; may reference removed favorites
    pub member_ids: BTreeSet<ItemId>,

    /// Creation timestamp
    pub date_created: DateTime<Utc>,
}

impl Collection {
    /// Create a new Collection
    pub fn new<I>(id: String, name: String, emoji: String, member_ids: I) -> Self
    where
        I: IntoIterator<Item = ItemId>,
    {
        Self {
            id,
            name,
            emoji,
            member_ids: member_ids.into_iter().collect(),
            date_created: Utc::now(),
        }
    }

    /// Union `item_ids` into the member set, returns how many were new
    pub fn add_members<'a, I>(&mut self, item_ids: I) -> usize
    where
        I: IntoIterator<Item = &'a ItemId>,
    {
        item_ids
            .into_iter()
            .filter(|id| self.member_ids.insert((*id).clone()))
            .count()
    }

    /// Returns how many of `item_ids` were members
    pub fn remove_members<'a, I>(&mut self, item_ids: I) -> usize
    where
        I: IntoIterator<Item = &'a ItemId>,
    {
        item_ids
            .into_iter()
            .filter(|id| self.member_ids.remove(*id))
            .count()
    }

    pub fn contains(&self, item_id: &str) -> bool {
        self.member_ids.contains(item_id)
    }
}

/// Collections seeded on first run
pub fn default_collections() -> Vec<Collection> {
    vec![
        Collection::new(
            "watched".to_string(),
            "Watched".to_string(),
            "✅".to_string(),
            Vec::new(),
        ),
        Collection::new(
            "want-to-watch".to_string(),
            "Want to Watch".to_string(),
            "🎯".to_string(),
            Vec::new(),
        ),
    ]
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.emoji, self.name)
    }
}
