pub mod history;

pub use history::{BoundedHistory, RecentSearches, RECENT_SEARCH_CAPACITY};
