/// Recent searches kept on the search bar
pub const RECENT_SEARCH_CAPACITY: usize = 5;

/// Newest-first list that drops its oldest entries past `capacity`
#[derive(Debug, Clone, PartialEq)]
pub struct BoundedHistory<T> {
    entries: Vec<T>,
    capacity: usize,
}

impl<T> BoundedHistory<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// Adopt stored entries, trimming anything beyond `capacity`
    pub fn from_entries(mut entries: Vec<T>, capacity: usize) -> Self {
        entries.truncate(capacity);
        Self { entries, capacity }
    }

    pub fn push_front(&mut self, entry: T) {
        self.entries.insert(0, entry);
        self.entries.truncate(self.capacity);
    }

    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        self.entries.retain(keep);
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<T> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Most-recent-first, de-duplicated search queries
#[derive(Debug, Clone, PartialEq)]
pub struct RecentSearches {
    history: BoundedHistory<String>,
}

impl RecentSearches {
    pub fn new() -> Self {
        Self::with_capacity(RECENT_SEARCH_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            history: BoundedHistory::new(capacity),
        }
    }

    pub fn from_entries(entries: Vec<String>, capacity: usize) -> Self {
        let mut deduped: Vec<String> = Vec::with_capacity(entries.len());
        for entry in entries {
            if !deduped.contains(&entry) {
                deduped.push(entry);
            }
        }
        Self {
            history: BoundedHistory::from_entries(deduped, capacity),
        }
    }

    /// Move `query` to the front, dropping an older copy and the oldest overflow
    pub fn push(&mut self, query: &str) {
        self.history.retain(|existing| existing != query);
        self.history.push_front(query.to_string());
    }

    pub fn entries(&self) -> &[String] {
        self.history.entries()
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.history.capacity()
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }
}

impl Default for RecentSearches {
    fn default() -> Self {
        Self::new()
    }
}
