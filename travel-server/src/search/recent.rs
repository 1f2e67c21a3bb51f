//! Recent search history.
//!
//! A bounded, in-memory, most-recent-first list of query strings. Offered
//! back to the user for one-tap re-search; nothing is persisted.

use std::collections::VecDeque;

/// Bounded most-recent-first list of search queries.
#[derive(Debug, Clone)]
pub struct RecentSearches {
    entries: VecDeque<String>,
    capacity: usize,
}

impl RecentSearches {
    /// Create an empty history with the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a query as the most recent entry.
    ///
    /// Re-running a known query (case-insensitive match) moves it to the
    /// front instead of duplicating it. The oldest entry drops off when
    /// the capacity is exceeded. Blank queries are ignored.
    pub fn push(&mut self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }

        self.entries
            .retain(|existing| !existing.eq_ignore_ascii_case(query));
        self.entries.push_front(query.to_string());
        self.entries.truncate(self.capacity);
    }

    /// Remove a single entry (case-insensitive match).
    pub fn remove(&mut self, query: &str) {
        self.entries
            .retain(|existing| !existing.eq_ignore_ascii_case(query.trim()));
    }

    /// Drop the whole history.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterate entries, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(r: &RecentSearches) -> Vec<&str> {
        r.iter().collect()
    }

    #[test]
    fn most_recent_first() {
        let mut recent = RecentSearches::new(8);
        recent.push("Casablanca to Rabat");
        recent.push("Marrakech to Fez");

        assert_eq!(
            entries(&recent),
            vec!["Marrakech to Fez", "Casablanca to Rabat"]
        );
    }

    #[test]
    fn rerun_moves_to_front_without_duplicating() {
        let mut recent = RecentSearches::new(8);
        recent.push("Casablanca to Rabat");
        recent.push("Marrakech to Fez");
        recent.push("casablanca to rabat");

        assert_eq!(recent.len(), 2);
        assert_eq!(
            entries(&recent),
            vec!["casablanca to rabat", "Marrakech to Fez"]
        );
    }

    #[test]
    fn capacity_is_enforced() {
        let mut recent = RecentSearches::new(3);
        for query in ["a to b", "b to c", "c to d", "d to e"] {
            recent.push(query);
        }

        assert_eq!(entries(&recent), vec!["d to e", "c to d", "b to c"]);
    }

    #[test]
    fn blank_queries_are_ignored() {
        let mut recent = RecentSearches::new(8);
        recent.push("");
        recent.push("   ");

        assert!(recent.is_empty());
    }

    #[test]
    fn remove_and_clear() {
        let mut recent = RecentSearches::new(8);
        recent.push("Casablanca to Rabat");
        recent.push("Marrakech to Fez");

        recent.remove("CASABLANCA TO RABAT");
        assert_eq!(entries(&recent), vec!["Marrakech to Fez"]);

        recent.clear();
        assert!(recent.is_empty());
    }
}
