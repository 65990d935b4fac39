//! Deduplication of the fetched word list
//!
//! Dictionaries often carry case variants of the same word ("Polish" and
//! "polish"). Once entries are lowercased these become duplicates; this
//! module drops them while keeping the first occurrence in place.

use ahash::RandomState;
use hashbrown::HashSet;

/// Order-preserving case-insensitive deduplicator
pub struct WordDeduplicator {
    seen: HashSet<String, RandomState>,
    duplicates: u64,
}

impl WordDeduplicator {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            seen: HashSet::with_capacity_and_hasher(capacity, RandomState::new()),
            duplicates: 0,
        }
    }

    /// Returns true if the word has not been seen before
    pub fn insert(&mut self, word: &str) -> bool {
        let key = word.to_lowercase();
        if self.seen.contains(&key) {
            self.duplicates += 1;
            false
        } else {
            self.seen.insert(key);
            true
        }
    }

    pub fn unique_count(&self) -> usize {
        self.seen.len()
    }

    pub fn duplicate_count(&self) -> u64 {
        self.duplicates
    }
}

impl Default for WordDeduplicator {
    fn default() -> Self {
        Self::new()
    }
}

/// Remove case-insensitive duplicates, keeping the first of each
pub fn dedup_words(words: Vec<String>) -> Vec<String> {
    let mut dedup = WordDeduplicator::with_capacity(words.len());
    let unique: Vec<String> = words.into_iter().filter(|w| dedup.insert(w)).collect();

    if dedup.duplicate_count() > 0 {
        log::debug!(
            "Removed {} duplicate words, {} unique remain",
            dedup.duplicate_count(),
            dedup.unique_count()
        );
    }

    unique
}
