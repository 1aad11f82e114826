// every learned word is kept in two ordered maps:
//
// by_value   -> value -> word, one word per value, the last learned word wins on collision
// by_lexical -> word -> word, every learned word exactly once
//
// both maps only grow, and they are always updated together under the brain lock

use super::calculate_value;
use std::collections::BTreeMap;
use std::ops::Bound::{Included, Unbounded};

#[derive(Clone, Debug, Default)]
pub struct WordIndex {
    by_value: BTreeMap<i64, String>,
    by_lexical: BTreeMap<String, String>,
}

impl WordIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.by_lexical.contains_key(word)
    }

    /// Learns a word. Returns false if the word was already known.
    pub fn insert(&mut self, word: &str) -> bool {
        if self.contains(word) {
            return false;
        }

        let value = calculate_value(word);
        if let Some(previous) = self.by_value.insert(value, word.to_string()) {
            debug!(
                "value {} now maps to {}, {} only reachable lexically",
                value, word, previous
            );
        }
        self.by_lexical.insert(word.to_string(), word.to_string());
        true
    }

    pub fn len(&self) -> usize {
        self.by_lexical.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_lexical.is_empty()
    }

    pub fn value_floor(&self, value: i64) -> Option<(i64, &str)> {
        self.by_value
            .range((Unbounded, Included(value)))
            .next_back()
            .map(|(v, w)| (*v, w.as_str()))
    }

    pub fn value_ceiling(&self, value: i64) -> Option<(i64, &str)> {
        self.by_value
            .range((Included(value), Unbounded))
            .next()
            .map(|(v, w)| (*v, w.as_str()))
    }

    pub fn lexical_floor(&self, word: &str) -> Option<&str> {
        self.by_lexical
            .range::<str, _>((Unbounded, Included(word)))
            .next_back()
            .map(|(_, w)| w.as_str())
    }

    pub fn lexical_ceiling(&self, word: &str) -> Option<&str> {
        self.by_lexical
            .range::<str, _>((Included(word), Unbounded))
            .next()
            .map(|(_, w)| w.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_is_idempotent() {
        let mut index = WordIndex::new();
        assert!(index.insert("cat"));
        let before = index.clone();
        assert!(!index.insert("cat"));

        assert_eq!(index.len(), 1);
        assert_eq!(index.by_value, before.by_value);
        assert_eq!(index.by_lexical, before.by_lexical);
    }

    #[test]
    fn value_collision_keeps_latest() {
        // "ab" and "c" both sum to 3
        let mut index = WordIndex::new();
        index.insert("ab");
        index.insert("c");

        assert_eq!(index.by_value.get(&3).map(String::as_str), Some("c"));
        assert!(index.contains("ab"));
        assert!(index.contains("c"));
        assert_eq!(index.len(), 2);
        assert_eq!(index.by_value.len(), 1);
    }

    #[test]
    fn reinsert_does_not_reclaim_value() {
        let mut index = WordIndex::new();
        index.insert("ab");
        index.insert("c");
        index.insert("ab");

        assert_eq!(index.by_value.get(&3).map(String::as_str), Some("c"));
    }

    #[test]
    fn floor_and_ceiling() {
        let mut index = WordIndex::new();
        for w in ["bat", "dog", "fox"] {
            index.insert(w);
        }

        assert_eq!(index.lexical_floor("cat"), Some("bat"));
        assert_eq!(index.lexical_ceiling("cat"), Some("dog"));
        assert_eq!(index.lexical_floor("dog"), Some("dog"));
        assert_eq!(index.lexical_ceiling("dog"), Some("dog"));
        assert_eq!(index.lexical_floor("ant"), None);
        assert_eq!(index.lexical_ceiling("zoo"), None);

        // bat = 23, dog = 26, fox = 45
        assert_eq!(index.value_floor(30), Some((26, "dog")));
        assert_eq!(index.value_ceiling(30), Some((45, "fox")));
        assert_eq!(index.value_floor(23), Some((23, "bat")));
        assert_eq!(index.value_floor(1), None);
        assert_eq!(index.value_ceiling(100), None);
    }

    #[test]
    fn empty_index() {
        let index = WordIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.value_floor(10), None);
        assert_eq!(index.lexical_ceiling("a"), None);
    }
}
