//! Core types for transmerge.
//! The archive persists flat JSON objects; in memory they become `TranslationMap`s.

use std::collections::{BTreeMap, btree_map};

use serde::Serialize;

/// Reserved prefix marking a value as not yet confirmed/translated for the
/// destination set.
pub const MARKER: &str = "($)";

/// Applies the marker to a value, unless it already leads with one.
pub fn mark(value: &str) -> String {
    if value.starts_with(MARKER) {
        value.to_string()
    } else {
        format!("{}{}", MARKER, value)
    }
}

/// Whether a value carries the marker anywhere in the string.
///
/// Containment, not a prefix check: a marker that survived mid-string
/// still counts as untranslated.
pub fn is_marked(value: &str) -> bool {
    value.contains(MARKER)
}

/// A flat key → value translation map for one culture.
///
/// Keys and values are trimmed of surrounding whitespace on insertion.
/// Entries iterate and serialize in sorted key order, so writing the same
/// map twice produces identical bytes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct TranslationMap {
    entries: BTreeMap<String, String>,
}

impl TranslationMap {
    /// Creates a new, empty `TranslationMap`.
    pub fn new() -> Self {
        TranslationMap {
            entries: BTreeMap::new(),
        }
    }

    /// Inserts an entry, trimming surrounding whitespace from both the key
    /// and the value. An existing entry under the same trimmed key is
    /// overwritten.
    pub fn insert(&mut self, key: &str, value: &str) {
        self.entries
            .insert(key.trim().to_string(), value.trim().to_string());
    }

    /// Returns the value stored under `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether the map holds an entry under `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries in the map.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in sorted key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.entries.iter()
    }

    /// Iterates over keys in sorted order.
    pub fn keys(&self) -> btree_map::Keys<'_, String, String> {
        self.entries.keys()
    }
}

impl<'a> IntoIterator for &'a TranslationMap {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, V)> for TranslationMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = TranslationMap::new();
        for (key, value) in iter {
            map.insert(key.as_ref(), value.as_ref());
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_adds_prefix() {
        assert_eq!(mark("Hello"), "($)Hello");
    }

    #[test]
    fn test_mark_is_idempotent() {
        assert_eq!(mark("($)Hello"), "($)Hello");
        assert_eq!(mark(&mark("Hello")), mark("Hello"));
    }

    #[test]
    fn test_mark_empty_value() {
        assert_eq!(mark(""), "($)");
    }

    #[test]
    fn test_is_marked_checks_containment() {
        assert!(is_marked("($)Hello"));
        assert!(is_marked("Hello ($)World"));
        assert!(!is_marked("Hello"));
        assert!(!is_marked("($"));
    }

    #[test]
    fn test_insert_trims_keys_and_values() {
        let mut map = TranslationMap::new();
        map.insert("  greeting ", " Hello  ");
        assert_eq!(map.get("greeting"), Some("Hello"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_insert_overwrites_same_trimmed_key() {
        let mut map = TranslationMap::new();
        map.insert("greeting", "Hello");
        map.insert(" greeting", "Hola");
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("greeting"), Some("Hola"));
    }

    #[test]
    fn test_from_iter() {
        let map: TranslationMap = [("b", "2"), ("a", "1")].into_iter().collect();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("a"), Some("1"));
        assert_eq!(map.get("b"), Some("2"));
    }

    #[test]
    fn test_iteration_is_sorted_by_key() {
        let map: TranslationMap = [("zeta", "z"), ("alpha", "a"), ("mid", "m")]
            .into_iter()
            .collect();
        let keys: Vec<&String> = map.keys().collect();
        assert_eq!(keys, ["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_serializes_as_flat_sorted_object() {
        let map: TranslationMap = [("b", "2"), ("a", "1")].into_iter().collect();
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"a":"1","b":"2"}"#);
    }
}
