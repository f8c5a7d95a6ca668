// mapping.rs - Insertion-ordered key-unique mapping

use super::write_joined;
use crate::error::{ContainerError, ContainerResult};
use indexmap::IndexMap;
use std::fmt::{self, Display};
use std::hash::Hash;

/// Association of unique keys to values, iterated in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping<K: Hash + Eq, V> {
    entries: IndexMap<K, V>,
}

impl<K: Hash + Eq, V> Default for Mapping<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, V> Mapping<K, V> {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Safe lookup: `None` for a missing key
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Insert or replace; returns the previous value for `key`.
    /// Replacing keeps the key's original position.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { map: &self.entries }
    }

    pub fn values(&self) -> Values<'_, K, V> {
        Values { map: &self.entries }
    }

    pub fn items(&self) -> Items<'_, K, V> {
        Items { map: &self.entries }
    }
}

impl<K: Hash + Eq + Display, V> Mapping<K, V> {
    fn missing(key: &K) -> ContainerError {
        ContainerError::KeyNotFound {
            key: key.to_string(),
        }
    }

    /// Direct lookup: errors when `key` is absent
    pub fn lookup(&self, key: &K) -> ContainerResult<&V> {
        self.entries.get(key).ok_or_else(|| Self::missing(key))
    }

    /// Remove `key` and return its value
    pub fn pop(&mut self, key: &K) -> ContainerResult<V> {
        self.entries
            .shift_remove(key)
            .ok_or_else(|| Self::missing(key))
    }

    /// Remove `key` without returning its value
    pub fn delete(&mut self, key: &K) -> ContainerResult<()> {
        self.pop(key).map(|_| ())
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for Mapping<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a, K: Hash + Eq, V> IntoIterator for &'a Mapping<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = indexmap::map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Renders one `key: value` pair
struct Pair<'a, K, V>(&'a K, &'a V);

impl<K: Display, V: Display> Display for Pair<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.0, self.1)
    }
}

/// Renders one `(key, value)` tuple
struct TuplePair<'a, K, V>(&'a K, &'a V);

impl<K: Display, V: Display> Display for TuplePair<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

impl<K: Hash + Eq + Display, V: Display> Display for Mapping<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(
            f,
            "{",
            self.entries.iter().map(|(k, v)| Pair(k, v)),
            "}",
        )
    }
}

/// Lazy view over the keys of a mapping
pub struct Keys<'a, K, V> {
    map: &'a IndexMap<K, V>,
}

/// Lazy view over the values of a mapping
pub struct Values<'a, K, V> {
    map: &'a IndexMap<K, V>,
}

/// Lazy view over the `(key, value)` pairs of a mapping
pub struct Items<'a, K, V> {
    map: &'a IndexMap<K, V>,
}

impl<'a, K, V> Keys<'a, K, V> {
    pub fn iter(&self) -> indexmap::map::Keys<'a, K, V> {
        self.map.keys()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<'a, K, V> Values<'a, K, V> {
    pub fn iter(&self) -> indexmap::map::Values<'a, K, V> {
        self.map.values()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<'a, K, V> Items<'a, K, V> {
    pub fn iter(&self) -> indexmap::map::Iter<'a, K, V> {
        self.map.iter()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl<'a, K, V> IntoIterator for Keys<'a, K, V> {
    type Item = &'a K;
    type IntoIter = indexmap::map::Keys<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.keys()
    }
}

impl<'a, K, V> IntoIterator for Values<'a, K, V> {
    type Item = &'a V;
    type IntoIter = indexmap::map::Values<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.values()
    }
}

impl<'a, K, V> IntoIterator for Items<'a, K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = indexmap::map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.iter()
    }
}

impl<K: Display, V> Display for Keys<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, "dict_keys([", self.map.keys(), "])")
    }
}

impl<K, V: Display> Display for Values<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, "dict_values([", self.map.values(), "])")
    }
}

impl<K: Display, V: Display> Display for Items<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(
            f,
            "dict_items([",
            self.map.iter().map(|(k, v)| TuplePair(k, v)),
            "])",
        )
    }
}
