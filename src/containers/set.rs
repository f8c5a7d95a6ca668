// set.rs - Unique-element set with set algebra

use super::write_joined;
use crate::error::{ContainerError, ContainerResult};
use std::collections::HashSet;
use std::fmt::{self, Display};
use std::hash::Hash;

/// Unordered collection without duplicates.
///
/// `pop` removes whichever element the underlying hash set yields first;
/// that order is not stable across runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueSet<T: Hash + Eq> {
    items: HashSet<T>,
}

impl<T: Hash + Eq> Default for ValueSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq> ValueSet<T> {
    pub fn new() -> Self {
        Self {
            items: HashSet::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, value: &T) -> bool {
        self.items.contains(value)
    }

    /// Insert `value`; returns false (and changes nothing) if it was present
    pub fn add(&mut self, value: T) -> bool {
        self.items.insert(value)
    }

    /// Bulk insert; duplicates are dropped
    pub fn update<I: IntoIterator<Item = T>>(&mut self, values: I) {
        self.items.extend(values);
    }

    /// Remove `value` if present, silently otherwise
    pub fn discard(&mut self, value: &T) {
        self.items.remove(value);
    }

    pub fn is_subset(&self, other: &ValueSet<T>) -> bool {
        self.items.is_subset(&other.items)
    }

    pub fn iter(&self) -> std::collections::hash_set::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: Hash + Eq + Clone> ValueSet<T> {
    /// Remove and return an arbitrary element
    pub fn pop(&mut self) -> ContainerResult<T> {
        let value = self
            .items
            .iter()
            .next()
            .cloned()
            .ok_or(ContainerError::EmptyContainer { container: "set" })?;
        self.items.remove(&value);
        Ok(value)
    }

    pub fn union(&self, other: &ValueSet<T>) -> ValueSet<T> {
        self.items.union(&other.items).cloned().collect()
    }

    pub fn intersection(&self, other: &ValueSet<T>) -> ValueSet<T> {
        self.items.intersection(&other.items).cloned().collect()
    }

    pub fn difference(&self, other: &ValueSet<T>) -> ValueSet<T> {
        self.items.difference(&other.items).cloned().collect()
    }

    pub fn symmetric_difference(&self, other: &ValueSet<T>) -> ValueSet<T> {
        self.items
            .symmetric_difference(&other.items)
            .cloned()
            .collect()
    }
}

impl<T: Hash + Eq + Display> ValueSet<T> {
    /// Remove `value`, failing if it is absent
    pub fn remove(&mut self, value: &T) -> ContainerResult<()> {
        if self.items.remove(value) {
            Ok(())
        } else {
            Err(ContainerError::ValueNotFound {
                value: value.to_string(),
            })
        }
    }
}

impl<T: Hash + Eq> FromIterator<T> for ValueSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T: Hash + Eq> IntoIterator for &'a ValueSet<T> {
    type Item = &'a T;
    type IntoIter = std::collections::hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Hash + Eq + Display> Display for ValueSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.items.is_empty() {
            return write!(f, "set()");
        }
        write_joined(f, "{", self.items.iter(), "}")
    }
}
