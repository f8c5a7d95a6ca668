// sequence.rs - Ordered mutable sequence

use super::{clamp_range, normalize_index, write_joined};
use crate::error::{ContainerError, ContainerResult};
use std::fmt::{self, Display};

/// Resizable, insertion-ordered sequence permitting duplicates.
///
/// Indices may be negative (`-1` is the last element). Slicing clamps its
/// bounds instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sequence<T> {
    items: Vec<T>,
}

impl<T> Sequence<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn resolve(&self, index: isize) -> ContainerResult<usize> {
        normalize_index(index, self.items.len()).ok_or(ContainerError::IndexOutOfBounds {
            index,
            length: self.items.len(),
        })
    }

    /// Element at `index`
    pub fn get(&self, index: isize) -> ContainerResult<&T> {
        let pos = self.resolve(index)?;
        Ok(&self.items[pos])
    }

    /// Replace the element at `index`, returning the old one
    pub fn set(&mut self, index: isize, value: T) -> ContainerResult<T> {
        let pos = self.resolve(index)?;
        Ok(std::mem::replace(&mut self.items[pos], value))
    }

    /// Add to the end
    pub fn append(&mut self, value: T) {
        self.items.push(value);
    }

    /// Insert before `index`; out-of-range positions insert at the nearest end
    pub fn insert(&mut self, index: isize, value: T) {
        let pos = clamp_range(Some(index), None, self.items.len()).start;
        self.items.insert(pos, value);
    }

    /// Remove and return the element at `index` (last when `None`)
    pub fn pop(&mut self, index: Option<isize>) -> ContainerResult<T> {
        if self.items.is_empty() {
            return Err(ContainerError::EmptyContainer { container: "list" });
        }
        let pos = self.resolve(index.unwrap_or(-1))?;
        Ok(self.items.remove(pos))
    }

    /// Remove the element at `index` without returning it
    pub fn delete(&mut self, index: isize) -> ContainerResult<()> {
        let pos = self.resolve(index)?;
        self.items.remove(pos);
        Ok(())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: Clone> Sequence<T> {
    /// New sequence holding `[start, end)`
    pub fn slice(&self, start: Option<isize>, end: Option<isize>) -> Self {
        let range = clamp_range(start, end, self.items.len());
        Self {
            items: self.items[range].to_vec(),
        }
    }
}

impl<T: PartialEq> Sequence<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.items.contains(value)
    }
}

impl<T: PartialEq + Display> Sequence<T> {
    /// Remove the first occurrence of `value`
    pub fn remove(&mut self, value: &T) -> ContainerResult<()> {
        match self.items.iter().position(|item| item == value) {
            Some(pos) => {
                self.items.remove(pos);
                Ok(())
            }
            None => Err(ContainerError::ValueNotFound {
                value: value.to_string(),
            }),
        }
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Display> Display for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, "[", &self.items, "]")
    }
}
