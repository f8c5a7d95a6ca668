// tuple.rs - Ordered immutable sequence

use super::{clamp_range, normalize_index};
use crate::error::{ContainerError, ContainerResult};
use std::fmt::{self, Display};
use std::sync::Arc;

/// Fixed-at-creation sequence. Reads and concatenation only; every
/// mutation attempt reports `ContainerError::Unsupported`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrozenSequence<T> {
    items: Arc<[T]>,
}

impl<T> FrozenSequence<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: isize) -> ContainerResult<&T> {
        let pos = normalize_index(index, self.items.len()).ok_or(
            ContainerError::IndexOutOfBounds {
                index,
                length: self.items.len(),
            },
        )?;
        Ok(&self.items[pos])
    }

    /// Item assignment is not supported on a frozen sequence
    pub fn try_set(&self, _index: isize, _value: T) -> ContainerResult<()> {
        Err(ContainerError::Unsupported(
            "'tuple' object does not support item assignment".to_string(),
        ))
    }

    /// Item deletion is not supported on a frozen sequence
    pub fn try_delete(&self, _index: isize) -> ContainerResult<()> {
        Err(ContainerError::Unsupported(
            "'tuple' object doesn't support item deletion".to_string(),
        ))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: Clone> FrozenSequence<T> {
    pub fn slice(&self, start: Option<isize>, end: Option<isize>) -> Self {
        let range = clamp_range(start, end, self.items.len());
        Self::from(self.items[range].to_vec())
    }

    /// New sequence holding `self` followed by `other`; both operands are untouched
    pub fn concat(&self, other: &FrozenSequence<T>) -> Self {
        self.iter().chain(other.iter()).cloned().collect()
    }
}

impl<T: PartialEq> FrozenSequence<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.items.contains(value)
    }
}

impl<T> From<Vec<T>> for FrozenSequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self {
            items: items.into(),
        }
    }
}

impl<T> FromIterator<T> for FrozenSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<'a, T> IntoIterator for &'a FrozenSequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Display> Display for FrozenSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // One-element tuples keep their trailing comma
        if self.items.len() == 1 {
            return write!(f, "({},)", self.items[0]);
        }
        super::write_joined(f, "(", self.items.iter(), ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::containers::Value;
    use crate::values;

    #[test]
    fn test_access_and_slice() {
        let tuple = FrozenSequence::from(values![1, 2, "apple", "banana"]);
        assert_eq!(tuple.to_string(), "(1, 2, 'apple', 'banana')");
        assert_eq!(tuple.get(0).unwrap(), &Value::Int(1));
        assert_eq!(tuple.get(-1).unwrap(), &Value::from("banana"));
        assert_eq!(tuple.slice(Some(1), Some(4)).to_string(), "(2, 'apple', 'banana')");
        assert!(tuple.get(4).is_err());
    }

    #[test]
    fn test_mutation_is_unsupported() {
        let tuple = FrozenSequence::from(values![1, 2]);
        let err = tuple.try_set(0, Value::Int(10)).unwrap_err();
        assert!(matches!(err, ContainerError::Unsupported(_)));
        assert_eq!(
            err.to_string(),
            "'tuple' object does not support item assignment"
        );
        assert!(tuple.try_delete(0).is_err());
        assert_eq!(tuple.get(0).unwrap(), &Value::Int(1));
    }

    #[test]
    fn test_concat_leaves_operands_unchanged() {
        let a = FrozenSequence::from(values![1, 2, "apple", "banana"]);
        let b = FrozenSequence::from(values!["cherry", "date"]);
        let combined = a.concat(&b);

        assert_eq!(combined.len(), a.len() + b.len());
        assert_eq!(a.len(), 4);
        assert_eq!(b.len(), 2);
        assert_eq!(
            combined.to_string(),
            "(1, 2, 'apple', 'banana', 'cherry', 'date')"
        );
    }

    #[test]
    fn test_single_element_display() {
        let single = FrozenSequence::from(vec![7]);
        assert_eq!(single.to_string(), "(7,)");
        let empty: FrozenSequence<i32> = FrozenSequence::from(Vec::new());
        assert_eq!(empty.to_string(), "()");
    }
}
