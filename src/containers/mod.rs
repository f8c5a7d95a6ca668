// mod.rs - Container types module

pub mod mapping;
pub mod sequence;
pub mod set;
pub mod tuple;
pub mod value;

// Re-export main types for convenience
pub use mapping::{Items, Keys, Mapping, Values};
pub use sequence::Sequence;
pub use set::ValueSet;
pub use tuple::FrozenSequence;
pub use value::Value;

use std::fmt::{self, Display};
use std::ops::Range;

/// Resolve a possibly negative index against `len`.
/// Returns `None` when it falls outside `-len..len`.
pub fn normalize_index(index: isize, len: usize) -> Option<usize> {
    let len_signed = len as isize;
    let resolved = if index < 0 { index + len_signed } else { index };
    if (0..len_signed).contains(&resolved) {
        Some(resolved as usize)
    } else {
        None
    }
}

/// Turn optional `[start, end)` bounds into a valid range over `len` items.
/// Negative bounds count from the end and everything is clamped.
pub fn clamp_range(start: Option<isize>, end: Option<isize>, len: usize) -> Range<usize> {
    let clamp = |bound: isize| -> usize {
        let len_signed = len as isize;
        let resolved = if bound < 0 { bound + len_signed } else { bound };
        resolved.clamp(0, len_signed) as usize
    };

    let lo = start.map(clamp).unwrap_or(0);
    let hi = end.map(clamp).unwrap_or(len);
    lo..hi.max(lo)
}

/// Write `items` between `open` and `close`, separated by ", "
pub(crate) fn write_joined<I, T>(
    f: &mut fmt::Formatter<'_>,
    open: &str,
    items: I,
    close: &str,
) -> fmt::Result
where
    I: IntoIterator<Item = T>,
    T: Display,
{
    write!(f, "{}", open)?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    write!(f, "{}", close)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_index() {
        assert_eq!(normalize_index(0, 5), Some(0));
        assert_eq!(normalize_index(4, 5), Some(4));
        assert_eq!(normalize_index(-1, 5), Some(4));
        assert_eq!(normalize_index(-5, 5), Some(0));
        assert_eq!(normalize_index(5, 5), None);
        assert_eq!(normalize_index(-6, 5), None);
        assert_eq!(normalize_index(0, 0), None);
    }

    #[test]
    fn test_clamp_range() {
        assert_eq!(clamp_range(Some(1), Some(4), 5), 1..4);
        assert_eq!(clamp_range(Some(1), Some(40), 5), 1..5);
        assert_eq!(clamp_range(Some(-2), None, 5), 3..5);
        assert_eq!(clamp_range(Some(-20), Some(2), 5), 0..2);
        assert_eq!(clamp_range(Some(4), Some(1), 5), 4..4);
        assert_eq!(clamp_range(None, None, 0), 0..0);
    }
}
