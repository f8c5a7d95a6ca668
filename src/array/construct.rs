// construct.rs - Array constructors

use super::Element;
use crate::error::{ArrayError, ArrayResult};
use ndarray::{Array1, Array2, ArrayD, IxDyn};
use rand::Rng;

/// Nested literal list; dimensionality follows the nesting depth
#[derive(Debug, Clone, PartialEq)]
pub enum Nested<T> {
    Item(T),
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// One level of nesting from plain items
    pub fn flat(items: Vec<T>) -> Self {
        Nested::List(items.into_iter().map(Nested::Item).collect())
    }

    /// Two levels of nesting from rows
    pub fn rows(rows: Vec<Vec<T>>) -> Self {
        Nested::List(rows.into_iter().map(Nested::flat).collect())
    }

    /// Shape implied by following the first element at every level
    fn implied_shape(&self) -> Vec<usize> {
        let mut shape = Vec::new();
        let mut node = self;
        while let Nested::List(children) = node {
            shape.push(children.len());
            match children.first() {
                Some(first) => node = first,
                None => break,
            }
        }
        shape
    }

    fn flatten_into(&self, shape: &[usize], depth: usize, out: &mut Vec<T>) -> ArrayResult<()>
    where
        T: Clone,
    {
        match (self, shape.get(depth)) {
            (Nested::Item(value), None) => {
                out.push(value.clone());
                Ok(())
            }
            (Nested::List(children), Some(&expected)) => {
                if children.len() != expected {
                    return Err(ArrayError::RaggedNesting(format!(
                        "list at depth {} has {} items, expected {}",
                        depth,
                        children.len(),
                        expected
                    )));
                }
                children
                    .iter()
                    .try_for_each(|child| child.flatten_into(shape, depth + 1, out))
            }
            (Nested::Item(_), Some(_)) => Err(ArrayError::RaggedNesting(format!(
                "scalar found at depth {} where a list was expected",
                depth
            ))),
            (Nested::List(_), None) => Err(ArrayError::RaggedNesting(format!(
                "list found at depth {} where a scalar was expected",
                depth
            ))),
        }
    }
}

/// Build an array from a nested literal
pub fn from_nested<T: Element>(nested: &Nested<T>) -> ArrayResult<ArrayD<T>> {
    let shape = nested.implied_shape();
    let mut data = Vec::with_capacity(shape.iter().product());
    nested.flatten_into(&shape, 0, &mut data)?;

    ArrayD::from_shape_vec(IxDyn(&shape), data)
        .map_err(|e| ArrayError::InvalidArgument(e.to_string()))
}

pub fn from_vec<T: Element>(items: Vec<T>) -> Array1<T> {
    Array1::from_vec(items)
}

pub fn zeros(shape: &[usize]) -> ArrayD<f64> {
    ArrayD::zeros(IxDyn(shape))
}

pub fn ones(shape: &[usize]) -> ArrayD<f64> {
    ArrayD::ones(IxDyn(shape))
}

pub fn full<T: Element>(shape: &[usize], value: T) -> ArrayD<T> {
    ArrayD::from_elem(IxDyn(shape), value)
}

/// `n x n` identity matrix
pub fn eye(n: usize) -> Array2<f64> {
    Array2::eye(n)
}

/// Integers from `start` towards `stop` (exclusive) in increments of `step`
pub fn arange(start: i64, stop: i64, step: i64) -> ArrayResult<Array1<i64>> {
    if step == 0 {
        return Err(ArrayError::InvalidArgument("arange step must be non-zero".to_string()));
    }

    // i128 holds every span and step of two i64 bounds
    let (span, wide_step) = (stop as i128 - start as i128, step as i128);
    let count = if span != 0 && (span > 0) == (wide_step > 0) {
        (span + wide_step - wide_step.signum()) / wide_step
    } else {
        0
    };
    // Arrays cannot exceed isize::MAX bytes
    let max_len = (isize::MAX as usize / std::mem::size_of::<i64>()) as i128;
    if count > max_len {
        return Err(ArrayError::InvalidArgument(format!(
            "arange({}, {}, {}) has too many elements",
            start, stop, step
        )));
    }
    let count = count as usize;

    // Every produced value lies in [start, stop), so it fits in i64
    Ok((0..count)
        .map(|i| (start as i128 + i as i128 * wide_step) as i64)
        .collect())
}

/// `num` evenly spaced samples over `[start, stop]`
pub fn linspace(start: f64, stop: f64, num: usize) -> Array1<f64> {
    Array1::linspace(start, stop, num)
}

/// Uniform random integers in `[low, high)`
pub fn random_int<R: Rng>(
    rng: &mut R,
    low: i64,
    high: i64,
    shape: &[usize],
) -> ArrayResult<ArrayD<i64>> {
    if low >= high {
        return Err(ArrayError::InvalidArgument(format!(
            "random_int requires low < high, got {} >= {}",
            low, high
        )));
    }
    Ok(ArrayD::from_shape_simple_fn(IxDyn(shape), || {
        rng.random_range(low..high)
    }))
}

/// Uniform random floats in `[0, 1)`
pub fn random_float<R: Rng>(rng: &mut R, shape: &[usize]) -> ArrayD<f64> {
    ArrayD::from_shape_simple_fn(IxDyn(shape), || rng.random::<f64>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_from_nested_infers_dimensions() {
        let flat = from_nested(&Nested::flat(vec![1i64, 2, 3, 4, 5])).unwrap();
        assert_eq!(flat.shape(), &[5]);
        assert_eq!(flat.ndim(), 1);

        let matrix = from_nested(&Nested::rows(vec![vec![1i64, 2, 3], vec![4, 5, 6]])).unwrap();
        assert_eq!(matrix.shape(), &[2, 3]);
        assert_eq!(matrix[[1, 2]], 6);

        let scalar = from_nested(&Nested::Item(2.5f64)).unwrap();
        assert_eq!(scalar.ndim(), 0);
    }

    #[test]
    fn test_from_nested_rejects_ragged_input() {
        let ragged = Nested::rows(vec![vec![1i64, 2, 3], vec![4, 5]]);
        assert!(matches!(
            from_nested(&ragged),
            Err(ArrayError::RaggedNesting(_))
        ));

        let mixed_depth = Nested::List(vec![Nested::Item(1i64), Nested::flat(vec![2])]);
        assert!(from_nested(&mixed_depth).is_err());
    }

    #[test]
    fn test_shape_constructors() {
        assert_eq!(zeros(&[3, 4]).shape(), &[3, 4]);
        assert!(ones(&[2, 2]).iter().all(|&x| x == 1.0));
        assert!(full(&[2, 3], 7i64).iter().all(|&x| x == 7));

        let identity = eye(3);
        assert_eq!(identity[[1, 1]], 1.0);
        assert_eq!(identity[[0, 1]], 0.0);
        assert_eq!(identity.sum(), 3.0);
    }

    #[test]
    fn test_arange_and_linspace() {
        assert_eq!(arange(0, 10, 2).unwrap().to_vec(), vec![0, 2, 4, 6, 8]);
        assert_eq!(arange(0, 9, 2).unwrap().to_vec(), vec![0, 2, 4, 6, 8]);
        assert_eq!(arange(5, 0, -2).unwrap().to_vec(), vec![5, 3, 1]);
        assert!(arange(3, 3, 1).unwrap().is_empty());
        assert!(arange(0, 10, -1).unwrap().is_empty());
        assert!(arange(0, 10, 0).is_err());

        assert_eq!(
            linspace(0.0, 10.0, 5).to_vec(),
            vec![0.0, 2.5, 5.0, 7.5, 10.0]
        );
    }

    #[test]
    fn test_arange_extreme_bounds() {
        assert_eq!(arange(0, i64::MAX, i64::MAX).unwrap().to_vec(), vec![0]);
        assert_eq!(arange(i64::MAX, i64::MIN, i64::MIN).unwrap().to_vec(), vec![i64::MAX, -1]);
        assert_eq!(
            arange(i64::MIN, i64::MAX, i64::MAX).unwrap().to_vec(),
            vec![i64::MIN, -1, i64::MAX - 1]
        );
        assert!(arange(i64::MAX, i64::MIN, 1).unwrap().is_empty());
        assert!(matches!(
            arange(i64::MIN, i64::MAX, 1),
            Err(ArrayError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_random_constructors_respect_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let ints = random_int(&mut rng, 0, 10, &[2, 3]).unwrap();
        assert_eq!(ints.shape(), &[2, 3]);
        assert!(ints.iter().all(|&x| (0..10).contains(&x)));

        let floats = random_float(&mut rng, &[2, 3]);
        assert!(floats.iter().all(|&x| (0.0..1.0).contains(&x)));

        assert!(random_int(&mut rng, 5, 5, &[1]).is_err());
    }

    #[test]
    fn test_seeded_random_is_reproducible() {
        let a = random_int(&mut StdRng::seed_from_u64(7), 0, 100, &[4]).unwrap();
        let b = random_int(&mut StdRng::seed_from_u64(7), 0, 100, &[4]).unwrap();
        assert_eq!(a, b);
    }
}
