// ops.rs - Element-wise arithmetic, matrix products and reductions

use super::{Element, Numeric};
use crate::error::{ArrayError, ArrayResult};
use ndarray::{Array, Array1, Array2, ArrayBase, Data, Dimension, Zip};
use rayon::prelude::*;

fn check_same_shape<A, B, S1, S2, D>(
    left: &ArrayBase<S1, D>,
    right: &ArrayBase<S2, D>,
) -> ArrayResult<()>
where
    S1: Data<Elem = A>,
    S2: Data<Elem = B>,
    D: Dimension,
{
    if left.shape() != right.shape() {
        return Err(ArrayError::ShapeMismatch {
            left: left.shape().to_vec(),
            right: right.shape().to_vec(),
        });
    }
    Ok(())
}

/// Element-wise sum of two equally shaped arrays
pub fn add<T, S1, S2, D>(left: &ArrayBase<S1, D>, right: &ArrayBase<S2, D>) -> ArrayResult<Array<T, D>>
where
    T: Numeric,
    S1: Data<Elem = T>,
    S2: Data<Elem = T>,
    D: Dimension,
{
    check_same_shape(left, right)?;
    Ok(Zip::from(left).and(right).map_collect(|&a, &b| a + b))
}

/// Element-wise product of two equally shaped arrays
pub fn mul<T, S1, S2, D>(left: &ArrayBase<S1, D>, right: &ArrayBase<S2, D>) -> ArrayResult<Array<T, D>>
where
    T: Numeric,
    S1: Data<Elem = T>,
    S2: Data<Elem = T>,
    D: Dimension,
{
    check_same_shape(left, right)?;
    Ok(Zip::from(left).and(right).map_collect(|&a, &b| a * b))
}

pub fn add_scalar<T, S, D>(array: &ArrayBase<S, D>, scalar: T) -> Array<T, D>
where
    T: Numeric,
    S: Data<Elem = T>,
    D: Dimension,
{
    array.mapv(|a| a + scalar)
}

pub fn mul_scalar<T, S, D>(array: &ArrayBase<S, D>, scalar: T) -> Array<T, D>
where
    T: Numeric,
    S: Data<Elem = T>,
    D: Dimension,
{
    array.mapv(|a| a * scalar)
}

/// Parallel element-wise sum of two 1-D arrays using the rayon pool
pub fn par_add<T, S1, S2>(left: &ArrayBase<S1, ndarray::Ix1>, right: &ArrayBase<S2, ndarray::Ix1>) -> ArrayResult<Array1<T>>
where
    T: Numeric,
    S1: Data<Elem = T>,
    S2: Data<Elem = T>,
{
    check_same_shape(left, right)?;
    match (left.as_slice(), right.as_slice()) {
        (Some(a), Some(b)) => {
            let summed: Vec<T> = a.par_iter().zip(b.par_iter()).map(|(&x, &y)| x + y).collect();
            Ok(Array1::from_vec(summed))
        }
        // Strided views fall back to the sequential path
        _ => add(left, right),
    }
}

/// Matrix product; the inner dimensions must agree
pub fn matmul<T, S1, S2>(left: &ArrayBase<S1, ndarray::Ix2>, right: &ArrayBase<S2, ndarray::Ix2>) -> ArrayResult<Array2<T>>
where
    T: Numeric,
    S1: Data<Elem = T>,
    S2: Data<Elem = T>,
{
    if left.ncols() != right.nrows() {
        return Err(ArrayError::DimensionMismatch {
            left: left.shape().to_vec(),
            right: right.shape().to_vec(),
        });
    }
    Ok(left.dot(right))
}

pub fn sqrt<T, S, D>(array: &ArrayBase<S, D>) -> Array<f64, D>
where
    T: Element,
    S: Data<Elem = T>,
    D: Dimension,
{
    array.mapv(|a| a.to_f64().sqrt())
}

pub fn exp<T, S, D>(array: &ArrayBase<S, D>) -> Array<f64, D>
where
    T: Element,
    S: Data<Elem = T>,
    D: Dimension,
{
    array.mapv(|a| a.to_f64().exp())
}

pub fn sum<T, S, D>(array: &ArrayBase<S, D>) -> T
where
    T: Numeric,
    S: Data<Elem = T>,
    D: Dimension,
{
    array.sum()
}

/// Arithmetic mean as f64; empty arrays have no mean
pub fn mean<T, S, D>(array: &ArrayBase<S, D>) -> ArrayResult<f64>
where
    T: Element,
    S: Data<Elem = T>,
    D: Dimension,
{
    if array.is_empty() {
        return Err(ArrayError::EmptyArray);
    }
    let total: f64 = array.iter().map(|&a| a.to_f64()).sum();
    Ok(total / array.len() as f64)
}

fn fold_extreme<T, S, D>(array: &ArrayBase<S, D>, pick_left: fn(&T, &T) -> bool) -> ArrayResult<T>
where
    T: Element,
    S: Data<Elem = T>,
    D: Dimension,
{
    let mut iter = array.iter();
    let first = *iter.next().ok_or(ArrayError::EmptyArray)?;
    Ok(iter.fold(first, |best, item| {
        if pick_left(&best, item) {
            best
        } else {
            *item
        }
    }))
}

pub fn max<T, S, D>(array: &ArrayBase<S, D>) -> ArrayResult<T>
where
    T: Element,
    S: Data<Elem = T>,
    D: Dimension,
{
    fold_extreme(array, |best, item| best >= item)
}

pub fn min<T, S, D>(array: &ArrayBase<S, D>) -> ArrayResult<T>
where
    T: Element,
    S: Data<Elem = T>,
    D: Dimension,
{
    fold_extreme(array, |best, item| best <= item)
}
