// index.rs - Positional, boolean-mask and fancy indexing

use crate::containers::{clamp_range, normalize_index};
use crate::error::{ArrayError, ArrayResult};
use ndarray::{s, Array, Array1, ArrayBase, Axis, Data, Dimension, Ix1, Ix2};

fn resolve_axis(index: isize, axis: usize, size: usize) -> ArrayResult<usize> {
    normalize_index(index, size).ok_or(ArrayError::AxisOutOfBounds { axis, index, size })
}

/// Single element of a 1-D array; negative indices count from the end
pub fn at<T, S>(array: &ArrayBase<S, Ix1>, index: isize) -> ArrayResult<T>
where
    T: Clone,
    S: Data<Elem = T>,
{
    let pos = normalize_index(index, array.len()).ok_or(ArrayError::IndexOutOfBounds {
        index,
        length: array.len(),
    })?;
    Ok(array[pos].clone())
}

/// Copy of `[start, end)` with clamped bounds
pub fn slice<T, S>(array: &ArrayBase<S, Ix1>, start: Option<isize>, end: Option<isize>) -> Array1<T>
where
    T: Clone,
    S: Data<Elem = T>,
{
    let range = clamp_range(start, end, array.len());
    array.slice(s![range.start..range.end]).to_owned()
}

/// Element at `[row, col]`
pub fn get2<T, S>(array: &ArrayBase<S, Ix2>, row: isize, col: isize) -> ArrayResult<T>
where
    T: Clone,
    S: Data<Elem = T>,
{
    let i = resolve_axis(row, 0, array.nrows())?;
    let j = resolve_axis(col, 1, array.ncols())?;
    Ok(array[[i, j]].clone())
}

/// Full column `j` as a 1-D array (`array[:, j]`)
pub fn column<T, S>(array: &ArrayBase<S, Ix2>, col: isize) -> ArrayResult<Array1<T>>
where
    T: Clone,
    S: Data<Elem = T>,
{
    let j = resolve_axis(col, 1, array.ncols())?;
    Ok(array.column(j).to_owned())
}

/// Full row `i` as a 1-D array (`array[i, :]`)
pub fn row<T, S>(array: &ArrayBase<S, Ix2>, row: isize) -> ArrayResult<Array1<T>>
where
    T: Clone,
    S: Data<Elem = T>,
{
    let i = resolve_axis(row, 0, array.nrows())?;
    Ok(array.row(i).to_owned())
}

/// Same-shaped mask that is true where `array > threshold`
pub fn greater_than<T, S, D>(array: &ArrayBase<S, D>, threshold: T) -> Array<bool, D>
where
    T: PartialOrd + Copy,
    S: Data<Elem = T>,
    D: Dimension,
{
    array.mapv(|a| a > threshold)
}

/// Elements where `mask` is true, flattened in row-major order
pub fn select_mask<T, S, M, D>(array: &ArrayBase<S, D>, mask: &ArrayBase<M, D>) -> ArrayResult<Array1<T>>
where
    T: Clone,
    S: Data<Elem = T>,
    M: Data<Elem = bool>,
    D: Dimension,
{
    if array.shape() != mask.shape() {
        return Err(ArrayError::ShapeMismatch {
            left: array.shape().to_vec(),
            right: mask.shape().to_vec(),
        });
    }

    Ok(array
        .iter()
        .zip(mask.iter())
        .filter(|(_, keep)| **keep)
        .map(|(item, _)| item.clone())
        .collect())
}

/// Fancy indexing: elements at `indices`, in that order, duplicates allowed
pub fn take<T, S>(array: &ArrayBase<S, Ix1>, indices: &[isize]) -> ArrayResult<Array1<T>>
where
    T: Clone,
    S: Data<Elem = T>,
{
    let positions = indices
        .iter()
        .map(|&index| resolve_axis(index, 0, array.len()))
        .collect::<ArrayResult<Vec<usize>>>()?;
    Ok(array.select(Axis(0), &positions))
}
