// mod.rs - Numeric array module built on ndarray

pub mod binary;
pub mod construct;
pub mod display;
pub mod index;
pub mod ops;
pub mod records;
pub mod text;

// Re-export main types for convenience
pub use binary::{load_binary, read_array_file, save_binary, AnyArray, ArrayFile, ArrayHeader};
pub use construct::{
    arange, eye, from_nested, from_vec, full, linspace, ones, random_float,
    random_int, zeros, Nested,
};
pub use display::{format_array, format_shape};
pub use index::{at, column, get2, greater_than, row, select_mask, slice, take};
pub use ops::{
    add, add_scalar, exp, matmul, max, mean, min, mul, mul_scalar, par_add, sqrt, sum,
};
pub use records::{read_records, Column, ColumnKind, Field, RecordOptions, RecordTable};
pub use text::{load_txt, save_txt, FieldFormat};

use ndarray::LinalgScalar;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};

/// Element type tag stored alongside array data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DType {
    Int64,
    Float64,
    Bool,
}

impl DType {
    pub fn name(&self) -> &'static str {
        match self {
            DType::Int64 => "int64",
            DType::Float64 => "float64",
            DType::Bool => "bool",
        }
    }

    /// Bytes per element in the binary payload
    pub fn item_size(&self) -> usize {
        match self {
            DType::Int64 | DType::Float64 => 8,
            DType::Bool => 1,
        }
    }
}

impl Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Types that can live in a tour array
pub trait Element: Copy + PartialOrd + Debug + Display + Send + Sync + 'static {
    const DTYPE: DType;

    fn to_f64(self) -> f64;

    /// Exact integer value, for types that have one
    fn to_i64(self) -> Option<i64> {
        None
    }

    /// Append the little-endian encoding of `self`
    fn write_le(self, out: &mut Vec<u8>);

    /// Decode one element; `None` if the bytes are not a valid encoding
    fn read_le(bytes: &[u8]) -> Option<Self>;

    /// Render a batch of elements for display. Floats share one precision.
    fn format_items(items: &[Self]) -> Vec<String> {
        items.iter().map(|item| item.to_string()).collect()
    }
}

impl Element for i64 {
    const DTYPE: DType = DType::Int64;

    fn to_f64(self) -> f64 {
        self as f64
    }

    fn to_i64(self) -> Option<i64> {
        Some(self)
    }

    fn write_le(self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_le_bytes());
    }

    fn read_le(bytes: &[u8]) -> Option<Self> {
        bytes.try_into().ok().map(i64::from_le_bytes)
    }
}

impl Element for f64 {
    const DTYPE: DType = DType::Float64;

    fn to_f64(self) -> f64 {
        self
    }

    fn write_le(self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.to_le_bytes());
    }

    fn read_le(bytes: &[u8]) -> Option<Self> {
        bytes.try_into().ok().map(f64::from_le_bytes)
    }

    fn format_items(items: &[Self]) -> Vec<String> {
        display::format_floats(items)
    }
}

impl Element for bool {
    const DTYPE: DType = DType::Bool;

    fn to_f64(self) -> f64 {
        if self {
            1.0
        } else {
            0.0
        }
    }

    fn to_i64(self) -> Option<i64> {
        Some(self as i64)
    }

    fn write_le(self, out: &mut Vec<u8>) {
        out.push(self as u8);
    }

    fn read_le(bytes: &[u8]) -> Option<Self> {
        match bytes {
            [0] => Some(false),
            [1] => Some(true),
            _ => None,
        }
    }

    fn format_items(items: &[Self]) -> Vec<String> {
        items
            .iter()
            .map(|&item| if item { "True" } else { "False" }.to_string())
            .collect()
    }
}

/// Elements that support arithmetic and matrix products
pub trait Numeric: Element + LinalgScalar {}

impl Numeric for i64 {}
impl Numeric for f64 {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dtype_names() {
        assert_eq!(<i64 as Element>::DTYPE.name(), "int64");
        assert_eq!(<f64 as Element>::DTYPE.to_string(), "float64");
        assert_eq!(<bool as Element>::DTYPE.item_size(), 1);
    }

    #[test]
    fn test_le_encoding() {
        let mut bytes = Vec::new();
        (-7i64).write_le(&mut bytes);
        1.5f64.write_le(&mut bytes);
        true.write_le(&mut bytes);
        assert_eq!(bytes.len(), 17);

        assert_eq!(i64::read_le(&bytes[0..8]), Some(-7));
        assert_eq!(f64::read_le(&bytes[8..16]), Some(1.5));
        assert_eq!(bool::read_le(&bytes[16..17]), Some(true));
        assert_eq!(bool::read_le(&[2]), None);
        assert_eq!(i64::read_le(&bytes[0..4]), None);
    }
}
