// error.rs - Error types for containers, arrays and demos

use thiserror::Error;

/// Errors raised by the container types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContainerError {
    #[error("index {index} out of range for length {length}")]
    IndexOutOfBounds { index: isize, length: usize },

    #[error("value not found: {value}")]
    ValueNotFound { value: String },

    #[error("key not found: {key}")]
    KeyNotFound { key: String },

    #[error("pop from empty {container}")]
    EmptyContainer { container: &'static str },

    #[error("{0}")]
    Unsupported(String),
}

/// Errors raised by array construction, arithmetic, indexing and file I/O
#[derive(Error, Debug)]
pub enum ArrayError {
    #[error("operands could not be combined: shapes {left:?} and {right:?}")]
    ShapeMismatch { left: Vec<usize>, right: Vec<usize> },

    #[error("matmul: inner dimensions differ ({left:?} @ {right:?})")]
    DimensionMismatch { left: Vec<usize>, right: Vec<usize> },

    #[error("axis {axis} index {index} is out of bounds for size {size}")]
    AxisOutOfBounds { axis: usize, index: isize, size: usize },

    #[error("index {index} is out of bounds for length {length}")]
    IndexOutOfBounds { index: isize, length: usize },

    #[error("operation requires a non-empty array")]
    EmptyArray,

    #[error("nested list is ragged: {0}")]
    RaggedNesting(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid field format '{0}'")]
    InvalidFormat(String),

    #[error("line {line}, column {column}: could not convert '{field}' to float")]
    Parse {
        line: usize,
        column: usize,
        field: String,
    },

    #[error("line {line}: expected {expected} fields, found {found}")]
    Ragged {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("no column named '{0}'")]
    UnknownColumn(String),

    #[error("column '{name}' holds {kind} values")]
    NonNumericColumn { name: String, kind: &'static str },

    #[error("expected dtype {expected}, file holds {found}")]
    DTypeMismatch { expected: String, found: String },

    #[error("corrupt array file: {0}")]
    Corrupt(String),

    #[error("encoding error: {0}")]
    Encoding(#[from] bincode::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors surfaced by a demonstration run
#[derive(Error, Debug)]
pub enum DemoError {
    #[error(transparent)]
    Container(#[from] ContainerError),

    #[error(transparent)]
    Array(#[from] ArrayError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown demo '{0}'")]
    UnknownDemo(String),
}

pub type ContainerResult<T> = Result<T, ContainerError>;
pub type ArrayResult<T> = Result<T, ArrayError>;
pub type DemoResult<T> = Result<T, DemoError>;
