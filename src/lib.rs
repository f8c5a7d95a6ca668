// lib.rs - dstour library root

//! # dstour - Guided tour of container and numeric array basics
//!
//! This library backs the `dstour` runner: a set of printed walkthroughs over
//! four container kinds and a rectangular numeric array built on `ndarray`.
//!
//! ## Features
//!
//! - **Containers**: ordered mutable sequence, frozen sequence, insertion-ordered
//!   mapping and unique-element set over a tagged `Value` element
//! - **Arrays**: construction, element-wise and matrix arithmetic, boolean and
//!   fancy indexing, NumPy-style display
//! - **File I/O**: printf-formatted text output, numeric and mixed-type
//!   delimited readers, checksummed binary array files with optional LZ4
//! - **Benchmarks**: boxed vs vectorized vs parallel addition, memory footprint
//! - **Demos**: named, independently runnable demonstrations in a registry
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use dstour::prelude::*;
//!
//! let arr = from_vec(vec![10i64, 20, 30, 40, 50, 60, 70]);
//! let mask = greater_than(&arr, 50);
//! assert_eq!(select_mask(&arr, &mask)?.to_vec(), vec![60, 70]);
//!
//! let m1 = ndarray::array![[1i64, 2], [3, 4]];
//! let m2 = ndarray::array![[5i64, 6], [7, 8]];
//! println!("{}", format_array(&matmul(&m1, &m2)?));
//! # Ok::<(), dstour::error::ArrayError>(())
//! ```

pub mod array;
pub mod bench;
pub mod cli;
pub mod containers;
pub mod demos;
pub mod error;
pub mod output;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::array::{
        format_array, from_nested, from_vec, greater_than, load_binary, load_txt, matmul,
        read_records, save_binary, save_txt, select_mask, take, DType, Element, Nested,
        RecordOptions, RecordTable,
    };
    pub use crate::cli::{validate_args, Args, ValidationResult};
    pub use crate::containers::{FrozenSequence, Mapping, Sequence, Value, ValueSet};
    pub use crate::demos::{Demo, DemoContext, DemoRegistry};
    pub use crate::error::{ArrayError, ContainerError, DemoError};
    pub use crate::output::Report;
}

// Re-export main types at the root level for convenience
pub use cli::{Args, ValidationResult};
pub use containers::{FrozenSequence, Mapping, Sequence, Value, ValueSet};
pub use demos::{Demo, DemoContext, DemoRegistry};
pub use error::{ArrayError, ContainerError, DemoError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!(
        "dstour v{} - Guided tour of container and numeric array basics",
        VERSION
    )
}
