// mod.rs - Timing and memory comparison of boxed sequences vs contiguous arrays

use crate::array::{arange, par_add};
use crate::containers::Value;
use crate::error::{ArrayError, ArrayResult};
use ndarray::Array1;
use std::mem::size_of;
use std::time::{Duration, Instant};

/// Wall-clock times for adding two `0..size` sequences three different ways
#[derive(Debug, Clone)]
pub struct TimingReport {
    pub size: usize,
    /// `Vec<Box<Value>>` with per-element type dispatch
    pub boxed: Duration,
    /// `ndarray` element-wise `&a + &b`
    pub vectorized: Duration,
    /// rayon parallel slice addition
    pub parallel: Duration,
}

impl TimingReport {
    /// How many times faster the vectorized path was than the boxed one
    pub fn speedup(&self) -> f64 {
        let vectorized = self.vectorized.as_secs_f64();
        if vectorized > 0.0 {
            self.boxed.as_secs_f64() / vectorized
        } else {
            f64::INFINITY
        }
    }
}

fn boxed_sequence(size: usize) -> Vec<Box<Value>> {
    (0..size).map(|i| Box::new(Value::Int(i as i64))).collect()
}

/// Time element-wise addition of two `0..size` sequences.
/// Fails if the three variants do not produce the same sums.
pub fn compare_addition(size: usize) -> ArrayResult<TimingReport> {
    let list1 = boxed_sequence(size);
    let list2 = boxed_sequence(size);

    let start = Instant::now();
    let boxed_result = list1
        .iter()
        .zip(list2.iter())
        .map(|(a, b)| a.checked_add(b).map(Box::new))
        .collect::<Option<Vec<Box<Value>>>>()
        .ok_or_else(|| ArrayError::InvalidArgument("boxed addition overflowed".to_string()))?;
    let boxed = start.elapsed();

    let array1 = arange(0, size as i64, 1)?;
    let array2 = arange(0, size as i64, 1)?;

    let start = Instant::now();
    let vectorized_result: Array1<i64> = &array1 + &array2;
    let vectorized = start.elapsed();

    let start = Instant::now();
    let parallel_result = par_add(&array1, &array2)?;
    let parallel = start.elapsed();

    let boxed_agrees = boxed_result.len() == vectorized_result.len()
        && boxed_result
            .iter()
            .zip(vectorized_result.iter())
            .all(|(boxed, &plain)| boxed.as_int() == Some(plain));
    if !boxed_agrees || parallel_result != vectorized_result {
        return Err(ArrayError::InvalidArgument(
            "addition variants produced different results".to_string(),
        ));
    }

    tracing::debug!(
        size,
        boxed_ms = boxed.as_secs_f64() * 1e3,
        vectorized_ms = vectorized.as_secs_f64() * 1e3,
        parallel_ms = parallel.as_secs_f64() * 1e3,
        threads = rayon::current_num_threads(),
        "addition timings"
    );

    Ok(TimingReport {
        size,
        boxed,
        vectorized,
        parallel,
    })
}

/// Byte counts for `elements` integers stored boxed vs contiguously
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryReport {
    pub elements: usize,
    /// The `Vec` header plus its table of box pointers
    pub pointer_table: usize,
    /// Pointer table plus one heap-allocated `Value` per element
    pub boxed_total: usize,
    /// The array header plus its contiguous `i64` buffer
    pub contiguous: usize,
}

impl MemoryReport {
    /// Boxed total divided by the contiguous size
    pub fn ratio(&self) -> f64 {
        if self.contiguous == 0 {
            return 0.0;
        }
        self.boxed_total as f64 / self.contiguous as f64
    }
}

pub fn compare_memory(elements: usize) -> ArrayResult<MemoryReport> {
    let boxed = boxed_sequence(elements);
    let pointer_table = size_of::<Vec<Box<Value>>>() + boxed.capacity() * size_of::<Box<Value>>();
    let boxed_total = pointer_table + boxed.len() * size_of::<Value>();

    let array = arange(0, elements as i64, 1)?;
    let contiguous = size_of::<Array1<i64>>() + array.len() * size_of::<i64>();

    Ok(MemoryReport {
        elements,
        pointer_table,
        boxed_total,
        contiguous,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_addition_runs_all_variants() {
        let report = compare_addition(10_000).unwrap();
        assert_eq!(report.size, 10_000);
        assert!(report.speedup() > 0.0);
    }

    #[test]
    fn test_compare_addition_empty() {
        let report = compare_addition(0).unwrap();
        assert_eq!(report.size, 0);
    }

    #[test]
    fn test_memory_report() {
        let report = compare_memory(10_000).unwrap();
        assert_eq!(report.elements, 10_000);
        assert!(report.pointer_table >= 10_000 * size_of::<Box<Value>>());
        assert_eq!(
            report.boxed_total,
            report.pointer_table + 10_000 * size_of::<Value>()
        );
        assert!(report.contiguous >= 80_000);
        assert!(report.contiguous < report.boxed_total);
        assert!(report.ratio() > 1.0);
    }
}
