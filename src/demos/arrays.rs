// arrays.rs - Array construction, arithmetic, indexing and benchmark demos

use super::{Demo, DemoContext, DemoGroup};
use crate::array::{
    self, arange, at, column, eye, format_array, format_shape, from_nested, from_vec, full,
    get2, greater_than, linspace, matmul, mean, mul_scalar, ones, random_float, random_int,
    select_mask, slice, sqrt, sum, take, zeros, Element, Nested,
};
use crate::bench::{compare_addition, compare_memory};
use crate::error::DemoResult;
use crate::output::Report;
use indicatif::{ProgressBar, ProgressStyle};
use ndarray::array;
use std::io::Write;
use std::time::Duration;

#[derive(Debug, Default)]
pub struct ArrayBasicsDemo;

impl Demo for ArrayBasicsDemo {
    fn name(&self) -> &'static str {
        "array-basics"
    }

    fn description(&self) -> &'static str {
        "Array creation, shape and dtype introspection, filled and random constructors"
    }

    fn group(&self) -> DemoGroup {
        DemoGroup::Arrays
    }

    fn run(&self, ctx: &mut DemoContext, report: &mut Report) -> DemoResult<()> {
        report.section("array basics")?;

        let from_list = from_vec(vec![1i64, 2, 3, 4, 5]);
        writeln!(report, "Array from list: {}", format_array(&from_list))?;
        writeln!(report, "Type: Array{}<{}>", from_list.ndim(), i64::DTYPE)?;
        writeln!(report, "Shape: {}", format_shape(from_list.shape()))?;
        writeln!(report, "Data type of elements: {}", i64::DTYPE)?;
        writeln!(report)?;

        let nested = from_nested(&Nested::rows(vec![vec![1i64, 2, 3], vec![4, 5, 6]]))?;
        writeln!(report, "2D array from nested list:\n{}", format_array(&nested))?;
        writeln!(report, "Shape: {}", format_shape(nested.shape()))?;
        writeln!(report, "Number of dimensions: {}", nested.ndim())?;
        writeln!(report)?;

        writeln!(report, "Zeros {}:\n{}", format_shape(&[3, 4]), format_array(&zeros(&[3, 4])))?;
        writeln!(report, "Ones {}:\n{}", format_shape(&[2, 2]), format_array(&ones(&[2, 2])))?;
        writeln!(report, "Filled with 7:\n{}", format_array(&full(&[2, 3], 7i64)))?;
        writeln!(report, "Identity matrix:\n{}", format_array(&eye(3)))?;
        writeln!(report, "Range 0..10 step 2: {}", format_array(&arange(0, 10, 2)?))?;
        writeln!(report, "5 points from 0 to 10: {}", format_array(&linspace(0.0, 10.0, 5)))?;

        let random_ints = random_int(ctx.rng(), 0, 10, &[2, 3])?;
        writeln!(report, "Random integers in [0, 10):\n{}", format_array(&random_ints))?;
        let random_floats = random_float(ctx.rng(), &[2, 3]);
        writeln!(report, "Random floats in [0, 1):\n{}", format_array(&random_floats))?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct ArrayOpsDemo;

impl Demo for ArrayOpsDemo {
    fn name(&self) -> &'static str {
        "array-ops"
    }

    fn description(&self) -> &'static str {
        "Element-wise arithmetic, matrix product, math functions and reductions"
    }

    fn group(&self) -> DemoGroup {
        DemoGroup::Arrays
    }

    fn run(&self, _ctx: &mut DemoContext, report: &mut Report) -> DemoResult<()> {
        report.section("array operations")?;

        let arr1 = array![1i64, 2, 3, 4];
        let arr2 = array![5i64, 6, 7, 8];
        writeln!(report, "arr1 + arr2: {}", format_array(&array::add(&arr1, &arr2)?))?;
        writeln!(report, "arr1 * 2: {}", format_array(&mul_scalar(&arr1, 2)))?;
        writeln!(report)?;

        let matrix1 = array![[1i64, 2], [3, 4]];
        let matrix2 = array![[5i64, 6], [7, 8]];
        writeln!(
            report,
            "Matrix multiplication (dot product):\n{}",
            format_array(&matmul(&matrix1, &matrix2)?)
        )?;
        writeln!(report)?;

        writeln!(report, "Square root of arr1: {}", format_array(&sqrt(&arr1)))?;
        writeln!(report, "Exponential of arr1: {}", format_array(&array::exp(&arr1)))?;
        writeln!(report)?;

        writeln!(report, "Sum of arr1: {}", sum(&arr1))?;
        writeln!(report, "Mean of arr1: {}", mean(&arr1)?)?;
        writeln!(report, "Max of arr1: {}", array::max(&arr1)?)?;
        writeln!(report, "Min of arr1: {}", array::min(&arr1)?)?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct ArrayIndexingDemo;

impl Demo for ArrayIndexingDemo {
    fn name(&self) -> &'static str {
        "array-indexing"
    }

    fn description(&self) -> &'static str {
        "Positional, slice, boolean-mask and fancy indexing"
    }

    fn group(&self) -> DemoGroup {
        DemoGroup::Arrays
    }

    fn run(&self, _ctx: &mut DemoContext, report: &mut Report) -> DemoResult<()> {
        report.section("indexing and slicing")?;

        let arr = array![10i64, 20, 30, 40, 50, 60, 70];
        let matrix = array![[1i64, 2, 3], [4, 5, 6], [7, 8, 9]];

        writeln!(report, "First element: {}", at(&arr, 0)?)?;
        writeln!(
            report,
            "Elements from index 1 to 4: {}",
            format_array(&slice(&arr, Some(1), Some(5)))
        )?;
        writeln!(report, "Element at row 0, column 1: {}", get2(&matrix, 0, 1)?)?;
        writeln!(report, "Second column:\n{}", format_array(&column(&matrix, 1)?))?;
        writeln!(report)?;

        let mask = greater_than(&arr, 50);
        writeln!(
            report,
            "Elements greater than 50: {}",
            format_array(&select_mask(&arr, &mask)?)
        )?;
        let indices = [0isize, 2, 4];
        writeln!(
            report,
            "Elements at specific indices {:?}: {}",
            indices,
            format_array(&take(&arr, &indices)?)
        )?;
        Ok(())
    }
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.cyan} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

#[derive(Debug, Default)]
pub struct PerformanceDemo;

impl Demo for PerformanceDemo {
    fn name(&self) -> &'static str {
        "performance"
    }

    fn description(&self) -> &'static str {
        "Timing: boxed dynamic sequence vs vectorized vs parallel array addition"
    }

    fn group(&self) -> DemoGroup {
        DemoGroup::Arrays
    }

    fn run(&self, ctx: &mut DemoContext, report: &mut Report) -> DemoResult<()> {
        report.section("performance comparison")?;

        let pb = ctx
            .progress
            .then(|| spinner(&format!("Adding {} elements three ways...", ctx.bench_size)));
        let timing = compare_addition(ctx.bench_size);
        if let Some(pb) = pb {
            pb.finish_and_clear();
        }
        let timing = timing?;

        writeln!(report, "Elements: {}", timing.size)?;
        writeln!(
            report,
            "Boxed sequence addition took: {:.4} seconds (slower due to per-element boxing and type dispatch)",
            timing.boxed.as_secs_f64()
        )?;
        writeln!(
            report,
            "Array addition took: {:.4} seconds (much faster due to vectorization)",
            timing.vectorized.as_secs_f64()
        )?;
        writeln!(
            report,
            "Parallel array addition took: {:.4} seconds ({} threads)",
            timing.parallel.as_secs_f64(),
            rayon::current_num_threads()
        )?;
        writeln!(report, "Vectorized speedup: {:.1}x", timing.speedup())?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryDemo;

impl Demo for MemoryDemo {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn description(&self) -> &'static str {
        "Memory footprint: boxed dynamic sequence vs contiguous array"
    }

    fn group(&self) -> DemoGroup {
        DemoGroup::Arrays
    }

    fn run(&self, ctx: &mut DemoContext, report: &mut Report) -> DemoResult<()> {
        report.section("memory comparison")?;

        let memory = compare_memory(ctx.memory_elements)?;
        let n = memory.elements;
        writeln!(
            report,
            "Size of boxed sequence (pointers only) for {} ints: {} bytes",
            n, memory.pointer_table
        )?;
        writeln!(
            report,
            "Approximate total size (sequence + {} boxed values): {} bytes",
            n, memory.boxed_total
        )?;
        writeln!(
            report,
            "Size of array for {} ints: {} bytes (much more memory efficient)",
            n, memory.contiguous
        )?;
        writeln!(report, "Boxed / contiguous ratio: {:.1}x", memory.ratio())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_demo(demo: &dyn Demo, ctx: &mut DemoContext) -> String {
        let mut report = Report::captured();
        demo.run(ctx, &mut report).unwrap();
        report.contents()
    }

    #[test]
    fn test_array_basics() {
        let mut ctx = DemoContext::new(".").with_seed(Some(7));
        let out = run_demo(&ArrayBasicsDemo, &mut ctx);
        assert!(out.contains("Array from list: [1 2 3 4 5]"));
        assert!(out.contains("Shape: (5,)"));
        assert!(out.contains("Data type of elements: int64"));
        assert!(out.contains("2D array from nested list:\n[[1 2 3]\n [4 5 6]]"));
        assert!(out.contains("Number of dimensions: 2"));
        assert!(out.contains("Range 0..10 step 2: [0 2 4 6 8]"));
        assert!(out.contains("5 points from 0 to 10: [ 0.   2.5  5.   7.5 10. ]"));
        assert!(out.contains("Identity matrix:\n[[1. 0. 0.]\n [0. 1. 0.]\n [0. 0. 1.]]"));
    }

    #[test]
    fn test_seeded_basics_are_reproducible() {
        let mut a = DemoContext::new(".").with_seed(Some(99));
        let mut b = DemoContext::new(".").with_seed(Some(99));
        assert_eq!(
            run_demo(&ArrayBasicsDemo, &mut a),
            run_demo(&ArrayBasicsDemo, &mut b)
        );
    }

    #[test]
    fn test_array_ops() {
        let mut ctx = DemoContext::new(".");
        let out = run_demo(&ArrayOpsDemo, &mut ctx);
        assert!(out.contains("arr1 + arr2: [ 6  8 10 12]"));
        assert!(out.contains("arr1 * 2: [2 4 6 8]"));
        assert!(out.contains("Matrix multiplication (dot product):\n[[19 22]\n [43 50]]"));
        assert!(out.contains("Square root of arr1: [1.         1.41421356 1.73205081 2.        ]"));
        assert!(out.contains("Sum of arr1: 10"));
        assert!(out.contains("Mean of arr1: 2.5"));
    }

    #[test]
    fn test_array_indexing() {
        let mut ctx = DemoContext::new(".");
        let out = run_demo(&ArrayIndexingDemo, &mut ctx);
        assert!(out.contains("First element: 10"));
        assert!(out.contains("Elements from index 1 to 4: [20 30 40 50]"));
        assert!(out.contains("Element at row 0, column 1: 2"));
        assert!(out.contains("Second column:\n[2 5 8]"));
        assert!(out.contains("Elements greater than 50: [60 70]"));
        assert!(out.contains("Elements at specific indices [0, 2, 4]: [10 30 50]"));
    }

    #[test]
    fn test_benchmarks_report() {
        let mut ctx = DemoContext::new(".");
        ctx.bench_size = 1_000;
        ctx.memory_elements = 100;

        let out = run_demo(&PerformanceDemo, &mut ctx);
        assert!(out.contains("Elements: 1000"));
        assert!(out.contains("Array addition took: "));

        let out = run_demo(&MemoryDemo, &mut ctx);
        assert!(out.contains("Size of array for 100 ints: "));
    }
}
