// mod.rs - Demonstrations module root

pub mod arrays;
pub mod containers;
pub mod files;
pub mod registry;

// Re-export main types for convenience
pub use arrays::{ArrayBasicsDemo, ArrayIndexingDemo, ArrayOpsDemo, MemoryDemo, PerformanceDemo};
pub use containers::{DictDemo, ListDemo, SetDemo, TupleDemo};
pub use files::{FilesDemo, TempFiles};
pub use registry::DemoRegistry;

use crate::error::DemoResult;
use crate::output::Report;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt::{self, Debug, Display};
use std::path::PathBuf;

/// Which half of the tour a demonstration belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DemoGroup {
    Containers,
    Arrays,
}

impl DemoGroup {
    pub fn name(&self) -> &'static str {
        match self {
            DemoGroup::Containers => "containers",
            DemoGroup::Arrays => "arrays",
        }
    }
}

impl Display for DemoGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Settings and shared resources handed to every demonstration
pub struct DemoContext {
    /// Directory where the file demo creates its temporary files
    pub workdir: PathBuf,
    pub bench_size: usize,
    pub memory_elements: usize,
    pub seed: Option<u64>,
    pub keep_files: bool,
    pub compress: bool,
    /// Show a spinner while the benchmark runs
    pub progress: bool,
    rng: StdRng,
}

impl DemoContext {
    pub const DEFAULT_BENCH_SIZE: usize = 1_000_000;
    pub const DEFAULT_MEMORY_ELEMENTS: usize = 10_000;

    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
            bench_size: Self::DEFAULT_BENCH_SIZE,
            memory_elements: Self::DEFAULT_MEMORY_ELEMENTS,
            seed: None,
            keep_files: false,
            compress: false,
            progress: false,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Fix the random generator so random constructors are reproducible
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        if let Some(seed) = seed {
            self.rng = StdRng::seed_from_u64(seed);
        }
        self
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

impl Debug for DemoContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DemoContext")
            .field("workdir", &self.workdir)
            .field("bench_size", &self.bench_size)
            .field("memory_elements", &self.memory_elements)
            .field("seed", &self.seed)
            .field("keep_files", &self.keep_files)
            .field("compress", &self.compress)
            .finish()
    }
}

/// One named, independently runnable demonstration
pub trait Demo: Send + Sync + Debug {
    /// Registry key, e.g. `list` or `array-ops`
    fn name(&self) -> &'static str;

    /// One-line summary shown by `--list`
    fn description(&self) -> &'static str;

    fn group(&self) -> DemoGroup;

    /// Print the demonstration through `report`
    fn run(&self, ctx: &mut DemoContext, report: &mut Report) -> DemoResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_seeded_context_is_reproducible() {
        let mut a = DemoContext::new(".").with_seed(Some(42));
        let mut b = DemoContext::new(".").with_seed(Some(42));
        let xs: Vec<u32> = (0..5).map(|_| a.rng().random_range(0..100)).collect();
        let ys: Vec<u32> = (0..5).map(|_| b.rng().random_range(0..100)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_context_defaults() {
        let ctx = DemoContext::new("/tmp/tour");
        assert_eq!(ctx.bench_size, DemoContext::DEFAULT_BENCH_SIZE);
        assert_eq!(ctx.memory_elements, 10_000);
        assert!(!ctx.keep_files);
        assert_eq!(DemoGroup::Arrays.to_string(), "arrays");
    }
}
