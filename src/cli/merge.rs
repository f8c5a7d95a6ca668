// merge.rs - Merge configuration file with CLI arguments

use crate::cli::args::{DEFAULT_BENCH_SIZE, DEFAULT_MEMORY_ELEMENTS};
use crate::cli::{Args, Config};

impl Args {
    /// Merge with configuration from file
    /// CLI arguments take precedence over config file values
    pub fn merge_with_config(mut self, config: Config) -> Self {
        // Selection
        if self.demo.is_empty() {
            if let Some(demos) = config.demos {
                self.demo = demos;
            }
        }

        // Files
        if self.workdir.is_none() {
            self.workdir = config.workdir;
        }
        if self.transcript.is_none() {
            self.transcript = config.transcript;
        }

        // Benchmarks (only override defaults, not explicit CLI values)
        if self.bench_size == DEFAULT_BENCH_SIZE {
            if let Some(size) = config.bench_size {
                self.bench_size = size;
            }
        }
        if self.memory_elements == DEFAULT_MEMORY_ELEMENTS {
            if let Some(elements) = config.memory_elements {
                self.memory_elements = elements;
            }
        }
        if self.threads.is_none() {
            self.threads = config.threads;
        }
        if self.seed.is_none() {
            self.seed = config.seed;
        }

        // Flags (CLI flags take precedence, config only sets if not explicitly set)
        if !self.keep_files && config.keep_files.unwrap_or(false) {
            self.keep_files = true;
        }
        if !self.compress && config.compress.unwrap_or(false) {
            self.compress = true;
        }
        if !self.no_progress && config.no_progress.unwrap_or(false) {
            self.no_progress = true;
        }
        if !self.verbose && config.verbose.unwrap_or(false) {
            self.verbose = true;
        }

        self
    }

    /// Load configuration and merge with CLI args
    pub fn with_config_file(self, config_path: &str) -> Result<Self, String> {
        let config = Config::from_file(config_path)?;
        Ok(self.merge_with_config(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argh::FromArgs;

    #[test]
    fn test_config_fills_unset_values() {
        let args = Args::from_args(&["dstour"], &[]).unwrap();
        let config = Config {
            demos: Some(vec!["arrays".to_string()]),
            bench_size: Some(5_000),
            seed: Some(3),
            keep_files: Some(true),
            ..Config::new()
        };

        let merged = args.merge_with_config(config);
        assert_eq!(merged.demo, vec!["arrays".to_string()]);
        assert_eq!(merged.bench_size, 5_000);
        assert_eq!(merged.memory_elements, DEFAULT_MEMORY_ELEMENTS);
        assert_eq!(merged.seed, Some(3));
        assert!(merged.keep_files);
    }

    #[test]
    fn test_cli_values_take_precedence() {
        let args = Args::from_args(
            &["dstour"],
            &["--demo", "set", "--bench-size", "10", "--seed", "1"],
        )
        .unwrap();
        let config = Config {
            demos: Some(vec!["all".to_string()]),
            bench_size: Some(5_000),
            seed: Some(3),
            ..Config::new()
        };

        let merged = args.merge_with_config(config);
        assert_eq!(merged.demo, vec!["set".to_string()]);
        assert_eq!(merged.bench_size, 10);
        assert_eq!(merged.seed, Some(1));
    }
}
