// config.rs - Configuration file support

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    // Selection
    pub demos: Option<Vec<String>>,

    // Files
    pub workdir: Option<String>,
    pub keep_files: Option<bool>,
    pub compress: Option<bool>,
    pub transcript: Option<String>,

    // Benchmarks
    pub bench_size: Option<usize>,
    pub memory_elements: Option<usize>,
    pub threads: Option<usize>,
    pub seed: Option<u64>,

    // Output
    pub no_progress: Option<bool>,
    pub verbose: Option<bool>,
}

impl Config {
    /// Create a new empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;

        println!("📄 Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Generate a sample configuration file with comments
    pub fn generate_sample() -> String {
        r#"# dstour.toml - Configuration file for dstour
# Command line arguments will override these settings

# =============================================================================
# SELECTION
# =============================================================================

# Demos or groups to run, in any order (they always run in tour order)
# Demos: list, tuple, dict, set, array-basics, array-ops, array-indexing,
#        performance, memory, files
# Groups: containers, arrays, all
demos = ["all"]

# =============================================================================
# FILES
# =============================================================================

# Directory for data.csv, mixed_data.csv, output_data.csv and my_array.bin
workdir = "."

# Keep the demo files instead of removing them at the end
keep_files = false

# LZ4-compress the binary array file
compress = false

# Copy all demo output to a transcript file
# transcript = "tour.txt"

# =============================================================================
# BENCHMARKS
# =============================================================================

# Elements added in the performance comparison
bench_size = 1000000

# Elements measured in the memory comparison
memory_elements = 10000

# Threads for the parallel addition (omit for auto-detection)
# threads = 8

# Seed for the random array constructors (omit for a fresh seed each run)
# seed = 42

# =============================================================================
# OUTPUT
# =============================================================================

# Hide the benchmark spinner
no_progress = false

# Enable debug logging
verbose = false
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_sample_config_parses() {
        let config: Config = toml::from_str(&Config::generate_sample()).unwrap();
        assert_eq!(config.demos, Some(vec!["all".to_string()]));
        assert_eq!(config.bench_size, Some(1_000_000));
        assert_eq!(config.memory_elements, Some(10_000));
        assert_eq!(config.keep_files, Some(false));
        assert!(config.threads.is_none());
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_config_file_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dstour.toml");

        let config = Config {
            demos: Some(vec!["set".to_string(), "files".to_string()]),
            seed: Some(7),
            compress: Some(true),
            ..Config::new()
        };
        fs::write(&path, toml::to_string_pretty(&config).unwrap()).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_config_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "bench_size = \"lots\"").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(err.contains("Failed to parse config file"));
        assert!(err.contains("broken.toml"));
    }
}
