// validation.rs - Input validation utilities

use crate::cli::args::Args;
use crate::demos::DemoRegistry;
use std::path::PathBuf;

/// Upper bound on benchmark sizes; the boxed variant needs ~48 bytes per element
pub const MAX_ELEMENTS: usize = 100_000_000;

#[derive(Debug)]
pub struct ValidationResult {
    /// Demo names to run, expanded from groups and in tour order
    pub demos: Vec<String>,
    pub workdir: PathBuf,
    pub transcript: Option<PathBuf>,
}

/// Validate all command line arguments
pub fn validate_args(args: &Args) -> Result<ValidationResult, String> {
    // Validate demo selection
    let registry = DemoRegistry::new();
    for name in &args.demo {
        if !registry.is_selectable(name.trim()) {
            return Err(format!(
                "Unknown demo '{}'. Available: {}, {}",
                name,
                registry.get_demo_names().join(", "),
                DemoRegistry::group_names().join(", ")
            ));
        }
    }
    let demos = registry
        .resolve(args.demo.as_slice())
        .map_err(|e| e.to_string())?
        .iter()
        .map(|demo| demo.name().to_string())
        .collect();

    // Validate sizes
    if args.bench_size == 0 || args.bench_size > MAX_ELEMENTS {
        return Err(format!(
            "Benchmark size must be between 1 and {}, got {}",
            MAX_ELEMENTS, args.bench_size
        ));
    }
    if args.memory_elements == 0 || args.memory_elements > MAX_ELEMENTS {
        return Err(format!(
            "Memory element count must be between 1 and {}, got {}",
            MAX_ELEMENTS, args.memory_elements
        ));
    }
    if args.threads == Some(0) {
        return Err("Thread count must be at least 1".to_string());
    }

    // Validate working directory
    let workdir = PathBuf::from(args.workdir.as_deref().unwrap_or("."));
    if !workdir.is_dir() {
        return Err(format!(
            "Working directory '{}' does not exist or is not a directory",
            workdir.display()
        ));
    }

    let transcript = args.transcript.as_ref().map(PathBuf::from);
    if let Some(path) = &transcript {
        if path.is_dir() {
            return Err(format!(
                "Transcript path '{}' is a directory",
                path.display()
            ));
        }
    }

    Ok(ValidationResult {
        demos,
        workdir,
        transcript,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use argh::FromArgs;
    use tempfile::tempdir;

    fn parse(args: &[&str]) -> Args {
        Args::from_args(&["dstour"], args).unwrap()
    }

    #[test]
    fn test_valid_selection_expands_groups() {
        let dir = tempdir().unwrap();
        let workdir = dir.path().to_string_lossy().into_owned();
        let args = parse(&["--demo", "containers", "--demo", "files", "--workdir", &workdir]);

        let result = validate_args(&args).unwrap();
        assert_eq!(result.demos, vec!["list", "tuple", "dict", "set", "files"]);
        assert_eq!(result.workdir, dir.path());
        assert!(result.transcript.is_none());
    }

    #[test]
    fn test_default_selection_is_everything() {
        let result = validate_args(&parse(&[])).unwrap();
        assert_eq!(result.demos.len(), 10);
    }

    #[test]
    fn test_rejects_unknown_demo() {
        let err = validate_args(&parse(&["--demo", "numpy"])).unwrap_err();
        assert!(err.contains("Unknown demo 'numpy'"));
        assert!(err.contains("array-basics"));
    }

    #[test]
    fn test_rejects_bad_sizes_and_paths() {
        assert!(validate_args(&parse(&["--bench-size", "0"])).is_err());
        assert!(validate_args(&parse(&["--memory-elements", "0"])).is_err());
        assert!(validate_args(&parse(&["--threads", "0"])).is_err());
        assert!(validate_args(&parse(&["--workdir", "/definitely/not/here"])).is_err());

        let dir = tempdir().unwrap();
        let transcript = dir.path().to_string_lossy().into_owned();
        assert!(validate_args(&parse(&["--transcript", &transcript])).is_err());
    }
}
