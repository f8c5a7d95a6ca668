// args.rs - Command line arguments definition

use argh::FromArgs;

pub const DEFAULT_BENCH_SIZE: usize = 1_000_000;
pub const DEFAULT_MEMORY_ELEMENTS: usize = 10_000;

#[derive(FromArgs, Debug)]
/// dstour - Guided tour of container and numeric array basics
pub struct Args {
    /// demo or group to run; repeatable. Groups: containers, arrays, all (default: all)
    #[argh(option)]
    pub demo: Vec<String>,

    /// list available demos and exit
    #[argh(switch)]
    pub list: bool,

    /// directory for the temporary files of the files demo (default: current directory)
    #[argh(option)]
    pub workdir: Option<String>,

    /// number of elements added in the performance comparison (default: 1000000)
    #[argh(option, default = "DEFAULT_BENCH_SIZE")]
    pub bench_size: usize,

    /// number of elements measured in the memory comparison (default: 10000)
    #[argh(option, default = "DEFAULT_MEMORY_ELEMENTS")]
    pub memory_elements: usize,

    /// seed for the random array constructors (default: random)
    #[argh(option)]
    pub seed: Option<u64>,

    /// number of threads for the parallel addition (default: auto-detect)
    #[argh(option)]
    pub threads: Option<usize>,

    /// keep the files written by the files demo
    #[argh(switch)]
    pub keep_files: bool,

    /// LZ4-compress the binary array file
    #[argh(switch)]
    pub compress: bool,

    /// also write all demo output to this file
    #[argh(option)]
    pub transcript: Option<String>,

    /// hide the benchmark spinner
    #[argh(switch)]
    pub no_progress: bool,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,

    /// enable debug logging
    #[argh(switch, short = 'v')]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::from_args(&["dstour"], args).unwrap()
    }

    #[test]
    fn test_defaults() {
        let args = parse(&[]);
        assert!(args.demo.is_empty());
        assert_eq!(args.bench_size, DEFAULT_BENCH_SIZE);
        assert_eq!(args.memory_elements, DEFAULT_MEMORY_ELEMENTS);
        assert!(args.seed.is_none());
        assert!(!args.keep_files);
    }

    #[test]
    fn test_repeatable_demo_option() {
        let args = parse(&[
            "--demo", "list", "--demo", "arrays", "--seed", "42", "--compress", "-v",
        ]);
        assert_eq!(args.demo, vec!["list".to_string(), "arrays".to_string()]);
        assert_eq!(args.seed, Some(42));
        assert!(args.compress);
        assert!(args.verbose);
    }

    #[test]
    fn test_rejects_bad_numbers() {
        assert!(Args::from_args(&["dstour"], &["--bench-size", "many"]).is_err());
    }
}
