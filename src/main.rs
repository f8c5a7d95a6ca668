// main.rs - CLI entry point

use std::time::Instant;

use dstour::cli::Config;
use dstour::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr; RUST_LOG wins unless --verbose is given
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("dstour=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A subscriber may already be installed when embedded; keep the existing one
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn print_demo_list(registry: &DemoRegistry) {
    println!("📋 Available demos:");
    for (name, description) in registry.list_demos() {
        println!("  - {}: {}", name, description);
    }
    println!("📋 Groups: {}", DemoRegistry::group_names().join(", "));
}

fn run_main() -> Result<(), String> {
    let mut args: Args = argh::from_env();
    let command_line = std::env::args().collect::<Vec<String>>().join(" ");

    // Handle generate config first
    if args.generate_config {
        let sample_config = Config::generate_sample();
        println!("{}", sample_config);
        println!("\n💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(());
    }

    // Load configuration file if specified
    if let Some(config_path) = args.config.clone() {
        args = args.with_config_file(&config_path)?;
    }

    init_logging(args.verbose);
    tracing::debug!(?args, "arguments after config merge");

    let registry = DemoRegistry::new();
    if args.list {
        print_demo_list(&registry);
        return Ok(());
    }

    let validation = validate_args(&args)?;

    println!("🚀 {}", dstour::get_info());

    // Configure thread pool
    if let Some(n) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .map_err(|e| format!("Failed to configure thread pool: {}", e))?;
        println!("🧵 Threads: {}", n);
    } else {
        println!("🧵 Threads: {} (auto-detected)", rayon::current_num_threads());
    }
    if let Some(seed) = args.seed {
        println!("🎲 Seed: {}", seed);
    }
    println!("📂 Working directory: {}", validation.workdir.display());

    let mut ctx = DemoContext::new(&validation.workdir).with_seed(args.seed);
    ctx.bench_size = args.bench_size;
    ctx.memory_elements = args.memory_elements;
    ctx.keep_files = args.keep_files;
    ctx.compress = args.compress;
    ctx.progress = !args.no_progress;

    let mut report = Report::stdout();
    if let Some(path) = &validation.transcript {
        report = report.with_transcript(path, &command_line)?;
    }

    let start = Instant::now();
    for name in &validation.demos {
        let demo = registry
            .get_demo(name)
            .ok_or_else(|| format!("Demo '{}' is not registered", name))?;

        let demo_start = Instant::now();
        demo.run(&mut ctx, &mut report)
            .map_err(|e| format!("Demo '{}' failed: {}", name, e))?;
        tracing::debug!(
            demo = %name,
            elapsed_ms = demo_start.elapsed().as_millis() as u64,
            "demo finished"
        );
    }

    report
        .finish()
        .map_err(|e| format!("Failed to flush output: {}", e))?;

    println!(
        "\n✅ Completed {} demos in {:.2}s",
        validation.demos.len(),
        start.elapsed().as_secs_f64()
    );
    if let Some(path) = &validation.transcript {
        println!("📄 Transcript written to: {}", path.display());
    }
    Ok(())
}
