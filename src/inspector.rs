// inspector.rs - Binary array file inspector
// Features: header summary, payload integrity check, data preview, JSON output

use std::path::Path;

use argh::FromArgs;
use dstour::array::{read_array_file, AnyArray, ArrayFile};
use dstour::array::format_shape;
use dstour::error::ArrayError;
use serde::Serialize;

// ============================================================================
// CLI ARGUMENTS
// ============================================================================

#[derive(FromArgs)]
/// Inspect binary array files written by dstour
struct Args {
    /// path to the array file (.bin)
    #[argh(option)]
    file: String,

    /// decode the payload and verify its length and checksum
    #[argh(switch)]
    validate: bool,

    /// print the decoded array
    #[argh(switch)]
    show_data: bool,

    /// print the summary as JSON instead of text
    #[argh(switch)]
    json: bool,

    /// quiet mode - minimal output
    #[argh(switch)]
    quiet: bool,
}

// ============================================================================
// SUMMARY
// ============================================================================

#[derive(Debug, Serialize)]
struct Statistics {
    min: f64,
    max: f64,
    mean: f64,
    sum: f64,
}

#[derive(Debug, Serialize)]
struct ArraySummary {
    file: String,
    format_version: u16,
    dtype: String,
    shape: Vec<usize>,
    /// `None` when the header shape overflows
    elements: Option<usize>,
    created: String,
    checksum: String,
    compressed: bool,
    stored_bytes: usize,
    payload_bytes: usize,
    valid: Option<bool>,
    statistics: Option<Statistics>,
}

fn statistics(array: &AnyArray) -> Option<Statistics> {
    let values = array.to_f64_vec();
    if values.is_empty() {
        return None;
    }
    let sum: f64 = values.iter().sum();
    Some(Statistics {
        min: values.iter().copied().fold(f64::INFINITY, f64::min),
        max: values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        mean: sum / values.len() as f64,
        sum,
    })
}

fn summarize(path: &Path, file_data: &ArrayFile, decoded: Option<&Result<AnyArray, ArrayError>>) -> ArraySummary {
    let header = &file_data.header;
    ArraySummary {
        file: path.display().to_string(),
        format_version: file_data.version,
        dtype: header.dtype.to_string(),
        shape: header.shape.clone(),
        elements: header.element_count().ok(),
        created: header.created.clone(),
        checksum: format!("{:08x}", header.checksum),
        compressed: header.compressed,
        stored_bytes: file_data.payload.len(),
        payload_bytes: header.payload_len,
        valid: decoded.map(|result| result.is_ok()),
        statistics: decoded.and_then(|result| result.as_ref().ok()).and_then(statistics),
    }
}

fn print_summary(summary: &ArraySummary) {
    println!("\n=== ARRAY SUMMARY ===");
    println!("File: {}", summary.file);
    println!("Format version: {}", summary.format_version);
    println!("Created: {}", summary.created);
    println!("Data type: {}", summary.dtype);
    println!("Shape: {}", format_shape(&summary.shape));
    match summary.elements {
        Some(count) => println!("Elements: {}", count),
        None => println!("Elements: ❌ shape overflows (corrupt header)"),
    }

    println!("\n=== STORAGE ===");
    println!("Checksum (CRC32): {}", summary.checksum);
    println!("Compressed: {}", if summary.compressed { "yes (lz4)" } else { "no" });
    println!("Payload: {} bytes", summary.payload_bytes);
    println!("Stored: {} bytes", summary.stored_bytes);
    if summary.compressed && summary.payload_bytes > 0 {
        let ratio = summary.stored_bytes as f64 / summary.payload_bytes as f64;
        println!("Space saved: {:.1}%", (1.0 - ratio) * 100.0);
    }

    if let Some(stats) = &summary.statistics {
        println!("\n=== STATISTICS ===");
        println!("Min: {}", stats.min);
        println!("Max: {}", stats.max);
        println!("Mean: {:.4}", stats.mean);
        println!("Sum: {}", stats.sum);
    }
}

fn run(args: &Args) -> Result<bool, String> {
    let path = Path::new(&args.file);
    if !path.exists() {
        return Err(format!("Array file does not exist: {}", path.display()));
    }

    let file_data = read_array_file(path)
        .map_err(|e| format!("Failed to read array file '{}': {}", path.display(), e))?;

    let decoded = (args.validate || args.show_data).then(|| file_data.decode_any());
    let summary = summarize(path, &file_data, decoded.as_ref());

    if args.json {
        let json = serde_json::to_string_pretty(&summary)
            .map_err(|e| format!("Failed to serialize summary: {}", e))?;
        println!("{}", json);
    } else if !args.quiet {
        print_summary(&summary);
    }

    match &decoded {
        Some(Ok(array)) => {
            if args.show_data && !args.json {
                println!("\n=== DATA ===");
                println!("{}", array);
            }
            if args.validate && !args.json {
                println!("✅ Payload valid: length and checksum match");
            }
            Ok(true)
        }
        Some(Err(e)) => {
            if !args.json {
                eprintln!("❌ Payload invalid: {}", e);
            }
            Ok(false)
        }
        None => Ok(true),
    }
}

fn main() {
    let args: Args = argh::from_env();

    if !args.quiet && !args.json {
        println!("🔍 dstour Array Inspector");
        println!("=========================");
    }

    match run(&args) {
        Ok(true) => {
            if !args.quiet && !args.json {
                println!("\n✅ Inspection completed successfully");
            }
        }
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("❌ ERROR: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dstour::array::save_binary;
    use ndarray::array;
    use tempfile::tempdir;

    #[test]
    fn test_summary_of_saved_array() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("my_array.bin");
        save_binary(&path, &array![[10i64, 20, 30], [40, 50, 60]], false).unwrap();

        let file_data = read_array_file(&path).unwrap();
        let decoded = Some(file_data.decode_any());
        let summary = summarize(&path, &file_data, decoded.as_ref());

        assert_eq!(summary.dtype, "int64");
        assert_eq!(summary.shape, vec![2, 3]);
        assert_eq!(summary.elements, Some(6));
        assert_eq!(summary.payload_bytes, 48);
        assert_eq!(summary.valid, Some(true));

        let stats = summary.statistics.unwrap();
        assert_eq!(stats.min, 10.0);
        assert_eq!(stats.max, 60.0);
        assert_eq!(stats.mean, 35.0);
    }

    #[test]
    fn test_oversized_shape_is_reported_invalid() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("oversized.bin");
        save_binary(&path, &array![1i64, 2], false).unwrap();

        let mut file_data = read_array_file(&path).unwrap();
        file_data.header.shape = vec![usize::MAX, 2];
        let decoded = Some(file_data.decode_any());
        let summary = summarize(&path, &file_data, decoded.as_ref());

        assert_eq!(summary.elements, None);
        assert_eq!(summary.valid, Some(false));
        assert!(summary.statistics.is_none());
    }

    #[test]
    fn test_json_summary_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("flags.bin");
        save_binary(&path, &array![true, false], true).unwrap();

        let file_data = read_array_file(&path).unwrap();
        let summary = summarize(&path, &file_data, None);
        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&summary).unwrap()).unwrap();

        assert_eq!(json["dtype"], "bool");
        assert_eq!(json["compressed"], true);
        assert!(json["valid"].is_null());
    }
}
