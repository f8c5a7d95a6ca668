// files.rs - Delimited text and binary array I/O demo with scoped cleanup

use super::{Demo, DemoContext, DemoGroup};
use crate::array::{
    format_array, load_binary, load_txt, read_records, save_binary, save_txt, RecordOptions,
};
use crate::error::{ArrayError, ArrayResult, DemoResult};
use crate::output::{ensure_parent_dir, Report};
use ndarray::{array, Array2, Ix2};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const NUMERIC_FILE: &str = "data.csv";
pub const MIXED_FILE: &str = "mixed_data.csv";
pub const TEXT_OUTPUT_FILE: &str = "output_data.csv";
pub const BINARY_OUTPUT_FILE: &str = "my_array.bin";

const NUMERIC_CONTENT: &str = "1,2,3\n4,5,6\n7,8,9\n";
const MIXED_CONTENT: &str = "Name,Age,Score\nAlice,25,88.5\nBob,,92.0\nCharlie,30,\nDavid,22,78.2\n";

/// Tracks files created under a directory and removes them when dropped
#[derive(Debug)]
pub struct TempFiles {
    dir: PathBuf,
    files: Vec<PathBuf>,
    keep: bool,
}

impl TempFiles {
    pub fn new(dir: impl Into<PathBuf>, keep: bool) -> Self {
        Self {
            dir: dir.into(),
            files: Vec::new(),
            keep,
        }
    }

    /// Register `name` for cleanup and return its full path
    pub fn track(&mut self, name: &str) -> PathBuf {
        let path = self.dir.join(name);
        if !self.files.contains(&path) {
            self.files.push(path.clone());
        }
        path
    }

    /// Write `content` to a tracked file
    pub fn create(&mut self, name: &str, content: &str) -> std::io::Result<PathBuf> {
        let path = self.track(name);
        ensure_parent_dir(&path)?;
        fs::write(&path, content)?;
        Ok(path)
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.files
    }

    /// Delete every tracked file now; returns how many were removed
    pub fn cleanup(&mut self) -> usize {
        let mut removed = 0;
        for path in self.files.drain(..) {
            match fs::remove_file(&path) {
                Ok(()) => removed += 1,
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                Err(e) => tracing::warn!(path = %path.display(), error = %e, "failed to remove file"),
            }
        }
        removed
    }
}

impl Drop for TempFiles {
    fn drop(&mut self) {
        if !self.keep {
            self.cleanup();
        }
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Load a binary array file that must hold a 2-D int64 array
pub fn load_matrix(path: &Path) -> ArrayResult<Array2<i64>> {
    load_binary::<i64>(path)?
        .into_dimensionality::<Ix2>()
        .map_err(|e| ArrayError::Corrupt(format!("{}: {}", path.display(), e)))
}

#[derive(Debug, Default)]
pub struct FilesDemo;

impl Demo for FilesDemo {
    fn name(&self) -> &'static str {
        "files"
    }

    fn description(&self) -> &'static str {
        "Delimited text and binary array files, with cleanup of temporary files"
    }

    fn group(&self) -> DemoGroup {
        DemoGroup::Arrays
    }

    fn run(&self, ctx: &mut DemoContext, report: &mut Report) -> DemoResult<()> {
        report.section("reading/writing data from files")?;

        let mut temp = TempFiles::new(&ctx.workdir, ctx.keep_files);
        let numeric_path = temp.create(NUMERIC_FILE, NUMERIC_CONTENT)?;
        let mixed_path = temp.create(MIXED_FILE, MIXED_CONTENT)?;

        // Simple reader: purely numeric files only
        match load_txt(&numeric_path, b',') {
            Ok(data) => writeln!(report, "Data from {}:\n{}\n", NUMERIC_FILE, format_array(&data))?,
            Err(e) => writeln!(report, "Error reading {}: {}", NUMERIC_FILE, e)?,
        }

        // Robust reader: header, missing values and mixed column types
        let options = RecordOptions {
            delimiter: b',',
            skip_header: 1,
            names: Some(vec!["Name".into(), "Age".into(), "Score".into()]),
            ..RecordOptions::default()
        };
        match read_records(&mixed_path, &options) {
            Ok(table) => {
                writeln!(report, "Data from {}:\n{}", MIXED_FILE, table)?;
                match table.column("Score") {
                    Ok(scores) => writeln!(report, "Scores: {}\n", scores)?,
                    Err(e) => writeln!(report, "Error reading {}: {}", MIXED_FILE, e)?,
                }
            }
            Err(e) => writeln!(report, "Error reading {}: {}", MIXED_FILE, e)?,
        }

        // The simple reader rejects the mixed file
        if let Err(e) = load_txt(&mixed_path, b',') {
            writeln!(report, "Simple reader on {}: {}", MIXED_FILE, e)?;
        }

        let my_array = array![[10i64, 20, 30], [40, 50, 60]];

        let text_path = temp.track(TEXT_OUTPUT_FILE);
        save_txt(&text_path, &my_array, "%d", ",")?;
        writeln!(report, "Array saved to '{}'", file_label(&text_path))?;

        let binary_path = temp.track(BINARY_OUTPUT_FILE);
        let header = save_binary(&binary_path, &my_array, ctx.compress)?;
        writeln!(
            report,
            "Array saved to '{}' ({} {}, {} bytes{})",
            file_label(&binary_path),
            header.dtype,
            crate::array::format_shape(&header.shape),
            header.payload_len,
            if header.compressed { ", lz4" } else { "" }
        )?;

        let restored = load_matrix(&binary_path)?;
        let round_trip = restored == my_array;
        writeln!(
            report,
            "Binary round trip identical: {}",
            if round_trip { "True" } else { "False" }
        )?;

        if ctx.keep_files {
            writeln!(report, "\nKept {} files in {}", temp.paths().len(), ctx.workdir.display())?;
        } else {
            let removed = temp.cleanup();
            writeln!(report, "\nDummy files removed ({}).", removed)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_files_demo_output_and_cleanup() {
        let dir = tempdir().unwrap();
        let mut ctx = DemoContext::new(dir.path());
        let mut report = Report::captured();

        FilesDemo.run(&mut ctx, &mut report).unwrap();
        let out = report.contents();

        assert!(out.contains("Data from data.csv:\n[[1. 2. 3.]\n [4. 5. 6.]\n [7. 8. 9.]]"));
        assert!(out.contains("Data from mixed_data.csv:\n[('Alice', 25, 88.5)"));
        assert!(out.contains("Scores: [88.5, 92.0, --, 78.2]"));
        assert!(out.contains("Simple reader on mixed_data.csv: "));
        assert!(out.contains("Array saved to 'output_data.csv'"));
        assert!(out.contains("Array saved to 'my_array.bin' (int64 (2, 3), 48 bytes)"));
        assert!(out.contains("Binary round trip identical: True"));
        assert!(out.contains("Dummy files removed (4)."));

        for name in [NUMERIC_FILE, MIXED_FILE, TEXT_OUTPUT_FILE, BINARY_OUTPUT_FILE] {
            assert!(!dir.path().join(name).exists(), "{name} should be removed");
        }
    }

    #[test]
    fn test_keep_files() {
        let dir = tempdir().unwrap();
        let mut ctx = DemoContext::new(dir.path());
        ctx.keep_files = true;
        ctx.compress = true;
        let mut report = Report::captured();

        FilesDemo.run(&mut ctx, &mut report).unwrap();
        assert!(report.contents().contains(", lz4)"));

        let written = fs::read_to_string(dir.path().join(TEXT_OUTPUT_FILE)).unwrap();
        assert_eq!(written, "10,20,30\n40,50,60\n");
        assert!(dir.path().join(BINARY_OUTPUT_FILE).exists());
    }

    #[test]
    fn test_load_matrix_rejects_wrong_rank() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("vector.bin");
        save_binary(&path, &array![1i64, 2, 3], false).unwrap();

        let err = load_matrix(&path).unwrap_err();
        assert!(matches!(err, ArrayError::Corrupt(_)), "unexpected error: {err}");
    }

    #[test]
    fn test_temp_files_removed_on_drop() {
        let dir = tempdir().unwrap();
        let path = {
            let mut temp = TempFiles::new(dir.path(), false);
            let path = temp.create("scratch.csv", "1,2\n").unwrap();
            assert!(path.exists());
            path
        };
        assert!(!path.exists());
    }

    #[test]
    fn test_cleanup_ignores_missing_files() {
        let dir = tempdir().unwrap();
        let mut temp = TempFiles::new(dir.path(), false);
        temp.track("never_written.bin");
        temp.create("written.csv", "x\n").unwrap();
        assert_eq!(temp.cleanup(), 1);
        assert!(temp.paths().is_empty());
    }
}
