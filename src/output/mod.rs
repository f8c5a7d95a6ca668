// mod.rs - Report writer shared by every demonstration

use std::fs::{create_dir_all, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Ensure parent directory exists before creating file
pub fn ensure_parent_dir(file_path: &Path) -> io::Result<()> {
    match file_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => create_dir_all(parent),
        _ => Ok(()),
    }
}

/// Destination for demonstration output.
///
/// Bytes written through `io::Write` go to stdout (unless silenced), to an
/// optional transcript file and to an optional in-memory capture, so
/// `writeln!(report, ...)` works the same everywhere.
pub struct Report {
    echo: bool,
    transcript: Option<BufWriter<File>>,
    capture: Option<Vec<u8>>,
}

impl Report {
    /// Report that prints to stdout
    pub fn stdout() -> Self {
        Self {
            echo: true,
            transcript: None,
            capture: None,
        }
    }

    /// Silent report that only records what was written
    pub fn captured() -> Self {
        Self {
            echo: false,
            transcript: None,
            capture: Some(Vec::new()),
        }
    }

    /// Also copy everything to `file_path`, preceded by a generated header
    pub fn with_transcript(mut self, file_path: &Path, command_line: &str) -> Result<Self, String> {
        ensure_parent_dir(file_path).map_err(|e| {
            format!(
                "Failed to create parent directory for '{}': {}",
                file_path.display(),
                e
            )
        })?;
        let file = File::create(file_path).map_err(|e| {
            format!(
                "Failed to create transcript file '{}': {}",
                file_path.display(),
                e
            )
        })?;
        let mut writer = BufWriter::new(file);

        writeln!(writer, "# Command: {}", command_line).map_err(|e| format!("Write error: {}", e))?;
        writeln!(
            writer,
            "# Generated: {}",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        )
        .map_err(|e| format!("Write error: {}", e))?;
        writeln!(writer, "# dstour v{}", env!("CARGO_PKG_VERSION"))
            .map_err(|e| format!("Write error: {}", e))?;

        self.transcript = Some(writer);
        Ok(self)
    }

    /// Section banner: a blank line then `=== TITLE ===`
    pub fn section(&mut self, title: &str) -> io::Result<()> {
        writeln!(self)?;
        writeln!(self, "=== {} ===", title.to_uppercase())
    }

    /// Everything captured so far (empty unless built with `captured`)
    pub fn contents(&self) -> String {
        self.capture
            .as_deref()
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
            .unwrap_or_default()
    }

    /// Flush all destinations
    pub fn finish(mut self) -> io::Result<()> {
        self.flush()
    }
}

impl Write for Report {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.echo {
            io::stdout().lock().write_all(buf)?;
        }
        if let Some(writer) = self.transcript.as_mut() {
            writer.write_all(buf)?;
        }
        if let Some(capture) = self.capture.as_mut() {
            capture.extend_from_slice(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.echo {
            io::stdout().flush()?;
        }
        if let Some(writer) = self.transcript.as_mut() {
            writer.flush()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_captured_report() {
        let mut report = Report::captured();
        report.section("list").unwrap();
        writeln!(report, "Length: {}", 5).unwrap();
        assert_eq!(report.contents(), "\n=== LIST ===\nLength: 5\n");
    }

    #[test]
    fn test_transcript_header_and_body() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logs").join("tour.txt");

        let mut report = Report::captured()
            .with_transcript(&path, "dstour --demo set")
            .unwrap();
        writeln!(report, "Set: {{1, 2, 3}}").unwrap();
        report.finish().unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "# Command: dstour --demo set");
        assert!(lines[1].starts_with("# Generated: "));
        assert!(lines[2].starts_with("# dstour v"));
        assert_eq!(lines[3], "Set: {1, 2, 3}");
    }

    #[test]
    fn test_ensure_parent_dir() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b").join("file.csv");
        ensure_parent_dir(&nested).unwrap();
        assert!(dir.path().join("a").join("b").is_dir());

        // Bare file names have an empty parent
        ensure_parent_dir(Path::new("file.csv")).unwrap();
    }
}
