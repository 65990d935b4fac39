//! Output module
//!
//! Formats the matching words for the terminal and optionally writes them to
//! a file, one per line.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Buffer size for file writing
const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Join matches into the single result line
pub fn format_matches(words: &[String]) -> String {
    words.join(", ")
}

/// Write the `Possible words:` line
pub fn write_matches<W: Write>(writer: &mut W, words: &[String]) -> std::io::Result<()> {
    writeln!(writer, "Possible words: {}", format_matches(words))
}

/// Output file writer with buffering
pub struct OutputWriter {
    writer: BufWriter<File>,
    path: PathBuf,
    lines_written: u64,
}

impl OutputWriter {
    /// Create a new output writer, truncating any existing file
    pub fn new(path: PathBuf) -> anyhow::Result<Self> {
        Self::with_capacity(path, DEFAULT_BUFFER_SIZE)
    }

    pub fn with_capacity(path: PathBuf, buffer_size: usize) -> anyhow::Result<Self> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)
            .map_err(|e| anyhow::anyhow!("Cannot open output file {:?}: {}", path, e))?;

        Ok(Self {
            writer: BufWriter::with_capacity(buffer_size, file),
            path,
            lines_written: 0,
        })
    }

    pub fn write_line(&mut self, line: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", line)?;
        self.lines_written += 1;
        Ok(())
    }

    pub fn write_all(&mut self, words: &[String]) -> anyhow::Result<()> {
        for word in words {
            self.write_line(word)?;
        }
        self.flush()
    }

    pub fn flush(&mut self) -> anyhow::Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }
}

impl Drop for OutputWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_format_matches() {
        assert_eq!(format_matches(&words(&["crane", "crank"])), "crane, crank");
        assert_eq!(format_matches(&words(&["crane"])), "crane");
        assert_eq!(format_matches(&[]), "");
    }

    #[test]
    fn test_write_matches_line() {
        let mut out = Vec::new();
        write_matches(&mut out, &words(&["nasty", "santa"])).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Possible words: nasty, santa\n");
    }

    #[test]
    fn test_output_writer() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("matches.txt");

        let mut writer = OutputWriter::new(path.clone()).unwrap();
        writer.write_all(&words(&["crane", "crank"])).unwrap();

        assert_eq!(writer.lines_written(), 2);
        assert_eq!(writer.path(), path.as_path());

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "crane\ncrank\n");
    }
}
