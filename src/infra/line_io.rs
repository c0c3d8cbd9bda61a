// ============================================================
// Layer 6 — Line Readers and Writers
// ============================================================
// Concrete LineSource / LineSink implementations.
//
//   LineReader<R>  — wraps any BufRead: a file, stdin, or a
//                    string (handy in tests)
//   FileLineSink   — buffered writer to a file; lines end in '\n'
//
// Both own their underlying handle, so dropping them closes the
// file on every exit path. FileLineSink::finish() flushes
// explicitly so write errors are reported instead of being lost
// in Drop.
//
// Reference: Rust Book §12 (I/O and File Handling)
//            std::io::BufRead / BufWriter documentation

use anyhow::{Context, Result};
use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Cursor, Lines, Write},
    path::{Path, PathBuf},
};

use crate::domain::traits::{LineSink, LineSource};

// ─── LineReader ───────────────────────────────────────────────────────────────
/// Reads lines from any buffered reader.
/// Line terminators ("\n" or "\r\n") are stripped.
pub struct LineReader<R: BufRead> {
    lines: Lines<R>,
    /// Shown in error messages, e.g. the file path or "<stdin>"
    origin: String,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R, origin: impl Into<String>) -> Self {
        Self {
            lines:  reader.lines(),
            origin: origin.into(),
        }
    }
}

impl LineReader<BufReader<File>> {
    /// Open a text file for line-by-line reading.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Cannot open input file '{}'", path.display()))?;
        tracing::debug!("Opened input '{}'", path.display());
        Ok(Self::new(BufReader::new(file), path.display().to_string()))
    }
}

impl LineReader<Cursor<Vec<u8>>> {
    /// Read lines from an in-memory string.
    pub fn from_text(text: &str) -> Self {
        Self::new(Cursor::new(text.as_bytes().to_vec()), "<text>")
    }
}

impl<R: BufRead> LineSource for LineReader<R> {
    fn next_line(&mut self) -> Result<Option<String>> {
        self.lines
            .next()
            .transpose()
            .with_context(|| format!("Cannot read from '{}'", self.origin))
    }
}

// ─── FileLineSink ─────────────────────────────────────────────────────────────
/// Writes lines to a file through a buffer.
pub struct FileLineSink {
    writer: BufWriter<File>,
    path:   PathBuf,
}

impl FileLineSink {
    /// Create (or truncate) the file at `path`.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = File::create(&path)
            .with_context(|| format!("Cannot create output file '{}'", path.display()))?;
        Ok(Self { writer: BufWriter::new(file), path })
    }

    /// Flush buffered lines to disk.
    pub fn finish(mut self) -> Result<()> {
        self.writer
            .flush()
            .with_context(|| format!("Cannot write '{}'", self.path.display()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LineSink for FileLineSink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{line}")
            .with_context(|| format!("Cannot write '{}'", self.path.display()))
    }
}
