// ============================================================
// Layer 3 — Core Traits (I/O Abstractions)
// ============================================================
// The core never touches files directly. It reads input through
// a LineSource and writes every page through a LineSink handed
// out by a DocumentStore.
//
// Implementations (Layer 6 — infra):
//   - LineReader     → LineSource over any BufRead (file, stdin, string)
//   - FileLineSink   → LineSink over a buffered file
//   - DirectoryStore → DocumentStore writing into a directory
//   - MemoryStore    → DocumentStore kept in memory (tests, dry runs)
//   - Vec<String>    → LineSink collecting lines in memory
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

// ─── LineSource ───────────────────────────────────────────────────────────────
/// A sequence of text lines, without their line terminators.
pub trait LineSource {
    /// Return the next line, or None once the source is exhausted.
    fn next_line(&mut self) -> Result<Option<String>>;

    /// Drain the remaining lines into a Vec.
    fn read_all(&mut self) -> Result<Vec<String>> {
        let mut lines = Vec::new();
        while let Some(line) = self.next_line()? {
            lines.push(line);
        }
        Ok(lines)
    }
}

// ─── LineSink ─────────────────────────────────────────────────────────────────
/// Somewhere to write text one line at a time.
pub trait LineSink {
    /// Write `line` followed by a line terminator.
    fn write_line(&mut self, line: &str) -> Result<()>;
}

impl LineSink for Vec<String> {
    fn write_line(&mut self, line: &str) -> Result<()> {
        self.push(line.to_string());
        Ok(())
    }
}

// ─── DocumentStore ────────────────────────────────────────────────────────────
/// Hands out one LineSink per named output document.
///
/// A document is written in three steps:
///   let mut sink = store.create("apple.html")?;
///   sink.write_line("...")?;
///   store.commit("apple.html", sink)?;
///
/// Creating a document that already exists replaces it.
pub trait DocumentStore {
    type Sink: LineSink;

    /// Open a fresh sink for the named document.
    fn create(&mut self, name: &str) -> Result<Self::Sink>;

    /// Finish the document, surfacing any deferred write errors.
    fn commit(&mut self, name: &str, sink: Self::Sink) -> Result<()>;
}
