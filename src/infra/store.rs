// ============================================================
// Layer 6 — Document Stores
// ============================================================
// Where finished pages go.
//
//   DirectoryStore — one file per document inside a directory,
//                    e.g. out/index.html, out/apple.html
//   MemoryStore    — documents kept as Vec<String> in a map;
//                    used by tests and `--dry-run`
//
// Document names come straight from glossary terms, so the
// directory store refuses names that would escape the directory.
//
// Reference: Rust Book §9 (Error Handling), §12 (File Handling)

use anyhow::{bail, Context, Result};
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use crate::domain::traits::DocumentStore;
use crate::infra::line_io::FileLineSink;

// ─── DirectoryStore ───────────────────────────────────────────────────────────
pub struct DirectoryStore {
    dir: PathBuf,
}

impl DirectoryStore {
    /// Use an existing directory. With `create_missing`, create it
    /// (and any parents) first, like `mkdir -p`.
    pub fn open(dir: impl Into<PathBuf>, create_missing: bool) -> Result<Self> {
        let dir = dir.into();

        if create_missing {
            fs::create_dir_all(&dir)
                .with_context(|| format!("Cannot create output directory '{}'", dir.display()))?;
        }

        if !dir.is_dir() {
            bail!(
                "Output directory '{}' does not exist (pass --create-dir to create it)",
                dir.display()
            );
        }

        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DocumentStore for DirectoryStore {
    type Sink = FileLineSink;

    fn create(&mut self, name: &str) -> Result<FileLineSink> {
        validate_document_name(name)?;
        FileLineSink::create(self.dir.join(name))
    }

    fn commit(&mut self, name: &str, sink: FileLineSink) -> Result<()> {
        tracing::debug!("Writing '{}'", sink.path().display());
        sink.finish()
            .with_context(|| format!("Cannot finish document '{name}'"))
    }
}

/// Reject names that are not a plain file name.
pub fn validate_document_name(name: &str) -> Result<()> {
    let bad = name.is_empty()
        || name.contains('/')
        || name.contains('\\')
        || name.contains('\0')
        || name == "."
        || name == "..";

    if bad {
        bail!("'{name}' cannot be used as a file name in the output directory");
    }
    Ok(())
}

// ─── MemoryStore ──────────────────────────────────────────────────────────────
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: BTreeMap<String, Vec<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines of a committed document
    pub fn document(&self, name: &str) -> Option<&[String]> {
        self.documents.get(name).map(Vec::as_slice)
    }

    /// A committed document as one string, each line ending in '\n'
    pub fn render(&self, name: &str) -> Option<String> {
        self.document(name)
            .map(|lines| lines.iter().map(|l| format!("{l}\n")).collect())
    }

    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.documents.keys()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl DocumentStore for MemoryStore {
    type Sink = Vec<String>;

    fn create(&mut self, name: &str) -> Result<Vec<String>> {
        validate_document_name(name)?;
        Ok(Vec::new())
    }

    fn commit(&mut self, name: &str, sink: Vec<String>) -> Result<()> {
        self.documents.insert(name.to_string(), sink);
        Ok(())
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::traits::LineSink;

    #[test]
    fn test_missing_directory_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("site");
        assert!(DirectoryStore::open(&missing, false).is_err());
    }

    #[test]
    fn test_create_missing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a").join("b");
        let store = DirectoryStore::open(&nested, true).unwrap();
        assert!(store.dir().is_dir());
    }

    #[test]
    fn test_directory_store_writes_file() {
        let tmp = tempfile::tempdir().unwrap();
        let mut store = DirectoryStore::open(tmp.path(), false).unwrap();

        let mut sink = store.create("term.html").unwrap();
        sink.write_line("<html>").unwrap();
        store.commit("term.html", sink).unwrap();

        let written = fs::read_to_string(tmp.path().join("term.html")).unwrap();
        assert_eq!(written, "<html>\n");
    }

    #[test]
    fn test_unsafe_names_rejected() {
        for name in ["", ".", "..", "a/b.html", "..\\x.html"] {
            assert!(validate_document_name(name).is_err(), "{name:?} should be rejected");
        }
        assert!(validate_document_name("C++.html").is_ok());
    }

    #[test]
    fn test_memory_store_replaces_documents() {
        let mut store = MemoryStore::new();
        for text in ["first", "second"] {
            let mut sink = store.create("a.html").unwrap();
            sink.write_line(text).unwrap();
            store.commit("a.html", sink).unwrap();
        }
        assert_eq!(store.len(), 1);
        assert_eq!(store.render("a.html").as_deref(), Some("second\n"));
    }
}
