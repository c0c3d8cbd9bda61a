// ============================================================
// Layer 2 — BuildUseCase
// ============================================================
// Orchestrates a full glossary build in order:
//
//   Step 1: Load terms and definitions   (Layer 4 - data)
//   Step 2: Sort terms alphabetically    (Layer 3 - domain)
//   Step 3: Link definitions             (Layer 4 - data)
//   Step 4: Write one page per term      (Layer 5 - html)
//   Step 5: Write the index page         (Layer 5 - html)
//
// Each step finishes completely before the next begins: linking
// needs every definition loaded, and pages need every definition
// linked.
//
// build_glossary() runs the steps against any LineSource and
// DocumentStore; BuildUseCase wires it to real files.
//
// Reference: Rust Book §10 (Generics), §13 (Iterators)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::data::{
    linker::{link_definitions, LinkPolicy},
    loader::load_terms_detailed,
};
use crate::domain::glossary::{page_file_name, sort_terms};
use crate::domain::traits::{DocumentStore, LineSource};
use crate::html::{index::emit_index, page::emit_term_page, INDEX_FILE};
use crate::infra::{
    line_io::LineReader,
    store::{validate_document_name, DirectoryStore, MemoryStore},
};

// ─── Build Configuration ──────────────────────────────────────────────────────
// Everything a build needs. Serialisable so it can be saved to
// and loaded from a JSON file (see infra::config_file).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Text file of term/definition entries
    pub input:             String,
    /// Directory receiving index.html and the term pages
    pub output_dir:        String,
    /// Create output_dir if it does not exist
    pub create_output_dir: bool,
    /// Link a term that appears in its own definition
    pub self_links:        bool,
    /// Build everything in memory and write nothing
    pub dry_run:           bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            input:             "data/terms.txt".to_string(),
            output_dir:        "glossary".to_string(),
            create_output_dir: false,
            self_links:        true,
            dry_run:           false,
        }
    }
}

impl From<&BuildConfig> for LinkPolicy {
    fn from(cfg: &BuildConfig) -> Self {
        LinkPolicy {
            self_links: cfg.self_links,
            ..LinkPolicy::default()
        }
    }
}

// ─── Build Summary ────────────────────────────────────────────────────────────
/// Counts reported after a build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildSummary {
    /// Term/definition entries read, duplicates included
    pub entries:    usize,
    /// Distinct terms
    pub terms:      usize,
    /// Term pages written (index excluded)
    pub pages:      usize,
    /// Links inserted into definitions
    pub links:      usize,
    /// Entries with no definition line
    pub truncated:  usize,
    /// Entries repeating an earlier term
    pub duplicates: usize,
}

// ─── BuildUseCase ─────────────────────────────────────────────────────────────
pub struct BuildUseCase {
    config: BuildConfig,
}

impl BuildUseCase {
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Read the input file and write the glossary.
    pub fn execute(&self) -> Result<BuildSummary> {
        let cfg    = &self.config;
        let policy = LinkPolicy::from(cfg);

        tracing::info!("Reading glossary entries from '{}'", cfg.input);
        let mut reader = LineReader::open(&cfg.input)?;

        if cfg.dry_run {
            let mut store = MemoryStore::new();
            let summary = build_glossary(&mut reader, &mut store, &policy)?;
            for name in store.names() {
                tracing::info!("Would write '{}/{}'", cfg.output_dir, name);
            }
            return Ok(summary);
        }

        let mut store = DirectoryStore::open(&cfg.output_dir, cfg.create_output_dir)?;
        let summary = build_glossary(&mut reader, &mut store, &policy)?;
        tracing::info!(
            "Wrote {} pages and {} to '{}'",
            summary.pages,
            INDEX_FILE,
            store.dir().display()
        );
        Ok(summary)
    }
}

/// Run the whole pipeline: load, sort, link, write pages, write index.
pub fn build_glossary<S, D>(source: &mut S, store: &mut D, policy: &LinkPolicy) -> Result<BuildSummary>
where
    S: LineSource + ?Sized,
    D: DocumentStore,
{
    // ── Step 1: Load ──────────────────────────────────────────────────────────
    let loaded = load_terms_detailed(source)?;
    let mut mapping = loaded.mapping;
    let mut terms   = loaded.terms;
    tracing::info!("Loaded {} entries ({} distinct terms)", terms.len(), mapping.len());

    // ── Step 2: Sort ──────────────────────────────────────────────────────────
    sort_terms(&mut terms);

    // ── Step 3: Link ──────────────────────────────────────────────────────────
    let stats = link_definitions(&mut mapping, &terms, policy);
    tracing::info!("Inserted {} links across {} definitions", stats.links, stats.definitions);

    // ── Step 4: Term pages ────────────────────────────────────────────────────
    // Duplicates would only rewrite an identical page, so skip them.
    // terms is sorted, so dedup() removes every repeat.
    let mut distinct = terms.clone();
    distinct.dedup();

    let mut pages = 0usize;
    for term in &distinct {
        let Some(definition) = mapping.get(term) else {
            continue;
        };

        // "." or ".." would pass as "..html" once the extension is added
        validate_document_name(term)
            .with_context(|| format!("Term '{term}' cannot be used as a page name"))?;

        let name = page_file_name(term);
        if name == INDEX_FILE {
            tracing::warn!("Term '{}' shares its page with the index; the index will replace it", term);
        }

        let mut sink = store.create(&name)?;
        emit_term_page(term, definition, &mut sink)?;
        store.commit(&name, sink)?;
        pages += 1;
    }

    // ── Step 5: Index ─────────────────────────────────────────────────────────
    let mut sink = store.create(INDEX_FILE)?;
    emit_index(&terms, &mut sink)?;
    store.commit(INDEX_FILE, sink)?;

    Ok(BuildSummary {
        entries:    terms.len(),
        terms:      mapping.len(),
        pages,
        links:      stats.links,
        truncated:  loaded.truncated,
        duplicates: loaded.duplicates,
    })
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const TERMS: &str = "meaning\nsomething that one wishes to convey, especially by language\n\nterm\na word whose definition is in a glossary\n\nglossary\na list of difficult or specialized words, with their definitions\n\ndefinition\na sentence that gives the meaning of a word or phrase\n";

    fn build(text: &str, policy: &LinkPolicy) -> (MemoryStore, BuildSummary) {
        let mut reader = LineReader::from_text(text);
        let mut store  = MemoryStore::new();
        let summary = build_glossary(&mut reader, &mut store, policy).unwrap();
        (store, summary)
    }

    #[test]
    fn test_index_is_sorted() {
        let (store, summary) = build(TERMS, &LinkPolicy::default());
        let index = store.document(INDEX_FILE).unwrap();
        let items: Vec<&String> = index.iter().filter(|l| l.starts_with("<li>")).collect();

        assert_eq!(
            items,
            vec![
                "<li><a href=\"definition.html\">definition</a></li>",
                "<li><a href=\"glossary.html\">glossary</a></li>",
                "<li><a href=\"meaning.html\">meaning</a></li>",
                "<li><a href=\"term.html\">term</a></li>",
            ]
        );
        assert_eq!(summary.entries, 4);
        assert_eq!(summary.pages, 4);
    }

    #[test]
    fn test_pages_are_cross_linked() {
        let (store, summary) = build(TERMS, &LinkPolicy::default());
        let page = store.render("term.html").unwrap();

        assert!(page.contains(
            "<blockquote>a word whose <a href=\"definition.html\">definition</a> is in a <a href=\"glossary.html\">glossary</a></blockquote>"
        ));
        // definition → meaning, term → definition + glossary
        assert_eq!(summary.links, 3);
    }

    #[test]
    fn test_empty_input_writes_only_index() {
        let (store, summary) = build("", &LinkPolicy::default());
        assert_eq!(store.len(), 1);
        assert_eq!(summary, BuildSummary::default());

        let index = store.document(INDEX_FILE).unwrap();
        assert!(!index.iter().any(|l| l.contains("<li>")));
    }

    #[test]
    fn test_duplicates_write_one_page() {
        let (store, summary) = build("a\none\n\nb\ntwo\n\na\nthree\n", &LinkPolicy::default());
        assert_eq!(summary.entries, 3);
        assert_eq!(summary.pages, 2);
        assert_eq!(summary.duplicates, 1);
        // index.html, a.html, b.html
        assert_eq!(store.len(), 3);
        assert!(store.render("a.html").unwrap().contains("<blockquote>three</blockquote>"));
    }

    #[test]
    fn test_term_with_slash_is_rejected() {
        let mut reader = LineReader::from_text("a/b\nbad name\n");
        let mut store  = MemoryStore::new();
        assert!(build_glossary(&mut reader, &mut store, &LinkPolicy::default()).is_err());
    }

    #[test]
    fn test_dot_terms_are_rejected() {
        for text in [".\ncurrent directory\n", "..\nparent directory\n"] {
            let mut reader = LineReader::from_text(text);
            let mut store  = MemoryStore::new();
            let result = build_glossary(&mut reader, &mut store, &LinkPolicy::default());
            assert!(result.is_err(), "{text:?} should be rejected");
            assert!(store.is_empty());
        }
    }

    #[test]
    fn test_continuation_line_gets_no_page() {
        let (store, summary) = build(
            "meaning\nsomething that one wishes to convey,\n especially by language\n",
            &LinkPolicy::default(),
        );
        assert_eq!(summary.pages, 1);
        // index.html, meaning.html
        assert_eq!(store.len(), 2);
        assert!(store.render("meaning.html").unwrap().contains(
            "<blockquote>something that one wishes to convey, especially by language</blockquote>"
        ));
    }

    #[test]
    fn test_execute_writes_files() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("terms.txt");
        fs::write(&input, TERMS).unwrap();
        let out = tmp.path().join("site");

        let use_case = BuildUseCase::new(BuildConfig {
            input:             input.display().to_string(),
            output_dir:        out.display().to_string(),
            create_output_dir: true,
            ..BuildConfig::default()
        });
        let summary = use_case.execute().unwrap();

        assert_eq!(summary.pages, 4);
        for name in ["index.html", "meaning.html", "term.html", "glossary.html", "definition.html"] {
            assert!(out.join(name).is_file(), "{name} missing");
        }
        let index = fs::read_to_string(out.join("index.html")).unwrap();
        assert!(index.starts_with("<html>\n<head>\n<title>Glossary</title>\n"));
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let input = tmp.path().join("terms.txt");
        fs::write(&input, TERMS).unwrap();
        let out = tmp.path().join("site");

        let use_case = BuildUseCase::new(BuildConfig {
            input:      input.display().to_string(),
            output_dir: out.display().to_string(),
            dry_run:    true,
            ..BuildConfig::default()
        });
        let summary = use_case.execute().unwrap();

        assert_eq!(summary.pages, 4);
        assert!(!out.exists());
    }

    #[test]
    fn test_missing_input_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let use_case = BuildUseCase::new(BuildConfig {
            input:      tmp.path().join("missing.txt").display().to_string(),
            output_dir: tmp.path().display().to_string(),
            ..BuildConfig::default()
        });
        assert!(use_case.execute().is_err());
    }
}
