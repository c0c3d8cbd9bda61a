// ============================================================
// Layer 3 — Glossary Domain Types
// ============================================================
// The data the whole pipeline passes around:
//
//   Term              → a non-empty headword, e.g. "meaning"
//   Definition        → ordered fragments of plain text and links
//   DefinitionMapping → Term → Definition, unique keys
//   TermSequence      → terms in input order, later sorted
//
// A Definition never stores HTML. Linking turns a plain word
// into Fragment::Link(term); the markup only appears when the
// html layer calls Definition::to_html(). Because of that a
// linked definition can be linked again without its anchors
// being split or wrapped twice.
//
// Reference: Rust Book §6 (Enums), §8 (Collections)

use std::collections::BTreeMap;

/// A glossary headword. Non-empty, used as a unique key.
pub type Term = String;

/// Terms in the order they are processed (input order, then sorted).
/// Duplicates are allowed.
pub type TermSequence = Vec<Term>;

/// One piece of a definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Text rendered as-is
    Text(String),
    /// A reference to another term's page; the term is also the anchor text
    Link(Term),
}

/// The explanatory text for a term.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Definition {
    fragments: Vec<Fragment>,
}

impl Definition {
    /// A definition made of a single plain-text fragment.
    ///
    /// Example:
    ///   let d = Definition::plain("a word whose definition is in a glossary");
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            return Self::default();
        }
        Self { fragments: vec![Fragment::Text(text)] }
    }

    /// Build a definition from fragments, merging adjacent text
    /// and dropping empty text so equal content compares equal.
    pub fn from_fragments(fragments: impl IntoIterator<Item = Fragment>) -> Self {
        let mut merged: Vec<Fragment> = Vec::new();
        for fragment in fragments {
            match fragment {
                Fragment::Text(t) if t.is_empty() => {}
                Fragment::Text(t) => match merged.last_mut() {
                    Some(Fragment::Text(prev)) => prev.push_str(&t),
                    _ => merged.push(Fragment::Text(t)),
                },
                link => merged.push(link),
            }
        }
        Self { fragments: merged }
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Number of link fragments
    pub fn link_count(&self) -> usize {
        self.fragments
            .iter()
            .filter(|f| matches!(f, Fragment::Link(_)))
            .count()
    }

    /// The text a reader sees, with links reduced to their anchor text.
    pub fn plain_text(&self) -> String {
        self.fragments
            .iter()
            .map(|f| match f {
                Fragment::Text(t) => t.as_str(),
                Fragment::Link(term) => term.as_str(),
            })
            .collect()
    }

    /// Render as HTML. Links become `<a href="TERM.html">TERM</a>`.
    pub fn to_html(&self) -> String {
        self.fragments
            .iter()
            .map(|f| match f {
                Fragment::Text(t) => t.clone(),
                Fragment::Link(term) => anchor(term),
            })
            .collect()
    }
}

/// File name of a term's page
pub fn page_file_name(term: &str) -> String {
    format!("{term}.html")
}

/// Anchor pointing at a term's page, with the term as anchor text
pub fn anchor(term: &str) -> String {
    format!("<a href=\"{}\">{}</a>", page_file_name(term), term)
}

/// Term → Definition with unique keys.
///
/// Backed by a BTreeMap so iteration order is stable between runs;
/// callers must still use the TermSequence for output ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefinitionMapping {
    entries: BTreeMap<Term, Definition>,
}

impl DefinitionMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace. Returns the previous definition if the
    /// term was already present.
    pub fn insert(&mut self, term: impl Into<Term>, definition: Definition) -> Option<Definition> {
        self.entries.insert(term.into(), definition)
    }

    /// Replace the definition of an existing term.
    /// Returns false (and changes nothing) if the term is unknown.
    pub fn replace(&mut self, term: &str, definition: Definition) -> bool {
        match self.entries.get_mut(term) {
            Some(slot) => {
                *slot = definition;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, term: &str) -> Option<&Definition> {
        self.entries.get(term)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.entries.contains_key(term)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn terms(&self) -> impl Iterator<Item = &Term> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Term, &Definition)> {
        self.entries.iter()
    }
}

/// Sort terms alphabetically with a case-sensitive ordinal comparison.
///
/// `str` ordering compares UTF-8 bytes, so "Zebra" sorts before "apple".
/// The sort is stable; duplicates stay adjacent.
pub fn sort_terms(terms: &mut TermSequence) {
    terms.sort();
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_definition_renders_unchanged() {
        let d = Definition::plain("a fruit, usually red");
        assert_eq!(d.to_html(), "a fruit, usually red");
        assert_eq!(d.plain_text(), "a fruit, usually red");
        assert_eq!(d.link_count(), 0);
    }

    #[test]
    fn test_empty_plain_definition_has_no_fragments() {
        let d = Definition::plain("");
        assert!(d.is_empty());
        assert_eq!(d.to_html(), "");
    }

    #[test]
    fn test_link_renders_anchor() {
        let d = Definition::from_fragments([
            Fragment::Text("fruit related to ".into()),
            Fragment::Link("apple".into()),
        ]);
        assert_eq!(d.to_html(), "fruit related to <a href=\"apple.html\">apple</a>");
        assert_eq!(d.plain_text(), "fruit related to apple");
        assert_eq!(d.link_count(), 1);
    }

    #[test]
    fn test_from_fragments_merges_text() {
        let d = Definition::from_fragments([
            Fragment::Text("a ".into()),
            Fragment::Text(String::new()),
            Fragment::Text("b".into()),
        ]);
        assert_eq!(d, Definition::plain("a b"));
    }

    #[test]
    fn test_mapping_insert_and_replace() {
        let mut m = DefinitionMapping::new();
        assert!(m.insert("term", Definition::plain("one")).is_none());
        assert!(m.insert("term", Definition::plain("two")).is_some());
        assert_eq!(m.len(), 1);

        assert!(m.replace("term", Definition::plain("three")));
        assert!(!m.replace("missing", Definition::plain("x")));
        assert_eq!(m.get("term").map(|d| d.plain_text()), Some("three".to_string()));
    }

    #[test]
    fn test_sort_is_case_sensitive_ordinal() {
        let mut terms = vec![
            "banana".to_string(),
            "Zebra".to_string(),
            "apple".to_string(),
            "banana".to_string(),
        ];
        sort_terms(&mut terms);
        assert_eq!(terms, vec!["Zebra", "apple", "banana", "banana"]);
    }
}
