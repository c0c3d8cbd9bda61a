// ============================================================
// Layer 4 — Term Loader
// ============================================================
// Reads a line source and builds the term → definition mapping
// plus the sequence of terms in input order.
//
// Two input layouts are accepted:
//
//   Blocks (a blank line appears between entries):
//     meaning
//     something that one wishes to convey,
//      especially by language
//                                   ← blank line ends the entry
//     term
//     a word whose definition is in a glossary
//
//   Pairs (no blank lines, an even number of lines):
//     meaning
//     something that one wishes to convey, especially by language
//     term
//     a word whose definition is in a glossary
//
// In the block layout the first line is the term and every other
// line is appended to the definition with nothing inserted between
// them. In the pair layout lines simply alternate term/definition.
// An odd line count can't be pairs, so it is read as blocks: with
// no blank lines at all that is one entry with continuation lines.
//
// Leading and trailing blank lines are ignored, and a run of blank
// lines counts as a single delimiter. A term with no definition
// line gets an empty definition and a warning.
//
// Reference: Rust Book §8 (Vectors), §9 (Error Handling)

use anyhow::Result;

use crate::domain::glossary::{Definition, DefinitionMapping, TermSequence};
use crate::domain::traits::LineSource;

/// How entries are laid out in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Entries separated by blank lines, definitions may span lines
    Blocks,
    /// Strictly alternating term and definition lines, no blank
    /// lines and an even line count
    Pairs,
}

/// Result of loading: the mapping and the terms in input order.
#[derive(Debug, Clone, Default)]
pub struct LoadedTerms {
    pub mapping: DefinitionMapping,
    pub terms:   TermSequence,
    /// Entries whose definition line was missing
    pub truncated: usize,
    /// Entries whose term was already defined earlier in the input
    pub duplicates: usize,
}

/// Read every entry from `source`.
///
/// Errors only if the source itself fails to read.
pub fn load_terms<S: LineSource + ?Sized>(source: &mut S) -> Result<(DefinitionMapping, TermSequence)> {
    let loaded = load_terms_detailed(source)?;
    Ok((loaded.mapping, loaded.terms))
}

/// Like `load_terms`, also reporting truncated and duplicate entries.
pub fn load_terms_detailed<S: LineSource + ?Sized>(source: &mut S) -> Result<LoadedTerms> {
    let lines = source.read_all()?;
    let entries = split_entries(&lines);

    let mut loaded = LoadedTerms::default();

    for entry in entries {
        // split_entries never yields an empty entry
        let Some((term, rest)) = entry.split_first() else {
            continue;
        };

        if rest.is_empty() {
            tracing::warn!("Term '{}' has no definition, using an empty one", term);
            loaded.truncated += 1;
        }

        let definition = Definition::plain(rest.concat());

        if loaded.mapping.insert(term.clone(), definition).is_some() {
            tracing::warn!("Term '{}' is defined more than once, keeping the last definition", term);
            loaded.duplicates += 1;
        }
        loaded.terms.push(term.clone());
    }

    tracing::debug!(
        "Loaded {} entries ({} unique terms) from {} lines",
        loaded.terms.len(),
        loaded.mapping.len(),
        lines.len()
    );

    Ok(loaded)
}

/// Decide which layout the lines use.
pub fn detect_layout(lines: &[String]) -> Layout {
    let first = lines.iter().position(|l| !is_blank(l));
    let last  = lines.iter().rposition(|l| !is_blank(l));

    let (Some(first), Some(last)) = (first, last) else {
        return Layout::Pairs;
    };

    let body = &lines[first..=last];
    let has_blank_gap = body.iter().any(|l| is_blank(l));
    let odd_count     = body.len() % 2 == 1;

    if has_blank_gap || odd_count {
        Layout::Blocks
    } else {
        Layout::Pairs
    }
}

/// Group lines into entries: each entry is [term, definition lines...].
fn split_entries(lines: &[String]) -> Vec<Vec<String>> {
    let cleaned: Vec<String> = lines
        .iter()
        .map(|l| l.strip_suffix('\r').unwrap_or(l).to_string())
        .collect();

    match detect_layout(&cleaned) {
        Layout::Blocks => cleaned
            .split(|l| is_blank(l))
            .filter(|block| !block.is_empty())
            .map(|block| block.to_vec())
            .collect(),
        Layout::Pairs => {
            let non_blank: Vec<String> = cleaned.into_iter().filter(|l| !is_blank(l)).collect();
            non_blank.chunks(2).map(|pair| pair.to_vec()).collect()
        }
    }
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
