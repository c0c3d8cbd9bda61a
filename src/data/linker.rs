// ============================================================
// Layer 4 — Definition Linker
// ============================================================
// Rewrites every definition so that any word exactly equal to a
// known term becomes a link to that term's page.
//
// Example (terms: apple, banana):
//   banana → "fruit related to apple"
//   becomes  Text("fruit related to ") + Link("apple")
//   renders  fruit related to <a href="apple.html">apple</a>
//
// Matching rules:
//   - whole words only (tokens from the tokenizer), never substrings
//   - case-sensitive, exact comparison
//   - separator runs always pass through unchanged
//   - existing Link fragments pass through unchanged, so linking
//     an already-linked mapping changes nothing
//
// The work happens in two phases:
//   1. Read:  build every new definition against the current keys
//   2. Write: replace the definitions in the mapping
// No definition is ever read after another has been rewritten.
//
// Reference: Rust Book §8 (Hash Maps), §13 (Iterators)

use std::collections::BTreeSet;

use crate::data::tokenizer::tokenize;
use crate::domain::glossary::{Definition, DefinitionMapping, Fragment, Term};
use crate::domain::separators::SeparatorSet;

/// Options controlling which words become links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkPolicy {
    /// Link a term that appears inside its own definition
    pub self_links: bool,
    pub separators: SeparatorSet,
}

impl Default for LinkPolicy {
    fn default() -> Self {
        Self {
            self_links: true,
            separators: SeparatorSet::glossary(),
        }
    }
}

/// What a linking pass did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkStats {
    /// Distinct definitions rewritten
    pub definitions: usize,
    /// Links created in this pass
    pub links: usize,
}

/// Link every distinct term's definition in `terms` against all keys
/// of `mapping`, replacing the definitions in place.
///
/// Terms missing from the mapping are skipped with a warning.
pub fn link_definitions(mapping: &mut DefinitionMapping, terms: &[Term], policy: &LinkPolicy) -> LinkStats {
    // ── Phase 1: read ─────────────────────────────────────────────────────────
    let distinct: BTreeSet<&Term> = terms.iter().collect();
    let mut rewritten: Vec<(Term, Definition)> = Vec::with_capacity(distinct.len());
    let mut stats = LinkStats::default();

    for term in distinct {
        let Some(definition) = mapping.get(term) else {
            tracing::warn!("Term '{}' has no definition to link", term);
            continue;
        };

        let before = definition.link_count();
        let linked = link_definition(term, definition, mapping, policy);
        stats.links += linked.link_count() - before;

        rewritten.push((term.clone(), linked));
    }

    // ── Phase 2: write ────────────────────────────────────────────────────────
    for (term, definition) in rewritten {
        mapping.replace(&term, definition);
        stats.definitions += 1;
    }

    tracing::debug!(
        "Linked {} definitions, {} new links",
        stats.definitions,
        stats.links
    );

    stats
}

/// Link a single definition belonging to `owner`.
pub fn link_definition(
    owner:      &str,
    definition: &Definition,
    mapping:    &DefinitionMapping,
    policy:     &LinkPolicy,
) -> Definition {
    let mut fragments: Vec<Fragment> = Vec::new();
    // Pending plain text, flushed whenever a link is emitted
    let mut pending = String::new();

    for fragment in definition.fragments() {
        match fragment {
            Fragment::Link(_) => {
                flush(&mut pending, &mut fragments);
                fragments.push(fragment.clone());
            }
            Fragment::Text(text) => {
                for token in tokenize(text, &policy.separators) {
                    if token.is_word() && is_link_target(token.text, owner, mapping, policy) {
                        flush(&mut pending, &mut fragments);
                        fragments.push(Fragment::Link(token.text.to_string()));
                    } else {
                        pending.push_str(token.text);
                    }
                }
            }
        }
    }
    flush(&mut pending, &mut fragments);

    Definition::from_fragments(fragments)
}

fn is_link_target(word: &str, owner: &str, mapping: &DefinitionMapping, policy: &LinkPolicy) -> bool {
    mapping.contains(word) && (policy.self_links || word != owner)
}

fn flush(pending: &mut String, fragments: &mut Vec<Fragment>) {
    if !pending.is_empty() {
        fragments.push(Fragment::Text(std::mem::take(pending)));
    }
}
