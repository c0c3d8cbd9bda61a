// ============================================================
// Layer 3 — Separator Set
// ============================================================
// The fixed set of characters that split a definition into words.
//
// Every character is in exactly one of two classes:
//   - separator: space and the punctuation below
//   - word:      everything else (letters, digits, '-', '<', '"', ...)
//
// Example:  "fruit, related to apple."
//   words:      fruit   related   to   apple
//   separators: ", "    " "       " "  "."
//
// Reference: Rust Book §8 (Strings), §5 (Structs)

use std::collections::BTreeSet;

/// The characters that delimit words in a definition.
pub const GLOSSARY_SEPARATORS: [char; 9] = [' ', '!', '\'', '.', ',', '/', ':', ';', '?'];

/// An immutable set of separator characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorSet {
    chars: BTreeSet<char>,
}

impl SeparatorSet {
    /// Build a separator set from any collection of characters.
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        Self { chars: chars.into_iter().collect() }
    }

    /// The separator set used for glossary definitions.
    pub fn glossary() -> Self {
        Self::new(GLOSSARY_SEPARATORS)
    }

    /// True if `c` delimits words
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl Default for SeparatorSet {
    fn default() -> Self {
        Self::glossary()
    }
}
