// ============================================================
// Layer 4 — Word/Separator Tokenizer
// ============================================================
// Splits text into alternating runs of word characters and
// separator characters. Nothing is dropped: gluing every
// token back together gives the original text.
//
// Example with the glossary separators:
//   "fruit, related to apple."
//     → "fruit" | ", " | "related" | " " | "to" | " " | "apple" | "."
//
// Positions are byte offsets into the &str, so a position must
// land on a char boundary. Multi-byte characters are never split.
//
// Reference: Rust Book §8 (Strings: indexing and slicing)
//            Rust Book §13 (Iterators)

use crate::domain::separators::SeparatorSet;

/// Which class of characters a token is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Separator,
}

/// A maximal run of one character class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub kind: TokenKind,
}

impl Token<'_> {
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }
}

/// Return the longest run starting at `position` whose characters
/// are all separators or all word characters, matching the class of
/// the character at `position`.
///
/// # Panics
/// Panics if `position >= text.len()` or `position` is not on a char
/// boundary. Both are caller bugs, never a data condition.
pub fn next_token<'a>(text: &'a str, position: usize, separators: &SeparatorSet) -> &'a str {
    assert!(
        position < text.len(),
        "position ({}) must be less than text length ({})",
        position,
        text.len()
    );
    assert!(
        text.is_char_boundary(position),
        "position ({}) is not on a char boundary",
        position
    );

    let rest = &text[position..];

    // rest is non-empty, so there is always a first character
    let starts_with_separator = rest.chars().next().is_some_and(|c| separators.contains(c));

    // Byte offset of the first character of the opposite class
    let end = rest
        .char_indices()
        .find(|&(_, c)| separators.contains(c) != starts_with_separator)
        .map(|(i, _)| i)
        .unwrap_or(rest.len());

    &rest[..end]
}

/// Iterator over every token of a string, front to back.
pub struct Tokens<'a, 's> {
    text:       &'a str,
    position:   usize,
    separators: &'s SeparatorSet,
}

/// Tokenize `text` from position 0 to the end.
pub fn tokenize<'a, 's>(text: &'a str, separators: &'s SeparatorSet) -> Tokens<'a, 's> {
    Tokens { text, position: 0, separators }
}

impl<'a> Iterator for Tokens<'a, '_> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.text.len() {
            return None;
        }

        let text = next_token(self.text, self.position, self.separators);
        self.position += text.len();

        // Tokens are non-empty, so the first char decides the class
        let kind = match text.chars().next() {
            Some(c) if self.separators.contains(c) => TokenKind::Separator,
            _ => TokenKind::Word,
        };

        Some(Token { text, kind })
    }
}
