//! Turn a flat text file of term/definition entries into a cross-linked
//! set of static HTML pages: one page per term plus an alphabetical index.
//!
//! Layers, outermost first:
//!
//! 1. [`cli`]: argument parsing and interactive prompts
//! 2. [`application`]: the build workflow
//! 3. [`domain`]: glossary types and I/O traits
//! 4. [`data`]: tokenizer, term loader, definition linker
//! 5. [`html`]: term page and index emitters
//! 6. [`infra`]: files, directories, config files

pub mod application;
pub mod cli;
pub mod data;
pub mod domain;
pub mod html;
pub mod infra;

pub use application::build_use_case::{build_glossary, BuildConfig, BuildSummary, BuildUseCase};
pub use data::linker::{link_definitions, LinkPolicy, LinkStats};
pub use data::loader::load_terms;
pub use data::tokenizer::{next_token, tokenize, Token, TokenKind};
pub use domain::glossary::{sort_terms, Definition, DefinitionMapping, Fragment, Term, TermSequence};
pub use domain::separators::SeparatorSet;
pub use domain::traits::{DocumentStore, LineSink, LineSource};
pub use html::{index::emit_index, page::emit_term_page};
