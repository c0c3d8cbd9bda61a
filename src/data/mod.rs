// ============================================================
// Layer 4 — Text Pipeline
// ============================================================
// Everything between the raw input lines and a linked mapping.
//
// The pipeline flows in this order:
//
//   input lines
//       │
//       ▼
//   loader      → term → definition mapping + terms in input order
//       │
//       ▼
//   (sort terms: domain::glossary::sort_terms)
//       │
//       ▼
//   linker      → definitions with links to other terms
//                 (uses tokenizer to split definitions into words)
//
// Each module does exactly one step and is tested on its own.
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Splits text into word and separator runs
pub mod tokenizer;

/// Reads term/definition entries from a line source
pub mod loader;

/// Turns words that name other terms into links
pub mod linker;
