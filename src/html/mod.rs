// ============================================================
// Layer 5 — HTML Rendering
// ============================================================
// Turns a linked glossary into HTML lines written to a LineSink.
// This is the only layer that knows what the pages look like.
//
//   page.rs  — one page per term: title, heading, definition,
//              and a link back to the index
//   index.rs — the index page listing every term in order
//
// Neither module sorts or links anything: callers hand over
// terms already sorted and definitions already linked.
//
// Reference: Rust Book §10 (Generic Types and Traits)

/// Name of the index document
pub const INDEX_FILE: &str = "index.html";

/// Per-term page emitter
pub mod page;

/// Index page emitter
pub mod index;
