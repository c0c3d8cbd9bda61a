// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums, and traits describing a glossary.
//
// Rules for this layer:
//   - NO file I/O
//   - NO HTML page layout (that's Layer 5)
//   - Only data types and the traits other layers implement
//
// Reference: Rust Book §5 (Structs), §10 (Traits)

// Terms, definitions, and the term → definition mapping
pub mod glossary;

// The characters that split definitions into words
pub mod separators;

// Line-oriented input/output abstractions
pub mod traits;
