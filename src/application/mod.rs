// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Runs the glossary build from start to finish by calling the
// other layers in order. No text processing or HTML layout lives
// here, only workflow coordination.
//
// Reference: Rust Book §7 (Module System)

// The build workflow
pub mod build_use_case;
