// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// The concrete I/O behind the domain traits:
//
//   line_io.rs     — LineReader (files, stdin, strings) and
//                    FileLineSink (buffered file output)
//
//   store.rs       — DirectoryStore writes one file per page;
//                    MemoryStore keeps pages in memory
//
//   config_file.rs — BuildConfig saved/loaded as JSON
//
// Nothing above this layer opens a file itself.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Line readers and writers
pub mod line_io;

/// Output document stores
pub mod store;

/// BuildConfig JSON files
pub mod config_file;
