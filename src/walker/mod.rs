//! Corpus traversal.
//!
//! Walks a directory tree, picks the anchor files that end with a
//! driving extension and resolves the artifact set of each one.
//!
//! The per-entry policy lives in [`traversal::classify`] and works on
//! plain [`traversal::Entry`] values, so it can be driven by any
//! [`traversal::EntrySource`], not only the file system.

pub mod traversal;
pub mod walk;

// Re-export main types and functions
pub use traversal::{classify, visit_entries, Entry, EntrySource, Visit};
pub use walk::{walk, Walker};
