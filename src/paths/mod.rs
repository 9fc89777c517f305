//! Sibling-file resolution for one recognized line.
//!
//! This module handles:
//! - Stripping all extensions from a path to get its base
//! - Building ground truth, text, trace and image paths from a base
//! - Picking the preferred line image among several candidates

pub mod artifact;
pub mod resolver;

// Re-export main types
pub use artifact::ArtifactSet;
pub use resolver::{
    gt_from_stripped, image_from_stripped, is_file, llocs_from_stripped, path_for,
    resolve_with_extension, strip, txt_from_stripped, PathResolver,
};
