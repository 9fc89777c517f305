//! File system walk over a corpus directory.

use super::traversal::visit_entries;
use crate::paths::{ArtifactSet, PathResolver};
use crate::utils::error::WalkError;
use log::{debug, info};
use std::path::Path;
use walkdir::WalkDir;

/// Corpus walker configuration
///
/// **Public** - main entry point for traversal
///
/// # Example
/// ```ignore
/// let walker = Walker::new(".gt.txt").recursive(true);
/// walker.walk("corpus", |set| {
///     println!("{}", set.gt.display());
///     Ok(())
/// })?;
/// ```
#[derive(Debug, Clone)]
pub struct Walker {
    extension: String,
    recursive: bool,
    resolver: PathResolver,
}

impl Walker {
    /// Walker for anchors ending with `extension`, flat by default
    pub fn new(extension: impl Into<String>) -> Self {
        Self {
            extension: extension.into(),
            recursive: false,
            resolver: PathResolver::default(),
        }
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// Resolve sets with a custom resolver, e.g. another image priority
    pub fn with_resolver(mut self, resolver: PathResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn is_recursive(&self) -> bool {
        self.recursive
    }

    /// Walk `root` and call `handler` once per anchor file
    ///
    /// Entries are visited depth first in file name order. The handler
    /// gets the checked artifact set of the anchor; members that do not
    /// exist are empty paths.
    ///
    /// # Returns
    /// Number of handled anchors
    ///
    /// # Errors
    /// * `WalkError::Traversal` - The root or any entry cannot be read
    /// * `WalkError::Handler` - The handler failed; nothing after it ran
    pub fn walk<F>(&self, root: impl AsRef<Path>, mut handler: F) -> Result<usize, WalkError>
    where
        F: FnMut(&ArtifactSet) -> anyhow::Result<()>,
    {
        let root = root.as_ref();
        info!(
            "Walking {} for *{} ({})",
            root.display(),
            self.extension,
            if self.recursive { "recursive" } else { "flat" }
        );

        let mut entries = WalkDir::new(root).sort_by_file_name().into_iter();
        let handled = visit_entries(&mut entries, &self.extension, self.recursive, |anchor| {
            debug!("Anchor: {}", anchor.display());
            let set = self.resolver.resolve(anchor);
            handler(&set).map_err(WalkError::Handler)
        })?;

        debug!("Handled {} anchors under {}", handled, root.display());
        Ok(handled)
    }
}

/// Walk `dir` with the default resolver
///
/// Shorthand for `Walker::new(extension).recursive(recursive).walk(dir, handler)`.
pub fn walk<F>(
    dir: impl AsRef<Path>,
    extension: &str,
    recursive: bool,
    handler: F,
) -> Result<(), WalkError>
where
    F: FnMut(&ArtifactSet) -> anyhow::Result<()>,
{
    Walker::new(extension)
        .recursive(recursive)
        .walk(dir, handler)
        .map(|_| ())
}
