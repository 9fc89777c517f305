//! Per-entry traversal policy.

use crate::utils::error::WalkError;
use std::path::{Path, PathBuf};

/// What to do with one visited entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// Nothing to do, keep going
    Skip,
    /// Directory whose contents are visited
    Descend,
    /// Directory whose contents must not be visited
    PruneSubtree,
    /// File ending with the driving extension
    Anchor,
}

/// A file system entry as seen by the traversal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub path: PathBuf,
    /// 0 for the traversal root
    pub depth: usize,
    pub is_dir: bool,
}

impl Entry {
    pub fn file(path: impl Into<PathBuf>, depth: usize) -> Self {
        Self {
            path: path.into(),
            depth,
            is_dir: false,
        }
    }

    pub fn dir(path: impl Into<PathBuf>, depth: usize) -> Self {
        Self {
            path: path.into(),
            depth,
            is_dir: true,
        }
    }
}

impl From<walkdir::DirEntry> for Entry {
    fn from(entry: walkdir::DirEntry) -> Self {
        Self {
            depth: entry.depth(),
            is_dir: entry.file_type().is_dir(),
            path: entry.into_path(),
        }
    }
}

/// Decide how to treat one entry
///
/// **Public** - the whole traversal policy, free of file system access
///
/// The root is skipped but still descended. Subdirectories are descended
/// only when `recursive` is set and pruned otherwise. Files are anchors
/// when their full path ends with `extension`.
pub fn classify(entry: &Entry, extension: &str, recursive: bool) -> Visit {
    if entry.depth == 0 {
        return Visit::Skip;
    }
    if entry.is_dir {
        return if recursive {
            Visit::Descend
        } else {
            Visit::PruneSubtree
        };
    }
    if ends_with(&entry.path, extension) {
        Visit::Anchor
    } else {
        Visit::Skip
    }
}

fn ends_with(path: &Path, extension: &str) -> bool {
    path.as_os_str()
        .as_encoded_bytes()
        .ends_with(extension.as_bytes())
}

/// Depth-first stream of entries that can skip the current directory
pub trait EntrySource {
    fn next_entry(&mut self) -> Option<Result<Entry, WalkError>>;

    /// Do not yield the contents of the directory yielded last
    fn skip_current_dir(&mut self);
}

impl EntrySource for walkdir::IntoIter {
    fn next_entry(&mut self) -> Option<Result<Entry, WalkError>> {
        self.next()
            .map(|res| res.map(Entry::from).map_err(WalkError::from))
    }

    fn skip_current_dir(&mut self) {
        walkdir::IntoIter::skip_current_dir(self);
    }
}

/// Drive a source through [`classify`] and report every anchor
///
/// **Public** - used by the walker, usable with virtual sources
///
/// Stops at the first source or callback error and returns it.
///
/// # Returns
/// Number of anchors reported
pub fn visit_entries<S, F>(
    source: &mut S,
    extension: &str,
    recursive: bool,
    mut on_anchor: F,
) -> Result<usize, WalkError>
where
    S: EntrySource + ?Sized,
    F: FnMut(&Path) -> Result<(), WalkError>,
{
    let mut anchors = 0;

    while let Some(entry) = source.next_entry() {
        let entry = entry?;
        match classify(&entry, extension, recursive) {
            Visit::Skip | Visit::Descend => {}
            Visit::PruneSubtree => source.skip_current_dir(),
            Visit::Anchor => {
                on_anchor(&entry.path)?;
                anchors += 1;
            }
        }
    }

    Ok(anchors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// In-memory depth-first listing
    struct VirtualTree {
        entries: Vec<Entry>,
        next: usize,
        pruned: Vec<PathBuf>,
    }

    impl VirtualTree {
        fn new(entries: Vec<Entry>) -> Self {
            Self {
                entries,
                next: 0,
                pruned: Vec::new(),
            }
        }
    }

    impl EntrySource for VirtualTree {
        fn next_entry(&mut self) -> Option<Result<Entry, WalkError>> {
            let entry = self.entries.get(self.next).cloned();
            self.next += 1;
            entry.map(Ok)
        }

        fn skip_current_dir(&mut self) {
            let Some(current) = self.next.checked_sub(1).and_then(|i| self.entries.get(i)) else {
                return;
            };
            if !current.is_dir {
                return;
            }
            let dir = current.path.clone();
            while self
                .entries
                .get(self.next)
                .is_some_and(|e| e.path.starts_with(&dir))
            {
                self.next += 1;
            }
            self.pruned.push(dir);
        }
    }

    fn sample_tree() -> Vec<Entry> {
        vec![
            Entry::dir("corpus", 0),
            Entry::file("corpus/00001.gt.txt", 1),
            Entry::file("corpus/00001.png", 1),
            Entry::file("corpus/00002.gt.txt", 1),
            Entry::dir("corpus/sub", 1),
            Entry::file("corpus/sub/00003.gt.txt", 2),
            Entry::dir("corpus/sub/deeper", 2),
            Entry::file("corpus/sub/deeper/00004.gt.txt", 3),
            Entry::file("corpus/zz.gt.txt", 1),
        ]
    }

    fn anchors(tree: &mut VirtualTree, ext: &str, recursive: bool) -> Vec<PathBuf> {
        let mut found = Vec::new();
        let count = visit_entries(tree, ext, recursive, |p| {
            found.push(p.to_path_buf());
            Ok(())
        })
        .unwrap();
        assert_eq!(count, found.len());
        found
    }

    #[test]
    fn test_classify_root_is_skipped() {
        assert_eq!(classify(&Entry::dir("corpus", 0), ".gt.txt", false), Visit::Skip);
        assert_eq!(classify(&Entry::file("x.gt.txt", 0), ".gt.txt", true), Visit::Skip);
    }

    #[test]
    fn test_classify_directories() {
        let sub = Entry::dir("corpus/sub", 1);
        assert_eq!(classify(&sub, ".gt.txt", true), Visit::Descend);
        assert_eq!(classify(&sub, ".gt.txt", false), Visit::PruneSubtree);
    }

    #[test]
    fn test_classify_files() {
        let gt = Entry::file("corpus/00001.gt.txt", 1);
        assert_eq!(classify(&gt, ".gt.txt", false), Visit::Anchor);
        // `.txt` is a suffix of `.gt.txt` as well
        assert_eq!(classify(&gt, ".txt", false), Visit::Anchor);
        assert_eq!(classify(&gt, ".llocs", false), Visit::Skip);
    }

    #[test]
    fn test_flat_walk_prunes_subdirectories() {
        let mut tree = VirtualTree::new(sample_tree());
        let found = anchors(&mut tree, ".gt.txt", false);

        assert_eq!(
            found,
            vec![
                PathBuf::from("corpus/00001.gt.txt"),
                PathBuf::from("corpus/00002.gt.txt"),
                PathBuf::from("corpus/zz.gt.txt"),
            ]
        );
        assert_eq!(tree.pruned, vec![PathBuf::from("corpus/sub")]);
    }

    #[test]
    fn test_recursive_walk_descends() {
        let mut tree = VirtualTree::new(sample_tree());
        let found = anchors(&mut tree, ".gt.txt", true);

        assert_eq!(found.len(), 5);
        assert!(found.contains(&PathBuf::from("corpus/sub/deeper/00004.gt.txt")));
        assert!(tree.pruned.is_empty());
    }

    #[test]
    fn test_callback_error_stops_traversal() {
        let mut tree = VirtualTree::new(sample_tree());
        let mut calls = 0;
        let result = visit_entries(&mut tree, ".gt.txt", true, |_| {
            calls += 1;
            Err(WalkError::Handler(anyhow::anyhow!("stop")))
        });

        assert_eq!(calls, 1);
        assert_eq!(result.unwrap_err().to_string(), "stop");
    }

    #[test]
    fn test_source_error_stops_traversal() {
        struct Failing;
        impl EntrySource for Failing {
            fn next_entry(&mut self) -> Option<Result<Entry, WalkError>> {
                Some(Err(WalkError::Traversal {
                    path: PathBuf::from("corpus/locked"),
                    source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
                }))
            }
            fn skip_current_dir(&mut self) {}
        }

        let result = visit_entries(&mut Failing, ".gt.txt", true, |_| Ok(()));
        assert!(matches!(result, Err(WalkError::Traversal { .. })));
    }
}
