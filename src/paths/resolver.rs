//! Extension stripping and sibling path resolution.
//!
//! Every artifact of a line shares one stripped base: the path with all
//! trailing dot-extensions removed. Sibling files are named by appending
//! a fixed suffix to that base, e.g. `<base>.gt.txt` or `<base>.llocs`.

use super::artifact::ArtifactSet;
use crate::utils::config::{GT_EXT, IMAGE_EXTENSIONS, LLOCS_EXT, TXT_EXT};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

/// Strip all extensions from a path
///
/// **Public** - the base of the naming convention
///
/// Removes the final segment's extensions one after another until none
/// is left. A file name starting with a dot is removed completely, so
/// `dir/.abc.a` strips to `dir/`. Stripping is idempotent.
///
/// Works on the encoded bytes, so paths that are not valid UTF-8 strip
/// the same way.
pub fn strip(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    let bytes = path.as_os_str().as_encoded_bytes();
    let len = stripped_len(bytes);
    // SAFETY: `len` is either the full length or the index of an ASCII
    // '.', which is a valid split point of the encoded bytes.
    let base = unsafe { OsStr::from_encoded_bytes_unchecked(&bytes[..len]) };
    PathBuf::from(base)
}

/// Removing extensions one by one ends at the first dot of the final
/// segment, so cut there directly.
fn stripped_len(bytes: &[u8]) -> usize {
    let name_start = bytes
        .iter()
        .rposition(|&b| b.is_ascii() && std::path::is_separator(b as char))
        .map_or(0, |i| i + 1);
    bytes[name_start..]
        .iter()
        .position(|&b| b == b'.')
        .map_or(bytes.len(), |dot| name_start + dot)
}

/// Build the sibling path `strip(base) + ext` without touching the disk
pub fn path_for(base: impl AsRef<Path>, ext: &str) -> PathBuf {
    let mut path = strip(base).into_os_string();
    path.push(ext);
    PathBuf::from(path)
}

/// Returns true if the path exists and is not a directory
pub fn is_file(path: impl AsRef<Path>) -> bool {
    fs::metadata(path).map(|m| !m.is_dir()).unwrap_or(false)
}

/// Resolve a sibling path and optionally check that it exists
///
/// **Public** - building block for the gt, txt and llocs resolvers
///
/// # Arguments
/// * `base` - Stripped or unstripped path of any file of the line
/// * `ext` - Suffix to append to the stripped base
/// * `check` - Whether to stat the resulting path
///
/// # Returns
/// The sibling path in any case, and whether it exists. If `check` is
/// false the flag is always false and carries no information; use
/// [`path_for`] and [`is_file`] when the two questions are separate.
pub fn resolve_with_extension(base: impl AsRef<Path>, ext: &str, check: bool) -> (PathBuf, bool) {
    let path = path_for(base, ext);
    let found = check && is_file(&path);
    (path, found)
}

/// Ground truth file (`.gt.txt`) of a line, see [`resolve_with_extension`]
pub fn gt_from_stripped(base: impl AsRef<Path>, check: bool) -> (PathBuf, bool) {
    resolve_with_extension(base, GT_EXT, check)
}

/// OCR text file (`.txt`) of a line, see [`resolve_with_extension`]
pub fn txt_from_stripped(base: impl AsRef<Path>, check: bool) -> (PathBuf, bool) {
    resolve_with_extension(base, TXT_EXT, check)
}

/// Character trace file (`.llocs`) of a line, see [`resolve_with_extension`]
pub fn llocs_from_stripped(base: impl AsRef<Path>, check: bool) -> (PathBuf, bool) {
    resolve_with_extension(base, LLOCS_EXT, check)
}

/// Line image of a line using the default priority list
///
/// Returns the first existing candidate of [`IMAGE_EXTENSIONS`], or an
/// empty path and false if none exists.
pub fn image_from_stripped(base: impl AsRef<Path>) -> (PathBuf, bool) {
    found_or_empty(first_existing(&strip(base), IMAGE_EXTENSIONS))
}

/// Resolver with a configurable image priority list
#[derive(Debug, Clone)]
pub struct PathResolver {
    image_extensions: Vec<String>,
}

impl Default for PathResolver {
    fn default() -> Self {
        Self {
            image_extensions: IMAGE_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl PathResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the image candidates; earlier entries take precedence
    pub fn with_image_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.image_extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn image_extensions(&self) -> &[String] {
        &self.image_extensions
    }

    /// Line image of a line, first existing candidate wins
    pub fn image(&self, base: impl AsRef<Path>) -> (PathBuf, bool) {
        found_or_empty(first_existing(&strip(base), &self.image_extensions))
    }

    /// Resolve all four members of a line, each checked on disk
    ///
    /// **Public** - used by the walker for every anchor file
    ///
    /// Missing members are left as empty paths.
    pub fn resolve(&self, path: impl AsRef<Path>) -> ArtifactSet {
        let base = strip(path);
        ArtifactSet {
            gt: path_or_empty(gt_from_stripped(&base, true)),
            image: path_or_empty(self.image(&base)),
            txt: path_or_empty(txt_from_stripped(&base, true)),
            llocs: path_or_empty(llocs_from_stripped(&base, true)),
        }
    }
}

fn first_existing<S: AsRef<str>>(stripped: &Path, extensions: &[S]) -> Option<PathBuf> {
    extensions
        .iter()
        .map(|ext| {
            let mut candidate = stripped.as_os_str().to_os_string();
            candidate.push(ext.as_ref());
            PathBuf::from(candidate)
        })
        .find(|candidate| is_file(candidate))
}

fn found_or_empty(path: Option<PathBuf>) -> (PathBuf, bool) {
    match path {
        Some(p) => (p, true),
        None => (PathBuf::new(), false),
    }
}

fn path_or_empty((path, found): (PathBuf, bool)) -> PathBuf {
    if found {
        path
    } else {
        PathBuf::new()
    }
}
