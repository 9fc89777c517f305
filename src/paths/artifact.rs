//! The group of sibling files that belong to one line.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Ground truth, image, OCR text and trace path of one line.
///
/// An absent member is an empty path, never a placeholder of another
/// kind. Use the accessor methods to get an `Option` view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactSet {
    pub gt: PathBuf,
    pub image: PathBuf,
    pub txt: PathBuf,
    pub llocs: PathBuf,
}

impl ArtifactSet {
    pub fn gt(&self) -> Option<&Path> {
        present(&self.gt)
    }

    pub fn image(&self) -> Option<&Path> {
        present(&self.image)
    }

    pub fn txt(&self) -> Option<&Path> {
        present(&self.txt)
    }

    pub fn llocs(&self) -> Option<&Path> {
        present(&self.llocs)
    }

    /// Number of members that were found on disk
    pub fn present_count(&self) -> usize {
        [&self.gt, &self.image, &self.txt, &self.llocs]
            .iter()
            .filter(|p| !p.as_os_str().is_empty())
            .count()
    }
}

fn present(path: &Path) -> Option<&Path> {
    if path.as_os_str().is_empty() {
        None
    } else {
        Some(path)
    }
}
