//! Report schema for a corpus walk.
//!
//! Schema is versioned to allow future evolution.

use crate::paths::ArtifactSet;
use crate::utils::config::SCHEMA_VERSION;
use serde::{Deserialize, Serialize};

/// Top-level report structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Walked directory
    pub root: String,

    /// Driving extension of the anchors
    pub extension: String,

    pub recursive: bool,

    /// How many sets have each member
    pub summary: PresenceSummary,

    /// One entry per anchor, in walk order
    pub sets: Vec<ArtifactSet>,

    /// Timestamp when the report was generated
    pub generated_at: String,
}

/// Presence counts per artifact kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenceSummary {
    pub total: usize,
    pub gt: usize,
    pub image: usize,
    pub txt: usize,
    pub llocs: usize,
    /// Sets where all four members exist
    pub complete: usize,
}

impl PresenceSummary {
    pub fn add(&mut self, set: &ArtifactSet) {
        self.total += 1;
        self.gt += usize::from(set.gt().is_some());
        self.image += usize::from(set.image().is_some());
        self.txt += usize::from(set.txt().is_some());
        self.llocs += usize::from(set.llocs().is_some());
        self.complete += usize::from(set.present_count() == 4);
    }
}

impl CorpusReport {
    pub fn new(root: impl Into<String>, extension: impl Into<String>, recursive: bool) -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            root: root.into(),
            extension: extension.into(),
            recursive,
            summary: PresenceSummary::default(),
            sets: Vec::new(),
            generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn push(&mut self, set: ArtifactSet) {
        self.summary.add(&set);
        self.sets.push(set);
    }
}
