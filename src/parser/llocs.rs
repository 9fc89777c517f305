//! Character trace (`.llocs`) parser.
//!
//! Each line holds one recognized character, its right cut position in
//! image columns and an optional confidence, separated by tabs:
//!
//! ```text
//! e	60.7	0.2
//! r	77.8
//! ```
//!
//! Empty lines and lines starting with a tab are skipped. Any other line
//! that matches neither shape fails the whole parse.

use crate::utils::error::ParseError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Character information for one recognized character
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LLoc {
    pub ch: char,
    /// Cumulative right cut position in pixel columns
    pub cut: f32,
    /// Confidence, 0 if the file did not record one
    pub conf: f32,
}

impl LLoc {
    pub fn new(ch: char, cut: f32, conf: f32) -> Self {
        Self { ch, cut, conf }
    }
}

/// Character information for one recognized line, in reading order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LLocs(Vec<LLoc>);

impl LLocs {
    pub fn new(llocs: Vec<LLoc>) -> Self {
        Self(llocs)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LLoc> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[LLoc] {
        &self.0
    }

    /// Right cuts truncated towards zero, index-aligned with the characters
    pub fn cuts(&self) -> Vec<i32> {
        self.0.iter().map(|l| l.cut as i32).collect()
    }

    /// Confidences, index-aligned with the characters
    pub fn confs(&self) -> Vec<f32> {
        self.0.iter().map(|l| l.conf).collect()
    }

    pub fn into_inner(self) -> Vec<LLoc> {
        self.0
    }
}

/// Renders just the recognized characters
impl fmt::Display for LLocs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|l| write!(f, "{}", l.ch))
    }
}

impl From<Vec<LLoc>> for LLocs {
    fn from(llocs: Vec<LLoc>) -> Self {
        Self(llocs)
    }
}

impl FromIterator<LLoc> for LLocs {
    fn from_iter<I: IntoIterator<Item = LLoc>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a LLocs {
    type Item = &'a LLoc;
    type IntoIter = std::slice::Iter<'a, LLoc>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Open a trace file and parse its contents
///
/// **Public** - main entry point for trace files on disk
///
/// # Errors
/// * `ParseError::Open` - The file cannot be opened
/// * `ParseError::InvalidLine` - A line matches neither accepted shape
/// * `ParseError::Read` - I/O error while reading
pub fn open_llocs_file(path: impl AsRef<Path>) -> Result<LLocs, ParseError> {
    let path = path.as_ref();
    debug!("Reading trace from: {}", path.display());

    let file = File::open(path).map_err(|source| ParseError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_llocs(BufReader::new(file))
}

/// Parse a trace from any buffered reader
///
/// All or nothing: the first malformed line aborts the parse and no
/// records are returned.
pub fn read_llocs<R: BufRead>(reader: R) -> Result<LLocs, ParseError> {
    let mut llocs = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if line.is_empty() || line.starts_with('\t') {
            continue;
        }
        match parse_line(&line) {
            Some(lloc) => llocs.push(lloc),
            None => return Err(ParseError::InvalidLine(line)),
        }
    }

    Ok(LLocs(llocs))
}

/// Parse a trace held in memory
pub fn parse_llocs(input: &str) -> Result<LLocs, ParseError> {
    read_llocs(input.as_bytes())
}

/// Parse `char \t cut [\t conf]`
///
/// **Private** - internal helper for read_llocs
///
/// An unparsable confidence falls back to the two-field shape.
fn parse_line(line: &str) -> Option<LLoc> {
    let mut fields = line.split('\t');

    let mut chars = fields.next()?.chars();
    let ch = chars.next()?;
    if chars.next().is_some() {
        return None;
    }

    let cut = fields.next()?.trim().parse::<f32>().ok()?;
    let conf = fields
        .next()
        .and_then(|f| f.trim().parse::<f32>().ok())
        .unwrap_or(0.0);

    Some(LLoc { ch, cut, conf })
}
