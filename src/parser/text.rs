//! Ground truth and OCR text readers.
//!
//! Both file kinds hold a single text line; anything after the first
//! line terminator is ignored.

use crate::utils::error::ParseError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Open a `.gt.txt` or `.txt` file and return its text line
pub fn open_txt_file(path: impl AsRef<Path>) -> Result<String, ParseError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ParseError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_txt(BufReader::new(file))
}

/// Read the first line without its terminator; empty input yields ""
pub fn read_txt<R: BufRead>(reader: R) -> Result<String, ParseError> {
    match reader.lines().next() {
        Some(line) => Ok(line?),
        None => Ok(String::new()),
    }
}
