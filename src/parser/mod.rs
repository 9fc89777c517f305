//! Readers for the files of one line.
//!
//! This module handles:
//! - Parsing character traces (`.llocs`)
//! - Reading ground truth and OCR text lines (`.gt.txt`, `.txt`)
//! - Decoding line images (`.png` variants)

pub mod img;
pub mod llocs;
pub mod text;

// Re-export main types
pub use img::{open_img_file, read_img};
pub use llocs::{open_llocs_file, parse_llocs, read_llocs, LLoc, LLocs};
pub use text::{open_txt_file, read_txt};
