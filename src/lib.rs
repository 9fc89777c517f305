//! Ocropy Corpus
//!
//! Discovery, resolution and parsing of Ocropy-style OCR line corpora.
//! Every recognized line may have up to four sibling files sharing one
//! base path:
//!
//! - `<base>.gt.txt` ground truth
//! - `<base>.txt` OCR output
//! - `<base>.bin.png` / `.dew.png` / `.png` / `.nrm.png` line image
//! - `<base>.llocs` per-character trace
//!
//! ## Getting Started
//!
//! ```ignore
//! use ocropy_corpus::walker::walk;
//!
//! walk("corpus", ".gt.txt", true, |set| {
//!     println!("{} -> {}", set.gt.display(), set.image.display());
//!     Ok(())
//! })?;
//! ```
//!
//! The `ocropy-corpus` binary wraps the library for the command line.

pub mod commands;
pub mod output;
pub mod parser;
pub mod paths;
pub mod runner;
pub mod utils;
pub mod walker;
