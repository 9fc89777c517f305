//! Configuration and constants for the corpus layout.

use std::time::Duration;

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Default deadline for external OCR commands started from the CLI
pub const DEFAULT_RUN_TIMEOUT: Duration = Duration::from_secs(300);

// Sibling file extensions of one recognized line
pub const GT_EXT: &str = ".gt.txt";
pub const TXT_EXT: &str = ".txt";
pub const LLOCS_EXT: &str = ".llocs";
pub const BIN_PNG_EXT: &str = ".bin.png";
pub const DEW_PNG_EXT: &str = ".dew.png";
pub const PNG_EXT: &str = ".png";
pub const NRM_PNG_EXT: &str = ".nrm.png"; // GT4HistOCR

/// Line image extensions, most preprocessed variant first.
///
/// The first existing candidate wins. Use
/// [`PathResolver::with_image_extensions`](crate::paths::PathResolver::with_image_extensions)
/// to resolve with another order.
pub const IMAGE_EXTENSIONS: &[&str] = &[BIN_PNG_EXT, DEW_PNG_EXT, PNG_EXT, NRM_PNG_EXT];
