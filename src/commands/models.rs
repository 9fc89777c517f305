use crate::utils::config::{DEFAULT_RUN_TIMEOUT, GT_EXT};
use std::path::PathBuf;
use std::time::Duration;

/// Arguments for the walk command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct WalkArgs {
    /// Corpus directory to walk
    pub dir: PathBuf,

    /// Driving extension of the anchor files
    pub extension: String,

    /// Descend into subdirectories
    pub recursive: bool,

    /// Output path for the JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// Print presence counts to stdout
    pub print_summary: bool,

    /// Image extensions in priority order (None = default order)
    pub image_extensions: Option<Vec<String>>,
}

impl Default for WalkArgs {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            extension: GT_EXT.to_string(),
            recursive: false,
            output_json: None,
            print_summary: false,
            image_extensions: None,
        }
    }
}

/// Arguments for the run command
#[derive(Debug, Clone)]
pub struct RunArgs {
    /// OCR executable
    pub exe: String,

    /// Model passed as `--model`
    pub model: Option<String>,

    /// Kill the command after this long
    pub timeout: Duration,

    /// Arguments placed between the executable and the model option
    pub args: Vec<String>,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            exe: String::new(),
            model: None,
            timeout: DEFAULT_RUN_TIMEOUT,
            args: Vec::new(),
        }
    }
}
