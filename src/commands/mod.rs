//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod inspect;
pub mod models;
pub mod run;
pub mod utils;
pub mod walk;

// Re-export main command functions
pub use inspect::{execute_inspect, execute_llocs, execute_resolve};
pub use models::{RunArgs, WalkArgs};
pub use run::{execute_run, validate_run_args};
pub use utils::display_version;
pub use walk::{execute_walk, validate_args};
