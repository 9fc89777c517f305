//! Run command implementation.

use super::models::RunArgs;
use crate::runner::Cmd;
use crate::utils::error::RunError;
use anyhow::{Context, Result};
use log::info;
use std::io::Write;

/// Run an OCR executable and copy its output to stdout
///
/// On failure the captured output is still written before the error is returned.
pub fn execute_run(args: &RunArgs) -> Result<()> {
    let cmd = Cmd {
        exe: args.exe.clone(),
        model: args.model.clone(),
    };
    info!("Running {} (timeout {:?})", cmd.args(args.args.as_slice()).join(" "), args.timeout);

    let result = cmd.run_with_timeout(args.args.as_slice(), args.timeout);
    let mut stdout = std::io::stdout().lock();
    match result {
        Ok(output) => {
            stdout.write_all(&output)?;
            Ok(())
        }
        Err(RunError::Failed { status, output }) => {
            stdout.write_all(&output)?;
            anyhow::bail!("{} failed with {}", args.exe, status)
        }
        Err(e) => Err(e).with_context(|| format!("Failed to run {}", args.exe)),
    }
}

/// Validate run arguments
pub fn validate_run_args(args: &RunArgs) -> Result<()> {
    if args.exe.trim().is_empty() {
        anyhow::bail!("Executable cannot be empty");
    }

    if args.timeout.is_zero() {
        anyhow::bail!("Timeout must be greater than 0");
    }

    if args.model.as_deref() == Some("") {
        anyhow::bail!("Model path cannot be empty");
    }

    Ok(())
}
