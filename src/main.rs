//! Ocropy Corpus CLI
//!
//! Walks, resolves and inspects Ocropy line corpora and runs OCR tools.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;
use std::time::Duration;

use ocropy_corpus::commands::{
    display_version, execute_inspect, execute_llocs, execute_resolve, execute_run, execute_walk,
    validate_args, validate_run_args, RunArgs, WalkArgs,
};
use ocropy_corpus::utils::config::GT_EXT;

/// Ocropy Corpus - resolve and parse OCR line corpora
#[derive(Parser, Debug)]
#[command(name = "ocropy-corpus")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// List the artifact sets of a corpus directory
    Walk {
        /// Corpus directory
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Driving extension of the anchor files
        #[arg(short, long, default_value = GT_EXT)]
        ext: String,

        /// Descend into subdirectories
        #[arg(short, long)]
        recursive: bool,

        /// Output path for a JSON report
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print presence counts
        #[arg(long)]
        summary: bool,

        /// Image extensions in priority order (comma separated)
        #[arg(long, value_delimiter = ',')]
        image_ext: Option<Vec<String>>,
    },

    /// Show the sibling paths of one line
    Resolve {
        /// Any file of the line, or its stripped base
        path: PathBuf,
    },

    /// Print the characters of a trace file
    Llocs {
        /// Path to the .llocs file
        file: PathBuf,

        /// Also print the truncated cut positions
        #[arg(long)]
        cuts: bool,

        /// Also print the confidences
        #[arg(long)]
        confs: bool,
    },

    /// Read every existing file of one line
    Inspect {
        /// Any file of the line, or its stripped base
        path: PathBuf,
    },

    /// Run an OCR executable with an optional model and timeout
    Run {
        /// Executable to run
        #[arg(long, env = "OCROPY_EXE")]
        exe: String,

        /// Model passed as --model after the other arguments
        #[arg(short, long, env = "OCROPY_MODEL")]
        model: Option<String>,

        /// Timeout in seconds
        #[arg(short, long, default_value = "300")]
        timeout: u64,

        /// Arguments for the executable
        #[arg(last = true)]
        args: Vec<String>,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Walk {
            dir,
            ext,
            recursive,
            output,
            summary,
            image_ext,
        } => {
            let args = WalkArgs {
                dir,
                extension: ext,
                recursive,
                output_json: output,
                print_summary: summary,
                image_extensions: image_ext,
            };

            // Validate args first
            validate_args(&args)?;

            execute_walk(&args)?;
        }

        Commands::Resolve { path } => {
            execute_resolve(&path)?;
        }

        Commands::Llocs { file, cuts, confs } => {
            execute_llocs(&file, cuts, confs)?;
        }

        Commands::Inspect { path } => {
            execute_inspect(&path)?;
        }

        Commands::Run {
            exe,
            model,
            timeout,
            args,
        } => {
            let args = RunArgs {
                exe,
                model,
                timeout: Duration::from_secs(timeout),
                args,
            };

            validate_run_args(&args)?;

            execute_run(&args)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
