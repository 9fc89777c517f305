//! Walk command implementation.
//!
//! The walk command:
//! 1. Walks the corpus directory for anchor files
//! 2. Prints one tab-separated line per artifact set
//! 3. Optionally writes a JSON report and prints presence counts

use super::models::WalkArgs;
use crate::output::{write_report, CorpusReport};
use crate::paths::{ArtifactSet, PathResolver};
use crate::walker::Walker;
use anyhow::{Context, Result};
use log::info;
use std::time::Instant;

/// Execute the walk command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// The collected report, also written to disk if requested
///
/// # Errors
/// * Traversal failures (missing root, unreadable entries)
/// * Report write errors
pub fn execute_walk(args: &WalkArgs) -> Result<CorpusReport> {
    let start_time = Instant::now();

    let mut resolver = PathResolver::new();
    if let Some(extensions) = &args.image_extensions {
        resolver = resolver.with_image_extensions(extensions.iter().cloned());
    }

    let walker = Walker::new(args.extension.clone())
        .recursive(args.recursive)
        .with_resolver(resolver);

    let mut report = CorpusReport::new(
        args.dir.display().to_string(),
        args.extension.clone(),
        args.recursive,
    );

    walker
        .walk(&args.dir, |set| {
            println!("{}", format_set(set));
            report.push(set.clone());
            Ok(())
        })
        .with_context(|| format!("Failed to walk {}", args.dir.display()))?;

    if let Some(output) = &args.output_json {
        write_report(&report, output).context("Failed to write report JSON")?;
        info!("✓ Report written to: {}", output.display());
    }

    if args.print_summary {
        let s = &report.summary;
        println!("\n{}", "=".repeat(40));
        println!("Sets:     {}", s.total);
        println!("Complete: {}", s.complete);
        println!("GT:       {}", s.gt);
        println!("Image:    {}", s.image);
        println!("Text:     {}", s.txt);
        println!("LLocs:    {}", s.llocs);
        println!("{}", "=".repeat(40));
    }

    info!(
        "Walk completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(report)
}

/// gt, image, txt and llocs path separated by tabs; absent members are empty
pub fn format_set(set: &ArtifactSet) -> String {
    [&set.gt, &set.image, &set.txt, &set.llocs]
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join("\t")
}

/// Validate walk arguments
///
/// **Public** - can be called before execute_walk for early validation
///
/// The anchor extension is a plain file name suffix, so `gt.txt` and
/// `.gt.txt` are both accepted. Image extensions are appended to a
/// stripped base and must start with a dot to name a sibling.
pub fn validate_args(args: &WalkArgs) -> Result<()> {
    if args.dir.as_os_str().is_empty() {
        anyhow::bail!("Corpus directory cannot be empty");
    }

    if args.extension.is_empty() {
        anyhow::bail!("Extension cannot be empty");
    }

    if let Some(extensions) = &args.image_extensions {
        if extensions.is_empty() {
            anyhow::bail!("At least one image extension is required");
        }
        if let Some(bad) = extensions.iter().find(|e| !e.starts_with('.')) {
            anyhow::bail!("Image extension must start with a dot: {}", bad);
        }
    }

    if let Some(output) = &args.output_json {
        if output.as_os_str().is_empty() || output.is_dir() {
            anyhow::bail!("Invalid report path: {}", output.display());
        }
    }

    Ok(())
}
