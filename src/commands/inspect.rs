//! Single-line commands: resolve, llocs and inspect.

use crate::parser::{open_img_file, open_llocs_file, open_txt_file, LLocs};
use crate::paths::{
    gt_from_stripped, image_from_stripped, llocs_from_stripped, strip, txt_from_stripped,
};
use crate::paths::{ArtifactSet, PathResolver};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Print the stripped base and every sibling path with its existence
pub fn execute_resolve(path: &Path) -> Result<()> {
    let base = strip(path);
    println!("base:  {}", base.display());

    let rows: [(&str, (PathBuf, bool)); 4] = [
        ("gt", gt_from_stripped(&base, true)),
        ("image", image_from_stripped(&base)),
        ("txt", txt_from_stripped(&base, true)),
        ("llocs", llocs_from_stripped(&base, true)),
    ];
    for (kind, (p, found)) in rows {
        let mark = if found { "✓" } else { "✗" };
        println!("{:<6} {} {}", format!("{}:", kind), mark, p.display());
    }

    Ok(())
}

/// Print the characters of a trace file, optionally with cuts and confidences
pub fn execute_llocs(path: &Path, show_cuts: bool, show_confs: bool) -> Result<LLocs> {
    let llocs = open_llocs_file(path)
        .with_context(|| format!("Failed to parse trace {}", path.display()))?;

    println!("{}", llocs);
    if show_cuts {
        println!("{}", join(llocs.cuts()));
    }
    if show_confs {
        println!("{}", join(llocs.confs()));
    }

    Ok(llocs)
}

/// Resolve one line and read every member that exists
///
/// Stops at the first member that cannot be read.
pub fn execute_inspect(path: &Path) -> Result<ArtifactSet> {
    let set = PathResolver::new().resolve(path);

    if let Some(gt) = set.gt() {
        let text = open_txt_file(gt).with_context(|| format!("Failed to read {}", gt.display()))?;
        println!("gt:    {}", text);
    }
    if let Some(txt) = set.txt() {
        let text =
            open_txt_file(txt).with_context(|| format!("Failed to read {}", txt.display()))?;
        println!("txt:   {}", text);
    }
    if let Some(image) = set.image() {
        let img = open_img_file(image)
            .with_context(|| format!("Failed to decode {}", image.display()))?;
        println!("image: {} ({}x{})", image.display(), img.width(), img.height());
    }
    if let Some(llocs) = set.llocs() {
        let trace = open_llocs_file(llocs)
            .with_context(|| format!("Failed to parse trace {}", llocs.display()))?;
        println!("llocs: {} ({} chars)", trace, trace.len());
    }
    if set.present_count() == 0 {
        println!("no files found for {}", strip(path).display());
    }

    Ok(set)
}

fn join<T: ToString>(values: Vec<T>) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
