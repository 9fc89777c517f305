use crate::utils::config::{IMAGE_EXTENSIONS, SCHEMA_VERSION};

/// Display version information
pub fn display_version() {
    println!("Ocropy Corpus v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!("Image priority: {}", IMAGE_EXTENSIONS.join(" > "));
    println!();
    println!("Resolves and parses Ocropy line corpora (gt, txt, png, llocs).");
}
