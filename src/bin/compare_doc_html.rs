//! Normalize a Sphinx HTML build so it can be diffed against another.
//!
//! ```text
//! compare-doc-html html-0 html-0a
//! compare-doc-html html-1 html-1a
//! diff -Naur html-0a html-1a
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

/// Mirror every .html file under INPUT_DIR into OUTPUT_DIR with
/// version-specific noise removed
#[derive(Parser, Debug)]
#[command(name = "compare-doc-html", author, version, about)]
struct Cli {
    /// Root of the generated documentation
    input_dir: PathBuf,

    /// Where to write the normalized copy
    output_dir: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    devaids::normalize::normalize_tree(&cli.input_dir, &cli.output_dir).with_context(|| {
        format!(
            "failed to normalize {} into {}",
            cli.input_dir.display(),
            cli.output_dir.display()
        )
    })?;

    Ok(())
}
