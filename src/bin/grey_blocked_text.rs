//! Render text from stdin as grey blocks into `flat.png`.
//!
//! ```text
//! grey-blocked-text < snippet.py
//! ```

use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::Parser;
use devaids::rendering::{render_text_to_file, DEFAULT_OUTPUT};
use devaids::RenderConfig;

/// Read text on stdin and write a grey-blocked picture of it to flat.png
#[derive(Parser, Debug)]
#[command(name = "grey-blocked-text", author, version, about)]
struct Cli {}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let _cli = Cli::parse();

    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("failed to read text from stdin")?;

    render_text_to_file(&text, &RenderConfig::default(), DEFAULT_OUTPUT)
        .with_context(|| format!("failed to render {DEFAULT_OUTPUT}"))?;

    Ok(())
}
