//! Grey-blocked text renderer
//!
//! Turns text into a bitmap where every non-space character is a grey
//! rectangle: the silhouette of a code listing with none of its content.
//! The pipeline is layout (cells) -> paint (commands) -> raster (pixels).

pub mod layout;
pub mod paint;
pub mod raster;

use std::fs;
use std::path::Path;

use log::info;

use crate::{Error, RenderConfig, Result};
use layout::CanvasSize;

/// File the `grey-blocked-text` tool writes into the working directory
pub const DEFAULT_OUTPUT: &str = "flat.png";

/// Text prepared for rendering: trailing whitespace stripped from the whole
/// input and from every line, lines split into characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock {
    lines: Vec<Vec<char>>,
}

impl TextBlock {
    /// Prepare `text` for rendering. Input with nothing but whitespace is
    /// rejected with [`Error::EmptyInput`].
    pub fn from_text(text: &str) -> Result<Self> {
        let text = text.trim_end();
        if text.is_empty() {
            return Err(Error::EmptyInput);
        }
        let lines = text
            .split('\n')
            .map(|line| line.trim_end().chars().collect())
            .collect();
        Ok(Self { lines })
    }

    pub fn lines(&self) -> &[Vec<char>] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Length in characters of the longest line
    pub fn max_line_len(&self) -> usize {
        self.lines.iter().map(Vec::len).max().unwrap_or(0)
    }
}

/// An encoded image together with its dimensions
#[derive(Debug, Clone)]
pub struct Screenshot {
    pub width: u32,
    pub height: u32,
    pub png_data: Vec<u8>,
}

/// Render `text` and write the PNG to `path`, replacing any existing file.
pub fn render_text_to_file(
    text: &str,
    config: &RenderConfig,
    path: impl AsRef<Path>,
) -> Result<CanvasSize> {
    let path = path.as_ref();
    let block = TextBlock::from_text(text)?;
    let canvas = raster::rasterize(&block, config)?;
    let shot = raster::encode_png(&canvas)?;

    fs::write(path, &shot.png_data).map_err(|e| Error::io(path, e))?;
    info!(
        "Rendered {} lines into {}x{} image at {}",
        block.line_count(),
        shot.width,
        shot.height,
        path.display()
    );

    Ok(CanvasSize {
        width: shot.width,
        height: shot.height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_whitespace_everywhere() {
        let block = TextBlock::from_text("def f():   \n    pass\t\n\n\n").unwrap();
        assert_eq!(block.line_count(), 2);
        assert_eq!(block.lines()[0].len(), 8);
        assert_eq!(block.max_line_len(), 8);
    }

    #[test]
    fn keeps_interior_blank_lines_and_crlf() {
        let block = TextBlock::from_text("a\r\n\r\nbb\r\n").unwrap();
        assert_eq!(block.line_count(), 3);
        assert!(block.lines()[1].is_empty());
        assert_eq!(block.lines()[2], vec!['b', 'b']);
    }

    #[test]
    fn counts_characters_not_bytes() {
        let block = TextBlock::from_text("é→x").unwrap();
        assert_eq!(block.max_line_len(), 3);
    }

    #[test]
    fn rejects_blank_input() {
        assert!(matches!(TextBlock::from_text(""), Err(Error::EmptyInput)));
        assert!(matches!(TextBlock::from_text("  \n\t\n"), Err(Error::EmptyInput)));
    }
}
