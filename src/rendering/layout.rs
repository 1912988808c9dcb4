//! Character-cell layout for the block renderer

use crate::rendering::TextBlock;
use crate::{Error, RenderConfig, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Rightmost pixel column covered by the rectangle
    pub fn right(&self) -> u32 {
        self.x + self.width.saturating_sub(1)
    }

    /// Bottom pixel row covered by the rectangle
    pub fn bottom(&self) -> u32 {
        self.y + self.height.saturating_sub(1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

/// One grey block standing in for a non-space character.
///
/// `open_left` / `open_right` mark sides that face a space or a line end;
/// the corners on those sides are left unpainted so runs of blocks read as
/// words rather than one bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockPlacement {
    pub row: usize,
    pub col: usize,
    pub rect: Rect,
    pub open_left: bool,
    pub open_right: bool,
}

/// Canvas dimensions for `text`: the widest line sets the width, and every
/// row but the last is followed by `leading` pixels.
///
/// Fails with [`Error::Render`] when the canvas would not fit in `u32` pixels.
pub fn canvas_size(text: &TextBlock, config: &RenderConfig) -> Result<CanvasSize> {
    let width = u32::try_from(text.max_line_len())
        .ok()
        .and_then(|cols| cols.checked_mul(config.char_width))
        .and_then(|w| w.checked_add(config.left_margin));
    let height = u32::try_from(text.line_count())
        .ok()
        .zip(config.char_height.checked_add(config.leading))
        .and_then(|(rows, stride)| rows.checked_mul(stride))
        .and_then(|h| h.checked_add(config.top_margin))
        .map(|h| h.saturating_sub(config.leading));

    match (width, height) {
        (Some(width), Some(height)) => Ok(CanvasSize { width, height }),
        _ => Err(Error::Render(format!(
            "{} lines of up to {} characters overflow the canvas",
            text.line_count(),
            text.max_line_len()
        ))),
    }
}

// Top-left pixel of the cell at (row, col), if it is addressable.
fn cell_origin(row: usize, col: usize, config: &RenderConfig) -> Option<(u32, u32)> {
    let x = u32::try_from(col)
        .ok()?
        .checked_mul(config.char_width)?
        .checked_add(config.left_margin)?;
    let y = u32::try_from(row)
        .ok()?
        .checked_mul(config.char_height.checked_add(config.leading)?)?
        .checked_add(config.top_margin)?;
    Some((x, y))
}

/// Place a block for every non-space character of `text`.
pub fn layout_blocks(text: &TextBlock, config: &RenderConfig) -> Result<Vec<BlockPlacement>> {
    let mut blocks = Vec::new();

    for (row, line) in text.lines().iter().enumerate() {
        for (col, &ch) in line.iter().enumerate() {
            if ch == ' ' {
                continue;
            }
            let open_left = col == 0 || line[col - 1] == ' ';
            let open_right = col + 1 == line.len() || line[col + 1] == ' ';
            let (x, y) = cell_origin(row, col, config).ok_or_else(|| {
                Error::Render(format!("cell at line {}, column {} is off the canvas", row + 1, col + 1))
            })?;

            blocks.push(BlockPlacement {
                row,
                col,
                rect: Rect {
                    x,
                    y,
                    width: config.char_width,
                    height: config.char_height,
                },
                open_left,
                open_right,
            });
        }
    }

    Ok(blocks)
}
