//! Rasterizer: executes paint commands on an RGB canvas

use std::io::Cursor;

use image::{ImageFormat, Rgb, RgbImage};

use crate::rendering::layout::{canvas_size, layout_blocks};
use crate::rendering::paint::{paint_commands, PaintCommand};
use crate::rendering::{Screenshot, TextBlock};
use crate::{Error, RenderConfig, Result};

/// Draw `text` as grey blocks on a fresh canvas.
pub fn rasterize(text: &TextBlock, config: &RenderConfig) -> Result<RgbImage> {
    if config.char_width == 0 || config.char_height == 0 {
        return Err(Error::Render(format!(
            "character cell must be non-empty, got {}x{}",
            config.char_width, config.char_height
        )));
    }

    let size = canvas_size(text, config)?;
    if size.width == 0 || size.height == 0 {
        return Err(Error::Render(format!("degenerate {}x{} canvas", size.width, size.height)));
    }

    let blocks = layout_blocks(text, config)?;
    let mut canvas = RgbImage::new(size.width, size.height);
    for cmd in paint_commands(&blocks, size, config) {
        apply(&mut canvas, &cmd);
    }

    Ok(canvas)
}

/// Encode a canvas as PNG bytes.
pub fn encode_png(canvas: &RgbImage) -> Result<Screenshot> {
    let mut png_data = Vec::new();
    canvas.write_to(&mut Cursor::new(&mut png_data), ImageFormat::Png)?;
    Ok(Screenshot {
        width: canvas.width(),
        height: canvas.height(),
        png_data,
    })
}

// Anything falling outside the canvas is clipped.
fn apply(canvas: &mut RgbImage, cmd: &PaintCommand) {
    match *cmd {
        PaintCommand::SolidRect {
            x,
            y,
            width,
            height,
            rgb,
        } => {
            let x_end = x.saturating_add(width).min(canvas.width());
            let y_end = y.saturating_add(height).min(canvas.height());
            for py in y..y_end {
                for px in x..x_end {
                    canvas.put_pixel(px, py, Rgb(rgb));
                }
            }
        }
        PaintCommand::Pixel { x, y, rgb } => {
            if x < canvas.width() && y < canvas.height() {
                canvas.put_pixel(x, y, Rgb(rgb));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREY: Rgb<u8> = Rgb([144, 144, 144]);
    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

    fn render(text: &str) -> RgbImage {
        rasterize(&TextBlock::from_text(text).unwrap(), &RenderConfig::default()).unwrap()
    }

    #[test]
    fn separated_blocks_have_rounded_outer_corners() {
        let img = render("a b");
        assert_eq!(img.dimensions(), (41, 17));

        // column 0 spans x 5..=16, column 2 spans x 29..=40
        for (x0, x1) in [(5, 16), (29, 40)] {
            for (x, y) in [(x0, 0), (x0, 16), (x1, 0), (x1, 16)] {
                assert_eq!(*img.get_pixel(x, y), WHITE, "corner ({x}, {y})");
            }
            assert_eq!(*img.get_pixel(x0, 1), GREY);
            assert_eq!(*img.get_pixel(x0 + 1, 0), GREY);
            assert_eq!(*img.get_pixel(x1, 8), GREY);
        }

        // the space in column 1 stays blank
        for y in 0..17 {
            for x in 17..29 {
                assert_eq!(*img.get_pixel(x, y), WHITE, "space pixel ({x}, {y})");
            }
        }
        // so does the left margin
        for y in 0..17 {
            for x in 0..5 {
                assert_eq!(*img.get_pixel(x, y), WHITE);
            }
        }
    }

    #[test]
    fn adjacent_blocks_join_into_a_bar() {
        let img = render("ab");
        assert_eq!(*img.get_pixel(16, 0), GREY);
        assert_eq!(*img.get_pixel(17, 0), GREY);
        assert_eq!(*img.get_pixel(16, 16), GREY);
        assert_eq!(*img.get_pixel(5, 0), WHITE);
        assert_eq!(*img.get_pixel(28, 16), WHITE);
    }

    #[test]
    fn leading_row_stays_blank() {
        let img = render("a\na");
        assert_eq!(img.height(), 35);
        for x in 0..img.width() {
            assert_eq!(*img.get_pixel(x, 17), WHITE);
        }
        assert_eq!(*img.get_pixel(10, 18 + 8), GREY);
    }

    #[test]
    fn custom_colours_are_used() {
        let cfg = RenderConfig {
            block_colour: [10, 20, 30],
            background: [0, 0, 0],
            ..Default::default()
        };
        let img = rasterize(&TextBlock::from_text("x").unwrap(), &cfg).unwrap();
        assert_eq!(*img.get_pixel(6, 1), Rgb([10, 20, 30]));
        assert_eq!(*img.get_pixel(5, 0), Rgb([0, 0, 0]));
    }

    #[test]
    fn zero_sized_cells_are_rejected() {
        let cfg = RenderConfig {
            char_width: 0,
            ..Default::default()
        };
        let err = rasterize(&TextBlock::from_text("x").unwrap(), &cfg).unwrap_err();
        assert!(matches!(err, Error::Render(_)));
    }

    #[test]
    fn overflowing_canvas_is_a_render_error() {
        let cfg = RenderConfig {
            char_width: u32::MAX,
            ..Default::default()
        };
        let err = rasterize(&TextBlock::from_text("ab").unwrap(), &cfg).unwrap_err();
        assert!(matches!(err, Error::Render(_)));
    }

    #[test]
    fn encode_png_emits_png_signature() {
        let shot = encode_png(&render("fn main() {}")).unwrap();
        assert_eq!((shot.width, shot.height), (5 + 12 * 12, 17));
        assert_eq!(&shot.png_data[0..8], b"\x89PNG\r\n\x1a\n");
    }
}
