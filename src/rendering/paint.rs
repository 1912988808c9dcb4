//! Paint command list for the block renderer

use crate::rendering::layout::{BlockPlacement, CanvasSize};
use crate::RenderConfig;

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    SolidRect {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        rgb: [u8; 3],
    },
    Pixel {
        x: u32,
        y: u32,
        rgb: [u8; 3],
    },
}

/// Turn block placements into drawing operations, in painting order.
///
/// The first command clears the canvas. Each block whose top edge lies on
/// the canvas then becomes a filled rectangle followed by background pixels
/// at the corners of its open sides.
pub fn paint_commands(
    blocks: &[BlockPlacement],
    canvas: CanvasSize,
    config: &RenderConfig,
) -> Vec<PaintCommand> {
    let mut commands = vec![PaintCommand::SolidRect {
        x: 0,
        y: 0,
        width: canvas.width,
        height: canvas.height,
        rgb: config.background,
    }];

    for block in blocks.iter().filter(|b| b.rect.y < canvas.height) {
        let r = block.rect;
        commands.push(PaintCommand::SolidRect {
            x: r.x,
            y: r.y,
            width: r.width,
            height: r.height,
            rgb: config.block_colour,
        });

        let mut corner = |x, y| {
            commands.push(PaintCommand::Pixel {
                x,
                y,
                rgb: config.background,
            })
        };
        if block.open_left {
            corner(r.x, r.y);
            corner(r.x, r.bottom());
        }
        if block.open_right {
            corner(r.right(), r.y);
            corner(r.right(), r.bottom());
        }
    }

    commands
}
