//! devaids
//!
//! Two small, unrelated developer aids built on one library:
//!
//! - **HTML normalizer** (`normalize`): mirrors a tree of generated
//!   documentation pages into a second tree, rewriting the bits that change
//!   between documentation-generator releases (version comments, permalink
//!   wording, cache-busting query strings, bookkeeping attributes) so two
//!   builds can be compared with a plain `diff -Naur`.
//! - **Text block renderer** (`rendering`): turns text into a picture of
//!   grey rectangles, one per non-space character, for theme screenshots that
//!   show the shape of code without its content.
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let summary = devaids::normalize::normalize_tree("html-0", "html-0a")?;
//! println!("wrote {} files", summary.files_written);
//!
//! let config = devaids::RenderConfig::default();
//! devaids::rendering::render_text_to_file("def f():\n    pass\n", &config, "flat.png")?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

// Documentation-build comparator
#[cfg(feature = "normalize")]
pub mod normalize;

// Grey-blocked text renderer
#[cfg(feature = "render")]
pub mod rendering;

/// Configuration for the block renderer
///
/// The defaults reproduce the look of the editor-theme thumbnails: 12x17
/// pixel character cells, one pixel of leading between rows and a 5 pixel
/// left margin, mid-grey blocks on white.
///
/// # Examples
///
/// ```
/// let cfg = devaids::RenderConfig::default();
/// assert_eq!(cfg.row_stride(), 18);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Width of one character cell in pixels
    pub char_width: u32,
    /// Height of one character cell in pixels
    pub char_height: u32,
    /// Vertical gap between rows in pixels
    pub leading: u32,
    /// Blank columns of pixels left of the first character
    pub left_margin: u32,
    /// Blank rows of pixels above the first line
    pub top_margin: u32,
    /// RGB colour of a character block
    pub block_colour: [u8; 3],
    /// RGB colour of the canvas
    pub background: [u8; 3],
}

impl RenderConfig {
    /// Distance in pixels between the tops of consecutive rows
    pub fn row_stride(&self) -> u32 {
        self.char_height.saturating_add(self.leading)
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            char_width: 12,
            char_height: 17,
            leading: 1,
            left_margin: 5,
            top_margin: 0,
            block_colour: [144, 144, 144],
            background: [255, 255, 255],
        }
    }
}
