//! Caption rendering onto a raster canvas.
//!
//! The caption is drawn with a fixed 8x8 monospace bitmap face in a fixed
//! orange (`RGB 200,100,0`), starting at the canvas origin. Text running past
//! the right or bottom edge is clipped; nothing wraps.

use font8x8::{BASIC_FONTS, LATIN_FONTS, UnicodeFonts};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

/// Foreground color for caption text.
pub const CAPTION_COLOR: Rgba<u8> = Rgba([200, 100, 0, 255]);

/// How the canvas is prepared before the caption is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// A fresh transparent canvas with the source bounds; source pixels are not copied.
    #[default]
    Blank,
    /// Start from a copy of the source pixels.
    Composite,
}

/// Something that can draw a line of text onto an RGBA canvas.
pub trait TextRenderer {
    /// Draw `text` with the top-left of its first cell at `origin`.
    fn draw_text(&self, canvas: &mut RgbaImage, color: Rgba<u8>, origin: (u32, u32), text: &str);
}

/// The `font8x8` monospace bitmap face.
///
/// Characters outside the basic and Latin-1 tables leave a blank cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct Font8x8Face;

impl Font8x8Face {
    const CELL: u32 = 8;

    fn glyph(c: char) -> Option<[u8; 8]> {
        BASIC_FONTS.get(c).or_else(|| LATIN_FONTS.get(c))
    }
}

impl TextRenderer for Font8x8Face {
    fn draw_text(&self, canvas: &mut RgbaImage, color: Rgba<u8>, origin: (u32, u32), text: &str) {
        let (width, height) = canvas.dimensions();
        let (ox, oy) = origin;

        for (i, c) in text.chars().enumerate() {
            let Some(cell_x) = u32::try_from(i)
                .ok()
                .and_then(|i| i.checked_mul(Self::CELL))
                .and_then(|dx| ox.checked_add(dx))
            else {
                break;
            };
            if cell_x >= width {
                break;
            }
            let Some(rows) = Self::glyph(c) else {
                continue;
            };

            for (dy, row) in (0u32..).zip(rows) {
                let y = oy.saturating_add(dy);
                if y >= height {
                    break;
                }
                for dx in 0..Self::CELL {
                    let x = cell_x + dx;
                    // Bit 0 is the leftmost column.
                    if x < width && row & (1 << dx) != 0 {
                        canvas.put_pixel(x, y, color);
                    }
                }
            }
        }
    }
}

/// A rendered caption canvas, owned by the caller once returned.
#[derive(Debug, Clone)]
pub struct AnnotatedCanvas {
    image: RgbaImage,
}

impl AnnotatedCanvas {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Encode the canvas to `path`, picking the format from its extension.
    ///
    /// JPEG has no alpha channel, so JPEG destinations are flattened to RGB.
    pub fn save(&self, path: &Path) -> Result<()> {
        let format = ImageFormat::from_path(path)?;
        if format == ImageFormat::Jpeg {
            DynamicImage::ImageRgba8(self.image.clone())
                .to_rgb8()
                .save_with_format(path, format)?;
        } else {
            self.image.save_with_format(path, format)?;
        }
        log::info!("Annotated image written to {}", path.display());
        Ok(())
    }
}

/// Draws captions onto canvases sized to a source image.
#[derive(Debug, Clone)]
pub struct ImageAnnotator<R = Font8x8Face> {
    renderer: R,
    mode: RenderMode,
}

impl ImageAnnotator {
    pub fn new(mode: RenderMode) -> Self {
        Self::with_renderer(Font8x8Face, mode)
    }
}

impl<R: TextRenderer> ImageAnnotator<R> {
    pub fn with_renderer(renderer: R, mode: RenderMode) -> Self {
        Self { renderer, mode }
    }

    /// Allocate a canvas with the bounds of `source` and draw `caption` at (0, 0).
    pub fn annotate(&self, source: &DynamicImage, caption: &str) -> AnnotatedCanvas {
        let mut image = match self.mode {
            RenderMode::Blank => RgbaImage::new(source.width(), source.height()),
            RenderMode::Composite => source.to_rgba8(),
        };
        self.renderer
            .draw_text(&mut image, CAPTION_COLOR, (0, 0), caption);
        log::debug!(
            "Drew {} caption chars on {}x{} canvas ({:?})",
            caption.chars().count(),
            image.width(),
            image.height(),
            self.mode
        );
        AnnotatedCanvas { image }
    }
}
