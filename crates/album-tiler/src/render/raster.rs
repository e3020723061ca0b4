//! `image` + `rusttype` rendering backend
//!
//! Pages are composed on an RGBA buffer: tiles are stretched with
//! `resize_exact` and blitted with `imageops::overlay`, page numbers are
//! rasterized glyph by glyph and alpha-blended onto the page.

use std::io::Cursor;
use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, ImageBuffer, ImageFormat, ImageReader, Rgba, RgbaImage};
use rusttype::{point, Font, Scale};

use super::{Backend, Canvas};
use crate::types::Color;
use crate::{AlbumError, Result};

/// Bold faces commonly present on Linux and macOS hosts, tried in order.
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Bold.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
];

/// Production rendering backend
#[derive(Clone)]
pub struct RasterBackend {
    font: Font<'static>,
}

impl RasterBackend {
    /// Create a backend using the first usable system font
    pub fn new() -> Result<Self> {
        for path in FONT_CANDIDATES {
            let path = Path::new(path);
            if !path.is_file() {
                continue;
            }
            let bytes = std::fs::read(path)?;
            if let Some(font) = Font::try_from_vec(bytes) {
                return Ok(Self { font });
            }
        }
        Err(AlbumError::FontUnavailable)
    }

    /// Create a backend from caller-supplied TTF/OTF bytes
    pub fn with_font_bytes(bytes: Vec<u8>) -> Result<Self> {
        let font = Font::try_from_vec(bytes).ok_or(AlbumError::FontUnavailable)?;
        Ok(Self { font })
    }
}

impl Backend for RasterBackend {
    type Image = DynamicImage;
    type Canvas = RasterCanvas;

    fn new_canvas(&self, width: u32, height: u32, background: Color) -> Result<Self::Canvas> {
        let fill = Rgba([background.r, background.g, background.b, 0xff]);
        Ok(RasterCanvas {
            pixels: ImageBuffer::from_pixel(width, height, fill),
            font: self.font.clone(),
        })
    }

    fn decode(&self, bytes: &[u8]) -> Result<Self::Image> {
        Ok(image::load_from_memory(bytes)?)
    }
}

/// One in-progress page surface
pub struct RasterCanvas {
    pixels: RgbaImage,
    font: Font<'static>,
}

impl Canvas for RasterCanvas {
    type Image = DynamicImage;

    fn draw_image(&mut self, image: &Self::Image, x: i64, y: i64, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        let resized = image.resize_exact(width, height, FilterType::Triangle);
        image::imageops::overlay(&mut self.pixels, &resized.to_rgba8(), x, y);
    }

    fn draw_page_number(
        &mut self,
        text: &str,
        x: i64,
        baseline_y: i64,
        size: u32,
        color: Color,
        align_right: bool,
    ) {
        let scale = Scale::uniform(size as f32);

        // Measure the laid-out extent so right-aligned text grows leftward
        // from the anchor.
        let width = self
            .font
            .layout(text, scale, point(0.0, 0.0))
            .filter_map(|glyph| glyph.pixel_bounding_box())
            .map(|bb| bb.max.x)
            .max()
            .unwrap_or(0);

        let start_x = if align_right { x - width as i64 } else { x };

        let glyphs: Vec<_> = self
            .font
            .layout(text, scale, point(start_x as f32, baseline_y as f32))
            .collect();

        let fill = Rgba([color.r, color.g, color.b, 0xff]);
        let (canvas_w, canvas_h) = (self.pixels.width() as i32, self.pixels.height() as i32);

        for glyph in glyphs {
            if let Some(bb) = glyph.pixel_bounding_box() {
                glyph.draw(|gx, gy, coverage| {
                    let px = bb.min.x + gx as i32;
                    let py = bb.min.y + gy as i32;
                    if px < 0 || py < 0 || px >= canvas_w || py >= canvas_h {
                        return;
                    }
                    let alpha = (coverage * 255.0).round() as u8;
                    let overlay = Rgba([fill[0], fill[1], fill[2], alpha]);
                    blend_pixel(self.pixels.get_pixel_mut(px as u32, py as u32), &overlay);
                });
            }
        }
    }

    fn encode_png(self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        DynamicImage::ImageRgba8(self.pixels).write_to(&mut Cursor::new(&mut out), ImageFormat::Png)?;
        Ok(out)
    }
}

fn blend_pixel(base: &mut Rgba<u8>, overlay: &Rgba<u8>) {
    let alpha = overlay[3] as f32 / 255.0;
    let inv_alpha = 1.0 - alpha;
    for idx in 0..3 {
        base[idx] =
            (overlay[idx] as f32 * alpha + base[idx] as f32 * inv_alpha).round() as u8;
    }
}

/// Height/width ratio of an encoded image, read from its header without a
/// full decode.
pub fn probe_aspect(bytes: &[u8]) -> Result<f64> {
    let (width, height) = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .into_dimensions()?;
    if width == 0 {
        return Err(AlbumError::Config("image has zero width".to_string()));
    }
    Ok(height as f64 / width as f64)
}
