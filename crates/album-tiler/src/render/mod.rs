//! Rendering capability
//!
//! The compositor only talks to these two traits, so pages can be composed
//! against a fake in-memory canvas in tests and against the `image`-backed
//! [`raster::RasterBackend`] in production.

pub mod raster;

use crate::types::Color;
use crate::Result;

/// Factory for canvases and decoded images
pub trait Backend {
    type Image;
    type Canvas: Canvas<Image = Self::Image>;

    /// Allocate a canvas of the given size, filled with `background`
    fn new_canvas(&self, width: u32, height: u32, background: Color) -> Result<Self::Canvas>;

    /// Decode one image from its raw bytes
    fn decode(&self, bytes: &[u8]) -> Result<Self::Image>;
}

/// One page surface being drawn
pub trait Canvas {
    type Image;

    /// Draw `image` scaled to exactly `width` x `height` with its top-left
    /// corner at `(x, y)`. No aspect correction is applied.
    fn draw_image(&mut self, image: &Self::Image, x: i64, y: i64, width: u32, height: u32);

    /// Render the page number text anchored at `x` on the given baseline.
    /// `align_right` grows the text leftward from `x` instead of rightward.
    fn draw_page_number(
        &mut self,
        text: &str,
        x: i64,
        baseline_y: i64,
        size: u32,
        color: Color,
        align_right: bool,
    );

    /// Consume the surface and encode it as a PNG blob
    fn encode_png(self) -> Result<Vec<u8>>;
}
