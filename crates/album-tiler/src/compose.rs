//! Page composition
//!
//! One call composes one page: fill the surface, draw each tile in slice
//! order, stamp the page number, encode. Decoding is strictly sequential
//! and each decoded image is dropped before the next decode begins, so at
//! most one decoded image is resident beyond the page surface itself.

use crate::render::{Backend, Canvas};
use crate::{AlbumError, CancelToken, ImageAsset, LayoutOptions, NumberCorner, Result, TileGeometry};

/// Compose one page and return its encoded PNG bytes.
///
/// `page_assets` is this page's contiguous slice of the input sequence and
/// `page_index` its 0-based position in the run; the displayed number is
/// `number_start + page_index`.
pub fn compose_page<B: Backend>(
    backend: &B,
    options: &LayoutOptions,
    tile: &TileGeometry,
    page_assets: &[ImageAsset],
    page_index: usize,
    cancel: &CancelToken,
) -> Result<Vec<u8>> {
    let (page_width, page_height) = options.template.dimensions_px();
    let inset = options.template.safe_inset_px() as i64;
    let mut canvas = backend.new_canvas(page_width, page_height, options.background)?;

    let origin_x = inset + options.padding_x as i64;
    let origin_y = (inset + options.padding_y as i64) as f64;
    let tile_height_px = tile.tile_height_px();

    for (i, asset) in page_assets.iter().enumerate() {
        cancel.check()?;

        let col = (i % options.columns as usize) as i64;
        let row = (i / options.columns as usize) as f64;

        let x = origin_x + col * (tile.tile_width as i64 + options.column_gap as i64);
        let y = origin_y + row * (tile.tile_height + options.row_gap as f64);

        let image = backend.decode(&asset.bytes).map_err(|e| AlbumError::Decode {
            file_name: asset.file_name.clone(),
            reason: e.to_string(),
        })?;
        canvas.draw_image(&image, x, y.round() as i64, tile.tile_width, tile_height_px);
        // `image` dropped here; next decode only starts afterwards
    }

    stamp_page_number(&mut canvas, options, page_index, page_width, page_height, inset);

    canvas.encode_png().map_err(|e| AlbumError::Encode {
        page: page_index + 1,
        reason: e.to_string(),
    })
}

/// True when the number on `page_index` sits in the right-bottom corner.
/// The corner alternates by page parity starting from the configured one.
pub fn number_is_right_aligned(corner: NumberCorner, page_index: usize) -> bool {
    (page_index % 2 == 0) == (corner == NumberCorner::RightBottom)
}

fn stamp_page_number<C: Canvas>(
    canvas: &mut C,
    options: &LayoutOptions,
    page_index: usize,
    page_width: u32,
    page_height: u32,
    inset: i64,
) {
    let is_right = number_is_right_aligned(options.number_corner, page_index);
    let x = if is_right {
        page_width as i64 - inset * 2
    } else {
        inset * 2
    };
    let baseline_y = page_height as i64 - inset * 2;
    let text = (options.number_start as usize + page_index).to_string();

    canvas.draw_page_number(
        &text,
        x,
        baseline_y,
        options.number_size,
        options.number_color,
        is_right,
    );
}
