//! Tile layout calculation
//!
//! This module derives the uniform grid geometry for a run: how large each
//! tile is and how many tiles fit on one page. The calculation is pure and
//! total over its numeric domain; impossible layouts resolve to
//! `max_per_page = 0` rather than an error.

use crate::{LayoutOptions, Template};

/// Derived grid geometry for one template/options/aspect combination.
///
/// Recomputed whenever any input changes; never persisted. Every tile in a
/// run shares these dimensions, so images whose native aspect differs from
/// the reference will be stretched to fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileGeometry {
    /// Tile width in whole pixels
    pub tile_width: u32,
    /// Tile height in pixels; fractional because it is derived from the
    /// reference aspect ratio and only rounded at draw time
    pub tile_height: f64,
    /// Tiles that fit on one page; 0 means no valid layout
    pub max_per_page: usize,
}

impl TileGeometry {
    /// Tile height rounded to whole pixels for rasterization
    pub fn tile_height_px(&self) -> u32 {
        if self.tile_height > 0.0 {
            self.tile_height.round().max(1.0) as u32
        } else {
            0
        }
    }
}

/// Compute the tile grid for a template, options, and reference aspect
/// ratio (height/width of the representative image, normally the first one
/// added).
///
/// Options are assumed to be [normalized](LayoutOptions::normalized).
pub fn calc_tile(template: Template, options: &LayoutOptions, reference_aspect: f64) -> TileGeometry {
    let (width, height) = template.dimensions_px();
    calc_tile_dims(width, height, template.safe_inset_px(), options, reference_aspect)
}

/// Same computation against explicit page dimensions instead of a catalog
/// preset.
pub fn calc_tile_dims(
    page_width: u32,
    page_height: u32,
    safe_inset: u32,
    options: &LayoutOptions,
    reference_aspect: f64,
) -> TileGeometry {
    let inset = safe_inset as i64;
    let content_w = page_width as i64 - inset * 2 - options.padding_x as i64 * 2;
    let content_h = page_height as i64 - inset * 2 - options.padding_y as i64 * 2;

    let columns = options.columns as i64;
    let column_gaps = (columns - 1).max(0);
    let tile_width =
        ((content_w - options.column_gap as i64 * column_gaps) as f64 / columns as f64).floor();
    let tile_width = if tile_width > 0.0 { tile_width as u32 } else { 0 };

    let tile_height = tile_width as f64 * reference_aspect;

    // Guard the division: a zero or non-finite tile height means nothing
    // stacks, not a poisoned result.
    let rows = if tile_height > 0.0 && tile_height.is_finite() && content_h > 0 {
        let ungapped_rows = (content_h as f64 / tile_height).floor();
        let row_gaps = (ungapped_rows - 1.0).max(0.0);
        let rows = ((content_h as f64 - options.row_gap as f64 * row_gaps) / tile_height).floor();
        if rows > 0.0 { rows as usize } else { 0 }
    } else {
        0
    };

    TileGeometry {
        tile_width,
        tile_height,
        max_per_page: options.columns as usize * rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LayoutOptions;

    fn bare_options(columns: u32) -> LayoutOptions {
        LayoutOptions {
            columns,
            row_gap: 0,
            column_gap: 0,
            padding_y: 0,
            padding_x: 0,
            ..Default::default()
        }
    }

    #[test]
    fn test_two_columns_reference_grid() {
        // 2000x3000 content area, no inset, no gaps: two 1000px columns
        // and three 1000px rows.
        let tile = calc_tile_dims(2000, 3000, 0, &bare_options(2), 1.0);

        assert_eq!(tile.tile_width, 1000);
        assert_eq!(tile.tile_height, 1000.0);
        assert_eq!(tile.max_per_page, 6);
    }

    #[test]
    fn test_two_columns_square_tiles() {
        // A6 is 1530x2122 with a 44px inset: content area 1442x2034.
        let tile = calc_tile(Template::A6, &bare_options(2), 1.0);

        assert_eq!(tile.tile_width, 721);
        assert_eq!(tile.tile_height, 721.0);
        // floor(2034 / 721) = 2 rows
        assert_eq!(tile.max_per_page, 4);
    }

    #[test]
    fn test_gaps_shrink_tiles_and_rows() {
        let mut options = bare_options(2);
        options.column_gap = 100;
        options.row_gap = 600;

        let tile = calc_tile(Template::A6, &options, 1.0);

        // (1442 - 100) / 2 = 671
        assert_eq!(tile.tile_width, 671);
        // Three rows fit ungapped, but two 600px gaps leave only
        // floor((2034 - 1200) / 671) = 1 row
        assert_eq!(tile.max_per_page, 2);
    }

    #[test]
    fn test_tall_aspect_reduces_rows() {
        let tile = calc_tile(Template::A6, &bare_options(2), 2.5);

        assert_eq!(tile.tile_width, 721);
        assert_eq!(tile.tile_height, 721.0 * 2.5);
        // floor(2034 / 1802.5) = 1 row
        assert_eq!(tile.max_per_page, 2);
    }

    #[test]
    fn test_zero_aspect_yields_no_layout() {
        let tile = calc_tile(Template::A4, &bare_options(2), 0.0);

        assert_eq!(tile.tile_height, 0.0);
        assert_eq!(tile.max_per_page, 0);
    }

    #[test]
    fn test_oversized_padding_yields_no_layout() {
        let mut options = bare_options(2);
        options.padding_x = 10_000;
        options.padding_y = 10_000;

        let tile = calc_tile(Template::A4, &options, 1.0);

        assert_eq!(tile.tile_width, 0);
        assert_eq!(tile.max_per_page, 0);
    }

    #[test]
    fn test_deterministic() {
        let options = bare_options(3);
        let a = calc_tile(Template::B5, &options, 1.4142);
        let b = calc_tile(Template::B5, &options, 1.4142);
        assert_eq!(a, b);
    }
}
