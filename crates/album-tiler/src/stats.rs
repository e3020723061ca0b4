use crate::{plan_pages, GenerateMode, TileGeometry};

/// Summary of what a generation run will produce
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumStatistics {
    /// Number of input images
    pub image_count: usize,
    /// Tiles per page for the current geometry
    pub max_per_page: usize,
    /// Pages the plan will produce
    pub page_count: usize,
    /// Images on the final page (0 when no pages are planned)
    pub last_page_fill: usize,
}

/// Predict the shape of a run without composing anything
pub fn calculate_statistics(
    image_count: usize,
    tile: &TileGeometry,
    mode: GenerateMode,
) -> AlbumStatistics {
    let plan = plan_pages(image_count, tile.max_per_page, mode);
    AlbumStatistics {
        image_count,
        max_per_page: tile.max_per_page,
        page_count: plan.len(),
        last_page_fill: plan.last().map(|slice| slice.len).unwrap_or(0),
    }
}
