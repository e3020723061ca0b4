//! Pagination planning
//!
//! Partitions the input sequence into per-page slices. The partition is
//! pure: slices are disjoint, ordered, and cover `[0, n)` exactly, so no
//! image is skipped or duplicated. Single-page mode is modeled as the same
//! plan truncated to its first page, so the compositing loop has no mode
//! branch of its own.

use crate::GenerateMode;

/// One page's share of the input sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSlice {
    /// 0-based page index
    pub index: usize,
    /// Offset of the first image on this page
    pub start: usize,
    /// Number of images on this page
    pub len: usize,
}

impl PageSlice {
    /// One-past-the-end offset
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Plan the pages for `image_count` images at `max_per_page` tiles each.
///
/// A `max_per_page` of 0 yields an empty plan regardless of the image
/// count; callers treat that as "no valid layout".
pub fn plan_pages(image_count: usize, max_per_page: usize, mode: GenerateMode) -> Vec<PageSlice> {
    if max_per_page == 0 {
        return Vec::new();
    }

    let page_count = match mode {
        GenerateMode::SinglePage => 1,
        GenerateMode::FullBatch => image_count.div_ceil(max_per_page),
    };

    (0..page_count)
        .map(|index| {
            let start = index * max_per_page;
            let end = (start + max_per_page).min(image_count);
            PageSlice {
                index,
                start,
                len: end.saturating_sub(start),
            }
        })
        .collect()
}
