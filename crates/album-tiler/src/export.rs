//! Export pipeline
//!
//! Drives the pagination plan through the page compositor and packages the
//! result: a lone `page_1.png` in single-page mode, an `album.zip` archive
//! of `page_<n>.png` entries in batch mode. Progress is reported as status
//! events on a callback; rendering them is the caller's job. The pipeline
//! must not be invoked reentrantly; the caller keeps its trigger disabled
//! while a run is in flight.

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::render::Backend;
use crate::{
    compose_page, plan_pages, AlbumError, CancelToken, GenerateMode, ImageAsset, LayoutOptions,
    Result, TileGeometry,
};

/// Fixed name of the batch-mode archive
pub const ARCHIVE_NAME: &str = "album.zip";

/// Status event emitted while a run progresses. Advisory only; never
/// affects control flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateEvent {
    Started {
        page_count: usize,
    },
    PageFinished {
        page_index: usize,
        page_count: usize,
        percent: u32,
    },
    Finished,
}

/// One downloadable output file
#[derive(Debug, Clone)]
pub struct Artifact {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Run the whole pipeline synchronously.
///
/// Refuses to start on an empty input list or a geometry nothing fits
/// into. Any failure aborts the run as a whole; pages already composed are
/// dropped with the partially built archive.
pub fn generate_sync<B: Backend>(
    backend: &B,
    assets: &[ImageAsset],
    options: &LayoutOptions,
    tile: &TileGeometry,
    mode: GenerateMode,
    cancel: &CancelToken,
    on_event: &mut dyn FnMut(GenerateEvent),
) -> Result<Artifact> {
    if assets.is_empty() {
        return Err(AlbumError::NoImages);
    }
    if tile.max_per_page == 0 {
        return Err(AlbumError::InvalidLayout);
    }

    let plan = plan_pages(assets.len(), tile.max_per_page, mode);
    let page_count = plan.len();
    on_event(GenerateEvent::Started { page_count });

    match mode {
        GenerateMode::SinglePage => {
            // Plan is already truncated to its first page.
            let slice = plan[0];
            let png = compose_page(
                backend,
                options,
                tile,
                &assets[slice.start..slice.end()],
                slice.index,
                cancel,
            )?;
            on_event(GenerateEvent::PageFinished {
                page_index: 0,
                page_count,
                percent: 100,
            });
            on_event(GenerateEvent::Finished);
            Ok(Artifact {
                file_name: page_file_name(0),
                bytes: png,
            })
        }
        GenerateMode::FullBatch => {
            // PNG entries are already compressed, so the archive stores
            // them as-is.
            let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
            let entry_options =
                SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

            for slice in &plan {
                cancel.check()?;
                let png = compose_page(
                    backend,
                    options,
                    tile,
                    &assets[slice.start..slice.end()],
                    slice.index,
                    cancel,
                )?;
                zip.start_file(page_file_name(slice.index), entry_options)?;
                zip.write_all(&png)?;
                on_event(GenerateEvent::PageFinished {
                    page_index: slice.index,
                    page_count,
                    percent: percent_done(slice.index + 1, page_count),
                });
            }

            let bytes = zip.finish()?.into_inner();
            on_event(GenerateEvent::Finished);
            Ok(Artifact {
                file_name: ARCHIVE_NAME.to_string(),
                bytes,
            })
        }
    }
}

/// Async wrapper; composition is CPU-bound, so it runs on the blocking
/// pool with owned copies of the inputs.
pub async fn generate<B, F>(
    backend: B,
    assets: Vec<ImageAsset>,
    options: LayoutOptions,
    tile: TileGeometry,
    mode: GenerateMode,
    cancel: CancelToken,
    mut on_event: F,
) -> Result<Artifact>
where
    B: Backend + Send + 'static,
    F: FnMut(GenerateEvent) + Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        generate_sync(&backend, &assets, &options, &tile, mode, &cancel, &mut on_event)
    })
    .await?
}

/// Deterministic per-page entry name, 1-based
fn page_file_name(page_index: usize) -> String {
    format!("page_{}.png", page_index + 1)
}

fn percent_done(done: usize, total: usize) -> u32 {
    (done as f64 / total as f64 * 100.0).round() as u32
}
