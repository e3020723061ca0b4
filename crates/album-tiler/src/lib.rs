mod compose;
mod export;
mod layout;
mod options;
mod plan;
pub mod render;
mod stats;
mod template;
mod types;

pub use compose::{compose_page, number_is_right_aligned};
pub use export::{generate, generate_sync, Artifact, GenerateEvent, ARCHIVE_NAME};
pub use layout::{calc_tile, calc_tile_dims, TileGeometry};
pub use options::*;
pub use plan::{plan_pages, PageSlice};
pub use render::raster::{probe_aspect, RasterBackend};
pub use render::{Backend, Canvas};
pub use stats::{calculate_statistics, AlbumStatistics};
pub use template::Template;
pub use types::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AlbumError {
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("archive error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("no tiles fit the page with the current template and options")]
    InvalidLayout,
    #[error("no input images")]
    NoImages,
    #[error("failed to decode '{file_name}': {reason}")]
    Decode { file_name: String, reason: String },
    #[error("failed to encode page {page}: {reason}")]
    Encode { page: usize, reason: String },
    #[error("no usable page-number font found")]
    FontUnavailable,
    #[error("generation cancelled")]
    Cancelled,
}

pub type Result<T> = std::result::Result<T, AlbumError>;
