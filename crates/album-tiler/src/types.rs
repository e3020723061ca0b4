use std::fmt;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::{AlbumError, Result};

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 0xff,
        g: 0xff,
        b: 0xff,
    };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` hex string
    pub fn from_hex(hex: &str) -> Result<Color> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(AlbumError::Config(format!("invalid color '{hex}'")));
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).unwrap();
        Ok(Color::new(channel(0), channel(2), channel(4)))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// One input image: its filename plus the undecoded bytes.
///
/// Owned by the caller for the lifetime of a generation run; the compositor
/// only ever reads it.
#[derive(Debug, Clone)]
pub struct ImageAsset {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ImageAsset {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

const IMAGE_EXTS: &[&str] = &["jpg", "jpeg", "png", "gif"];

/// Check whether a path carries a supported image extension
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let ext = ext.to_ascii_lowercase();
            IMAGE_EXTS.contains(&ext.as_str())
        })
}

/// Drop assets whose filenames are not supported image types
pub fn filter_image_assets(assets: Vec<ImageAsset>) -> Vec<ImageAsset> {
    assets
        .into_iter()
        .filter(|asset| is_supported_image(Path::new(&asset.file_name)))
        .collect()
}

/// Generation trigger mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateMode {
    /// Compose only the first page and skip archiving
    SinglePage,
    /// Compose all pages and bundle them into one archive
    FullBatch,
}

/// Cooperative cancellation flag, checked between pages and before each
/// per-image decode.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Err(Cancelled) once the token has been tripped
    pub(crate) fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            Err(AlbumError::Cancelled)
        } else {
            Ok(())
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::*;
    use serde::{Deserialize, Serialize};

    impl Serialize for Color {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(&self.to_string())
        }
    }

    impl<'de> Deserialize<'de> for Color {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            Color::from_hex(&s).map_err(serde::de::Error::custom)
        }
    }
}
