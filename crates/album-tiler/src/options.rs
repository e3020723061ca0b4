use crate::types::Color;
use crate::Template;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which bottom corner page number 1 starts in; subsequent pages
/// alternate by parity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberCorner {
    LeftBottom,
    #[default]
    RightBottom,
}

/// User-tunable layout parameters
///
/// All numeric fields carry documented minimums (columns and the numbering
/// block ≥ 1, gaps and paddings ≥ 0). Clamping happens once, via
/// [`LayoutOptions::normalized`], at the boundary where raw input enters
/// the system; the layout and compositing code assumes it already ran.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayoutOptions {
    pub template: Template,

    // Grid
    pub columns: u32,
    pub row_gap: u32,
    pub column_gap: u32,
    pub padding_y: u32,
    pub padding_x: u32,
    pub background: Color,

    // Page numbering
    pub number_start: u32,
    pub number_corner: NumberCorner,
    pub number_size: u32,
    pub number_color: Color,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            template: Template::A4,
            columns: 2,
            row_gap: 32,
            column_gap: 32,
            padding_y: 100,
            padding_x: 100,
            background: Color::WHITE,
            number_start: 1,
            number_corner: NumberCorner::RightBottom,
            number_size: 36,
            number_color: Color::new(0x6c, 0x6c, 0x6c),
        }
    }
}

impl LayoutOptions {
    /// Clamp every numeric field to its documented minimum.
    ///
    /// `u32` fields already exclude negatives, so only the ≥ 1 fields need
    /// fixing up here.
    pub fn normalized(mut self) -> Self {
        self.columns = self.columns.max(1);
        self.number_start = self.number_start.max(1);
        self.number_size = self.number_size.max(1);
        self
    }

    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options: LayoutOptions = serde_json::from_slice(&bytes)
            .map_err(|e| crate::AlbumError::Config(format!("Failed to parse config: {e}")))?;
        Ok(options.normalized())
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> crate::Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| crate::AlbumError::Config(format!("Failed to serialize config: {e}")))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::*;

    impl Serialize for NumberCorner {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(match self {
                NumberCorner::LeftBottom => "left-bottom",
                NumberCorner::RightBottom => "right-bottom",
            })
        }
    }

    impl<'de> Deserialize<'de> for NumberCorner {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            match s.as_str() {
                "left-bottom" => Ok(NumberCorner::LeftBottom),
                "right-bottom" => Ok(NumberCorner::RightBottom),
                _ => Err(serde::de::Error::custom("Unknown number corner")),
            }
        }
    }
}
