//! Page size presets
//!
//! A template fixes the raster dimensions of an output page and the safe
//! inset reserved at every edge. The set is static and never mutated at
//! runtime; layout and numbering both anchor off the safe inset.

/// Named page size preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Template {
    #[default]
    A4,
    A5,
    A6,
    B5,
    B6,
}

impl Template {
    /// All presets, in catalog order
    pub fn all() -> &'static [Template] {
        &[
            Template::A4,
            Template::A5,
            Template::A6,
            Template::B5,
            Template::B6,
        ]
    }

    /// Display name of the preset
    pub fn name(self) -> &'static str {
        match self {
            Template::A4 => "A4",
            Template::A5 => "A5",
            Template::A6 => "A6",
            Template::B5 => "B5",
            Template::B6 => "B6",
        }
    }

    /// Page raster dimensions in pixels (width, height)
    pub fn dimensions_px(self) -> (u32, u32) {
        match self {
            Template::A4 => (2976, 4175),
            Template::A5 => (2122, 2976),
            Template::A6 => (1530, 2122),
            Template::B5 => (2591, 3624),
            Template::B6 => (1846, 2591),
        }
    }

    /// Uniform margin reserved at every edge, in pixels.
    ///
    /// Content never enters this band, and page numbers are anchored at
    /// twice this distance from the page edge.
    pub fn safe_inset_px(self) -> u32 {
        match self {
            Template::A4 | Template::A5 | Template::A6 | Template::B5 | Template::B6 => 44,
        }
    }

    /// Look up a preset by its catalog key (case-insensitive)
    pub fn from_key(key: &str) -> Option<Template> {
        match key.to_ascii_lowercase().as_str() {
            "a4" => Some(Template::A4),
            "a5" => Some(Template::A5),
            "a6" => Some(Template::A6),
            "b5" => Some(Template::B5),
            "b6" => Some(Template::B6),
            _ => None,
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::*;
    use serde::{Deserialize, Serialize};

    impl Serialize for Template {
        fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
        where
            S: serde::Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for Template {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            Template::from_key(&s).ok_or_else(|| serde::de::Error::custom("Unknown template"))
        }
    }
}
