//! Shared types and enums used across TEXPAD.
//! Includes the `ColorMode` channel-layout enumeration and the `FileOutcome`
//! classification returned by per-file processing.
use serde::{Deserialize, Serialize};

/// Channel layouts the PNG codec can hand us, statically mapped to their
/// channel count and fill-value rule. Palette PNGs are expanded to
/// `Rgb8`/`Rgba8` by the codec before they reach us.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum ColorMode {
    L8,
    La8,
    Rgb8,
    Rgba8,
    L16,
    La16,
    Rgb16,
    Rgba16,
}

impl ColorMode {
    pub fn from_color_type(color: image::ColorType) -> Option<Self> {
        match color {
            image::ColorType::L8 => Some(ColorMode::L8),
            image::ColorType::La8 => Some(ColorMode::La8),
            image::ColorType::Rgb8 => Some(ColorMode::Rgb8),
            image::ColorType::Rgba8 => Some(ColorMode::Rgba8),
            image::ColorType::L16 => Some(ColorMode::L16),
            image::ColorType::La16 => Some(ColorMode::La16),
            image::ColorType::Rgb16 => Some(ColorMode::Rgb16),
            image::ColorType::Rgba16 => Some(ColorMode::Rgba16),
            _ => None,
        }
    }

    pub fn channel_count(self) -> u8 {
        match self {
            ColorMode::L8 | ColorMode::L16 => 1,
            ColorMode::La8 | ColorMode::La16 => 2,
            ColorMode::Rgb8 | ColorMode::Rgb16 => 3,
            ColorMode::Rgba8 | ColorMode::Rgba16 => 4,
        }
    }

    /// Modes with an alpha channel are filled with per-channel zero
    /// (fully transparent black); the rest with scalar zero (black).
    pub fn has_alpha(self) -> bool {
        matches!(
            self,
            ColorMode::La8 | ColorMode::Rgba8 | ColorMode::La16 | ColorMode::Rgba16
        )
    }
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ColorMode::L8 => "L8",
            ColorMode::La8 => "LA8",
            ColorMode::Rgb8 => "RGB8",
            ColorMode::Rgba8 => "RGBA8",
            ColorMode::L16 => "L16",
            ColorMode::La16 => "LA16",
            ColorMode::Rgb16 => "RGB16",
            ColorMode::Rgba16 => "RGBA16",
        };
        write!(f, "{}", s)
    }
}

/// What happened to a single candidate file. Decode failures are absorbed
/// into `Skipped` rather than raised, making the skip-and-continue policy
/// explicit at the type level.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum FileOutcome {
    Saved,
    Skipped,
}
