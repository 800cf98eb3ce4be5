//! Effect channels: the fixed set of independently blendable parameter
//! groups, their typed values, and per-channel blend-amount resolution.

pub mod color;
mod resolve;
mod value;

use std::fmt;

pub use color::{Color, BLACK, GRAY, NEUTRAL_TRACKBALL, WHITE};
pub use resolve::resolve_target;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use value::ChannelValue;

/// One independently blendable effect parameter group.
///
/// Declaration order is the registry order: within one tick, active
/// transitions advance in this order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    JsonSchema,
)]
pub enum ChannelKind {
    /// Saturation and colour filter.
    ColorAdjustments,
    /// Bloom intensity and threshold.
    Bloom,
    /// Vignette intensity.
    Vignette,
    /// Chromatic aberration intensity.
    ChromaticAberration,
    /// Film grain intensity.
    FilmGrain,
    /// Lens distortion intensity.
    LensDistortion,
    /// Motion blur intensity.
    MotionBlur,
    /// Panini projection distance.
    PaniniProjection,
    /// Depth-of-field focus distance.
    DepthOfField,
    /// White balance temperature and tint.
    WhiteBalance,
    /// Lift, gamma and gain colours.
    LiftGammaGain,
    /// Shadows, midtones and highlights colours.
    ShadowsMidtonesHighlights,
}

impl ChannelKind {
    /// Number of channel kinds.
    pub const COUNT: usize = 12;

    /// Every kind, in registry order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::ColorAdjustments,
        Self::Bloom,
        Self::Vignette,
        Self::ChromaticAberration,
        Self::FilmGrain,
        Self::LensDistortion,
        Self::MotionBlur,
        Self::PaniniProjection,
        Self::DepthOfField,
        Self::WhiteBalance,
        Self::LiftGammaGain,
        Self::ShadowsMidtonesHighlights,
    ];

    /// Slot index of this kind in registry order.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Stable string key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::ColorAdjustments => "ColorAdjustments",
            Self::Bloom => "Bloom",
            Self::Vignette => "Vignette",
            Self::ChromaticAberration => "ChromaticAberration",
            Self::FilmGrain => "FilmGrain",
            Self::LensDistortion => "LensDistortion",
            Self::MotionBlur => "MotionBlur",
            Self::PaniniProjection => "PaniniProjection",
            Self::DepthOfField => "DepthOfField",
            Self::WhiteBalance => "WhiteBalance",
            Self::LiftGammaGain => "LiftGammaGain",
            Self::ShadowsMidtonesHighlights => "ShadowsMidtonesHighlights",
        }
    }

    /// Look a kind up by its [`key`](Self::key).
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }

    /// Neutral live value a freshly added effect component starts with.
    #[must_use]
    pub fn default_value(self) -> ChannelValue {
        match self {
            Self::ColorAdjustments => ChannelValue::ColorAdjustments {
                saturation: 0.0,
                color_filter: WHITE,
            },
            Self::Bloom => ChannelValue::Bloom {
                intensity: 0.0,
                threshold: 0.9,
            },
            Self::Vignette => ChannelValue::Vignette { intensity: 0.0 },
            Self::ChromaticAberration => {
                ChannelValue::ChromaticAberration { intensity: 0.0 }
            }
            Self::FilmGrain => ChannelValue::FilmGrain { intensity: 0.0 },
            Self::LensDistortion => {
                ChannelValue::LensDistortion { intensity: 0.0 }
            }
            Self::MotionBlur => ChannelValue::MotionBlur { intensity: 0.0 },
            Self::PaniniProjection => {
                ChannelValue::PaniniProjection { distance: 0.0 }
            }
            Self::DepthOfField => ChannelValue::DepthOfField {
                focus_distance: 10.0,
            },
            Self::WhiteBalance => ChannelValue::WhiteBalance {
                temperature: 0.0,
                tint: 0.0,
            },
            Self::LiftGammaGain => ChannelValue::LiftGammaGain {
                lift: NEUTRAL_TRACKBALL,
                gamma: NEUTRAL_TRACKBALL,
                gain: NEUTRAL_TRACKBALL,
            },
            Self::ShadowsMidtonesHighlights => {
                ChannelValue::ShadowsMidtonesHighlights {
                    shadows: NEUTRAL_TRACKBALL,
                    midtones: NEUTRAL_TRACKBALL,
                    highlights: NEUTRAL_TRACKBALL,
                }
            }
        }
    }
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
