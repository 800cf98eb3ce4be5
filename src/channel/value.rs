use serde::{Deserialize, Serialize};

use super::color::{lerp, lerp_color, Color};
use super::ChannelKind;

/// Live or target value of one channel, tagged by kind.
///
/// Each variant carries exactly the fields the host store owns for that
/// effect, so a value always knows which channel it belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ChannelValue {
    /// Colour adjustments.
    ColorAdjustments {
        /// Saturation, typically -100..100.
        saturation: f32,
        /// Multiplicative colour filter.
        color_filter: Color,
    },
    /// Bloom.
    Bloom {
        /// Bloom intensity.
        intensity: f32,
        /// Brightness threshold.
        threshold: f32,
    },
    /// Vignette.
    Vignette {
        /// Vignette intensity, 0..1.
        intensity: f32,
    },
    /// Chromatic aberration.
    ChromaticAberration {
        /// Aberration intensity, 0..1.
        intensity: f32,
    },
    /// Film grain.
    FilmGrain {
        /// Grain intensity, 0..1.
        intensity: f32,
    },
    /// Lens distortion.
    LensDistortion {
        /// Distortion intensity, -1..1.
        intensity: f32,
    },
    /// Motion blur.
    MotionBlur {
        /// Blur intensity, 0..1.
        intensity: f32,
    },
    /// Panini projection.
    PaniniProjection {
        /// Projection distance, 0..1.
        distance: f32,
    },
    /// Depth of field.
    DepthOfField {
        /// Focus distance in world units.
        focus_distance: f32,
    },
    /// White balance.
    WhiteBalance {
        /// Colour temperature shift.
        temperature: f32,
        /// Green/magenta tint shift.
        tint: f32,
    },
    /// Lift / gamma / gain.
    LiftGammaGain {
        /// Shadow lift.
        lift: Color,
        /// Midtone gamma.
        gamma: Color,
        /// Highlight gain.
        gain: Color,
    },
    /// Shadows / midtones / highlights.
    ShadowsMidtonesHighlights {
        /// Shadow colour.
        shadows: Color,
        /// Midtone colour.
        midtones: Color,
        /// Highlight colour.
        highlights: Color,
    },
}

impl ChannelValue {
    /// Channel this value belongs to.
    #[must_use]
    pub const fn kind(&self) -> ChannelKind {
        match self {
            Self::ColorAdjustments { .. } => ChannelKind::ColorAdjustments,
            Self::Bloom { .. } => ChannelKind::Bloom,
            Self::Vignette { .. } => ChannelKind::Vignette,
            Self::ChromaticAberration { .. } => {
                ChannelKind::ChromaticAberration
            }
            Self::FilmGrain { .. } => ChannelKind::FilmGrain,
            Self::LensDistortion { .. } => ChannelKind::LensDistortion,
            Self::MotionBlur { .. } => ChannelKind::MotionBlur,
            Self::PaniniProjection { .. } => ChannelKind::PaniniProjection,
            Self::DepthOfField { .. } => ChannelKind::DepthOfField,
            Self::WhiteBalance { .. } => ChannelKind::WhiteBalance,
            Self::LiftGammaGain { .. } => ChannelKind::LiftGammaGain,
            Self::ShadowsMidtonesHighlights { .. } => {
                ChannelKind::ShadowsMidtonesHighlights
            }
        }
    }

    /// Field-wise linear interpolation from `self` to `end`.
    ///
    /// Scalars lerp linearly, colours lerp component-wise. Returns `None`
    /// when the two values belong to different channels.
    #[must_use]
    pub fn lerp(&self, end: &Self, t: f32) -> Option<Self> {
        use ChannelValue as V;

        let value = match (*self, *end) {
            (
                V::ColorAdjustments {
                    saturation: s0,
                    color_filter: c0,
                },
                V::ColorAdjustments {
                    saturation: s1,
                    color_filter: c1,
                },
            ) => V::ColorAdjustments {
                saturation: lerp(s0, s1, t),
                color_filter: lerp_color(c0, c1, t),
            },
            (
                V::Bloom {
                    intensity: i0,
                    threshold: th0,
                },
                V::Bloom {
                    intensity: i1,
                    threshold: th1,
                },
            ) => V::Bloom {
                intensity: lerp(i0, i1, t),
                threshold: lerp(th0, th1, t),
            },
            (V::Vignette { intensity: a }, V::Vignette { intensity: b }) => {
                V::Vignette {
                    intensity: lerp(a, b, t),
                }
            }
            (
                V::ChromaticAberration { intensity: a },
                V::ChromaticAberration { intensity: b },
            ) => V::ChromaticAberration {
                intensity: lerp(a, b, t),
            },
            (V::FilmGrain { intensity: a }, V::FilmGrain { intensity: b }) => {
                V::FilmGrain {
                    intensity: lerp(a, b, t),
                }
            }
            (
                V::LensDistortion { intensity: a },
                V::LensDistortion { intensity: b },
            ) => V::LensDistortion {
                intensity: lerp(a, b, t),
            },
            (V::MotionBlur { intensity: a }, V::MotionBlur { intensity: b }) => {
                V::MotionBlur {
                    intensity: lerp(a, b, t),
                }
            }
            (
                V::PaniniProjection { distance: a },
                V::PaniniProjection { distance: b },
            ) => V::PaniniProjection {
                distance: lerp(a, b, t),
            },
            (
                V::DepthOfField { focus_distance: a },
                V::DepthOfField { focus_distance: b },
            ) => V::DepthOfField {
                focus_distance: lerp(a, b, t),
            },
            (
                V::WhiteBalance {
                    temperature: te0,
                    tint: ti0,
                },
                V::WhiteBalance {
                    temperature: te1,
                    tint: ti1,
                },
            ) => V::WhiteBalance {
                temperature: lerp(te0, te1, t),
                tint: lerp(ti0, ti1, t),
            },
            (
                V::LiftGammaGain {
                    lift: l0,
                    gamma: g0,
                    gain: n0,
                },
                V::LiftGammaGain {
                    lift: l1,
                    gamma: g1,
                    gain: n1,
                },
            ) => V::LiftGammaGain {
                lift: lerp_color(l0, l1, t),
                gamma: lerp_color(g0, g1, t),
                gain: lerp_color(n0, n1, t),
            },
            (
                V::ShadowsMidtonesHighlights {
                    shadows: s0,
                    midtones: m0,
                    highlights: h0,
                },
                V::ShadowsMidtonesHighlights {
                    shadows: s1,
                    midtones: m1,
                    highlights: h1,
                },
            ) => V::ShadowsMidtonesHighlights {
                shadows: lerp_color(s0, s1, t),
                midtones: lerp_color(m0, m1, t),
                highlights: lerp_color(h0, h1, t),
            },
            _ => return None,
        };
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec4;

    use super::*;
    use crate::channel::{BLACK, GRAY, WHITE};

    #[test]
    fn scalar_lerp_midpoint() {
        let a = ChannelValue::DepthOfField {
            focus_distance: 10.0,
        };
        let b = ChannelValue::DepthOfField {
            focus_distance: 20.0,
        };
        assert_eq!(
            a.lerp(&b, 0.5),
            Some(ChannelValue::DepthOfField {
                focus_distance: 15.0
            })
        );
    }

    #[test]
    fn colour_triple_lerps_each_field() {
        let a = ChannelValue::LiftGammaGain {
            lift: BLACK,
            gamma: BLACK,
            gain: BLACK,
        };
        let b = ChannelValue::LiftGammaGain {
            lift: WHITE,
            gamma: GRAY,
            gain: Vec4::new(1.0, 0.0, 0.0, 1.0),
        };
        let Some(ChannelValue::LiftGammaGain { lift, gamma, gain }) =
            a.lerp(&b, 0.5)
        else {
            unreachable!("lerp of matching kinds yields the same kind");
        };
        assert!((lift - Vec4::new(0.5, 0.5, 0.5, 1.0)).length() < 1e-6);
        assert!((gamma - Vec4::new(0.25, 0.25, 0.25, 1.0)).length() < 1e-6);
        assert!((gain - Vec4::new(0.5, 0.0, 0.0, 1.0)).length() < 1e-6);
    }

    #[test]
    fn mismatched_kinds_do_not_lerp() {
        let a = ChannelValue::Vignette { intensity: 0.2 };
        let b = ChannelValue::FilmGrain { intensity: 0.2 };
        assert_eq!(a.lerp(&b, 0.5), None);
    }

    #[test]
    fn lerp_endpoints_are_exact() {
        let a = ChannelValue::WhiteBalance {
            temperature: -12.3,
            tint: 4.56,
        };
        let b = ChannelValue::WhiteBalance {
            temperature: 33.3,
            tint: -7.7,
        };
        assert_eq!(a.lerp(&b, 0.0), Some(a));
        assert_eq!(a.lerp(&b, 1.0), Some(b));
    }

    #[test]
    fn serializes_with_kind_tag() {
        let v = ChannelValue::Vignette { intensity: 0.5 };
        let json = serde_json::to_value(v).unwrap();
        assert_eq!(json["kind"], "Vignette");
        assert_eq!(json["intensity"], 0.5);
    }
}
