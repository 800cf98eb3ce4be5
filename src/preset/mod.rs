//! Presets: immutable records of per-effect enable flags and target values.
//!
//! A [`Preset`] is plain data. [`channel_targets`] decomposes it into one
//! target per enabled channel, and [`PresetList`] is the ordered collection
//! an engine applies presets from by index.

mod applicator;
mod list;

pub use applicator::channel_targets;
use glam::Vec4;
pub use list::PresetList;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::channel::{ChannelKind, ChannelValue, Color, BLACK, GRAY, WHITE};

/// Target values for a subset of channels, each gated by a `use_*` flag.
///
/// Channels whose flag is unset are left untouched when the preset is
/// applied.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Post-Process Preset")]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct Preset {
    /// Display name.
    #[schemars(title = "Name")]
    pub name: String,

    /// Apply colour tint and saturation.
    #[schemars(title = "Color Adjustments")]
    pub use_color_adjustments: bool,
    /// Colour filter target.
    #[schemars(title = "Color Tint", with = "[f32; 4]")]
    pub color_tint: Color,
    /// Saturation target.
    #[schemars(title = "Saturation", range(min = -100.0, max = 100.0), extend("step" = 1.0))]
    pub saturation: f32,

    /// Apply bloom.
    #[schemars(title = "Bloom")]
    pub use_bloom: bool,
    /// Bloom intensity target.
    #[schemars(title = "Bloom Intensity", range(min = 0.0, max = 20.0), extend("step" = 0.1))]
    pub bloom_intensity: f32,
    /// Bloom threshold target.
    #[schemars(title = "Bloom Threshold", range(min = 0.0, max = 5.0), extend("step" = 0.05))]
    pub bloom_threshold: f32,

    /// Apply vignette.
    #[schemars(title = "Vignette")]
    pub use_vignette: bool,
    /// Vignette intensity target.
    #[schemars(title = "Vignette Intensity", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub vignette_intensity: f32,

    /// Apply chromatic aberration.
    #[schemars(title = "Chromatic Aberration")]
    pub use_chromatic: bool,
    /// Chromatic aberration intensity target.
    #[schemars(title = "Chromatic Intensity", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub chromatic_intensity: f32,

    /// Apply film grain.
    #[schemars(title = "Film Grain")]
    pub use_film_grain: bool,
    /// Film grain intensity target.
    #[schemars(title = "Film Grain Intensity", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub film_grain_intensity: f32,

    /// Apply lens distortion.
    #[schemars(title = "Lens Distortion")]
    pub use_lens_distortion: bool,
    /// Lens distortion intensity target.
    #[schemars(title = "Lens Distortion Intensity", range(min = -1.0, max = 1.0), extend("step" = 0.01))]
    pub lens_distortion_intensity: f32,

    /// Apply motion blur.
    #[schemars(title = "Motion Blur")]
    pub use_motion_blur: bool,
    /// Motion blur intensity target.
    #[schemars(title = "Motion Blur Intensity", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub motion_blur_intensity: f32,

    /// Apply panini projection.
    #[schemars(title = "Panini Projection")]
    pub use_panini: bool,
    /// Panini projection distance target.
    #[schemars(title = "Panini Distance", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub panini_distance: f32,

    /// Apply depth of field.
    #[schemars(title = "Depth of Field")]
    pub use_dof: bool,
    /// Focus distance target.
    #[schemars(title = "Focus Distance", range(min = 0.1, max = 100.0), extend("step" = 0.1))]
    pub dof_focus_distance: f32,

    /// Apply white balance.
    #[schemars(title = "White Balance")]
    pub use_white_balance: bool,
    /// Temperature target.
    #[schemars(title = "Temperature", range(min = -100.0, max = 100.0), extend("step" = 1.0))]
    pub white_balance_temperature: f32,
    /// Tint target.
    #[schemars(title = "Tint", range(min = -100.0, max = 100.0), extend("step" = 1.0))]
    pub white_balance_tint: f32,

    /// Apply lift/gamma/gain.
    #[schemars(title = "Lift Gamma Gain")]
    pub use_lift_gamma_gain: bool,
    /// Lift target.
    #[schemars(title = "Lift", with = "[f32; 4]")]
    pub lift: Color,
    /// Gamma target.
    #[schemars(title = "Gamma", with = "[f32; 4]")]
    pub gamma: Color,
    /// Gain target.
    #[schemars(title = "Gain", with = "[f32; 4]")]
    pub gain: Color,

    /// Apply shadows/midtones/highlights.
    #[schemars(title = "Shadows Midtones Highlights")]
    pub use_smh: bool,
    /// Shadows target.
    #[schemars(title = "Shadows", with = "[f32; 4]")]
    pub shadows: Color,
    /// Midtones target.
    #[schemars(title = "Midtones", with = "[f32; 4]")]
    pub midtones: Color,
    /// Highlights target.
    #[schemars(title = "Highlights", with = "[f32; 4]")]
    pub highlights: Color,
}

impl Default for Preset {
    fn default() -> Self {
        Self {
            name: String::new(),
            use_color_adjustments: false,
            color_tint: WHITE,
            saturation: 0.0,
            use_bloom: false,
            bloom_intensity: 1.0,
            bloom_threshold: 1.0,
            use_vignette: false,
            vignette_intensity: 0.3,
            use_chromatic: false,
            chromatic_intensity: 0.1,
            use_film_grain: false,
            film_grain_intensity: 0.1,
            use_lens_distortion: false,
            lens_distortion_intensity: 0.0,
            use_motion_blur: false,
            motion_blur_intensity: 0.5,
            use_panini: false,
            panini_distance: 1.0,
            use_dof: false,
            dof_focus_distance: 10.0,
            use_white_balance: false,
            white_balance_temperature: 0.0,
            white_balance_tint: 0.0,
            use_lift_gamma_gain: false,
            lift: BLACK,
            gamma: GRAY,
            gain: WHITE,
            use_smh: false,
            shadows: BLACK,
            midtones: GRAY,
            highlights: WHITE,
        }
    }
}

impl Preset {
    /// Empty preset (every channel disabled) with a name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Generate JSON Schema describing the preset fields for tool UIs.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Preset)
    }

    /// Whether the preset drives `kind`.
    #[must_use]
    pub const fn uses(&self, kind: ChannelKind) -> bool {
        match kind {
            ChannelKind::ColorAdjustments => self.use_color_adjustments,
            ChannelKind::Bloom => self.use_bloom,
            ChannelKind::Vignette => self.use_vignette,
            ChannelKind::ChromaticAberration => self.use_chromatic,
            ChannelKind::FilmGrain => self.use_film_grain,
            ChannelKind::LensDistortion => self.use_lens_distortion,
            ChannelKind::MotionBlur => self.use_motion_blur,
            ChannelKind::PaniniProjection => self.use_panini,
            ChannelKind::DepthOfField => self.use_dof,
            ChannelKind::WhiteBalance => self.use_white_balance,
            ChannelKind::LiftGammaGain => self.use_lift_gamma_gain,
            ChannelKind::ShadowsMidtonesHighlights => self.use_smh,
        }
    }

    /// Stored target for `kind`, regardless of its `use_*` flag.
    #[must_use]
    pub const fn target(&self, kind: ChannelKind) -> ChannelValue {
        match kind {
            ChannelKind::ColorAdjustments => ChannelValue::ColorAdjustments {
                saturation: self.saturation,
                color_filter: self.color_tint,
            },
            ChannelKind::Bloom => ChannelValue::Bloom {
                intensity: self.bloom_intensity,
                threshold: self.bloom_threshold,
            },
            ChannelKind::Vignette => ChannelValue::Vignette {
                intensity: self.vignette_intensity,
            },
            ChannelKind::ChromaticAberration => {
                ChannelValue::ChromaticAberration {
                    intensity: self.chromatic_intensity,
                }
            }
            ChannelKind::FilmGrain => ChannelValue::FilmGrain {
                intensity: self.film_grain_intensity,
            },
            ChannelKind::LensDistortion => ChannelValue::LensDistortion {
                intensity: self.lens_distortion_intensity,
            },
            ChannelKind::MotionBlur => ChannelValue::MotionBlur {
                intensity: self.motion_blur_intensity,
            },
            ChannelKind::PaniniProjection => ChannelValue::PaniniProjection {
                distance: self.panini_distance,
            },
            ChannelKind::DepthOfField => ChannelValue::DepthOfField {
                focus_distance: self.dof_focus_distance,
            },
            ChannelKind::WhiteBalance => ChannelValue::WhiteBalance {
                temperature: self.white_balance_temperature,
                tint: self.white_balance_tint,
            },
            ChannelKind::LiftGammaGain => ChannelValue::LiftGammaGain {
                lift: self.lift,
                gamma: self.gamma,
                gain: self.gain,
            },
            ChannelKind::ShadowsMidtonesHighlights => {
                ChannelValue::ShadowsMidtonesHighlights {
                    shadows: self.shadows,
                    midtones: self.midtones,
                    highlights: self.highlights,
                }
            }
        }
    }

    /// Enable `value`'s channel and store `value` as its target.
    #[must_use]
    pub fn with_target(mut self, value: ChannelValue) -> Self {
        match value {
            ChannelValue::ColorAdjustments {
                saturation,
                color_filter,
            } => {
                self.use_color_adjustments = true;
                self.saturation = saturation;
                self.color_tint = color_filter;
            }
            ChannelValue::Bloom {
                intensity,
                threshold,
            } => {
                self.use_bloom = true;
                self.bloom_intensity = intensity;
                self.bloom_threshold = threshold;
            }
            ChannelValue::Vignette { intensity } => {
                self.use_vignette = true;
                self.vignette_intensity = intensity;
            }
            ChannelValue::ChromaticAberration { intensity } => {
                self.use_chromatic = true;
                self.chromatic_intensity = intensity;
            }
            ChannelValue::FilmGrain { intensity } => {
                self.use_film_grain = true;
                self.film_grain_intensity = intensity;
            }
            ChannelValue::LensDistortion { intensity } => {
                self.use_lens_distortion = true;
                self.lens_distortion_intensity = intensity;
            }
            ChannelValue::MotionBlur { intensity } => {
                self.use_motion_blur = true;
                self.motion_blur_intensity = intensity;
            }
            ChannelValue::PaniniProjection { distance } => {
                self.use_panini = true;
                self.panini_distance = distance;
            }
            ChannelValue::DepthOfField { focus_distance } => {
                self.use_dof = true;
                self.dof_focus_distance = focus_distance;
            }
            ChannelValue::WhiteBalance { temperature, tint } => {
                self.use_white_balance = true;
                self.white_balance_temperature = temperature;
                self.white_balance_tint = tint;
            }
            ChannelValue::LiftGammaGain { lift, gamma, gain } => {
                self.use_lift_gamma_gain = true;
                self.lift = lift;
                self.gamma = gamma;
                self.gain = gain;
            }
            ChannelValue::ShadowsMidtonesHighlights {
                shadows,
                midtones,
                highlights,
            } => {
                self.use_smh = true;
                self.shadows = shadows;
                self.midtones = midtones;
                self.highlights = highlights;
            }
        }
        self
    }
}

/// Warm cinematic look used by the demo driver.
#[must_use]
pub fn warm_film() -> Preset {
    Preset::named("Warm Film")
        .with_target(ChannelValue::ColorAdjustments {
            saturation: 10.0,
            color_filter: Vec4::new(1.0, 0.92, 0.8, 1.0),
        })
        .with_target(ChannelValue::Bloom {
            intensity: 1.5,
            threshold: 0.9,
        })
        .with_target(ChannelValue::Vignette { intensity: 0.35 })
        .with_target(ChannelValue::FilmGrain { intensity: 0.25 })
        .with_target(ChannelValue::WhiteBalance {
            temperature: 20.0,
            tint: 5.0,
        })
}

/// Cold, desaturated look used by the demo driver.
#[must_use]
pub fn cold_noir() -> Preset {
    Preset::named("Cold Noir")
        .with_target(ChannelValue::ColorAdjustments {
            saturation: -80.0,
            color_filter: Vec4::new(0.85, 0.9, 1.0, 1.0),
        })
        .with_target(ChannelValue::Vignette { intensity: 0.55 })
        .with_target(ChannelValue::ChromaticAberration { intensity: 0.2 })
        .with_target(ChannelValue::WhiteBalance {
            temperature: -30.0,
            tint: 0.0,
        })
}

/// Dreamy soft-focus look used by the demo driver.
#[must_use]
pub fn dream() -> Preset {
    Preset::named("Dream")
        .with_target(ChannelValue::Bloom {
            intensity: 4.0,
            threshold: 0.6,
        })
        .with_target(ChannelValue::DepthOfField {
            focus_distance: 3.0,
        })
        .with_target(ChannelValue::LensDistortion { intensity: -0.2 })
        .with_target(ChannelValue::PaniniProjection { distance: 0.3 })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_preset_uses_nothing() {
        let preset = Preset::default();
        for kind in ChannelKind::ALL {
            assert!(!preset.uses(kind), "{kind} should be disabled");
        }
    }

    #[test]
    fn with_target_round_trips_through_target() {
        for kind in ChannelKind::ALL {
            let value = kind.default_value();
            let preset = Preset::default().with_target(value);
            assert!(preset.uses(kind));
            assert_eq!(preset.target(kind), value);
        }
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
name = "Bloomy"
use_bloom = true
bloom_intensity = 5.0
"#;
        let preset: Preset = toml::from_str(toml_str).unwrap();
        assert_eq!(preset.name, "Bloomy");
        assert!(preset.use_bloom);
        assert_eq!(preset.bloom_intensity, 5.0);
        assert_eq!(preset.bloom_threshold, 1.0);
        assert_eq!(preset.vignette_intensity, 0.3);
        assert_eq!(preset.gamma, GRAY);
    }

    #[test]
    fn schema_exposes_flags_and_colours() {
        let schema_value = serde_json::to_value(Preset::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();
        assert!(props.contains_key("use_bloom"));
        assert!(props.contains_key("bloom_intensity"));
        assert_eq!(props["lift"]["type"], "array");
    }

    #[test]
    fn demo_presets_are_named_and_non_empty() {
        for preset in [warm_film(), cold_noir(), dream()] {
            assert!(!preset.name.is_empty());
            assert!(!channel_targets(&preset).is_empty());
        }
    }
}
