//! Per-effect apply methods for [`PostFxEngine`].
//!
//! Each call builds the channel's target value and forwards it to
//! [`PostFxEngine::apply`] with the given [`Blend`].

use super::PostFxEngine;
use crate::blend::Blend;
use crate::channel::{ChannelValue, Color};
use crate::store::EffectStore;

/// Saturation sentinel older configurations used for "no explicit target".
///
/// [`PostFxEngine::apply_color_tint`] takes the saturation target as a
/// required argument; passing this value drives saturation to -100.
pub const UNSET_SATURATION: f32 = -100.0;

// ── Colour grading ──

impl<S: EffectStore> PostFxEngine<S> {
    /// Blend the colour filter toward `tint` and saturation toward
    /// `saturation`.
    ///
    /// The filter blends from neutral white by the blend amount; saturation
    /// blends from its live value.
    pub fn apply_color_tint(&mut self, tint: Color, saturation: f32, blend: Blend) {
        self.apply(
            ChannelValue::ColorAdjustments {
                saturation,
                color_filter: tint,
            },
            blend,
        );
    }

    /// Blend white balance toward `temperature` / `tint`.
    pub fn apply_white_balance(&mut self, temperature: f32, tint: f32, blend: Blend) {
        self.apply(ChannelValue::WhiteBalance { temperature, tint }, blend);
    }

    /// Blend lift, gamma and gain colours.
    pub fn apply_lift_gamma_gain(
        &mut self,
        lift: Color,
        gamma: Color,
        gain: Color,
        blend: Blend,
    ) {
        self.apply(ChannelValue::LiftGammaGain { lift, gamma, gain }, blend);
    }

    /// Blend shadows, midtones and highlights colours.
    pub fn apply_smh(
        &mut self,
        shadows: Color,
        midtones: Color,
        highlights: Color,
        blend: Blend,
    ) {
        self.apply(
            ChannelValue::ShadowsMidtonesHighlights {
                shadows,
                midtones,
                highlights,
            },
            blend,
        );
    }
}

// ── Lens and screen effects ──

impl<S: EffectStore> PostFxEngine<S> {
    /// Blend bloom intensity and threshold.
    ///
    /// The intensity target is scaled by the blend amount before blending
    /// (`lerp(current, intensity · amount, amount)`).
    pub fn apply_bloom(&mut self, intensity: f32, threshold: f32, blend: Blend) {
        self.apply(
            ChannelValue::Bloom {
                intensity,
                threshold,
            },
            blend,
        );
    }

    /// Blend vignette intensity.
    pub fn apply_vignette(&mut self, intensity: f32, blend: Blend) {
        self.apply(ChannelValue::Vignette { intensity }, blend);
    }

    /// Blend chromatic aberration intensity.
    pub fn apply_chromatic(&mut self, intensity: f32, blend: Blend) {
        self.apply(ChannelValue::ChromaticAberration { intensity }, blend);
    }

    /// Blend film grain intensity.
    pub fn apply_film_grain(&mut self, intensity: f32, blend: Blend) {
        self.apply(ChannelValue::FilmGrain { intensity }, blend);
    }

    /// Blend lens distortion intensity.
    pub fn apply_lens_distortion(&mut self, intensity: f32, blend: Blend) {
        self.apply(ChannelValue::LensDistortion { intensity }, blend);
    }

    /// Blend motion blur intensity.
    pub fn apply_motion_blur(&mut self, intensity: f32, blend: Blend) {
        self.apply(ChannelValue::MotionBlur { intensity }, blend);
    }

    /// Blend panini projection distance.
    pub fn apply_panini_projection(&mut self, distance: f32, blend: Blend) {
        self.apply(ChannelValue::PaniniProjection { distance }, blend);
    }

    /// Blend depth-of-field focus distance.
    pub fn apply_dof_focus(&mut self, focus_distance: f32, blend: Blend) {
        self.apply(ChannelValue::DepthOfField { focus_distance }, blend);
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec4;

    use super::*;
    use crate::channel::{ChannelKind, BLACK, GRAY, WHITE};
    use crate::store::EffectProfile;

    fn engine() -> PostFxEngine<EffectProfile> {
        PostFxEngine::new(EffectProfile::with_defaults())
    }

    #[test]
    fn half_blend_vignette_is_synchronous() {
        let mut engine = engine();
        engine.apply_vignette(0.2, Blend::instant());
        engine.apply_vignette(0.8, Blend::instant().with_amount(0.5));

        let Some(ChannelValue::Vignette { intensity }) =
            engine.value(ChannelKind::Vignette)
        else {
            unreachable!();
        };
        assert!((intensity - 0.5).abs() < 1e-6);
    }

    #[test]
    fn instant_full_blend_is_exact_for_every_effect() {
        let mut engine = engine();
        let tint = Vec4::new(0.8, 0.6, 0.4, 1.0);
        engine.apply_color_tint(tint, 12.5, Blend::instant());
        engine.apply_bloom(2.7, 1.1, Blend::instant());
        engine.apply_vignette(0.33, Blend::instant());
        engine.apply_chromatic(0.17, Blend::instant());
        engine.apply_film_grain(0.41, Blend::instant());
        engine.apply_lens_distortion(-0.3, Blend::instant());
        engine.apply_motion_blur(0.9, Blend::instant());
        engine.apply_panini_projection(0.7, Blend::instant());
        engine.apply_dof_focus(4.2, Blend::instant());
        engine.apply_white_balance(-15.0, 3.3, Blend::instant());
        engine.apply_lift_gamma_gain(BLACK, GRAY, WHITE, Blend::instant());
        engine.apply_smh(WHITE, BLACK, GRAY, Blend::instant());

        let expected = [
            ChannelValue::ColorAdjustments {
                saturation: 12.5,
                color_filter: tint,
            },
            ChannelValue::Bloom {
                intensity: 2.7,
                threshold: 1.1,
            },
            ChannelValue::Vignette { intensity: 0.33 },
            ChannelValue::ChromaticAberration { intensity: 0.17 },
            ChannelValue::FilmGrain { intensity: 0.41 },
            ChannelValue::LensDistortion { intensity: -0.3 },
            ChannelValue::MotionBlur { intensity: 0.9 },
            ChannelValue::PaniniProjection { distance: 0.7 },
            ChannelValue::DepthOfField {
                focus_distance: 4.2,
            },
            ChannelValue::WhiteBalance {
                temperature: -15.0,
                tint: 3.3,
            },
            ChannelValue::LiftGammaGain {
                lift: BLACK,
                gamma: GRAY,
                gain: WHITE,
            },
            ChannelValue::ShadowsMidtonesHighlights {
                shadows: WHITE,
                midtones: BLACK,
                highlights: GRAY,
            },
        ];
        for value in expected {
            assert_eq!(engine.value(value.kind()), Some(value));
        }
        assert!(!engine.is_any_blending());
    }

    #[test]
    fn timed_color_tint_blends_filter_and_saturation() {
        let mut engine = engine();
        let red = Vec4::new(1.0, 0.0, 0.0, 1.0);
        engine.apply_color_tint(red, -50.0, Blend::over(1.0));
        let _ = engine.tick(0.5);

        let Some(ChannelValue::ColorAdjustments {
            saturation,
            color_filter,
        }) = engine.value(ChannelKind::ColorAdjustments)
        else {
            unreachable!();
        };
        assert!((saturation + 25.0).abs() < 1e-5);
        assert!((color_filter - Vec4::new(1.0, 0.5, 0.5, 1.0)).length() < 1e-6);

        let _ = engine.tick(0.5);
        assert_eq!(
            engine.value(ChannelKind::ColorAdjustments),
            Some(ChannelValue::ColorAdjustments {
                saturation: -50.0,
                color_filter: red,
            })
        );
    }

    #[test]
    #[allow(unused_qualifications)] // exercises the public re-export path
    fn unset_saturation_drives_toward_sentinel() {
        let mut engine = engine();
        engine.apply_color_tint(
            WHITE,
            crate::engine::UNSET_SATURATION,
            Blend::instant(),
        );
        assert_eq!(
            engine.value(ChannelKind::ColorAdjustments),
            Some(ChannelValue::ColorAdjustments {
                saturation: -100.0,
                color_filter: WHITE,
            })
        );
    }
}
