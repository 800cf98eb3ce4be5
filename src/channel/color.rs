//! RGBA colour type and the scalar/colour lerp used by every channel.

use glam::Vec4;

/// Linear RGBA colour. Alpha participates in interpolation like any other
/// component.
pub type Color = Vec4;

/// Opaque white, the neutral colour filter.
pub const WHITE: Color = Vec4::ONE;
/// Opaque black.
pub const BLACK: Color = Vec4::new(0.0, 0.0, 0.0, 1.0);
/// Opaque 50% gray.
pub const GRAY: Color = Vec4::new(0.5, 0.5, 0.5, 1.0);
/// Neutral trackball value for lift/gamma/gain and
/// shadows/midtones/highlights (white, zero weight).
pub const NEUTRAL_TRACKBALL: Color = Vec4::new(1.0, 1.0, 1.0, 0.0);

/// Linear interpolation between two scalars.
///
/// Written as `a·(1−t) + b·t` so both endpoints are reproduced exactly.
#[inline]
#[must_use]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Component-wise linear interpolation between two colours.
#[inline]
#[must_use]
pub fn lerp_color(a: Color, b: Color, t: f32) -> Color {
    a * (1.0 - t) + b * t
}

/// Clamp a blend amount to `[0, 1]`. NaN maps to 0.
#[inline]
#[must_use]
pub fn clamp01(v: f32) -> f32 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_hits_endpoints_exactly() {
        assert_eq!(lerp(0.1, 0.3, 0.0), 0.1);
        assert_eq!(lerp(0.1, 0.3, 1.0), 0.3);
        assert_eq!(lerp(-100.0, 37.25, 1.0), 37.25);
    }

    #[test]
    fn lerp_color_is_component_wise() {
        let mid = lerp_color(BLACK, WHITE, 0.5);
        assert!((mid - Vec4::new(0.5, 0.5, 0.5, 1.0)).length() < 1e-6);
        assert_eq!(lerp_color(GRAY, NEUTRAL_TRACKBALL, 1.0), NEUTRAL_TRACKBALL);
    }

    #[test]
    fn clamp01_handles_out_of_range_and_nan() {
        assert_eq!(clamp01(-0.5), 0.0);
        assert_eq!(clamp01(1.5), 1.0);
        assert_eq!(clamp01(0.25), 0.25);
        assert_eq!(clamp01(f32::NAN), 0.0);
    }
}
