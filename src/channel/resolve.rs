//! Blend-amount resolution: turning a requested target into the end value a
//! transition actually heads for.
//!
//! The blend amount is applied once, at request time, as an extra lerp
//! between the live value and the requested target. Two channels deviate:
//!
//! - **Bloom intensity** scales the target by the blend amount before the
//!   lerp: `lerp(current, target · b, b)`.
//! - **Colour filter** blends from neutral white rather than from the live
//!   filter: `lerp(WHITE, tint, b)`.
//!
//! Both are kept as-is for compatibility with existing presets.

use super::color::{clamp01, lerp, lerp_color, WHITE};
use super::ChannelValue;
use crate::error::BlendError;

/// Resolve the end value for a request on `target`'s channel, given the
/// channel's live value `current` and a blend amount (clamped to `[0, 1]`).
pub fn resolve_target(
    current: &ChannelValue,
    target: &ChannelValue,
    blend_amount: f32,
) -> Result<ChannelValue, BlendError> {
    let b = clamp01(blend_amount);

    match (*current, *target) {
        (
            ChannelValue::ColorAdjustments {
                saturation: current_saturation,
                ..
            },
            ChannelValue::ColorAdjustments {
                saturation,
                color_filter,
            },
        ) => Ok(ChannelValue::ColorAdjustments {
            saturation: lerp(current_saturation, saturation, b),
            color_filter: lerp_color(WHITE, color_filter, b),
        }),
        (
            ChannelValue::Bloom {
                intensity: current_intensity,
                threshold: current_threshold,
            },
            ChannelValue::Bloom {
                intensity,
                threshold,
            },
        ) => Ok(ChannelValue::Bloom {
            intensity: lerp(current_intensity, intensity * b, b),
            threshold: lerp(current_threshold, threshold, b),
        }),
        _ => current.lerp(target, b).ok_or(BlendError::ShapeMismatch {
            kind: target.kind(),
        }),
    }
}
