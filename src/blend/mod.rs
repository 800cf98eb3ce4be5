//! Per-channel blending: transitions, the channel registry, and the
//! scheduler that advances them once per host frame.

pub mod registry;
pub mod scheduler;
pub mod transition;

pub use registry::ChannelRegistry;
pub use scheduler::{BlendScheduler, RequestOutcome};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use transition::{Step, Transition};

/// How strongly and how fast a request should move a channel.
///
/// `amount` is clamped to `[0, 1]` when the request is resolved; a
/// `duration` of zero or less applies the request instantly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[schemars(inline)]
#[serde(default)]
pub struct Blend {
    /// Blend amount, 0..1.
    #[schemars(title = "Blend Amount", range(min = 0.0, max = 1.0), extend("step" = 0.05))]
    pub amount: f32,
    /// Duration in seconds.
    #[schemars(title = "Duration", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub duration: f32,
}

impl Blend {
    /// Full-strength instant apply.
    pub const INSTANT: Self = Self {
        amount: 1.0,
        duration: 0.0,
    };

    /// Full-strength instant apply.
    #[must_use]
    pub const fn instant() -> Self {
        Self::INSTANT
    }

    /// Full-strength blend over `duration` seconds.
    #[must_use]
    pub const fn over(duration: f32) -> Self {
        Self {
            amount: 1.0,
            duration,
        }
    }

    /// Same timing with a different blend amount.
    #[must_use]
    pub const fn with_amount(mut self, amount: f32) -> Self {
        self.amount = amount;
        self
    }

    /// Whether this blend is applied without a transition.
    #[must_use]
    pub fn is_instant(&self) -> bool {
        self.duration <= 0.0 || !self.duration.is_finite()
    }
}

impl Default for Blend {
    fn default() -> Self {
        Self::INSTANT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_full_instant() {
        let blend = Blend::default();
        assert_eq!(blend.amount, 1.0);
        assert!(blend.is_instant());
    }

    #[test]
    fn builders() {
        let blend = Blend::over(2.0).with_amount(0.5);
        assert_eq!(blend.amount, 0.5);
        assert_eq!(blend.duration, 2.0);
        assert!(!blend.is_instant());
        assert!(Blend::over(-1.0).is_instant());
    }
}
