//! A single in-flight blend of one channel.

use crate::channel::{ChannelKind, ChannelValue};
use crate::error::BlendError;

/// Result of advancing a [`Transition`] by one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Still blending; write this interpolated value.
    Running(ChannelValue),
    /// Duration reached; write this exact end value and drop the transition.
    Finished(ChannelValue),
}

impl Step {
    /// Value to write for this step.
    #[must_use]
    pub const fn value(&self) -> ChannelValue {
        match self {
            Self::Running(v) | Self::Finished(v) => *v,
        }
    }

    /// Whether the transition completed on this step.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self, Self::Finished(_))
    }
}

/// Time-based linear blend of one channel from a captured start value to an
/// end value.
///
/// Plain state plus a pure step function: [`advance`](Self::advance) never
/// touches the store, the scheduler writes whatever it returns.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    start: ChannelValue,
    end: ChannelValue,
    duration: f32,
    elapsed: f32,
}

impl Transition {
    /// Transition from `start` to `end` over `duration` seconds.
    ///
    /// `start` and `end` must belong to the same channel and `duration` must
    /// be positive and finite (instant requests never create a transition).
    pub fn new(
        start: ChannelValue,
        end: ChannelValue,
        duration: f32,
    ) -> Result<Self, BlendError> {
        if start.kind() != end.kind() {
            return Err(BlendError::ShapeMismatch { kind: end.kind() });
        }
        debug_assert!(duration > 0.0 && duration.is_finite());
        Ok(Self {
            start,
            end,
            duration,
            elapsed: 0.0,
        })
    }

    /// Channel this transition drives.
    #[must_use]
    pub const fn kind(&self) -> ChannelKind {
        self.end.kind()
    }

    /// Value captured from the store when the transition was created.
    #[must_use]
    pub const fn start(&self) -> &ChannelValue {
        &self.start
    }

    /// Blend-adjusted target.
    #[must_use]
    pub const fn end(&self) -> &ChannelValue {
        &self.end
    }

    /// Total duration in seconds.
    #[must_use]
    pub const fn duration(&self) -> f32 {
        self.duration
    }

    /// Accumulated tick time in seconds.
    #[must_use]
    pub const fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Normalized progress `clamp(elapsed / duration, 0, 1)`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    /// Interpolated value at progress `u`.
    #[must_use]
    pub fn sample(&self, u: f32) -> ChannelValue {
        // Kinds were checked in `new`, so the lerp cannot fail.
        self.start.lerp(&self.end, u).unwrap_or(self.end)
    }

    /// Advance by `dt` seconds and return the value to write.
    ///
    /// Negative or non-finite `dt` counts as zero.
    pub fn advance(&mut self, dt: f32) -> Step {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
        if self.elapsed >= self.duration {
            Step::Finished(self.end)
        } else {
            Step::Running(self.sample(self.progress()))
        }
    }
}
