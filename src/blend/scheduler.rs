//! Blend scheduler: starts, advances and stops per-channel transitions.
//!
//! All work happens on the caller's thread. Instant requests write the store
//! before [`BlendScheduler::request`] returns; timed requests register a
//! [`Transition`] that [`BlendScheduler::tick`] advances once per host frame.

use super::registry::ChannelRegistry;
use super::transition::{Step, Transition};
use crate::channel::{ChannelKind, ChannelValue};
use crate::error::BlendError;
use crate::store::EffectStore;

/// What a request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    /// The end value was written synchronously.
    Applied,
    /// A transition was registered and will be advanced by `tick`.
    Started,
}

/// Owns the [`ChannelRegistry`] and drives its transitions against a store.
#[derive(Debug, Clone, Default)]
pub struct BlendScheduler {
    registry: ChannelRegistry,
}

impl BlendScheduler {
    /// Scheduler with no active transitions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request that `end`'s channel move to `end` over `duration` seconds.
    ///
    /// Any active transition on the channel is cancelled first, so the start
    /// value is always the live value. `duration <= 0` (or non-finite)
    /// writes `end` immediately without creating a transition.
    pub fn request<S: EffectStore + ?Sized>(
        &mut self,
        store: &mut S,
        end: ChannelValue,
        duration: f32,
    ) -> Result<RequestOutcome, BlendError> {
        let kind = end.kind();
        if let Some(old) = self.registry.cancel(kind) {
            log::debug!(
                "{kind}: cancelled blend at {:.2}/{:.2}s",
                old.elapsed(),
                old.duration()
            );
        }

        let start = store.get(kind).ok_or(BlendError::MissingBinding(kind))?;

        if duration <= 0.0 || !duration.is_finite() {
            store.set(end)?;
            log::debug!("{kind}: applied instantly");
            return Ok(RequestOutcome::Applied);
        }

        let transition = Transition::new(start, end, duration)?;
        let _ = self.registry.insert(transition);
        log::debug!("{kind}: blending over {duration:.2}s");
        Ok(RequestOutcome::Started)
    }

    /// Advance every active transition by `dt` seconds, in registry order,
    /// writing each channel's new value into `store`.
    ///
    /// Completed transitions write their exact end value and are removed.
    /// A transition whose write fails (its channel vanished from the store)
    /// is dropped. Returns the number of transitions that completed.
    pub fn tick<S: EffectStore + ?Sized>(
        &mut self,
        store: &mut S,
        dt: f32,
    ) -> usize {
        let mut completed = 0;
        self.registry.retain(|transition| {
            let step = transition.advance(dt);
            if let Err(e) = store.set(step.value()) {
                log::warn!("{}: dropping blend, {e}", transition.kind());
                return false;
            }
            match step {
                Step::Running(_) => true,
                Step::Finished(_) => {
                    log::debug!("{}: blend complete", transition.kind());
                    completed += 1;
                    false
                }
            }
        });
        completed
    }

    /// Cancel every active transition without writing pending end values.
    /// Returns how many were cancelled.
    pub fn stop_all(&mut self) -> usize {
        self.registry.clear()
    }

    /// Cancel the transition on `kind`, leaving the live value where the
    /// last tick put it.
    pub fn cancel(&mut self, kind: ChannelKind) -> Option<Transition> {
        self.registry.cancel(kind)
    }

    /// Read-only view of the registry.
    #[must_use]
    pub const fn registry(&self) -> &ChannelRegistry {
        &self.registry
    }

    /// Whether `kind` is currently blending.
    #[must_use]
    pub fn is_blending(&self, kind: ChannelKind) -> bool {
        self.registry.is_active(kind)
    }

    /// Channels currently blending, in registry order.
    #[must_use]
    pub fn active_channels(&self) -> Vec<ChannelKind> {
        self.registry.active_channels()
    }
}
