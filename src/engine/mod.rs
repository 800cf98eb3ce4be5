//! The post-processing blend engine.

mod effects;
mod presets;

pub use effects::UNSET_SATURATION;

use crate::blend::{Blend, BlendScheduler, RequestOutcome};
use crate::channel::{resolve_target, ChannelKind, ChannelValue};
use crate::error::BlendError;
use crate::preset::PresetList;
use crate::store::{ChannelBindings, EffectStore};

/// Explicitly constructed manager for one effect parameter store.
///
/// Owns the blend scheduler (and through it the channel registry), the
/// preset list, and the bound store. Every apply call is best-effort:
/// failures are logged and absorbed so callers can invoke them
/// speculatively.
///
/// # Frame loop
///
/// Call [`tick`](Self::tick) once per host frame with the frame's delta
/// time; timed blends only advance inside `tick`.
///
/// ```
/// use postfx_blend::blend::Blend;
/// use postfx_blend::engine::PostFxEngine;
/// use postfx_blend::store::EffectProfile;
///
/// let mut engine = PostFxEngine::new(EffectProfile::with_defaults());
/// engine.apply_vignette(0.8, Blend::over(0.5));
/// engine.tick(1.0 / 60.0);
/// ```
#[derive(Debug)]
pub struct PostFxEngine<S: EffectStore> {
    target: Option<S>,
    bindings: ChannelBindings,
    scheduler: BlendScheduler,
    presets: PresetList,
}

impl<S: EffectStore> PostFxEngine<S> {
    /// Engine bound to `target`.
    pub fn new(target: S) -> Self {
        Self::with_target(Some(target))
    }

    /// Engine with no store bound; every apply is a no-op until
    /// [`refresh_profile`](Self::refresh_profile) binds one.
    #[must_use]
    pub fn unbound() -> Self {
        Self::with_target(None)
    }

    fn with_target(target: Option<S>) -> Self {
        let bindings = ChannelBindings::resolve(target.as_ref());
        Self {
            target,
            bindings,
            scheduler: BlendScheduler::new(),
            presets: PresetList::new(),
        }
    }

    /// Bound store, if any.
    #[must_use]
    pub const fn target(&self) -> Option<&S> {
        self.target.as_ref()
    }

    /// Mutable access to the bound store.
    ///
    /// Writes made here bypass the scheduler; call
    /// [`rebind`](Self::rebind) after adding or removing effect components.
    pub fn target_mut(&mut self) -> Option<&mut S> {
        self.target.as_mut()
    }

    /// Replace the bound store and re-resolve channel bindings.
    ///
    /// Active transitions belonged to the previous store and are cancelled.
    /// Returns the previously bound store.
    pub fn refresh_profile(&mut self, new_target: Option<S>) -> Option<S> {
        let cancelled = self.scheduler.stop_all();
        let previous = std::mem::replace(&mut self.target, new_target);
        self.rebind();
        log::info!(
            "profile refreshed: {} channel(s) bound, {cancelled} blend(s) \
             cancelled",
            self.bindings.bound_channels().len()
        );
        previous
    }

    /// Re-resolve which channels the bound store backs.
    pub fn rebind(&mut self) {
        self.bindings = ChannelBindings::resolve(self.target.as_ref());
    }

    /// Cached channel bindings.
    #[must_use]
    pub const fn bindings(&self) -> &ChannelBindings {
        &self.bindings
    }

    /// Advance every active blend by `dt` seconds. Returns how many blends
    /// completed on this tick.
    pub fn tick(&mut self, dt: f32) -> usize {
        match self.target.as_mut() {
            Some(store) => self.scheduler.tick(store, dt),
            None => 0,
        }
    }

    /// Cancel every active blend, leaving each channel at its last written
    /// value.
    pub fn stop_all_active(&mut self) {
        let cancelled = self.scheduler.stop_all();
        if cancelled > 0 {
            log::debug!("stopped {cancelled} active blend(s)");
        }
    }

    /// Cancel the blend on one channel.
    pub fn stop(&mut self, kind: ChannelKind) {
        let _ = self.scheduler.cancel(kind);
    }

    /// Channels with an active blend, in registry order.
    #[must_use]
    pub fn list_active_channels(&self) -> Vec<ChannelKind> {
        self.scheduler.active_channels()
    }

    /// Whether `kind` is currently blending.
    #[must_use]
    pub fn is_blending(&self, kind: ChannelKind) -> bool {
        self.scheduler.is_blending(kind)
    }

    /// Whether any channel is currently blending.
    #[must_use]
    pub fn is_any_blending(&self) -> bool {
        !self.scheduler.registry().is_empty()
    }

    /// Read-only view of the scheduler.
    #[must_use]
    pub const fn scheduler(&self) -> &BlendScheduler {
        &self.scheduler
    }

    /// Live value of `kind` in the bound store.
    #[must_use]
    pub fn value(&self, kind: ChannelKind) -> Option<ChannelValue> {
        self.target.as_ref()?.get(kind)
    }

    /// Request `target`'s channel move toward `target` with `blend`.
    ///
    /// The blend amount is resolved against the live value once, here; the
    /// request then cancels any active blend on the channel and either
    /// writes instantly or starts a new transition. Missing channels are a
    /// logged no-op.
    pub fn apply(&mut self, target: ChannelValue, blend: Blend) {
        if let Err(e) = self.try_apply(target, blend) {
            log::warn!("{}: request ignored, {e}", target.kind());
        }
    }

    /// Like [`apply`](Self::apply) but reports failures to the caller.
    pub fn try_apply(
        &mut self,
        target: ChannelValue,
        blend: Blend,
    ) -> Result<RequestOutcome, BlendError> {
        let kind = target.kind();
        self.ensure_bound(kind)?;
        let current = self.live_value(kind)?;
        let end = resolve_target(&current, &target, blend.amount)?;
        let store = self.target.as_mut().ok_or(BlendError::NoTarget)?;
        self.scheduler.request(store, end, blend.duration)
    }

    /// Mutate one channel's live value directly.
    ///
    /// Any blend on the channel is cancelled first so the closure is the
    /// only writer. A closure that changes the value's kind is rejected.
    pub fn modify(
        &mut self,
        kind: ChannelKind,
        modifier: impl FnOnce(&mut ChannelValue),
    ) {
        if let Err(e) = self.try_modify(kind, modifier) {
            log::warn!("{kind}: modify ignored, {e}");
        }
    }

    fn try_modify(
        &mut self,
        kind: ChannelKind,
        modifier: impl FnOnce(&mut ChannelValue),
    ) -> Result<(), BlendError> {
        self.ensure_bound(kind)?;
        let mut value = self.live_value(kind)?;
        modifier(&mut value);
        if value.kind() != kind {
            return Err(BlendError::ShapeMismatch { kind });
        }
        let _ = self.scheduler.cancel(kind);
        let store = self.target.as_mut().ok_or(BlendError::NoTarget)?;
        store.set(value)
    }

    /// Live value of a channel the cache reports as bound. A stale cache
    /// entry is re-resolved before reporting the miss.
    fn live_value(
        &mut self,
        kind: ChannelKind,
    ) -> Result<ChannelValue, BlendError> {
        let store = self.target.as_ref().ok_or(BlendError::NoTarget)?;
        if let Some(value) = store.get(kind) {
            return Ok(value);
        }
        self.rebind();
        Err(BlendError::MissingBinding(kind))
    }

    /// Check the cached binding for `kind`, re-resolving once if the cache
    /// says it is missing.
    fn ensure_bound(&mut self, kind: ChannelKind) -> Result<(), BlendError> {
        if self.target.is_none() {
            return Err(BlendError::NoTarget);
        }
        if !self.bindings.is_bound(kind) {
            self.rebind();
            if !self.bindings.is_bound(kind) {
                return Err(BlendError::MissingBinding(kind));
            }
        }
        Ok(())
    }
}

impl<S: EffectStore + Default> Default for PostFxEngine<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::EffectProfile;

    fn engine() -> PostFxEngine<EffectProfile> {
        PostFxEngine::new(EffectProfile::with_defaults())
    }

    fn dof_of(engine: &PostFxEngine<EffectProfile>) -> f32 {
        match engine.value(ChannelKind::DepthOfField) {
            Some(ChannelValue::DepthOfField { focus_distance }) => {
                focus_distance
            }
            other => unreachable!("unexpected dof value {other:?}"),
        }
    }

    #[test]
    fn dof_blend_over_two_ticks() {
        let mut engine = engine();
        engine.apply_dof_focus(20.0, Blend::over(2.0));

        assert_eq!(engine.tick(1.0), 0);
        assert_eq!(dof_of(&engine), 15.0);

        assert_eq!(engine.tick(1.0), 1);
        assert_eq!(dof_of(&engine), 20.0);
        assert!(engine.list_active_channels().is_empty());
    }

    #[test]
    fn unbound_engine_ignores_everything() {
        let mut engine = PostFxEngine::<EffectProfile>::unbound();
        engine.apply_vignette(0.5, Blend::instant());
        assert_eq!(engine.tick(1.0), 0);
        assert!(engine.value(ChannelKind::Vignette).is_none());
        assert!(matches!(
            engine.try_apply(
                ChannelValue::Vignette { intensity: 0.5 },
                Blend::instant()
            ),
            Err(BlendError::NoTarget)
        ));
    }

    #[test]
    fn missing_channel_is_a_no_op_for_that_channel_only() {
        let mut engine =
            PostFxEngine::new(EffectProfile::with_channels([ChannelKind::Bloom]));
        engine.apply_vignette(0.5, Blend::instant());
        engine.apply_bloom(3.0, 1.0, Blend::instant());

        assert!(engine.value(ChannelKind::Vignette).is_none());
        assert_eq!(
            engine.value(ChannelKind::Bloom),
            Some(ChannelValue::Bloom {
                intensity: 3.0,
                threshold: 1.0
            })
        );
    }

    #[test]
    fn request_rebinds_after_component_added() {
        let mut engine =
            PostFxEngine::new(EffectProfile::with_channels([ChannelKind::Bloom]));
        assert!(!engine.bindings().is_bound(ChannelKind::Vignette));

        let _ = engine
            .target_mut()
            .unwrap()
            .insert(ChannelKind::Vignette.default_value());
        engine.apply_vignette(0.5, Blend::instant());

        assert!(engine.bindings().is_bound(ChannelKind::Vignette));
        assert_eq!(
            engine.value(ChannelKind::Vignette),
            Some(ChannelValue::Vignette { intensity: 0.5 })
        );
    }

    #[test]
    fn stale_binding_is_re_resolved_on_miss() {
        let mut engine = engine();
        let _ = engine.target_mut().unwrap().remove(ChannelKind::Vignette);
        assert!(engine.bindings().is_bound(ChannelKind::Vignette));

        assert!(matches!(
            engine.try_apply(
                ChannelValue::Vignette { intensity: 0.5 },
                Blend::instant()
            ),
            Err(BlendError::MissingBinding(ChannelKind::Vignette))
        ));
        assert!(!engine.bindings().is_bound(ChannelKind::Vignette));
        assert!(engine.bindings().is_bound(ChannelKind::Bloom));

        engine.apply_film_grain(0.3, Blend::instant());
        assert_eq!(
            engine.value(ChannelKind::FilmGrain),
            Some(ChannelValue::FilmGrain { intensity: 0.3 })
        );
    }

    #[test]
    fn refresh_profile_swaps_store_and_cancels_blends() {
        let mut engine = engine();
        engine.apply_vignette(1.0, Blend::over(1.0));
        assert!(engine.is_blending(ChannelKind::Vignette));

        let old = engine
            .refresh_profile(Some(EffectProfile::with_channels([
                ChannelKind::FilmGrain,
            ])))
            .unwrap();

        assert_eq!(old.len(), ChannelKind::COUNT);
        assert!(!engine.is_any_blending());
        assert_eq!(
            engine.bindings().bound_channels(),
            vec![ChannelKind::FilmGrain]
        );
    }

    #[test]
    fn stop_all_active_halts_every_channel() {
        let mut engine = engine();
        engine.apply_vignette(1.0, Blend::over(1.0));
        engine.apply_film_grain(1.0, Blend::over(1.0));
        let _ = engine.tick(0.5);

        engine.stop_all_active();
        assert!(engine.list_active_channels().is_empty());

        let _ = engine.tick(5.0);
        assert_eq!(
            engine.value(ChannelKind::Vignette),
            Some(ChannelValue::Vignette { intensity: 0.5 })
        );
        assert_eq!(
            engine.value(ChannelKind::FilmGrain),
            Some(ChannelValue::FilmGrain { intensity: 0.5 })
        );
    }

    #[test]
    fn modify_cancels_blend_and_writes() {
        let mut engine = engine();
        engine.apply_vignette(1.0, Blend::over(1.0));

        engine.modify(ChannelKind::Vignette, |value| {
            if let ChannelValue::Vignette { intensity } = value {
                *intensity = 0.25;
            }
        });

        assert!(!engine.is_blending(ChannelKind::Vignette));
        let _ = engine.tick(1.0);
        assert_eq!(
            engine.value(ChannelKind::Vignette),
            Some(ChannelValue::Vignette { intensity: 0.25 })
        );
    }

    #[test]
    fn modify_rejects_kind_change() {
        let mut engine = engine();
        engine.modify(ChannelKind::Vignette, |value| {
            *value = ChannelValue::FilmGrain { intensity: 1.0 };
        });
        assert_eq!(
            engine.value(ChannelKind::Vignette),
            Some(ChannelKind::Vignette.default_value())
        );
        assert_eq!(
            engine.value(ChannelKind::FilmGrain),
            Some(ChannelKind::FilmGrain.default_value())
        );
    }
}
