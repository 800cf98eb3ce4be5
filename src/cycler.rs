//! Walks an engine's preset list: next/previous/random stepping and an
//! optional timed auto-cycle.

use rand::Rng;

use crate::engine::PostFxEngine;
use crate::options::CycleOptions;
use crate::store::EffectStore;

/// Preset stepping state for one [`PostFxEngine`].
///
/// The cycler only remembers which preset it applied last; the preset list
/// itself stays on the engine.
#[derive(Debug, Clone, Default)]
pub struct PresetCycler {
    current: Option<usize>,
    options: CycleOptions,
    elapsed: f32,
}

impl PresetCycler {
    /// Cycler with the given options and nothing applied yet.
    #[must_use]
    pub const fn new(options: CycleOptions) -> Self {
        Self {
            current: None,
            options,
            elapsed: 0.0,
        }
    }

    /// Index of the last preset this cycler applied.
    #[must_use]
    pub const fn current(&self) -> Option<usize> {
        self.current
    }

    /// Active cycling options.
    #[must_use]
    pub const fn options(&self) -> &CycleOptions {
        &self.options
    }

    /// Turn auto-cycling on or off. Resets the interval timer.
    pub fn set_auto_cycle(&mut self, enabled: bool) {
        self.options.auto_cycle = enabled;
        self.elapsed = 0.0;
        log::debug!("auto-cycle {}", if enabled { "on" } else { "off" });
    }

    /// Apply the first preset instantly, if there is one.
    pub fn start<S: EffectStore>(&mut self, engine: &mut PostFxEngine<S>) {
        let _ = self.apply_index(engine, 0, true);
    }

    /// Apply the preset at `index`, instantly at full strength or with the
    /// configured blend. Returns whether a preset was applied.
    pub fn apply_index<S: EffectStore>(
        &mut self,
        engine: &mut PostFxEngine<S>,
        index: usize,
        instant: bool,
    ) -> bool {
        if index >= engine.presets().len() {
            log::debug!(
                "cycler: index {index} out of range (len {})",
                engine.presets().len()
            );
            return false;
        }
        if instant {
            engine.apply_preset_instant_at_index(index, 1.0);
        } else {
            engine.apply_preset_at_index(index, self.options.blend());
        }
        self.current = Some(index);
        true
    }

    /// Step to the following preset, wrapping at the end.
    pub fn next<S: EffectStore>(&mut self, engine: &mut PostFxEngine<S>) {
        let len = engine.presets().len();
        if len == 0 {
            return;
        }
        let index = self.current.map_or(0, |c| (c + 1) % len);
        let _ = self.apply_index(engine, index, false);
    }

    /// Step to the preceding preset, wrapping at the start.
    pub fn previous<S: EffectStore>(&mut self, engine: &mut PostFxEngine<S>) {
        let len = engine.presets().len();
        if len == 0 {
            return;
        }
        // With nothing applied yet the position counts as one before 0.
        let index = match self.current {
            Some(c) => (c % len + len - 1) % len,
            None => (2 * len - 2) % len,
        };
        let _ = self.apply_index(engine, index, false);
    }

    /// Apply a uniformly chosen preset.
    pub fn random<S: EffectStore>(&mut self, engine: &mut PostFxEngine<S>) {
        self.random_with(engine, &mut rand::rng());
    }

    /// Apply a preset chosen uniformly with `rng`.
    pub fn random_with<S: EffectStore, R: Rng + ?Sized>(
        &mut self,
        engine: &mut PostFxEngine<S>,
        rng: &mut R,
    ) {
        let len = engine.presets().len();
        if len == 0 {
            return;
        }
        let index = rng.random_range(0..len);
        let _ = self.apply_index(engine, index, false);
    }

    /// Advance the auto-cycle timer by `dt` seconds, stepping to the next
    /// preset once the interval elapses.
    ///
    /// Steps at most once per call; time past the interval carries over
    /// modulo the interval. Does nothing while auto-cycling is off or the list holds fewer than
    /// two presets. Does not tick the engine.
    pub fn tick<S: EffectStore>(
        &mut self,
        engine: &mut PostFxEngine<S>,
        dt: f32,
    ) {
        if !self.options.auto_cycle || engine.presets().len() <= 1 {
            return;
        }
        let interval = self.options.cycle_interval;
        if !(interval > 0.0 && interval.is_finite()) {
            return;
        }
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
        if self.elapsed >= interval {
            self.elapsed %= interval;
            self.next(engine);
        }
    }
}
