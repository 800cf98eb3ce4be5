//! Preset application and preset-list management for [`PostFxEngine`].

use super::PostFxEngine;
use crate::blend::Blend;
use crate::error::BlendError;
use crate::preset::{channel_targets, Preset};
use crate::store::EffectStore;

impl<S: EffectStore> PostFxEngine<S> {
    /// Apply every enabled channel of `preset` with `blend`.
    ///
    /// Each enabled channel gets exactly one request; disabled channels are
    /// untouched. An absent preset logs a warning and does nothing.
    pub fn apply_preset<'a>(
        &mut self,
        preset: impl Into<Option<&'a Preset>>,
        blend: Blend,
    ) {
        let Some(preset) = preset.into() else {
            log::warn!("apply_preset: {}", BlendError::NullPreset);
            return;
        };
        log::info!(
            "applying preset \"{}\" (amount {:.2}, {:.2}s)",
            preset.name,
            blend.amount,
            blend.duration
        );
        for target in channel_targets(preset) {
            self.apply(target, blend);
        }
    }

    /// Apply `preset` instantly with the given blend amount.
    pub fn apply_preset_instant<'a>(
        &mut self,
        preset: impl Into<Option<&'a Preset>>,
        blend_amount: f32,
    ) {
        self.apply_preset(preset, Blend::instant().with_amount(blend_amount));
    }

    /// Presets owned by this engine, in order.
    #[must_use]
    pub fn presets(&self) -> &[Preset] {
        self.presets.as_slice()
    }

    /// Append a preset to the list. An absent preset is ignored.
    pub fn add_preset_to_list(&mut self, preset: impl Into<Option<Preset>>) {
        let _ = self.presets.add(preset);
    }

    /// Remove the preset at `index`; out-of-range indices are ignored.
    pub fn remove_preset_from_list(&mut self, index: usize) {
        if self.presets.remove_at(index).is_none() {
            log::debug!(
                "remove_preset_from_list: index {index} out of range (len {})",
                self.presets.len()
            );
        }
    }

    /// Apply the preset at `index`; out-of-range indices are ignored.
    pub fn apply_preset_at_index(&mut self, index: usize, blend: Blend) {
        let targets = match self.presets.get(index) {
            Ok(preset) => {
                log::info!(
                    "applying preset {index} \"{}\" (amount {:.2}, {:.2}s)",
                    preset.name,
                    blend.amount,
                    blend.duration
                );
                channel_targets(preset)
            }
            Err(e) => {
                log::debug!("apply_preset_at_index: {e}");
                return;
            }
        };
        for target in targets {
            self.apply(target, blend);
        }
    }

    /// Apply the preset at `index` instantly with the given blend amount.
    pub fn apply_preset_instant_at_index(
        &mut self,
        index: usize,
        blend_amount: f32,
    ) {
        self.apply_preset_at_index(
            index,
            Blend::instant().with_amount(blend_amount),
        );
    }
}
