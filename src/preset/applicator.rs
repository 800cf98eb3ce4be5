use super::Preset;
use crate::channel::{ChannelKind, ChannelValue};

/// Decompose `preset` into one target per enabled channel, in registry
/// order. Disabled channels produce nothing (no implicit reset).
#[must_use]
pub fn channel_targets(preset: &Preset) -> Vec<ChannelValue> {
    ChannelKind::ALL
        .into_iter()
        .filter(|kind| preset.uses(*kind))
        .map(|kind| preset.target(kind))
        .collect()
}
