use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::EffectStore;
use crate::channel::{ChannelKind, ChannelValue};
use crate::error::BlendError;

/// In-memory effect profile: a set of effect components, each holding the
/// live value of one channel.
///
/// Channels that were never added are absent, mirroring a host profile that
/// lacks some effect overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EffectProfile {
    components: FxHashMap<ChannelKind, ChannelValue>,
}

impl EffectProfile {
    /// Profile with no effect components.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Profile with every channel present at its default value.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::with_channels(ChannelKind::ALL)
    }

    /// Profile with the given channels present at their default values.
    pub fn with_channels(kinds: impl IntoIterator<Item = ChannelKind>) -> Self {
        let components = kinds
            .into_iter()
            .map(|kind| (kind, kind.default_value()))
            .collect();
        Self { components }
    }

    /// Add (or replace) the component for `value`'s channel.
    pub fn insert(&mut self, value: ChannelValue) -> Option<ChannelValue> {
        self.components.insert(value.kind(), value)
    }

    /// Remove the component for `kind`.
    pub fn remove(&mut self, kind: ChannelKind) -> Option<ChannelValue> {
        self.components.remove(&kind)
    }

    /// Number of channels present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether no channel is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl EffectStore for EffectProfile {
    fn has_channel(&self, kind: ChannelKind) -> bool {
        self.components.contains_key(&kind)
    }

    fn get(&self, kind: ChannelKind) -> Option<ChannelValue> {
        self.components.get(&kind).copied()
    }

    fn set(&mut self, value: ChannelValue) -> Result<(), BlendError> {
        let kind = value.kind();
        let slot = self
            .components
            .get_mut(&kind)
            .ok_or(BlendError::MissingBinding(kind))?;
        *slot = value;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_channel() {
        let profile = EffectProfile::with_defaults();
        assert_eq!(profile.len(), ChannelKind::COUNT);
        for kind in ChannelKind::ALL {
            assert_eq!(profile.get(kind), Some(kind.default_value()));
        }
    }

    #[test]
    fn set_on_absent_channel_fails() {
        let mut profile = EffectProfile::with_channels([ChannelKind::Bloom]);
        let err = profile
            .set(ChannelValue::Vignette { intensity: 0.4 })
            .unwrap_err();
        assert!(matches!(
            err,
            BlendError::MissingBinding(ChannelKind::Vignette)
        ));
        assert!(!profile.has_channel(ChannelKind::Vignette));
    }

    #[test]
    fn set_overwrites_present_channel() {
        let mut profile = EffectProfile::with_defaults();
        let value = ChannelValue::Vignette { intensity: 0.4 };
        profile.set(value).unwrap();
        assert_eq!(profile.get(ChannelKind::Vignette), Some(value));
    }

    #[test]
    fn remove_makes_channel_absent() {
        let mut profile = EffectProfile::with_defaults();
        assert!(profile.remove(ChannelKind::MotionBlur).is_some());
        assert!(!profile.has_channel(ChannelKind::MotionBlur));
        assert_eq!(profile.get(ChannelKind::MotionBlur), None);
    }
}
