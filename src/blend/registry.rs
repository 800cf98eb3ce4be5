//! Channel registry: at most one active transition per channel.

use super::transition::Transition;
use crate::channel::ChannelKind;

/// Maps each channel to its running transition, if any.
///
/// One slot per [`ChannelKind`], so the single-transition-per-channel
/// invariant holds by construction and iteration follows registry order.
#[derive(Debug, Clone, Default)]
pub struct ChannelRegistry {
    slots: [Option<Transition>; ChannelKind::COUNT],
}

impl ChannelRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `transition` for its channel, returning the transition it
    /// superseded (which is dropped without reaching its end value).
    pub fn insert(&mut self, transition: Transition) -> Option<Transition> {
        self.slots[transition.kind().index()].replace(transition)
    }

    /// Cancel the active transition for `kind`, if any.
    pub fn cancel(&mut self, kind: ChannelKind) -> Option<Transition> {
        self.slots[kind.index()].take()
    }

    /// Cancel every active transition. Returns how many were cancelled.
    pub fn clear(&mut self) -> usize {
        self.slots
            .iter_mut()
            .filter_map(Option::take)
            .count()
    }

    /// Active transition for `kind`.
    #[must_use]
    pub fn get(&self, kind: ChannelKind) -> Option<&Transition> {
        self.slots[kind.index()].as_ref()
    }

    /// Whether `kind` has an active transition.
    #[must_use]
    pub fn is_active(&self, kind: ChannelKind) -> bool {
        self.slots[kind.index()].is_some()
    }

    /// Number of active transitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    /// Whether no transition is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Channels with an active transition, in registry order.
    #[must_use]
    pub fn active_channels(&self) -> Vec<ChannelKind> {
        self.iter().map(Transition::kind).collect()
    }

    /// Active transitions in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &Transition> {
        self.slots.iter().flatten()
    }

    /// Visit every active transition in registry order, dropping those for
    /// which `keep` returns `false`.
    pub fn retain(&mut self, mut keep: impl FnMut(&mut Transition) -> bool) {
        for slot in &mut self.slots {
            if !slot.as_mut().is_none_or(&mut keep) {
                *slot = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::ChannelValue;

    fn vignette(from: f32, to: f32) -> Transition {
        Transition::new(
            ChannelValue::Vignette { intensity: from },
            ChannelValue::Vignette { intensity: to },
            1.0,
        )
        .unwrap()
    }

    fn bloom() -> Transition {
        Transition::new(
            ChannelKind::Bloom.default_value(),
            ChannelValue::Bloom {
                intensity: 3.0,
                threshold: 1.0,
            },
            1.0,
        )
        .unwrap()
    }

    #[test]
    fn insert_supersedes_same_channel() {
        let mut registry = ChannelRegistry::new();
        assert!(registry.insert(vignette(0.0, 0.5)).is_none());
        let old = registry.insert(vignette(0.1, 0.9)).unwrap();
        assert_eq!(old.end(), &ChannelValue::Vignette { intensity: 0.5 });
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn active_channels_follow_registry_order() {
        let mut registry = ChannelRegistry::new();
        let _ = registry.insert(vignette(0.0, 1.0));
        let _ = registry.insert(bloom());
        assert_eq!(
            registry.active_channels(),
            vec![ChannelKind::Bloom, ChannelKind::Vignette]
        );
    }

    #[test]
    fn cancel_and_clear() {
        let mut registry = ChannelRegistry::new();
        let _ = registry.insert(vignette(0.0, 1.0));
        let _ = registry.insert(bloom());

        assert!(registry.cancel(ChannelKind::Vignette).is_some());
        assert!(registry.cancel(ChannelKind::Vignette).is_none());
        assert!(!registry.is_active(ChannelKind::Vignette));

        assert_eq!(registry.clear(), 1);
        assert!(registry.is_empty());
    }

    #[test]
    fn retain_drops_rejected_transitions() {
        let mut registry = ChannelRegistry::new();
        let _ = registry.insert(vignette(0.0, 1.0));
        let _ = registry.insert(bloom());
        registry.retain(|t| t.kind() == ChannelKind::Bloom);
        assert_eq!(registry.active_channels(), vec![ChannelKind::Bloom]);
    }
}
