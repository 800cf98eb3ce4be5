use super::EffectStore;
use crate::channel::ChannelKind;

/// Cached view of which channels the bound store backs.
///
/// Resolved once on bind and again on demand when a request names a channel
/// the cache believes is missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChannelBindings {
    bound: [bool; ChannelKind::COUNT],
}

impl ChannelBindings {
    /// Resolve bindings against `store`. No store means nothing is bound.
    pub fn resolve<S: EffectStore + ?Sized>(store: Option<&S>) -> Self {
        let mut bound = [false; ChannelKind::COUNT];
        if let Some(store) = store {
            for kind in ChannelKind::ALL {
                bound[kind.index()] = store.has_channel(kind);
            }
        }
        Self { bound }
    }

    /// Whether `kind` was present at the last resolve.
    #[must_use]
    pub fn is_bound(&self, kind: ChannelKind) -> bool {
        self.bound[kind.index()]
    }

    /// Bound channels in registry order.
    #[must_use]
    pub fn bound_channels(&self) -> Vec<ChannelKind> {
        ChannelKind::ALL
            .into_iter()
            .filter(|kind| self.is_bound(*kind))
            .collect()
    }
}
