//! Effect parameter store boundary.
//!
//! The host rendering system owns the live effect parameters; the engine
//! only reads and writes them through [`EffectStore`]. [`EffectProfile`] is
//! an in-memory store for headless use and tests.

mod bindings;
mod profile;

pub use bindings::ChannelBindings;
pub use profile::EffectProfile;

use crate::channel::{ChannelKind, ChannelValue};
use crate::error::BlendError;

/// Per-channel get/set access to the host's live effect parameters.
pub trait EffectStore {
    /// Whether the store has a backing component for `kind`.
    fn has_channel(&self, kind: ChannelKind) -> bool;

    /// Current live value of `kind`, or `None` if the channel is absent.
    fn get(&self, kind: ChannelKind) -> Option<ChannelValue>;

    /// Overwrite the live value of the channel `value` belongs to.
    ///
    /// Fails with [`BlendError::MissingBinding`] if the channel is absent.
    fn set(&mut self, value: ChannelValue) -> Result<(), BlendError>;
}

impl<S: EffectStore + ?Sized> EffectStore for Box<S> {
    fn has_channel(&self, kind: ChannelKind) -> bool {
        (**self).has_channel(kind)
    }

    fn get(&self, kind: ChannelKind) -> Option<ChannelValue> {
        (**self).get(kind)
    }

    fn set(&mut self, value: ChannelValue) -> Result<(), BlendError> {
        (**self).set(value)
    }
}
