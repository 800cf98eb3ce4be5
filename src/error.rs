//! Crate-level error types.

use std::fmt;

use crate::channel::ChannelKind;

/// Errors produced by the postfx-blend crate.
///
/// The engine's public blend API absorbs these (logging them) so every call
/// is safe to make speculatively; they surface as values only from the
/// lower-level store/scheduler APIs and from options loading.
#[derive(Debug)]
pub enum BlendError {
    /// No effect parameter store is bound to the engine.
    NoTarget,
    /// The bound store has no backing component for this channel.
    MissingBinding(ChannelKind),
    /// A value of the wrong kind was written to or read for a channel.
    ShapeMismatch {
        /// Channel the value was meant for.
        kind: ChannelKind,
    },
    /// Preset-list index out of range.
    InvalidIndex {
        /// Requested index.
        index: usize,
        /// Length of the list at the time of the request.
        len: usize,
    },
    /// A preset argument was absent.
    NullPreset,
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for BlendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTarget => write!(f, "no effect parameter store bound"),
            Self::MissingBinding(kind) => {
                write!(f, "channel {kind} is not bound on the target")
            }
            Self::ShapeMismatch { kind } => {
                write!(f, "value does not match the shape of channel {kind}")
            }
            Self::InvalidIndex { index, len } => {
                write!(f, "preset index {index} out of range (len {len})")
            }
            Self::NullPreset => write!(f, "preset is null"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for BlendError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for BlendError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_channel() {
        let err = BlendError::MissingBinding(ChannelKind::Bloom);
        assert_eq!(err.to_string(), "channel Bloom is not bound on the target");
    }

    #[test]
    fn io_error_exposes_source() {
        let err = BlendError::from(std::io::Error::other("boom"));
        assert!(std::error::Error::source(&err).is_some());
        assert!(std::error::Error::source(&BlendError::NullPreset).is_none());
    }
}
