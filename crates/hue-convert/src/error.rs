// ABOUTME: Typed validation failures for the conversion engine.
// ABOUTME: Distinguishes grammar errors from out-of-domain field values.

use hue_core::ChannelError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConvertError {
    /// The text does not match the grammar for the selected notation.
    #[error("invalid {notation} value: {reason}")]
    InvalidFormat {
        notation: &'static str,
        reason: String,
    },

    /// The text parsed, but a field value lies outside its legal domain.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
    },
}

impl ConvertError {
    pub(crate) fn invalid(notation: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            notation,
            reason: reason.into(),
        }
    }

    pub(crate) fn range(field: &'static str, min: f64, max: f64) -> Self {
        Self::OutOfRange { field, min, max }
    }
}

impl From<ChannelError> for ConvertError {
    fn from(err: ChannelError) -> Self {
        Self::OutOfRange {
            field: err.channel,
            min: err.min,
            max: err.max,
        }
    }
}
