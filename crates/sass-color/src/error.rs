//! Errors raised by the color subsystem.
//!
//! All operations report failures through the one [`ColorError`] enum, whose
//! variants distinguish between malformed text, out-of-range channel values,
//! unknown channel names, unsupported parameters, and inapplicable color
//! spaces.

#[cfg(feature = "pyffi")]
use pyo3::exceptions::{PyKeyError, PyValueError};
#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::Float;

/// An erroneous color or color operation.
#[derive(Clone, Debug, PartialEq)]
pub enum ColorError {
    /// A string that does not match any of the supported text formats or
    /// named colors. The payload is the offending text.
    InvalidColorSyntax(String),

    /// A channel or argument value outside its permissible range.
    ChannelOutOfRange {
        channel: String,
        value: Float,
        min: Float,
        max: Float,
    },

    /// A channel name not known in any supported color space.
    UnknownChannel(String),

    /// A keyword argument that the operation does not support, or an argument
    /// of the wrong kind.
    UnsupportedParameter(String),

    /// A color space or method that does not apply to the operation.
    IncompatibleColorSpace(String),
}

impl ColorError {
    /// Create a new out-of-range error.
    pub fn out_of_range(channel: impl Into<String>, value: Float, min: Float, max: Float) -> Self {
        Self::ChannelOutOfRange {
            channel: channel.into(),
            value,
            min,
            max,
        }
    }

    /// Check that the value falls into the range, returning it if so.
    pub(crate) fn check(channel: &str, value: Float, min: Float, max: Float) -> Result<Float, Self> {
        if min <= value && value <= max {
            Ok(value)
        } else {
            Err(Self::out_of_range(channel, value, min, max))
        }
    }
}

impl std::fmt::Display for ColorError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ColorError::*;

        match self {
            InvalidColorSyntax(text) => {
                write!(f, "`{}` should be a valid color but is not", text)
            }
            ChannelOutOfRange {
                channel,
                value,
                min,
                max,
            } => write!(
                f,
                "{} should be between {} and {} but is {}",
                channel, min, max, value
            ),
            UnknownChannel(name) => write!(f, "`{}` should be a known color channel but is not", name),
            UnsupportedParameter(name) => {
                write!(f, "{} is not a supported parameter", name)
            }
            IncompatibleColorSpace(message) => {
                write!(f, "color space is incompatible: {}", message)
            }
        }
    }
}

impl std::error::Error for ColorError {}

#[cfg(feature = "pyffi")]
impl From<ColorError> for PyErr {
    fn from(value: ColorError) -> Self {
        match value {
            ColorError::UnknownChannel(_) | ColorError::UnsupportedParameter(_) => {
                PyKeyError::new_err(value.to_string())
            }
            _ => PyValueError::new_err(value.to_string()),
        }
    }
}
