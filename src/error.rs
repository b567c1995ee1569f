//! Errors returned by color construction, conversion and generation.

use crate::{color::Component, harmony::Scheme};

/// The error type for all fallible operations in this crate.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    /// A numeric input is outside of the domain declared for it.
    #[error("{channel} value {value} is outside of {domain}")]
    ColorDomain {
        /// The name of the channel or parameter.
        channel: &'static str,
        /// The rejected value.
        value: Component,
        /// A description of the accepted domain.
        domain: &'static str,
    },

    /// A hex string with the wrong number of digits or a non-hex digit.
    #[error("malformed hex color {0:?}")]
    MalformedHex(String),

    /// Input that was not recognized as a value of the expected kind.
    #[error("malformed input {0:?}")]
    MalformedInput(String),

    /// A harmony was requested with fewer colors than the scheme needs.
    #[error("the {scheme} scheme needs at least {minimum} colors, {count} requested")]
    CountBelowMinimum {
        /// The requested scheme.
        scheme: Scheme,
        /// The smallest count the scheme accepts.
        minimum: usize,
        /// The count that was requested.
        count: usize,
    },

    /// A blend was requested without any colors.
    #[error("cannot blend an empty list of colors")]
    EmptyBlend,

    /// Every color in a blend has a weight of zero.
    #[error("cannot blend colors when every weight is zero")]
    ZeroBlendWeight,

    /// A palette has more entries than there are weight labels.
    #[error("palette has {len} colors, at most {max} can be exported")]
    PaletteTooLong {
        /// The number of colors in the palette.
        len: usize,
        /// The number of weight labels available.
        max: usize,
    },
}

impl Error {
    /// Returns true for errors caused by a value outside of its domain.
    pub fn is_domain_error(&self) -> bool {
        matches!(self, Error::ColorDomain { .. } | Error::MalformedHex(_))
    }

    /// Returns true for requests that can not produce a meaningful result,
    /// like too few colors for a scheme or an empty blend.
    pub fn is_degenerate_request(&self) -> bool {
        matches!(
            self,
            Error::CountBelowMinimum { .. }
                | Error::EmptyBlend
                | Error::ZeroBlendWeight
                | Error::PaletteTooLong { .. }
        )
    }
}

/// A specialized [`Result`](std::result::Result) for this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
