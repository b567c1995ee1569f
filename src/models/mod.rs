//! Each color space/form is modeled with its own type. Conversions are only
//! implemented on relevant models, making conversion paths accurate and
//! performant.
//!
//! Conversions only operate on the 3 color components (no alpha, missing
//! components).
//!
//! NOTE: When a conversion yields a NaN value, the component is powerless and
//!       should be treated as missing.
//!
//! ```rust
//! use huekit::models::{Srgb, ToXyz};
//! let blue_in_oklch = huekit::models::Oklab::from(
//!     Srgb::new(0.0, 0.0, 1.0)
//!         .to_linear_light()      // convert to srgb-linear.
//!         .to_xyz(),              // convert to xyz-d65.
//! )
//! .to_polar();                    // convert to oklch.
//! assert!((blue_in_oklch.hue - 264.05).abs() < 0.1);
//! ```

use crate::color::{Color, Component};

pub mod base;
pub mod hsl;
pub mod lab;
pub mod rgb;
pub mod xyz;

pub use hsl::{Hsl, Hsv};
pub use lab::{Lab, Lch, Oklab, Oklch};
pub use rgb::{Srgb, SrgbLinear};
pub use xyz::{ToXyz, WhitePoint, Xyz, XyzD50, XyzD65, D50, D65};

/// A trait implemented for color models that can be converted to and from a
/// generic [`Color`].
pub trait Model {
    /// Convert a model to a generic [`Color`]. NaN components become missing.
    fn to_color(&self, alpha: Option<Component>) -> Color;

    /// Convert a generic [`Color`] to a model. Missing components read as
    /// zero. The color must already be in the model's space.
    fn to_model(color: &Color) -> Self;
}
