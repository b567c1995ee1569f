//! Functions for converting color models to a base color space common to all
//! models.  Used for color conversion.

use crate::models::{self, xyz::TransferWhitePoint, ToXyz};

/// Every rgb based model is defined relative to D65, so it makes the cheapest
/// base.
pub type Base = models::XyzD65;

/// Used to convert any model to a base color space.
pub trait ToBase {
    /// Convert the model to a base color space.
    fn to_base(&self) -> Base;
}

/// Used to convert the base color space into any model.
pub trait FromBase {
    /// Convert from the base color space into the model.
    fn from_base(base: &Base) -> Self;
}

impl ToBase for models::SrgbLinear {
    fn to_base(&self) -> Base {
        self.to_xyz()
    }
}

impl FromBase for models::SrgbLinear {
    fn from_base(base: &Base) -> Self {
        Self::from(base.clone())
    }
}

impl ToBase for models::Srgb {
    fn to_base(&self) -> Base {
        self.to_linear_light().to_base()
    }
}

impl FromBase for models::Srgb {
    fn from_base(base: &Base) -> Self {
        models::SrgbLinear::from_base(base).to_gamma_encoded()
    }
}

impl ToBase for models::Hsl {
    fn to_base(&self) -> Base {
        self.to_srgb().to_base()
    }
}

impl FromBase for models::Hsl {
    fn from_base(base: &Base) -> Self {
        models::Srgb::from_base(base).to_hsl()
    }
}

impl ToBase for models::Hsv {
    fn to_base(&self) -> Base {
        self.to_srgb().to_base()
    }
}

impl FromBase for models::Hsv {
    fn from_base(base: &Base) -> Self {
        models::Srgb::from_base(base).to_hsv()
    }
}

impl ToBase for models::Lab {
    fn to_base(&self) -> Base {
        self.to_xyz().transfer()
    }
}

impl FromBase for models::Lab {
    fn from_base(base: &Base) -> Self {
        Self::from(base.transfer::<models::D50>())
    }
}

impl ToBase for models::Oklab {
    fn to_base(&self) -> Base {
        self.to_xyz()
    }
}

impl FromBase for models::Oklab {
    fn from_base(base: &Base) -> Self {
        Self::from(base.clone())
    }
}

impl ToBase for models::Lch {
    fn to_base(&self) -> Base {
        self.to_rectangular().to_base()
    }
}

impl FromBase for models::Lch {
    fn from_base(base: &Base) -> Self {
        models::Lab::from_base(base).to_polar()
    }
}

impl ToBase for models::Oklch {
    fn to_base(&self) -> Base {
        self.to_rectangular().to_base()
    }
}

impl FromBase for models::Oklch {
    fn from_base(base: &Base) -> Self {
        models::Oklab::from_base(base).to_polar()
    }
}

impl<W: models::WhitePoint> ToBase for models::Xyz<W>
where
    W: TransferWhitePoint<models::D65>,
{
    fn to_base(&self) -> Base {
        self.transfer()
    }
}

impl<W: models::WhitePoint> FromBase for models::Xyz<W>
where
    models::D65: TransferWhitePoint<W>,
{
    fn from_base(base: &Base) -> Self {
        base.transfer()
    }
}
