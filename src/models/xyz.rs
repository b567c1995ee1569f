//! Model a color in the CIE-XYZ color space.

use crate::{
    color::{Component, Components, HasSpace, Space},
    math::{transform, transform_3x3, Transform},
};

/// A reference white used to anchor a CIE-XYZ color.
pub trait WhitePoint {
    /// The XYZ coordinates of the reference white.
    const WHITE_POINT: Components;
}

/// CIE-XYZ color with a D50 white point reference.
#[derive(Clone, Debug)]
pub struct D50;

impl WhitePoint for D50 {
    #[allow(clippy::excessive_precision)]
    const WHITE_POINT: Components = Components(0.9642956764295677, 1.0, 0.8251046025104602);
}

/// CIE-XYZ color with a D65 white point reference.
#[derive(Clone, Debug)]
pub struct D65;

impl WhitePoint for D65 {
    #[allow(clippy::excessive_precision)]
    const WHITE_POINT: Components = Components(0.9504559270516716, 1.0, 1.0890577507598784);
}

/// Chromatic adaptation from one white point to another.
pub trait TransferWhitePoint<To: WhitePoint>: WhitePoint {
    /// Adapt XYZ components from `Self` to the `To` white point.
    fn transfer(from: Components) -> Components;
}

impl<W: WhitePoint> TransferWhitePoint<W> for W {
    fn transfer(from: Components) -> Components {
        from
    }
}

impl TransferWhitePoint<D65> for D50 {
    fn transfer(from: Components) -> Components {
        // Bradford chromatic adaptation.
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const D50_TO_D65: Transform = transform_3x3(
             0.9554734527042182,   -0.028369706963208136, 0.012314001688319899,
            -0.023098536874261423,  1.0099954580058226,  -0.020507696433477912,
             0.0632593086610217,    0.021041398966943008, 1.3303659366080753,
        );

        transform(&D50_TO_D65, from)
    }
}

impl TransferWhitePoint<D50> for D65 {
    fn transfer(from: Components) -> Components {
        // Bradford chromatic adaptation.
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const D65_TO_D50: Transform = transform_3x3(
             1.0479298208405488,    0.029627815688159344, -0.009243058152591178,
             0.022946793341019088,  0.990434484573249,     0.015055144896577895,
            -0.05019222954313557,  -0.01707382502938514,   0.7518742899580008,
        );

        transform(&D65_TO_D50, from)
    }
}

/// Specify that a color model supports conversion to CIE-XYZ.
pub trait ToXyz<W: WhitePoint> {
    /// Convert this color to CIE-XYZ.
    fn to_xyz(&self) -> Xyz<W>;
}

huekit_macros::gen_model! {
    /// A model for a color in the CIE-XYZ color space with a specified white point reference.
    pub struct Xyz<W: WhitePoint> {
        /// The X component of the color.
        pub x: Component,
        /// The Y component of the color.
        pub y: Component,
        /// The Z component of the color.
        pub z: Component,
    }
}

impl<W: WhitePoint> Xyz<W> {
    /// Adapt this color to another white point.
    pub fn transfer<To: WhitePoint>(&self) -> Xyz<To>
    where
        W: TransferWhitePoint<To>,
    {
        <W as TransferWhitePoint<To>>::transfer(self.to_components()).into()
    }
}

/// Model for a color in the CIE-XYZ color space with a D50 white point.
pub type XyzD50 = Xyz<D50>;

impl HasSpace for XyzD50 {
    const SPACE: Space = Space::XyzD50;
}

/// Model for a color in the CIE-XYZ color space with a D65 white point.
pub type XyzD65 = Xyz<D65>;

impl HasSpace for XyzD65 {
    const SPACE: Space = Space::XyzD65;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, color::Color, models::Model};

    #[test]
    fn to_and_from_color() {
        let color = Color::new(Space::XyzD50, 0.1, 0.2, 0.3, 0.4);

        let model = XyzD50::to_model(&color);
        assert_eq!(model.x, 0.1);
        assert_eq!(model.y, 0.2);
        assert_eq!(model.z, 0.3);

        let back = model.to_color(color.alpha());
        assert_eq!(back, color);
    }

    #[test]
    fn white_points_adapt_onto_each_other() {
        let d65 = XyzD65::from(D65::WHITE_POINT);
        let d50 = d65.transfer::<D50>();
        assert_component_eq!(d50.x, D50::WHITE_POINT.0);
        assert_component_eq!(d50.y, D50::WHITE_POINT.1);
        assert_component_eq!(d50.z, D50::WHITE_POINT.2);

        let back = d50.transfer::<D65>();
        assert_component_eq!(back.x, D65::WHITE_POINT.0);
        assert_component_eq!(back.z, D65::WHITE_POINT.2);

        let same = d50.transfer::<D50>();
        assert_eq!(same.to_components(), d50.to_components());
    }
}
