//! Lightness plus two opponent axes (Lab, Oklab) and the same coordinates
//! expressed as chroma and hue (LCH, OKLCH).

use crate::{
    color::{Component, Components, HasSpace, Space},
    math::{normalize_hue, transform, transform_3x3, Transform},
    models::xyz::{ToXyz, WhitePoint, Xyz, XyzD50, XyzD65, D50, D65},
};

/// Chroma below this value has no perceivable hue, which makes the hue
/// powerless.
const ACHROMATIC_CHROMA: Component = 2.0e-4;

mod space {
    pub trait Space {}

    #[derive(Clone, Debug)]
    pub struct Lab;
    impl Space for Lab {}

    #[derive(Clone, Debug)]
    pub struct Oklab;
    impl Space for Oklab {}
}

huekit_macros::gen_model! {
    /// Lightness with the `a` (green to red) and `b` (blue to yellow) axes.
    pub struct Rectangular<S: space::Space> {
        /// Perceived lightness.
        pub lightness: Component,
        /// Position on the green to red axis.
        pub a: Component,
        /// Position on the blue to yellow axis.
        pub b: Component,
    }
}

impl<S: space::Space> Rectangular<S> {
    /// Chroma is the distance from the neutral axis and hue its angle in
    /// degrees. Near-neutral colors get a NaN (powerless) hue.
    pub fn to_polar(&self) -> Polar<S> {
        let chroma = (self.a * self.a + self.b * self.b).sqrt();
        let hue = if chroma < ACHROMATIC_CHROMA {
            Component::NAN
        } else {
            normalize_hue(self.b.atan2(self.a).to_degrees())
        };

        Polar::new(self.lightness, chroma, hue)
    }
}

huekit_macros::gen_model! {
    /// Lightness, chroma and hue angle.
    pub struct Polar<S: space::Space> {
        /// Perceived lightness.
        pub lightness: Component,
        /// Distance from the neutral axis.
        pub chroma: Component,
        /// Angle around the neutral axis, in degrees.
        pub hue: Component,
    }
}

impl<S: space::Space> Polar<S> {
    /// Project chroma and hue back onto the `a` and `b` axes.
    pub fn to_rectangular(&self) -> Rectangular<S> {
        let hue = self.hue.to_radians();
        let a = self.chroma * hue.cos();
        let b = self.chroma * hue.sin();

        Rectangular::new(self.lightness, a, b)
    }
}

/// CIE Lab relative to the D50 white.
pub type Lab = Rectangular<space::Lab>;

impl HasSpace for Lab {
    const SPACE: Space = Space::Lab;
}

const KAPPA: Component = 24389.0 / 27.0;
const EPSILON: Component = 216.0 / 24389.0;

impl ToXyz<D50> for Lab {
    fn to_xyz(&self) -> Xyz<D50> {
        let (lightness, a, b) = (self.lightness, self.a, self.b);

        let f1 = (lightness + 16.0) / 116.0;
        let f0 = f1 + a / 500.0;
        let f2 = f1 - b / 200.0;

        let f0_cubed = f0 * f0 * f0;
        let x = if f0_cubed > EPSILON {
            f0_cubed
        } else {
            (116.0 * f0 - 16.0) / KAPPA
        };

        let y = if lightness > KAPPA * EPSILON {
            f1 * f1 * f1
        } else {
            lightness / KAPPA
        };

        let f2_cubed = f2 * f2 * f2;
        let z = if f2_cubed > EPSILON {
            f2_cubed
        } else {
            (116.0 * f2 - 16.0) / KAPPA
        };

        Xyz::new(
            x * D50::WHITE_POINT.0,
            y * D50::WHITE_POINT.1,
            z * D50::WHITE_POINT.2,
        )
    }
}

impl From<XyzD50> for Lab {
    fn from(value: XyzD50) -> Self {
        let adapted = Components(
            value.x / D50::WHITE_POINT.0,
            value.y / D50::WHITE_POINT.1,
            value.z / D50::WHITE_POINT.2,
        );

        let Components(f0, f1, f2) = adapted.map(|v| {
            if v > EPSILON {
                v.cbrt()
            } else {
                (KAPPA * v + 16.0) / 116.0
            }
        });

        Lab::new(116.0 * f1 - 16.0, 500.0 * (f0 - f1), 200.0 * (f1 - f2))
    }
}

/// CIE LCH, the polar form of [`Lab`].
pub type Lch = Polar<space::Lab>;

impl HasSpace for Lch {
    const SPACE: Space = Space::Lch;
}

/// Oklab, computed from D65 XYZ through the LMS cone response.
pub type Oklab = Rectangular<space::Oklab>;

impl HasSpace for Oklab {
    const SPACE: Space = Space::Oklab;
}

impl From<XyzD65> for Oklab {
    fn from(value: XyzD65) -> Self {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const XYZ_TO_LMS: Transform = transform_3x3(
             0.8190224432164319,  0.0329836671980271,  0.048177199566046255,
             0.3619062562801221,  0.9292868468965546,  0.26423952494422764,
            -0.12887378261216414, 0.03614466816999844, 0.6335478258136937,
        );

        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const LMS_TO_OKLAB: Transform = transform_3x3(
             0.2104542553,  1.9779984951,  0.0259040371,
             0.7936177850, -2.4285922050,  0.7827717662,
            -0.0040720468,  0.4505937099, -0.8086757660,
        );

        let lms = transform(&XYZ_TO_LMS, value.to_components());
        transform(&LMS_TO_OKLAB, lms.map(|v| v.cbrt())).into()
    }
}

impl ToXyz<D65> for Oklab {
    fn to_xyz(&self) -> Xyz<D65> {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const OKLAB_TO_LMS: Transform = transform_3x3(
            0.99999999845051981432,  1.0000000088817607767,    1.0000000546724109177,
            0.39633779217376785678, -0.1055613423236563494,   -0.089484182094965759684,
            0.21580375806075880339, -0.063854174771705903402, -1.2914855378640917399,
        );

        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const LMS_TO_XYZ: Transform = transform_3x3(
             1.2268798733741557,  -0.04057576262431372, -0.07637294974672142,
            -0.5578149965554813,   1.1122868293970594,  -0.4214933239627914,
             0.28139105017721583, -0.07171106666151701,  1.5869240244272418,
        );

        let lms = transform(&OKLAB_TO_LMS, self.to_components());
        transform(&LMS_TO_XYZ, lms.map(|v| v * v * v)).into()
    }
}

/// OKLCH, the polar form of [`Oklab`].
pub type Oklch = Polar<space::Oklab>;

impl HasSpace for Oklch {
    const SPACE: Space = Space::Oklch;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn neutral_colors_have_a_powerless_hue() {
        let lab = Lab::new(50.0, 0.0, 0.0);
        assert!(lab.to_polar().hue.is_nan());
        assert_eq!(lab.to_polar().chroma, 0.0);

        let oklab = Oklab::new(1.0, 0.00001, -0.00001);
        assert!(oklab.to_polar().hue.is_nan());
    }

    #[test]
    fn polar_round_trip() {
        let lch = Lab::new(56.6293, 39.23708, 57.553769).to_polar();
        assert!((lch.hue - 55.715927).abs() < 1.0e-3);

        let lab = lch.to_rectangular();
        assert!((lab.a - 39.23708).abs() < 1.0e-3);
        assert!((lab.b - 57.553769).abs() < 1.0e-3);
    }

    #[test]
    fn d65_white_has_no_oklab_chroma() {
        let oklab = Oklab::from(XyzD65::from(D65::WHITE_POINT));
        assert_component_eq!(oklab.lightness, 1.0);
        assert!(oklab.to_polar().hue.is_nan());
    }
}
