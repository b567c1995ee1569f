//! Conversion of a [`Color`] between spaces and the direct conversions
//! between the sRGB based notations.
//!
//! ```rust
//! use huekit::{Color, Space};
//! let chocolate = Color::rgb(210, 105, 30);
//! let hsl = chocolate.to_space(Space::Hsl);
//! assert!((hsl.components().0 - 25.0).abs() < 1.0e-3);
//! ```

use crate::{
    color::{Color, Components, HasSpace, Space},
    models::{
        base::{FromBase, ToBase},
        Hsl, Hsv, Lab, Lch, Model, Oklab, Oklch, Srgb, SrgbLinear, XyzD50, XyzD65,
    },
};

impl Color {
    /// Convert this color from its current color space/notation to the
    /// specified color space/notation.
    pub fn to_space(&self, space: Space) -> Self {
        use Space as S;

        if self.space() == space {
            return self.clone();
        }

        log::trace!("converting {:?} to {:?}", self.space(), space);

        let alpha = self.alpha();

        // Handle direct conversions.
        match (self.space(), space) {
            (S::Srgb, S::SrgbLinear) => {
                return self.as_model::<Srgb>().to_linear_light().to_color(alpha)
            }
            (S::SrgbLinear, S::Srgb) => {
                return self
                    .as_model::<SrgbLinear>()
                    .to_gamma_encoded()
                    .to_color(alpha)
            }
            (S::Srgb, S::Hsl) => return self.as_model::<Srgb>().to_hsl().to_color(alpha),
            (S::Hsl, S::Srgb) => return self.as_model::<Hsl>().to_srgb().to_color(alpha),
            (S::Srgb, S::Hsv) => return self.as_model::<Srgb>().to_hsv().to_color(alpha),
            (S::Hsv, S::Srgb) => return self.as_model::<Hsv>().to_srgb().to_color(alpha),
            (S::Hsl, S::Hsv) => {
                return self
                    .as_model::<Hsl>()
                    .to_srgb()
                    .to_hsv()
                    .to_color(alpha)
            }
            (S::Hsv, S::Hsl) => {
                return self
                    .as_model::<Hsv>()
                    .to_srgb()
                    .to_hsl()
                    .to_color(alpha)
            }
            (S::Lab, S::Lch) => return self.as_model::<Lab>().to_polar().to_color(alpha),
            (S::Lch, S::Lab) => return self.as_model::<Lch>().to_rectangular().to_color(alpha),
            (S::Oklab, S::Oklch) => return self.as_model::<Oklab>().to_polar().to_color(alpha),
            (S::Oklch, S::Oklab) => {
                return self
                    .as_model::<Oklch>()
                    .to_rectangular()
                    .to_color(alpha)
            }
            _ => {}
        }

        macro_rules! to_base {
            ($m:ident) => {{
                self.as_model::<$m>().to_base()
            }};
        }

        // The rest converts through XyzD65.
        let base = match self.space() {
            S::Srgb => to_base!(Srgb),
            S::SrgbLinear => to_base!(SrgbLinear),
            S::Hsl => to_base!(Hsl),
            S::Hsv => to_base!(Hsv),
            S::Lab => to_base!(Lab),
            S::Lch => to_base!(Lch),
            S::Oklab => to_base!(Oklab),
            S::Oklch => to_base!(Oklch),
            S::XyzD50 => to_base!(XyzD50),
            S::XyzD65 => to_base!(XyzD65),
        };

        match space {
            S::Srgb => Srgb::from_base(&base).to_color(alpha),
            S::SrgbLinear => SrgbLinear::from_base(&base).to_color(alpha),
            S::Hsl => Hsl::from_base(&base).to_color(alpha),
            S::Hsv => Hsv::from_base(&base).to_color(alpha),
            S::Lab => Lab::from_base(&base).to_color(alpha),
            S::Lch => Lch::from_base(&base).to_color(alpha),
            S::Oklab => Oklab::from_base(&base).to_color(alpha),
            S::Oklch => Oklch::from_base(&base).to_color(alpha),
            S::XyzD50 => XyzD50::from_base(&base).to_color(alpha),
            S::XyzD65 => XyzD65::from_base(&base).to_color(alpha),
        }
    }

    /// Convert this color into the given model, converting between spaces
    /// first if needed.
    /// ```rust
    /// use huekit::{models::Hsl, Color};
    /// let hsl = Color::rgb(255, 0, 0).to_model::<Hsl>();
    /// assert_eq!(hsl.hue, 0.0);
    /// ```
    pub fn to_model<M: Model + HasSpace>(&self) -> M {
        M::to_model(&self.to_space(M::SPACE))
    }

    /// Read the components as the given model without any conversion. The
    /// caller makes sure the color is in the model's space.
    fn as_model<M: Model + HasSpace>(&self) -> M {
        debug_assert_eq!(self.space(), M::SPACE);
        M::to_model(self)
    }
}

impl Srgb {
    /// Convert a color specified in the sRGB color space to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        util::rgb_to_hsl(&self.to_components()).into()
    }

    /// Convert a color specified in the sRGB color space to the HSV notation.
    pub fn to_hsv(&self) -> Hsv {
        util::rgb_to_hsv(&self.to_components()).into()
    }
}

impl Hsl {
    /// Convert this color from the HSL notation to the sRGB color space.
    pub fn to_srgb(&self) -> Srgb {
        util::hsl_to_rgb(&Components(self.hue, self.saturation, self.lightness)).into()
    }
}

impl Hsv {
    /// Convert this color from the HSV notation to the sRGB color space.
    pub fn to_srgb(&self) -> Srgb {
        util::hsv_to_rgb(&Components(self.hue, self.saturation, self.value)).into()
    }
}

mod util {
    use crate::{
        color::{Component, Components},
        math::{almost_zero, normalize, normalize_hue},
    };

    /// Calculate the hue from RGB components and return it along with the min
    /// and max RGB values.
    fn rgb_to_hue_with_min_max(from: &Components) -> (Component, Component, Component) {
        let Components(red, green, blue) = *from;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);

        let delta = max - min;

        let hue = if !almost_zero(delta) {
            60.0 * if max == red {
                (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            }
        } else {
            Component::NAN
        };

        (hue, min, max)
    }

    /// Convert from RGB notation to HSL notation.
    /// <https://drafts.csswg.org/css-color-4/#rgb-to-hsl>
    pub fn rgb_to_hsl(from: &Components) -> Components {
        let (hue, min, max) = rgb_to_hue_with_min_max(from);

        let lightness = (min + max) / 2.0;
        let delta = max - min;

        let saturation =
            if almost_zero(delta) || almost_zero(lightness) || almost_zero(1.0 - lightness) {
                0.0
            } else {
                (max - lightness) / lightness.min(1.0 - lightness)
            };

        Components(hue, saturation, lightness)
    }

    /// Convert from HSL notation to RGB notation.
    /// <https://drafts.csswg.org/css-color-4/#hsl-to-rgb>
    pub fn hsl_to_rgb(from: &Components) -> Components {
        let Components(hue, saturation, lightness) = from.map(normalize);

        if saturation <= 0.0 {
            return Components(lightness, lightness, lightness);
        }

        let hue = normalize_hue(hue);

        macro_rules! f {
            ($n:expr) => {{
                let k = ($n + hue / 30.0) % 12.0;
                let a = saturation * lightness.min(1.0 - lightness);
                lightness - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
            }};
        }

        Components(f!(0.0), f!(8.0), f!(4.0))
    }

    /// Convert from RGB notation to HSV notation.
    pub fn rgb_to_hsv(from: &Components) -> Components {
        let (hue, min, max) = rgb_to_hue_with_min_max(from);

        let saturation = if almost_zero(max) {
            0.0
        } else {
            (max - min) / max
        };

        Components(hue, saturation, max)
    }

    /// Convert from HSV notation to RGB notation.
    pub fn hsv_to_rgb(from: &Components) -> Components {
        let Components(hue, saturation, value) = from.map(normalize);

        if saturation <= 0.0 {
            return Components(value, value, value);
        }

        let hue = normalize_hue(hue);

        macro_rules! f {
            ($n:expr) => {{
                let k = ($n + hue / 60.0) % 6.0;
                value - value * saturation * k.min(4.0 - k).clamp(0.0, 1.0)
            }};
        }

        Components(f!(5.0), f!(3.0), f!(1.0))
    }
}
