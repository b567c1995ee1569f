//! A [`Color`] represents a color that was specified in any of the supported
//! color spaces.

use std::ops::Sub;

use bitflags::bitflags;

use crate::error::{Error, Result};

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all components are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

impl Sub for Components {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0, self.1 - rhs.1, self.2 - rhs.2)
    }
}

bitflags! {
    /// Flags to mark any missing components on a [`Color`]
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct Flags : u8 {
        /// Set when the first component of a [`Color`] is missing.
        const C0_IS_NONE = 1 << 0;
        /// Set when the second component of a [`Color`] is missing.
        const C1_IS_NONE = 1 << 1;
        /// Set when the third component of a [`Color`] is missing.
        const C2_IS_NONE = 1 << 2;
        /// Set when the alpha component of a [`Color`] is missing.
        const ALPHA_IS_NONE = 1 << 3;
    }
}

/// The color spaces and notations a [`Color`] can be expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Space {
    /// The sRGB color space, gamma encoded, components in `[0..1]`.
    Srgb = 0,
    /// The sRGB color space with no gamma encoding.
    SrgbLinear = 1,
    /// Hue (degrees), saturation and lightness (both `[0..1]`) in the sRGB
    /// color space.
    Hsl = 2,
    /// Hue (degrees), saturation and value (both `[0..1]`) in the sRGB color
    /// space.
    Hsv = 3,
    /// CIE-Lab with a D50 white point.
    Lab = 4,
    /// CIE-Lch, the polar form of [`Space::Lab`].
    Lch = 5,
    /// Oklab.
    Oklab = 6,
    /// Oklch, the polar form of [`Space::Oklab`].
    Oklch = 7,
    /// CIE-XYZ with a D50 white point.
    XyzD50 = 8,
    /// CIE-XYZ with a D65 white point.
    XyzD65 = 9,
}

impl Space {
    /// The index of the component holding the hue, for polar and cylindrical
    /// spaces.
    pub fn hue_index(self) -> Option<usize> {
        match self {
            Space::Hsl | Space::Hsv => Some(0),
            Space::Lch | Space::Oklch => Some(2),
            _ => None,
        }
    }
}

/// Implemented by color models to identify the [`Space`] they represent.
pub trait HasSpace {
    /// The space the model's components are expressed in.
    const SPACE: Space;
}

/// An immutable color value in any of the supported color spaces.
#[derive(Clone, Debug, PartialEq)]
pub struct Color {
    components: Components,
    alpha: Component,
    flags: Flags,
    space: Space,
}

impl Color {
    /// Create a new [`Color`]. Each color or alpha component can take values
    /// that can be converted into a [`ComponentDetails`]. This automates the
    /// process of settings values to missing. For example:
    /// ```rust
    /// use huekit::{Color, Space};
    /// let c = Color::new(Space::Hsl, None, 0.0, 0.5, None);
    /// assert_eq!(c.c0(), None);
    /// ```
    /// creates a gray with a missing hue and no alpha.
    pub fn new(
        space: Space,
        c0: impl Into<ComponentDetails>,
        c1: impl Into<ComponentDetails>,
        c2: impl Into<ComponentDetails>,
        alpha: impl Into<ComponentDetails>,
    ) -> Self {
        let mut flags = Flags::empty();

        let c0 = c0.into().value_and_flag(&mut flags, Flags::C0_IS_NONE);
        let c1 = c1.into().value_and_flag(&mut flags, Flags::C1_IS_NONE);
        let c2 = c2.into().value_and_flag(&mut flags, Flags::C2_IS_NONE);
        let alpha = alpha
            .into()
            .value_and_flag(&mut flags, Flags::ALPHA_IS_NONE);

        Self {
            components: Components(c0, c1, c2),
            alpha,
            flags,
            space,
        }
    }

    /// Create an opaque sRGB color from 8-bit channels.
    pub fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::new(
            Space::Srgb,
            red as Component / 255.0,
            green as Component / 255.0,
            blue as Component / 255.0,
            None,
        )
    }

    /// Create an sRGB color from 8-bit channels and an alpha in `[0..1]`.
    pub fn rgba(red: u8, green: u8, blue: u8, alpha: Component) -> Result<Self> {
        let alpha = check_unit("alpha", alpha)?;
        Ok(Self::new(
            Space::Srgb,
            red as Component / 255.0,
            green as Component / 255.0,
            blue as Component / 255.0,
            alpha,
        ))
    }

    /// Create a color from a hue in degrees (any finite value, it wraps) and
    /// a saturation and lightness in `[0..1]`.
    pub fn hsl(hue: Component, saturation: Component, lightness: Component) -> Result<Self> {
        Ok(Self::new(
            Space::Hsl,
            check_finite("hue", hue)?,
            check_unit("saturation", saturation)?,
            check_unit("lightness", lightness)?,
            None,
        ))
    }

    /// Same as [`Color::hsl`] with an alpha in `[0..1]`.
    pub fn hsla(
        hue: Component,
        saturation: Component,
        lightness: Component,
        alpha: Component,
    ) -> Result<Self> {
        let alpha = check_unit("alpha", alpha)?;
        Ok(Self {
            alpha,
            flags: Flags::empty(),
            ..Self::hsl(hue, saturation, lightness)?
        })
    }

    /// Create a color from an Oklch lightness in `[0..1]`, a non-negative
    /// chroma and a hue in degrees.
    pub fn oklch(lightness: Component, chroma: Component, hue: Component) -> Result<Self> {
        let chroma = check_finite("chroma", chroma)?;
        if chroma < 0.0 {
            return Err(Error::ColorDomain {
                channel: "chroma",
                value: chroma,
                domain: "[0, +inf)",
            });
        }
        Ok(Self::new(
            Space::Oklch,
            check_unit("lightness", lightness)?,
            chroma,
            check_finite("hue", hue)?,
            None,
        ))
    }

    /// Same as [`Color::oklch`] with an alpha in `[0..1]`.
    pub fn oklcha(
        lightness: Component,
        chroma: Component,
        hue: Component,
        alpha: Component,
    ) -> Result<Self> {
        let alpha = check_unit("alpha", alpha)?;
        Ok(Self {
            alpha,
            flags: Flags::empty(),
            ..Self::oklch(lightness, chroma, hue)?
        })
    }

    /// The three components in the color's own space. Missing components
    /// read as zero.
    pub fn components(&self) -> Components {
        self.components
    }

    /// The space the components are expressed in.
    pub fn space(&self) -> Space {
        self.space
    }

    /// The flags marking missing components.
    pub fn flags(&self) -> Flags {
        self.flags
    }

    /// Return the first component of the color.
    pub fn c0(&self) -> Option<Component> {
        if self.flags.contains(Flags::C0_IS_NONE) {
            None
        } else {
            Some(self.components.0)
        }
    }

    /// Return the second component of the color.
    pub fn c1(&self) -> Option<Component> {
        if self.flags.contains(Flags::C1_IS_NONE) {
            None
        } else {
            Some(self.components.1)
        }
    }

    /// Return the third component of the color.
    pub fn c2(&self) -> Option<Component> {
        if self.flags.contains(Flags::C2_IS_NONE) {
            None
        } else {
            Some(self.components.2)
        }
    }

    /// Return the component at `index` (0, 1 or 2).
    pub fn component(&self, index: usize) -> Option<Component> {
        match index {
            0 => self.c0(),
            1 => self.c1(),
            2 => self.c2(),
            _ => None,
        }
    }

    /// Return the alpha component of the color.
    pub fn alpha(&self) -> Option<Component> {
        if self.flags.contains(Flags::ALPHA_IS_NONE) {
            None
        } else {
            Some(self.alpha)
        }
    }
}

fn check_finite(channel: &'static str, value: Component) -> Result<Component> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::ColorDomain {
            channel,
            value,
            domain: "finite numbers",
        })
    }
}

pub(crate) fn check_unit(channel: &'static str, value: Component) -> Result<Component> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(Error::ColorDomain {
            channel,
            value,
            domain: "[0, 1]",
        })
    }
}

/// A struct that holds details about a component passed to any of the `new`
/// functions for color models. Any components that can be passed implements
/// a `From<?> for ComponentDetails`.
pub struct ComponentDetails {
    value: Component,
    is_none: bool,
}

impl ComponentDetails {
    /// Extract the value and set the given flag if the component is none.
    pub fn value_and_flag(&self, flags: &mut Flags, flag: Flags) -> Component {
        if self.is_none {
            *flags |= flag;
        }
        self.value
    }
}

impl From<Component> for ComponentDetails {
    fn from(value: Component) -> Self {
        Self {
            value,
            is_none: false,
        }
    }
}

impl From<Option<Component>> for ComponentDetails {
    fn from(value: Option<Component>) -> Self {
        if let Some(value) = value {
            Self::from(value)
        } else {
            Self {
                value: 0.0,
                is_none: true,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_color_with_correct_components() {
        let c = Color::new(Space::Srgb, 0.1, 0.2, 0.3, 0.4);
        assert_eq!(c.components(), Components(0.1, 0.2, 0.3));
        assert_eq!(c.alpha(), Some(0.4));
        assert_eq!(c.flags(), Flags::empty());
        assert_eq!(c.space(), Space::Srgb);

        let c = Color::new(Space::Srgb, 0.1, 0.2, None, 0.4);
        assert_eq!(c.components().2, 0.0);
        assert_eq!(c.c2(), None);
        assert_eq!(c.flags(), Flags::C2_IS_NONE);

        let c = Color::new(Space::Srgb, 0.1, 0.2, 0.3, None);
        assert_eq!(c.components(), Components(0.1, 0.2, 0.3));
        assert_eq!(c.alpha(), None);
        assert_eq!(c.flags(), Flags::ALPHA_IS_NONE);
    }

    #[test]
    fn test_component_details() {
        let cd = ComponentDetails::from(10.0);
        assert_eq!(cd.value, 10.0);
        assert!(!cd.is_none);

        let cd = ComponentDetails::from(Component::NAN);
        assert!(cd.value.is_nan());
        assert!(!cd.is_none);

        let cd = ComponentDetails::from(None);
        assert_eq!(cd.value, 0.0);
        assert!(cd.is_none);
    }

    #[test]
    fn rgb_channels_are_scaled_to_unit_range() {
        let c = Color::rgb(255, 0, 51);
        assert_eq!(c.space(), Space::Srgb);
        assert_eq!(c.components(), Components(1.0, 0.0, 0.2));
        assert_eq!(c.alpha(), None);
    }

    #[test]
    fn checked_constructors_reject_values_outside_their_domain() {
        assert!(Color::rgba(0, 0, 0, 2.0).unwrap_err().is_domain_error());
        assert!(Color::hsl(0.0, 1.5, 0.5).unwrap_err().is_domain_error());
        assert!(Color::hsl(Component::NAN, 0.5, 0.5).is_err());
        assert!(Color::oklch(1.2, 0.1, 30.0).is_err());
        assert!(Color::oklch(0.5, -0.1, 30.0).is_err());

        assert!(Color::hsl(-400.0, 1.0, 0.5).is_ok());
        assert_eq!(Color::hsla(10.0, 0.5, 0.5, 0.25).unwrap().alpha(), Some(0.25));
        assert_eq!(Color::oklcha(0.5, 0.1, 10.0, 1.0).unwrap().alpha(), Some(1.0));
    }

    #[test]
    fn hue_index_of_cylindrical_spaces() {
        assert_eq!(Space::Hsl.hue_index(), Some(0));
        assert_eq!(Space::Oklch.hue_index(), Some(2));
        assert_eq!(Space::Lab.hue_index(), None);
    }
}
