//! Weighted blending of colors in a choice of interpolation spaces.

use std::{fmt, str::FromStr};

use num_traits::Float;

use crate::{
    color::{check_unit, Color, Component, Space},
    error::{Error, Result},
    math::normalize_hue,
};

/// The color space a blend averages the channels in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationSpace {
    /// Gamma encoded sRGB.
    #[default]
    Rgb,
    /// Hue, saturation and lightness.
    Hsl,
    /// Hue, saturation and value.
    Hsv,
    /// CIE Lab.
    Lab,
    /// CIE LCH.
    Lch,
    /// CIE LCH with the channels listed as hue, chroma, lightness.
    Hcl,
}

impl InterpolationSpace {
    /// Every interpolation space.
    pub const ALL: [InterpolationSpace; 6] = [
        InterpolationSpace::Rgb,
        InterpolationSpace::Hsl,
        InterpolationSpace::Hsv,
        InterpolationSpace::Lab,
        InterpolationSpace::Lch,
        InterpolationSpace::Hcl,
    ];

    /// The lowercase name of the space.
    pub fn name(self) -> &'static str {
        match self {
            InterpolationSpace::Rgb => "rgb",
            InterpolationSpace::Hsl => "hsl",
            InterpolationSpace::Hsv => "hsv",
            InterpolationSpace::Lab => "lab",
            InterpolationSpace::Lch => "lch",
            InterpolationSpace::Hcl => "hcl",
        }
    }

    /// The color space the channels are averaged in.
    pub fn space(self) -> Space {
        match self {
            InterpolationSpace::Rgb => Space::Srgb,
            InterpolationSpace::Hsl => Space::Hsl,
            InterpolationSpace::Hsv => Space::Hsv,
            InterpolationSpace::Lab => Space::Lab,
            InterpolationSpace::Lch | InterpolationSpace::Hcl => Space::Lch,
        }
    }
}

impl fmt::Display for InterpolationSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InterpolationSpace {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|space| space.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::MalformedInput(s.to_string()))
    }
}

/// A color and its weight in a blend, from 0 to 100.
#[derive(Clone, Debug, PartialEq)]
pub struct WeightedColor {
    /// The color.
    pub color: Color,
    /// The weight of the color, from 0 to 100.
    pub weight: Component,
}

impl WeightedColor {
    /// Create a new weighted color.
    pub fn new(color: Color, weight: Component) -> Self {
        Self { color, weight }
    }
}

/// A list of weighted colors and the space to blend them in.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MixInput {
    /// The colors to blend.
    pub colors: Vec<WeightedColor>,
    /// The space the channels are averaged in.
    pub space: InterpolationSpace,
}

impl MixInput {
    /// Create a new blend input.
    pub fn new(colors: Vec<WeightedColor>, space: InterpolationSpace) -> Self {
        Self { colors, space }
    }

    /// See [`blend`].
    pub fn blend(&self) -> Result<Color> {
        blend(&self.colors, self.space)
    }
}

/// Alpha values this close to 1 are snapped to 1.
const OPAQUE_THRESHOLD: Component = 0.99999;

/// Weighted arithmetic mean of the values that are present.
fn weighted_mean<T: Float>(values: impl Iterator<Item = (Option<T>, T)>) -> Option<T> {
    let (sum, total) = values
        .filter_map(|(value, weight)| value.map(|v| (v * weight, weight)))
        .fold((T::zero(), T::zero()), |(sum, total), (v, w)| {
            (sum + v, total + w)
        });
    (total > T::zero()).then(|| sum / total)
}

/// Weighted circular mean of the angles, in degrees, that are present.
fn circular_mean<T: Float>(angles: impl Iterator<Item = (Option<T>, T)>) -> Option<T> {
    let (sin, cos, total) = angles
        .filter_map(|(angle, weight)| angle.map(|a| (a.to_radians(), weight)))
        .fold(
            (T::zero(), T::zero(), T::zero()),
            |(sin, cos, total), (a, w)| (sin + a.sin() * w, cos + a.cos() * w, total + w),
        );
    (total > T::zero()).then(|| sin.atan2(cos).to_degrees())
}

fn check_weight(weight: Component) -> Result<Component> {
    if weight.is_finite() && (0.0..=100.0).contains(&weight) {
        Ok(weight / 100.0)
    } else {
        Err(Error::ColorDomain {
            channel: "weight",
            value: weight,
            domain: "[0, 100]",
        })
    }
}

/// Blend the colors by averaging their channels in `space`, each color
/// counting in proportion to its weight. Hues are averaged on the circle and
/// colors with a missing hue do not contribute to it. The result is in sRGB.
///
/// ```rust
/// use huekit::{blend, Color, InterpolationSpace, WeightedColor};
/// let colors = [
///     WeightedColor::new(Color::rgb(255, 0, 0), 50.0),
///     WeightedColor::new(Color::rgb(0, 0, 255), 50.0),
/// ];
/// let mixed = blend(&colors, InterpolationSpace::Rgb).unwrap();
/// assert_eq!(mixed.to_hex(), "#800080");
/// ```
pub fn blend(colors: &[WeightedColor], space: InterpolationSpace) -> Result<Color> {
    let weights = colors
        .iter()
        .map(|c| check_weight(c.weight))
        .collect::<Result<Vec<_>>>()?;

    match colors {
        [] => {
            log::warn!("rejected a blend without colors");
            return Err(Error::EmptyBlend);
        }
        [single] => return Ok(single.color.clone()),
        _ => {}
    }

    if weights.iter().all(|w| *w == 0.0) {
        log::warn!("rejected a blend of {} colors with zero weights", colors.len());
        return Err(Error::ZeroBlendWeight);
    }

    let target = space.space();
    let converted: Vec<Color> = colors.iter().map(|c| c.color.to_space(target)).collect();
    let hue_index = target.hue_index();

    let channel = |index: usize| {
        let values = converted
            .iter()
            .map(|c| c.component(index))
            .zip(weights.iter().copied());
        if hue_index == Some(index) {
            circular_mean(values).map(normalize_hue)
        } else {
            weighted_mean(values)
        }
    };

    let alpha = if converted.iter().any(|c| c.alpha().is_some()) {
        weighted_mean(
            converted
                .iter()
                .map(|c| Some(c.alpha().unwrap_or(1.0)))
                .zip(weights.iter().copied()),
        )
        .map(|a| if a > OPAQUE_THRESHOLD { 1.0 } else { a })
    } else {
        None
    };

    let mixed = Color::new(target, channel(0), channel(1), channel(2), alpha);

    log::trace!("blended {} colors in {} into {:?}", colors.len(), space, mixed);

    Ok(mixed.to_space(Space::Srgb))
}

impl Color {
    /// Blend this color with `other`, where a `factor` of 0 gives this color
    /// and 1 gives `other`. See [`blend`].
    pub fn mix(&self, other: &Color, factor: Component, space: InterpolationSpace) -> Result<Color> {
        let factor = check_unit("factor", factor)?;
        blend(
            &[
                WeightedColor::new(self.clone(), (1.0 - factor) * 100.0),
                WeightedColor::new(other.clone(), factor * 100.0),
            ],
            space,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_hex_close;

    fn red_and_blue() -> [WeightedColor; 2] {
        [
            WeightedColor::new(Color::rgb(255, 0, 0), 50.0),
            WeightedColor::new(Color::rgb(0, 0, 255), 50.0),
        ]
    }

    #[test]
    fn red_and_blue_in_rgb() {
        let mixed = blend(&red_and_blue(), InterpolationSpace::Rgb).unwrap();
        assert_eq!(mixed.to_hex(), "#800080");
        assert_eq!(mixed.space(), Space::Srgb);
        assert_eq!(mixed.alpha(), None);
    }

    #[test]
    fn red_and_blue_in_hsl() {
        let mixed = blend(&red_and_blue(), InterpolationSpace::Hsl).unwrap();
        assert_eq!(mixed.to_hex(), "#FF00FF");
        let mixed = blend(&red_and_blue(), InterpolationSpace::Hsv).unwrap();
        assert_eq!(mixed.to_hex(), "#FF00FF");
    }

    #[test]
    fn hcl_is_lch() {
        let lch = blend(&red_and_blue(), InterpolationSpace::Lch).unwrap();
        let hcl = blend(&red_and_blue(), InterpolationSpace::Hcl).unwrap();
        assert_eq!(lch, hcl);
    }

    #[test]
    fn weights_are_relative() {
        let colors = [
            WeightedColor::new(Color::rgb(255, 0, 0), 10.0),
            WeightedColor::new(Color::rgb(0, 0, 255), 10.0),
        ];
        let mixed = blend(&colors, InterpolationSpace::Rgb).unwrap();
        assert_eq!(mixed.to_hex(), "#800080");

        let colors = [
            WeightedColor::new(Color::rgb(255, 0, 0), 100.0),
            WeightedColor::new(Color::rgb(0, 0, 255), 0.0),
        ];
        for space in InterpolationSpace::ALL {
            let mixed = blend(&colors, space).unwrap();
            assert_hex_close!(mixed.to_hex(), "#FF0000");
        }
    }

    #[test]
    fn single_color_is_returned_unweighted() {
        let c = Color::hsl(120.0, 0.5, 0.5).unwrap();
        let mixed = blend(&[WeightedColor::new(c.clone(), 0.0)], InterpolationSpace::Lab).unwrap();
        assert_eq!(mixed, c);
    }

    #[test]
    fn degenerate_blends() {
        assert_eq!(blend(&[], InterpolationSpace::Rgb), Err(Error::EmptyBlend));

        let mut colors = red_and_blue();
        colors[0].weight = 0.0;
        colors[1].weight = 0.0;
        assert_eq!(
            blend(&colors, InterpolationSpace::Rgb),
            Err(Error::ZeroBlendWeight)
        );

        colors[1].weight = 150.0;
        let err = blend(&colors, InterpolationSpace::Rgb).unwrap_err();
        assert!(err.is_domain_error());

        colors[1].weight = -1.0;
        assert!(blend(&colors, InterpolationSpace::Rgb).is_err());
    }

    #[test]
    fn missing_hues_are_ignored() {
        let colors = [
            WeightedColor::new(Color::rgb(255, 255, 255), 50.0),
            WeightedColor::new(Color::rgb(0, 0, 255), 50.0),
        ];
        let mixed = blend(&colors, InterpolationSpace::Hsl).unwrap();
        let hue = mixed.to_space(Space::Hsl).c0().unwrap();
        assert!((hue - 240.0).abs() < 0.1);
    }

    #[test]
    fn hues_take_the_short_way_around() {
        let colors = [
            WeightedColor::new(Color::hsl(350.0, 1.0, 0.5).unwrap(), 50.0),
            WeightedColor::new(Color::hsl(30.0, 1.0, 0.5).unwrap(), 50.0),
        ];
        let mixed = blend(&colors, InterpolationSpace::Hsl).unwrap();
        let hue = mixed.to_space(Space::Hsl).c0().unwrap();
        assert!((hue - 10.0).abs() < 0.1);
    }

    #[test]
    fn alpha_is_averaged_when_present() {
        let colors = [
            WeightedColor::new(Color::rgba(255, 0, 0, 0.5).unwrap(), 50.0),
            WeightedColor::new(Color::rgb(0, 0, 255), 50.0),
        ];
        let mixed = blend(&colors, InterpolationSpace::Rgb).unwrap();
        assert_eq!(mixed.alpha(), Some(0.75));

        let colors = [
            WeightedColor::new(Color::rgba(255, 0, 0, 1.0).unwrap(), 50.0),
            WeightedColor::new(Color::rgb(0, 0, 255), 50.0),
        ];
        let mixed = blend(&colors, InterpolationSpace::Rgb).unwrap();
        assert_eq!(mixed.alpha(), Some(1.0));
    }

    #[test]
    fn mix_two_colors() {
        let red = Color::rgb(255, 0, 0);
        let blue = Color::rgb(0, 0, 255);
        assert_eq!(
            red.mix(&blue, 0.5, InterpolationSpace::Rgb).unwrap().to_hex(),
            "#800080"
        );
        assert_eq!(
            red.mix(&blue, 0.0, InterpolationSpace::Rgb).unwrap().to_hex(),
            "#FF0000"
        );
        assert!(red.mix(&blue, 1.5, InterpolationSpace::Rgb).is_err());
    }

    #[test]
    fn space_names() {
        assert_eq!("HCL".parse(), Ok(InterpolationSpace::Hcl));
        assert_eq!(InterpolationSpace::Lab.to_string(), "lab");
        assert_eq!(InterpolationSpace::Lch.space(), Space::Lch);
        assert!("cmyk".parse::<InterpolationSpace>().is_err());
    }
}
