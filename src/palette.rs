//! An ordered list of colors and the tint/shade ramp generator.

use std::ops::Deref;

use crate::{
    color::{Color, Component, Space},
    math::{lerp, normalize},
};

/// An ordered list of generated colors. Index 0 is the anchor of schemes that
/// keep the base color.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Palette(Vec<Color>);

impl Palette {
    /// Create a palette from a list of colors.
    pub fn new(colors: Vec<Color>) -> Self {
        Self(colors)
    }

    /// Render every color as a hex string.
    pub fn to_hex_strings(&self) -> Vec<String> {
        self.0.iter().map(Color::to_hex).collect()
    }

    /// Consume the palette and return the colors.
    pub fn into_inner(self) -> Vec<Color> {
        self.0
    }
}

impl Deref for Palette {
    type Target = [Color];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromIterator<Color> for Palette {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Palette {
    type Item = Color;
    type IntoIter = std::vec::IntoIter<Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Lightness of the lightest tint, in percent.
const MAX_LIGHTNESS: Component = 95.0;
/// Lightness of the darkest shade, in percent.
const MIN_LIGHTNESS: Component = 5.0;

/// Generate 11 colors that only differ from `base` in lightness, lightest
/// first. The base color sits between the tints and the shades, at an index
/// that depends on how light it is.
///
/// ```rust
/// use huekit::{tint_shade_ramp, Color};
/// let ramp = tint_shade_ramp(&Color::from_hex("#808080").unwrap());
/// assert_eq!(ramp.len(), 11);
/// assert_eq!(ramp[5].to_hex(), "#808080");
/// ```
pub fn tint_shade_ramp(base: &Color) -> Palette {
    let srgb = base.to_srgb_in_gamut();
    let hsl = srgb.to_space(Space::Hsl);

    let hue = hsl.c0().map(normalize).unwrap_or(0.0);
    let saturation = hsl.components().1;
    let lightness = hsl.components().2 * 100.0;

    let lighter_count = 10 - (lightness / 10.0).round().clamp(0.0, 10.0) as usize;
    let darker_count = 10 - lighter_count;

    let with_lightness = |l: Component| {
        Color::new(Space::Hsl, hue, saturation, l / 100.0, srgb.alpha()).to_space(Space::Srgb)
    };

    // Evenly spaced steps towards `target`, excluding both ends.
    let steps = |count: usize, target: Component| {
        (1..=count).map(move |i| lerp(lightness, target, i as Component / (count + 1) as Component))
    };

    let lighter = steps(lighter_count, MAX_LIGHTNESS).rev().map(with_lightness);
    let darker = steps(darker_count, MIN_LIGHTNESS).map(with_lightness);

    let palette: Palette = lighter
        .chain(std::iter::once(srgb.clone()))
        .chain(darker)
        .collect();

    log::debug!(
        "generated a ramp of {} tints and {} shades for {}",
        lighter_count,
        darker_count,
        srgb
    );

    palette
}

impl Color {
    /// See [`tint_shade_ramp`].
    pub fn tint_shade_ramp(&self) -> Palette {
        tint_shade_ramp(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hsl_lightness(color: &Color) -> Component {
        color.to_space(Space::Hsl).components().2
    }

    #[test]
    fn gray_ramp() {
        let base = Color::from_hex("#808080").unwrap();
        let ramp = tint_shade_ramp(&base);

        assert_eq!(ramp.len(), 11);
        assert_eq!(ramp[5].to_hex(), "#808080");
        assert!(ramp
            .windows(2)
            .all(|w| hsl_lightness(&w[0]) > hsl_lightness(&w[1])));
        assert!(ramp.iter().all(|c| c.space() == Space::Srgb));
    }

    #[test]
    fn base_position_follows_lightness() {
        // Lightness 0.9 leaves one tint above the base.
        let light = Color::hsl(200.0, 0.5, 0.9).unwrap();
        let ramp = tint_shade_ramp(&light);
        assert_eq!(ramp.len(), 11);
        assert_eq!(ramp[1].to_hex(), light.to_hex());

        let black = Color::rgb(0, 0, 0);
        let ramp = black.tint_shade_ramp();
        assert_eq!(ramp.len(), 11);
        assert_eq!(ramp[10].to_hex(), "#000000");

        let white = Color::rgb(255, 255, 255);
        let ramp = white.tint_shade_ramp();
        assert_eq!(ramp[0].to_hex(), "#FFFFFF");
    }

    #[test]
    fn lightness_stays_between_five_and_ninety_five_percent() {
        let ramp = tint_shade_ramp(&Color::rgb(210, 105, 30));
        let hsl = ramp.first().unwrap().to_space(Space::Hsl);
        assert!(hsl.components().2 < 0.95);
        let hsl = ramp.last().unwrap().to_space(Space::Hsl);
        assert!(hsl.components().2 > 0.05);
    }

    #[test]
    fn hue_and_saturation_are_kept() {
        let base = Color::hsl(120.0, 0.6, 0.4).unwrap();
        for color in &tint_shade_ramp(&base) {
            let hsl = color.to_space(Space::Hsl);
            assert!((hsl.components().0 - 120.0).abs() < 1.0);
            assert!((hsl.components().1 - 0.6).abs() < 0.01);
        }
    }

    #[test]
    fn palette_collections() {
        let palette: Palette = vec![Color::rgb(255, 0, 0), Color::rgb(0, 0, 255)]
            .into_iter()
            .collect();
        assert_eq!(palette.to_hex_strings(), vec!["#FF0000", "#0000FF"]);
        assert_eq!(palette.clone().into_inner().len(), 2);
        assert_eq!(palette.into_iter().count(), 2);
    }
}
