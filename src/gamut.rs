//! Gamut mapping functions.
//! <https://drafts.csswg.org/css-color-4/#gamut-mapping>

use crate::{color::Components, Color, Component, Space};

#[allow(clippy::manual_range_contains)]
fn in_zero_to_one(value: Component) -> bool {
    value >= 0.0 && value <= 1.0
}

/// Calculate deltaE OK (simple root sum of squares).
/// <https://drafts.csswg.org/css-color-4/#color-difference-OK>
fn delta_eok(reference: &Color, sample: &Color) -> Component {
    // Delta is calculated in the oklab color space.
    let reference = reference.to_space(Space::Oklab);
    let sample = sample.to_space(Space::Oklab);

    let d = sample.components() - reference.components();
    (d.0 * d.0 + d.1 * d.1 + d.2 * d.2).sqrt()
}

impl Color {
    /// If this color is not within gamut limits of it's color space, then a
    /// gamut mapping is applied to map the components into range.
    /// <https://drafts.csswg.org/css-color-4/#binsearch>
    pub fn map_into_gamut_limits(&self) -> Self {
        // Spaces without gamut limits are returned as is.
        if !self.space().has_gamut_limits() {
            return self.clone();
        }

        if self.in_gamut() {
            return self.clone();
        }

        // HSL and HSV are mapped in sRGB and converted back.
        if matches!(self.space(), Space::Hsl | Space::Hsv) {
            return self
                .to_space(Space::Srgb)
                .map_into_gamut_limits()
                .to_space(self.space());
        }

        let origin_oklch = self.to_space(Space::Oklch);
        let alpha = self.alpha();
        let Components(lightness, origin_chroma, hue) = origin_oklch.components();

        if lightness >= 1.0 {
            return Color::new(self.space(), 1.0, 1.0, 1.0, alpha);
        }

        if lightness <= 0.0 {
            return Color::new(self.space(), 0.0, 0.0, 0.0, alpha);
        }

        const JND: Component = 0.02;
        const EPSILON: Component = 1.0e-4;

        let mut min = 0.0;
        let mut max = origin_chroma;
        let mut min_in_gamut = true;

        let mut current = origin_oklch.clone();
        let mut current_in_space = self.clone();

        // If we are already clipped, then we can return the clipped color and
        // avoid the binary search completely.
        let clipped = current_in_space.clip();
        if delta_eok(&current, &clipped) < JND {
            return clipped;
        }

        while max - min > EPSILON {
            let chroma = (min + max) / 2.0;

            current = Color::new(Space::Oklch, lightness, chroma, origin_oklch.c2(), alpha);
            current_in_space = current.to_space(self.space());

            if min_in_gamut && current_in_space.in_gamut() {
                min = chroma;
                continue;
            }

            let clipped = current_in_space.clip();
            let e = delta_eok(&clipped, &current);

            if e < JND {
                if JND - e < EPSILON {
                    return clipped;
                }

                min_in_gamut = false;
                min = chroma;
            } else {
                max = chroma;
            }
        }

        log::trace!("mapped into gamut with chroma {max} at hue {hue}");

        current_in_space
    }

    /// Return a color with each of the components clipped (clamped to [0..1]).
    /// NOTE: This is a lossy operation.
    pub fn clip(&self) -> Color {
        let Components(c0, c1, c2) = self.components();
        Color::new(
            self.space(),
            self.c0().map(|_| c0.clamp(0.0, 1.0)),
            self.c1().map(|_| c1.clamp(0.0, 1.0)),
            self.c2().map(|_| c2.clamp(0.0, 1.0)),
            self.alpha(),
        )
    }

    /// Returns true if the color is within its gamut limits.
    ///
    /// Mainly for RGB based colors, checking components to be inside [0..1].
    /// `Hsl` and `Hsv` are converted to [`Space::Srgb`] before being checked.
    pub fn in_gamut(&self) -> bool {
        match self.space() {
            Space::Srgb | Space::SrgbLinear => {
                let Components(c0, c1, c2) = self.components();
                in_zero_to_one(c0) && in_zero_to_one(c1) && in_zero_to_one(c2)
            }
            Space::Hsl | Space::Hsv => self.to_space(Space::Srgb).in_gamut(),
            Space::Lab
            | Space::Lch
            | Space::Oklab
            | Space::Oklch
            | Space::XyzD50
            | Space::XyzD65 => true,
        }
    }

    /// Convert to sRGB and map the result into the sRGB gamut. This is the
    /// color every 8-bit rendering starts from.
    pub fn to_srgb_in_gamut(&self) -> Color {
        self.to_space(Space::Srgb).map_into_gamut_limits()
    }
}

impl Space {
    /// Returns true for spaces that can describe colors outside of a gamut.
    pub fn has_gamut_limits(self) -> bool {
        matches!(
            self,
            Space::Srgb | Space::SrgbLinear | Space::Hsl | Space::Hsv
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_red() {
        // color(display-p3 1 0 0)
        let source = Color::new(Space::XyzD65, 0.48657095, 0.22897456, 0.0, 1.0)
            .to_space(Space::Srgb);
        assert!(!source.in_gamut());

        let mapped = source.map_into_gamut_limits();

        let Components(r, g, b) = mapped.components();
        assert!((r - 1.0).abs() < 1.0e-3);
        assert!((g - 0.0446).abs() < 5.0e-3);
        assert!((b - 0.0459).abs() < 5.0e-3);
    }

    #[test]
    fn in_gamut_colors_are_untouched() {
        let color = Color::rgb(210, 105, 30);
        assert_eq!(color.map_into_gamut_limits(), color);

        let lab = Color::new(Space::Lab, 50.0, 200.0, 0.0, None);
        assert!(lab.in_gamut());
        assert_eq!(lab.map_into_gamut_limits(), lab);
    }

    #[test]
    fn out_of_range_lightness_maps_to_white_and_black() {
        let bright = Color::new(Space::Oklch, 1.2, 0.3, 40.0, None);
        let mapped = bright.to_srgb_in_gamut();
        assert_eq!(mapped.components(), Components(1.0, 1.0, 1.0));

        let dark = Color::new(Space::Srgb, -0.5, -0.2, -0.4, 0.5);
        let mapped = dark.map_into_gamut_limits();
        assert_eq!(mapped.components(), Components(0.0, 0.0, 0.0));
        assert_eq!(mapped.alpha(), Some(0.5));
    }

    #[test]
    fn clip_keeps_missing_components() {
        let color = Color::new(Space::Srgb, 1.5, None, -0.5, None);
        let clipped = color.clip();
        assert_eq!(clipped.c0(), Some(1.0));
        assert_eq!(clipped.c1(), None);
        assert_eq!(clipped.c2(), Some(0.0));
    }

    #[test]
    fn hsl_is_mapped_through_srgb() {
        let hsl = Color::new(Space::Hsl, 120.0, 1.5, 0.5, None);
        assert!(!hsl.in_gamut());
        let mapped = hsl.map_into_gamut_limits();
        assert_eq!(mapped.space(), Space::Hsl);
        assert!(mapped.components().1 <= 1.0 + 1.0e-4);
    }
}
