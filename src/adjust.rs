//! Editing a single HSL channel of a color.

use crate::{
    color::{check_unit, Color, Component, Space},
    error::{Error, Result},
    math::{normalize, normalize_hue},
};

impl Color {
    fn to_hsl_parts(&self) -> (Component, Component, Component) {
        let hsl = self.to_srgb_in_gamut().to_space(Space::Hsl);
        let c = hsl.components();
        (hsl.c0().map(normalize).unwrap_or(0.0), c.1, c.2)
    }

    fn from_hsl_parts(&self, h: Component, s: Component, l: Component) -> Color {
        Color::new(Space::Hsl, normalize_hue(h), s, l, self.alpha())
    }

    /// Return the color with its HSL hue replaced, in degrees. Any finite
    /// hue is accepted and wrapped into `[0..360)`. The result is in HSL.
    pub fn with_hue(&self, hue: Component) -> Result<Color> {
        if !hue.is_finite() {
            return Err(Error::ColorDomain {
                channel: "hue",
                value: hue,
                domain: "finite numbers",
            });
        }
        let (_, s, l) = self.to_hsl_parts();
        Ok(self.from_hsl_parts(hue, s, l))
    }

    /// Return the color with its HSL saturation replaced. The result is in
    /// HSL.
    pub fn with_saturation(&self, saturation: Component) -> Result<Color> {
        let saturation = check_unit("saturation", saturation)?;
        let (h, _, l) = self.to_hsl_parts();
        Ok(self.from_hsl_parts(h, saturation, l))
    }

    /// Return the color with its HSL lightness replaced. The result is in
    /// HSL.
    pub fn with_lightness(&self, lightness: Component) -> Result<Color> {
        let lightness = check_unit("lightness", lightness)?;
        let (h, s, _) = self.to_hsl_parts();
        Ok(self.from_hsl_parts(h, s, lightness))
    }

    /// Rotate the HSL hue by `degrees`. Achromatic colors start from hue 0.
    /// ```rust
    /// use huekit::Color;
    /// let red = Color::rgb(255, 0, 0);
    /// assert_eq!(red.rotate_hue(120.0).to_hex(), "#00FF00");
    /// ```
    pub fn rotate_hue(&self, degrees: Component) -> Color {
        let (h, s, l) = self.to_hsl_parts();
        self.from_hsl_parts(h + degrees, s, l)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_channels() {
        let c = Color::rgb(255, 0, 0);
        assert_eq!(c.with_hue(240.0).unwrap().to_hex(), "#0000FF");
        assert_eq!(c.with_hue(-120.0).unwrap().to_hex(), "#0000FF");
        assert_eq!(c.with_saturation(0.0).unwrap().to_hex(), "#808080");
        assert_eq!(c.with_lightness(1.0).unwrap().to_hex(), "#FFFFFF");
        assert_eq!(c.with_lightness(0.5).unwrap().space(), Space::Hsl);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let c = Color::rgb(255, 0, 0);
        assert!(c.with_saturation(1.5).unwrap_err().is_domain_error());
        assert!(c.with_lightness(-0.1).unwrap_err().is_domain_error());
        assert!(c.with_hue(Component::NAN).unwrap_err().is_domain_error());
    }

    #[test]
    fn rotation_wraps() {
        let c = Color::hsl(300.0, 1.0, 0.5).unwrap();
        let rotated = c.rotate_hue(90.0);
        assert!((rotated.components().0 - 30.0).abs() < 0.01);
        assert_eq!(c.rotate_hue(360.0).to_hex(), c.to_hex());
    }

    #[test]
    fn alpha_is_kept() {
        let c = Color::rgba(255, 0, 0, 0.25).unwrap();
        assert_eq!(c.rotate_hue(10.0).alpha(), Some(0.25));
        assert_eq!(c.with_lightness(0.2).unwrap().alpha(), Some(0.25));
    }
}
