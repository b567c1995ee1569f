//! Rendering colors as CSS color strings.

use std::{fmt, str::FromStr};

use crate::{
    color::{Color, Component, Space},
    error::Error,
    math::{normalize, round_to},
};

/// Render a number with at most `decimals` decimal places and no trailing
/// zeros.
pub(crate) fn format_number(value: Component, decimals: i32) -> String {
    let value = round_to(value, decimals);
    // Avoid printing "-0".
    let value = if value == 0.0 { 0.0 } else { value };
    let s = format!("{:.*}", decimals.max(0) as usize, value);
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// How the lightness of an OKLCH color is rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LightnessUnit {
    /// A number in `[0..1]`.
    #[default]
    Number,
    /// A percentage in `[0..100]`, followed by `%`.
    Percent,
}

/// The notations a color can be rendered in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorFormat {
    /// `#RRGGBB`
    #[default]
    Hex,
    /// `rgb(R G B)`
    Rgb,
    /// `hsl(H S% L%)`
    Hsl,
    /// `oklch(L C H)`
    Oklch,
}

impl ColorFormat {
    /// Every format, in display order.
    pub const ALL: [ColorFormat; 4] = [
        ColorFormat::Hex,
        ColorFormat::Rgb,
        ColorFormat::Hsl,
        ColorFormat::Oklch,
    ];

    /// The lowercase name of the format.
    pub fn name(self) -> &'static str {
        match self {
            ColorFormat::Hex => "hex",
            ColorFormat::Rgb => "rgb",
            ColorFormat::Hsl => "hsl",
            ColorFormat::Oklch => "oklch",
        }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::MalformedInput(s.to_string()))
    }
}

impl Color {
    fn alpha_suffix(&self, decimals: i32) -> String {
        match self.alpha() {
            Some(alpha) => format!(" / {}", format_number(alpha, decimals)),
            None => String::new(),
        }
    }

    /// Render as `rgb(R G B)` with integer channels, adding ` / A` when the
    /// color has an alpha.
    /// ```rust
    /// use huekit::Color;
    /// assert_eq!(Color::rgb(210, 105, 30).to_rgb_string(), "rgb(210 105 30)");
    /// ```
    pub fn to_rgb_string(&self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("rgb({r} {g} {b}{})", self.alpha_suffix(2))
    }

    /// Render as `hsl(H S% L%)` with at most 2 decimals.
    pub fn to_hsl_string(&self) -> String {
        let hsl = self.to_srgb_in_gamut().to_space(Space::Hsl);
        let (h, s, l) = (
            hsl.c0().map(normalize).unwrap_or(0.0),
            hsl.components().1,
            hsl.components().2,
        );
        format!(
            "hsl({} {}% {}%{})",
            format_number(h, 2),
            format_number(s * 100.0, 2),
            format_number(l * 100.0, 2),
            self.alpha_suffix(2)
        )
    }

    /// Render as `oklch(L C H)` with at most 4 decimals.
    pub fn to_oklch_string(&self, unit: LightnessUnit) -> String {
        let oklch = self.to_space(Space::Oklch);
        let l = oklch.components().0;
        let l = match unit {
            LightnessUnit::Number => format_number(l, 4),
            LightnessUnit::Percent => format!("{}%", format_number(l * 100.0, 4)),
        };
        format!(
            "oklch({} {} {}{})",
            l,
            format_number(oklch.components().1.max(0.0), 4),
            format_number(oklch.c2().unwrap_or(0.0), 4),
            self.alpha_suffix(4)
        )
    }

    /// Render in the given notation.
    pub fn to_css(&self, format: ColorFormat) -> String {
        match format {
            ColorFormat::Hex => self.to_hex(),
            ColorFormat::Rgb => self.to_rgb_string(),
            ColorFormat::Hsl => self.to_hsl_string(),
            ColorFormat::Oklch => self.to_oklch_string(LightnessUnit::Number),
        }
    }
}
