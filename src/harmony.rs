//! Harmony schemes: colors whose hues are related to a base hue by fixed
//! angles on the color wheel.
//!
//! ```rust
//! use huekit::{Color, HarmonyRequest, Scheme};
//! let palette = HarmonyRequest::new(Color::rgb(255, 0, 0), 4, Scheme::Auto)
//!     .generate()
//!     .unwrap();
//! assert_eq!(palette.len(), 4);
//! assert_eq!(palette[0].to_hex(), "#FF0000");
//! assert_eq!(palette[2].to_hex(), "#00FFFF");
//! ```

use std::{fmt, str::FromStr};

use crate::{
    color::{Color, Component, Space},
    error::{Error, Result},
    math::{normalize, normalize_hue},
    palette::Palette,
};

/// The rule used to pick hues around the base hue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Scheme {
    /// Evenly spaced hues around the whole wheel.
    Auto,
    /// Hues spread over 60 degrees centered on the base hue.
    Analogous,
    /// Hues spread over 180 degrees starting at the base hue.
    Complementary,
    /// Hues spread over 120 degrees starting at the base hue.
    Triadic,
    /// The base hue, +45, +180 and +225 degrees.
    Tetradic,
    /// The base hue, +90, +180 and +270 degrees.
    Square,
    /// The base color and hues alternating around its complement.
    SplitComplementary,
}

impl Scheme {
    /// Every scheme.
    pub const ALL: [Scheme; 7] = [
        Scheme::Auto,
        Scheme::Analogous,
        Scheme::Complementary,
        Scheme::Triadic,
        Scheme::Tetradic,
        Scheme::Square,
        Scheme::SplitComplementary,
    ];

    /// The smallest number of colors the scheme can generate.
    pub fn min_count(self) -> usize {
        match self {
            Scheme::Auto | Scheme::Complementary => 2,
            Scheme::Analogous | Scheme::Triadic | Scheme::SplitComplementary => 3,
            Scheme::Tetradic | Scheme::Square => 4,
        }
    }

    /// The kebab case name of the scheme.
    pub fn name(self) -> &'static str {
        match self {
            Scheme::Auto => "auto",
            Scheme::Analogous => "analogous",
            Scheme::Complementary => "complementary",
            Scheme::Triadic => "triadic",
            Scheme::Tetradic => "tetradic",
            Scheme::Square => "square",
            Scheme::SplitComplementary => "split-complementary",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scheme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|scheme| scheme.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::MalformedInput(s.to_string()))
    }
}

/// A request for a harmony palette.
#[derive(Clone, Debug, PartialEq)]
pub struct HarmonyRequest {
    /// The color the hues are derived from.
    pub base: Color,
    /// How many colors to generate.
    pub count: usize,
    /// The rule used to pick the hues.
    pub scheme: Scheme,
}

impl HarmonyRequest {
    /// Create a new request.
    pub fn new(base: Color, count: usize, scheme: Scheme) -> Self {
        Self {
            base,
            count,
            scheme,
        }
    }

    /// See [`generate_harmony`].
    pub fn generate(&self) -> Result<Palette> {
        generate_harmony(self)
    }
}

/// The base color decomposed into HSL, with saturation and lightness as
/// fractions.
#[derive(Clone, Copy)]
struct Hsl {
    h: Component,
    s: Component,
    l: Component,
}

impl Hsl {
    fn color(self, hue: Component) -> Color {
        self.color_with(hue, self.s, self.l)
    }

    fn color_with(self, hue: Component, s: Component, l: Component) -> Color {
        Color::new(
            Space::Hsl,
            normalize_hue(hue),
            s.clamp(0.0, 1.0),
            l.clamp(0.0, 1.0),
            None,
        )
        .to_space(Space::Srgb)
    }
}

/// Generate `count` colors related to the base color by the requested
/// scheme. Fails with [`Error::CountBelowMinimum`] when `count` is less than
/// [`Scheme::min_count`].
pub fn generate_harmony(request: &HarmonyRequest) -> Result<Palette> {
    let HarmonyRequest {
        ref base,
        count,
        scheme,
    } = *request;

    if count < scheme.min_count() {
        log::warn!(
            "rejected {} harmony with {} colors, at least {} needed",
            scheme,
            count,
            scheme.min_count()
        );
        return Err(Error::CountBelowMinimum {
            scheme,
            minimum: scheme.min_count(),
            count,
        });
    }

    let hsl = base.to_srgb_in_gamut().to_space(Space::Hsl);
    let base = Hsl {
        h: hsl.c0().map(normalize).unwrap_or(0.0),
        s: hsl.components().1,
        l: hsl.components().2,
    };

    let n = count as Component;
    let palette: Palette = match scheme {
        Scheme::Auto => (0..count)
            .map(|i| base.color(base.h + 360.0 / n * i as Component))
            .collect(),
        Scheme::Analogous => spread(base, count, base.h - 30.0, 60.0),
        Scheme::Complementary => spread(base, count, base.h, 180.0),
        Scheme::Triadic => spread(base, count, base.h, 120.0),
        Scheme::Tetradic => anchored(base, count, [0.0, 45.0, 180.0, 225.0], |i| {
            ([0.8, 1.2][(i / 2) % 2], [0.8, 1.2][(i / 3) % 2])
        }),
        Scheme::Square => anchored(base, count, [0.0, 90.0, 180.0, 270.0], |i| {
            ([0.7, 1.3][(i / 4) % 2], [0.7, 1.3][(i / 2) % 2])
        }),
        Scheme::SplitComplementary => {
            let complement = base.h + 180.0;
            (0..count)
                .map(|i| {
                    if i == 0 {
                        return base.color(base.h);
                    }
                    let offset = if i % 2 == 0 { 30.0 } else { -30.0 };
                    base.color(complement + offset * i.div_ceil(2) as Component)
                })
                .collect()
        }
    };

    log::debug!("generated {} {} colors for {}", palette.len(), scheme, request.base);

    Ok(palette)
}

/// `count` hues evenly spread from `start` over `range` degrees, both ends
/// included.
fn spread(base: Hsl, count: usize, start: Component, range: Component) -> Palette {
    let step = range / (count - 1) as Component;
    (0..count)
        .map(|i| base.color(start + step * i as Component))
        .collect()
}

/// Four anchor hues, followed by colors cycling through the anchors with the
/// saturation and lightness scaled by the factors `variant` picks for each
/// extra index.
fn anchored(
    base: Hsl,
    count: usize,
    offsets: [Component; 4],
    variant: impl Fn(usize) -> (Component, Component),
) -> Palette {
    (0..count)
        .map(|i| {
            let hue = base.h + offsets[i % 4];
            if i < 4 {
                base.color(hue)
            } else {
                let (s, l) = variant(i - 4);
                base.color_with(hue, base.s * s, base.l * l)
            }
        })
        .collect()
}
