//! Detect the notation of a user entered color string and normalize it.
//!
//! ```rust
//! use huekit::{detect, FormatKind};
//! let parsed = detect("  RGBA(255, 0, 0, 50%) ");
//! assert_eq!(parsed.kind(), FormatKind::Rgb);
//! assert_eq!(parsed.value(), "rgb(255 0 0 / 0.5)");
//! ```

use std::{fmt, str::FromStr};

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::{
    color::{Color, Component, Space},
    css::format_number,
    error::{Error, Result},
    math::round_to,
    named::{is_named_color, named_color},
};

/// The notations [`detect`] recognizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FormatKind {
    /// A CSS named color.
    Named,
    /// `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA`.
    Hex,
    /// `rgb()` or `rgba()`.
    Rgb,
    /// `hsl()` or `hsla()`.
    Hsl,
    /// `oklch()`.
    Oklch,
    /// Anything else.
    Unknown,
}

impl FormatKind {
    /// The lowercase name of the notation.
    pub fn name(self) -> &'static str {
        match self {
            FormatKind::Named => "named",
            FormatKind::Hex => "hex",
            FormatKind::Rgb => "rgb",
            FormatKind::Hsl => "hsl",
            FormatKind::Oklch => "oklch",
            FormatKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The result of [`detect`]: the recognized notation and the normalized
/// string, or the trimmed and lowercased input when nothing matched.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ParsedFormat {
    /// A lowercase CSS color name.
    Named(String),
    /// `#RRGGBB` or `#RRGGBBAA` with uppercase digits.
    Hex(String),
    /// `rgb(R G B)` or `rgb(R G B / A)`.
    Rgb(String),
    /// `hsl(H S% L%)` or `hsl(H S% L% / A)`.
    Hsl(String),
    /// `oklch(L C H)` or `oklch(L C H / A)`.
    Oklch(String),
    /// Input that matched none of the notations.
    Unknown(String),
}

impl ParsedFormat {
    /// The notation that was detected.
    pub fn kind(&self) -> FormatKind {
        match self {
            ParsedFormat::Named(_) => FormatKind::Named,
            ParsedFormat::Hex(_) => FormatKind::Hex,
            ParsedFormat::Rgb(_) => FormatKind::Rgb,
            ParsedFormat::Hsl(_) => FormatKind::Hsl,
            ParsedFormat::Oklch(_) => FormatKind::Oklch,
            ParsedFormat::Unknown(_) => FormatKind::Unknown,
        }
    }

    /// The normalized string, or the trimmed and lowercased input for
    /// [`ParsedFormat::Unknown`].
    pub fn value(&self) -> &str {
        match self {
            ParsedFormat::Named(v)
            | ParsedFormat::Hex(v)
            | ParsedFormat::Rgb(v)
            | ParsedFormat::Hsl(v)
            | ParsedFormat::Oklch(v)
            | ParsedFormat::Unknown(v) => v,
        }
    }

    /// Returns true for anything except [`ParsedFormat::Unknown`].
    pub fn is_known(&self) -> bool {
        !matches!(self, ParsedFormat::Unknown(_))
    }

    /// Build the color described by the normalized string.
    pub fn to_color(&self) -> Result<Color> {
        let malformed = || Error::MalformedInput(self.value().to_string());
        match self {
            ParsedFormat::Named(name) => named_color(name).ok_or_else(malformed),
            ParsedFormat::Hex(hex) => Color::from_hex(hex),
            ParsedFormat::Rgb(v) => RgbParts::parse(v).map(|p| p.to_color()).ok_or_else(malformed),
            ParsedFormat::Hsl(v) => HslParts::parse(v).map(|p| p.to_color()).ok_or_else(malformed),
            ParsedFormat::Oklch(v) => {
                OklchParts::parse(v).map(|p| p.to_color()).ok_or_else(malformed)
            }
            ParsedFormat::Unknown(_) => Err(malformed()),
        }
    }
}

impl fmt::Display for ParsedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

/// Detect the notation of `input` and normalize it. Detection never fails:
/// unrecognized input is returned as [`ParsedFormat::Unknown`].
///
/// Named colors are tried first, then hex, `rgb()`, `hsl()` and `oklch()`.
pub fn detect(input: &str) -> ParsedFormat {
    let input = input.trim().to_lowercase();

    let parsed = if is_named_color(&input) {
        ParsedFormat::Named(input)
    } else if let Some(hex) = parse_hex(&input) {
        ParsedFormat::Hex(hex)
    } else if let Some(rgb) = RgbParts::parse(&input) {
        ParsedFormat::Rgb(rgb.normalized())
    } else if let Some(hsl) = HslParts::parse(&input) {
        ParsedFormat::Hsl(hsl.normalized())
    } else if let Some(oklch) = OklchParts::parse(&input) {
        ParsedFormat::Oklch(oklch.normalized())
    } else {
        ParsedFormat::Unknown(input)
    };

    log::trace!("detected {} color {:?}", parsed.kind(), parsed.value());

    parsed
}

impl FromStr for Color {
    type Err = Error;

    /// Parse any string [`detect`] recognizes.
    fn from_str(s: &str) -> Result<Self> {
        detect(s).to_color()
    }
}

static HEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$")
        .expect("valid hex pattern")
});

static RGB: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)^rgba?\(\s*",
        r"(?P<red>[0-9]+\.?[0-9]*)(?P<red_unit>%?)\s*",
        r"(?:[\s,]+\s*)",
        r"(?P<green>[0-9]+\.?[0-9]*)(?P<green_unit>%?)\s*",
        r"(?:[\s,]+\s*)",
        r"(?P<blue>[0-9]+\.?[0-9]*)(?P<blue_unit>%?)\s*",
        r"(?:(?:/|[\s,])+\s*(?P<alpha>[0-9]+\.?[0-9]*)(?P<alpha_unit>%?)\s*)?",
        r"\)$",
    ))
    .expect("valid rgb pattern")
});

static HSL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)^hsla?\(\s*",
        r"(?P<hue>[0-9]+\.?[0-9]*)(?P<hue_unit>deg|grad|rad|turn)?\s*",
        r"[\s,]+\s*",
        r"(?P<saturation>[0-9]+\.?[0-9]*)%?\s*",
        r"[\s,]+\s*",
        r"(?P<lightness>[0-9]+\.?[0-9]*)%?\s*",
        r"(?:(?:/|[\s,])+\s*(?P<alpha>[0-9]*\.?[0-9]+)(?P<alpha_unit>%?)\s*)?",
        r"\)$",
    ))
    .expect("valid hsl pattern")
});

static OKLCH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)^oklch\(\s*",
        r"(?P<lightness>[0-9]+\.?[0-9]*|\.[0-9]+)(?P<lightness_unit>%?)",
        r"[\s,]+",
        r"(?P<chroma>[0-9]+\.?[0-9]*|\.[0-9]+)",
        r"[\s,]+",
        r"(?P<hue>[0-9]+\.?[0-9]*|\.[0-9]+)",
        r"(?:\s*/\s*(?P<alpha>[0-9]+\.?[0-9]*|\.[0-9]+)(?P<alpha_unit>%?))?",
        r"\s*\)$",
    ))
    .expect("valid oklch pattern")
});

/// Read a numeric capture group. The patterns only let valid numbers through.
fn number(captures: &Captures, name: &str) -> Option<Component> {
    captures.name(name)?.as_str().parse().ok()
}

fn is_percent(captures: &Captures, name: &str) -> bool {
    captures.name(name).map_or(false, |m| m.as_str() == "%")
}

/// Read an alpha capture as a fraction in `[0..1]` rounded to 2 decimals.
fn fraction_alpha(captures: &Captures) -> Option<Option<Component>> {
    if captures.name("alpha").is_none() {
        return Some(None);
    }
    let alpha = number(captures, "alpha")?;
    let alpha = if is_percent(captures, "alpha_unit") {
        alpha.clamp(0.0, 100.0) / 100.0
    } else {
        alpha.clamp(0.0, 1.0)
    };
    Some(Some(round_to(alpha, 2)))
}

fn alpha_suffix(alpha: Option<Component>) -> String {
    alpha
        .map(|a| format!(" / {}", format_number(a, 2)))
        .unwrap_or_default()
}

fn parse_hex(input: &str) -> Option<String> {
    if !HEX.is_match(input) {
        return None;
    }

    let digits = input[1..].to_uppercase();
    let expanded = match digits.len() {
        3 | 4 => digits.chars().flat_map(|c| [c, c]).collect(),
        _ => digits,
    };

    Some(format!("#{expanded}"))
}

/// The channels of an `rgb()` color, in `[0..255]`.
struct RgbParts {
    channels: [Component; 3],
    alpha: Option<Component>,
}

impl RgbParts {
    fn parse(input: &str) -> Option<Self> {
        let captures = RGB.captures(input)?;

        // rgba() must carry an alpha, rgb() may.
        if input.trim_start().to_lowercase().starts_with("rgba(") && captures.name("alpha").is_none()
        {
            return None;
        }

        let channel = |name: &str, unit: &str| -> Option<Component> {
            let value = number(&captures, name)?;
            let value = if is_percent(&captures, unit) {
                value.clamp(0.0, 100.0) * 255.0 / 100.0
            } else {
                value.clamp(0.0, 255.0)
            };
            Some(value.round())
        };

        Some(Self {
            channels: [
                channel("red", "red_unit")?,
                channel("green", "green_unit")?,
                channel("blue", "blue_unit")?,
            ],
            alpha: fraction_alpha(&captures)?,
        })
    }

    fn normalized(&self) -> String {
        let [r, g, b] = self.channels;
        format!("rgb({r} {g} {b}{})", alpha_suffix(self.alpha))
    }

    fn to_color(&self) -> Color {
        let [r, g, b] = self.channels.map(|c| c / 255.0);
        Color::new(Space::Srgb, r, g, b, self.alpha)
    }
}

/// The units a hue can be written in.
#[derive(Clone, Copy, Debug, PartialEq)]
enum HueUnit {
    Deg,
    Grad,
    Rad,
    Turn,
}

impl HueUnit {
    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "deg" => Some(HueUnit::Deg),
            "grad" => Some(HueUnit::Grad),
            "rad" => Some(HueUnit::Rad),
            "turn" => Some(HueUnit::Turn),
            _ => None,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            HueUnit::Deg => "",
            HueUnit::Grad => "grad",
            HueUnit::Rad => "rad",
            HueUnit::Turn => "turn",
        }
    }

    fn to_degrees(self, hue: Component) -> Component {
        match self {
            HueUnit::Deg => hue,
            HueUnit::Grad => hue * 0.9,
            HueUnit::Rad => hue.to_degrees(),
            HueUnit::Turn => hue * 360.0,
        }
    }
}

/// The channels of an `hsl()` color. Saturation and lightness are
/// percentages in `[0..100]`.
struct HslParts {
    hue: Component,
    unit: HueUnit,
    saturation: Component,
    lightness: Component,
    alpha: Option<Component>,
}

impl HslParts {
    fn parse(input: &str) -> Option<Self> {
        let captures = HSL.captures(input)?;

        let unit = match captures.name("hue_unit") {
            Some(m) => HueUnit::from_suffix(&m.as_str().to_lowercase())?,
            None => HueUnit::Deg,
        };

        Some(Self {
            hue: number(&captures, "hue")?,
            unit,
            saturation: number(&captures, "saturation")?.clamp(0.0, 100.0),
            lightness: number(&captures, "lightness")?.clamp(0.0, 100.0),
            alpha: fraction_alpha(&captures)?,
        })
    }

    fn normalized(&self) -> String {
        format!(
            "hsl({}{} {}% {}%{})",
            self.hue,
            self.unit.suffix(),
            self.saturation,
            self.lightness,
            alpha_suffix(self.alpha)
        )
    }

    fn to_color(&self) -> Color {
        Color::new(
            Space::Hsl,
            self.unit.to_degrees(self.hue),
            self.saturation / 100.0,
            self.lightness / 100.0,
            self.alpha,
        )
    }
}

/// The channels of an `oklch()` color, with the units they were written in.
struct OklchParts {
    lightness: Component,
    lightness_percent: bool,
    chroma: Component,
    hue: Component,
    alpha: Option<(Component, bool)>,
}

impl OklchParts {
    fn parse(input: &str) -> Option<Self> {
        let captures = OKLCH.captures(input)?;

        let lightness_percent = is_percent(&captures, "lightness_unit");
        let lightness = number(&captures, "lightness")?;
        let lightness = if lightness_percent {
            lightness.clamp(0.0, 100.0)
        } else {
            lightness.clamp(0.0, 1.0)
        };

        let alpha = match captures.name("alpha") {
            Some(_) => {
                let percent = is_percent(&captures, "alpha_unit");
                let alpha = number(&captures, "alpha")?;
                let max = if percent { 100.0 } else { 1.0 };
                Some((alpha.clamp(0.0, max), percent))
            }
            None => None,
        };

        Some(Self {
            lightness,
            lightness_percent,
            chroma: number(&captures, "chroma")?.max(0.0),
            hue: number(&captures, "hue")?,
            alpha,
        })
    }

    fn normalized(&self) -> String {
        let percent = |p: bool| if p { "%" } else { "" };
        let alpha = self
            .alpha
            .map(|(a, p)| format!(" / {}{}", format_number(a, 4), percent(p)))
            .unwrap_or_default();
        format!(
            "oklch({}{} {} {}{})",
            format_number(self.lightness, 4),
            percent(self.lightness_percent),
            format_number(self.chroma, 4),
            format_number(self.hue, 4),
            alpha
        )
    }

    fn to_color(&self) -> Color {
        let lightness = if self.lightness_percent {
            self.lightness / 100.0
        } else {
            self.lightness
        };
        let alpha = self
            .alpha
            .map(|(a, percent)| if percent { a / 100.0 } else { a });
        Color::new(Space::Oklch, lightness, self.chroma, self.hue, alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(input: &str, kind: FormatKind, value: &str) {
        let parsed = detect(input);
        assert_eq!(parsed.kind(), kind, "{input}");
        assert_eq!(parsed.value(), value, "{input}");
    }

    #[test]
    fn named_colors_ignore_case() {
        check("red", FormatKind::Named, "red");
        check("RED", FormatKind::Named, "red");
        check("  LightGoldenRodYellow ", FormatKind::Named, "lightgoldenrodyellow");
    }

    #[test]
    fn hex() {
        check("#abc", FormatKind::Hex, "#AABBCC");
        check("#ABCD", FormatKind::Hex, "#AABBCCDD");
        check("#d2691e", FormatKind::Hex, "#D2691E");
        check("#d2691e80", FormatKind::Hex, "#D2691E80");
        check("#abcde", FormatKind::Unknown, "#abcde");
        check("#ggg", FormatKind::Unknown, "#ggg");
        check("abc", FormatKind::Unknown, "abc");
    }

    #[test]
    fn rgb() {
        check("rgb(255,0,0)", FormatKind::Rgb, "rgb(255 0 0)");
        check("rgb(255 0 0)", FormatKind::Rgb, "rgb(255 0 0)");
        check("rgb(300, -0, 12.4)", FormatKind::Unknown, "rgb(300, -0, 12.4)");
        check("rgb(300, 0, 12.6)", FormatKind::Rgb, "rgb(255 0 13)");
        check("rgb(100%, 50%, 0%)", FormatKind::Rgb, "rgb(255 128 0)");
        check("rgb(120%, 0%, 0%)", FormatKind::Rgb, "rgb(255 0 0)");
        check("rgb(255 0 0 / 0.5)", FormatKind::Rgb, "rgb(255 0 0 / 0.5)");
        check("rgb(255 0 0 / 50%)", FormatKind::Rgb, "rgb(255 0 0 / 0.5)");
        check("rgba(255, 0, 0, 0.255)", FormatKind::Rgb, "rgb(255 0 0 / 0.26)");
        check("rgba(255, 0, 0, 1.0)", FormatKind::Rgb, "rgb(255 0 0 / 1)");
        check("rgba(255, 0, 0, 3)", FormatKind::Rgb, "rgb(255 0 0 / 1)");
    }

    #[test]
    fn rgba_without_alpha_is_rejected() {
        check("rgba(255,0,0)", FormatKind::Unknown, "rgba(255,0,0)");
        check("rgb(255,0,0)", FormatKind::Rgb, "rgb(255 0 0)");
    }

    #[test]
    fn hsl() {
        check("hsl(120, 50%, 50%)", FormatKind::Hsl, "hsl(120 50% 50%)");
        check("hsl(120deg 50% 50%)", FormatKind::Hsl, "hsl(120 50% 50%)");
        check("hsl(0.5turn 50% 50%)", FormatKind::Hsl, "hsl(0.5turn 50% 50%)");
        check("hsl(200grad 150% -5%)", FormatKind::Unknown, "hsl(200grad 150% -5%)");
        check("hsl(200grad 150% 5%)", FormatKind::Hsl, "hsl(200grad 100% 5%)");
        check("hsla(12.5, 10%, 20%, .25)", FormatKind::Hsl, "hsl(12.5 10% 20% / 0.25)");
        check("hsl(12 10% 20% / 40%)", FormatKind::Hsl, "hsl(12 10% 20% / 0.4)");
    }

    #[test]
    fn oklch() {
        check("oklch(0.7 0.1 200)", FormatKind::Oklch, "oklch(0.7 0.1 200)");
        check("oklch(70% 0.1 200)", FormatKind::Oklch, "oklch(70% 0.1 200)");
        check("oklch(1.5 .123456 20.00001)", FormatKind::Oklch, "oklch(1 0.1235 20)");
        check("oklch(0.5 0.1 20 / 50%)", FormatKind::Oklch, "oklch(0.5 0.1 20 / 50%)");
        check("oklch(0.5 0.1 20 / 0.3)", FormatKind::Oklch, "oklch(0.5 0.1 20 / 0.3)");
        check("oklch(0.5 0.1)", FormatKind::Unknown, "oklch(0.5 0.1)");
    }

    #[test]
    fn unknown_input_is_trimmed_and_lowercased() {
        check("  Not A Color ", FormatKind::Unknown, "not a color");
        check("", FormatKind::Unknown, "");
        assert!(!detect("hwb(0 0% 0%)").is_known());
    }

    #[test]
    fn normalizing_twice_changes_nothing() {
        for input in [
            "rebeccapurple",
            "#abc",
            "rgba(10%, 20%, 30%, 0.123)",
            "hsla(370, 120%, 50%, 0.5)",
            "hsl(1.5rad 10% 10%)",
            "oklch(55.55555% 0.2 10 / 25%)",
        ] {
            let first = detect(input);
            let second = detect(first.value());
            assert_eq!(first, second, "{input}");
        }
    }

    #[test]
    fn parsed_values_become_colors() {
        let red = detect("red").to_color().unwrap();
        assert_eq!(red.to_hex(), "#FF0000");

        let c = detect("rgb(100% 50% 0% / 50%)").to_color().unwrap();
        assert_eq!(c.to_rgb8(), [255, 128, 0]);
        assert_eq!(c.alpha(), Some(0.5));

        let c = detect("hsl(0.5turn 100% 50%)").to_color().unwrap();
        assert_eq!(c.to_hex(), "#00FFFF");

        let c = detect("hsl(200grad 100% 50%)").to_color().unwrap();
        assert_eq!(c.to_hex(), "#00FFFF");

        let c = detect("oklch(62.8% 0.2577 29.23)").to_color().unwrap();
        assert_eq!(c.to_hex(), "#FF0000");

        let c = detect("oklch(0.5 0 0 / 50%)").to_color().unwrap();
        assert_eq!(c.alpha(), Some(0.5));

        assert_eq!(
            detect("nope").to_color(),
            Err(Error::MalformedInput("nope".to_string()))
        );
    }

    #[test]
    fn from_str() {
        let c: Color = "#D2691E".parse().unwrap();
        assert_eq!(c, Color::rgb(210, 105, 30));
        assert!("rgba(1, 2, 3)".parse::<Color>().is_err());
    }

    #[test]
    fn rendered_views_are_detected_as_their_own_format() {
        let c = Color::rgba(210, 105, 30, 0.5).unwrap();
        assert_eq!(detect(&c.to_hex()).kind(), FormatKind::Hex);
        assert_eq!(detect(&c.to_rgb_string()).kind(), FormatKind::Rgb);
        assert_eq!(detect(&c.to_hsl_string()).kind(), FormatKind::Hsl);
        assert_eq!(
            detect(&c.to_oklch_string(crate::LightnessUnit::Percent)).kind(),
            FormatKind::Oklch
        );
    }
}
