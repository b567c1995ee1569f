//! Rendering palettes as stylesheet or theme configuration snippets.
//!
//! Each entry of a palette is labeled with a weight from [`WEIGHTS`], in
//! order, so the first color becomes `50` and the last of a full palette
//! becomes `950`.

use std::{fmt, fmt::Write, str::FromStr};

use crate::{
    css::ColorFormat,
    error::{Error, Result},
    palette::Palette,
};

/// The weight labels given to palette entries, in order.
pub const WEIGHTS: [u16; 11] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950];

/// The syntax a palette is exported as.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StylingTool {
    /// Custom properties in a `:root` block.
    #[default]
    CssVariables,
    /// SCSS variables, one per line.
    ScssVariables,
    /// An object entry for a version 3 utility framework config file.
    UtilityConfigV3,
    /// Custom properties in a version 4 utility framework `@theme` block.
    UtilityConfigV4,
}

impl StylingTool {
    /// Every styling tool.
    pub const ALL: [StylingTool; 4] = [
        StylingTool::CssVariables,
        StylingTool::ScssVariables,
        StylingTool::UtilityConfigV3,
        StylingTool::UtilityConfigV4,
    ];

    /// The short name of the tool.
    pub fn name(self) -> &'static str {
        match self {
            StylingTool::CssVariables => "css",
            StylingTool::ScssVariables => "scss",
            StylingTool::UtilityConfigV3 => "utility-v3",
            StylingTool::UtilityConfigV4 => "utility-v4",
        }
    }
}

impl fmt::Display for StylingTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StylingTool {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|tool| tool.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::MalformedInput(s.to_string()))
    }
}

/// Options for [`export_palette_with`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    /// The token name placed before each weight, as in `--color-primary-500`.
    pub name: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            name: "primary".to_string(),
        }
    }
}

/// A combination of tool and format offered as a ready made export.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Preset {
    /// A label to show for the preset.
    pub label: &'static str,
    /// The syntax of the export.
    pub tool: StylingTool,
    /// The notation colors are rendered in.
    pub format: ColorFormat,
}

const fn preset(label: &'static str, tool: StylingTool, format: ColorFormat) -> Preset {
    Preset {
        label,
        tool,
        format,
    }
}

/// The ready made exports, in display order.
pub const PRESETS: [Preset; 7] = [
    preset("Utility config (HEX)", StylingTool::UtilityConfigV3, ColorFormat::Hex),
    preset("Utility config (HSL)", StylingTool::UtilityConfigV3, ColorFormat::Hsl),
    preset("Utility config (RGB)", StylingTool::UtilityConfigV3, ColorFormat::Rgb),
    preset("CSS variables (HEX)", StylingTool::CssVariables, ColorFormat::Hex),
    preset("CSS variables (HSL)", StylingTool::CssVariables, ColorFormat::Hsl),
    preset("CSS variables (RGB)", StylingTool::CssVariables, ColorFormat::Rgb),
    preset("SCSS variables", StylingTool::ScssVariables, ColorFormat::Hex),
];

/// Export with the default [`ExportOptions`].
///
/// ```rust
/// use huekit::{export_palette, Color, ColorFormat, Palette, StylingTool};
/// let palette = Palette::new(vec![Color::rgb(255, 0, 0), Color::rgb(0, 0, 255)]);
/// let scss = export_palette(&palette, StylingTool::ScssVariables, ColorFormat::Hex).unwrap();
/// assert_eq!(scss, "$primary-50: #FF0000;\n$primary-100: #0000FF;");
/// ```
pub fn export_palette(palette: &Palette, tool: StylingTool, format: ColorFormat) -> Result<String> {
    export_palette_with(palette, tool, format, &ExportOptions::default())
}

/// Render `palette` in the syntax of `tool` with colors in `format`. Fails
/// with [`Error::PaletteTooLong`] when there are more colors than
/// [`WEIGHTS`].
pub fn export_palette_with(
    palette: &Palette,
    tool: StylingTool,
    format: ColorFormat,
    options: &ExportOptions,
) -> Result<String> {
    if palette.len() > WEIGHTS.len() {
        log::warn!(
            "rejected export of {} colors, at most {} have weight labels",
            palette.len(),
            WEIGHTS.len()
        );
        return Err(Error::PaletteTooLong {
            len: palette.len(),
            max: WEIGHTS.len(),
        });
    }

    let entries = palette
        .iter()
        .zip(WEIGHTS)
        .map(|(color, weight)| (weight, color.to_css(format)));

    let mut out = String::new();
    render(&mut out, tool, &options.name, entries)
        .expect("formatting into a String does not fail");

    log::debug!("exported {} colors as {} {}", palette.len(), tool, format);

    Ok(out.trim().to_string())
}

/// Write the entries in the syntax of `tool`.
fn render(
    out: &mut String,
    tool: StylingTool,
    name: &str,
    entries: impl Iterator<Item = (u16, String)>,
) -> fmt::Result {
    match tool {
        StylingTool::CssVariables => block(out, ":root {", entries, |out, w, c| {
            writeln!(out, "  --color-{name}-{w}: {c};")
        }),
        StylingTool::UtilityConfigV4 => block(out, "@theme {", entries, |out, w, c| {
            writeln!(out, "  --color-{name}-{w}: {c};")
        }),
        StylingTool::UtilityConfigV3 => block(out, &format!("{name}: {{"), entries, |out, w, c| {
            writeln!(out, "  '{w}': '{c}',")
        }),
        StylingTool::ScssVariables => {
            for (w, c) in entries {
                writeln!(out, "${name}-{w}: {c};")?;
            }
            Ok(())
        }
    }
}

/// Write `open`, one line per entry and a closing brace.
fn block(
    out: &mut String,
    open: &str,
    entries: impl Iterator<Item = (u16, String)>,
    mut line: impl FnMut(&mut String, u16, String) -> fmt::Result,
) -> fmt::Result {
    writeln!(out, "{open}")?;
    for (weight, color) in entries {
        line(out, weight, color)?;
    }
    write!(out, "}}")
}

/// Render the palette with every entry of [`PRESETS`].
pub fn export_presets(palette: &Palette) -> Result<Vec<(Preset, String)>> {
    PRESETS
        .iter()
        .map(|preset| {
            export_palette(palette, preset.tool, preset.format).map(|code| (*preset, code))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn ramp() -> Palette {
        Color::rgb(210, 105, 30).tint_shade_ramp()
    }

    fn two() -> Palette {
        Palette::new(vec![Color::rgb(255, 0, 0), Color::rgb(0, 0, 255)])
    }

    #[test]
    fn css_variables() {
        let code = export_palette(&two(), StylingTool::CssVariables, ColorFormat::Hex).unwrap();
        assert_eq!(
            code,
            ":root {\n  --color-primary-50: #FF0000;\n  --color-primary-100: #0000FF;\n}"
        );
    }

    #[test]
    fn utility_configs() {
        let code = export_palette(&two(), StylingTool::UtilityConfigV3, ColorFormat::Rgb).unwrap();
        assert_eq!(
            code,
            "primary: {\n  '50': 'rgb(255 0 0)',\n  '100': 'rgb(0 0 255)',\n}"
        );

        let code = export_palette(&two(), StylingTool::UtilityConfigV4, ColorFormat::Hsl).unwrap();
        assert_eq!(
            code,
            "@theme {\n  --color-primary-50: hsl(0 100% 50%);\n  --color-primary-100: hsl(240 100% 50%);\n}"
        );
    }

    #[test]
    fn full_ramp_as_scss() {
        let code = export_palette(&ramp(), StylingTool::ScssVariables, ColorFormat::Hex).unwrap();
        let lines: Vec<&str> = code.lines().collect();
        assert_eq!(lines.len(), WEIGHTS.len());
        for ((line, weight), color) in lines.iter().zip(WEIGHTS).zip(ramp().iter()) {
            assert_eq!(*line, format!("$primary-{weight}: {};", color.to_hex()));
        }
    }

    #[test]
    fn custom_name() {
        let options = ExportOptions {
            name: "brand".to_string(),
        };
        let code =
            export_palette_with(&two(), StylingTool::CssVariables, ColorFormat::Hex, &options)
                .unwrap();
        assert!(code.contains("--color-brand-50: #FF0000;"));
    }

    #[test]
    fn too_many_colors() {
        let palette: Palette = std::iter::repeat(Color::rgb(0, 0, 0)).take(12).collect();
        assert_eq!(
            export_palette(&palette, StylingTool::CssVariables, ColorFormat::Hex),
            Err(Error::PaletteTooLong { len: 12, max: 11 })
        );
    }

    #[test]
    fn empty_palette() {
        let empty = Palette::default();
        assert_eq!(
            export_palette(&empty, StylingTool::CssVariables, ColorFormat::Hex).unwrap(),
            ":root {\n}"
        );
        assert_eq!(
            export_palette(&empty, StylingTool::ScssVariables, ColorFormat::Hex).unwrap(),
            ""
        );
    }

    #[test]
    fn presets() {
        let exports = export_presets(&ramp()).unwrap();
        assert_eq!(exports.len(), PRESETS.len());
        for (preset, code) in exports {
            let expected = export_palette(&ramp(), preset.tool, preset.format).unwrap();
            assert_eq!(code, expected, "{}", preset.label);
        }
    }

    #[test]
    fn tool_names() {
        for tool in StylingTool::ALL {
            assert_eq!(tool.name().parse::<StylingTool>(), Ok(tool));
        }
        assert!("less".parse::<StylingTool>().is_err());
    }
}
