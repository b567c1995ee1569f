//! huekit parses, converts and generates colors for design tooling.
//!
//! - [`detect`] classifies a string as a named, hex, `rgb()`, `hsl()` or
//!   `oklch()` color and normalizes it.
//! - [`Color`] holds a color in one of the [`Space`]s and converts between
//!   them through CIE XYZ.
//! - Palettes are generated as a tint/shade ramp ([`tint_shade_ramp`]), a
//!   harmony scheme ([`generate_harmony`]) or a weighted [`blend`].
//! - [`analyze`] computes WCAG contrast ratios and compliance levels.
//! - [`export_palette`] renders a palette as CSS, SCSS or utility framework
//!   configuration.
//!
//! ```rust
//! use huekit::{detect, Color};
//! let parsed = detect("RGB(210, 105, 30)");
//! assert_eq!(parsed.value(), "rgb(210 105 30)");
//! let color: Color = parsed.to_color().unwrap();
//! assert_eq!(color.to_hex(), "#D2691E");
//! ```

#![deny(missing_docs)]

mod adjust;
mod color;
mod contrast;
mod convert;
mod css;
mod error;
mod export;
mod gamut;
mod harmony;
mod hex;
mod math;
mod mix;
pub mod models;
mod named;
mod palette;
mod parse;
mod random;

pub use color::{Color, Component, ComponentDetails, Components, Flags, HasSpace, Space};
pub use contrast::{analyze, Compliance, ContrastResult};
pub use css::{ColorFormat, LightnessUnit};
pub use error::{Error, Result};
pub use export::{
    export_palette, export_palette_with, export_presets, ExportOptions, Preset, StylingTool,
    PRESETS, WEIGHTS,
};
pub use harmony::{generate_harmony, HarmonyRequest, Scheme};
pub use mix::{blend, InterpolationSpace, MixInput, WeightedColor};
pub use named::{is_named_color, named_color, NAMED_COLORS};
pub use palette::{tint_shade_ramp, Palette};
pub use parse::{detect, FormatKind, ParsedFormat};
pub use random::random_hex;
