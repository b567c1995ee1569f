//! Print the views, palettes, contrast and export of a color, and optionally
//! render the palettes as a PNG swatch sheet.

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use huekit::{
    analyze, blend, detect, export_palette, Color, ColorFormat, HarmonyRequest,
    InterpolationSpace, LightnessUnit, Palette, Scheme, StylingTool, WeightedColor,
};
use image::{Rgba, RgbaImage};
use imageproc::{drawing::draw_filled_rect_mut, rect::Rect};

const SWATCH_WIDTH: u32 = 80;
const SWATCH_HEIGHT: u32 = 80;
const GAP: u32 = 8;

/// Explore the palettes generated from a color
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// The color to start from, in any supported notation, or `random`
    color: String,

    #[arg(long, default_value = "auto")]
    /// Harmony scheme
    scheme: Scheme,

    #[arg(long, default_value_t = 5)]
    /// Number of colors in the harmony palette
    count: usize,

    #[arg(long)]
    /// Colors blended with the input, all with equal weights
    mix: Vec<String>,

    #[arg(long, default_value = "rgb")]
    /// Space the blend is computed in
    space: InterpolationSpace,

    #[arg(long, default_value = "css")]
    /// Export syntax for the tint/shade ramp
    tool: StylingTool,

    #[arg(long, default_value = "hex")]
    /// Color notation used by the export
    format: ColorFormat,

    #[arg(long, default_value = "#FFFFFF")]
    /// Color the contrast is measured against
    against: String,

    #[arg(short, long)]
    /// Write a swatch sheet of every palette to this PNG file
    output: Option<PathBuf>,
}

fn parse_color(input: &str) -> anyhow::Result<Color> {
    if input.trim().eq_ignore_ascii_case("random") {
        return Ok(Color::random());
    }
    let parsed = detect(input);
    if !parsed.is_known() {
        bail!("{input:?} is not a color in any supported notation");
    }
    parsed
        .to_color()
        .with_context(|| format!("could not convert {parsed}"))
}

fn print_palette(title: &str, palette: &Palette) {
    println!("{title}:");
    for (i, color) in palette.iter().enumerate() {
        println!("  {i:>2}  {}  {}", color.to_hex(), color.to_hsl_string());
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    let color = parse_color(&args.color)?;
    let detected = detect(&args.color);
    if detected.is_known() {
        println!("{}: {}", detected.kind(), detected.value());
    } else {
        println!("random: {color}");
    }

    println!("  hex    {}", color.to_hex());
    println!("  rgb    {}", color.to_rgb_string());
    println!("  hsl    {}", color.to_hsl_string());
    println!("  oklch  {}", color.to_oklch_string(LightnessUnit::Number));

    let ramp = color.tint_shade_ramp();
    print_palette("tint/shade ramp", &ramp);

    let harmony = HarmonyRequest::new(color.clone(), args.count, args.scheme)
        .generate()
        .with_context(|| format!("could not generate the {} harmony", args.scheme))?;
    print_palette(&format!("{} harmony", args.scheme), &harmony);

    if !args.mix.is_empty() {
        let mut colors = vec![WeightedColor::new(color.clone(), 50.0)];
        for input in &args.mix {
            colors.push(WeightedColor::new(parse_color(input)?, 50.0));
        }
        let mixed = blend(&colors, args.space).context("could not blend the colors")?;
        println!("blend in {}: {}", args.space, mixed.to_hex());
    }

    let against = parse_color(&args.against)?;
    let contrast = analyze(&color, &against);
    println!(
        "contrast against {}: {}:1 (AA {}/{}, AAA {}/{})",
        against.to_hex(),
        contrast.ratio,
        pass(contrast.compliance.aa_small()),
        pass(contrast.compliance.aa_large()),
        pass(contrast.compliance.aaa_small()),
        pass(contrast.compliance.aaa_large()),
    );

    let code = export_palette(&ramp, args.tool, args.format).context("could not export the ramp")?;
    println!("{} ({}):\n{code}", args.tool, args.format);

    if let Some(path) = args.output {
        let mut palettes = vec![ramp];
        for scheme in Scheme::ALL {
            let count = args.count.max(scheme.min_count());
            palettes.push(HarmonyRequest::new(color.clone(), count, scheme).generate()?);
        }
        let sheet = render_sheet(&palettes);
        sheet
            .save(&path)
            .with_context(|| format!("could not write image to {}", path.display()))?;
        log::info!("wrote {} palettes to {}", palettes.len(), path.display());
    }

    Ok(())
}

fn pass(ok: bool) -> &'static str {
    if ok {
        "pass"
    } else {
        "fail"
    }
}

/// Draw each palette as a row of square swatches.
fn render_sheet(palettes: &[Palette]) -> RgbaImage {
    let columns = palettes.iter().map(|p| p.len()).max().unwrap_or(0) as u32;
    let width = GAP + columns * (SWATCH_WIDTH + GAP);
    let height = GAP + palettes.len() as u32 * (SWATCH_HEIGHT + GAP);

    let mut img = RgbaImage::new(width, height);
    img.fill(255);

    for (row, palette) in palettes.iter().enumerate() {
        for (column, color) in palette.iter().enumerate() {
            let [r, g, b] = color.to_rgb8();
            let rect = Rect::at(
                (GAP + column as u32 * (SWATCH_WIDTH + GAP)) as i32,
                (GAP + row as u32 * (SWATCH_HEIGHT + GAP)) as i32,
            )
            .of_size(SWATCH_WIDTH, SWATCH_HEIGHT);
            draw_filled_rect_mut(&mut img, rect, Rgba([r, g, b, 255]));
        }
    }

    img
}
