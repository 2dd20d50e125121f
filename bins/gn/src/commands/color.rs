//! color command

use super::Context;
use anyhow::Result;
use clap::Subcommand;
use gn_cli::Status;
use gn_color::Color;
use serde::Serialize;

#[derive(Subcommand)]
pub enum ColorAction {
    /// Show every representation of a colour
    Show {
        /// #RGB, #RGBA, #RRGGBB, #RRGGBBAA, 0xRRGGBB or RRGGBB
        color: String,
    },
    /// Mix two colours by intensity
    Blend {
        first: String,
        second: String,
        /// Weight of the first colour
        #[arg(long, default_value_t = 0.5)]
        first_intensity: f64,
        /// Weight of the second colour
        #[arg(long, default_value_t = 0.5)]
        second_intensity: f64,
    },
    /// Raise every channel
    Lighten {
        color: String,
        /// Amount added to each channel (0.0 - 1.0)
        #[arg(default_value_t = 0.2)]
        amount: f64,
    },
    /// Lower every channel
    Darken {
        color: String,
        /// Amount removed from each channel (0.0 - 1.0)
        #[arg(default_value_t = 0.2)]
        amount: f64,
    },
    /// Complementary colour
    Complement { color: String },
    /// A random opaque colour
    Random,
}

#[derive(Serialize)]
struct ColorReport {
    hex: String,
    short: String,
    rgb: (u8, u8, u8),
    alpha: f64,
    hsba: (f64, f64, f64, f64),
    value: u32,
}

impl From<Color> for ColorReport {
    fn from(color: Color) -> Self {
        Self {
            hex: color.to_string(),
            short: color.short_hex_or_hex_string(),
            rgb: color.rgb_components(),
            alpha: color.alpha,
            hsba: color.hsba(),
            value: color.to_u32(),
        }
    }
}

pub fn run(ctx: &Context, action: ColorAction) -> Result<()> {
    let color = match action {
        ColorAction::Show { color } => return show(ctx, parse(ctx, &color)),
        ColorAction::Blend {
            first,
            second,
            first_intensity,
            second_intensity,
        } => Color::blend(
            &parse(ctx, &first),
            first_intensity,
            &parse(ctx, &second),
            second_intensity,
        ),
        ColorAction::Lighten { color, amount } => parse(ctx, &color).lighten(amount),
        ColorAction::Darken { color, amount } => parse(ctx, &color).darken(amount),
        ColorAction::Complement { color } => parse(ctx, &color).complementary(),
        ColorAction::Random => Color::random(),
    };

    ctx.emit(&ColorReport::from(color), &color.to_string())
}

fn show(ctx: &Context, color: Color) -> Result<()> {
    let report = ColorReport::from(color);
    if ctx.json {
        gn_cli::print_json(&report)?;
        return Ok(());
    }

    let (r, g, b) = report.rgb;
    let (h, s, v, _) = report.hsba;
    Status::header(&report.hex);
    Status::field("short", &report.short);
    Status::field("rgb", &format!("{r}, {g}, {b}"));
    Status::field("alpha", &format!("{:.3}", report.alpha));
    Status::field("hsb", &format!("{:.1}°, {:.1}%, {:.1}%", h * 360.0, s * 100.0, v * 100.0));
    Status::field("value", &format!("0x{:06X}", report.value));
    Ok(())
}

/// Strict `#` notation first, then the bare or `0x` hex forms, then the
/// configured fallback.
fn parse(ctx: &Context, input: &str) -> Color {
    match Color::parse_rgba(input) {
        Ok(color) => color,
        Err(strict) => Color::from_hex_str(input, 1.0).unwrap_or_else(|| {
            let fallback = ctx.fallback_color();
            if !ctx.quiet {
                Status::warning(&format!("{strict}: '{input}', using {fallback}"));
            }
            fallback
        }),
    }
}
