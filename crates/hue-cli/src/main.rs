// ABOUTME: Command line entry point for hueshift.
// ABOUTME: Parses arguments, runs one conversion, prints text or JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use hue_convert::{Conversion, Engine, Notation};
use hue_core::{Color, Config};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum NotationArg {
    Hex,
    Rgb,
    RgbFloat,
    Hsl,
    Lab,
}

impl From<NotationArg> for Notation {
    fn from(arg: NotationArg) -> Self {
        match arg {
            NotationArg::Hex => Notation::Hex,
            NotationArg::Rgb => Notation::Rgb,
            NotationArg::RgbFloat => Notation::RgbFloat,
            NotationArg::Hsl => Notation::Hsl,
            NotationArg::Lab => Notation::Lab,
        }
    }
}

/// Convert a color between hex, RGB, float RGB, HSL, and CIE LAB notations.
#[derive(Debug, Parser)]
#[command(name = "hueshift", version, about)]
struct Args {
    /// Input notation
    #[arg(value_enum)]
    notation: NotationArg,

    /// Color value, e.g. "#ff8100" or "255, 129, 0". Empty previews the
    /// configured default color.
    #[arg(default_value = "")]
    value: String,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Use an alternate config file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::load_or_default(),
    };

    let mut engine = Engine::with_default_color(default_color(&config));
    match engine.submit(args.notation.into(), &args.value) {
        Ok(conversion) => {
            if args.json || config.json {
                println!("{}", serde_json::to_string_pretty(conversion)?);
            } else {
                print_text(conversion);
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

fn print_text(conversion: &Conversion) {
    println!("Hex:       {}", conversion.hex);
    println!("RGBA:      {}", conversion.rgb);
    println!("RGB Float: {}", conversion.rgb_float);
    println!("HSLA:      {}", conversion.hsl);
    println!("LAB:       {}", conversion.lab);
}

/// Resolve the configured default color, falling back to mid-gray when the
/// config carries an unparseable value.
fn default_color(config: &Config) -> Color {
    match hue_convert::parse::hex(&config.default_color) {
        Ok(color) => color,
        Err(err) => {
            tracing::warn!("invalid default_color in config ({err}), using mid-gray");
            Color::GRAY
        }
    }
}
