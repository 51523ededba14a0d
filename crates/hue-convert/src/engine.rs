// ABOUTME: Conversion orchestrator that fans one parsed color out to all notations.
// ABOUTME: Tracks idle/converted state and the empty-input default policy.

use serde::Serialize;

use hue_core::Color;

use crate::error::ConvertError;
use crate::{format, parse, space};

/// The five supported input notations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    Hex,
    Rgb,
    RgbFloat,
    Hsl,
    Lab,
}

impl Notation {
    pub fn all() -> &'static [Notation] {
        &[
            Notation::Hex,
            Notation::Rgb,
            Notation::RgbFloat,
            Notation::Hsl,
            Notation::Lab,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Notation::Hex => "hex",
            Notation::Rgb => "rgb",
            Notation::RgbFloat => "rgb float",
            Notation::Hsl => "hsl",
            Notation::Lab => "lab",
        }
    }
}

/// One atomic conversion result: the canonical color plus every notation
/// rendered as text. Either all fields are populated or the conversion
/// failed; there is no partial form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    pub color: Color,
    pub hex: String,
    pub rgb: String,
    pub rgb_float: String,
    pub hsl: String,
    pub lab: String,
}

/// Parse raw text in the given notation and derive every representation.
///
/// Pure: the same input always yields the same output set.
pub fn convert(notation: Notation, raw: &str) -> Result<Conversion, ConvertError> {
    let color = match notation {
        Notation::Hex => parse::hex(raw)?,
        Notation::Rgb => parse::rgb(raw)?,
        Notation::RgbFloat => parse::rgb_float(raw)?,
        Notation::Hsl => parse::hsl(raw)?,
        Notation::Lab => parse::lab(raw)?,
    };
    Ok(render(color))
}

/// Derive all five notation strings from a canonical color.
///
/// Representations are always regenerated from the color record so the
/// outputs cannot drift apart.
pub fn render(color: Color) -> Conversion {
    let alpha = format::number(color.a, 3);

    let hex = hex_string(&color);
    let rgb = format!(
        "rgba({}, {}, {}, {})",
        color.r8(),
        color.g8(),
        color.b8(),
        alpha
    );
    let rgb_float = format!(
        "rgba({}, {}, {}, {})",
        format::number(color.r, 3),
        format::number(color.g, 3),
        format::number(color.b, 3),
        alpha
    );

    let hsl = space::rgb_to_hsl(&color);
    let hsl = format!(
        "hsla({}, {}%, {}%, {})",
        (hsl.h.round() as i64).rem_euclid(360),
        format::number(hsl.s, 0),
        format::number(hsl.l, 0),
        alpha
    );

    let lab = space::rgb_to_lab(&color);
    let lab = format!(
        "lab({}% {} {} / {})",
        format::number(lab.l, 2),
        format::number(lab.a, 2),
        format::number(lab.b, 2),
        alpha
    );

    Conversion {
        color,
        hex,
        rgb,
        rgb_float,
        hsl,
        lab,
    }
}

/// Lowercase hex: 6 digits when fully opaque, 8 digits otherwise.
fn hex_string(color: &Color) -> String {
    let mut hex = format!(
        "#{}{}{}",
        format::hex_byte(color.r8()),
        format::hex_byte(color.g8()),
        format::hex_byte(color.b8())
    );
    if color.a < 1.0 {
        hex.push_str(&format::hex_byte(color.a8()));
    }
    hex
}

/// Orchestrator state machine: `Idle` until the first successful submission,
/// then `Converted` holding the last result. A failed submission surfaces
/// its error and leaves the held result untouched.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    default_color: Color,
    last: Option<Conversion>,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different color for empty submissions.
    pub fn with_default_color(color: Color) -> Self {
        Self {
            default_color: color,
            last: None,
        }
    }

    /// Submit raw text in the given notation.
    ///
    /// Empty input previews the default color rather than failing.
    pub fn submit(
        &mut self,
        notation: Notation,
        raw: &str,
    ) -> Result<&Conversion, ConvertError> {
        let conversion = if raw.trim().is_empty() {
            tracing::debug!(notation = notation.label(), "empty submission, using default color");
            render(self.default_color)
        } else {
            convert(notation, raw)?
        };
        tracing::debug!(notation = notation.label(), hex = %conversion.hex, "converted");
        Ok(self.last.insert(conversion))
    }

    /// Last successful conversion, if any submission has succeeded.
    pub fn current(&self) -> Option<&Conversion> {
        self.last.as_ref()
    }

    /// Drop any held result and return the default-color preview.
    pub fn reset(&mut self) -> Conversion {
        self.last = None;
        render(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex6_roundtrip_is_exact() {
        for value in 0..=255u8 {
            let input = format!("#{:02x}{:02x}{:02x}", value, 255 - value, value / 2);
            let result = convert(Notation::Hex, &input).unwrap();
            assert_eq!(result.hex, input);
        }
    }

    #[test]
    fn rgb_to_float_and_back_preserves_bytes() {
        // The float form carries 3 decimals; quantization error stays
        // below half a byte, so the original triple always comes back.
        for value in 0..=255u8 {
            let result = convert(Notation::Rgb, &format!("{value}, 0, 255")).unwrap();
            let float_result = convert(Notation::RgbFloat, &result.rgb_float).unwrap();
            assert_eq!(float_result.color.r8(), value);
            assert_eq!(float_result.color.g8(), 0);
            assert_eq!(float_result.color.b8(), 255);
        }
    }

    #[test]
    fn out_of_range_red_is_named() {
        assert_eq!(
            convert(Notation::Rgb, "256, 0, 0"),
            Err(ConvertError::OutOfRange {
                field: "red",
                min: 0.0,
                max: 255.0,
            })
        );
    }

    #[test]
    fn five_digit_hex_is_invalid_format() {
        assert!(matches!(
            convert(Notation::Hex, "#12345"),
            Err(ConvertError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn missing_alpha_is_opaque_in_every_representation() {
        let result = convert(Notation::Rgb, "10, 20, 30").unwrap();
        assert_eq!(result.color.a, 1.0);
        assert_eq!(result.hex, "#0a141e");
        assert_eq!(result.rgb, "rgba(10, 20, 30, 1)");
        assert!(result.rgb_float.ends_with(", 1)"));
        assert!(result.hsl.ends_with(", 1)"));
        assert!(result.lab.ends_with("/ 1)"));
    }

    #[test]
    fn gray_has_zero_hue_and_saturation() {
        let result = convert(Notation::Rgb, "128, 128, 128").unwrap();
        assert_eq!(result.hsl, "hsla(0, 0%, 50%, 1)");
    }

    #[test]
    fn lab_l100_converts_to_white_without_error() {
        let result = convert(Notation::Lab, "100, 0, 0, 1").unwrap();
        assert_eq!(result.hex, "#ffffff");
        assert_eq!(result.rgb, "rgba(255, 255, 255, 1)");
    }

    #[test]
    fn red_hex_end_to_end() {
        let result = convert(Notation::Hex, "#FF0000").unwrap();
        assert_eq!(result.hex, "#ff0000");
        assert_eq!(result.rgb, "rgba(255, 0, 0, 1)");
        assert_eq!(result.rgb_float, "rgba(1, 0, 0, 1)");
        assert_eq!(result.hsl, "hsla(0, 100%, 50%, 1)");
        assert_eq!(result.lab, "lab(53.24% 80.09 67.2 / 1)");
    }

    #[test]
    fn conversion_is_idempotent() {
        let first = convert(Notation::Hsl, "210, 50, 40, 0.75").unwrap();
        let second = convert(Notation::Hsl, "210, 50, 40, 0.75").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn translucent_colors_render_hex8() {
        let result = convert(Notation::Rgb, "255, 129, 0, 0.5").unwrap();
        assert_eq!(result.hex, "#ff810080");
        assert_eq!(result.rgb, "rgba(255, 129, 0, 0.5)");
    }

    #[test]
    fn engine_starts_idle() {
        let engine = Engine::new();
        assert!(engine.current().is_none());
    }

    #[test]
    fn engine_empty_submission_uses_default_color() {
        let mut engine = Engine::new();
        let result = engine.submit(Notation::Hex, "").unwrap();
        assert_eq!(result.hex, "#808080");
    }

    #[test]
    fn engine_failure_preserves_previous_result() {
        let mut engine = Engine::new();
        engine.submit(Notation::Hex, "#22a75f").unwrap();

        let err = engine.submit(Notation::Rgb, "999, 0, 0").unwrap_err();
        assert!(matches!(err, ConvertError::OutOfRange { .. }));
        assert_eq!(engine.current().unwrap().hex, "#22a75f");
    }

    #[test]
    fn engine_reset_returns_to_idle() {
        let mut engine = Engine::new();
        engine.submit(Notation::Hex, "#22a75f").unwrap();

        let preview = engine.reset();
        assert!(engine.current().is_none());
        assert_eq!(preview.hex, "#808080");
    }

    #[test]
    fn engine_honors_configured_default() {
        let mut engine = Engine::with_default_color(Color::WHITE);
        let result = engine.submit(Notation::Rgb, "   ").unwrap();
        assert_eq!(result.hex, "#ffffff");
    }
}
