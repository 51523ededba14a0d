// ABOUTME: Parsers for the five supported textual color notations.
// ABOUTME: Each turns raw text into a validated Color or a typed failure.

use hue_core::Color;

use crate::error::ConvertError;
use crate::space;

/// Strip an optional `#` and decode exactly 6 or 8 hex digits.
pub fn hex(raw: &str) -> Result<Color, ConvertError> {
    let text = raw.trim();
    let digits = text.strip_prefix('#').unwrap_or(text);

    if digits.len() != 6 && digits.len() != 8 {
        return Err(ConvertError::invalid(
            "hex",
            "expected 6 or 8 hexadecimal digits",
        ));
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ConvertError::invalid("hex", "contains a non-hex digit"));
    }

    let byte = |i: usize| -> Result<u8, ConvertError> {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .map_err(|_| ConvertError::invalid("hex", "contains a non-hex digit"))
    };

    let r = byte(0)?;
    let g = byte(2)?;
    let b = byte(4)?;
    if digits.len() == 8 {
        Ok(Color::from_rgba8(r, g, b, byte(6)?))
    } else {
        Ok(Color::from_rgb8(r, g, b))
    }
}

/// Integer RGB(A): `rgb(a)(R, G, B[, A])` or a bare comma list.
pub fn rgb(raw: &str) -> Result<Color, ConvertError> {
    let fields = comma_fields(raw, &["rgba", "rgb"], "rgb")?;
    let r = int_channel(fields[0], "red", "rgb")?;
    let g = int_channel(fields[1], "green", "rgb")?;
    let b = int_channel(fields[2], "blue", "rgb")?;
    let a = alpha_field(fields.get(3).copied(), "rgb")?;
    Ok(Color::rgba(
        r as f64 / 255.0,
        g as f64 / 255.0,
        b as f64 / 255.0,
        a,
    ))
}

/// Float RGB(A): same shapes as `rgb`, channels in [0, 1].
pub fn rgb_float(raw: &str) -> Result<Color, ConvertError> {
    let fields = comma_fields(raw, &["rgba", "rgb"], "rgb float")?;
    let r = float_field(fields[0], "rgb float")?;
    let g = float_field(fields[1], "rgb float")?;
    let b = float_field(fields[2], "rgb float")?;
    let a = alpha_field(fields.get(3).copied(), "rgb float")?;
    Color::checked(r, g, b, a).map_err(Into::into)
}

/// HSL(A): `hsl(a)(H, S%, L%[, A])` or a bare comma list.
pub fn hsl(raw: &str) -> Result<Color, ConvertError> {
    let fields = comma_fields(raw, &["hsla", "hsl"], "hsl")?;
    let h = bounded(float_field(fields[0], "hsl")?, "hue", 0.0, 360.0)?;
    let s = bounded(
        float_field(strip_percent(fields[1]), "hsl")?,
        "saturation",
        0.0,
        100.0,
    )?;
    let l = bounded(
        float_field(strip_percent(fields[2]), "hsl")?,
        "lightness",
        0.0,
        100.0,
    )?;
    let a = alpha_field(fields.get(3).copied(), "hsl")?;
    Ok(space::hsl_to_rgb(h, s, l, a))
}

/// LAB(A): CSS form `lab(L% a b [/ A])` or a bare comma list.
pub fn lab(raw: &str) -> Result<Color, ConvertError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(ConvertError::invalid("lab", "empty input"));
    }

    let (l_tok, a_tok, b_tok, alpha_tok) = if let Some(body) = strip_wrapper(text, &["lab"]) {
        let (channels, alpha_part) = match body.split_once('/') {
            Some((left, right)) => (left, Some(right.trim())),
            None => (body, None),
        };
        let tokens: Vec<&str> = channels.split_whitespace().collect();
        if tokens.len() != 3 {
            return Err(ConvertError::invalid(
                "lab",
                "expected 'lab(L% a b [/ alpha])'",
            ));
        }
        (tokens[0], tokens[1], tokens[2], alpha_part)
    } else {
        let fields: Vec<&str> = text.split(',').map(str::trim).collect();
        if fields.len() < 3 || fields.len() > 4 {
            return Err(ConvertError::invalid(
                "lab",
                "expected three or four comma-separated values",
            ));
        }
        (fields[0], fields[1], fields[2], fields.get(3).copied())
    };

    let l = bounded(float_field(strip_percent(l_tok), "lab")?, "L", 0.0, 100.0)?;
    let a = bounded(float_field(a_tok, "lab")?, "a", -128.0, 127.0)?;
    let b = bounded(float_field(b_tok, "lab")?, "b", -128.0, 127.0)?;
    let alpha = alpha_field(alpha_tok, "lab")?;
    Ok(space::lab_to_rgb(l, a, b, alpha))
}

/// Unwrap a functional form like `rgb( ... )`, matching names
/// case-insensitively. Longer names must come first so `rgba` is not
/// mistaken for `rgb` with a stray `a`.
fn strip_wrapper<'a>(text: &'a str, names: &[&str]) -> Option<&'a str> {
    for name in names {
        let Some(head) = text.get(..name.len()) else {
            continue;
        };
        if !head.eq_ignore_ascii_case(name) {
            continue;
        }
        let rest = text[name.len()..].trim_start();
        if let Some(args) = rest.strip_prefix('(').and_then(|r| r.strip_suffix(')')) {
            return Some(args);
        }
    }
    None
}

/// Split comma-separated fields, unwrapping an optional functional form.
/// Accepts 3 or 4 fields; each field is trimmed.
fn comma_fields<'a>(
    raw: &'a str,
    wrappers: &[&str],
    notation: &'static str,
) -> Result<Vec<&'a str>, ConvertError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(ConvertError::invalid(notation, "empty input"));
    }

    let body = strip_wrapper(text, wrappers).unwrap_or(text);
    let fields: Vec<&str> = body.split(',').map(str::trim).collect();
    if fields.len() < 3 || fields.len() > 4 {
        return Err(ConvertError::invalid(
            notation,
            "expected three or four comma-separated values",
        ));
    }
    Ok(fields)
}

fn strip_percent(field: &str) -> &str {
    field.strip_suffix('%').map(str::trim).unwrap_or(field)
}

fn int_channel(
    field: &str,
    name: &'static str,
    notation: &'static str,
) -> Result<u8, ConvertError> {
    let value: i64 = field
        .parse()
        .map_err(|_| ConvertError::invalid(notation, format!("'{field}' is not an integer")))?;
    if !(0..=255).contains(&value) {
        return Err(ConvertError::range(name, 0.0, 255.0));
    }
    Ok(value as u8)
}

fn float_field(field: &str, notation: &'static str) -> Result<f64, ConvertError> {
    let value: f64 = field
        .parse()
        .map_err(|_| ConvertError::invalid(notation, format!("'{field}' is not a number")))?;
    if !value.is_finite() {
        return Err(ConvertError::invalid(
            notation,
            format!("'{field}' is not a number"),
        ));
    }
    Ok(value)
}

fn bounded(
    value: f64,
    field: &'static str,
    min: f64,
    max: f64,
) -> Result<f64, ConvertError> {
    if value < min || value > max {
        return Err(ConvertError::range(field, min, max));
    }
    Ok(value)
}

/// A missing alpha field is 1.0, never an error.
fn alpha_field(field: Option<&str>, notation: &'static str) -> Result<f64, ConvertError> {
    let Some(field) = field else {
        return Ok(1.0);
    };
    let value = float_field(field, notation)?;
    bounded(value, "alpha", 0.0, 1.0)
}
