// ABOUTME: Canonical numeric text rendering for conversion output.
// ABOUTME: Fixed-precision decimals, integer detection, zero-padded hex bytes.

/// Round half-up (away from zero) to `decimals` places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Render a number rounded to at most `decimals` places.
///
/// Integral values render with no decimal point; fractional values drop
/// trailing zeros (67.20 renders as "67.2").
pub fn number(value: f64, decimals: u32) -> String {
    let rounded = round_to(value, decimals);
    if rounded == rounded.trunc() {
        format!("{}", rounded as i64)
    } else {
        format!("{}", rounded)
    }
}

/// Two-digit lowercase hex for a quantized channel byte.
pub fn hex_byte(byte: u8) -> String {
    format!("{:02x}", byte)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_values_drop_the_decimal_point() {
        assert_eq!(number(1.0, 3), "1");
        assert_eq!(number(0.0, 3), "0");
        assert_eq!(number(255.0, 3), "255");
    }

    #[test]
    fn fractional_values_round_half_up() {
        assert_eq!(number(0.5019607843137255, 3), "0.502");
        assert_eq!(number(0.0005, 3), "0.001");
        assert_eq!(number(53.2408, 2), "53.24");
        assert_eq!(number(80.0925, 2), "80.09");
    }

    #[test]
    fn trailing_zeros_are_trimmed() {
        assert_eq!(number(67.2032, 2), "67.2");
        assert_eq!(number(0.5, 3), "0.5");
    }

    #[test]
    fn negatives_keep_their_sign() {
        assert_eq!(number(-7.539, 2), "-7.54");
        // A negative that rounds to zero must not print "-0"
        assert_eq!(number(-0.0001, 3), "0");
    }

    #[test]
    fn hex_bytes_are_lowercase_and_padded() {
        assert_eq!(hex_byte(0), "00");
        assert_eq!(hex_byte(10), "0a");
        assert_eq!(hex_byte(255), "ff");
    }
}
