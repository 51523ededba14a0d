// ABOUTME: Canonical color representation all conversions pivot through.
// ABOUTME: Stores normalized RGBA channels and validates their domain.

use serde::{Deserialize, Serialize};

/// A color channel that failed validation, with its legal bounds.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("{channel} must be between {min} and {max}")]
pub struct ChannelError {
    pub channel: &'static str,
    pub min: f64,
    pub max: f64,
}

/// Normalized RGBA color. Every channel lies in [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Mid-gray (#808080) shown as the preview before any input arrives.
    pub const GRAY: Self = Self::rgb(
        128.0 / 255.0,
        128.0 / 255.0,
        128.0 / 255.0,
    );

    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    /// Validating constructor. Rejects (never clamps) out-of-domain channels.
    pub fn checked(r: f64, g: f64, b: f64, a: f64) -> Result<Self, ChannelError> {
        check_channel(r, "red")?;
        check_channel(g, "green")?;
        check_channel(b, "blue")?;
        check_channel(a, "alpha")?;
        Ok(Self { r, g, b, a })
    }

    /// Build from 8-bit channels, alpha opaque.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }

    /// Build from 8-bit channels including alpha.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::rgba(
            r as f64 / 255.0,
            g as f64 / 255.0,
            b as f64 / 255.0,
            a as f64 / 255.0,
        )
    }

    pub fn r8(&self) -> u8 {
        quantize(self.r)
    }

    pub fn g8(&self) -> u8 {
        quantize(self.g)
    }

    pub fn b8(&self) -> u8 {
        quantize(self.b)
    }

    pub fn a8(&self) -> u8 {
        quantize(self.a)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::GRAY
    }
}

fn check_channel(value: f64, channel: &'static str) -> Result<(), ChannelError> {
    if !value.is_finite() || value < 0.0 || value > 1.0 {
        return Err(ChannelError {
            channel,
            min: 0.0,
            max: 1.0,
        });
    }
    Ok(())
}

/// Quantize a normalized channel to an 8-bit byte.
fn quantize(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_accepts_domain_boundaries() {
        assert!(Color::checked(0.0, 0.0, 0.0, 0.0).is_ok());
        assert!(Color::checked(1.0, 1.0, 1.0, 1.0).is_ok());
    }

    #[test]
    fn checked_rejects_out_of_domain_channels() {
        let err = Color::checked(1.1, 0.0, 0.0, 1.0).unwrap_err();
        assert_eq!(err.channel, "red");
        assert_eq!((err.min, err.max), (0.0, 1.0));

        let err = Color::checked(0.0, 0.0, 0.0, -0.5).unwrap_err();
        assert_eq!(err.channel, "alpha");
    }

    #[test]
    fn checked_rejects_non_finite_channels() {
        assert!(Color::checked(f64::NAN, 0.0, 0.0, 1.0).is_err());
        assert!(Color::checked(0.0, f64::INFINITY, 0.0, 1.0).is_err());
    }

    #[test]
    fn bytes_round_to_nearest() {
        let color = Color::from_rgb8(128, 0, 255);
        assert_eq!(color.r8(), 128);
        assert_eq!(color.g8(), 0);
        assert_eq!(color.b8(), 255);
        assert_eq!(color.a8(), 255);
    }

    #[test]
    fn default_is_mid_gray() {
        let color = Color::default();
        assert_eq!(color.r8(), 128);
        assert_eq!(color.g8(), 128);
        assert_eq!(color.b8(), 128);
        assert_eq!(color.a, 1.0);
    }
}
