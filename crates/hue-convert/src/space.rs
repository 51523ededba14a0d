// ABOUTME: Numeric color-space transforms between RGB, HSL, and CIE LAB.
// ABOUTME: LAB goes through linear-light RGB and D65 XYZ intermediates.

use hue_core::Color;

// D65 reference white in XYZ.
const WHITE_X: f64 = 0.95047;
const WHITE_Y: f64 = 1.0;
const WHITE_Z: f64 = 1.08883;

// CIE LAB piecewise constants: 216/24389 and 24389/27.
const EPSILON: f64 = 216.0 / 24389.0;
const KAPPA: f64 = 24389.0 / 27.0;

// sRGB primaries to XYZ (D65) and back.
const RGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
];
const XYZ_TO_RGB: [[f64; 3]; 3] = [
    [3.2404542, -1.5371385, -0.4985314],
    [-0.9692660, 1.8760108, 0.0415560],
    [0.0556434, -0.2040259, 1.0572252],
];

/// Hue in degrees, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

/// CIE LAB: L in [0, 100], a and b roughly [-128, 127] for sRGB colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

/// Decode a display-referred sRGB channel to linear light.
fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Encode a linear-light channel back to display-referred sRGB.
fn linear_to_srgb(c: f64) -> f64 {
    if c <= 0.0031308 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

fn lab_f_inv(t: f64) -> f64 {
    let cube = t * t * t;
    if cube > EPSILON {
        cube
    } else {
        (116.0 * t - 16.0) / KAPPA
    }
}

fn mul3(m: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

/// Standard max/min/chroma derivation. Full precision; display rounding
/// happens at the formatting layer. Achromatic input yields H=0, S=0.
pub fn rgb_to_hsl(color: &Color) -> Hsl {
    let max = color.r.max(color.g).max(color.b);
    let min = color.r.min(color.g).min(color.b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl {
            h: 0.0,
            s: 0.0,
            l: l * 100.0,
        };
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let h = if max == color.r {
        (color.g - color.b) / d + if color.g < color.b { 6.0 } else { 0.0 }
    } else if max == color.g {
        (color.b - color.r) / d + 2.0
    } else {
        (color.r - color.g) / d + 4.0
    };

    Hsl {
        h: h * 60.0,
        s: s * 100.0,
        l: l * 100.0,
    }
}

/// H in degrees [0, 360] (360 wraps to 0), S and L in percent.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64, alpha: f64) -> Color {
    let h = h.rem_euclid(360.0);
    let s = s / 100.0;
    let l = l / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = match (h / 60.0) as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Color::rgba(
        (r + m).clamp(0.0, 1.0),
        (g + m).clamp(0.0, 1.0),
        (b + m).clamp(0.0, 1.0),
        alpha,
    )
}

pub fn rgb_to_lab(color: &Color) -> Lab {
    let linear = [
        srgb_to_linear(color.r),
        srgb_to_linear(color.g),
        srgb_to_linear(color.b),
    ];
    let [x, y, z] = mul3(&RGB_TO_XYZ, linear);

    let fx = lab_f(x / WHITE_X);
    let fy = lab_f(y / WHITE_Y);
    let fz = lab_f(z / WHITE_Z);

    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
    }
}

/// LAB can describe colors outside the sRGB gamut; channels that land
/// outside [0, 1] after the inverse transform clamp instead of erroring.
pub fn lab_to_rgb(l: f64, a: f64, b: f64, alpha: f64) -> Color {
    let fy = (l + 16.0) / 116.0;
    let fx = fy + a / 500.0;
    let fz = fy - b / 200.0;

    let xr = lab_f_inv(fx);
    let yr = if l > KAPPA * EPSILON {
        fy * fy * fy
    } else {
        l / KAPPA
    };
    let zr = lab_f_inv(fz);

    let xyz = [xr * WHITE_X, yr * WHITE_Y, zr * WHITE_Z];
    let [lr, lg, lb] = mul3(&XYZ_TO_RGB, xyz);

    Color::rgba(
        linear_to_srgb(lr).clamp(0.0, 1.0),
        linear_to_srgb(lg).clamp(0.0, 1.0),
        linear_to_srgb(lb).clamp(0.0, 1.0),
        alpha,
    )
}
