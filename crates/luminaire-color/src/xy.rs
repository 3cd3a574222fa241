//! CIE xyY chromaticity to RGBW conversion
//!
//! Pipeline:
//! 1. xyY -> XYZ, with `Y` taken from the brightness level
//! 2. XYZ -> linear sRGB via the standard basis-change matrix
//! 3. per channel clamp and scale to 8-bit duty
//! 4. white extraction: the common part of r, g and b moves to the white channel

use crate::math::{unit_from_u16, unit_from_u8, unit_to_duty};

/// XYZ -> linear sRGB (D65) matrix
// https://en.wikipedia.org/wiki/SRGB#From_CIE_XYZ_to_sRGB
#[allow(clippy::unreadable_literal, clippy::excessive_precision)]
const XYZ_TO_RGB: [[f32; 3]; 3] = [
    [3.2404542, -1.5371385, -0.4985314],
    [-0.9692660, 1.8760108, 0.0415560],
    [0.0556534, -0.2040259, 1.0572252],
];

/// Linear RGB components before clamping
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

/// Duty values of an RGBW light
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RgbwDuty {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub w: u8,
}

impl RgbwDuty {
    /// All four channels dark
    pub const OFF: Self = Self {
        r: 0,
        g: 0,
        b: 0,
        w: 0,
    };

    /// Move the common part of r, g and b to the white channel
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        let w = r.min(g).min(b);
        Self {
            r: r - w,
            g: g - w,
            b: b - w,
            w,
        }
    }
}

/// Convert chromaticity and level to linear RGB
///
/// `x` and `y` are chromaticity coordinates scaled to `[0, 65535]`.
/// Returns `None` when `y` is zero, where xyY has no defined XYZ.
pub fn xy_to_linear_rgb(x: u16, y: u16, level: u8) -> Option<LinearRgb> {
    if y == 0 {
        return None;
    }

    let nx = unit_from_u16(x);
    let ny = unit_from_u16(y);
    let luminance = unit_from_u8(level);

    let xyz = [
        nx * luminance / ny,
        luminance,
        (luminance / ny) * (1.0 - nx - ny),
    ];

    let [r, g, b] = XYZ_TO_RGB.map(|row| row[0] * xyz[0] + row[1] * xyz[1] + row[2] * xyz[2]);
    Some(LinearRgb { r, g, b })
}

/// Convert chromaticity and level to RGBW duty values
///
/// `y == 0` and a powered-off light both yield [`RgbwDuty::OFF`].
pub fn rgbw_duty(power: bool, level: u8, x: u16, y: u16) -> RgbwDuty {
    if !power {
        return RgbwDuty::OFF;
    }

    match xy_to_linear_rgb(x, y, level) {
        Some(rgb) => RgbwDuty::from_rgb(
            unit_to_duty(rgb.r),
            unit_to_duty(rgb.g),
            unit_to_duty(rgb.b),
        ),
        None => RgbwDuty::OFF,
    }
}
