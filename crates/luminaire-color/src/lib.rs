#![no_std]

//! Color conversion for PWM-driven luminaires
//!
//! Maps a light's color state (brightness level plus either a color
//! temperature in mireds or CIE 1931 chromaticity) to 8-bit channel duty
//! values:
//! - `white` - mireds to a warm/cool white mix
//! - `xy` - xyY chromaticity to red/green/blue/white
//! - `math` - shared clamping and rounding
//!
//! All conversions use `f32` and round half away from zero.

pub mod math;
pub mod white;
pub mod xy;

pub use math::MAX_DUTY;
pub use white::{COLOR_TEMPERATURE_MAX_MIREDS, WhiteDuty, white_duty};
pub use xy::{LinearRgb, RgbwDuty, rgbw_duty, xy_to_linear_rgb};
