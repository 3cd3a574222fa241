//! Color temperature to warm/cool white mix

use crate::math::{MAX_DUTY, round};

/// Upper end of the ZCL color temperature range, in mireds
pub const COLOR_TEMPERATURE_MAX_MIREDS: u16 = 0xFEFF;

/// Duty values of a tunable white light
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WhiteDuty {
    pub warm: u8,
    pub cool: u8,
}

impl WhiteDuty {
    /// Both channels dark
    pub const OFF: Self = Self { warm: 0, cool: 0 };
}

/// Convert a color temperature and level to a warm/cool mix
///
/// `0` mireds is full cool, [`COLOR_TEMPERATURE_MAX_MIREDS`] is full warm.
/// The warm channel follows the level while the cool channel takes the
/// complement of the warm one. A powered-off light is always dark.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn white_duty(power: bool, level: u8, color_temperature: u16) -> WhiteDuty {
    if !power {
        return WhiteDuty::OFF;
    }

    let mireds = color_temperature.min(COLOR_TEMPERATURE_MAX_MIREDS);
    let ratio = f32::from(mireds) / f32::from(COLOR_TEMPERATURE_MAX_MIREDS);

    let warm = if ratio < 1.0 {
        round(ratio * f32::from(level)) as u8
    } else {
        MAX_DUTY
    };

    WhiteDuty {
        warm,
        cool: MAX_DUTY - warm,
    }
}
