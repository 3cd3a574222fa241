//! Duty scaling helpers

/// Largest duty value of an 8-bit channel
pub const MAX_DUTY: u8 = 255;

/// Round half away from zero.
#[inline]
pub fn round(value: f32) -> f32 {
    libm::roundf(value)
}

/// Scale a unit intensity to a channel duty
///
/// Negative values are treated as zero, values at or above `1.0`
/// saturate to [`MAX_DUTY`].
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn unit_to_duty(component: f32) -> u8 {
    let component = if component > 0.0 { component } else { 0.0 };
    if component < 1.0 {
        round(component * f32::from(MAX_DUTY)) as u8
    } else {
        MAX_DUTY
    }
}

/// Normalize a 16-bit fixed point value to `[0, 1]`
#[inline]
pub fn unit_from_u16(value: u16) -> f32 {
    f32::from(value) / f32::from(u16::MAX)
}

/// Normalize an 8-bit level to `[0, 1]`
#[inline]
pub fn unit_from_u8(value: u8) -> f32 {
    f32::from(value) / f32::from(u8::MAX)
}
