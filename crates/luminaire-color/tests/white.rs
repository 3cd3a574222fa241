//! Integration tests for the warm/cool white conversion.

use luminaire_color::{COLOR_TEMPERATURE_MAX_MIREDS, WhiteDuty, white_duty};

// -----------------------------------------------------------------------------
// Boundaries
// -----------------------------------------------------------------------------

#[test]
fn zero_mireds_is_full_cool() {
    assert_eq!(white_duty(true, 254, 0), WhiteDuty { warm: 0, cool: 255 });
}

#[test]
fn max_mireds_is_full_warm() {
    assert_eq!(
        white_duty(true, 254, COLOR_TEMPERATURE_MAX_MIREDS),
        WhiteDuty { warm: 255, cool: 0 }
    );
}

#[test]
fn out_of_range_mireds_clamp_to_full_warm() {
    assert_eq!(white_duty(true, 10, u16::MAX), WhiteDuty { warm: 255, cool: 0 });
}

// -----------------------------------------------------------------------------
// Mixing
// -----------------------------------------------------------------------------

#[test]
fn midpoint_splits_between_channels() {
    assert_eq!(white_duty(true, 254, 0x7F80), WhiteDuty { warm: 127, cool: 128 });
}

#[test]
fn warm_channel_follows_level() {
    assert_eq!(white_duty(true, 200, 0x3FC0), WhiteDuty { warm: 50, cool: 205 });
    assert_eq!(white_duty(true, 0, 0x7F80), WhiteDuty { warm: 0, cool: 255 });
}

// -----------------------------------------------------------------------------
// Power and bounds
// -----------------------------------------------------------------------------

#[test]
fn power_off_is_dark() {
    for mireds in [0, 0x7F80, COLOR_TEMPERATURE_MAX_MIREDS, u16::MAX] {
        assert_eq!(white_duty(false, 254, mireds), WhiteDuty::OFF);
    }
}

#[test]
fn channels_always_sum_to_max_duty_when_on() {
    for level in (0..=255u8).step_by(17) {
        for mireds in (0..=u16::MAX).step_by(4099) {
            let duty = white_duty(true, level, mireds);
            assert_eq!(u16::from(duty.warm) + u16::from(duty.cool), 255);
        }
    }
}
