#![allow(clippy::unreadable_literal)]

use core::fmt;

use heapless::Vec;
use serde::Deserialize;

use crate::domain::entity::EndpointKind;

/* Arbitrary endpoint ids */
pub const WHITE_LIGHT_ENDPOINT: u8 = 1;
pub const RGBW_LIGHT_ENDPOINT: u8 = 2;

pub const MAX_ENDPOINTS: usize = 4;

/// Level a light starts with (ZCL CurrentLevel default)
pub const DEFAULT_LEVEL: u8 = 0xFE;
/// 0 mireds, full cool
pub const DEFAULT_COLOR_TEMPERATURE: u16 = 0;
/// ZCL CurrentX default
pub const DEFAULT_X: u16 = 0x616B;
/// ZCL CurrentY default
pub const DEFAULT_Y: u16 = 0x607D;

pub const COLOR_TEMPERATURE_MAX_MIREDS: u16 = luminaire_color::COLOR_TEMPERATURE_MAX_MIREDS;

pub const MAX_DUTY: u8 = luminaire_color::MAX_DUTY;
pub const DEFAULT_DUTY_RESOLUTION_BITS: u8 = 8;
pub const MAX_DUTY_RESOLUTION_BITS: u8 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct EndpointConfig {
    pub id: u8,
    pub kind: EndpointKind,
}

/// Runtime light configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LightConfig {
    pub endpoints: Vec<EndpointConfig, MAX_ENDPOINTS>,
    pub default_power: bool,
    pub default_level: u8,
    /// Physical color temperature range, incoming values are clamped to it
    pub color_temp_min_mireds: u16,
    pub color_temp_max_mireds: u16,
    /// PWM resolution of the output hardware
    pub duty_resolution_bits: u8,
}

impl Default for LightConfig {
    fn default() -> Self {
        let endpoints = [
            EndpointConfig {
                id: WHITE_LIGHT_ENDPOINT,
                kind: EndpointKind::White,
            },
            EndpointConfig {
                id: RGBW_LIGHT_ENDPOINT,
                kind: EndpointKind::Rgbw,
            },
        ];

        Self {
            endpoints: endpoints.into_iter().collect(),
            default_power: false,
            default_level: DEFAULT_LEVEL,
            color_temp_min_mireds: 0,
            color_temp_max_mireds: COLOR_TEMPERATURE_MAX_MIREDS,
            duty_resolution_bits: DEFAULT_DUTY_RESOLUTION_BITS,
        }
    }
}

impl LightConfig {
    /// Parse and validate a JSON configuration
    ///
    /// Missing fields take their default values.
    pub fn from_json(json: &[u8]) -> Result<Self, ConfigError> {
        let (config, _) =
            serde_json_core::from_slice::<LightConfig>(json).map_err(|_| ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, endpoint) in self.endpoints.iter().enumerate() {
            if self.endpoints[..i].iter().any(|other| other.id == endpoint.id) {
                return Err(ConfigError::DuplicateEndpoint(endpoint.id));
            }
        }
        if self.color_temp_min_mireds > self.color_temp_max_mireds {
            return Err(ConfigError::InvalidColorTemperatureRange);
        }
        if self.duty_resolution_bits == 0 || self.duty_resolution_bits > MAX_DUTY_RESOLUTION_BITS {
            return Err(ConfigError::InvalidDutyResolution(self.duty_resolution_bits));
        }
        Ok(())
    }

    /// Clamp a color temperature to the physical range
    pub fn clamp_color_temperature(&self, mireds: u16) -> u16 {
        mireds
            .max(self.color_temp_min_mireds)
            .min(self.color_temp_max_mireds)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Malformed JSON, unknown endpoint kind or too many endpoints
    Parse,
    DuplicateEndpoint(u8),
    InvalidColorTemperatureRange,
    InvalidDutyResolution(u8),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse => write!(f, "Config parse error"),
            ConfigError::DuplicateEndpoint(id) => write!(f, "Duplicate endpoint id {}", id),
            ConfigError::InvalidColorTemperatureRange => {
                write!(f, "Color temperature min is above max")
            }
            ConfigError::InvalidDutyResolution(bits) => {
                write!(f, "Unsupported duty resolution of {} bits", bits)
            }
        }
    }
}
