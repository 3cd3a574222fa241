use serde::Deserialize;

use crate::config::{DEFAULT_COLOR_TEMPERATURE, DEFAULT_X, DEFAULT_Y};
use crate::domain::ports::ChannelGroup;

/// Kind of light fixture behind an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndpointKind {
    /// Tunable white, driven through the warm and cool main channels
    White,
    /// Color light, driven through the auxiliary RGBW channels
    Rgbw,
}

impl EndpointKind {
    pub(crate) const fn as_u8(self) -> u8 {
        match self {
            EndpointKind::White => 0,
            EndpointKind::Rgbw => 1,
        }
    }

    pub(crate) const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(EndpointKind::White),
            1 => Some(EndpointKind::Rgbw),
            _ => None,
        }
    }

    /// Channel group owned by this kind of endpoint
    pub const fn channel_group(self) -> ChannelGroup {
        match self {
            EndpointKind::White => ChannelGroup::Main,
            EndpointKind::Rgbw => ChannelGroup::Aux,
        }
    }
}

/// State of a tunable white light.
///
/// Level and color temperature survive a power-off so the light comes back
/// the way it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhiteLight {
    power: bool,
    level: u8,
    color_temperature: u16,
    dirty: bool,
}

impl WhiteLight {
    pub const fn new(power: bool, level: u8) -> Self {
        Self {
            power,
            level,
            color_temperature: DEFAULT_COLOR_TEMPERATURE,
            dirty: true,
        }
    }

    pub const fn power(&self) -> bool {
        self.power
    }

    pub const fn level(&self) -> u8 {
        self.level
    }

    /// Color temperature in mireds
    pub const fn color_temperature(&self) -> u16 {
        self.color_temperature
    }

    pub fn set_power(&mut self, power: bool) {
        self.power = power;
        self.dirty = true;
    }

    pub fn set_level(&mut self, level: u8) {
        self.level = level;
        self.dirty = true;
    }

    pub fn set_color_temperature(&mut self, mireds: u16) {
        self.color_temperature = mireds;
        self.dirty = true;
    }
}

/// State of an RGBW light.
///
/// Chromaticity is kept as CIE 1931 `x`/`y` scaled to `[0, 65535]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbwLight {
    power: bool,
    level: u8,
    x: u16,
    y: u16,
    dirty: bool,
}

impl RgbwLight {
    pub const fn new(power: bool, level: u8) -> Self {
        Self {
            power,
            level,
            x: DEFAULT_X,
            y: DEFAULT_Y,
            dirty: true,
        }
    }

    pub const fn power(&self) -> bool {
        self.power
    }

    pub const fn level(&self) -> u8 {
        self.level
    }

    pub const fn x(&self) -> u16 {
        self.x
    }

    pub const fn y(&self) -> u16 {
        self.y
    }

    pub fn set_power(&mut self, power: bool) {
        self.power = power;
        self.dirty = true;
    }

    pub fn set_level(&mut self, level: u8) {
        self.level = level;
        self.dirty = true;
    }

    pub fn set_x(&mut self, x: u16) {
        self.x = x;
        self.dirty = true;
    }

    pub fn set_y(&mut self, y: u16) {
        self.y = y;
        self.dirty = true;
    }
}

/// Per-endpoint light state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LightState {
    White(WhiteLight),
    Rgbw(RgbwLight),
}

impl LightState {
    /// Create a state with the default color for the given kind
    pub const fn new(kind: EndpointKind, power: bool, level: u8) -> Self {
        match kind {
            EndpointKind::White => LightState::White(WhiteLight::new(power, level)),
            EndpointKind::Rgbw => LightState::Rgbw(RgbwLight::new(power, level)),
        }
    }

    pub const fn kind(&self) -> EndpointKind {
        match self {
            LightState::White(_) => EndpointKind::White,
            LightState::Rgbw(_) => EndpointKind::Rgbw,
        }
    }

    pub const fn power(&self) -> bool {
        match self {
            LightState::White(light) => light.power,
            LightState::Rgbw(light) => light.power,
        }
    }

    pub const fn level(&self) -> u8 {
        match self {
            LightState::White(light) => light.level,
            LightState::Rgbw(light) => light.level,
        }
    }

    pub fn set_power(&mut self, power: bool) {
        match self {
            LightState::White(light) => light.set_power(power),
            LightState::Rgbw(light) => light.set_power(power),
        }
    }

    pub fn set_level(&mut self, level: u8) {
        match self {
            LightState::White(light) => light.set_level(level),
            LightState::Rgbw(light) => light.set_level(level),
        }
    }

    /// Whether the state changed since the last committed frame
    pub const fn is_dirty(&self) -> bool {
        match self {
            LightState::White(light) => light.dirty,
            LightState::Rgbw(light) => light.dirty,
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        match self {
            LightState::White(light) => light.dirty = true,
            LightState::Rgbw(light) => light.dirty = true,
        }
    }

    pub(crate) fn mark_clean(&mut self) {
        match self {
            LightState::White(light) => light.dirty = false,
            LightState::Rgbw(light) => light.dirty = false,
        }
    }
}
