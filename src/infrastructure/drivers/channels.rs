use core::convert::Infallible;

use crate::config::{
    DEFAULT_DUTY_RESOLUTION_BITS, LightConfig, MAX_DUTY, MAX_DUTY_RESOLUTION_BITS,
};
use crate::domain::ports::{ChannelGroup, ChannelId, ChannelSink};

/// Double-buffered PWM channel bank
///
/// Duty writes land in a staging buffer and only reach the output on
/// commit, one whole group at a time. Committed 8-bit duties are rescaled to
/// the hardware resolution, e.g. 6-bit LEDC channels top out at 63.
#[derive(Debug, Clone)]
pub struct BufferedChannels {
    staged: [u8; ChannelId::COUNT],
    committed: [u8; ChannelId::COUNT],
    output: [u16; ChannelId::COUNT],
    resolution_bits: u8,
    commits: usize,
}

impl BufferedChannels {
    /// Create a channel bank with 8-bit resolution
    pub const fn new() -> Self {
        Self::with_resolution(DEFAULT_DUTY_RESOLUTION_BITS)
    }

    /// Create a channel bank with the given PWM resolution (1-16 bits)
    pub const fn with_resolution(bits: u8) -> Self {
        let resolution_bits = if bits == 0 {
            1
        } else if bits > MAX_DUTY_RESOLUTION_BITS {
            MAX_DUTY_RESOLUTION_BITS
        } else {
            bits
        };
        Self {
            staged: [0; ChannelId::COUNT],
            committed: [0; ChannelId::COUNT],
            output: [0; ChannelId::COUNT],
            resolution_bits,
            commits: 0,
        }
    }

    /// Create a channel bank with the resolution named by the config
    pub const fn for_config(config: &LightConfig) -> Self {
        Self::with_resolution(config.duty_resolution_bits)
    }

    /// Largest hardware duty value
    #[allow(clippy::cast_possible_truncation)]
    pub const fn max_hardware_duty(&self) -> u16 {
        ((1u32 << self.resolution_bits) - 1) as u16
    }

    /// Last committed duty (0-255)
    pub fn duty(&self, channel: ChannelId) -> u8 {
        self.committed[channel.index()]
    }

    /// Staged, not yet committed duty (0-255)
    pub fn staged_duty(&self, channel: ChannelId) -> u8 {
        self.staged[channel.index()]
    }

    /// Last committed duty at hardware resolution
    pub fn hardware_duty(&self, channel: ChannelId) -> u16 {
        self.output[channel.index()]
    }

    /// Number of group commits so far
    pub const fn commit_count(&self) -> usize {
        self.commits
    }

    #[allow(clippy::cast_possible_truncation)]
    fn scale(&self, duty: u8) -> u16 {
        let max = u32::from(self.max_hardware_duty());
        let full = u32::from(MAX_DUTY);
        ((u32::from(duty) * max + full / 2) / full) as u16
    }
}

impl Default for BufferedChannels {
    fn default() -> Self {
        Self::new()
    }
}

impl ChannelSink for BufferedChannels {
    type Error = Infallible;

    fn set_duty(&mut self, channel: ChannelId, duty: u8) -> Result<(), Self::Error> {
        self.staged[channel.index()] = duty;
        Ok(())
    }

    fn commit(&mut self, group: ChannelGroup) -> Result<(), Self::Error> {
        for channel in group.channels() {
            let duty = self.staged[channel.index()];
            self.committed[channel.index()] = duty;
            self.output[channel.index()] = self.scale(duty);
        }
        self.commits += 1;
        Ok(())
    }
}
