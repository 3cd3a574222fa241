use core::fmt;

/// Physical PWM output channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ChannelId {
    MainCool = 0,
    MainWarm = 1,
    AuxW = 2,
    AuxR = 3,
    AuxG = 4,
    AuxB = 5,
}

impl ChannelId {
    /// Number of physical channels
    pub const COUNT: usize = 6;

    /// Every channel, in hardware index order
    pub const ALL: [ChannelId; Self::COUNT] = [
        ChannelId::MainCool,
        ChannelId::MainWarm,
        ChannelId::AuxW,
        ChannelId::AuxR,
        ChannelId::AuxG,
        ChannelId::AuxB,
    ];

    /// Hardware channel index
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Channels updated together for one light
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelGroup {
    /// Cool and warm white
    Main,
    /// White, red, green and blue
    Aux,
}

impl ChannelGroup {
    pub const fn channels(self) -> &'static [ChannelId] {
        match self {
            ChannelGroup::Main => &[ChannelId::MainCool, ChannelId::MainWarm],
            ChannelGroup::Aux => &[
                ChannelId::AuxW,
                ChannelId::AuxR,
                ChannelId::AuxG,
                ChannelId::AuxB,
            ],
        }
    }

    pub fn contains(self, channel: ChannelId) -> bool {
        self.channels().contains(&channel)
    }
}

/// Abstract PWM output.
///
/// Implement this trait to support different hardware backends. Duty values
/// are staged with [`ChannelSink::set_duty`] and become visible together on
/// [`ChannelSink::commit`]; the controller always stages every channel of a
/// group before committing it.
pub trait ChannelSink {
    type Error: fmt::Debug;

    /// Stage a duty value (0-255) for a channel
    fn set_duty(&mut self, channel: ChannelId, duty: u8) -> Result<(), Self::Error>;

    /// Apply every staged value of the group at once
    fn commit(&mut self, group: ChannelGroup) -> Result<(), Self::Error>;
}

impl<S: ChannelSink + ?Sized> ChannelSink for &mut S {
    type Error = S::Error;

    fn set_duty(&mut self, channel: ChannelId, duty: u8) -> Result<(), Self::Error> {
        (**self).set_duty(channel, duty)
    }

    fn commit(&mut self, group: ChannelGroup) -> Result<(), Self::Error> {
        (**self).commit(group)
    }
}
