#![allow(dead_code, unreachable_pub)]

use zb_dual_light::domain::dto::{AttributeEvent, AttributeTag, ClusterTag, ValueType};
use zb_dual_light::domain::ports::{ChannelGroup, ChannelId, ChannelSink};
use zb_dual_light::infrastructure::drivers::BufferedChannels;
use zb_dual_light::{AttributeDispatcher, LightConfig, LightUsecases};

pub const WHITE: u8 = 1;
pub const RGBW: u8 = 2;

pub fn dispatcher() -> AttributeDispatcher<BufferedChannels> {
    dispatcher_with(LightConfig::default(), BufferedChannels::new())
}

pub fn dispatcher_with<S: ChannelSink>(config: LightConfig, sink: S) -> AttributeDispatcher<S> {
    let usecases = LightUsecases::new(config, sink).expect("valid config");
    AttributeDispatcher::new(usecases)
}

pub fn power(endpoint_id: u8, on: &'static [u8; 1]) -> AttributeEvent<'static> {
    AttributeEvent::new(
        endpoint_id,
        ClusterTag::OnOff,
        AttributeTag::OnOff,
        ValueType::Bool,
        on,
    )
}

pub const ON: &[u8; 1] = &[0x01];
pub const OFF: &[u8; 1] = &[0x00];

pub fn level(endpoint_id: u8, level: &'static [u8; 1]) -> AttributeEvent<'static> {
    AttributeEvent::new(
        endpoint_id,
        ClusterTag::LevelControl,
        AttributeTag::CurrentLevel,
        ValueType::U8,
        level,
    )
}

pub fn color(endpoint_id: u8, attribute: AttributeTag, value: &[u8]) -> AttributeEvent<'_> {
    AttributeEvent::new(
        endpoint_id,
        ClusterTag::ColorControl,
        attribute,
        ValueType::U16,
        value,
    )
}

/// White endpoint duties as (warm, cool)
pub fn white_duties(sink: &BufferedChannels) -> (u8, u8) {
    (sink.duty(ChannelId::MainWarm), sink.duty(ChannelId::MainCool))
}

/// RGBW endpoint duties as (r, g, b, w)
pub fn rgbw_duties(sink: &BufferedChannels) -> (u8, u8, u8, u8) {
    (
        sink.duty(ChannelId::AuxR),
        sink.duty(ChannelId::AuxG),
        sink.duty(ChannelId::AuxB),
        sink.duty(ChannelId::AuxW),
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkOp {
    SetDuty(ChannelId, u8),
    Commit(ChannelGroup),
}

/// Sink recording every call in order
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub ops: Vec<SinkOp>,
}

impl ChannelSink for RecordingSink {
    type Error = core::convert::Infallible;

    fn set_duty(&mut self, channel: ChannelId, duty: u8) -> Result<(), Self::Error> {
        self.ops.push(SinkOp::SetDuty(channel, duty));
        Ok(())
    }

    fn commit(&mut self, group: ChannelGroup) -> Result<(), Self::Error> {
        self.ops.push(SinkOp::Commit(group));
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkFault;

/// Sink rejecting commits, and optionally duty writes
#[derive(Debug, Default)]
pub struct FailingSink {
    pub reject_duty: bool,
    pub duty_writes: usize,
    pub commits: usize,
}

impl ChannelSink for FailingSink {
    type Error = SinkFault;

    fn set_duty(&mut self, _channel: ChannelId, _duty: u8) -> Result<(), Self::Error> {
        if self.reject_duty {
            return Err(SinkFault);
        }
        self.duty_writes += 1;
        Ok(())
    }

    fn commit(&mut self, _group: ChannelGroup) -> Result<(), Self::Error> {
        self.commits += 1;
        Err(SinkFault)
    }
}
