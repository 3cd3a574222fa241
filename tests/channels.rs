//! Integration tests for the buffered PWM channel bank.

use zb_dual_light::LightConfig;
use zb_dual_light::domain::ports::{ChannelGroup, ChannelId, ChannelSink};
use zb_dual_light::infrastructure::drivers::BufferedChannels;

#[test]
fn staged_duty_is_invisible_until_commit() {
    let mut channels = BufferedChannels::new();
    channels.set_duty(ChannelId::MainCool, 200).unwrap();

    assert_eq!(channels.staged_duty(ChannelId::MainCool), 200);
    assert_eq!(channels.duty(ChannelId::MainCool), 0);

    channels.commit(ChannelGroup::Main).unwrap();
    assert_eq!(channels.duty(ChannelId::MainCool), 200);
    assert_eq!(channels.hardware_duty(ChannelId::MainCool), 200);
    assert_eq!(channels.commit_count(), 1);
}

#[test]
fn commit_only_publishes_its_group() {
    let mut channels = BufferedChannels::new();
    channels.set_duty(ChannelId::MainWarm, 10).unwrap();
    channels.set_duty(ChannelId::AuxR, 20).unwrap();

    channels.commit(ChannelGroup::Aux).unwrap();

    assert_eq!(channels.duty(ChannelId::AuxR), 20);
    assert_eq!(channels.duty(ChannelId::MainWarm), 0);
    assert_eq!(channels.staged_duty(ChannelId::MainWarm), 10);
}

#[test]
fn groups_partition_the_channels() {
    for channel in ChannelId::ALL {
        let main = ChannelGroup::Main.contains(channel);
        let aux = ChannelGroup::Aux.contains(channel);
        assert!(main != aux, "{channel:?}");
    }
    assert_eq!(ChannelGroup::Main.channels().len(), 2);
    assert_eq!(ChannelGroup::Aux.channels().len(), 4);
}

#[test]
fn six_bit_scaling() {
    let mut channels = BufferedChannels::with_resolution(6);
    assert_eq!(channels.max_hardware_duty(), 63);

    channels.set_duty(ChannelId::AuxW, 255).unwrap();
    channels.set_duty(ChannelId::AuxR, 128).unwrap();
    channels.set_duty(ChannelId::AuxG, 0).unwrap();
    channels.commit(ChannelGroup::Aux).unwrap();

    assert_eq!(channels.hardware_duty(ChannelId::AuxW), 63);
    assert_eq!(channels.hardware_duty(ChannelId::AuxR), 32);
    assert_eq!(channels.hardware_duty(ChannelId::AuxG), 0);
    assert_eq!(channels.duty(ChannelId::AuxW), 255);
}

#[test]
fn sixteen_bit_scaling() {
    let mut channels = BufferedChannels::with_resolution(16);
    channels.set_duty(ChannelId::MainCool, 255).unwrap();
    channels.set_duty(ChannelId::MainWarm, 1).unwrap();
    channels.commit(ChannelGroup::Main).unwrap();

    assert_eq!(channels.hardware_duty(ChannelId::MainCool), 0xFFFF);
    assert_eq!(channels.hardware_duty(ChannelId::MainWarm), 257);
}

#[test]
fn resolution_is_clamped() {
    assert_eq!(BufferedChannels::with_resolution(0).max_hardware_duty(), 1);
    assert_eq!(BufferedChannels::with_resolution(20).max_hardware_duty(), 0xFFFF);
}

#[test]
fn resolution_from_config() {
    let config = LightConfig {
        duty_resolution_bits: 10,
        ..LightConfig::default()
    };
    assert_eq!(BufferedChannels::for_config(&config).max_hardware_duty(), 1023);
}
