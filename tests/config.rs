//! Integration tests for the JSON light configuration.

use zb_dual_light::LightConfig;
use zb_dual_light::config::{ConfigError, COLOR_TEMPERATURE_MAX_MIREDS};
use zb_dual_light::domain::entity::EndpointKind;

#[test]
fn default_config() {
    let config = LightConfig::default();

    assert_eq!(config.endpoints.len(), 2);
    assert_eq!(config.endpoints[0].id, 1);
    assert_eq!(config.endpoints[0].kind, EndpointKind::White);
    assert_eq!(config.endpoints[1].id, 2);
    assert_eq!(config.endpoints[1].kind, EndpointKind::Rgbw);
    assert!(!config.default_power);
    assert_eq!(config.default_level, 0xFE);
    assert_eq!(config.color_temp_min_mireds, 0);
    assert_eq!(config.color_temp_max_mireds, COLOR_TEMPERATURE_MAX_MIREDS);
    assert_eq!(config.duty_resolution_bits, 8);
    assert_eq!(config.validate(), Ok(()));
}

#[test]
fn empty_object_gives_defaults() {
    assert_eq!(LightConfig::from_json(b"{}"), Ok(LightConfig::default()));
}

#[test]
fn full_config() {
    let json = br#"{
        "endpoints": [
            {"id": 10, "kind": "rgbw"},
            {"id": 11, "kind": "white"},
            {"id": 12, "kind": "white"}
        ],
        "default_power": true,
        "default_level": 128,
        "color_temp_min_mireds": 153,
        "color_temp_max_mireds": 500,
        "duty_resolution_bits": 6
    }"#;

    let config = LightConfig::from_json(json).unwrap();

    assert_eq!(config.endpoints.len(), 3);
    assert_eq!(config.endpoints[0].id, 10);
    assert_eq!(config.endpoints[0].kind, EndpointKind::Rgbw);
    assert_eq!(config.endpoints[2].kind, EndpointKind::White);
    assert!(config.default_power);
    assert_eq!(config.default_level, 128);
    assert_eq!(config.color_temp_min_mireds, 153);
    assert_eq!(config.color_temp_max_mireds, 500);
    assert_eq!(config.duty_resolution_bits, 6);
}

#[test]
fn partial_config_keeps_other_defaults() {
    let config = LightConfig::from_json(br#"{"default_level": 20}"#).unwrap();

    assert_eq!(config.default_level, 20);
    assert_eq!(config.endpoints, LightConfig::default().endpoints);
    assert_eq!(config.duty_resolution_bits, 8);
}

#[test]
fn clamp_color_temperature() {
    let config = LightConfig::from_json(
        br#"{"color_temp_min_mireds": 153, "color_temp_max_mireds": 500}"#,
    )
    .unwrap();

    assert_eq!(config.clamp_color_temperature(0), 153);
    assert_eq!(config.clamp_color_temperature(300), 300);
    assert_eq!(config.clamp_color_temperature(0xFFFF), 500);
}

#[test]
fn malformed_json() {
    assert_eq!(LightConfig::from_json(b"{\"default_level\": "), Err(ConfigError::Parse));
    assert_eq!(
        LightConfig::from_json(br#"{"default_power": "yes"}"#),
        Err(ConfigError::Parse)
    );
}

#[test]
fn unknown_endpoint_kind() {
    let json = br#"{"endpoints": [{"id": 1, "kind": "rgb"}]}"#;
    assert_eq!(LightConfig::from_json(json), Err(ConfigError::Parse));
}

#[test]
fn too_many_endpoints() {
    let json = br#"{"endpoints": [
        {"id": 1, "kind": "white"},
        {"id": 2, "kind": "white"},
        {"id": 3, "kind": "white"},
        {"id": 4, "kind": "white"},
        {"id": 5, "kind": "white"}
    ]}"#;
    assert_eq!(LightConfig::from_json(json), Err(ConfigError::Parse));
}

#[test]
fn duplicate_endpoint_id() {
    let json = br#"{"endpoints": [{"id": 3, "kind": "white"}, {"id": 3, "kind": "rgbw"}]}"#;
    assert_eq!(
        LightConfig::from_json(json),
        Err(ConfigError::DuplicateEndpoint(3))
    );
}

#[test]
fn inverted_color_temperature_range() {
    let json = br#"{"color_temp_min_mireds": 400, "color_temp_max_mireds": 200}"#;
    assert_eq!(
        LightConfig::from_json(json),
        Err(ConfigError::InvalidColorTemperatureRange)
    );
}

#[test]
fn unsupported_duty_resolution() {
    assert_eq!(
        LightConfig::from_json(br#"{"duty_resolution_bits": 0}"#),
        Err(ConfigError::InvalidDutyResolution(0))
    );
    assert_eq!(
        LightConfig::from_json(br#"{"duty_resolution_bits": 17}"#),
        Err(ConfigError::InvalidDutyResolution(17))
    );
}
