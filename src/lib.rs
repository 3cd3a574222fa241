#![no_std]

//! Dual luminaire controller
//!
//! Turns attribute changes from a home-automation network stack (on/off,
//! level, color temperature, chromaticity) into PWM duty values for a tunable
//! white light and an RGBW light.
//!
//! Layers:
//! - `domain` - light state entities, protocol DTOs and the [`ChannelSink`] port
//! - `app` - [`LightUsecases`], owning the endpoints and pushing channel frames
//! - `controllers` - [`AttributeDispatcher`], routing attribute events
//! - `infrastructure` - channel sink and storage implementations
//!
//! [`ChannelSink`]: domain::ports::ChannelSink

pub mod app;
pub mod config;
pub mod controllers;
pub mod domain;
pub mod infrastructure;

pub use app::LightUsecases;
pub use config::LightConfig;
pub use controllers::AttributeDispatcher;
