use heapless::Vec;
use luminaire_color::{rgbw_duty, white_duty};

use crate::{
    config::{ConfigError, LightConfig, MAX_ENDPOINTS},
    domain::{
        dto::ChannelFrame,
        entity::{EndpointKind, LightState},
        ports::{ChannelId, ChannelSink, LightError, PersistenceError},
    },
    infrastructure::repositories::{decode_light_states, encode_light_states, image_size},
};

/// One addressable light fixture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub id: u8,
    pub state: LightState,
}

/// Render the channel duties of a light state
pub fn render(state: &LightState, config: &LightConfig) -> ChannelFrame {
    let mut frame = ChannelFrame::new(state.kind().channel_group());
    match state {
        LightState::White(light) => {
            let mireds = config.clamp_color_temperature(light.color_temperature());
            let duty = white_duty(light.power(), light.level(), mireds);
            let _ = frame.duties.push((ChannelId::MainCool, duty.cool));
            let _ = frame.duties.push((ChannelId::MainWarm, duty.warm));
        }
        LightState::Rgbw(light) => {
            let duty = rgbw_duty(light.power(), light.level(), light.x(), light.y());
            let _ = frame.duties.push((ChannelId::AuxW, duty.w));
            let _ = frame.duties.push((ChannelId::AuxR, duty.r));
            let _ = frame.duties.push((ChannelId::AuxG, duty.g));
            let _ = frame.duties.push((ChannelId::AuxB, duty.b));
        }
    }
    frame
}

/// Owns every endpoint's light state and the channel sink they drive
pub struct LightUsecases<S: ChannelSink> {
    config: LightConfig,
    endpoints: Vec<Endpoint, MAX_ENDPOINTS>,
    sink: S,
}

impl<S: ChannelSink> LightUsecases<S> {
    /// Create the endpoints described by `config` with their default state
    ///
    /// Nothing is written to the sink until [`LightUsecases::sync_all`].
    pub fn new(config: LightConfig, sink: S) -> Result<Self, ConfigError> {
        config.validate()?;

        // Same capacity as `config.endpoints`
        let endpoints = config
            .endpoints
            .iter()
            .map(|endpoint| Endpoint {
                id: endpoint.id,
                state: LightState::new(endpoint.kind, config.default_power, config.default_level),
            })
            .collect();

        Ok(Self {
            config,
            endpoints,
            sink,
        })
    }

    pub fn config(&self) -> &LightConfig {
        &self.config
    }

    pub fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }

    pub fn state(&self, endpoint_id: u8) -> Option<&LightState> {
        self.endpoint(endpoint_id).map(|endpoint| &endpoint.state)
    }

    pub fn state_mut(&mut self, endpoint_id: u8) -> Option<&mut LightState> {
        self.endpoints
            .iter_mut()
            .find(|endpoint| endpoint.id == endpoint_id)
            .map(|endpoint| &mut endpoint.state)
    }

    pub fn kind(&self, endpoint_id: u8) -> Option<EndpointKind> {
        self.state(endpoint_id).map(LightState::kind)
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Channel duties the endpoint currently asks for
    pub fn frame(&self, endpoint_id: u8) -> Option<ChannelFrame> {
        self.state(endpoint_id).map(|state| render(state, &self.config))
    }

    /// Recompute an endpoint's duties and commit its whole channel group
    ///
    /// Returns `Ok(false)` when no endpoint has this id.
    pub fn refresh(&mut self, endpoint_id: u8) -> Result<bool, LightError<S::Error>> {
        let Some(endpoint) = self
            .endpoints
            .iter_mut()
            .find(|endpoint| endpoint.id == endpoint_id)
        else {
            return Ok(false);
        };

        let frame = render(&endpoint.state, &self.config);
        push_frame(&mut self.sink, &frame).map_err(|e| {
            #[cfg(feature = "log")]
            log::error!("light: endpoint {} commit failed: {:?}", endpoint_id, e);

            LightError::Sink(e)
        })?;
        endpoint.state.mark_clean();
        Ok(true)
    }

    /// Commit every endpoint, used to bring the outputs in line at startup
    pub fn sync_all(&mut self) -> Result<(), LightError<S::Error>> {
        for i in 0..self.endpoints.len() {
            let id = self.endpoints[i].id;
            self.refresh(id)?;
        }
        Ok(())
    }

    /// Encode every endpoint's state into `buf`, returns the image size
    pub fn snapshot_into(&self, buf: &mut [u8]) -> Result<usize, PersistenceError> {
        encode_light_states(
            self.endpoints
                .iter()
                .map(|endpoint| (endpoint.id, &endpoint.state)),
            buf,
        )
    }

    /// Size of the image written by [`LightUsecases::snapshot_into`]
    pub fn snapshot_size(&self) -> usize {
        image_size(self.endpoints.len())
    }

    /// Restore endpoint states from an image
    ///
    /// Records are applied to the endpoint with the same id and kind, others
    /// are skipped. Restored endpoints are left dirty and nothing is
    /// committed. Returns the number of restored endpoints.
    pub fn restore(&mut self, image: &[u8]) -> Result<usize, PersistenceError> {
        let mut restored = 0;
        for (id, state) in decode_light_states(image)? {
            match self.state_mut(id) {
                Some(current) if current.kind() == state.kind() => {
                    *current = state;
                    current.mark_dirty();
                    restored += 1;
                }
                _ => {
                    #[cfg(feature = "log")]
                    log::warn!("light: skipping stored state for endpoint {}", id);
                }
            }
        }
        Ok(restored)
    }

    fn endpoint(&self, endpoint_id: u8) -> Option<&Endpoint> {
        self.endpoints
            .iter()
            .find(|endpoint| endpoint.id == endpoint_id)
    }
}

/// Stage every duty of the frame, then commit the group
fn push_frame<S: ChannelSink>(sink: &mut S, frame: &ChannelFrame) -> Result<(), S::Error> {
    for &(channel, duty) in &frame.duties {
        sink.set_duty(channel, duty)?;
    }
    sink.commit(frame.group)
}
