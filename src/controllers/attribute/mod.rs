//! Attribute change handling
//!
//! Turns attribute events from the network stack into light state changes:
//! the event is validated against the endpoint's routing table, the matching
//! mutator runs, and the endpoint's channel group is recomputed and
//! committed. Malformed or unknown events are logged and acknowledged
//! without touching any state.

mod routes;

use routes::{RGBW_ROUTES, WHITE_ROUTES, lookup};

use crate::{
    app::LightUsecases,
    domain::{
        dto::{AttributeEvent, RawAttributeMessage, Rejection},
        entity::LightState,
        ports::{ChannelSink, Handled, LightError},
    },
};

/// Routes attribute events to the endpoint they address
pub struct AttributeDispatcher<S: ChannelSink> {
    usecases: LightUsecases<S>,
}

impl<S: ChannelSink> AttributeDispatcher<S> {
    pub fn new(usecases: LightUsecases<S>) -> Self {
        Self { usecases }
    }

    pub fn usecases(&self) -> &LightUsecases<S> {
        &self.usecases
    }

    pub fn usecases_mut(&mut self) -> &mut LightUsecases<S> {
        &mut self.usecases
    }

    pub fn into_usecases(self) -> LightUsecases<S> {
        self.usecases
    }

    /// Handle an attribute change.
    ///
    /// Only a failing channel sink is reported as an error; every other
    /// problem with the event yields [`Handled::Ignored`].
    pub fn handle(&mut self, event: &AttributeEvent<'_>) -> Result<Handled, LightError<S::Error>> {
        #[cfg(feature = "log")]
        log::info!(
            "attribute: endpoint({}), cluster({:?}), attribute({:?}), data size({})",
            event.endpoint_id,
            event.cluster,
            event.attribute,
            event.payload_size()
        );

        let Some(state) = self.usecases.state_mut(event.endpoint_id) else {
            return Ok(ignore(event, Rejection::UnknownEndpoint(event.endpoint_id)));
        };

        if let Err(rejection) = apply(state, event) {
            return Ok(ignore(event, rejection));
        }

        self.usecases.refresh(event.endpoint_id)?;
        Ok(Handled::Applied)
    }

    /// Decode a message with numeric ids, then handle it
    pub fn handle_raw(
        &mut self,
        message: &RawAttributeMessage<'_>,
    ) -> Result<Handled, LightError<S::Error>> {
        match message.decode() {
            Ok(event) => self.handle(&event),
            Err(_rejection) => {
                #[cfg(feature = "log")]
                log::warn!(
                    "attribute: endpoint({}), cluster(0x{:x}), attribute(0x{:x}), type(0x{:x}) ignored: {}",
                    message.endpoint_id,
                    message.cluster_id,
                    message.attribute_id,
                    message.data_type,
                    _rejection
                );

                Ok(Handled::Ignored(_rejection))
            }
        }
    }
}

/// Run the mutator routed for this event on the endpoint's state
fn apply(state: &mut LightState, event: &AttributeEvent<'_>) -> Result<(), Rejection> {
    let unsupported = Rejection::UnsupportedAttribute {
        cluster: event.cluster,
        attribute: event.attribute,
    };

    match state {
        LightState::White(light) => lookup(&WHITE_ROUTES, event.cluster, event.attribute)
            .ok_or(unsupported)?
            .apply(light, event.value_type, event.value),
        LightState::Rgbw(light) => lookup(&RGBW_ROUTES, event.cluster, event.attribute)
            .ok_or(unsupported)?
            .apply(light, event.value_type, event.value),
    }
}

fn ignore(_event: &AttributeEvent<'_>, rejection: Rejection) -> Handled {
    #[cfg(feature = "log")]
    log::warn!(
        "attribute: endpoint({}), cluster({:?}), attribute({:?}) ignored: {}",
        _event.endpoint_id,
        _event.cluster,
        _event.attribute,
        rejection
    );

    Handled::Ignored(rejection)
}
