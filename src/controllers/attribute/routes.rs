//! Static attribute routing tables
//!
//! One table per endpoint kind, keyed by `(cluster, attribute)`. Each entry
//! names the payload type the attribute carries and the state mutator it
//! feeds.

use crate::domain::dto::{AttributeTag, AttributeValue, ClusterTag, Rejection, ValueType};
use crate::domain::entity::{RgbwLight, WhiteLight};

/// State mutator, typed by the payload it accepts
pub(super) enum Mutator<S> {
    Bool(fn(&mut S, bool)),
    U8(fn(&mut S, u8)),
    U16(fn(&mut S, u16)),
}

impl<S> Mutator<S> {
    const fn value_type(&self) -> ValueType {
        match self {
            Mutator::Bool(_) => ValueType::Bool,
            Mutator::U8(_) => ValueType::U8,
            Mutator::U16(_) => ValueType::U16,
        }
    }
}

pub(super) struct Route<S> {
    cluster: ClusterTag,
    attribute: AttributeTag,
    mutator: Mutator<S>,
}

impl<S> Route<S> {
    /// Validate the payload and run the mutator
    pub(super) fn apply(
        &self,
        state: &mut S,
        value_type: ValueType,
        payload: Option<&[u8]>,
    ) -> Result<(), Rejection> {
        let payload = payload.ok_or(Rejection::EmptyPayload)?;
        let expected = self.mutator.value_type();
        if value_type != expected {
            return Err(Rejection::TypeMismatch {
                expected,
                actual: value_type,
            });
        }

        match (&self.mutator, AttributeValue::decode(expected, payload)?) {
            (Mutator::Bool(set), AttributeValue::Bool(value)) => set(state, value),
            (Mutator::U8(set), AttributeValue::U8(value)) => set(state, value),
            (Mutator::U16(set), AttributeValue::U16(value)) => set(state, value),
            (_, value) => {
                return Err(Rejection::TypeMismatch {
                    expected,
                    actual: value.value_type(),
                });
            }
        }
        Ok(())
    }
}

/// Find the route for a `(cluster, attribute)` pair
pub(super) fn lookup<S>(
    routes: &'static [Route<S>],
    cluster: ClusterTag,
    attribute: AttributeTag,
) -> Option<&'static Route<S>> {
    routes
        .iter()
        .find(|route| route.cluster == cluster && route.attribute == attribute)
}

pub(super) static WHITE_ROUTES: [Route<WhiteLight>; 3] = [
    Route {
        cluster: ClusterTag::OnOff,
        attribute: AttributeTag::OnOff,
        mutator: Mutator::Bool(WhiteLight::set_power),
    },
    Route {
        cluster: ClusterTag::LevelControl,
        attribute: AttributeTag::CurrentLevel,
        mutator: Mutator::U8(WhiteLight::set_level),
    },
    Route {
        cluster: ClusterTag::ColorControl,
        attribute: AttributeTag::ColorTemperature,
        mutator: Mutator::U16(WhiteLight::set_color_temperature),
    },
];

pub(super) static RGBW_ROUTES: [Route<RgbwLight>; 4] = [
    Route {
        cluster: ClusterTag::OnOff,
        attribute: AttributeTag::OnOff,
        mutator: Mutator::Bool(RgbwLight::set_power),
    },
    Route {
        cluster: ClusterTag::LevelControl,
        attribute: AttributeTag::CurrentLevel,
        mutator: Mutator::U8(RgbwLight::set_level),
    },
    Route {
        cluster: ClusterTag::ColorControl,
        attribute: AttributeTag::CurrentX,
        mutator: Mutator::U16(RgbwLight::set_x),
    },
    Route {
        cluster: ClusterTag::ColorControl,
        attribute: AttributeTag::CurrentY,
        mutator: Mutator::U16(RgbwLight::set_y),
    },
];
