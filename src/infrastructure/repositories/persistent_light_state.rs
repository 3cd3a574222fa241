//! Byte image of the light states for power-loss-safe storage
//!
//! Layout: a 4-byte header (`magic`, `version`, record count) followed by
//! one 8-byte record per endpoint.

use core::mem::size_of;

use bytemuck::{Pod, Zeroable};
use heapless::Vec;

use crate::config::MAX_ENDPOINTS;
use crate::domain::entity::{EndpointKind, LightState};
use crate::domain::ports::PersistenceError;

const MAGIC: [u8; 2] = *b"ZL";
const VERSION: u8 = 1;

const HEADER_SIZE: usize = size_of::<ImageHeader>();
const RECORD_SIZE: usize = size_of::<PersistentLightState>();

#[derive(Debug, Clone, Copy, Zeroable, Pod)]
#[repr(C)]
struct ImageHeader {
    magic: [u8; 2],
    version: u8,
    count: u8,
}

#[derive(Debug, Clone, Copy, Zeroable, Pod)]
#[repr(C)]
struct PersistentLightState {
    endpoint_id: u8,
    kind: u8,
    power: u8,
    level: u8,
    /// Color temperature for white lights, x and y for RGBW lights
    color: [u16; 2],
}

impl PersistentLightState {
    fn new(endpoint_id: u8, state: &LightState) -> Self {
        let color = match state {
            LightState::White(light) => [light.color_temperature(), 0],
            LightState::Rgbw(light) => [light.x(), light.y()],
        };
        Self {
            endpoint_id,
            kind: state.kind().as_u8(),
            power: u8::from(state.power()),
            level: state.level(),
            color: color.map(u16::to_le),
        }
    }

    fn to_state(self) -> Option<LightState> {
        let kind = EndpointKind::from_u8(self.kind)?;
        let [a, b] = self.color.map(u16::from_le);

        let mut state = LightState::new(kind, self.power != 0, self.level);
        match &mut state {
            LightState::White(light) => light.set_color_temperature(a),
            LightState::Rgbw(light) => {
                light.set_x(a);
                light.set_y(b);
            }
        }
        Some(state)
    }
}

/// Size of the image holding `count` endpoints
pub(crate) const fn image_size(count: usize) -> usize {
    HEADER_SIZE + count * RECORD_SIZE
}

/// Write the image of the given endpoint states into `buf`
///
/// Returns the number of bytes written.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn encode_light_states<'a>(
    states: impl ExactSizeIterator<Item = (u8, &'a LightState)>,
    buf: &mut [u8],
) -> Result<usize, PersistenceError> {
    let count = states.len();
    if count > MAX_ENDPOINTS {
        return Err(PersistenceError::TooManyRecords(count as u8));
    }
    let size = image_size(count);
    if buf.len() < size {
        return Err(PersistenceError::BufferTooSmall);
    }

    let header = ImageHeader {
        magic: MAGIC,
        version: VERSION,
        count: count as u8,
    };
    buf[..HEADER_SIZE].copy_from_slice(bytemuck::bytes_of(&header));

    for (chunk, (endpoint_id, state)) in buf[HEADER_SIZE..size]
        .chunks_exact_mut(RECORD_SIZE)
        .zip(states)
    {
        let record = PersistentLightState::new(endpoint_id, state);
        chunk.copy_from_slice(bytemuck::bytes_of(&record));
    }

    Ok(size)
}

/// Read endpoint states back from an image
pub(crate) fn decode_light_states(
    image: &[u8],
) -> Result<Vec<(u8, LightState), MAX_ENDPOINTS>, PersistenceError> {
    if image.len() < HEADER_SIZE {
        return Err(PersistenceError::Truncated);
    }
    let header: ImageHeader = bytemuck::pod_read_unaligned(&image[..HEADER_SIZE]);
    if header.magic != MAGIC {
        return Err(PersistenceError::BadMagic);
    }
    if header.version != VERSION {
        return Err(PersistenceError::UnsupportedVersion(header.version));
    }

    let count = usize::from(header.count);
    if count > MAX_ENDPOINTS {
        return Err(PersistenceError::TooManyRecords(header.count));
    }
    if image.len() < image_size(count) {
        return Err(PersistenceError::Truncated);
    }

    let mut states = Vec::new();
    for chunk in image[HEADER_SIZE..image_size(count)].chunks_exact(RECORD_SIZE) {
        let record: PersistentLightState = bytemuck::pod_read_unaligned(chunk);
        let state = record.to_state().ok_or(PersistenceError::InvalidRecord)?;
        states
            .push((record.endpoint_id, state))
            .map_err(|_| PersistenceError::TooManyRecords(header.count))?;
    }

    Ok(states)
}
