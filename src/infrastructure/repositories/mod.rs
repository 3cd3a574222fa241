mod persistent_light_state;

pub(crate) use persistent_light_state::{decode_light_states, encode_light_states, image_size};
