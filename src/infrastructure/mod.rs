//! Infrastructure layer - Port implementations
//!
//! Concrete channel sinks and the storage encoding of light state.

pub mod drivers;
pub(crate) mod repositories;
