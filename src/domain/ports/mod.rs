pub mod channel;
pub mod light;
pub mod persistence;

pub use channel::*;
pub use light::*;
pub use persistence::*;
