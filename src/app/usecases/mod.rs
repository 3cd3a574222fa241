mod light;

pub use light::{Endpoint, LightUsecases, render};
