pub mod usecases;

pub use usecases::LightUsecases;
