pub mod attribute;

pub use attribute::AttributeDispatcher;
