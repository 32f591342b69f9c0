mod decode;
mod factory;
mod model;

pub use decode::DecodeError;
pub use factory::{FactoryError, OptionFactory, ValueDecoders, ValueShape};
pub use model::*;
