mod assembler;
mod base;
mod invocation;
mod middleware;
mod printer;

pub use base::{ConfigError, ParseError};
pub use invocation::{CommandInvocation, CommandSet};
pub use middleware::GeneralParser;
pub use printer::{ErrorContext, Explainer};
