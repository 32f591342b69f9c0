//! Core module for `curlex`.
//! See [documentation root](https://docs.rs/curlex/latest/curlex/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod catalog;
mod constant;
mod model;
mod parser;
mod policy;
mod tokens;
mod value;

pub use api::*;
pub use catalog::{OptionCatalog, StaticCatalog, UnknownOption};
pub use model::*;
pub use parser::{
    CommandInvocation, CommandSet, ConfigError, ErrorContext, Explainer, GeneralParser,
    ParseError,
};
pub use policy::{RepeatPolicies, RepeatPolicy, UndeclaredPolicy};
pub use tokens::{tokenize, Token, TokenizeError};
pub use value::*;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
