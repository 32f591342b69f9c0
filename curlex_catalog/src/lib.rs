//! The curl option tables for `curlex`.
//!
//! Three independent tables describe curl to the parser:
//! the option [`catalog`], the repeat [`policies`], and the value shapes ([`decoders`]).
//! Each is built fresh on every call; build them once and share them by reference.
//!
//! ### Example
//! ```
//! use curlex_catalog::{catalog, decoders, ids, policies};
//! use curlex_core::CommandLineParser;
//!
//! let (catalog, policies, decoders) = (catalog().unwrap(), policies().unwrap(), decoders().unwrap());
//! let parser = CommandLineParser::new(&catalog, &policies, &decoders).build().unwrap();
//!
//! let invocation = parser.parse("curl -sL --retry 3 https://example.com").unwrap();
//! assert!(invocation.is_set(&ids::LOCATION).unwrap());
//! assert_eq!(invocation.value_of(&ids::RETRY).unwrap().unwrap().to_string(), "3");
//! ```
#![deny(missing_docs)]
pub mod ids;
mod options;
mod policy;
mod shapes;

use curlex_core::{ConfigError, RepeatPolicies, StaticCatalog, ValueDecoders};

/// Build the catalog of curl options.
pub fn catalog() -> Result<StaticCatalog, ConfigError> {
    StaticCatalog::new(options::definitions())
}

/// Build the repeat policy of every curl option.
pub fn policies() -> Result<RepeatPolicies, ConfigError> {
    RepeatPolicies::new(policy::declarations())
}

/// Build the value shapes of the curl options whose arguments are more than text.
pub fn decoders() -> Result<ValueDecoders, ConfigError> {
    ValueDecoders::new(shapes::registrations())
}

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
