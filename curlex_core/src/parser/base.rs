use thiserror::Error;

use crate::catalog::UnknownOption;
use crate::model::OptionId;
use crate::policy::UndeclaredPolicy;
use crate::tokens::TokenizeError;
use crate::value::{DecodeError, FactoryError};

/// The parser was configured inconsistently.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Config error: {0}")]
pub struct ConfigError(pub(crate) String);

/// A command line could not be parsed.
///
/// Parsing either fully succeeds or fails with the first of these; there is no partial result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A quote was never closed.
    #[error("Parse error: unbalanced quote {open} opened at offset {offset}.")]
    UnbalancedQuote {
        /// The quote character left open.
        open: char,
        /// Where it was opened.
        offset: usize,
    },
    /// A flag spelling matches no option.
    #[error("Parse error: option '{alias}' does not exist.")]
    UnknownOption {
        /// The unmatched flag portion of the token.
        alias: String,
        /// Where the token starts.
        offset: usize,
    },
    /// An option requiring an argument reached the end of its invocation without one.
    #[error("Parse error: option '{alias}' requires an argument.")]
    MissingArgument {
        /// The alias spelling used.
        alias: String,
        /// Where the option token starts.
        offset: usize,
    },
    /// An argument does not decode into the option's value shape.
    #[error("Parse error: invalid argument for option '{alias}': {reason}")]
    InvalidArgument {
        /// The alias spelling used.
        alias: String,
        /// Why decoding failed.
        reason: DecodeError,
        /// Where the option token starts.
        offset: usize,
    },
    /// A parsed option has no repeat policy.
    #[error("Parse error: no repeat policy is declared for option '{0}'.")]
    UndeclaredPolicy(OptionId),
    /// An inline `flag=value` split ran past the end of the token.
    #[error("Parse error: option '{alias}' has nothing after its '='.")]
    IndexOverflow {
        /// The alias spelling used.
        alias: String,
        /// Where the option token starts.
        offset: usize,
    },
}

impl ParseError {
    /// The byte offset in the raw command line of the token that caused this error, when known.
    pub fn offset(&self) -> Option<usize> {
        match self {
            ParseError::UnbalancedQuote { offset, .. }
            | ParseError::UnknownOption { offset, .. }
            | ParseError::MissingArgument { offset, .. }
            | ParseError::InvalidArgument { offset, .. }
            | ParseError::IndexOverflow { offset, .. } => Some(*offset),
            ParseError::UndeclaredPolicy(_) => None,
        }
    }

    pub(crate) fn unknown(error: UnknownOption, offset: usize) -> Self {
        let UnknownOption(alias) = error;
        ParseError::UnknownOption { alias, offset }
    }

    pub(crate) fn factory(error: FactoryError, offset: usize) -> Self {
        match error {
            FactoryError::UnknownOption(alias) => ParseError::UnknownOption { alias, offset },
            FactoryError::MissingArgument(alias) => ParseError::MissingArgument { alias, offset },
            FactoryError::InvalidArgument { alias, reason } => ParseError::InvalidArgument {
                alias,
                reason,
                offset,
            },
        }
    }
}

impl From<TokenizeError> for ParseError {
    fn from(error: TokenizeError) -> Self {
        match error {
            TokenizeError::UnbalancedQuote { open, offset } => {
                ParseError::UnbalancedQuote { open, offset }
            }
        }
    }
}

impl From<UndeclaredPolicy> for ParseError {
    fn from(error: UndeclaredPolicy) -> Self {
        let UndeclaredPolicy(id) = error;
        ParseError::UndeclaredPolicy(id)
    }
}
