#[cfg(feature = "tracing_debug")]
use tracing::debug;

use crate::catalog::{OptionCatalog, UnknownOption};
use crate::model::{OptionDefinition, OptionId};
use crate::parser::base::ParseError;
use crate::parser::invocation::CommandInvocation;
use crate::policy::RepeatPolicies;
use crate::tokens::Token;
use crate::value::{OptionFactory, ValueDecoders};

/// Whether a command line holds one invocation, or many split at separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Form {
    Single,
    Multiple,
}

// One option spelled inside a flag token, ex: `-sSL` spells three.
#[derive(Debug)]
struct Occurrence<'c> {
    definition: &'c OptionDefinition,
    alias: String,
    inline: Option<String>,
}

impl<'c> Occurrence<'c> {
    fn new(definition: &'c OptionDefinition, alias: impl Into<String>, inline: Option<&str>) -> Self {
        Self {
            definition,
            alias: alias.into(),
            inline: inline.map(str::to_string),
        }
    }
}

/// Drives the tokens of one parse call into invocations.
pub(crate) struct CommandAssembler<'p, 'c> {
    catalog: &'c dyn OptionCatalog,
    policies: &'c RepeatPolicies,
    factory: OptionFactory<'c>,
    program: &'p str,
    separator: &'p OptionId,
    form: Form,
    current: CommandInvocation<'c>,
    finished: Vec<CommandInvocation<'c>>,
}

impl<'p, 'c> CommandAssembler<'p, 'c> {
    pub(crate) fn new(
        catalog: &'c dyn OptionCatalog,
        policies: &'c RepeatPolicies,
        decoders: &'c ValueDecoders,
        program: &'p str,
        separator: &'p OptionId,
        form: Form,
    ) -> Self {
        Self {
            catalog,
            policies,
            factory: OptionFactory::new(catalog, decoders),
            program,
            separator,
            form,
            current: CommandInvocation::new(policies),
            finished: Vec::default(),
        }
    }

    /// Assemble the invocations.
    /// In the single form, the result holds exactly one invocation.
    pub(crate) fn assemble(
        mut self,
        tokens: &[Token],
    ) -> Result<Vec<CommandInvocation<'c>>, ParseError> {
        // Skip the program name; the stream is consumed from its back.
        let mut stream = tokens.iter().skip(1).collect::<Vec<&Token>>();
        stream.reverse();

        while let Some(token) = stream.pop() {
            let word = token.unquoted();

            let proceed = if is_flag(&word) {
                self.option(token, &word, &mut stream)?
            } else if word.eq_ignore_ascii_case(self.program) {
                self.boundary()
            } else {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Target '{word}' at offset {}.", token.offset());
                }

                self.current.set_target(word);
                true
            };

            if !proceed {
                break;
            }
        }

        let CommandAssembler {
            current,
            mut finished,
            ..
        } = self;
        finished.push(current);
        Ok(finished)
    }

    // Returns whether assembly proceeds past this token.
    fn option(
        &mut self,
        token: &Token,
        word: &str,
        stream: &mut Vec<&Token>,
    ) -> Result<bool, ParseError> {
        let offset = token.offset();
        let occurrences = self
            .occurrences(word)
            .map_err(|error| ParseError::unknown(error, offset))?;

        for Occurrence {
            definition,
            alias,
            inline,
        } in occurrences
        {
            let raw = if definition.takes_argument() {
                match inline {
                    Some(value) if value.is_empty() => {
                        return Err(ParseError::IndexOverflow { alias, offset });
                    }
                    Some(value) => Some(value),
                    None => {
                        let takes_next = stream
                            .last()
                            .map_or(false, |next| !self.is_separator(next));

                        if takes_next {
                            stream.pop().map(Token::unquoted)
                        } else {
                            None
                        }
                    }
                }
            } else {
                None
            };

            let option = self
                .factory
                .make_option(definition.id(), &alias, raw.as_deref())
                .map_err(|error| ParseError::factory(error, offset))?;

            #[cfg(feature = "tracing_debug")]
            {
                debug!("Matched {option:?} at offset {offset}.");
            }

            if definition.id() == self.separator {
                if !self.boundary() {
                    return Ok(false);
                }
            } else {
                self.current.push(option);
            }
        }

        Ok(true)
    }

    // Returns whether assembly proceeds into a new invocation.
    fn boundary(&mut self) -> bool {
        match self.form {
            Form::Single => {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Invocation boundary; single form stops here.");
                }

                false
            }
            Form::Multiple => {
                let finished =
                    std::mem::replace(&mut self.current, CommandInvocation::new(self.policies));

                #[cfg(feature = "tracing_debug")]
                {
                    debug!(
                        "Invocation boundary; finished invocation #{}.",
                        self.finished.len()
                    );
                }

                self.finished.push(finished);
                true
            }
        }
    }

    fn is_separator(&self, token: &Token) -> bool {
        matches!(
            self.catalog.resolve(&token.unquoted()),
            Ok(definition) if definition.id() == self.separator
        )
    }

    // Resolution order:
    // 1. The whole token, ex: `--header`.
    // 2. The token split at its first '=', ex: `--header=X-A:1` (only for options taking an argument).
    // 3. Single dash tokens, as bundled short flags, ex: `-sSL` or `-XPOST`.
    fn occurrences(&self, word: &str) -> Result<Vec<Occurrence<'c>>, UnknownOption> {
        let catalog: &'c dyn OptionCatalog = self.catalog;

        if let Ok(definition) = catalog.resolve(word) {
            return Ok(vec![Occurrence::new(definition, word, None)]);
        }

        let split = word.split_once('=').and_then(|(flag, value)| {
            catalog
                .resolve(flag)
                .ok()
                .map(|definition| (definition, flag, value))
        });

        match split {
            Some((definition, flag, value)) if definition.takes_argument() => {
                return Ok(vec![Occurrence::new(definition, flag, Some(value))]);
            }
            // A bare flag cannot take an inline value.
            Some(_) if word.starts_with("--") => {
                return Err(UnknownOption(word.to_string()));
            }
            _ => {}
        }

        if word.starts_with("--") {
            let flag = word.split_once('=').map_or(word, |(flag, _)| flag);
            return Err(UnknownOption(flag.to_string()));
        }

        bundle(catalog, &word[1..])
    }
}

fn is_flag(word: &str) -> bool {
    word.len() > 1 && word.starts_with('-')
}

fn bundle<'c>(
    catalog: &'c dyn OptionCatalog,
    body: &str,
) -> Result<Vec<Occurrence<'c>>, UnknownOption> {
    let mut occurrences = Vec::default();
    let mut rest = body;

    while let Some(short) = rest.chars().next() {
        let alias = format!("-{short}");
        let after = &rest[short.len_utf8()..];
        let definition = catalog.resolve(&alias)?;

        if definition.takes_argument() {
            // The rest of the token is the inline value, ex: `-XPOST` or `-d=a`.
            let inline = if after.is_empty() {
                None
            } else {
                Some(after.strip_prefix('=').unwrap_or(after))
            };
            occurrences.push(Occurrence::new(definition, alias, inline));
            return Ok(occurrences);
        }

        occurrences.push(Occurrence::new(definition, alias, None));
        rest = after;
    }

    Ok(occurrences)
}
