use crate::catalog::OptionCatalog;
use crate::model::OptionId;
use crate::parser::assembler::{CommandAssembler, Form};
use crate::parser::base::ParseError;
use crate::parser::invocation::{CommandInvocation, CommandSet};
use crate::policy::RepeatPolicies;
use crate::tokens::tokenize;
use crate::value::ValueDecoders;

/// The configured command line parser.
/// Built via [`CommandLineParser::build`](crate::CommandLineParser::build).
///
/// The parser holds no per-call state, so one parser may serve any number of parse calls, from any number of threads.
pub struct GeneralParser<'c> {
    catalog: &'c dyn OptionCatalog,
    policies: &'c RepeatPolicies,
    decoders: &'c ValueDecoders,
    program: String,
    separator: OptionId,
}

impl<'c> std::fmt::Debug for GeneralParser<'c> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneralParser")
            .field("program", &self.program)
            .field("separator", &self.separator)
            .finish()
    }
}

impl<'c> GeneralParser<'c> {
    pub(crate) fn new(
        catalog: &'c dyn OptionCatalog,
        policies: &'c RepeatPolicies,
        decoders: &'c ValueDecoders,
        program: impl Into<String>,
        separator: OptionId,
    ) -> Self {
        Self {
            catalog,
            policies,
            decoders,
            program: program.into(),
            separator,
        }
    }

    /// The program name expected at the start of a command line.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// The identity of the option that separates invocations.
    pub fn separator(&self) -> &OptionId {
        &self.separator
    }

    /// The catalog options are resolved against.
    pub fn catalog(&self) -> &'c dyn OptionCatalog {
        self.catalog
    }

    fn assemble(&self, raw: &str, form: Form) -> Result<Vec<CommandInvocation<'c>>, ParseError> {
        let tokens = tokenize(raw)?;
        CommandAssembler::new(
            self.catalog,
            self.policies,
            self.decoders,
            &self.program,
            &self.separator,
            form,
        )
        .assemble(&tokens)
    }

    /// Parse a command line holding one invocation.
    ///
    /// The first word (the program name) is skipped.
    /// Parsing stops at the first separator, or at a later occurrence of the program name; anything after is ignored.
    ///
    /// ### Example
    /// ```
    /// # use curlex_core as curlex;
    /// use curlex::*;
    ///
    /// let catalog = StaticCatalog::new([
    ///     OptionDefinition::new("verbose", ["-v", "--verbose"]),
    ///     OptionDefinition::new("next", ["-:", "--next"]),
    /// ])
    /// .unwrap();
    /// let policies = RepeatPolicies::new([
    ///     (OptionId::from("verbose"), RepeatPolicy::Unique),
    ///     (OptionId::from("next"), RepeatPolicy::Unique),
    /// ])
    /// .unwrap();
    /// let decoders = ValueDecoders::default();
    /// let parser = CommandLineParser::new(&catalog, &policies, &decoders).build().unwrap();
    ///
    /// let invocation = parser.parse("curl -v https://example.com").unwrap();
    /// assert_eq!(invocation.target(), Some("https://example.com"));
    /// assert!(invocation.is_set(&OptionId::from("verbose")).unwrap());
    /// ```
    pub fn parse(&self, raw: &str) -> Result<CommandInvocation<'c>, ParseError> {
        let invocation = self
            .assemble(raw, Form::Single)?
            .into_iter()
            .next()
            .expect("internal error - assembly must yield an invocation");
        Ok(invocation)
    }

    /// Parse a command line holding one or more invocations, split at every separator.
    ///
    /// A later occurrence of the program name also starts a new invocation, so concatenated commands parse as one set.
    pub fn parse_all(&self, raw: &str) -> Result<CommandSet<'c>, ParseError> {
        Ok(CommandSet::new(self.assemble(raw, Form::Multiple)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::{catalog, decoders, policies};
    use crate::value::TypedValue;
    use std::time::Duration;

    fn parser<'c>(
        catalog: &'c dyn OptionCatalog,
        policies: &'c RepeatPolicies,
        decoders: &'c ValueDecoders,
    ) -> GeneralParser<'c> {
        GeneralParser::new(catalog, policies, decoders, "curl", OptionId::from("next"))
    }

    #[test]
    fn accessors() {
        let (catalog, policies, decoders) = (catalog(), policies(), decoders());
        let parser = parser(&catalog, &policies, &decoders);

        assert_eq!(parser.program(), "curl");
        assert_eq!(parser.separator(), &OptionId::from("next"));
        assert!(parser.catalog().resolve("-v").is_ok());
        assert_eq!(
            format!("{parser:?}"),
            "GeneralParser { program: \"curl\", separator: OptionId(\"next\") }"
        );
    }

    #[test]
    fn parse() {
        let (catalog, policies, decoders) = (catalog(), policies(), decoders());
        let parser = parser(&catalog, &policies, &decoders);

        let invocation = parser
            .parse("curl -H 'X-A: 1' -H 'X-B: 2' --max-time 5 --max-time 2.5 https://x")
            .unwrap();

        let headers: Vec<&str> = invocation
            .options_for(&OptionId::from("header"))
            .unwrap()
            .unwrap()
            .iter()
            .filter_map(|o| o.raw())
            .collect();
        assert_eq!(headers, vec!["X-A: 1", "X-B: 2"]);
        assert_eq!(
            invocation.value_of(&OptionId::from("max-time")).unwrap(),
            Some(&TypedValue::Duration(Duration::from_millis(2500)))
        );
        assert_eq!(invocation.target(), Some("https://x"));
    }

    #[test]
    fn parse_unbalanced() {
        let (catalog, policies, decoders) = (catalog(), policies(), decoders());
        let parser = parser(&catalog, &policies, &decoders);

        assert_eq!(
            parser.parse("curl 'unterminated").unwrap_err(),
            ParseError::UnbalancedQuote {
                open: '\'',
                offset: 5
            }
        );
        assert_matches!(
            parser.parse_all("curl -v \"unterminated"),
            Err(ParseError::UnbalancedQuote { open: '"', offset: 8 })
        );
    }

    #[test]
    fn parse_all() {
        let (catalog, policies, decoders) = (catalog(), policies(), decoders());
        let parser = parser(&catalog, &policies, &decoders);

        let set = parser
            .parse_all("curl -v https://a --next -s https://b")
            .unwrap();

        assert_eq!(set.len(), 2);
        assert_eq!(set.get(0).unwrap().target(), Some("https://a"));
        assert_eq!(set.get(1).unwrap().target(), Some("https://b"));
        assert_eq!(
            &parser.parse("curl -v https://a --next -s https://b").unwrap(),
            set.get(0).unwrap()
        );
    }

    #[test]
    fn parse_reusable() {
        let (catalog, policies, decoders) = (catalog(), policies(), decoders());
        let parser = parser(&catalog, &policies, &decoders);

        let first = parser.parse("curl -v https://a").unwrap();
        let second = parser.parse("curl -s https://b").unwrap();

        assert_eq!(first.options().len(), 1);
        assert_eq!(second.options().len(), 1);
        assert_ne!(first, second);
        assert_eq!(first, parser.parse("curl -v https://a").unwrap());
    }

    #[test]
    fn parse_threads() {
        let (catalog, policies, decoders) = (catalog(), policies(), decoders());
        let parser = parser(&catalog, &policies, &decoders);

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|i| {
                    let parser = &parser;
                    scope.spawn(move || {
                        parser
                            .parse(&format!("curl --retry {i} https://{i}"))
                            .map(|invocation| invocation.target().map(str::to_string))
                    })
                })
                .collect();

            for (i, handle) in handles.into_iter().enumerate() {
                assert_eq!(handle.join().unwrap(), Ok(Some(format!("https://{i}"))));
            }
        });
    }
}
