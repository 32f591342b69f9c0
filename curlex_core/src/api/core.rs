use crate::catalog::OptionCatalog;
use crate::constant::PROGRAM_NAME;
use crate::model::OptionId;
use crate::parser::{ConfigError, GeneralParser};
use crate::policy::RepeatPolicies;
use crate::value::ValueDecoders;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The base command line parser.
///
/// Brings together the three static tables: the option catalog, the repeat policies, and the value shapes.
///
/// ### Example
/// ```
/// # use curlex_core as curlex;
/// use curlex::*;
///
/// let catalog = StaticCatalog::new([OptionDefinition::new("next", ["-:", "--next"])]).unwrap();
/// let policies = RepeatPolicies::new([(OptionId::from("next"), RepeatPolicy::Unique)]).unwrap();
/// let decoders = ValueDecoders::default();
///
/// let parser = CommandLineParser::new(&catalog, &policies, &decoders)
///     // Configure with CommandLineParser::program and CommandLineParser::separator.
///     .build()
///     .unwrap();
/// assert!(parser.parse("curl").unwrap().is_empty());
/// ```
pub struct CommandLineParser<'c> {
    catalog: &'c dyn OptionCatalog,
    policies: &'c RepeatPolicies,
    decoders: &'c ValueDecoders,
    program: String,
    separator: OptionId,
}

impl<'c> CommandLineParser<'c> {
    /// Create a command line parser over the given tables.
    ///
    /// The program name defaults to `curl`, and the separator to the option `next`.
    pub fn new(
        catalog: &'c dyn OptionCatalog,
        policies: &'c RepeatPolicies,
        decoders: &'c ValueDecoders,
    ) -> Self {
        Self {
            catalog,
            policies,
            decoders,
            program: PROGRAM_NAME.to_string(),
            separator: OptionId::from("next"),
        }
    }

    /// Set the program name.
    /// If repeated, only the final name will apply.
    ///
    /// The first word of every command line is skipped regardless of its spelling.
    /// A later bare word matching the program name (case insensitive) marks an invocation boundary.
    ///
    /// ### Example
    /// ```
    /// # use curlex_core as curlex;
    /// use curlex::*;
    ///
    /// let catalog = StaticCatalog::new([OptionDefinition::new("next", ["-:", "--next"])]).unwrap();
    /// let policies = RepeatPolicies::new([(OptionId::from("next"), RepeatPolicy::Unique)]).unwrap();
    /// let decoders = ValueDecoders::default();
    /// let parser = CommandLineParser::new(&catalog, &policies, &decoders)
    ///     .program("wget")
    ///     .build()
    ///     .unwrap();
    ///
    /// let set = parser.parse_all("wget https://a WGET https://b").unwrap();
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn program(mut self, name: impl Into<String>) -> Self {
        self.program = name.into();
        self
    }

    /// Set the identity of the option that separates invocations.
    /// If repeated, only the final identity will apply.
    ///
    /// The separator must be a flag (take no argument) with a declared repeat policy.
    ///
    /// ### Example
    /// ```
    /// # use curlex_core as curlex;
    /// use curlex::*;
    ///
    /// let catalog = StaticCatalog::new([
    ///     OptionDefinition::new("then", ["--then"]),
    ///     OptionDefinition::new("verbose", ["-v"]),
    /// ])
    /// .unwrap();
    /// let policies = RepeatPolicies::new([
    ///     (OptionId::from("then"), RepeatPolicy::Unique),
    ///     (OptionId::from("verbose"), RepeatPolicy::Unique),
    /// ])
    /// .unwrap();
    /// let decoders = ValueDecoders::default();
    /// let parser = CommandLineParser::new(&catalog, &policies, &decoders)
    ///     .separator("then")
    ///     .build()
    ///     .unwrap();
    ///
    /// let set = parser.parse_all("curl -v https://a --then https://b").unwrap();
    /// assert_eq!(set.len(), 2);
    /// assert!(set.get(1).unwrap().options().is_empty());
    /// ```
    pub fn separator(mut self, id: impl Into<OptionId>) -> Self {
        self.separator = id.into();
        self
    }

    /// Build the command line parser.
    /// This finalizes the configuration and checks for errors (ex: a separator missing from the catalog).
    pub fn build(self) -> Result<GeneralParser<'c>, ConfigError> {
        if self.program.trim().is_empty() {
            return Err(ConfigError("The program name cannot be empty.".to_string()));
        }

        match self.catalog.lookup(&self.separator) {
            None => {
                return Err(ConfigError(format!(
                    "The separator '{}' does not exist in the catalog.",
                    self.separator
                )));
            }
            Some(definition) if definition.takes_argument() => {
                return Err(ConfigError(format!(
                    "The separator '{}' cannot take an argument.",
                    self.separator
                )));
            }
            Some(_) => {}
        }

        if !self.policies.is_declared(&self.separator) {
            return Err(ConfigError(format!(
                "The separator '{}' must have a declared repeat policy.",
                self.separator
            )));
        }

        for (id, _) in self.decoders.registrations() {
            match self.catalog.lookup(id) {
                None => {
                    return Err(ConfigError(format!(
                        "Cannot register a value shape for the unknown option '{id}'."
                    )));
                }
                Some(definition) if !definition.takes_argument() => {
                    return Err(ConfigError(format!(
                        "Cannot register a value shape for the flag '{id}'."
                    )));
                }
                Some(_) => {}
            }
        }

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Built parser for '{}' separated by '{}'.",
                self.program, self.separator
            );
        }

        Ok(GeneralParser::new(
            self.catalog,
            self.policies,
            self.decoders,
            self.program,
            self.separator,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::OptionDefinition;
    use crate::policy::RepeatPolicy;
    use crate::test::{assert_contains, catalog, decoders, policies};
    use crate::value::ValueShape;
    use crate::StaticCatalog;
    use rstest::rstest;

    #[test]
    fn build() {
        let (catalog, policies, decoders) = (catalog(), policies(), decoders());

        let parser = CommandLineParser::new(&catalog, &policies, &decoders)
            .build()
            .unwrap();

        assert_eq!(parser.program(), "curl");
        assert_eq!(parser.separator(), &OptionId::from("next"));
    }

    #[test]
    fn build_repeated() {
        let (catalog, policies, decoders) = (catalog(), policies(), decoders());

        let parser = CommandLineParser::new(&catalog, &policies, &decoders)
            .program("discarded")
            .program("curl.exe")
            .separator("verbose")
            .separator("next")
            .build()
            .unwrap();

        assert_eq!(parser.program(), "curl.exe");
        assert_eq!(parser.separator(), &OptionId::from("next"));
    }

    #[rstest]
    #[case("")]
    #[case("  ")]
    fn build_empty_program(#[case] program: &str) {
        let (catalog, policies, decoders) = (catalog(), policies(), decoders());

        let error = CommandLineParser::new(&catalog, &policies, &decoders)
            .program(program)
            .build()
            .unwrap_err();

        assert_contains!(error.to_string(), "program name cannot be empty");
    }

    #[rstest]
    #[case("then", "does not exist in the catalog")]
    #[case("header", "cannot take an argument")]
    fn build_invalid_separator(#[case] separator: &'static str, #[case] message: &str) {
        let (catalog, policies, decoders) = (catalog(), policies(), decoders());

        let error = CommandLineParser::new(&catalog, &policies, &decoders)
            .separator(separator)
            .build()
            .unwrap_err();

        assert_contains!(error.to_string(), message);
        assert_contains!(error.to_string(), separator);
    }

    #[test]
    fn build_undeclared_separator() {
        let catalog = StaticCatalog::new([OptionDefinition::new("next", ["--next"])]).unwrap();
        let policies = RepeatPolicies::default();
        let decoders = ValueDecoders::default();

        let error = CommandLineParser::new(&catalog, &policies, &decoders)
            .build()
            .unwrap_err();

        assert_contains!(error.to_string(), "declared repeat policy");
    }

    #[rstest]
    #[case("verbose", "for the flag 'verbose'")]
    #[case("user-agent", "for the unknown option 'user-agent'")]
    fn build_invalid_shape(#[case] id: &'static str, #[case] message: &str) {
        let catalog = catalog();
        let policies = policies();
        let decoders = ValueDecoders::new([(OptionId::from(id), ValueShape::Integer)]).unwrap();

        let error = CommandLineParser::new(&catalog, &policies, &decoders)
            .build()
            .unwrap_err();

        assert_contains!(error.to_string(), message);
    }

    #[test]
    fn build_custom_separator() {
        let catalog = StaticCatalog::new([
            OptionDefinition::new("next", ["-:", "--next"]),
            OptionDefinition::new("then", ["--then"]),
        ])
        .unwrap();
        let policies = RepeatPolicies::new([
            (OptionId::from("next"), RepeatPolicy::Unique),
            (OptionId::from("then"), RepeatPolicy::Unique),
        ])
        .unwrap();
        let decoders = ValueDecoders::default();

        let parser = CommandLineParser::new(&catalog, &policies, &decoders)
            .separator("then")
            .build()
            .unwrap();

        let set = parser.parse_all("curl --next https://a --then https://b").unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(0).unwrap().options().len(), 1);
        assert_eq!(set.get(0).unwrap().target(), Some("https://a"));
        assert_eq!(set.get(1).unwrap().target(), Some("https://b"));
    }
}
