use std::borrow::Cow;

/// The canonical identity of an option.
///
/// All alias spellings of one logical option (ex: `-H` and `--header`) resolve to the same `OptionId`.
/// Identities may be declared in `const` context, which is how static option tables are written.
///
/// ### Example
/// ```
/// # use curlex_core as curlex;
/// use curlex::OptionId;
///
/// const HEADER: OptionId = OptionId::from_static("header");
///
/// assert_eq!(HEADER, OptionId::new("header"));
/// assert_eq!(HEADER.as_str(), "header");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OptionId(Cow<'static, str>);

impl OptionId {
    /// Create an identity from a static name.
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Create an identity from an owned name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    /// The name of this identity.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for OptionId {
    fn from(value: &'static str) -> Self {
        OptionId::from_static(value)
    }
}

impl std::fmt::Display for OptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The read-only description of one option, as held by an [`OptionCatalog`](crate::OptionCatalog).
///
/// ### Example
/// ```
/// # use curlex_core as curlex;
/// use curlex::OptionDefinition;
///
/// let definition = OptionDefinition::new("header", ["-H", "--header"])
///     .argument("header/@file")
///     .help("Pass custom header(s) to server");
///
/// assert!(definition.takes_argument());
/// assert_eq!(definition.aliases(), &["-H", "--header"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionDefinition {
    id: OptionId,
    aliases: Vec<String>,
    argument: Option<String>,
    help: Option<String>,
}

impl OptionDefinition {
    /// Define an option by its identity and alias spellings.
    /// The option is a bare flag until an [`OptionDefinition::argument`] is declared.
    pub fn new(
        id: impl Into<OptionId>,
        aliases: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            id: id.into(),
            aliases: aliases.into_iter().map(Into::into).collect(),
            argument: None,
            help: None,
        }
    }

    /// Declare the option takes an argument, documented by `name`.
    pub fn argument(mut self, name: impl Into<String>) -> Self {
        self.argument.replace(name.into());
        self
    }

    /// Document the option.
    /// If repeated, only the final help message will apply.
    pub fn help(mut self, description: impl Into<String>) -> Self {
        self.help.replace(description.into());
        self
    }

    /// The canonical identity.
    pub fn id(&self) -> &OptionId {
        &self.id
    }

    /// Every spelling of this option.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// The name of the expected argument, if the option takes one.
    pub fn argument_name(&self) -> Option<&str> {
        self.argument.as_deref()
    }

    /// Whether the option requires an argument.
    pub fn takes_argument(&self) -> bool {
        self.argument.is_some()
    }

    /// The documentation of this option.
    pub fn documentation(&self) -> Option<&str> {
        self.help.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATIC: OptionId = OptionId::from_static("abc");

    #[test]
    fn option_id() {
        assert_eq!(STATIC, OptionId::new("abc".to_string()));
        assert_eq!(STATIC, OptionId::from("abc"));
        assert_eq!(STATIC.as_str(), "abc");
        assert_eq!(STATIC.to_string(), "abc");
        assert_ne!(STATIC, OptionId::new("abcd"));
    }

    #[test]
    fn option_definition_flag() {
        let definition = OptionDefinition::new("verbose", ["-v", "--verbose"]);

        assert_eq!(definition.id(), &OptionId::from("verbose"));
        assert_eq!(definition.aliases(), &["-v", "--verbose"]);
        assert!(!definition.takes_argument());
        assert_eq!(definition.argument_name(), None);
        assert_eq!(definition.documentation(), None);
    }

    #[test]
    fn option_definition_argument() {
        let definition = OptionDefinition::new("retry", ["--retry"])
            .argument("num")
            .help("--this will get discarded--")
            .help("Retry request if transient problems occur");

        assert!(definition.takes_argument());
        assert_eq!(definition.argument_name(), Some("num"));
        assert_eq!(
            definition.documentation(),
            Some("Retry request if transient problems occur")
        );
    }
}
