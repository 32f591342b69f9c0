use std::collections::HashMap;
use thiserror::Error;

use crate::model::{OptionDefinition, OptionId};
use crate::parser::ConfigError;

/// A flag spelling that does not belong to any option in the catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Option '{0}' does not exist.")]
pub struct UnknownOption(pub String);

/// Read-only access to the option definitions.
///
/// The parser only ever queries the catalog; it never iterates nor mutates it.
/// Implementations are shared across parse calls (and threads), so they must be `Sync`.
pub trait OptionCatalog: Send + Sync {
    /// Find the definition an alias spelling refers to.
    fn resolve(&self, alias: &str) -> Result<&OptionDefinition, UnknownOption>;

    /// Find the definition of a canonical identity.
    fn lookup(&self, id: &OptionId) -> Option<&OptionDefinition>;

    /// Get the definition of a canonical identity.
    ///
    /// This is total for every identity reachable through [`OptionCatalog::resolve`].
    fn definition(&self, id: &OptionId) -> &OptionDefinition {
        self.lookup(id)
            .expect("internal error - identity must be present in the catalog")
    }
}

/// An [`OptionCatalog`] built once from a fixed set of definitions.
///
/// ### Example
/// ```
/// # use curlex_core as curlex;
/// use curlex::{OptionCatalog, OptionDefinition, OptionId, StaticCatalog};
///
/// let catalog = StaticCatalog::new([
///     OptionDefinition::new("header", ["-H", "--header"]).argument("header/@file"),
///     OptionDefinition::new("verbose", ["-v", "--verbose"]),
/// ])
/// .unwrap();
///
/// assert_eq!(catalog.resolve("-H").unwrap().id(), &OptionId::from("header"));
/// assert_eq!(catalog.resolve("--header").unwrap().id(), &OptionId::from("header"));
/// assert!(catalog.resolve("--headers").is_err());
/// ```
#[derive(Debug)]
pub struct StaticCatalog {
    aliases: HashMap<String, OptionId>,
    definitions: HashMap<OptionId, OptionDefinition>,
}

impl StaticCatalog {
    /// Build the catalog, verifying every alias maps to exactly one definition.
    pub fn new(definitions: impl IntoIterator<Item = OptionDefinition>) -> Result<Self, ConfigError> {
        let mut aliases: HashMap<String, OptionId> = HashMap::default();
        let mut by_id: HashMap<OptionId, OptionDefinition> = HashMap::default();

        for definition in definitions.into_iter() {
            if definition.aliases().is_empty() {
                return Err(ConfigError(format!(
                    "Option '{}' must have at least one alias.",
                    definition.id()
                )));
            }

            for alias in definition.aliases() {
                if let Some(existing) = aliases.insert(alias.clone(), definition.id().clone()) {
                    return Err(ConfigError(format!(
                        "Cannot duplicate the alias '{alias}' (claimed by '{existing}' and '{}').",
                        definition.id()
                    )));
                }
            }

            let id = definition.id().clone();
            if by_id.insert(id.clone(), definition).is_some() {
                return Err(ConfigError(format!("Cannot duplicate the option '{id}'.")));
            }
        }

        Ok(Self {
            aliases,
            definitions: by_id,
        })
    }

    /// The number of options in the catalog.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether the catalog has no options.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Every definition, in no particular order.
    pub fn definitions(&self) -> impl Iterator<Item = &OptionDefinition> {
        self.definitions.values()
    }
}

impl OptionCatalog for StaticCatalog {
    fn resolve(&self, alias: &str) -> Result<&OptionDefinition, UnknownOption> {
        match self.aliases.get(alias) {
            Some(id) => Ok(self.definition(id)),
            None => Err(UnknownOption(alias.to_string())),
        }
    }

    fn lookup(&self, id: &OptionId) -> Option<&OptionDefinition> {
        self.definitions.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::{assert_contains, catalog};
    use rstest::rstest;

    #[rstest]
    #[case("-H", "header")]
    #[case("--header", "header")]
    #[case("-v", "verbose")]
    #[case("--verbose", "verbose")]
    #[case("-:", "next")]
    #[case("--next", "next")]
    #[case("--connect-to", "connect-to")]
    fn resolve(#[case] alias: &str, #[case] expected: &'static str) {
        let catalog = catalog();

        let definition = catalog.resolve(alias).unwrap();

        assert_eq!(definition.id(), &OptionId::from(expected));
        assert!(definition.aliases().iter().any(|a| a == alias));
    }

    #[rstest]
    #[case("-h")]
    #[case("--headers")]
    #[case("header")]
    #[case("--")]
    #[case("")]
    fn resolve_unknown(#[case] alias: &str) {
        let catalog = catalog();

        let error = catalog.resolve(alias).unwrap_err();

        assert_eq!(error, UnknownOption(alias.to_string()));
    }

    #[test]
    fn definition() {
        let catalog = catalog();

        let definition = catalog.definition(&OptionId::from("header"));

        assert_eq!(definition.aliases(), &["-H", "--header"]);
        assert_eq!(definition.argument_name(), Some("header/@file"));
    }

    #[test]
    fn lookup() {
        let catalog = catalog();

        assert_eq!(
            catalog.lookup(&OptionId::from("verbose")).map(|d| d.aliases()),
            Some(["-v".to_string(), "--verbose".to_string()].as_slice())
        );
        assert_eq!(catalog.lookup(&OptionId::from("not-an-option")), None);
    }

    #[test]
    #[should_panic]
    fn definition_unknown() {
        catalog().definition(&OptionId::from("not-an-option"));
    }

    #[test]
    fn static_catalog_empty() {
        let catalog = StaticCatalog::new(Vec::<OptionDefinition>::default()).unwrap();

        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert_matches!(catalog.resolve("-v"), Err(UnknownOption(_)));
    }

    #[test]
    fn static_catalog_definitions() {
        let catalog = catalog();

        assert_eq!(catalog.definitions().count(), catalog.len());
        assert!(catalog
            .definitions()
            .all(|d| catalog.definition(d.id()) == d));
    }

    #[test]
    fn static_catalog_duplicate_alias() {
        let error = StaticCatalog::new([
            OptionDefinition::new("verbose", ["-v", "--verbose"]),
            OptionDefinition::new("version", ["-v", "--version"]),
        ])
        .unwrap_err();

        assert_contains!(error.to_string(), "Cannot duplicate the alias '-v'");
    }

    #[test]
    fn static_catalog_duplicate_option() {
        let error = StaticCatalog::new([
            OptionDefinition::new("verbose", ["-v"]),
            OptionDefinition::new("verbose", ["--verbose"]),
        ])
        .unwrap_err();

        assert_contains!(error.to_string(), "Cannot duplicate the option 'verbose'");
    }

    #[test]
    fn static_catalog_no_aliases() {
        let error =
            StaticCatalog::new([OptionDefinition::new("verbose", Vec::<String>::default())])
                .unwrap_err();

        assert_contains!(error.to_string(), "at least one alias");
    }
}
