use std::collections::HashMap;

use crate::model::OptionId;
use crate::policy::{RepeatPolicies, UndeclaredPolicy};
use crate::value::{ParsedOption, TypedValue};

/// One self-contained command, between separators.
///
/// Every option occurrence is kept exactly as parsed, in order.
/// Repeat policies are only applied when the invocation is queried.
#[derive(Debug, Clone)]
pub struct CommandInvocation<'c> {
    policies: &'c RepeatPolicies,
    options: Vec<ParsedOption>,
    index: HashMap<OptionId, Vec<usize>>,
    target: Option<String>,
}

impl<'c> PartialEq for CommandInvocation<'c> {
    fn eq(&self, other: &Self) -> bool {
        self.options == other.options && self.target == other.target
    }
}

impl<'c> Eq for CommandInvocation<'c> {}

impl<'c> CommandInvocation<'c> {
    pub(crate) fn new(policies: &'c RepeatPolicies) -> Self {
        Self {
            policies,
            options: Vec::default(),
            index: HashMap::default(),
            target: None,
        }
    }

    pub(crate) fn push(&mut self, option: ParsedOption) {
        self.index
            .entry(option.id().clone())
            .or_default()
            .push(self.options.len());
        self.options.push(option);
    }

    pub(crate) fn set_target(&mut self, target: String) {
        self.target.replace(target);
    }

    /// Every option occurrence, in command line order.
    pub fn options(&self) -> &[ParsedOption] {
        &self.options
    }

    /// The target address (the last bare word), if any.
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// Whether neither options nor a target were given.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty() && self.target.is_none()
    }

    /// The effective occurrences of an option, reduced by its repeat policy.
    ///
    /// `Unique` and `LastOnly` options yield only their last occurrence; `Multiple` options yield all of them, in order.
    /// An option that never occurred yields `None`.
    ///
    /// ### Example
    /// ```
    /// # use curlex_core as curlex;
    /// use curlex::*;
    ///
    /// let catalog = StaticCatalog::new([
    ///     OptionDefinition::new("header", ["-H", "--header"]).argument("header"),
    ///     OptionDefinition::new("request", ["-X", "--request"]).argument("method"),
    ///     OptionDefinition::new("next", ["-:", "--next"]),
    /// ])
    /// .unwrap();
    /// let policies = RepeatPolicies::new([
    ///     (OptionId::from("header"), RepeatPolicy::Multiple),
    ///     (OptionId::from("request"), RepeatPolicy::LastOnly),
    ///     (OptionId::from("next"), RepeatPolicy::Unique),
    /// ])
    /// .unwrap();
    /// let decoders = ValueDecoders::default();
    /// let parser = CommandLineParser::new(&catalog, &policies, &decoders).build().unwrap();
    ///
    /// let invocation = parser.parse("curl -H a:1 -X GET -H b:2 -X POST https://x").unwrap();
    /// let headers = invocation.options_for(&OptionId::from("header")).unwrap().unwrap();
    /// assert_eq!(headers.len(), 2);
    /// let requests = invocation.options_for(&OptionId::from("request")).unwrap().unwrap();
    /// assert_eq!(requests[0].raw(), Some("POST"));
    /// ```
    pub fn options_for(
        &self,
        id: &OptionId,
    ) -> Result<Option<Vec<&ParsedOption>>, UndeclaredPolicy> {
        let policy = self.policies.policy(id)?;

        Ok(self.index.get(id).map(|positions| {
            policy
                .reduce(positions)
                .iter()
                .map(|position| &self.options[*position])
                .collect()
        }))
    }

    /// The effective value of an option: its last retained occurrence.
    pub fn value_of(&self, id: &OptionId) -> Result<Option<&TypedValue>, UndeclaredPolicy> {
        Ok(self
            .options_for(id)?
            .and_then(|occurrences| occurrences.last().map(|option| option.value())))
    }

    /// Whether the option occurred at least once.
    pub fn is_set(&self, id: &OptionId) -> Result<bool, UndeclaredPolicy> {
        Ok(self.options_for(id)?.is_some())
    }
}

/// The invocations of a multi-command line, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSet<'c> {
    invocations: Vec<CommandInvocation<'c>>,
}

impl<'c> CommandSet<'c> {
    pub(crate) fn new(invocations: Vec<CommandInvocation<'c>>) -> Self {
        Self { invocations }
    }

    /// The number of invocations.
    pub fn len(&self) -> usize {
        self.invocations.len()
    }

    /// Whether there are no invocations.
    /// A parsed command line always has at least one.
    pub fn is_empty(&self) -> bool {
        self.invocations.is_empty()
    }

    /// The invocation at `index`.
    pub fn get(&self, index: usize) -> Option<&CommandInvocation<'c>> {
        self.invocations.get(index)
    }

    /// Every invocation.
    pub fn invocations(&self) -> &[CommandInvocation<'c>] {
        &self.invocations
    }

    /// Iterate the invocations in order.
    pub fn iter(&self) -> std::slice::Iter<'_, CommandInvocation<'c>> {
        self.invocations.iter()
    }
}

impl<'c> IntoIterator for CommandSet<'c> {
    type Item = CommandInvocation<'c>;
    type IntoIter = std::vec::IntoIter<CommandInvocation<'c>>;

    fn into_iter(self) -> Self::IntoIter {
        self.invocations.into_iter()
    }
}

impl<'a, 'c> IntoIterator for &'a CommandSet<'c> {
    type Item = &'a CommandInvocation<'c>;
    type IntoIter = std::slice::Iter<'a, CommandInvocation<'c>>;

    fn into_iter(self) -> Self::IntoIter {
        self.invocations.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::policies;
    use rand::{thread_rng, Rng};
    use rstest::rstest;

    fn text(id: &'static str, alias: &str, raw: &str) -> ParsedOption {
        ParsedOption::new(
            OptionId::from(id),
            TypedValue::Text(raw.to_string()),
            alias,
            Some(raw.to_string()),
        )
    }

    fn flag(id: &'static str, alias: &str) -> ParsedOption {
        ParsedOption::new(OptionId::from(id), TypedValue::Flag, alias, None)
    }

    #[test]
    fn invocation_empty() {
        let policies = policies();
        let invocation = CommandInvocation::new(&policies);

        assert!(invocation.is_empty());
        assert_eq!(invocation.target(), None);
        assert!(invocation.options().is_empty());
        assert_eq!(
            invocation.options_for(&OptionId::from("header")).unwrap(),
            None
        );
        assert!(!invocation.is_set(&OptionId::from("verbose")).unwrap());
    }

    #[test]
    fn target_last_wins() {
        let policies = policies();
        let mut invocation = CommandInvocation::new(&policies);

        invocation.set_target("https://a".to_string());
        invocation.set_target("https://b".to_string());

        assert!(!invocation.is_empty());
        assert_eq!(invocation.target(), Some("https://b"));
    }

    #[test]
    fn options_for_multiple() {
        let policies = policies();

        for _ in 0..50 {
            let mut invocation = CommandInvocation::new(&policies);
            let n: usize = thread_rng().gen_range(1..10);

            for i in 0..n {
                invocation.push(text("header", "-H", &format!("X-{i}: v")));
                invocation.push(flag("verbose", "-v"));
            }

            let headers = invocation
                .options_for(&OptionId::from("header"))
                .unwrap()
                .unwrap();
            let raws: Vec<&str> = headers.iter().filter_map(|o| o.raw()).collect();
            let expected: Vec<String> = (0..n).map(|i| format!("X-{i}: v")).collect();

            assert_eq!(raws, expected);
            assert_eq!(invocation.options().len(), n * 2);
        }
    }

    #[rstest]
    #[case("request", "-X")]
    #[case("data", "--data")]
    fn options_for_last(#[case] id: &'static str, #[case] alias: &str) {
        let policies = policies();

        for _ in 0..50 {
            let mut invocation = CommandInvocation::new(&policies);
            let n: usize = thread_rng().gen_range(1..10);

            for i in 0..n {
                invocation.push(text("request", "-X", &format!("M{i}")));
                invocation.push(text("data", "--data", &format!("d{i}")));
            }

            let occurrences = invocation.options_for(&OptionId::from(id)).unwrap().unwrap();

            if id == "request" {
                // LastOnly
                assert_eq!(occurrences.len(), 1);
                assert_eq!(occurrences[0].raw(), Some(format!("M{}", n - 1).as_str()));
            } else {
                // Multiple
                assert_eq!(occurrences.len(), n);
                assert_eq!(occurrences[0].alias(), alias);
            }
        }
    }

    #[test]
    fn options_for_unique() {
        let policies = policies();
        let mut invocation = CommandInvocation::new(&policies);

        invocation.push(flag("verbose", "-v"));
        invocation.push(flag("verbose", "--verbose"));

        let occurrences = invocation
            .options_for(&OptionId::from("verbose"))
            .unwrap()
            .unwrap();

        assert_eq!(occurrences.len(), 1);
        assert_eq!(occurrences[0].alias(), "--verbose");
        assert!(invocation.is_set(&OptionId::from("verbose")).unwrap());
        assert_eq!(
            invocation.value_of(&OptionId::from("verbose")).unwrap(),
            Some(&TypedValue::Flag)
        );
    }

    #[test]
    fn options_for_undeclared() {
        let policies = policies();
        let mut invocation = CommandInvocation::new(&policies);
        invocation.push(text("user-agent", "-A", "x"));

        let id = OptionId::from("user-agent");

        assert_eq!(
            invocation.options_for(&id),
            Err(UndeclaredPolicy(id.clone()))
        );
        assert_matches!(invocation.value_of(&id), Err(UndeclaredPolicy(_)));
        assert_matches!(invocation.is_set(&id), Err(UndeclaredPolicy(_)));
    }

    #[test]
    fn invocation_eq_ignores_policies() {
        let a = policies();
        let b = policies();
        let mut left = CommandInvocation::new(&a);
        let mut right = CommandInvocation::new(&b);

        left.push(flag("verbose", "-v"));
        right.push(flag("verbose", "-v"));
        assert_eq!(left, right);

        right.set_target("https://x".to_string());
        assert_ne!(left, right);
    }

    #[test]
    fn command_set() {
        let policies = policies();
        let mut first = CommandInvocation::new(&policies);
        first.set_target("https://a".to_string());
        let mut second = CommandInvocation::new(&policies);
        second.set_target("https://b".to_string());

        let set = CommandSet::new(vec![first, second]);

        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
        assert_eq!(set.get(1).unwrap().target(), Some("https://b"));
        assert_eq!(set.get(2), None);
        assert_eq!(set.invocations().len(), 2);

        let targets: Vec<&str> = set.iter().filter_map(|i| i.target()).collect();
        assert_eq!(targets, vec!["https://a", "https://b"]);

        let targets: Vec<&str> = (&set).into_iter().filter_map(|i| i.target()).collect();
        assert_eq!(targets, vec!["https://a", "https://b"]);

        let owned: Vec<CommandInvocation> = set.into_iter().collect();
        assert_eq!(owned.len(), 2);
    }
}
