use std::collections::HashMap;
use thiserror::Error;

use crate::model::OptionId;
use crate::parser::ConfigError;

/// How repeated occurrences of one option reduce to its effective value(s).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepeatPolicy {
    /// A flag which is either set or not; repeats are no-ops.
    Unique,
    /// Only the most recently parsed occurrence is authoritative.
    LastOnly,
    /// Every occurrence is retained, in order.
    Multiple,
}

impl RepeatPolicy {
    /// Reduce the occurrences of an option by this policy.
    ///
    /// ### Example
    /// ```
    /// # use curlex_core as curlex;
    /// use curlex::RepeatPolicy;
    ///
    /// let occurrences = ["a", "b", "c"];
    /// assert_eq!(RepeatPolicy::LastOnly.reduce(&occurrences), &["c"]);
    /// assert_eq!(RepeatPolicy::Multiple.reduce(&occurrences), &["a", "b", "c"]);
    /// ```
    pub fn reduce<'a, T>(&self, occurrences: &'a [T]) -> &'a [T] {
        match self {
            RepeatPolicy::Unique | RepeatPolicy::LastOnly => {
                &occurrences[occurrences.len().saturating_sub(1)..]
            }
            RepeatPolicy::Multiple => occurrences,
        }
    }
}

impl std::fmt::Display for RepeatPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A resolvable option has no declared repeat policy.
///
/// This signals drift between the catalog and the policy table, rather than bad user input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("No repeat policy is declared for option '{0}'.")]
pub struct UndeclaredPolicy(pub OptionId);

/// The static table of repeat policies, keyed by canonical identity.
///
/// Declared independently of the catalog.
/// Looking up an identity without a declaration is an error, never a silent default.
///
/// ### Example
/// ```
/// # use curlex_core as curlex;
/// use curlex::{OptionId, RepeatPolicies, RepeatPolicy};
///
/// let policies = RepeatPolicies::new([
///     (OptionId::from("header"), RepeatPolicy::Multiple),
///     (OptionId::from("max-time"), RepeatPolicy::LastOnly),
/// ])
/// .unwrap();
///
/// assert_eq!(policies.policy(&OptionId::from("header")).unwrap(), RepeatPolicy::Multiple);
/// assert!(policies.policy(&OptionId::from("verbose")).is_err());
/// ```
#[derive(Debug, Default)]
pub struct RepeatPolicies {
    policies: HashMap<OptionId, RepeatPolicy>,
}

impl RepeatPolicies {
    /// Build the table, rejecting identities declared more than once.
    pub fn new(
        declarations: impl IntoIterator<Item = (OptionId, RepeatPolicy)>,
    ) -> Result<Self, ConfigError> {
        let mut policies = HashMap::default();

        for (id, policy) in declarations.into_iter() {
            if let Some(previous) = policies.insert(id.clone(), policy) {
                return Err(ConfigError(format!(
                    "Cannot declare the repeat policy of '{id}' twice ({previous} and {policy})."
                )));
            }
        }

        Ok(Self { policies })
    }

    /// Get the repeat policy of an option.
    pub fn policy(&self, id: &OptionId) -> Result<RepeatPolicy, UndeclaredPolicy> {
        self.policies
            .get(id)
            .copied()
            .ok_or_else(|| UndeclaredPolicy(id.clone()))
    }

    /// Whether a policy is declared for the option.
    pub fn is_declared(&self, id: &OptionId) -> bool {
        self.policies.contains_key(id)
    }

    /// The number of declarations.
    pub fn len(&self) -> usize {
        self.policies.len()
    }

    /// Whether the table has no declarations.
    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }
}
