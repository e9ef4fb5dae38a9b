//! A single configuration scope (system, global or local)

use std::fmt;

use serde::Serialize;

use crate::search::PropertyIndex;
use crate::value::Value;
use crate::view::ConfigView;

/// Strategy for resolving a name that appears more than once in the input.
///
/// `git config --list` prints repeated keys in file order, with later
/// entries overriding earlier ones, so [`DuplicatePolicy::LastWins`] is the
/// default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Keep the last occurrence in input order.
    #[default]
    LastWins,

    /// Keep the first occurrence in input order.
    FirstWins,
}

/// The properties collected from one configuration source.
///
/// Immutable once built: every name appears at most once and the
/// properties are held in ascending name order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Scope {
    index: PropertyIndex,
}

impl Scope {
    /// Build a scope, keeping the last occurrence of any repeated name.
    pub fn new(values: impl IntoIterator<Item = Value>) -> Self {
        Self::with_policy(values, DuplicatePolicy::default())
    }

    /// Build a scope with an explicit duplicate-name policy.
    pub fn with_policy(values: impl IntoIterator<Item = Value>, policy: DuplicatePolicy) -> Self {
        let index = PropertyIndex::build(values, policy);
        tracing::debug!(properties = index.len(), ?policy, "Built configuration scope");
        Self { index }
    }

    /// A scope with no properties, used when a source does not apply.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a scope from `(name, raw)` pairs.
    ///
    /// Pairs with an empty name are discarded.
    pub fn from_pairs<N, R>(pairs: impl IntoIterator<Item = (N, R)>) -> Self
    where
        N: Into<String>,
        R: Into<String>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(Value::from)
                .filter(|v| !v.name().is_empty()),
        )
    }

    /// Iterate over the values in ascending name order.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.index.all().iter()
    }

    /// Property names in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.iter().map(Value::name)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub(crate) fn index(&self) -> &PropertyIndex {
        &self.index
    }
}

impl ConfigView for Scope {
    fn all(&self) -> &[Value] {
        self.index.all()
    }

    fn get(&self, name: &str) -> Option<&Value> {
        self.index.get(name)
    }

    fn find(&self, pattern: &str) -> Vec<&Value> {
        self.index.find(pattern).iter().collect()
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.index, f)
    }
}

impl FromIterator<Value> for Scope {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a Scope {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
