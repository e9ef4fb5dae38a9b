//! Name-ordered property index and pattern matching
//!
//! Both [`Scope`](crate::Scope) and [`OverlayView`](crate::OverlayView)
//! keep their properties in a [`PropertyIndex`]: a vector sorted by name
//! with no repeated names. Sorting is byte-wise, never locale-aware.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use serde::Serialize;

use crate::scope::DuplicatePolicy;
use crate::value::Value;

/// A query against property names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern<'a> {
    /// Match exactly one name.
    Exact(&'a str),

    /// Match every name starting with the prefix.
    Prefix(&'a str),
}

impl<'a> Pattern<'a> {
    /// Classify a query string.
    ///
    /// A single trailing `*` turns the rest into a prefix, so `"core.*"`
    /// is `Prefix("core.")` and `"*"` is `Prefix("")`. Anything else is an
    /// exact name.
    pub fn parse(pattern: &'a str) -> Self {
        match pattern.strip_suffix('*') {
            Some(prefix) => Self::Prefix(prefix),
            None => Self::Exact(pattern),
        }
    }

    /// Whether `name` satisfies this pattern.
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Self::Exact(exact) => name == *exact,
            Self::Prefix(prefix) => name.starts_with(prefix),
        }
    }
}

/// Properties sorted ascending by name, one entry per name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PropertyIndex {
    values: Vec<Value>,
}

impl PropertyIndex {
    /// Build an index, resolving repeated names with `policy`.
    pub fn build(values: impl IntoIterator<Item = Value>, policy: DuplicatePolicy) -> Self {
        let mut by_name: BTreeMap<String, Value> = BTreeMap::new();

        for value in values {
            match by_name.get(value.name()) {
                Some(existing) if policy == DuplicatePolicy::FirstWins => {
                    tracing::trace!(
                        name = %value.name(),
                        kept = %existing.raw(),
                        dropped = %value.raw(),
                        "Ignoring repeated property"
                    );
                }
                Some(existing) => {
                    tracing::trace!(
                        name = %value.name(),
                        replaced = %existing.raw(),
                        kept = %value.raw(),
                        "Replacing repeated property"
                    );
                    by_name.insert(value.name().to_string(), value);
                }
                None => {
                    by_name.insert(value.name().to_string(), value);
                }
            }
        }

        Self {
            values: by_name.into_values().collect(),
        }
    }

    /// All properties in ascending name order.
    pub fn all(&self) -> &[Value] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Exact-name lookup.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values
            .binary_search_by(|v| v.name().cmp(name))
            .ok()
            .map(|i| &self.values[i])
    }

    /// Properties matching `pattern`, as a contiguous slice of [`Self::all`].
    ///
    /// Names sharing a prefix are adjacent in sorted order, so a prefix
    /// query is a single range found by binary search.
    pub fn find(&self, pattern: &str) -> &[Value] {
        let pattern = Pattern::parse(pattern);
        match pattern {
            Pattern::Exact(name) => match self.values.binary_search_by(|v| v.name().cmp(name)) {
                Ok(i) => &self.values[i..=i],
                Err(_) => &[],
            },
            Pattern::Prefix(prefix) => {
                let start = self.values.partition_point(|v| v.name() < prefix);
                let len = self.values[start..]
                    .iter()
                    .take_while(|v| pattern.matches(v.name()))
                    .count();
                &self.values[start..start + len]
            }
        }
    }
}

impl fmt::Display for PropertyIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in &self.values {
            writeln!(f, "{}={}", value.name(), value.raw())?;
        }
        Ok(())
    }
}

/// Combine match lists given from highest to lowest precedence.
///
/// The first occurrence of each name is kept and the result is sorted by
/// name, whatever order the groups were collected in.
pub fn merge_by_precedence<'a>(groups: impl IntoIterator<Item = &'a [Value]>) -> Vec<&'a Value> {
    let mut seen = HashSet::new();
    let mut merged: Vec<&Value> = groups
        .into_iter()
        .flatten()
        .filter(|&v| seen.insert(v.name()))
        .collect();
    merged.sort_by(|a, b| a.name().cmp(b.name()));
    merged
}
