//! Merged view over the system, global and local scopes
//!
//! The overlay owns the three scopes and a merged index built once at
//! construction. Because nothing is computed lazily, an `OverlayView` can
//! be shared between threads without locking.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::scope::{DuplicatePolicy, Scope};
use crate::search::{PropertyIndex, merge_by_precedence};
use crate::value::Value;
use crate::view::ConfigView;

/// The source scope of a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Host-wide configuration.
    System,

    /// Configuration of the current user.
    Global,

    /// Configuration of the repository.
    Local,
}

impl Level {
    /// Levels from highest to lowest precedence.
    pub const PRECEDENCE: [Level; 3] = [Level::Local, Level::Global, Level::System];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Global => "global",
            Self::Local => "local",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The effective configuration: local overrides global overrides system.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlayView {
    system: Scope,
    global: Scope,
    local: Scope,
    merged: PropertyIndex,
}

impl OverlayView {
    /// Combine three scopes.
    ///
    /// Pass [`Scope::empty`] for `local` when there is no repository
    /// configuration to apply.
    pub fn new(system: Scope, global: Scope, local: Scope) -> Self {
        // Applied lowest precedence first, so the last write is the winner.
        let merged = PropertyIndex::build(
            system
                .iter()
                .chain(global.iter())
                .chain(local.iter())
                .cloned(),
            DuplicatePolicy::LastWins,
        );

        tracing::debug!(
            system = system.len(),
            global = global.len(),
            local = local.len(),
            merged = merged.len(),
            "Merged configuration scopes"
        );

        Self {
            system,
            global,
            local,
            merged,
        }
    }

    pub fn system(&self) -> &Scope {
        &self.system
    }

    pub fn global(&self) -> &Scope {
        &self.global
    }

    /// The repository scope; empty when no repository applies.
    pub fn local(&self) -> &Scope {
        &self.local
    }

    /// The scope for a given level.
    pub fn scope(&self, level: Level) -> &Scope {
        match level {
            Level::System => &self.system,
            Level::Global => &self.global,
            Level::Local => &self.local,
        }
    }

    /// The level whose value is visible for `name`.
    pub fn origin(&self, name: &str) -> Option<Level> {
        Level::PRECEDENCE
            .into_iter()
            .find(|level| self.scope(*level).contains(name))
    }

    pub fn len(&self) -> usize {
        self.merged.len()
    }

    pub fn is_empty(&self) -> bool {
        self.merged.is_empty()
    }
}

impl ConfigView for OverlayView {
    fn all(&self) -> &[Value] {
        self.merged.all()
    }

    /// Looks in local, then global, then system; the first hit wins.
    fn get(&self, name: &str) -> Option<&Value> {
        Level::PRECEDENCE
            .into_iter()
            .find_map(|level| self.scope(level).get(name))
    }

    /// Collects from local, global and system, keeps the highest-precedence
    /// match per name, and returns the result sorted by name.
    fn find(&self, pattern: &str) -> Vec<&Value> {
        merge_by_precedence(
            Level::PRECEDENCE
                .into_iter()
                .map(|level| self.scope(level).index().find(pattern)),
        )
    }
}

impl fmt::Display for OverlayView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.merged, f)
    }
}

impl Serialize for OverlayView {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.merged.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overlay() -> OverlayView {
        OverlayView::new(
            Scope::from_pairs([("a", "1")]),
            Scope::from_pairs([("a", "2"), ("b", "3")]),
            Scope::from_pairs([("a", "4")]),
        )
    }

    #[test]
    fn test_local_overrides_global_overrides_system() {
        let config = overlay();
        assert_eq!(config.get("a").map(Value::raw), Some("4"));
        assert_eq!(config.get("b").map(Value::raw), Some("3"));
        assert_eq!(config.to_string(), "a=4\nb=3\n");
    }

    #[test]
    fn test_origin() {
        let config = overlay();
        assert_eq!(config.origin("a"), Some(Level::Local));
        assert_eq!(config.origin("b"), Some(Level::Global));
        assert_eq!(config.origin("c"), None);
    }

    #[test]
    fn test_overlay_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<OverlayView>();
        assert_send_sync::<Scope>();
    }
}
