//! Query surface shared by single scopes and the merged overlay

use std::fmt;

use crate::value::Value;

/// Read-only access to a block of configuration.
///
/// `Display` renders every property of [`ConfigView::all`] as a
/// `name=value` line, each terminated by `\n`.
pub trait ConfigView: fmt::Display {
    /// All properties, ascending by name, one per name.
    fn all(&self) -> &[Value];

    /// Look up a property by exact name.
    fn get(&self, name: &str) -> Option<&Value>;

    /// Properties matching `pattern`, ascending by name.
    ///
    /// A trailing `*` makes the rest of the pattern a name prefix; without
    /// it this is [`ConfigView::get`] as a zero- or one-element list.
    fn find(&self, pattern: &str) -> Vec<&Value>;

    /// Whether a property with this exact name exists.
    fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}
