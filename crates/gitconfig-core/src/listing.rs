//! Parser for `git config --list` output
//!
//! Each line is `name=value`, or a bare `name` for a key declared without a
//! value. The value runs to the end of the line and may itself contain `=`.

use crate::scope::{DuplicatePolicy, Scope};
use crate::value::Value;

/// Parse `git config --list` output into properties, in output order.
///
/// Lines are trimmed of surrounding whitespace (which also drops a `\r`
/// left by CRLF output), split at the first `=`, and discarded when the
/// name is empty. A bare name yields an empty value.
pub fn parse_listing(output: &str) -> Vec<Value> {
    let mut values = Vec::new();
    let mut discarded = 0usize;

    for line in output.split('\n') {
        let line = line.trim();
        let (name, raw) = line.split_once('=').unwrap_or((line, ""));
        if name.is_empty() {
            if !line.is_empty() {
                discarded += 1;
            }
            continue;
        }
        values.push(Value::new(name, raw));
    }

    if discarded > 0 {
        tracing::debug!(discarded, "Discarded listing lines without a property name");
    }

    values
}

impl Scope {
    /// Build a scope from `git config --list` output.
    pub fn parse(output: &str) -> Self {
        Self::new(parse_listing(output))
    }

    /// Build a scope from `git config --list` output with an explicit
    /// duplicate-name policy.
    pub fn parse_with_policy(output: &str, policy: DuplicatePolicy) -> Self {
        Self::with_policy(parse_listing(output), policy)
    }
}
