//! Snapshots of `git2` configuration
//!
//! Locating and opening configuration files is left to `git2`; this module
//! only copies the entries of an already-opened [`git2::Config`] into
//! immutable scopes.

use std::borrow::Cow;

use git2::{Config, ConfigLevel, ErrorCode};

use crate::overlay::{Level, OverlayView};
use crate::scope::Scope;
use crate::value::Value;
use crate::Result;

/// `git2` levels read into each scope, lowest precedence first.
///
/// `git config --global` reads the XDG file before `~/.gitconfig`, and the
/// Windows program-data file sits beneath the system file.
const LEVELS: [(Level, &[ConfigLevel]); 3] = [
    (Level::System, &[ConfigLevel::ProgramData, ConfigLevel::System]),
    (Level::Global, &[ConfigLevel::XDG, ConfigLevel::Global]),
    (Level::Local, &[ConfigLevel::Local]),
];

/// Snapshot every entry visible through `config` into one scope.
///
/// Entries are read in `git2` order, so a later entry for the same name
/// wins. Keys declared without a value get an empty raw value.
pub fn scope_from_config(config: &Config) -> Result<Scope> {
    Ok(Scope::new(collect_entries(config)?))
}

/// Snapshot one level of `config`, treating missing `git2` levels as empty.
pub fn scope_for_level(config: &Config, level: Level) -> Result<Scope> {
    let mut values = Vec::new();

    for (_, git_levels) in LEVELS.iter().filter(|(l, _)| *l == level) {
        for git_level in git_levels.iter().copied() {
            match config.open_level(git_level) {
                Ok(level_config) => values.extend(collect_entries(&level_config)?),
                Err(e) if e.code() == ErrorCode::NotFound => {
                    tracing::trace!(?git_level, "No configuration at level");
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    Ok(Scope::new(values))
}

/// Build the system/global/local overlay from a multi-level `git2` config,
/// such as one returned by `Repository::config` or `Config::open_default`.
pub fn overlay_from_config(config: &Config) -> Result<OverlayView> {
    let system = scope_for_level(config, Level::System)?;
    let global = scope_for_level(config, Level::Global)?;
    let local = scope_for_level(config, Level::Local)?;

    Ok(OverlayView::new(system, global, local))
}

fn collect_entries(config: &Config) -> Result<Vec<Value>> {
    let mut values = Vec::new();
    let mut skipped = 0usize;
    let mut lossy = 0usize;

    config.entries(None)?.for_each(|entry| match entry.name() {
        Some(name) if !name.is_empty() => {
            // A key declared without `=` carries no value at all.
            let raw = if entry.has_value() {
                String::from_utf8_lossy(entry.value_bytes())
            } else {
                Cow::Borrowed("")
            };
            if matches!(raw, Cow::Owned(_)) {
                lossy += 1;
            }
            values.push(Value::new(name, raw));
        }
        _ => skipped += 1,
    })?;

    if skipped > 0 {
        tracing::warn!(skipped, "Skipped configuration entries without a UTF-8 name");
    }
    if lossy > 0 {
        tracing::warn!(lossy, "Replaced invalid UTF-8 in configuration values");
    }

    Ok(values)
}
