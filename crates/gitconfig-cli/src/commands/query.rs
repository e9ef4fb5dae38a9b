//! Listing, lookup and search commands

use gitconfig_core::{ConfigView, Level, OverlayView, Value};
use serde::Serialize;

use crate::error::{CliError, Result};

/// A property with the scope that supplies it, for JSON output
#[derive(Serialize)]
struct ScopedValue<'a> {
    #[serde(flatten)]
    value: &'a Value,
    scope: Level,
}

/// Print every property of the merged view, or of one scope.
pub fn run_list(config: &OverlayView, scope: Option<Level>, json: bool, show_scope: bool) -> Result<()> {
    let values: Vec<&Value> = match scope {
        Some(level) => config.scope(level).iter().collect(),
        None => config.all().iter().collect(),
    };

    let origin = |value: &Value| scope.or_else(|| config.origin(value.name()));
    print_values(&values, origin, json, show_scope)
}

/// Print the effective value of one property.
pub fn run_get(config: &OverlayView, name: &str, show_scope: bool) -> Result<()> {
    let value = config.get(name).ok_or_else(|| CliError::NotFound {
        name: name.to_string(),
    })?;

    match config.origin(name).filter(|_| show_scope) {
        Some(level) => println!("{level}\t{value}"),
        None => println!("{value}"),
    }
    Ok(())
}

/// Print the properties matching a name or `prefix*` pattern.
pub fn run_find(config: &OverlayView, pattern: &str, json: bool, show_scope: bool) -> Result<()> {
    let values = config.find(pattern);
    tracing::debug!(pattern, matches = values.len(), "Searched configuration");

    if values.is_empty() && !json {
        return Err(CliError::NotFound {
            name: pattern.to_string(),
        });
    }

    print_values(&values, |value| config.origin(value.name()), json, show_scope)
}

fn print_values(
    values: &[&Value],
    origin: impl Fn(&Value) -> Option<Level>,
    json: bool,
    show_scope: bool,
) -> Result<()> {
    if json {
        let output = if show_scope {
            let scoped: Vec<_> = values
                .iter()
                .filter_map(|&value| origin(value).map(|scope| ScopedValue { value, scope }))
                .collect();
            serde_json::to_string_pretty(&scoped)?
        } else {
            serde_json::to_string_pretty(values)?
        };
        println!("{output}");
        return Ok(());
    }

    for &value in values {
        match origin(value).filter(|_| show_scope) {
            Some(level) => println!("{level}\t{}={}", value.name(), value.raw()),
            None => println!("{}={}", value.name(), value.raw()),
        }
    }
    Ok(())
}
