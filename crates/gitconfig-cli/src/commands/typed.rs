//! Typed reads of a single property

use gitconfig_core::{ConfigView, OverlayView, Value};

use crate::error::{CliError, Result};

fn lookup<'a>(config: &'a OverlayView, name: &str) -> Result<&'a Value> {
    config.get(name).ok_or_else(|| CliError::NotFound {
        name: name.to_string(),
    })
}

/// Print `true` or `false`; an unrecognised value is an error.
pub fn run_bool(config: &OverlayView, name: &str) -> Result<()> {
    let value = lookup(config, name)?.parse_bool()?;
    println!("{value}");
    Ok(())
}

/// Print the value as a base-10 integer; a non-integer is an error.
pub fn run_int(config: &OverlayView, name: &str) -> Result<()> {
    let value = lookup(config, name)?.parse_int()?;
    println!("{value}");
    Ok(())
}

/// Print each `:`-separated element on its own line.
pub fn run_split(config: &OverlayView, name: &str) -> Result<()> {
    for element in lookup(config, name)?.as_list() {
        println!("{element}");
    }
    Ok(())
}
