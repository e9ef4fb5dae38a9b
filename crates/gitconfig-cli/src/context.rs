//! Loading the configuration scopes named on the command line

use std::io;
use std::path::Path;

use gitconfig_core::{DuplicatePolicy, Level, OverlayView, Scope};

use crate::cli::Cli;
use crate::error::{CliError, Result};

/// Path that selects standard input instead of a file
const STDIN_PATH: &str = "-";

/// Build the overlay from the dumps given by `--system`, `--global` and
/// `--local`.
pub fn load_overlay(cli: &Cli) -> Result<OverlayView> {
    let sources = [
        (Level::System, cli.system.as_deref()),
        (Level::Global, cli.global.as_deref()),
        (Level::Local, cli.local.as_deref()),
    ];

    let from_stdin = sources
        .iter()
        .filter(|(_, path)| path.is_some_and(|p| p == Path::new(STDIN_PATH)))
        .count();
    if from_stdin > 1 {
        return Err(CliError::user(
            "Only one of --system, --global and --local can read from standard input",
        ));
    }

    let policy = cli.duplicate_policy();
    let [system, global, local] = sources.map(|(level, path)| load_scope(level, path, policy));

    Ok(OverlayView::new(system?, global?, local?))
}

/// Read one dump; no path means the scope does not apply.
fn load_scope(level: Level, path: Option<&Path>, policy: DuplicatePolicy) -> Result<Scope> {
    let Some(path) = path else {
        tracing::debug!(%level, "No dump given, using an empty scope");
        return Ok(Scope::empty());
    };

    let output = if path == Path::new(STDIN_PATH) {
        io::read_to_string(io::stdin()).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?
    } else {
        std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?
    };

    tracing::debug!(%level, path = %path.display(), bytes = output.len(), "Read configuration dump");
    Ok(Scope::parse_with_policy(&output, policy))
}
