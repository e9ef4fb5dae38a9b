//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use gitconfig_core::{DuplicatePolicy, Level};

/// Query the effective git configuration built from `git config --list` dumps
///
/// Each of --system, --global and --local names a file holding the output
/// of `git config --list --<scope>`. An omitted file is an empty scope; `-`
/// reads the dump from standard input.
#[derive(Parser, Debug)]
#[command(name = "gitconfig")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Dump of the system configuration
    #[arg(long, global = true, value_name = "FILE")]
    pub system: Option<PathBuf>,

    /// Dump of the global (user) configuration
    #[arg(long, global = true, value_name = "FILE")]
    pub global: Option<PathBuf>,

    /// Dump of the local (repository) configuration
    #[arg(long, global = true, value_name = "FILE")]
    pub local: Option<PathBuf>,

    /// Keep the first of repeated names within a dump instead of the last
    #[arg(long, global = true)]
    pub first_wins: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        if self.first_wins {
            DuplicatePolicy::FirstWins
        } else {
            DuplicatePolicy::LastWins
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List every property in name order
    ///
    /// Examples:
    ///   gitconfig --global g.txt list              # Effective configuration
    ///   gitconfig --local l.txt list --scope local # One scope only
    List {
        /// Only list one scope instead of the merged view
        #[arg(long, value_enum)]
        scope: Option<ScopeArg>,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,

        /// Prefix each line with the scope that supplies it
        #[arg(long)]
        show_scope: bool,
    },

    /// Print the effective value of a property
    ///
    /// Exits with status 1 and no output when the property is not set.
    Get {
        /// Property name, e.g. user.email
        name: String,

        /// Prefix the value with the scope that supplies it
        #[arg(long)]
        show_scope: bool,
    },

    /// List properties matching a name or a `prefix*` pattern
    ///
    /// Examples:
    ///   gitconfig --global g.txt find 'core.*'
    ///   gitconfig --global g.txt find user.name
    Find {
        /// Exact name, or a prefix followed by `*`
        pattern: String,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,

        /// Prefix each line with the scope that supplies it
        #[arg(long)]
        show_scope: bool,
    },

    /// Print a property as a boolean (true/false)
    Bool {
        /// Property name
        name: String,
    },

    /// Print a property as an integer
    Int {
        /// Property name
        name: String,
    },

    /// Print a property split on `:`, one element per line
    Split {
        /// Property name
        name: String,
    },
}

/// Scope selector for `list --scope`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeArg {
    System,
    Global,
    Local,
}

impl From<ScopeArg> for Level {
    fn from(arg: ScopeArg) -> Self {
        match arg {
            ScopeArg::System => Level::System,
            ScopeArg::Global => Level::Global,
            ScopeArg::Local => Level::Local,
        }
    }
}
