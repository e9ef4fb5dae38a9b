//! gitconfig CLI
//!
//! Queries the effective git configuration assembled from
//! `git config --list` dumps of the system, global and local scopes.

mod cli;
mod commands;
mod context;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        if !e.is_silent() {
            eprintln!("{}: {}", "error".red().bold(), e);
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let config = context::load_overlay(&cli)?;

    match cli.command {
        Commands::List {
            scope,
            json,
            show_scope,
        } => commands::run_list(&config, scope.map(Into::into), json, show_scope),
        Commands::Get { name, show_scope } => commands::run_get(&config, &name, show_scope),
        Commands::Find {
            pattern,
            json,
            show_scope,
        } => commands::run_find(&config, &pattern, json, show_scope),
        Commands::Bool { name } => commands::run_bool(&config, &name),
        Commands::Int { name } => commands::run_int(&config, &name),
        Commands::Split { name } => commands::run_split(&config, &name),
    }
}
