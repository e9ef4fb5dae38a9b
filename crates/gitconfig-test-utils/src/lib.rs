//! Shared test utilities for the gitconfig-overlay workspace.
//!
//! This crate provides standardised fixtures so the core and CLI test
//! suites agree on their sample data. It is a dev-dependency only, never
//! published.
//!
//! # Modules
//!
//! - [`fixtures`] — sample properties covering every typed reading
//! - [`files`] — temporary config files and `git config --list` dumps

pub mod files;
pub mod fixtures;
