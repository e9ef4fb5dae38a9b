//! Command implementations for gitconfig-cli

pub mod query;
pub mod typed;

pub use query::{run_find, run_get, run_list};
pub use typed::{run_bool, run_int, run_split};
