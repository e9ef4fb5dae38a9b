//! Temporary configuration files.
//!
//! [`LayeredConfig`] writes real git config files and opens them through
//! `git2` at the system, global and local levels, without touching the
//! host's own configuration. [`ListingDumps`] writes `git config --list`
//! output for the CLI to read.

use std::fs;
use std::path::PathBuf;

use git2::{Config, ConfigLevel};
use tempfile::TempDir;

/// Git config files for the system, global and local levels.
///
/// # Example
///
/// ```rust,no_run
/// use gitconfig_test_utils::files::LayeredConfig;
///
/// let layered = LayeredConfig::new()
///     .system("[core]\n\tautocrlf = false\n")
///     .local("[core]\n\tautocrlf = input\n");
/// let config = layered.open();
/// assert_eq!(config.get_string("core.autocrlf").unwrap(), "input");
/// ```
pub struct LayeredConfig {
    temp_dir: TempDir,
    levels: Vec<(ConfigLevel, PathBuf)>,
}

impl Default for LayeredConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl LayeredConfig {
    /// Create an empty set of config files.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
            levels: Vec::new(),
        }
    }

    /// Write the system-level file.
    pub fn system(self, contents: impl AsRef<[u8]>) -> Self {
        self.with_level(ConfigLevel::System, "system.gitconfig", contents)
    }

    /// Write the XDG global file (read before `global`).
    pub fn xdg(self, contents: impl AsRef<[u8]>) -> Self {
        self.with_level(ConfigLevel::XDG, "xdg.gitconfig", contents)
    }

    /// Write the global (user) file.
    pub fn global(self, contents: impl AsRef<[u8]>) -> Self {
        self.with_level(ConfigLevel::Global, "global.gitconfig", contents)
    }

    /// Write the repository-local file.
    pub fn local(self, contents: impl AsRef<[u8]>) -> Self {
        self.with_level(ConfigLevel::Local, "local.gitconfig", contents)
    }

    fn with_level(mut self, level: ConfigLevel, file: &str, contents: impl AsRef<[u8]>) -> Self {
        let path = self.temp_dir.path().join(file);
        fs::write(&path, contents)
            .unwrap_or_else(|e| panic!("LayeredConfig: failed to write {file}: {e}"));
        self.levels.push((level, path));
        self
    }

    /// Open every written file as one multi-level `git2` config.
    ///
    /// # Panics
    /// Panics if `git2` rejects a file.
    pub fn open(&self) -> Config {
        let mut config = Config::new().expect("LayeredConfig: failed to create config");
        for (level, path) in &self.levels {
            config.add_file(path, *level, false).unwrap_or_else(|e| {
                panic!(
                    "LayeredConfig: failed to add {} at {level:?}: {e}",
                    path.display()
                )
            });
        }
        config
    }
}

/// A directory of `git config --list` dumps.
pub struct ListingDumps {
    temp_dir: TempDir,
}

impl Default for ListingDumps {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingDumps {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Write a dump and return its path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        fs::write(&path, contents)
            .unwrap_or_else(|e| panic!("ListingDumps: failed to write {name}: {e}"));
        path
    }
}
