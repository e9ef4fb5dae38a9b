//! Error types for gitconfig-core

/// Result type for gitconfig-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in gitconfig-core operations
///
/// Queries against a [`Scope`](crate::Scope) or
/// [`OverlayView`](crate::OverlayView) never fail; these errors come from
/// strict typed reads and from snapshotting a `git2` configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Invalid boolean value for '{name}': {value:?}")]
    InvalidBoolean { name: String, value: String },

    #[error("Invalid integer value for '{name}': {value:?}")]
    InvalidInteger { name: String, value: String },
}

impl Error {
    /// Name of the property this error relates to, if any.
    pub fn property(&self) -> Option<&str> {
        match self {
            Self::InvalidBoolean { name, .. } | Self::InvalidInteger { name, .. } => Some(name),
            Self::Git(_) => None,
        }
    }
}
