//! Layered git configuration overlay engine
//!
//! Holds the properties of a single configuration scope (system, global or
//! local), merges the three scopes into one effective view, and interprets
//! raw property values as booleans, integers or colon-delimited lists.
//!
//! # Precedence
//!
//! When a name is defined in more than one scope, the visible value comes
//! from the highest-precedence scope:
//!
//! 1. **Local** - the repository's own configuration
//! 2. **Global** - the current user's configuration
//! 3. **System** - the host-wide configuration
//!
//! # Example
//!
//! ```
//! use gitconfig_core::{ConfigView, OverlayView, Scope};
//!
//! let system = Scope::from_pairs([("core.autocrlf", "false")]);
//! let global = Scope::from_pairs([("user.name", "Ada"), ("core.autocrlf", "input")]);
//! let local = Scope::empty();
//!
//! let config = OverlayView::new(system, global, local);
//! assert_eq!(config.get("core.autocrlf").map(|v| v.raw()), Some("input"));
//! assert_eq!(config.find("user.*").len(), 1);
//! ```

pub mod error;
pub mod listing;
pub mod overlay;
pub mod scope;
pub mod search;
pub mod source;
pub mod value;
pub mod view;

pub use error::{Error, Result};
pub use listing::parse_listing;
pub use overlay::{Level, OverlayView};
pub use scope::{DuplicatePolicy, Scope};
pub use search::{Pattern, PropertyIndex};
pub use value::Value;
pub use view::ConfigView;
