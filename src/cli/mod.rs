//! CLI feature - declarative command trees and result display
//!
//! This module provides the runtime half of the system: a command tree is
//! compiled into a clap CLI, dispatched, and the action result rendered.
//!
//! # Architecture
//!
//! - [`declarative`] - command tree model, context resolution and dispatch
//! - [`utils`] - table/JSON rendering of action results, error display
//!
//! # Example
//!
//! ```
//! use actions_cli::cli::declarative::{Command, DeclarativeCli};
//!
//! let app = Command::from_json_str(r#"{"name": "hi", "action": "say.hi"}"#).unwrap();
//! let cli = DeclarativeCli::new(app);
//! assert_eq!(cli.app().name, "hi");
//! ```

pub mod declarative;

pub mod utils;

#[cfg(test)]
pub mod test_utils;

// Re-exports for convenience
pub use utils::*;
