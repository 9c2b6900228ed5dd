//! Declarative CLI Framework
//!
//! This module turns a command tree document (JSON, YAML or TOML) into a
//! working command-line program. The framework automatically:
//! - Builds the clap CLI from the tree
//! - Binds positional tokens and flags into an execution context
//! - Resolves the invoked command's action and hands it to an action runtime
//! - Renders the action result as a table or JSON
//!
//! ## Usage
//!
//! ```rust,no_run
//! use actions_cli::cli::declarative::DeclarativeCli;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     DeclarativeCli::from_file("app.json")?.run(std::env::args()).await?;
//!     Ok(())
//! }
//! ```
//!
//! Programs produced by the builder skip the document and embed the tree as
//! a literal, calling [`run_blocking`] instead.

pub mod builder;
pub mod config;
pub mod context;
pub mod error;
pub mod executor;
pub mod router;

// Re-export main types
pub use builder::CliBuilder;
pub use config::{ActionRef, Argument, ArgumentList, Command, Context};
pub use context::{resolve_context, FlagLookup, ResolveError};
pub use error::{DeclarativeError, DeclarativeResult};
pub use executor::{run_blocking, DeclarativeCli, Dispatch};
pub use router::{resolve_action, route};
