//! actions-cli - declarative command-line applications
//!
//! A command tree document (JSON, YAML or TOML) describes commands,
//! positional arguments, flags, action sources and the action each command
//! runs. The tree can be interpreted directly or compiled into a standalone
//! executable that behaves the same way.
//!
//! - **`cli`** - command tree model, context resolution, dispatch, result display
//! - **`invoker`** - action sources and the action runtime interface
//! - **`codegen`** - program generation and the compile pipeline
//! - **`config`** - environment loading
//! - **`observability`** - logging setup and build output forwarding
//!
//! # Features
//!
//! ```toml
//! [dependencies]
//! actions-cli = { version = "0.3", default-features = false }
//! # JSON only; enable "yaml" and/or "toml" for the other formats
//! ```
//!
//! # Example: interpreting a tree
//!
//! ```
//! use actions_cli::{Command, DeclarativeCli};
//!
//! let app = Command::from_json_str(r#"{
//!     "name": "greet",
//!     "action": "hello",
//!     "arguments": [{"name": "name"}]
//! }"#).unwrap();
//!
//! let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
//! rt.block_on(DeclarativeCli::new(app).run(["greet", "-q", "world"])).unwrap();
//! ```
//!
//! # Example: generating a program
//!
//! ```
//! use actions_cli::{codegen::generate_program, Command};
//!
//! let source = generate_program(&Command::new("greet"));
//! assert!(source.contains("actions_cli::run_blocking(app(), std::env::args())"));
//! ```

#![warn(missing_docs)]

/// Command tree model, dispatch and result display
pub mod cli;

/// Program generation and compilation
pub mod codegen;

/// Configuration management
pub mod config;

/// Action sources and runtime interface
pub mod invoker;

/// Logging utilities
pub mod observability;

// Generated programs build seed context values through this path.
pub use serde_json;

pub use cli::declarative::{
    run_blocking, ActionRef, Argument, Command, Context, DeclarativeCli, DeclarativeError,
    DeclarativeResult,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::cli::declarative::{
        ActionRef, Argument, Command, Context, DeclarativeCli, DeclarativeError, DeclarativeResult,
        Dispatch,
    };
    pub use crate::codegen::{AppBuilder, BuildError, CargoToolchain, Toolchain};
    pub use crate::config::EnvironmentLoader;
    pub use crate::invoker::{ActionRequest, ActionResult, ActionRuntime, EchoRuntime, SourceRegistry};
}
