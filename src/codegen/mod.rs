//! Code generation - compile a command tree into a standalone program.
//!
//! The generated program embeds the tree as a Rust literal and calls
//! [`crate::run_blocking`], so it behaves exactly like interpreting the
//! same document with `app-run`.
//!
//! # Example
//!
//! ```no_run
//! use actions_cli::codegen::{AppBuilder, CargoToolchain};
//! use actions_cli::Command;
//! use std::path::Path;
//!
//! # async fn build() -> Result<(), Box<dyn std::error::Error>> {
//! let app = Command::from_file("app.json")?;
//! AppBuilder::new(CargoToolchain::default())
//!     .build(&app, Path::new("./app"))
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod build;
pub mod emitter;
pub mod error;
pub mod generator;
pub mod toolchain;

pub use build::AppBuilder;
pub use emitter::{Expr, Printer};
pub use error::{BuildError, BuildResult};
pub use generator::generate_program;
pub use toolchain::{CargoToolchain, RuntimeDependency, Toolchain};
