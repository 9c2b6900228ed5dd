//! Configuration management for declarative command-line programs.
//!
//! This module provides environment variable management via `.env` files.
//! Everything else a program needs is in its command tree document.
//!
//! # Example
//!
//! ```no_run
//! use actions_cli::config::EnvironmentLoader;
//! use std::path::Path;
//!
//! // Load environment variables
//! let env = EnvironmentLoader::new(Some(Path::new(".env")));
//!
//! println!("Document: {}", env.app_file().display());
//! println!("Log filter: {:?}", env.log_level());
//! ```

pub mod environment;

// Re-export main types for convenience
pub use self::environment::EnvironmentLoader;
