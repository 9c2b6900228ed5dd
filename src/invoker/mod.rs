//! Invoker Module - the seam between command trees and the action runtime.
//!
//! Commands declare *sources* (directories or http(s) locations holding
//! action definitions) and an *action* to run. This module keeps the
//! registry of declared sources and defines the runtime interface the
//! dispatcher hands resolved requests to.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   sources    ┌──────────────────┐
//! │ Command tree │ ───────────► │  SourceRegistry  │
//! └──────┬───────┘              └────────┬─────────┘
//!        │ ActionRequest                 │
//!        ▼                               ▼
//! ┌─────────────────────────────────────────────────┐
//! │              ActionRuntime trait                │
//! │         (EchoRuntime built-in impl)             │
//! └─────────────────────────┬───────────────────────┘
//!                           │
//!                           ▼
//!                     ActionResult
//! ```
//!
//! # Quick Start
//!
//! ```
//! use actions_cli::invoker::{ActionSource, SourceRegistry};
//!
//! let registry = SourceRegistry::new();
//! registry.register_all(&["./actions", "https://example.com/actions"]);
//!
//! let sources = registry.sources();
//! assert_eq!(sources[0], ActionSource::classify("./actions"));
//! assert!(sources[1].is_http());
//! ```

mod adapter;
mod definition;
mod error;
mod registry;
mod source;

pub use adapter::{ActionRuntime, EchoRuntime};
pub use definition::{ActionRequest, ActionResult};
pub use error::InvokerError;
pub use registry::SourceRegistry;
pub use source::ActionSource;

/// Result type for invoker operations.
pub type InvokerResult<T> = Result<T, InvokerError>;
