//! Test utilities and mock implementations for CLI testing
//!
//! Provides mock runtimes for unit testing dispatch without a real action
//! runtime.

pub mod mocks;

pub use mocks::{FailingRuntime, RecordingRuntime};
