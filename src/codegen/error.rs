//! Error types for program generation and compilation

use std::io;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Result type for build operations
pub type BuildResult<T> = Result<T, BuildError>;

/// Errors that can occur while building a standalone program
#[derive(Debug, Error)]
pub enum BuildError {
    /// Filesystem failure around the build directory or artifact
    #[error("{context}: {source}")]
    Io {
        /// What was being done
        context: String,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// The toolchain process could not be started
    #[error("failed to start `{program}`: {source}")]
    Spawn {
        /// Program that was launched
        program: String,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// The toolchain ran and reported failure
    #[error("toolchain failed ({})", describe_exit(.code))]
    ToolchainFailed {
        /// Exit code, absent when killed by a signal
        code: Option<i32>,
    },

    /// The toolchain did not finish within the configured limit
    #[error("toolchain timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    /// The toolchain succeeded but left no binary behind
    #[error("build artifact not found at {}", .0.display())]
    MissingArtifact(PathBuf),
}

impl BuildError {
    /// Wrap an IO error with what was being done
    pub fn io<S: Into<String>>(context: S, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    }
}
