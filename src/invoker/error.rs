//! Error types for the invoker module.

use thiserror::Error;

/// Errors reported by an action runtime.
///
/// # Example
///
/// ```
/// use actions_cli::invoker::InvokerError;
///
/// let error = InvokerError::not_found("http.request");
/// assert!(error.to_string().contains("http.request"));
/// ```
#[derive(Debug, Error)]
pub enum InvokerError {
	/// No registered source provides the requested action.
	#[error("action not found: {name}")]
	NotFound {
		/// Name of the action that was not found.
		name: String,
	},

	/// The action ran and failed.
	#[error("execution failed for {name}: {message}")]
	ExecutionFailed {
		/// Name of the action that failed.
		name: String,
		/// Description of the failure.
		message: String,
	},

	/// A declared source could not be reached or loaded.
	#[error("source unavailable: {0}")]
	SourceUnavailable(String),

	/// A serialization or deserialization error occurred.
	#[error("serialization error: {message}")]
	SerializationError {
		/// Description of the serialization error.
		message: String,
	},
}

impl InvokerError {
	/// Create a NotFound error for the given action name.
	pub fn not_found(name: impl Into<String>) -> Self {
		Self::NotFound { name: name.into() }
	}

	/// Create an ExecutionFailed error.
	pub fn execution_failed(name: impl Into<String>, message: impl Into<String>) -> Self {
		Self::ExecutionFailed {
			name: name.into(),
			message: message.into(),
		}
	}

	/// Create a SourceUnavailable error.
	pub fn source_unavailable(source: impl Into<String>) -> Self {
		Self::SourceUnavailable(source.into())
	}

	/// Create a SerializationError.
	pub fn serialization_error(message: impl Into<String>) -> Self {
		Self::SerializationError {
			message: message.into(),
		}
	}
}

impl From<serde_json::Error> for InvokerError {
	fn from(err: serde_json::Error) -> Self {
		Self::serialization_error(err.to_string())
	}
}
