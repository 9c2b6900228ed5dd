//! Registry of action sources declared by the command tree.

use crate::invoker::ActionSource;
use std::sync::{PoisonError, RwLock};
use tracing::debug;

/// Append-only set of action sources.
///
/// Registration is idempotent: adding a source that is already present is a
/// no-op, so the same command can be dispatched repeatedly without growing
/// the registry. One registry is created per process and handed to the
/// dispatcher and the action runtime explicitly.
///
/// # Example
///
/// ```
/// use actions_cli::invoker::{ActionSource, SourceRegistry};
///
/// let registry = SourceRegistry::new();
/// assert!(registry.add(ActionSource::classify("./actions")));
/// assert!(!registry.add(ActionSource::classify("./actions")));
/// assert_eq!(registry.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct SourceRegistry {
	sources: RwLock<Vec<ActionSource>>,
}

impl SourceRegistry {
	/// Create a new empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Add a source, returning `true` if it was not registered before.
	pub fn add(&self, source: ActionSource) -> bool {
		let mut sources = self.sources.write().unwrap_or_else(PoisonError::into_inner);
		if sources.contains(&source) {
			return false;
		}
		debug!(kind = source.kind(), source = %source, "registered action source");
		sources.push(source);
		true
	}

	/// Classify and add every declared source string.
	///
	/// Returns the number of sources that were new.
	pub fn register_all<S: AsRef<str>>(&self, declared: &[S]) -> usize {
		declared
			.iter()
			.filter(|value| self.add(ActionSource::classify(value.as_ref())))
			.count()
	}

	/// Check if a source is registered.
	pub fn contains(&self, source: &ActionSource) -> bool {
		self.sources
			.read()
			.unwrap_or_else(PoisonError::into_inner)
			.contains(source)
	}

	/// Snapshot of the registered sources in registration order.
	pub fn sources(&self) -> Vec<ActionSource> {
		self.sources.read().unwrap_or_else(PoisonError::into_inner).clone()
	}

	/// Get the number of registered sources.
	pub fn len(&self) -> usize {
		self.sources.read().unwrap_or_else(PoisonError::into_inner).len()
	}

	/// Check if the registry is empty.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}
