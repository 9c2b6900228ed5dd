//! Request and result types exchanged with the action runtime.

use crate::cli::declarative::Context;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A resolved action invocation.
///
/// Derived from a command's action reference and the execution context of
/// one invocation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionRequest {
	/// Action name understood by the runtime.
	pub name: String,

	/// Input context for the action.
	pub ctx: Context,
}

impl ActionRequest {
	/// Create a new request.
	pub fn new(name: impl Into<String>, ctx: Context) -> Self {
		Self {
			name: name.into(),
			ctx,
		}
	}
}

/// Mapping returned by the action runtime.
///
/// # Example
///
/// ```
/// use actions_cli::invoker::ActionResult;
/// use serde_json::json;
///
/// let result = ActionResult::from_value(json!({"status": "ok"})).unwrap();
/// assert_eq!(result.get_str("status"), Some("ok"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionResult {
	fields: Context,
}

impl ActionResult {
	/// Create an empty result.
	pub fn new() -> Self {
		Self::default()
	}

	/// Wrap a JSON value; only objects are valid results.
	pub fn from_value(value: Value) -> Option<Self> {
		match value {
			Value::Object(fields) => Some(Self { fields }),
			_ => None,
		}
	}

	/// Set a field.
	pub fn insert(&mut self, key: impl Into<String>, value: Value) {
		self.fields.insert(key.into(), value);
	}

	/// Get a field by key.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.fields.get(key)
	}

	/// Get a string field.
	pub fn get_str(&self, key: &str) -> Option<&str> {
		self.fields.get(key).and_then(Value::as_str)
	}

	/// Get a nested map field.
	pub fn get_map(&self, key: &str) -> Option<&Context> {
		self.fields.get(key).and_then(Value::as_object)
	}

	/// Iterate over fields in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
		self.fields.iter()
	}

	/// Number of fields.
	pub fn len(&self) -> usize {
		self.fields.len()
	}

	/// Check if the result has no fields.
	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	/// Whole result as indented JSON.
	pub fn to_pretty_json(&self) -> serde_json::Result<String> {
		serde_json::to_string_pretty(&self.fields)
	}
}

impl From<Context> for ActionResult {
	fn from(fields: Context) -> Self {
		Self { fields }
	}
}
