//! Runtime trait for executing resolved actions.

use crate::invoker::{ActionRequest, ActionResult, InvokerResult, SourceRegistry};
use async_trait::async_trait;
use serde_json::Value;

/// Executes an action request and returns its result mapping.
///
/// The runtime is an external collaborator: it resolves the action name
/// against the sources registered so far and runs it with the request
/// context. The dispatcher registers all declared sources before calling
/// [`ActionRuntime::run`].
///
/// # Object Safety
///
/// This trait is object-safe and can be used with `Arc<dyn ActionRuntime>`.
#[async_trait]
pub trait ActionRuntime: Send + Sync {
	/// Run one action to completion.
	async fn run(
		&self,
		request: ActionRequest,
		sources: &SourceRegistry,
	) -> InvokerResult<ActionResult>;
}

/// In-process runtime that answers every request with the request itself.
///
/// The result holds `action` (the action name) followed by every context
/// entry, which makes it a dry run of the command tree.
///
/// # Example
///
/// ```
/// use actions_cli::invoker::{ActionRequest, ActionRuntime, EchoRuntime, SourceRegistry};
///
/// let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
/// let result = rt
/// 	.block_on(EchoRuntime.run(ActionRequest::new("ping", Default::default()), &SourceRegistry::new()))
/// 	.unwrap();
/// assert_eq!(result.get_str("action"), Some("ping"));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct EchoRuntime;

#[async_trait]
impl ActionRuntime for EchoRuntime {
	async fn run(
		&self,
		request: ActionRequest,
		_sources: &SourceRegistry,
	) -> InvokerResult<ActionResult> {
		let mut result = ActionResult::new();
		result.insert("action", Value::String(request.name));
		for (key, value) in request.ctx {
			result.insert(key, value);
		}
		Ok(result)
	}
}
