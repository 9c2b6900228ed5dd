//! Command router - maps invoked command paths and action references to
//! runnable action requests

use super::config::{ActionRef, Command, Context};
use super::error::{DeclarativeError, DeclarativeResult};
use crate::invoker::ActionRequest;

/// Turn a command's action reference and a resolved context into a request.
///
/// A `Named` reference with a seed context starts from the seed and layers
/// the live context over it, so invocation values win on key collisions.
/// Returns `None` for commands without an action.
pub fn resolve_action(action: Option<&ActionRef>, ctx: Context) -> Option<ActionRequest> {
    match action? {
        ActionRef::Bare(name) => Some(ActionRequest::new(name.clone(), ctx)),
        ActionRef::Named {
            name,
            ctx: Some(seed),
        } => {
            let mut merged = seed.clone();
            merged.extend(ctx);
            Some(ActionRequest::new(name.clone(), merged))
        }
        ActionRef::Named { name, ctx: None } => Some(ActionRequest::new(name.clone(), ctx)),
    }
}

/// Follow subcommand names from the root, matching each level exactly.
///
/// The returned path starts with the root and ends with the deepest
/// matched command.
pub fn route<'a, S: AsRef<str>>(root: &'a Command, names: &[S]) -> DeclarativeResult<Vec<&'a Command>> {
    let mut path = vec![root];
    let mut current = root;

    for name in names {
        let name = name.as_ref();
        current = current
            .find_command(name)
            .ok_or_else(|| DeclarativeError::CommandNotFound(name.to_string()))?;
        path.push(current);
    }

    Ok(path)
}
