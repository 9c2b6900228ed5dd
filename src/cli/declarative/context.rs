//! Context resolution - binds raw tokens and flag values to an action context

use super::config::{Argument, Context};
use clap::parser::ValueSource;
use clap::ArgMatches;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// A declared field was marked required but nothing was bound to it
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Required positional argument without a value
    #[error("missing required argument: {name}")]
    MissingArgument {
        /// Declared argument name
        name: String,
    },

    /// Required flag without a value
    #[error("missing required flag: {name}")]
    MissingFlag {
        /// Declared flag name
        name: String,
    },
}

/// Source of already-parsed flag values
pub trait FlagLookup {
    /// Value explicitly supplied for the flag, if any
    fn lookup(&self, name: &str) -> Option<Value>;
}

impl FlagLookup for ArgMatches {
    fn lookup(&self, name: &str) -> Option<Value> {
        // Defaults registered for help output do not count as supplied values.
        match self.value_source(name) {
            Some(ValueSource::CommandLine) | Some(ValueSource::EnvVariable) => self
                .try_get_one::<String>(name)
                .ok()
                .flatten()
                .map(|v| Value::String(v.clone())),
            _ => None,
        }
    }
}

impl FlagLookup for HashMap<String, String> {
    fn lookup(&self, name: &str) -> Option<Value> {
        self.get(name).map(|v| Value::String(v.clone()))
    }
}

/// Build the execution context for one invocation.
///
/// Positionals bind by index; the last declared argument takes every
/// remaining token joined by a space. Required fields are checked only after
/// all binding is done.
pub fn resolve_context(
    arguments: &[Argument],
    flags: &[Argument],
    tokens: &[String],
    lookup: &dyn FlagLookup,
) -> Result<Context, ResolveError> {
    let mut ctx = Context::new();

    for (n, arg) in arguments.iter().enumerate() {
        if tokens.len() < n + 1 {
            break;
        }

        let mut value = if n + 1 >= arguments.len() {
            tokens[n..].join(" ")
        } else {
            tokens[n].clone()
        };

        if value.is_empty() {
            value = arg.value.clone();
        }

        ctx.insert(arg.push_name().to_string(), Value::String(value));
    }

    for flag in flags {
        match lookup.lookup(&flag.name) {
            None | Some(Value::Null) => continue,
            Some(Value::String(s)) if s.is_empty() => continue,
            Some(value) => {
                ctx.insert(flag.push_name().to_string(), value);
            }
        }
    }

    if let Some(arg) = arguments
        .iter()
        .find(|arg| arg.required && is_unset(&ctx, arg))
    {
        return Err(ResolveError::MissingArgument {
            name: arg.name.clone(),
        });
    }

    if let Some(flag) = flags.iter().find(|flag| flag.required && is_unset(&ctx, flag)) {
        return Err(ResolveError::MissingFlag {
            name: flag.name.clone(),
        });
    }

    Ok(ctx)
}

fn is_unset(ctx: &Context, arg: &Argument) -> bool {
    matches!(ctx.get(arg.push_name()), None | Some(Value::Null))
}
