//! Document schema for declarative command trees
//!
//! A document describes a single root [`Command`]. Children live in
//! `commands`, so a tree can be arbitrarily deep. JSON is always accepted;
//! YAML and TOML are available behind the `yaml` and `toml` features.

use super::error::{DeclarativeError, DeclarativeResult};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::Path;

/// Key-value input handed to an action for one invocation.
pub type Context = serde_json::Map<String, serde_json::Value>;

/// A positional argument or a named flag
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argument {
    /// Name shown in usage and matched for flags
    #[serde(default)]
    pub name: String,

    /// Context key override
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub push: String,

    /// Whether resolution fails when no value is bound
    #[serde(default)]
    pub required: bool,

    /// Default literal (document key `default`)
    #[serde(rename = "default", default, skip_serializing_if = "String::is_empty")]
    pub value: String,

    /// Help text
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl Argument {
    /// Create an optional argument with no default
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the context key override
    pub fn with_push(mut self, push: impl Into<String>) -> Self {
        self.push = push.into();
        self
    }

    /// Set the default literal
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Set the help text
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Mark the argument as required
    pub fn mark_required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Context key for this argument: `push` if set, `name` otherwise.
    pub fn push_name(&self) -> &str {
        if self.push.is_empty() {
            &self.name
        } else {
            &self.push
        }
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.name)
    }
}

/// Lookups over an ordered argument list
pub trait ArgumentList {
    /// Find an argument by declared name
    fn get_by_name(&self, name: &str) -> Option<&Argument>;

    /// Brace-wrapped names joined by spaces, e.g. `{src} {dst}`
    fn usage_names(&self) -> String;
}

impl ArgumentList for [Argument] {
    fn get_by_name(&self, name: &str) -> Option<&Argument> {
        self.iter().find(|arg| arg.name == name)
    }

    fn usage_names(&self) -> String {
        self.iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Action a runnable command triggers
///
/// In a document this is either a string (the action name) or a map with a
/// `name` and an optional `ctx` map seeding the action context.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ActionRef {
    /// Bare action name
    Bare(String),

    /// Action name plus static context seed
    Named {
        /// Action name
        name: String,
        /// Seed context; live invocation values are layered on top
        #[serde(skip_serializing_if = "Option::is_none")]
        ctx: Option<Context>,
    },
}

impl ActionRef {
    /// Name of the referenced action
    pub fn name(&self) -> &str {
        match self {
            Self::Bare(name) => name,
            Self::Named { name, .. } => name,
        }
    }
}

impl<'de> Deserialize<'de> for ActionRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde_json::Value;

        match Value::deserialize(deserializer)? {
            Value::String(name) => Ok(Self::Bare(name)),
            Value::Object(mut map) => {
                let name = match map.remove("name") {
                    Some(Value::String(name)) => name,
                    Some(other) => {
                        return Err(D::Error::custom(format!(
                            "action `name` must be a string, found {}",
                            other
                        )))
                    }
                    None => return Err(D::Error::missing_field("name")),
                };
                let ctx = match map.remove("ctx") {
                    None | Some(Value::Null) => None,
                    Some(Value::Object(ctx)) => Some(ctx),
                    Some(other) => {
                        return Err(D::Error::custom(format!(
                            "action `ctx` must be a map, found {}",
                            other
                        )))
                    }
                };
                Ok(Self::Named { name, ctx })
            }
            other => Err(D::Error::custom(format!(
                "action must be a name or a map with `name` and `ctx`, found {}",
                other
            ))),
        }
    }
}

/// A node of the command tree
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Command {
    /// Command name, matched exactly during dispatch
    #[serde(default)]
    pub name: String,

    /// Usage line; derived from name and arguments when blank
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub usage: String,

    /// One line example; falls back to the usage line
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub example: String,

    /// About text
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// Positional arguments, bound by index
    #[serde(
        default,
        deserialize_with = "skip_null_entries",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub arguments: Vec<Argument>,

    /// Named flags
    #[serde(
        default,
        deserialize_with = "skip_null_entries",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub flags: Vec<Argument>,

    /// Action to run; absent for pure group commands
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<ActionRef>,

    /// Action source locations (paths or http(s) URLs)
    #[serde(
        default,
        deserialize_with = "skip_null_entries",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub sources: Vec<String>,

    /// Subcommands
    #[serde(
        default,
        deserialize_with = "skip_null_entries",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub commands: Vec<Command>,
}

fn skip_null_entries<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let entries: Option<Vec<Option<T>>> = Option::deserialize(deserializer)?;
    Ok(entries.unwrap_or_default().into_iter().flatten().collect())
}

impl Command {
    /// Create an empty command with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Whether this command routes to subcommands
    pub fn is_group(&self) -> bool {
        !self.commands.is_empty()
    }

    /// Whether this command has an action to run
    pub fn is_runnable(&self) -> bool {
        self.action.is_some()
    }

    /// Find a direct subcommand by exact name
    pub fn find_command(&self, name: &str) -> Option<&Command> {
        self.commands.iter().find(|c| c.name == name)
    }

    /// Usage line: explicit usage, bare name, or name followed by `{arg}` names
    pub fn usage_line(&self) -> String {
        if !self.usage.is_empty() {
            return self.usage.clone();
        }
        if self.arguments.is_empty() {
            return self.name.clone();
        }
        format!("{} {}", self.name, self.arguments.usage_names())
    }

    /// Description followed by an example block
    ///
    /// A blank `example` falls back to the `usage` field as written, not to
    /// the derived usage line.
    pub fn long_description(&self) -> String {
        let example = if self.example.is_empty() {
            &self.usage
        } else {
            &self.example
        };
        format!("{}\n\nexample:\n\n    $ {}", self.description, example)
    }

    /// Parse a JSON document
    pub fn from_json_str(body: &str) -> DeclarativeResult<Self> {
        serde_json::from_str(body).map_err(|e| DeclarativeError::parse("JSON", e))
    }

    /// Parse a YAML document
    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(body: &str) -> DeclarativeResult<Self> {
        serde_yaml::from_str(body).map_err(|e| DeclarativeError::parse("YAML", e))
    }

    /// Parse a TOML document
    #[cfg(feature = "toml")]
    pub fn from_toml_str(body: &str) -> DeclarativeResult<Self> {
        toml::from_str(body).map_err(|e| DeclarativeError::parse("TOML", e))
    }

    /// Read a document, choosing the format by file extension
    pub fn from_file(path: impl AsRef<Path>) -> DeclarativeResult<Self> {
        let path = path.as_ref();
        let body = std::fs::read_to_string(path).map_err(|e| {
            DeclarativeError::config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        match path.extension().and_then(|s| s.to_str()) {
            Some("json") => Self::from_json_str(&body),
            #[cfg(feature = "yaml")]
            Some("yaml") | Some("yml") => Self::from_yaml_str(&body),
            #[cfg(feature = "toml")]
            Some("toml") => Self::from_toml_str(&body),
            _ => {
                let json = Self::from_json_str(&body);
                #[cfg(feature = "yaml")]
                let json = json.or_else(|_| Self::from_yaml_str(&body));
                json
            }
        }
    }
}
