//! Action source locations declared by commands.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use url::Url;

/// A location from which action definitions are loaded.
///
/// Declared `sources` strings are classified once: anything that parses as
/// an absolute `http`/`https` URL is a network source, everything else is a
/// filesystem path.
///
/// # Example
///
/// ```
/// use actions_cli::invoker::ActionSource;
///
/// assert!(ActionSource::classify("https://example.com/actions").is_http());
/// assert!(!ActionSource::classify("./actions").is_http());
/// assert!(!ActionSource::classify("ftp://example.com").is_http());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "location", rename_all = "lowercase")]
pub enum ActionSource {
	/// Directory or file on the local filesystem.
	File(PathBuf),

	/// Remote location reached over HTTP(S).
	Http(Url),
}

impl ActionSource {
	/// Classify a declared source string.
	pub fn classify(value: &str) -> Self {
		match Url::parse(value) {
			Ok(url) if matches!(url.scheme(), "http" | "https") => Self::Http(url),
			_ => Self::File(PathBuf::from(value)),
		}
	}

	/// Whether this is a network source.
	pub fn is_http(&self) -> bool {
		matches!(self, Self::Http(_))
	}

	/// Short label used in logs.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::File(_) => "file",
			Self::Http(_) => "http",
		}
	}
}

impl fmt::Display for ActionSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::File(path) => write!(f, "{}", path.display()),
			Self::Http(url) => write!(f, "{}", url),
		}
	}
}
