//! Environment variable loading and management.
//!
//! Only process-level settings live here: where to find the command tree
//! document, the log filter, and the runtime crate location used when
//! compiling generated programs.

use std::env;
use std::path::{Path, PathBuf};

/// Path of the command tree document read by `app-run`
pub const APP_FILE_VAR: &str = "ACTIONS_APP";

/// `tracing` filter directive
pub const LOG_VAR: &str = "ACTIONS_LOG";

/// Local checkout of this crate for generated programs to depend on
pub const CLI_PATH_VAR: &str = "ACTIONS_CLI_PATH";

/// Document read when [`APP_FILE_VAR`] is unset
pub const DEFAULT_APP_FILE: &str = "app.json";

/// Loads environment variables from .env file and system environment.
#[derive(Debug, Clone)]
pub struct EnvironmentLoader {
    env_file: Option<PathBuf>,
}

impl EnvironmentLoader {
    /// Initialize the environment loader.
    ///
    /// # Arguments
    /// * `env_file` - Path to a .env file. Nothing is loaded when None.
    pub fn new(env_file: Option<&Path>) -> Self {
        // Only an explicit path is loaded, so stray .env files in the
        // working directory never change a program's behavior.
        if let Some(path) = env_file {
            if path.exists() {
                if let Err(e) = dotenv::from_path(path) {
                    tracing::warn!("Failed to load .env file {}: {}", path.display(), e);
                }
            }
        }

        Self {
            env_file: env_file.map(Path::to_path_buf),
        }
    }

    /// The .env file this loader was created with
    pub fn env_file(&self) -> Option<&Path> {
        self.env_file.as_deref()
    }

    /// Command tree document path, `app.json` by default.
    pub fn app_file(&self) -> PathBuf {
        non_empty_var(APP_FILE_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_APP_FILE))
    }

    /// Log filter directive, if one is set.
    pub fn log_level(&self) -> Option<String> {
        non_empty_var(LOG_VAR)
    }

    /// Local path of the runtime crate, if one is set.
    pub fn runtime_path(&self) -> Option<PathBuf> {
        non_empty_var(CLI_PATH_VAR).map(PathBuf::from)
    }
}

impl Default for EnvironmentLoader {
    fn default() -> Self {
        Self::new(None)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
