//! Build pipeline - generate, compile, clean up

use super::error::{BuildError, BuildResult};
use super::generator::generate_program;
use super::toolchain::Toolchain;
use crate::cli::declarative::Command;
use std::path::{Path, PathBuf};

/// Compiles command trees into standalone executables
pub struct AppBuilder {
    toolchain: Box<dyn Toolchain>,
    temp_root: PathBuf,
}

impl AppBuilder {
    /// Builder compiling with `toolchain` under the system temp directory
    pub fn new(toolchain: impl Toolchain + 'static) -> Self {
        Self {
            toolchain: Box::new(toolchain),
            temp_root: std::env::temp_dir(),
        }
    }

    /// Create build directories under `root` instead
    pub fn with_temp_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.temp_root = root.into();
        self
    }

    /// Scratch directory used for `app`: `<temp>/app-<name>-build`
    pub fn build_dir(&self, app: &Command) -> PathBuf {
        self.temp_root
            .join(format!("app-{}-build", encode_name(&app.name)))
    }

    /// Generate the program for `app`, compile it and write the executable to `output`.
    ///
    /// The build directory is removed whether or not any stage succeeds.
    pub async fn build(&self, app: &Command, output: &Path) -> BuildResult<()> {
        let source = generate_program(app);
        tracing::debug!("Generated source for {}:\n{}", app.name, source);

        let dir = self.build_dir(app);
        let outcome = self.compile(&dir, &source, output).await;

        let cleanup = match tokio::fs::remove_dir_all(&dir).await {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => {
                Err(BuildError::io(format!("removing {}", dir.display()), e))
            }
            _ => Ok(()),
        };

        outcome?;
        cleanup
    }

    async fn compile(&self, dir: &Path, source: &str, output: &Path) -> BuildResult<()> {
        if tokio::fs::try_exists(dir).await.unwrap_or(false) {
            tracing::debug!("Removing stale build directory {}", dir.display());
            tokio::fs::remove_dir_all(dir)
                .await
                .map_err(|e| BuildError::io(format!("removing {}", dir.display()), e))?;
        }
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| BuildError::io(format!("creating {}", dir.display()), e))?;

        let main = dir.join("main.rs");
        tokio::fs::write(&main, source)
            .await
            .map_err(|e| BuildError::io(format!("writing {}", main.display()), e))?;

        self.toolchain.build(&main, output).await
    }
}

/// Directory-safe form of a command name
///
/// ASCII letters, digits and `-` are kept; every other byte becomes `_xx`
/// (lowercase hex), so distinct names never share a directory.
pub fn encode_name(name: &str) -> String {
    let mut encoded = String::with_capacity(name.len());
    for byte in name.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' {
            encoded.push(char::from(byte));
        } else {
            encoded.push_str(&format!("_{:02x}", byte));
        }
    }
    encoded
}
