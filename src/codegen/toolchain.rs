//! Compiler toolchain seam and the cargo-backed implementation

use super::error::{BuildError, BuildResult};
use crate::observability::forward_lines;
use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};
use std::time::Duration;
use tokio::io::AsyncRead;
use tokio::process::{Child, Command as TokioCommand};
use tokio::time::timeout;

/// Name of the binary target in generated manifests
pub const BINARY_NAME: &str = "app";

/// Compiles one generated source file into an executable.
///
/// The source file's directory is scratch space owned by the caller for the
/// duration of the call.
#[async_trait]
pub trait Toolchain: Send + Sync {
    /// Compile `source` and place the executable at `output`
    async fn build(&self, source: &Path, output: &Path) -> BuildResult<()>;
}

/// How generated programs depend on this crate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeDependency {
    /// Local checkout
    Path(PathBuf),
    /// Registry version requirement
    Version(String),
}

impl Default for RuntimeDependency {
    fn default() -> Self {
        Self::Version(env!("CARGO_PKG_VERSION").to_string())
    }
}

impl RuntimeDependency {
    /// Dependency table value, e.g. `{ path = "/src/actions-cli" }`
    pub fn to_toml(&self) -> String {
        // JSON string escapes are a subset of TOML basic string escapes.
        match self {
            Self::Path(path) => format!("{{ path = {} }}", quoted(&path.to_string_lossy())),
            Self::Version(version) => format!("{{ version = {} }}", quoted(version)),
        }
    }
}

fn quoted(text: &str) -> String {
    serde_json::Value::String(text.to_string()).to_string()
}

/// Builds generated programs with `cargo build --release`
#[derive(Debug, Clone)]
pub struct CargoToolchain {
    program: String,
    dependency: RuntimeDependency,
    timeout: Option<Duration>,
}

impl Default for CargoToolchain {
    fn default() -> Self {
        Self::new(RuntimeDependency::default())
    }
}

impl CargoToolchain {
    /// Toolchain running `cargo` from `PATH`
    pub fn new(dependency: RuntimeDependency) -> Self {
        Self {
            program: "cargo".to_string(),
            dependency,
            timeout: None,
        }
    }

    /// Kill the build when it runs longer than `limit`
    pub fn with_timeout(mut self, limit: Duration) -> Self {
        self.timeout = Some(limit);
        self
    }

    /// Run a different cargo executable
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Manifest placed next to the generated `source_file`
    pub fn manifest(&self, source_file: &str) -> String {
        format!(
            r#"[package]
name = "{bin}"
version = "0.1.0"
edition = "2021"
publish = false

[[bin]]
name = "{bin}"
path = {path}

[dependencies]
actions-cli = {dependency}

[workspace]
"#,
            bin = BINARY_NAME,
            path = quoted(source_file),
            dependency = self.dependency.to_toml(),
        )
    }

    async fn wait_streaming(child: &mut Child) -> io::Result<ExitStatus> {
        let stdout = child.stdout.take();
        let stderr = child.stderr.take();

        let (out, err, status) = tokio::join!(
            forward_optional(stdout, "stdout"),
            forward_optional(stderr, "stderr"),
            child.wait()
        );
        out?;
        err?;
        status
    }
}

async fn forward_optional<R>(reader: Option<R>, stream: &'static str) -> io::Result<usize>
where
    R: AsyncRead + Unpin,
{
    match reader {
        Some(reader) => forward_lines(reader, stream).await,
        None => Ok(0),
    }
}

#[async_trait]
impl Toolchain for CargoToolchain {
    async fn build(&self, source: &Path, output: &Path) -> BuildResult<()> {
        let dir = source.parent().unwrap_or_else(|| Path::new("."));
        let source_file = source
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "main.rs".to_string());

        let manifest_path = dir.join("Cargo.toml");
        tokio::fs::write(&manifest_path, self.manifest(&source_file))
            .await
            .map_err(|e| BuildError::io("writing build manifest", e))?;

        let target_dir = dir.join("target");
        tracing::info!("Compiling {} with {}", source.display(), self.program);

        let mut child = TokioCommand::new(&self.program)
            .arg("build")
            .arg("--release")
            .arg("--manifest-path")
            .arg(&manifest_path)
            .arg("--target-dir")
            .arg(&target_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| BuildError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let waited = match self.timeout {
            Some(limit) => timeout(limit, Self::wait_streaming(&mut child)).await.ok(),
            None => Some(Self::wait_streaming(&mut child).await),
        };
        let status = match waited {
            Some(status) => status.map_err(|e| BuildError::io("waiting for toolchain", e))?,
            None => {
                let limit = self.timeout.unwrap_or_default();
                tracing::warn!("Build timed out after {} seconds", limit.as_secs());
                let _ = child.kill().await;
                return Err(BuildError::Timeout(limit));
            }
        };

        if !status.success() {
            return Err(BuildError::ToolchainFailed {
                code: status.code(),
            });
        }

        let artifact = target_dir
            .join("release")
            .join(format!("{}{}", BINARY_NAME, std::env::consts::EXE_SUFFIX));
        if !artifact.is_file() {
            return Err(BuildError::MissingArtifact(artifact));
        }

        tokio::fs::copy(&artifact, output)
            .await
            .map_err(|e| BuildError::io(format!("copying binary to {}", output.display()), e))?;

        tracing::info!("Built {}", output.display());
        Ok(())
    }
}
