//! Interpret a command tree document against the process arguments.
//!
//! The document is read from `ACTIONS_APP` (default `./app.json`). A local
//! `./actions` directory, when present, is registered as an action source
//! before dispatch.

use actions_cli::cli::utils::display_error;
use actions_cli::config::EnvironmentLoader;
use actions_cli::invoker::{ActionSource, SourceRegistry};
use actions_cli::observability::{init_logging, DEFAULT_FILTER};
use actions_cli::{Command, DeclarativeCli};
use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;

const DEFAULT_SOURCE_DIR: &str = "./actions";

fn main() -> Result<()> {
    let env = EnvironmentLoader::default();
    init_logging(&env.log_level().unwrap_or_else(|| DEFAULT_FILTER.to_string()));

    let path = env.app_file();
    let app = Command::from_file(&path)
        .with_context(|| format!("Failed to load command tree from {}", path.display()))?;

    let sources = Arc::new(SourceRegistry::new());
    if Path::new(DEFAULT_SOURCE_DIR).is_dir() {
        sources.add(ActionSource::classify(DEFAULT_SOURCE_DIR));
    }

    let cli = DeclarativeCli::new(app).with_sources(sources);
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    if let Err(err) = runtime.block_on(cli.run(std::env::args())) {
        display_error(&err, &format!("{} failed", cli.app().name));
        std::process::exit(1);
    }

    Ok(())
}
