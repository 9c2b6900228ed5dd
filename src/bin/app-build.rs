//! Compile a command tree document into a standalone executable.

use actions_cli::cli::declarative::CliBuilder;
use actions_cli::codegen::{generate_program, AppBuilder, CargoToolchain, RuntimeDependency};
use actions_cli::config::EnvironmentLoader;
use actions_cli::observability::init_logging;
use actions_cli::Command;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "app-build",
    version,
    about = "Compile a command tree document into a standalone executable"
)]
struct Args {
    /// Command tree document (JSON, YAML or TOML)
    #[arg(long, default_value = "app.json")]
    app: PathBuf,

    /// Where to write the executable
    #[arg(short, long, default_value = "./app")]
    output: PathBuf,

    /// Replace the root command name
    #[arg(long)]
    name: Option<String>,

    /// Print the generated source instead of compiling it
    #[arg(long)]
    emit: bool,

    /// Local actions-cli checkout for the program to depend on
    /// (defaults to ACTIONS_CLI_PATH, then the published crate)
    #[arg(long)]
    runtime_path: Option<PathBuf>,

    /// Abort compilation after this many seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Load environment variables from this file first
    #[arg(long)]
    env_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let env = EnvironmentLoader::new(args.env_file.as_deref());
    init_logging(&env.log_level().unwrap_or_else(|| "info".to_string()));

    let mut app = Command::from_file(&args.app)
        .with_context(|| format!("Failed to load command tree from {}", args.app.display()))?;
    if let Some(name) = args.name {
        app.name = name;
    }

    // Reject trees the generated program could not dispatch.
    CliBuilder::new(&app).build()?;

    if args.emit {
        print!("{}", generate_program(&app));
        return Ok(());
    }

    let dependency = match args.runtime_path.or_else(|| env.runtime_path()) {
        Some(path) => {
            let path = std::fs::canonicalize(&path)
                .with_context(|| format!("Runtime path {} not found", path.display()))?;
            RuntimeDependency::Path(path)
        }
        None => RuntimeDependency::default(),
    };

    let mut toolchain = CargoToolchain::new(dependency);
    if let Some(secs) = args.timeout {
        toolchain = toolchain.with_timeout(Duration::from_secs(secs));
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    runtime
        .block_on(AppBuilder::new(toolchain).build(&app, &args.output))
        .with_context(|| format!("Failed to build {}", app.name))?;

    println!("Built {} -> {}", app.name, args.output.display());
    Ok(())
}
