//! CLI executor - the main DeclarativeCli type
//!
//! This is the entry point for the declarative CLI framework.
//! Usage: `DeclarativeCli::new(app).run(std::env::args()).await`

use super::builder::{CliBuilder, FORMATS, FORMAT_FLAG, QUIET_FLAG, TOKENS_ARG};
use super::config::Command;
use super::context::resolve_context;
use super::error::{DeclarativeError, DeclarativeResult};
use super::router::{resolve_action, route};
use crate::cli::utils::render_result;
use crate::invoker::{ActionRequest, ActionResult, ActionRuntime, EchoRuntime, InvokerError, SourceRegistry};
use clap::error::ErrorKind;
use std::ffi::OsString;
use std::path::Path;
use std::sync::Arc;

/// Outcome of one dispatch
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatch {
    /// An action ran through the runtime
    Handled {
        /// Request handed to the runtime
        request: ActionRequest,
        /// Result returned by the runtime
        result: ActionResult,
        /// `-q` was given on the invoked path
        quiet: bool,
        /// Selected output format
        format: String,
    },
    /// Help text to show instead of running anything
    Help(String),
}

/// Main declarative CLI type
pub struct DeclarativeCli {
    app: Command,
    runtime: Arc<dyn ActionRuntime>,
    sources: Arc<SourceRegistry>,
}

impl DeclarativeCli {
    /// Create a CLI for the given command tree, running actions with [`EchoRuntime`]
    pub fn new(app: Command) -> Self {
        Self {
            app,
            runtime: Arc::new(EchoRuntime),
            sources: Arc::new(SourceRegistry::new()),
        }
    }

    /// Auto-detect format and create from file
    pub fn from_file(path: impl AsRef<Path>) -> DeclarativeResult<Self> {
        Ok(Self::new(Command::from_file(path)?))
    }

    /// Set the action runtime
    pub fn with_runtime(mut self, runtime: Arc<dyn ActionRuntime>) -> Self {
        self.runtime = runtime;
        self
    }

    /// Share an existing source registry
    pub fn with_sources(mut self, sources: Arc<SourceRegistry>) -> Self {
        self.sources = sources;
        self
    }

    /// The command tree this CLI dispatches over
    pub fn app(&self) -> &Command {
        &self.app
    }

    /// Registry of sources declared along dispatched paths
    pub fn sources(&self) -> &Arc<SourceRegistry> {
        &self.sources
    }

    /// Parse `args` (program name first) and run the matched action
    pub async fn dispatch<I, T>(&self, args: I) -> DeclarativeResult<Dispatch>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        self.sources.register_all(&self.app.sources);

        let mut cli = CliBuilder::new(&self.app).build()?;
        let matches = match cli.try_get_matches_from_mut(args) {
            Ok(matches) => matches,
            Err(err) => {
                return match err.kind() {
                    ErrorKind::DisplayHelp
                    | ErrorKind::DisplayVersion
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                        Ok(Dispatch::Help(err.to_string()))
                    }
                    _ => Err(DeclarativeError::usage(err.to_string())),
                };
            }
        };

        let mut names = Vec::new();
        let mut quiet = matches.get_flag(QUIET_FLAG);
        let mut leaf_matches = &matches;
        while let Some((name, sub_matches)) = leaf_matches.subcommand() {
            names.push(name.to_string());
            quiet |= sub_matches.get_flag(QUIET_FLAG);
            leaf_matches = sub_matches;
        }

        let path = route(&self.app, &names)?;
        for node in &path[1..] {
            self.sources.register_all(&node.sources);
        }
        let leaf = path[path.len() - 1];

        if leaf.action.is_none() {
            tracing::debug!(command = %leaf.name, "no action, showing help");
            let mut help_cmd = &mut cli;
            for name in &names {
                help_cmd = help_cmd
                    .find_subcommand_mut(name)
                    .ok_or_else(|| DeclarativeError::CommandNotFound(name.clone()))?;
            }
            return Ok(Dispatch::Help(help_cmd.render_long_help().to_string()));
        }

        let tokens: Vec<String> = leaf_matches
            .try_get_many::<String>(TOKENS_ARG)
            .ok()
            .flatten()
            .map(|values| values.cloned().collect())
            .unwrap_or_default();

        let ctx = resolve_context(&leaf.arguments, &leaf.flags, &tokens, leaf_matches)?;
        let request = resolve_action(leaf.action.as_ref(), ctx).ok_or_else(|| {
            DeclarativeError::config(format!("command `{}` has no action", leaf.name))
        })?;

        let format = leaf_matches
            .get_one::<String>(FORMAT_FLAG)
            .cloned()
            .unwrap_or_else(|| FORMATS[0].to_string());

        tracing::debug!(
            command = %leaf.name,
            action = %request.name,
            sources = self.sources.len(),
            "dispatching action"
        );
        let result = self.runtime.run(request.clone(), &self.sources).await?;

        Ok(Dispatch::Handled {
            request,
            result,
            quiet,
            format,
        })
    }

    /// Parse `args`, run the matched action and print its result
    pub async fn run<I, T>(&self, args: I) -> DeclarativeResult<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match self.dispatch(args).await? {
            Dispatch::Help(text) => print!("{}", text),
            Dispatch::Handled {
                result,
                quiet,
                format,
                ..
            } => {
                if !quiet {
                    let rendered = render_result(&result, &format).map_err(InvokerError::from)?;
                    println!("{}", rendered);
                }
            }
        }
        Ok(())
    }
}

/// Run a command tree against `args` on a fresh current-thread runtime
///
/// Generated programs call this from `main`.
pub fn run_blocking<I, T>(app: Command, args: I) -> DeclarativeResult<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(DeclarativeCli::new(app).run(args))
}
