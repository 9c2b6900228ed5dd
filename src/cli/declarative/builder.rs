//! CLI builder - converts a command tree to a clap Command

use super::config::{Argument, Command};
use super::error::{DeclarativeError, DeclarativeResult};
use clap::{Arg, ArgAction};
use std::collections::HashSet;

/// Id of the built-in output format flag
pub const FORMAT_FLAG: &str = "format";

/// Id of the built-in quiet flag
pub const QUIET_FLAG: &str = "q";

/// Id under which positional tokens are collected
pub const TOKENS_ARG: &str = "__tokens";

/// Output formats accepted by `--format`
pub const FORMATS: [&str; 2] = ["table", "json"];

const RESERVED_FLAGS: [&str; 5] = [FORMAT_FLAG, QUIET_FLAG, "help", "h", TOKENS_ARG];

/// Builds a clap Command tree from a declarative command tree
pub struct CliBuilder<'a> {
    app: &'a Command,
}

impl<'a> CliBuilder<'a> {
    /// Create a new builder for the given root command
    pub fn new(app: &'a Command) -> Self {
        Self { app }
    }

    /// Build the clap Command
    pub fn build(&self) -> DeclarativeResult<clap::Command> {
        Self::build_command(self.app)
    }

    /// Build a command (including subcommands)
    fn build_command(config: &Command) -> DeclarativeResult<clap::Command> {
        let mut cmd = clap::Command::new(config.name.clone())
            .override_usage(config.usage_line())
            .about(config.description.clone())
            .long_about(config.long_description())
            .infer_subcommands(false)
            .disable_help_subcommand(true)
            .arg(
                Arg::new(FORMAT_FLAG)
                    .long(FORMAT_FLAG)
                    .help("result display format")
                    .value_parser(FORMATS)
                    .default_value(FORMATS[0]),
            )
            .arg(
                Arg::new(QUIET_FLAG)
                    .short('q')
                    .help("only print error and warning messages, all other output will be suppressed")
                    .action(ArgAction::SetTrue),
            );

        let mut seen = HashSet::new();
        for flag in &config.flags {
            if RESERVED_FLAGS.contains(&flag.name.as_str()) {
                return Err(DeclarativeError::config(format!(
                    "command `{}` declares reserved flag `{}`",
                    config.name, flag.name
                )));
            }
            if !seen.insert(flag.name.as_str()) {
                return Err(DeclarativeError::config(format!(
                    "command `{}` declares flag `{}` twice",
                    config.name, flag.name
                )));
            }
            if !is_valid_flag_name(&flag.name) {
                return Err(DeclarativeError::config(format!(
                    "command `{}` declares invalid flag name `{}`",
                    config.name, flag.name
                )));
            }
            cmd = cmd.arg(Self::build_flag(flag)?);
        }

        if config.is_runnable() {
            cmd = cmd.arg(
                Arg::new(TOKENS_ARG)
                    .value_name("ARGS")
                    .num_args(0..)
                    .trailing_var_arg(true)
                    .action(ArgAction::Append),
            );
        } else if config.is_group() {
            cmd = cmd.subcommand_required(true).arg_required_else_help(true);
        }

        let mut children = HashSet::new();
        for sub_config in &config.commands {
            if !children.insert(sub_config.name.as_str()) {
                return Err(DeclarativeError::config(format!(
                    "command `{}` declares subcommand `{}` twice",
                    config.name, sub_config.name
                )));
            }
            cmd = cmd.subcommand(Self::build_command(sub_config)?);
        }

        Ok(cmd)
    }

    /// Build a single string-valued flag
    fn build_flag(flag: &Argument) -> DeclarativeResult<Arg> {
        let mut chars = flag.name.chars();
        let mut arg = match (chars.next(), chars.next()) {
            (None, _) => {
                return Err(DeclarativeError::config("flag without a name"));
            }
            (Some(short), None) => Arg::new(flag.name.clone()).short(short),
            _ => Arg::new(flag.name.clone()).long(flag.name.clone()),
        };

        arg = arg
            .help(flag.description.clone())
            .value_name(flag.push_name().to_uppercase())
            .action(ArgAction::Set);

        // Shown in help only; resolution ignores defaulted values.
        if !flag.value.is_empty() {
            arg = arg.default_value(flag.value.clone());
        }

        Ok(arg)
    }
}

/// Flag names end up as `--name` or `-n`; a leading dash, `=` or
/// whitespace cannot be typed back unambiguously.
fn is_valid_flag_name(name: &str) -> bool {
    !name.starts_with('-') && !name.contains(|c: char| c == '=' || c.is_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::declarative::config::ActionRef;

    fn runnable(name: &str) -> Command {
        let mut cmd = Command::new(name);
        cmd.action = Some(ActionRef::Bare(format!("{name}.run")));
        cmd
    }

    #[test]
    fn test_build_minimal_cli() {
        let app = Command::new("test");
        let cmd = CliBuilder::new(&app).build().unwrap();

        assert_eq!(cmd.get_name(), "test");
        let ids: Vec<&str> = cmd.get_arguments().map(|a| a.get_id().as_str()).collect();
        assert!(ids.contains(&FORMAT_FLAG));
        assert!(ids.contains(&QUIET_FLAG));
        assert!(!ids.contains(&TOKENS_ARG));
    }

    #[test]
    fn test_build_nested_subcommands() {
        let mut app = Command::new("tool");
        let mut net = Command::new("net");
        net.commands.push(runnable("get"));
        app.commands.push(net);

        let cmd = CliBuilder::new(&app).build().unwrap();
        let net = cmd.find_subcommand("net").unwrap();
        let get = net.find_subcommand("get").unwrap();
        assert!(get.get_arguments().any(|a| a.get_id() == TOKENS_ARG));
        assert!(get.get_arguments().any(|a| a.get_id() == FORMAT_FLAG));
    }

    #[test]
    fn test_declared_flags() {
        let mut app = runnable("paint");
        app.flags = vec![
            Argument::new("color").with_default("blue").with_description("Paint color"),
            Argument::new("v"),
        ];

        let cmd = CliBuilder::new(&app).build().unwrap();
        let color = cmd.get_arguments().find(|a| a.get_id() == "color").unwrap();
        assert_eq!(color.get_long(), Some("color"));
        let defaults: Vec<String> = color
            .get_default_values()
            .iter()
            .map(|v| v.to_string_lossy().into_owned())
            .collect();
        assert_eq!(defaults, vec!["blue"]);

        let v = cmd.get_arguments().find(|a| a.get_id() == "v").unwrap();
        assert_eq!(v.get_short(), Some('v'));
    }

    #[test]
    fn test_reserved_flag_rejected() {
        let mut app = runnable("x");
        app.flags = vec![Argument::new("format")];
        assert!(matches!(
            CliBuilder::new(&app).build(),
            Err(DeclarativeError::ConfigError(_))
        ));
    }

    #[test]
    fn test_duplicate_flag_rejected() {
        let mut app = runnable("x");
        app.flags = vec![Argument::new("color"), Argument::new("color")];
        assert!(CliBuilder::new(&app).build().is_err());
    }

    #[test]
    fn test_invalid_flag_names_rejected() {
        for name in ["--verbose", "-", "-v", "a=b", "two words"] {
            let mut app = runnable("x");
            app.flags = vec![Argument::new(name)];
            assert!(
                matches!(CliBuilder::new(&app).build(), Err(DeclarativeError::ConfigError(_))),
                "flag name {:?} was accepted",
                name
            );
        }
    }

    #[test]
    fn test_duplicate_subcommand_rejected() {
        let mut app = Command::new("t");
        app.commands = vec![runnable("a"), runnable("a")];
        let err = CliBuilder::new(&app).build().unwrap_err();
        assert!(matches!(err, DeclarativeError::ConfigError(_)));
        assert!(err.to_string().contains("subcommand `a` twice"));

        let mut nested = Command::new("t");
        let mut group = Command::new("g");
        group.commands = vec![runnable("b"), runnable("b")];
        nested.commands.push(group);
        assert!(CliBuilder::new(&nested).build().is_err());
    }

    #[test]
    fn test_usage_and_long_help() {
        let mut app = runnable("greet");
        app.description = "Say hello".to_string();
        app.arguments = vec![Argument::new("name")];
        app.example = "greet Ada".to_string();

        let mut cmd = CliBuilder::new(&app).build().unwrap();
        let help = cmd.render_long_help().to_string();
        assert!(help.contains("greet {name}"));
        assert!(help.contains("example:"));
        assert!(help.contains("$ greet Ada"));
    }

    #[test]
    fn test_group_requires_subcommand() {
        let mut app = Command::new("tool");
        app.commands.push(runnable("run"));

        let cmd = CliBuilder::new(&app).build().unwrap();
        let err = cmd.try_get_matches_from(["tool"]).unwrap_err();
        assert_eq!(
            err.kind(),
            clap::error::ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        );
    }

    #[test]
    fn test_no_prefix_matching() {
        let mut app = Command::new("tool");
        app.commands.push(runnable("greet"));

        let cmd = CliBuilder::new(&app).build().unwrap();
        assert!(cmd.try_get_matches_from(["tool", "gre"]).is_err());
    }

    #[test]
    fn test_tokens_after_first_positional_are_not_flags() {
        let mut app = runnable("echo");
        app.flags = vec![Argument::new("color")];

        let cmd = CliBuilder::new(&app).build().unwrap();
        let matches = cmd
            .try_get_matches_from(["echo", "--color", "red", "a", "--b"])
            .unwrap();
        let tokens: Vec<&String> = matches.get_many::<String>(TOKENS_ARG).unwrap().collect();
        assert_eq!(tokens, vec!["a", "--b"]);
        assert_eq!(matches.get_one::<String>("color").map(String::as_str), Some("red"));
    }
}
