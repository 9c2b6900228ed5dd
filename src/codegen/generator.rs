//! Program generator - turns a command tree into the source of a standalone
//! program that rebuilds the same tree as a literal and dispatches it.

use super::emitter::{string_literal, Expr, Printer};
use crate::cli::declarative::{ActionRef, Argument, Command};

/// Struct literal for one argument or flag
pub fn argument_expr(arg: &Argument) -> Expr {
    Expr::Struct {
        path: "Argument".to_string(),
        fields: vec![
            ("name".to_string(), Expr::string(&arg.name)),
            ("push".to_string(), Expr::string(&arg.push)),
            ("value".to_string(), Expr::string(&arg.value)),
            ("required".to_string(), Expr::Bool(arg.required)),
            ("description".to_string(), Expr::string(&arg.description)),
        ],
    }
}

/// Ordered `vec![..]` of argument literals
pub fn arguments_expr(args: &[Argument]) -> Expr {
    Expr::Vec(args.iter().map(argument_expr).collect())
}

/// `Option<ActionRef>` literal
pub fn action_expr(action: Option<&ActionRef>) -> Expr {
    match action {
        None => Expr::None,
        Some(ActionRef::Bare(name)) => {
            Expr::some(Expr::call("ActionRef::Bare", vec![Expr::string(name)]))
        }
        Some(ActionRef::Named { name, ctx }) => {
            let ctx = match ctx {
                None => Expr::None,
                Some(seed) => Expr::some(Expr::context(seed)),
            };
            Expr::some(Expr::Struct {
                path: "ActionRef::Named".to_string(),
                fields: vec![("name".to_string(), Expr::string(name)), ("ctx".to_string(), ctx)],
            })
        }
    }
}

/// `vec![..]` of source location strings
fn sources_expr(sources: &[String]) -> Expr {
    Expr::Vec(sources.iter().map(Expr::string).collect())
}

/// Struct literal for a command and, recursively, its subcommands
pub fn command_expr(command: &Command) -> Expr {
    Expr::Struct {
        path: "Command".to_string(),
        fields: vec![
            ("name".to_string(), Expr::string(&command.name)),
            ("usage".to_string(), Expr::string(&command.usage)),
            ("example".to_string(), Expr::string(&command.example)),
            ("description".to_string(), Expr::string(&command.description)),
            ("action".to_string(), action_expr(command.action.as_ref())),
            ("sources".to_string(), sources_expr(&command.sources)),
            ("flags".to_string(), arguments_expr(&command.flags)),
            ("arguments".to_string(), arguments_expr(&command.arguments)),
            (
                "commands".to_string(),
                Expr::Vec(command.commands.iter().map(command_expr).collect()),
            ),
        ],
    }
}

/// Complete `main.rs` source for a standalone program running `app`
pub fn generate_program(app: &Command) -> String {
    let printer = Printer::default();
    let literal = printer.render(&command_expr(app));

    format!(
        r#"// Generated by app-build. Do not edit.
#![allow(unused_imports)]

use actions_cli::{{ActionRef, Argument, Command, Context}};
use actions_cli::serde_json::Value;

const APP_NAME: &str = {name};

fn app() -> Command {{
    {literal}
}}

fn main() {{
    actions_cli::observability::init_from_env("warn");

    if let Err(err) = actions_cli::run_blocking(app(), std::env::args()) {{
        eprintln!("{{}}: {{}}", APP_NAME, err);
        std::process::exit(1);
    }}
}}
"#,
        name = string_literal(&app.name),
        literal = printer.indent_tail(&literal),
    )
}
