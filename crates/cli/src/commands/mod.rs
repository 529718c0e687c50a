//! Leaf commands and the registry built from them.
//!
//! Each command lives in its own file and exposes a `run()` function taking
//! its optional argument, a [`Prompter`] and an output stream. The registry
//! is built by walking the subcommands declared on [`Args`], so the menu
//! always matches what can be typed on the command line.

use std::io::{stdout, Write};

use clap::CommandFactory;
use log::debug;
use menu_tree_core::command::Command;
use menu_tree_core::config::{COMPLETION_COMMAND, HELP_COMMAND};
use menu_tree_core::error::{Error, Result};
use menu_tree_core::prompt::Prompter;
use menu_tree_core::registry::Registry;

use crate::cli_args::{Args, Commands};
use crate::prompt::TerminalPrompter;

pub mod completion;
pub mod confirm;
pub mod help;
pub mod input;

/// Runs a subcommand given on the command line.
pub fn run_direct(command: Commands, prompter: &mut dyn Prompter, out: &mut dyn Write) -> Result<()> {
    match command {
        Commands::Input { name } => input::run(name.as_deref(), prompter, out),
        Commands::Confirm { choice } => confirm::run(choice.as_deref(), prompter, out),
        Commands::Completion { shell } => completion::run(shell, out),
    }
}

fn input_action(args: &[String]) -> Result<()> {
    input::run(
        args.first().map(String::as_str),
        &mut TerminalPrompter::default(),
        &mut stdout(),
    )
}

fn confirm_action(args: &[String]) -> Result<()> {
    confirm::run(
        args.first().map(String::as_str),
        &mut TerminalPrompter::default(),
        &mut stdout(),
    )
}

fn completion_action(args: &[String]) -> Result<()> {
    let shell = args
        .first()
        .ok_or_else(|| Error::missing_argument(COMPLETION_COMMAND, "SHELL"))?;
    completion::run(completion::parse_shell(shell)?, &mut stdout())
}

fn help_action(args: &[String]) -> Result<()> {
    help::run(args, &mut stdout())
}

/// The action registered for a subcommand name, if it has one.
fn action_for(name: &str) -> Option<fn(&[String]) -> Result<()>> {
    match name {
        "input" => Some(input_action),
        "confirm" => Some(confirm_action),
        COMPLETION_COMMAND => Some(completion_action),
        _ => None,
    }
}

/// Builds the registry from the subcommands declared on [`Args`].
///
/// # Errors
///
/// Returns an error if two subcommands share a name.
pub fn build_registry() -> Result<Registry> {
    let mut registry = Registry::new(help_action);

    for subcommand in Args::command().get_subcommands() {
        let name = subcommand.get_name();
        if name == HELP_COMMAND {
            continue;
        }

        let short = subcommand
            .get_about()
            .map(ToString::to_string)
            .unwrap_or_default();

        let mut command = Command::new(name, short);
        match action_for(name) {
            Some(action) => command = command.action(action),
            None => debug!("Subcommand `{name}` has no action"),
        }

        registry.register(command)?;
    }

    Ok(registry)
}
