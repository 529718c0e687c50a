use std::io::stdout;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::CompleteEnv;
use log::debug;
use menu_tree_core::config::COMPLETE_ENV_VAR;
use menu_tree_core::dispatch::Dispatcher;
use menu_tree_core::error::Result;

use menu_tree_cli::cli_args::Args;
use menu_tree_cli::commands::{build_registry, run_direct};
use menu_tree_cli::prompt::TerminalPrompter;

fn execute() -> Result<()> {
    let args = Args::parse();
    let mut prompter = TerminalPrompter;

    match args.command {
        Some(command) => {
            debug!("Running {command:?} directly");
            run_direct(command, &mut prompter, &mut stdout())
        }
        None => {
            let registry = build_registry()?;
            Dispatcher::default().dispatch(&registry, &mut prompter)
        }
    }
}

fn main() -> ExitCode {
    // Answers `COMPLETE=<shell> menutree ...` requests and exits.
    CompleteEnv::with_factory(Args::command)
        .var(COMPLETE_ENV_VAR)
        .complete();

    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
