//! Print help for the root command or one of its subcommands.

use std::io::Write;

use clap::CommandFactory;
use menu_tree_core::error::{Error, Result};

use crate::cli_args::Args;

/// Writes the long help of the subcommand named by the first argument, or of
/// the root command when there is none.
pub fn run(topic: &[String], out: &mut dyn Write) -> Result<()> {
    let mut command = Args::command();

    let help = match topic.first() {
        None => command.render_long_help(),
        Some(name) => command
            .find_subcommand_mut(name)
            .ok_or_else(|| Error::CommandNotFound(name.clone()))?
            .render_long_help(),
    };

    write!(out, "{help}")?;
    out.flush()?;
    Ok(())
}
