//! Command-line argument parsing.
//!
//! This module defines the command-line interface structure using the `clap`
//! crate. The subcommand list declared here is also what the interactive menu
//! is built from.

use clap::{Parser, Subcommand};
use clap_complete::engine::ArgValueCompleter;
use clap_complete::Shell;
use menu_tree_core::config::{BIN_NAME, ROOT_SHORT};

use crate::commands::completion::{complete_choice, complete_name};

/// Command-line arguments for the `menutree` binary.
///
/// Without a subcommand the interactive menu is shown.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use menu_tree_cli::cli_args::{Args, Commands};
///
/// let args = Args::parse_from(["menutree", "input", "Bob"]);
/// assert!(matches!(args.command, Some(Commands::Input { name: Some(_) })));
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(name = BIN_NAME, about = ROOT_SHORT, term_width = 0)]
pub struct Args {
    /// The subcommand to run directly, bypassing the menu.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Input your name and write it to stdout
    Input {
        /// Name to print. Prompted for when omitted.
        #[arg(value_name = "NAME", add = ArgValueCompleter::new(complete_name))]
        name: Option<String>,
    },

    /// Confirm something yes or no
    Confirm {
        /// `true` or `false`. Prompted for when omitted.
        #[arg(value_name = "CHOICE", add = ArgValueCompleter::new(complete_choice))]
        choice: Option<String>,
    },

    /// Generate the autocompletion script for the specified shell
    Completion {
        /// Shell to generate the script for.
        #[arg(value_enum)]
        shell: Shell,
    },
}
