//! Menu Tree CLI Library
//!
//! This crate provides the command-line interface for menu-tree: argument
//! parsing, the leaf commands, and the terminal prompts behind the
//! interactive menu.
//!
//! # Key Features
//!
//! - **Interactive Menu**: Full-screen list of every runnable subcommand
//! - **Direct Invocation**: Any subcommand can take its value as an argument
//! - **Prompt Fallback**: A missing value is asked for interactively
//! - **Shell Completion**: Registration scripts that ask the binary for argument candidates
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing
//! - [`commands`]: The leaf commands and the registry built from them
//! - [`prompt`]: Terminal implementation of the prompt interface
//!
//! # Examples
//!
//! The CLI binary (`menutree`) can be used in several ways:
//!
//! ```bash
//! # Interactive mode - shows the subcommand menu
//! menutree
//!
//! # Run a subcommand, prompting for its value
//! menutree input
//!
//! # Run a subcommand with its value
//! menutree confirm true
//!
//! # Install completions (the script asks `menutree` for candidates,
//! # so `menutree input B<TAB>` offers Ben and Bob)
//! menutree completion bash > ~/.local/share/bash-completion/completions/menutree
//!
//! # Or register them for the current shell only
//! source <(COMPLETE=bash menutree)
//! ```

pub mod cli_args;
pub mod commands;
pub mod prompt;
