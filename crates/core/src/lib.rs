//! Menu Tree Core Library
//!
//! This crate provides the core of menu-tree, a command-line tool that either
//! runs a subcommand directly or, when invoked without one, offers every
//! runnable subcommand in a menu and runs the user's choice.
//!
//! # Key Features
//!
//! - **Command Registry**: Ordered, name-unique collection of commands with O(1) lookup
//! - **Menu Building**: Pure conversion of commands into aligned menu options
//! - **Interactive Dispatch**: Prompt for a selection and run the matching action
//! - **Completion Suggestions**: Case-sensitive prefix filtering of argument values
//! - **Error Handling**: One error type for every failure the tool can report
//!
//! # Examples
//!
//! Building a registry and the menu it produces:
//!
//! ```
//! use menu_tree_core::command::Command;
//! use menu_tree_core::dispatch::Dispatcher;
//! use menu_tree_core::registry::Registry;
//!
//! let mut registry = Registry::new(|_| Ok(()));
//! registry.register(Command::new("input", "Input your name").action(|_| Ok(())))?;
//! registry.register(Command::new("completion", "Generate a completion script"))?;
//!
//! let menu = Dispatcher::default().menu(&registry);
//! let names: Vec<&str> = menu.iter().map(|option| option.name.as_str()).collect();
//! assert_eq!(names, ["help", "input"]);
//! # Ok::<(), menu_tree_core::error::Error>(())
//! ```

pub mod command;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod menu;
pub mod prompt;
pub mod registry;
pub mod suggest;
pub mod values;
