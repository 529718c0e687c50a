//! Interactive terminal prompts.
//!
//! This module provides the terminal implementation of [`Prompter`]: the
//! full-screen subcommand menu, the single-line text input and the yes/no
//! confirmation.
//!
//! # User Interface
//!
//! The menu supports:
//! - Arrow keys or vim-style (j/k) navigation, and the mouse wheel
//! - Enter or a click to select an option
//! - '/' to filter options (fuzzy search)
//! - 'q', Escape or Ctrl-C to abort
//!
//! The text input shows the first matching suggestion greyed out after the
//! cursor; Tab accepts it.

use std::io::stdout;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use log::debug;
use menu_tree_core::error::{Error, Result};
use menu_tree_core::menu::MenuOption;
use menu_tree_core::prompt::Prompter;

pub mod input;
pub mod select;
pub mod types;

pub use types::SelectChoice;

/// Holds the terminal in raw mode until dropped.
pub(crate) struct RawModeGuard {
    alternate_screen: bool,
}

impl RawModeGuard {
    /// Enables raw mode, and the alternate screen with mouse capture if asked.
    pub(crate) fn enter(alternate_screen: bool) -> Result<Self> {
        // Created first so a failure below still restores the terminal.
        let guard = Self { alternate_screen };

        let mut stdout = stdout();
        if alternate_screen {
            stdout.execute(EnterAlternateScreen)?;
        }
        enable_raw_mode()?;
        if alternate_screen {
            stdout.execute(EnableMouseCapture)?;
        }
        Ok(guard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        if self.alternate_screen {
            let mut stdout = stdout();
            let _ = stdout.execute(DisableMouseCapture);
            let _ = stdout.execute(LeaveAlternateScreen);
        }
    }
}

/// [`Prompter`] backed by the controlling terminal.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn select(&mut self, title: &str, options: &[MenuOption]) -> Result<String> {
        let choice = select::prompt_for_selection(title, options)?;
        chosen_name(choice, options)
    }

    fn input(&mut self, title: &str, suggestions: &[&str]) -> Result<String> {
        input::prompt_text(title, suggestions)
    }

    fn confirm(&mut self, title: &str) -> Result<bool> {
        input::confirm(title)
    }
}

/// The command name behind a menu choice.
fn chosen_name(choice: SelectChoice, options: &[MenuOption]) -> Result<String> {
    match choice {
        SelectChoice::Index(i) => {
            let option = options
                .get(i)
                .ok_or_else(|| Error::CommandNotFound(format!("#{}", i + 1)))?;
            debug!("Menu returned option {i}: `{}`", option.name);
            Ok(option.name.clone())
        }
        SelectChoice::Quit => Err(Error::PromptAborted),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<MenuOption> {
        ["help", "input", "confirm"]
            .into_iter()
            .map(|name| MenuOption {
                label: format!("{name} -- about {name}"),
                name: name.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_chosen_name_returns_command_name() {
        assert_eq!(chosen_name(SelectChoice::Index(1), &options()).unwrap(), "input");
        assert_eq!(chosen_name(SelectChoice::Index(2), &options()).unwrap(), "confirm");
    }

    #[test]
    fn test_chosen_name_out_of_range() {
        let result = chosen_name(SelectChoice::Index(3), &options());
        assert!(matches!(result, Err(Error::CommandNotFound(ref n)) if n == "#4"));
    }

    #[test]
    fn test_chosen_name_quit_aborts() {
        assert!(matches!(
            chosen_name(SelectChoice::Quit, &options()),
            Err(Error::PromptAborted)
        ));
    }
}
