//! Interactive dispatch: turn a registry into a menu and run the choice.

use log::{debug, info};

use crate::command::Command;
use crate::config::MENU_TITLE;
use crate::error::{Error, Result};
use crate::menu::{build_menu, is_reserved, MenuOption};
use crate::prompt::Prompter;
use crate::registry::Registry;

/// Builds the menu, asks for a selection and runs the selected command.
pub struct Dispatcher {
    exclude: fn(&Command) -> bool,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self { exclude: is_reserved }
    }
}

impl Dispatcher {
    #[must_use]
    pub fn with_exclusion(mut self, exclude: fn(&Command) -> bool) -> Self {
        self.exclude = exclude;
        self
    }

    /// The options this dispatcher would offer for `registry`.
    pub fn menu(&self, registry: &Registry) -> Vec<MenuOption> {
        build_menu(registry.commands(), self.exclude)
    }

    /// Prompts for a command and runs it with no arguments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyMenu`] if nothing can be offered, any error from
    /// the prompt (such as [`Error::PromptAborted`]), the lookup errors of
    /// [`run_selection`], or the error returned by the selected action.
    pub fn dispatch(&self, registry: &Registry, prompter: &mut dyn Prompter) -> Result<()> {
        let options = self.menu(registry);
        if options.is_empty() {
            return Err(Error::EmptyMenu);
        }
        debug!("Offering {} of {} commands", options.len(), registry.len());

        let selection = prompter.select(MENU_TITLE, &options)?;
        debug!("Selected `{selection}`");

        run_selection(registry, &selection)
    }
}

/// Runs the command named `selection` with an empty argument list.
///
/// # Errors
///
/// Returns [`Error::CommandNotFound`] if no command has that name,
/// [`Error::NoAction`] if it has no action, otherwise the action's result.
pub fn run_selection(registry: &Registry, selection: &str) -> Result<()> {
    let command = registry
        .get(selection)
        .ok_or_else(|| Error::CommandNotFound(selection.to_string()))?;

    if !command.is_runnable() {
        return Err(Error::NoAction(selection.to_string()));
    }

    info!("Running {command}");
    command.run(&[])
}
