//! Ordered registry of commands.
//!
//! Commands keep their declaration order for menus, while lookups by name go
//! through the underlying [`IndexMap`].

use indexmap::IndexMap;
use log::debug;

use crate::command::Command;
use crate::config::{HELP_COMMAND, HELP_SHORT};
use crate::error::Error::{EmptyName, NameWithSpace, NonUniqueCommandName};
use crate::error::Result;

#[derive(Debug)]
pub struct Registry {
    commands: IndexMap<String, Command>,
}

fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(EmptyName);
    }

    if name.chars().any(char::is_whitespace) {
        return Err(NameWithSpace(name.to_string()));
    }

    Ok(())
}

impl Registry {
    /// Creates a registry holding only the built-in `help` entry, which runs `help`.
    pub fn new<F>(help: F) -> Self
    where
        F: Fn(&[String]) -> Result<()> + 'static,
    {
        let help_command = Command::new(HELP_COMMAND, HELP_SHORT).action(help);
        let mut commands = IndexMap::new();
        commands.insert(HELP_COMMAND.to_string(), help_command);

        Self { commands }
    }

    /// Appends a command after every command registered so far.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty, contains whitespace, or is
    /// already registered. The registry is left unchanged in that case.
    pub fn register(&mut self, command: Command) -> Result<()> {
        validate_name(command.name())?;

        if self.commands.contains_key(command.name()) {
            return Err(NonUniqueCommandName(command.name().to_string()));
        }

        debug!("Registering command {command}");
        self.commands.insert(command.name().to_string(), command);
        Ok(())
    }

    /// Iterates over every command in registration order.
    pub fn commands(&self) -> impl Iterator<Item = &Command> + Clone {
        self.commands.values()
    }

    pub fn get(&self, name: &str) -> Option<&Command> {
        self.commands.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
