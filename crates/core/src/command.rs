use std::fmt::{Debug, Display, Formatter};

use crate::error::{Error, Result};

/// The single calling convention shared by every registered command.
///
/// An action receives the positional arguments it was invoked with; the menu
/// always invokes it with an empty slice.
pub type Action = Box<dyn Fn(&[String]) -> Result<()>>;

/// A named, described entry in a [`Registry`](crate::registry::Registry).
pub struct Command {
    name: String,
    short: String,
    action: Option<Action>,
}

impl Command {
    /// Creates a command with no action attached.
    pub fn new(name: impl Into<String>, short: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            short: short.into(),
            action: None,
        }
    }

    /// Attaches the action run when this command is selected or invoked.
    #[must_use]
    pub fn action<F>(mut self, action: F) -> Self
    where
        F: Fn(&[String]) -> Result<()> + 'static,
    {
        self.action = Some(Box::new(action));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn short(&self) -> &str {
        &self.short
    }

    pub fn is_runnable(&self) -> bool {
        self.action.is_some()
    }

    /// Runs the action with the given arguments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoAction`] if no action is attached, otherwise whatever
    /// the action itself returns.
    pub fn run(&self, args: &[String]) -> Result<()> {
        match &self.action {
            Some(action) => action(args),
            None => Err(Error::NoAction(self.name.clone())),
        }
    }
}

impl Debug for Command {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("short", &self.short)
            .field("runnable", &self.is_runnable())
            .finish()
    }
}

impl Display for Command {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        if self.short.is_empty() {
            formatter.write_str(&self.name)
        } else {
            write!(formatter, "{} ({})", self.name, self.short)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_command_without_action_is_not_runnable() {
        let command = Command::new("noop", "Does nothing");
        assert!(!command.is_runnable());
        assert!(matches!(command.run(&[]), Err(Error::NoAction(name)) if name == "noop"));
    }

    #[test]
    fn test_command_run_passes_arguments() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_in_action = Rc::clone(&seen);
        let command = Command::new("echo", "Echo").action(move |args| {
            seen_in_action.borrow_mut().extend_from_slice(args);
            Ok(())
        });

        assert!(command.is_runnable());
        command.run(&["a".to_string(), "b".to_string()]).unwrap();
        assert_eq!(*seen.borrow(), vec!["a", "b"]);
    }

    #[test]
    fn test_command_run_propagates_action_error() {
        let command = Command::new("fail", "Always fails").action(|_| Err(Error::PromptAborted));
        assert!(matches!(command.run(&[]), Err(Error::PromptAborted)));
    }

    #[test]
    fn test_command_display() {
        assert_eq!(
            Command::new("input", "Input your name").to_string(),
            "input (Input your name)"
        );
        assert_eq!(Command::new("bare", "").to_string(), "bare");
    }

    #[test]
    fn test_command_debug_hides_action() {
        let command = Command::new("x", "y").action(|_| Ok(()));
        let debug = format!("{command:?}");
        assert!(debug.contains("runnable: true"));
    }
}
