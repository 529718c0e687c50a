//! Menu construction from a list of commands.
//!
//! Building a menu has no side effects: the same commands and exclusion
//! predicate always give the same options in the same order.

use std::fmt::{Display, Formatter};

use crate::command::Command;
use crate::config::{COMPLETION_COMMAND, LABEL_SEPARATOR};

/// One selectable line of the menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuOption {
    /// Text shown to the user.
    pub label: String,
    /// Name of the command the label stands for.
    pub name: String,
}

impl Display for MenuOption {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.label)
    }
}

/// Default exclusion predicate: the completion entry needs an argument the
/// menu cannot supply.
pub fn is_reserved(command: &Command) -> bool {
    command.name() == COMPLETION_COMMAND
}

/// Builds the menu options for every command not matched by `exclude`.
///
/// Names are padded to the width of the longest included name so the
/// descriptions line up.
pub fn build_menu<'a, I, P>(commands: I, exclude: P) -> Vec<MenuOption>
where
    I: IntoIterator<Item = &'a Command>,
    P: Fn(&Command) -> bool,
{
    let included: Vec<&Command> = commands
        .into_iter()
        .filter(|command| !exclude(*command))
        .collect();

    let width = included
        .iter()
        .map(|command| command.name().chars().count())
        .max()
        .unwrap_or(0);

    included
        .into_iter()
        .map(|command| MenuOption {
            label: format!(
                "{:<width$}{LABEL_SEPARATOR}{}",
                command.name(),
                command.short()
            ),
            name: command.name().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commands() -> Vec<Command> {
        vec![
            Command::new("help", "Help about any command"),
            Command::new("input", "Input your name and write it to stdout"),
            Command::new("confirm", "Confirm something yes or no"),
            Command::new("completion", "Generate the autocompletion script"),
        ]
    }

    #[test]
    fn test_build_menu_excludes_reserved() {
        let commands = commands();
        let menu = build_menu(&commands, is_reserved);

        let names: Vec<&str> = menu.iter().map(|option| option.name.as_str()).collect();
        assert_eq!(names, vec!["help", "input", "confirm"]);
    }

    #[test]
    fn test_build_menu_pads_to_longest_included_name() {
        let commands = commands();
        let menu = build_menu(&commands, is_reserved);

        // `completion` is excluded, so `confirm` sets the width.
        assert_eq!(menu[0].label, "help    -- Help about any command");
        assert_eq!(menu[1].label, "input   -- Input your name and write it to stdout");
        assert_eq!(menu[2].label, "confirm -- Confirm something yes or no");
    }

    #[test]
    fn test_build_menu_without_exclusions() {
        let commands = commands();
        let menu = build_menu(&commands, |_| false);

        assert_eq!(menu.len(), 4);
        assert_eq!(menu[3].name, "completion");
        assert!(menu[0].label.starts_with("help       -- "));
    }

    #[test]
    fn test_build_menu_everything_excluded() {
        let commands = commands();
        let menu = build_menu(&commands, |_| true);
        assert!(menu.is_empty());
    }

    #[test]
    fn test_build_menu_is_repeatable() {
        let commands = commands();
        assert_eq!(
            build_menu(&commands, is_reserved),
            build_menu(&commands, is_reserved)
        );
    }

    #[test]
    fn test_menu_option_display() {
        let option = MenuOption {
            label: "input -- Input".to_string(),
            name: "input".to_string(),
        };
        assert_eq!(option.to_string(), "input -- Input");
    }
}
