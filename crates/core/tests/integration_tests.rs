//! Integration tests for menu-tree-core
//!
//! These tests drive the registry, menu builder and dispatcher together the
//! way the CLI does, with a scripted prompter in place of the terminal.

use menu_tree_core::{
    command::Command,
    config::{COMPLETION_COMMAND, HELP_COMMAND, NAME_SUGGESTIONS},
    dispatch::{run_selection, Dispatcher},
    error::{Error, Result},
    menu::MenuOption,
    prompt::Prompter,
    registry::Registry,
    suggest::suggest,
};
use std::cell::RefCell;
use std::rc::Rc;

/// Chooses the option at a fixed position of whatever menu it is shown.
struct PickByPosition {
    position: Option<usize>,
    seen: Vec<MenuOption>,
}

impl Prompter for PickByPosition {
    fn select(&mut self, _title: &str, options: &[MenuOption]) -> Result<String> {
        self.seen = options.to_vec();
        match self.position {
            Some(position) => Ok(options[position].name.clone()),
            None => Err(Error::PromptAborted),
        }
    }

    fn input(&mut self, _title: &str, _suggestions: &[&str]) -> Result<String> {
        Err(Error::PromptAborted)
    }

    fn confirm(&mut self, _title: &str) -> Result<bool> {
        Err(Error::PromptAborted)
    }
}

type Calls = Rc<RefCell<Vec<String>>>;

/// A registry with `runnable` recording commands plus the completion entry.
fn build_registry(runnable: usize, calls: &Calls) -> Registry {
    let help_calls = Rc::clone(calls);
    let mut registry = Registry::new(move |_| {
        help_calls.borrow_mut().push(HELP_COMMAND.to_string());
        Ok(())
    });

    for i in 0..runnable {
        let name = format!("cmd{i}");
        let calls = Rc::clone(calls);
        let recorded = name.clone();
        registry
            .register(
                Command::new(name, format!("Command number {i}")).action(move |_| {
                    calls.borrow_mut().push(recorded.clone());
                    Ok(())
                }),
            )
            .unwrap();
    }

    let calls = Rc::clone(calls);
    registry
        .register(
            Command::new(COMPLETION_COMMAND, "Generate a completion script").action(move |args| {
                calls.borrow_mut().push(COMPLETION_COMMAND.to_string());
                args.first()
                    .map(|_| ())
                    .ok_or_else(|| Error::missing_argument(COMPLETION_COMMAND, "shell"))
            }),
        )
        .unwrap();

    registry
}

#[test]
fn test_menu_size_matches_runnable_commands() {
    for runnable in [0, 1, 3, 12] {
        let calls = Calls::default();
        let registry = build_registry(runnable, &calls);
        let menu = Dispatcher::default().menu(&registry);

        // help is always runnable, so it is counted alongside the others
        assert_eq!(menu.len(), runnable + 1);
        assert!(menu.iter().all(|option| option.name != COMPLETION_COMMAND));
    }
}

#[test]
fn test_each_selection_runs_exactly_its_command() {
    let calls = Calls::default();
    let registry = build_registry(4, &calls);
    let menu = Dispatcher::default().menu(&registry);

    for (position, option) in menu.iter().enumerate() {
        calls.borrow_mut().clear();
        let mut prompter = PickByPosition {
            position: Some(position),
            seen: vec![],
        };

        Dispatcher::default()
            .dispatch(&registry, &mut prompter)
            .unwrap();

        assert_eq!(*calls.borrow(), vec![option.name.clone()]);
        assert_eq!(prompter.seen, menu);
    }
}

#[test]
fn test_abort_is_distinct_from_not_found() {
    let calls = Calls::default();
    let registry = build_registry(2, &calls);
    let mut prompter = PickByPosition {
        position: None,
        seen: vec![],
    };

    let aborted = Dispatcher::default().dispatch(&registry, &mut prompter);
    let missing = run_selection(&registry, "cmd99");

    assert!(matches!(aborted, Err(Error::PromptAborted)));
    assert!(matches!(missing, Err(Error::CommandNotFound(ref name)) if name == "cmd99"));
    assert_ne!(
        aborted.unwrap_err().to_string(),
        missing.unwrap_err().to_string()
    );
    assert!(calls.borrow().is_empty());
}

#[test]
fn test_not_found_message_names_the_command() {
    let calls = Calls::default();
    let registry = build_registry(0, &calls);

    let error = run_selection(&registry, "ghost").unwrap_err();
    assert_eq!(error.to_string(), "command ghost not found");
}

#[test]
fn test_reserved_entry_still_runs_when_named_directly() {
    let calls = Calls::default();
    let registry = build_registry(0, &calls);

    let result = registry
        .get(COMPLETION_COMMAND)
        .unwrap()
        .run(&["bash".to_string()]);

    assert!(result.is_ok());
    assert_eq!(*calls.borrow(), vec![COMPLETION_COMMAND]);
}

#[test]
fn test_reserved_entry_without_argument_fails() {
    let calls = Calls::default();
    let registry = build_registry(0, &calls);

    let result = run_selection(&registry, COMPLETION_COMMAND);
    assert!(matches!(result, Err(Error::MissingArgument { .. })));
}

#[test]
fn test_labels_align_descriptions() {
    let mut registry = Registry::new(|_| Ok(()));
    registry
        .register(Command::new("a", "short name").action(|_| Ok(())))
        .unwrap();
    registry
        .register(Command::new("much-longer", "long name").action(|_| Ok(())))
        .unwrap();

    let menu = Dispatcher::default().menu(&registry);
    let separator_columns: Vec<usize> = menu
        .iter()
        .map(|option| option.label.find(" -- ").unwrap())
        .collect();

    assert!(separator_columns.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(separator_columns[0], "much-longer".len());
}

#[test]
fn test_name_suggestions() {
    assert_eq!(suggest(&NAME_SUGGESTIONS, "B"), vec!["Ben", "Bob"]);
}
