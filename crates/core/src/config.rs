//! Fixed names, titles and suggestion lists for menu-tree.
//!
//! The tool reads no configuration file; everything that would otherwise be
//! configurable lives here as a constant so the CLI and its tests agree.

/// Name the binary must be installed as for shell completion to work.
pub const BIN_NAME: &str = "menutree";

/// One-line description of the root command.
pub const ROOT_SHORT: &str = "Pick a subcommand from a menu, or run one directly";

/// Name of the built-in help entry present in every registry.
pub const HELP_COMMAND: &str = "help";

/// Short description of the built-in help entry.
pub const HELP_SHORT: &str = "Help about any command";

/// Name of the completion-script entry, which is never offered in the menu.
pub const COMPLETION_COMMAND: &str = "completion";

/// Environment variable through which a shell asks the binary for candidates.
pub const COMPLETE_ENV_VAR: &str = "COMPLETE";

/// Separator between a command name and its description in a menu label.
pub const LABEL_SEPARATOR: &str = " -- ";

/// Title of the subcommand selection menu.
pub const MENU_TITLE: &str = "Which subcommand do you want to run?";

/// Title of the name input prompt.
pub const NAME_TITLE: &str = "What's your name?";

/// Suggestions offered for the name, both in the prompt and in shell completion.
pub const NAME_SUGGESTIONS: [&str; 4] = ["Ben", "Bob", "Tato", "Example"];

/// Title of the yes/no prompt.
pub const CONFIRM_TITLE: &str = "Confirm yes or no";

/// Literal values accepted as a direct argument to `confirm`.
pub const CONFIRM_SUGGESTIONS: [&str; 2] = ["true", "false"];
