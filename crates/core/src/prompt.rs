use crate::error::Result;
use crate::menu::MenuOption;

/// Blocking, single-field user prompts.
///
/// The terminal implementation lives in the CLI crate; tests drive the
/// dispatcher and the leaf commands with scripted implementations.
/// Every method returns [`Error::PromptAborted`](crate::error::Error::PromptAborted)
/// when the user cancels.
pub trait Prompter {
    /// Asks the user to pick one of `options` and returns the chosen option's
    /// command name.
    fn select(&mut self, title: &str, options: &[MenuOption]) -> Result<String>;

    /// Asks for a line of free text, offering `suggestions` for completion.
    fn input(&mut self, title: &str, suggestions: &[&str]) -> Result<String>;

    /// Asks a yes/no question.
    fn confirm(&mut self, title: &str) -> Result<bool>;
}
