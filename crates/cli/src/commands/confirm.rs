//! Ask a yes/no question and write the answer to stdout.

use std::io::Write;

use log::debug;
use menu_tree_core::config::CONFIRM_TITLE;
use menu_tree_core::error::Result;
use menu_tree_core::prompt::Prompter;
use menu_tree_core::values::parse_bool;

pub fn run(choice: Option<&str>, prompter: &mut dyn Prompter, out: &mut dyn Write) -> Result<()> {
    let choice = match choice {
        Some(value) => {
            debug!("Parsing choice from argument `{value}`");
            parse_bool(value)?
        }
        None => prompter.confirm(CONFIRM_TITLE)?,
    };

    writeln!(out, "You chose {choice}")?;
    Ok(())
}
