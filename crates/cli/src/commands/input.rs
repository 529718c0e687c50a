//! Read a name and write it to stdout.

use std::io::Write;

use menu_tree_core::config::{NAME_SUGGESTIONS, NAME_TITLE};
use menu_tree_core::error::Result;
use menu_tree_core::prompt::Prompter;

pub fn run(name: Option<&str>, prompter: &mut dyn Prompter, out: &mut dyn Write) -> Result<()> {
    let name = match name {
        Some(name) => name.to_string(),
        None => prompter.input(NAME_TITLE, &NAME_SUGGESTIONS)?,
    };

    writeln!(out, "Your name is {name}")?;
    Ok(())
}
