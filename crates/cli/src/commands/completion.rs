//! Shell completion: the registration script for each shell and the value
//! candidates for each leaf argument.
//!
//! The installed script calls back into `menutree` with `COMPLETE=<shell>`
//! set, so argument values come from [`complete_name`] and
//! [`complete_choice`] rather than from a fixed list baked into the script.

use std::ffi::OsStr;
use std::io::Write;
use std::str::FromStr;

use clap_complete::engine::CompletionCandidate;
use clap_complete::env::Shells;
use clap_complete::Shell;
use log::debug;
use menu_tree_core::config::{BIN_NAME, COMPLETE_ENV_VAR, CONFIRM_SUGGESTIONS, NAME_SUGGESTIONS};
use menu_tree_core::error::{Error, Result};
use menu_tree_core::suggest::suggest;

/// Writes the completion script for `shell` to `out`.
pub fn run(shell: Shell, out: &mut dyn Write) -> Result<()> {
    let name = shell.to_string();
    let shells = Shells::builtins();
    let completer = shells
        .completer(&name)
        .ok_or_else(|| Error::UnknownShell(name.clone()))?;

    debug!("Writing {name} completion registration");
    completer.write_registration(COMPLETE_ENV_VAR, BIN_NAME, BIN_NAME, BIN_NAME, out)?;
    out.flush()?;
    Ok(())
}

/// Parses a shell name given as a plain argument.
pub fn parse_shell(value: &str) -> Result<Shell> {
    Shell::from_str(value).map_err(|_| Error::UnknownShell(value.to_string()))
}

fn candidates(options: &[&str], current: &OsStr) -> Vec<CompletionCandidate> {
    let Some(current) = current.to_str() else {
        return vec![];
    };

    suggest(options, current)
        .into_iter()
        .map(CompletionCandidate::new)
        .collect()
}

/// Candidates for the `input` argument.
pub fn complete_name(current: &OsStr) -> Vec<CompletionCandidate> {
    candidates(&NAME_SUGGESTIONS, current)
}

/// Candidates for the `confirm` argument.
pub fn complete_choice(current: &OsStr) -> Vec<CompletionCandidate> {
    candidates(&CONFIRM_SUGGESTIONS, current)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(candidates: Vec<CompletionCandidate>) -> Vec<String> {
        candidates
            .iter()
            .map(|candidate| candidate.get_value().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_complete_name_prefix() {
        assert_eq!(values(complete_name(OsStr::new("B"))), vec!["Ben", "Bob"]);
    }

    #[test]
    fn test_complete_name_empty() {
        assert_eq!(
            values(complete_name(OsStr::new(""))),
            vec!["Ben", "Bob", "Tato", "Example"]
        );
    }

    #[test]
    fn test_complete_choice() {
        assert_eq!(values(complete_choice(OsStr::new("f"))), vec!["false"]);
        assert!(values(complete_choice(OsStr::new("F"))).is_empty());
    }

    #[test]
    fn test_parse_shell() {
        assert_eq!(parse_shell("bash").unwrap(), Shell::Bash);
        assert_eq!(parse_shell("fish").unwrap(), Shell::Fish);
        assert!(matches!(parse_shell("cmd.exe"), Err(Error::UnknownShell(_))));
    }

    #[test]
    fn test_run_registers_dynamic_completer() {
        let mut out = Vec::new();
        run(Shell::Bash, &mut out).unwrap();

        let script = String::from_utf8(out).unwrap();
        assert!(script.contains(BIN_NAME));
        assert!(script.contains(&format!("{COMPLETE_ENV_VAR}=")));
        assert!(script.contains("complete "));
    }

    #[test]
    fn test_run_every_shell() {
        for shell in [Shell::Bash, Shell::Elvish, Shell::Fish, Shell::PowerShell, Shell::Zsh] {
            let mut out = Vec::new();
            run(shell, &mut out).unwrap();

            let script = String::from_utf8(out).unwrap();
            assert!(script.contains(COMPLETE_ENV_VAR), "{shell} script calls back");
        }
    }
}
