use std::io::{stdin, stdout, BufRead, IsTerminal, Write};

use crossterm::cursor::MoveToColumn;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{Clear, ClearType};
use crossterm::queue;
use itertools::Itertools;
use log::debug;
use menu_tree_core::error::{Error, Result};

use super::types::{InputState, InputStep};
use super::RawModeGuard;

/// Prompts for a line of text, offering `suggestions` as ghost text that Tab accepts.
///
/// When stdin is not a terminal a plain line is read instead.
pub fn prompt_text(title: &str, suggestions: &[&str]) -> Result<String> {
    if !stdin().is_terminal() {
        debug!("stdin is not a terminal, reading a plain line");
        return read_text_line(title, suggestions, &mut stdin().lock(), &mut stdout());
    }

    let _raw_mode_guard = RawModeGuard::enter(false)?;
    let mut state = InputState::default();

    loop {
        redraw_line(title, &state, suggestions)?;

        if let Event::Key(key_event) = event::read()? {
            match handle_input_key(&mut state, key_event, suggestions) {
                InputStep::Continue => {}
                InputStep::Submit => {
                    print!("\r\n");
                    stdout().flush()?;
                    return Ok(state.buffer);
                }
                InputStep::Abort => {
                    print!("\r\n");
                    stdout().flush()?;
                    return Err(Error::PromptAborted);
                }
            }
        }
    }
}

fn redraw_line(title: &str, state: &InputState, suggestions: &[&str]) -> Result<()> {
    let mut stdout = stdout();
    let ghost = state.ghost(suggestions).unwrap_or_default();

    queue!(
        stdout,
        MoveToColumn(0),
        Clear(ClearType::CurrentLine),
        SetAttribute(Attribute::Bold),
        Print(title),
        SetAttribute(Attribute::Reset),
        Print(" "),
        Print(&state.buffer),
        SetAttribute(Attribute::Dim),
        Print(ghost),
        SetAttribute(Attribute::Reset),
    )?;

    // Leave the cursor at the end of what was typed, before the ghost text.
    queue!(stdout, MoveToColumn(cursor_column(title, &state.buffer)))?;

    stdout.flush()?;
    Ok(())
}

/// Column just after the typed text, clamped to what the terminal can address.
fn cursor_column(title: &str, buffer: &str) -> u16 {
    let typed_width = title.chars().count() + 1 + buffer.chars().count();
    u16::try_from(typed_width).unwrap_or(u16::MAX)
}

/// Applies one key press to the edited line.
pub(crate) fn handle_input_key(state: &mut InputState, key_event: KeyEvent, suggestions: &[&str]) -> InputStep {
    if key_event.kind == KeyEventKind::Release {
        return InputStep::Continue;
    }

    match key_event.code {
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => InputStep::Abort,
        KeyCode::Esc => InputStep::Abort,
        KeyCode::Enter => InputStep::Submit,
        KeyCode::Tab | KeyCode::Right => {
            state.accept_suggestion(suggestions);
            InputStep::Continue
        }
        KeyCode::Backspace => {
            state.buffer.pop();
            InputStep::Continue
        }
        KeyCode::Char(c) if (key_event.modifiers - KeyModifiers::SHIFT).is_empty() => {
            state.buffer.push(c);
            InputStep::Continue
        }
        _ => InputStep::Continue,
    }
}

/// Reads one line of text from `reader`, listing the suggestions in the prompt.
pub(crate) fn read_text_line(
    title: &str,
    suggestions: &[&str],
    reader: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<String> {
    let hint = suggestion_hint(suggestions);
    if hint.is_empty() {
        write!(out, "{title} ")?;
    } else {
        write!(out, "{title} {hint} ")?;
    }
    out.flush()?;

    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Err(Error::PromptAborted);
    }

    Ok(input.trim_end_matches(['\r', '\n']).to_string())
}

/// Asks a yes/no question until the answer is recognized.
pub fn confirm(title: &str) -> Result<bool> {
    confirm_from(title, &mut stdin().lock(), &mut stdout())
}

pub(crate) fn confirm_from(title: &str, reader: &mut dyn BufRead, out: &mut dyn Write) -> Result<bool> {
    loop {
        write!(out, "{title} ([y]es/[n]o): ")?;
        out.flush()?;

        let mut input = String::new();
        if reader.read_line(&mut input)? == 0 {
            // End of input, nobody left to answer
            writeln!(out)?;
            return Err(Error::PromptAborted);
        }

        if let Some(answer) = parse_confirmation(&input) {
            return Ok(answer);
        }
    }
}

fn parse_confirmation(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// The suggestions as shown after a plain-line prompt title.
fn suggestion_hint(suggestions: &[&str]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!("[{}]", suggestions.iter().join(", "))
    }
}
