use std::fmt::Display;
use std::io::{stdout, Write};
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::style::Color::{DarkBlue, DarkGreen, Reset, Yellow};
use crossterm::style::{Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType};
use crossterm::{cursor, event, execute, queue, terminal};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use menu_tree_core::error::Result;
use menu_tree_core::menu::MenuOption;

use super::types::CycleDirection::{Down, Up};
use super::types::{CycleDirection, SelectChoice, UiState, ViewportState};
use super::RawModeGuard;

fn redraw_ui(
    title: &str,
    ui_state: &UiState,
    indexes_to_display: &[usize],
    options: &[MenuOption],
) -> Result<()> {
    let mut stdout = stdout();

    queue!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;

    print_header(title, ui_state, indexes_to_display.len())?;

    if indexes_to_display.is_empty() {
        queue!(
            stdout,
            MoveTo(0, 1),
            SetForegroundColor(Color::Red),
            Print("No matching commands!".to_string()),
            SetAttribute(Attribute::Reset),
            cursor::MoveToNextLine(1)
        )?;
    } else {
        print_options_with_selection(ui_state, options, indexes_to_display)?;
    }

    if ui_state.is_filtering {
        queue!(
            stdout,
            SetAttribute(Attribute::Bold),
            Print(format!("Filter: {}", ui_state.filter_text)),
            SetAttribute(Attribute::Reset)
        )?;
    }

    stdout.flush()?;
    Ok(())
}

/// Shows `options` full screen and blocks until one is chosen or the user quits.
pub fn prompt_for_selection(title: &str, options: &[MenuOption]) -> Result<SelectChoice> {
    let _raw_mode_guard = RawModeGuard::enter(true)?; // restores the terminal when dropped

    let (width, height) = terminal::size()?;
    let mut ui_state = UiState::new(width, height);
    let mut indexes_to_display = filter_displayed_indexes(options, &ui_state.filter_text);
    redraw_ui(title, &ui_state, &indexes_to_display, options)?;

    let mut down_row: Option<u16> = None;

    loop {
        if !event::poll(Duration::from_millis(500))? {
            continue;
        }

        let mut new_ui_state: Option<UiState> = None;
        let mut index_change_direction: Option<CycleDirection> = None;

        match event::read()? {
            Event::Key(key_event) => {
                let (choice, new_state, new_direction) =
                    handle_key_event(key_event, &ui_state, &indexes_to_display)?;

                if let Some(choice) = choice {
                    return Ok(choice);
                }

                new_ui_state = new_state;
                index_change_direction = new_direction;
            }
            Event::Mouse(MouseEvent {
                kind,
                row,
                modifiers,
                ..
            }) if modifiers == KeyModifiers::NONE => match kind {
                MouseEventKind::Down(MouseButton::Left) => down_row = Some(row),
                MouseEventKind::Up(MouseButton::Left) => {
                    let clicked = clicked_option(down_row.take(), row, &ui_state, &indexes_to_display);
                    if let Some(clicked) = clicked {
                        return Ok(SelectChoice::Index(clicked));
                    }
                }
                MouseEventKind::ScrollDown => index_change_direction = Some(Down),
                MouseEventKind::ScrollUp => index_change_direction = Some(Up),
                _ => {}
            },
            Event::Resize(width, height) => {
                new_ui_state = Some(handle_resize(width, height, &ui_state, indexes_to_display.len()));
            }
            _ => {}
        }

        if let Some(direction) = index_change_direction {
            new_ui_state = Some(move_selected_index(
                new_ui_state.as_ref().unwrap_or(&ui_state),
                indexes_to_display.len(),
                direction,
            ));
        }

        if let Some(state) = new_ui_state {
            if state != ui_state {
                indexes_to_display = filter_displayed_indexes(options, &state.filter_text);
                redraw_ui(title, &state, &indexes_to_display, options)?;
                ui_state = state;
            }
        }
    }
}

/// The option under a left click released on the row it was pressed on.
fn clicked_option(
    down_row: Option<u16>,
    up_row: u16,
    ui_state: &UiState,
    indexes_to_display: &[usize],
) -> Option<usize> {
    let row = down_row.filter(|&row| row == up_row)?;
    if row == 0 {
        // header
        return None;
    }
    if row - 1 >= ui_state.viewport.height {
        // filter line or below the visible rows
        return None;
    }

    let clicked_index = (row - 1) as usize + ui_state.viewport.offset;
    indexes_to_display.get(clicked_index).copied()
}

/// Handle keyboard events in the selection menu
fn handle_key_event(
    key_event: KeyEvent,
    ui_state: &UiState,
    indexes_to_display: &[usize],
) -> Result<(Option<SelectChoice>, Option<UiState>, Option<CycleDirection>)> {
    if key_event.kind == KeyEventKind::Release {
        return Ok((None, None, None));
    }

    match key_event.code {
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            Ok((Some(SelectChoice::Quit), None, None))
        }
        KeyCode::Up => Ok((None, None, Some(Up))),
        KeyCode::Down => Ok((None, None, Some(Down))),
        KeyCode::Enter => {
            if let Some(option_index) = indexes_to_display.get(ui_state.selected_index) {
                return Ok((Some(SelectChoice::Index(*option_index)), None, None));
            }
            execute!(stdout(), Print("\x07"))?;
            Ok((None, None, None))
        }
        KeyCode::Backspace if ui_state.is_filtering => {
            let mut filter_text = ui_state.filter_text.clone();
            if filter_text.pop().is_none() {
                return Ok((None, None, None));
            }
            Ok((None, Some(ui_state.with_filter_text(filter_text)), None))
        }
        KeyCode::Esc if ui_state.is_filtering => {
            let mut updated_state = ui_state.with_filter_text(String::new());
            updated_state.is_filtering = false;
            Ok((None, Some(updated_state), None))
        }
        KeyCode::Char(c) if ui_state.is_filtering => {
            let mut filter_text = ui_state.filter_text.clone();
            filter_text.push(c);
            Ok((None, Some(ui_state.with_filter_text(filter_text)), None))
        }
        KeyCode::Char('/') => {
            let mut updated_state = ui_state.clone();
            updated_state.is_filtering = true;
            Ok((None, Some(updated_state), None))
        }
        KeyCode::Char('k') => Ok((None, None, Some(Up))),
        KeyCode::Char('j') => Ok((None, None, Some(Down))),
        KeyCode::Char('q') | KeyCode::Esc => Ok((Some(SelectChoice::Quit), None, None)),
        _ => Ok((None, None, None)),
    }
}

/// Handle window resize events
fn handle_resize(width: u16, height: u16, ui_state: &UiState, displayed_count: usize) -> UiState {
    let new_height = height.saturating_sub(2);
    let mut ui_state = ui_state.clone();
    let mut new_viewport = ViewportState {
        width,
        height: new_height,
        offset: ui_state.viewport.offset,
    };

    match new_height.cmp(&ui_state.viewport.height) {
        // Growing taller: show more rows above the selection
        std::cmp::Ordering::Greater if new_viewport.offset > 0 => {
            let height_increase = new_height - ui_state.viewport.height;
            new_viewport.offset = new_viewport.offset.saturating_sub(height_increase as usize);
        }
        std::cmp::Ordering::Less
            if ui_state.selected_index >= new_viewport.offset + new_height as usize =>
        {
            new_viewport.offset = ui_state.selected_index.saturating_sub((new_height as usize).saturating_sub(1));

            if new_viewport.offset + new_height as usize > displayed_count {
                new_viewport.offset = displayed_count.saturating_sub(new_height as usize);
            }
        }
        _ => {}
    }

    ui_state.viewport = new_viewport;
    ui_state
}

/// Print the header for the selection menu
fn print_header(title: &str, ui_state: &UiState, displayed_count: usize) -> Result<()> {
    let mut stdout = stdout();
    let width = ui_state.viewport.width as usize;

    let left_padding = "  ";

    let instructions = if ui_state.is_filtering {
        format!("{title}   |   <esc>: Stop Filtering")
    } else {
        format!(
            "{title}   |   /: Filter   |   {}/{}   |   q: Quit",
            pad_to_width_of(ui_state.selected_index + 1, displayed_count),
            displayed_count
        )
    };

    let right_padding =
        " ".repeat(width.saturating_sub(left_padding.len() + instructions.chars().count()));

    queue!(
        stdout,
        MoveTo(0, 0),
        SetBackgroundColor(DarkGreen),
        Print(left_padding),
        Print(instructions),
        Print(right_padding),
        SetBackgroundColor(Reset),
        SetForegroundColor(Reset),
    )?;

    Ok(())
}

/// Pad a value to match the width of the largest value
fn pad_to_width_of<T: Display>(value: T, max_number: usize) -> String {
    let width = format!("{max_number}").len();
    format!("{:>width$}", value.to_string())
}

/// The text of one option row, without colors.
fn format_option_row(option_index: usize, option: &MenuOption, option_count: usize) -> String {
    let index_as_string = pad_to_width_of(option_index + 1, option_count);
    format!("[{index_as_string}] {option}")
}

/// Clear and write an option row in the selection menu
fn clear_and_write_option_row(
    row: u16,
    content: &str,
    is_selected: bool,
    terminal_width: u16,
) -> Result<()> {
    let mut stdout = stdout();

    queue!(stdout, MoveTo(0, row), Clear(ClearType::CurrentLine))?;

    let padding = " ".repeat((terminal_width as usize).saturating_sub(content.chars().count()));

    if is_selected {
        queue!(
            stdout,
            SetAttribute(Attribute::Bold),
            SetBackgroundColor(DarkBlue),
            SetForegroundColor(Yellow),
        )?;
    }

    queue!(
        stdout,
        Print(content),
        Print(padding),
        SetAttribute(Attribute::Reset),
        SetBackgroundColor(Reset),
        SetForegroundColor(Reset),
    )?;

    Ok(())
}

/// Print all visible options with the selected one highlighted
fn print_options_with_selection(
    ui_state: &UiState,
    options: &[MenuOption],
    indexes_to_display: &[usize],
) -> Result<()> {
    let mut stdout = stdout();

    let viewport = &ui_state.viewport;

    let visible_options = indexes_to_display
        .iter()
        .skip(viewport.offset)
        .take(viewport.height as usize);

    for (i, option_index) in visible_options.enumerate() {
        let is_selected = i + viewport.offset == ui_state.selected_index;
        let content = format_option_row(*option_index, &options[*option_index], options.len());

        clear_and_write_option_row(i as u16 + 1, &content, is_selected, viewport.width)?;
        queue!(stdout, cursor::MoveToNextLine(1))?;
    }

    Ok(())
}

/// Move the selected index in the given direction, wrapping at either end
fn move_selected_index(
    ui_state: &UiState,
    displayed_count: usize,
    direction: CycleDirection,
) -> UiState {
    if displayed_count == 0 {
        return ui_state.clone();
    }

    let mut new_index = ui_state.selected_index;
    let mut ui_state = ui_state.clone();
    let height = (ui_state.viewport.height as usize).max(1);

    match direction {
        Up => {
            if new_index == 0 {
                new_index = displayed_count - 1;
                ui_state.viewport.offset = new_index.saturating_sub(height - 1);
            } else {
                new_index -= 1;
                if new_index < ui_state.viewport.offset {
                    ui_state.viewport.offset = new_index;
                }
            }
        }
        Down => {
            new_index = (new_index + 1) % displayed_count;
            if new_index < ui_state.selected_index {
                ui_state.viewport.offset = 0;
            } else if new_index >= ui_state.viewport.offset + height {
                ui_state.viewport.offset = new_index + 1 - height;
            }
        }
    }

    ui_state.selected_index = new_index;
    ui_state
}

/// Positions of the options matching `predicate`, in menu order.
///
/// A numeric predicate matches option numbers; anything else is matched
/// fuzzily against the option labels.
fn filter_displayed_indexes(options: &[MenuOption], predicate: &str) -> Vec<usize> {
    if predicate.is_empty() {
        return (0..options.len()).collect();
    }

    let matcher = SkimMatcherV2::default();
    let predicate_index = predicate.parse::<usize>().ok();

    options
        .iter()
        .enumerate()
        .filter(|(i, option)| match predicate_index {
            Some(_) => (i + 1).to_string().contains(predicate),
            None => matcher.fuzzy_match(&option.label, predicate).is_some(),
        })
        .map(|(i, _)| i)
        .collect()
}
