//! Type definitions for the prompt UIs.
//!
//! This module defines the state shared between event handling and drawing
//! in the selection menu and the text input line.

use menu_tree_core::suggest::first_extension;

/// Represents the user's choice in the selection menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectChoice {
    /// Position of the chosen option in the unfiltered option list.
    Index(usize),
    Quit,
}

/// Direction to cycle through options in the selection menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CycleDirection {
    Up,
    Down,
}

/// State for the UI viewport.
///
/// Tracks the visible portion of the option list when there are more
/// options than can fit on screen.
#[derive(Clone, PartialEq, Debug)]
pub struct ViewportState {
    pub offset: usize,
    pub height: u16,
    pub width: u16,
}

/// Complete UI state for the selection menu.
#[derive(Clone, PartialEq, Debug)]
pub struct UiState {
    /// Position of the highlighted row among the displayed options
    pub selected_index: usize,
    /// Viewport state for scrolling
    pub viewport: ViewportState,
    /// Whether the user is currently filtering
    pub is_filtering: bool,
    /// Current filter text
    pub filter_text: String,
}

impl UiState {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            selected_index: 0,
            viewport: ViewportState {
                offset: 0,
                height: height.saturating_sub(2), // header and filter line
                width,
            },
            is_filtering: false,
            filter_text: String::new(),
        }
    }

    /// A copy with new filter text and the selection moved back to the top.
    #[must_use]
    pub fn with_filter_text(&self, filter_text: String) -> Self {
        let mut updated = self.clone();
        updated.filter_text = filter_text;
        updated.selected_index = 0;
        updated.viewport.offset = 0;
        updated
    }
}

/// What the text input should do after a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputStep {
    Continue,
    Submit,
    Abort,
}

/// The line being edited in the text input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputState {
    pub buffer: String,
}

impl InputState {
    /// The part of the first matching suggestion not typed yet.
    pub fn ghost<'a>(&self, suggestions: &[&'a str]) -> Option<&'a str> {
        first_extension(suggestions, &self.buffer).map(|suggestion| &suggestion[self.buffer.len()..])
    }

    /// Completes the buffer to the first matching suggestion.
    ///
    /// Returns whether anything changed.
    pub fn accept_suggestion(&mut self, suggestions: &[&str]) -> bool {
        match self.ghost(suggestions) {
            Some(rest) => {
                self.buffer.push_str(rest);
                true
            }
            None => false,
        }
    }
}
