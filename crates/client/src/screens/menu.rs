//! Composed menu-list helper shared by the menu screens.
//!
//! A `MenuList` owns a title, entry labels, and the selection cursor. Input
//! handling returns a [`MenuEvent`] that the owning screen matches on; there
//! are no per-entry callbacks.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::input::InputState;
use crate::presentation::theme;

/// What the menu did with this tick's input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    None,
    /// The confirm action fired on the given entry.
    Selected(usize),
    /// The cancel action fired.
    Cancelled,
}

pub struct MenuList {
    title: String,
    entries: Vec<String>,
    selected: usize,
}

impl MenuList {
    pub fn new(title: impl Into<String>, entries: Vec<String>) -> Self {
        Self {
            title: title.into(),
            entries,
            selected: 0,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Rewrites an entry label (used by menus with stateful entries).
    pub fn set_entry(&mut self, index: usize, text: impl Into<String>) {
        if let Some(entry) = self.entries.get_mut(index) {
            *entry = text.into();
        }
    }

    /// Applies one tick of navigation input, wrapping at both ends.
    pub fn handle(&mut self, input: &InputState) -> MenuEvent {
        if input.is_menu_up() {
            self.selected = match self.selected {
                0 => self.entries.len() - 1,
                n => n - 1,
            };
        }
        if input.is_menu_down() {
            self.selected = (self.selected + 1) % self.entries.len();
        }

        if input.is_menu_select() {
            MenuEvent::Selected(self.selected)
        } else if input.is_menu_cancel() {
            MenuEvent::Cancelled
        } else {
            MenuEvent::None
        }
    }

    /// Renders the title and entries centered in `area`, faded by
    /// `brightness`. The selection marker only shows while `focused`.
    pub fn render(&self, frame: &mut Frame, area: Rect, brightness: f32, focused: bool) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        let title = Paragraph::new(Line::from(Span::styled(
            self.title.clone(),
            theme::faded(theme::TITLE, brightness),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(title, chunks[0]);

        let mut lines = Vec::with_capacity(self.entries.len());
        for (i, entry) in self.entries.iter().enumerate() {
            let is_selected = focused && i == self.selected;
            let marker = if is_selected { "► " } else { "  " };
            lines.push(Line::from(vec![
                Span::styled(marker, theme::faded(theme::ACCENT, brightness)),
                Span::styled(entry.clone(), theme::menu_entry(is_selected, brightness)),
            ]));
        }
        let list = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(list, chunks[2]);
    }
}
