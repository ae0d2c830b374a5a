//! Pause menu popup.
//!
//! A popup: it takes input focus but leaves the scene beneath updating and
//! drawing, so the match stays visible (dimmed) behind it.

use anyhow::Result;
use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, Clear},
};

use crate::input::InputState;
use crate::presentation::theme;
use crate::session::Session;

use super::menu::{MenuEvent, MenuList};
use super::transition::Transition;
use super::{Screen, ScreenIntent};

const RESUME: usize = 0;
const QUIT_AND_SAVE: usize = 1;

pub struct PauseScreen {
    transition: Transition,
    menu: MenuList,
}

impl PauseScreen {
    pub fn new() -> Self {
        Self {
            transition: Transition::new(0.5, 0.5),
            menu: MenuList::new(
                "Paused",
                vec!["Resume Game".to_string(), "Quit and Save".to_string()],
            ),
        }
    }
}

impl Screen for PauseScreen {
    fn name(&self) -> &'static str {
        "pause"
    }

    fn is_popup(&self) -> bool {
        true
    }

    fn transition(&self) -> &Transition {
        &self.transition
    }

    fn transition_mut(&mut self) -> &mut Transition {
        &mut self.transition
    }

    fn handle_input(
        &mut self,
        input: &InputState,
        session: &mut Session,
    ) -> Result<Vec<ScreenIntent>> {
        let intents = match self.menu.handle(input) {
            MenuEvent::Selected(RESUME) | MenuEvent::Cancelled => vec![ScreenIntent::Exit],
            MenuEvent::Selected(QUIT_AND_SAVE) => {
                session.save_profile()?;
                vec![ScreenIntent::Quit]
            }
            _ => Vec::new(),
        };
        Ok(intents)
    }

    fn draw(&self, frame: &mut Frame, _session: &Session) {
        let area = frame.area();
        let width = 30.min(area.width);
        let height = 8.min(area.height);
        let popup = Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        };

        let brightness = self.transition.alpha();
        frame.render_widget(Clear, popup);
        frame.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::faded(theme::TITLE, brightness)),
            popup,
        );

        let inner = Rect {
            x: popup.x + 1,
            y: popup.y + 1,
            width: popup.width - 2,
            height: popup.height - 2,
        };
        self.menu
            .render(frame, inner, brightness, self.transition.accepts_input());
    }
}
