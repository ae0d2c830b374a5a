//! The main menu, first thing shown on startup.

use anyhow::Result;
use ratatui::Frame;

use crate::input::InputState;
use crate::save::SaveError;
use crate::session::Session;

use super::menu::{MenuEvent, MenuList};
use super::transition::Transition;
use super::{Screen, ScreenIntent, ScreenKind};

const NEW_GAME: usize = 0;
const LOAD_GAME: usize = 1;
const OPTIONS: usize = 2;
const EXIT: usize = 3;

pub struct MainMenuScreen {
    transition: Transition,
    menu: MenuList,
}

impl MainMenuScreen {
    pub fn new() -> Self {
        Self {
            transition: Transition::new(0.5, 0.5),
            menu: MenuList::new(
                "Main Menu",
                vec![
                    "New Game".to_string(),
                    "Load Game".to_string(),
                    "Options".to_string(),
                    "Exit".to_string(),
                ],
            ),
        }
    }
}

impl Screen for MainMenuScreen {
    fn name(&self) -> &'static str {
        "main-menu"
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
            MenuEvent::Selected(NEW_GAME) => {
                session.profile = ringside_core::Profile::fresh();
                vec![ScreenIntent::LoadScene {
                    slow: true,
                    next: vec![ScreenKind::Matchup],
                }]
            }
            MenuEvent::Selected(LOAD_GAME) => match session.load_profile() {
                Ok(()) => vec![ScreenIntent::LoadScene {
                    slow: true,
                    next: vec![ScreenKind::Matchup],
                }],
                Err(SaveError::NotFound(path)) => {
                    tracing::warn!(path = %path.display(), "no save to load");
                    Vec::new()
                }
                // Malformed local data is fatal.
                Err(e) => return Err(e.into()),
            },
            MenuEvent::Selected(OPTIONS) => vec![ScreenIntent::Push(ScreenKind::Options)],
            MenuEvent::Selected(EXIT) | MenuEvent::Cancelled => vec![ScreenIntent::Quit],
            _ => Vec::new(),
        };
        Ok(intents)
    }

    fn draw(&self, frame: &mut Frame, _session: &Session) {
        let area = frame.area();
        // Leave the top third to the backdrop title.
        let menu_area = ratatui::layout::Rect {
            x: area.x,
            y: area.y + area.height / 3,
            width: area.width,
            height: area.height - area.height / 3,
        };
        self.menu.render(
            frame,
            menu_area,
            self.transition.alpha(),
            self.transition.accepts_input(),
        );
    }
}
