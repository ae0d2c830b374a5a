//! Options menu, brought up over the top of the main menu.

use anyhow::Result;
use ratatui::Frame;

use crate::input::InputState;
use crate::session::Session;

use super::menu::{MenuEvent, MenuList};
use super::transition::Transition;
use super::{Screen, ScreenIntent};

const WIPE_SAVE: usize = 0;
const LANGUAGE: usize = 1;
const BACK: usize = 2;

/// The selectable "languages". Cosmetic, and proudly so.
const LANGUAGES: [&str; 4] = [
    "UK English",
    "British English",
    "Australian English",
    "Canadian English",
];

pub struct OptionsScreen {
    transition: Transition,
    menu: MenuList,
    language: usize,
}

impl OptionsScreen {
    pub fn new() -> Self {
        Self {
            transition: Transition::new(0.5, 0.5),
            menu: MenuList::new(
                "Options",
                vec![
                    "Wipe Save".to_string(),
                    LANGUAGES[0].to_string(),
                    "Back".to_string(),
                ],
            ),
            language: 0,
        }
    }
}

impl Screen for OptionsScreen {
    fn name(&self) -> &'static str {
        "options"
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
            MenuEvent::Selected(WIPE_SAVE) => {
                session.save.wipe()?;
                Vec::new()
            }
            MenuEvent::Selected(LANGUAGE) => {
                self.language = (self.language + 1) % LANGUAGES.len();
                self.menu.set_entry(LANGUAGE, LANGUAGES[self.language]);
                Vec::new()
            }
            MenuEvent::Selected(BACK) | MenuEvent::Cancelled => vec![ScreenIntent::Exit],
            _ => Vec::new(),
        };
        Ok(intents)
    }

    fn draw(&self, frame: &mut Frame, _session: &Session) {
        let area = frame.area();
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
