//! The synchronous frame loop tying input, the screen stack, and the
//! terminal together.
//!
//! One tick per frame interval: drain pending key events into the tick's
//! input state, update the whole stack with measured dt, then draw. There
//! is exactly one mutator and no background work, so a frame is the unit
//! of everything.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{self, Event};

use ringside_content::GameContent;

use crate::config::ClientConfig;
use crate::input::InputState;
use crate::presentation::terminal::{self, Tui};
use crate::save::SaveFile;
use crate::screens::ScreenKind;
use crate::screens::stack::ScreenStack;
use crate::session::Session;

pub struct App {
    config: ClientConfig,
    session: Session,
    stack: ScreenStack,
}

impl App {
    /// Loads content, opens the save repository, and seeds the stack with
    /// the backdrop and the main menu.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let content = GameContent::load(config.data_dir.as_deref())?;
        let save = SaveFile::new(config.save_path.clone());
        tracing::info!(save = %save.path().display(), "session ready");

        let mut session = Session::new(content, save);
        let mut stack = ScreenStack::new();
        stack.push_kind(ScreenKind::Background, &mut session);
        stack.push_kind(ScreenKind::MainMenu, &mut session);

        Ok(Self {
            config,
            session,
            stack,
        })
    }

    pub fn run(mut self) -> Result<()> {
        tracing::info!("client starting");

        let mut terminal = terminal::init()?;
        let _guard = terminal::TerminalGuard;
        let result = self.run_loop(&mut terminal);

        terminal::restore()?;
        tracing::info!("client exiting");
        result
    }

    fn run_loop(&mut self, terminal: &mut Tui) -> Result<()> {
        let mut last_tick = Instant::now();

        loop {
            // Collect this tick's input while waiting out the frame
            // interval.
            let mut input = InputState::default();
            let deadline = last_tick + self.config.tick_interval;
            loop {
                let timeout = deadline.saturating_duration_since(Instant::now());
                if !event::poll(timeout)? {
                    break;
                }
                if let Event::Key(key) = event::read()? {
                    input.record(key);
                }
                if Instant::now() >= deadline {
                    break;
                }
            }

            let now = Instant::now();
            let dt = now.duration_since(last_tick).as_secs_f32();
            last_tick = now;

            let quit = self.stack.update(dt, &input, &mut self.session)?;
            if quit || self.stack.is_empty() {
                break;
            }

            terminal.draw(|frame| self.stack.draw(frame, &self.session))?;
        }
        Ok(())
    }
}
