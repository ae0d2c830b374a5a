//! Loading screen coordinating scene changes.
//!
//! `ScreenStack::load_scene` tells every current screen to transition off
//! and pushes this screen. It waits until it is the only screen left, lets
//! one more frame render, then removes itself and activates the pending
//! screens. The "Loading....." line only shows for loads flagged slow; the
//! menus flip scenes fast enough that flashing it would look broken.

use anyhow::Result;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::presentation::theme;
use crate::session::Session;

use super::transition::{Transition, TransitionState};
use super::{Screen, ScreenIntent, ScreenKind, UpdateCtx};

pub struct LoadingScreen {
    transition: Transition,
    slow: bool,
    pending: Vec<ScreenKind>,
    others_gone: bool,
}

impl LoadingScreen {
    pub fn new(slow: bool, pending: Vec<ScreenKind>) -> Self {
        Self {
            // Instant removal once the handoff happens.
            transition: Transition::new(0.5, 0.0),
            slow,
            pending,
            others_gone: false,
        }
    }
}

impl Screen for LoadingScreen {
    fn name(&self) -> &'static str {
        "loading"
    }

    fn transition(&self) -> &Transition {
        &self.transition
    }

    fn transition_mut(&mut self) -> &mut Transition {
        &mut self.transition
    }

    fn update(&mut self, ctx: UpdateCtx, _session: &mut Session) -> Result<Vec<ScreenIntent>> {
        // One tick of delay between noticing the stack is drained and
        // performing the handoff, so a frame renders without the old
        // screens first.
        if self.others_gone {
            let mut intents = vec![ScreenIntent::Exit];
            intents.extend(self.pending.iter().map(|&kind| ScreenIntent::Push(kind)));
            return Ok(intents);
        }

        if ctx.screen_count == 1 && self.transition.state() == TransitionState::Active {
            self.others_gone = true;
        }
        Ok(Vec::new())
    }

    fn draw(&self, frame: &mut Frame, _session: &Session) {
        if !self.slow {
            return;
        }
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(45),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(frame.area());
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Loading.....",
                theme::faded(theme::TEXT, self.transition.alpha()),
            )))
            .alignment(Alignment::Center),
            chunks[1],
        );
    }
}
