//! Training screen: rework the equipped loadout between matches.
//!
//! Up/down walk the unlocked portion of the move catalog, select toggles a
//! move in and out of the four equip slots, and start moves on to the next
//! matchup, but only with at least one move equipped.

use anyhow::Result;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::input::InputState;
use crate::presentation::theme;
use crate::session::Session;

use super::transition::Transition;
use super::{Screen, ScreenIntent, ScreenKind, UpdateCtx};

/// Per-tick easing applied to the pause dim.
const PAUSE_FADE_STEP: f32 = 1.0 / 32.0;

pub struct TrainingScreen {
    transition: Transition,
    selected_move: usize,
    /// Number of moves unlocked at entry; navigation wraps inside this.
    max_moves: usize,
    pause_alpha: f32,
}

impl TrainingScreen {
    pub fn new(session: &mut Session) -> Self {
        let max_moves = session.catalog.unlocked_count(session.profile.wins);
        Self {
            transition: Transition::new(1.5, 0.5),
            selected_move: 0,
            max_moves,
            pause_alpha: 0.0,
        }
    }
}

impl Screen for TrainingScreen {
    fn name(&self) -> &'static str {
        "training"
    }

    fn ignores_coverage(&self) -> bool {
        true
    }

    fn transition(&self) -> &Transition {
        &self.transition
    }

    fn transition_mut(&mut self) -> &mut Transition {
        &mut self.transition
    }

    fn update(&mut self, ctx: UpdateCtx, _session: &mut Session) -> Result<Vec<ScreenIntent>> {
        self.pause_alpha = if ctx.focused {
            (self.pause_alpha - PAUSE_FADE_STEP).max(0.0)
        } else {
            (self.pause_alpha + PAUSE_FADE_STEP).min(1.0)
        };
        Ok(Vec::new())
    }

    fn handle_input(
        &mut self,
        input: &InputState,
        session: &mut Session,
    ) -> Result<Vec<ScreenIntent>> {
        if input.is_pause() {
            return Ok(vec![ScreenIntent::Push(ScreenKind::Pause)]);
        }

        if input.is_menu_select() {
            let change = session.profile.equipped.toggle(self.selected_move);
            tracing::debug!(mv = self.selected_move, ?change, "equip toggle");
        }

        if input.is_start() && !session.profile.equipped.is_empty() {
            return Ok(vec![ScreenIntent::LoadScene {
                slow: false,
                next: vec![ScreenKind::Matchup],
            }]);
        }

        if self.max_moves > 0 {
            if input.is_menu_up() {
                self.selected_move = match self.selected_move {
                    0 => self.max_moves - 1,
                    n => n - 1,
                };
            }
            if input.is_menu_down() {
                self.selected_move = (self.selected_move + 1) % self.max_moves;
            }
        }

        Ok(Vec::new())
    }

    fn draw(&self, frame: &mut Frame, session: &Session) {
        let b = self.transition.alpha() * (1.0 - self.pause_alpha / 2.0);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(0),
                Constraint::Length(5),
            ])
            .split(frame.area());

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "TRAINING",
                theme::faded(theme::TITLE, b),
            )))
            .alignment(Alignment::Center),
            rows[0],
        );

        // Unlocked moves: `>` marks equipped, `<` marks the cursor.
        let mut lines = Vec::new();
        for (i, mv) in session.catalog.iter().enumerate() {
            if mv.wins_required > session.profile.wins {
                continue;
            }
            let equipped = session.profile.equipped.contains(i);
            let cursor = i == self.selected_move;
            let first = if equipped { ">" } else { " " };
            let last = if cursor { "<" } else { "" };
            lines.push(Line::from(Span::styled(
                format!("{}{}{}", first, mv.name, last),
                if cursor {
                    theme::menu_entry(true, b)
                } else {
                    theme::faded(theme::DARK_RED, b)
                },
            )));
        }
        frame.render_widget(Paragraph::new(lines), rows[1]);

        if let Some(mv) = session.catalog.get(self.selected_move) {
            frame.render_widget(
                Paragraph::new(vec![
                    Line::from(Span::styled(
                        format!("Type: {}", mv.kind),
                        theme::faded(theme::TEXT, b),
                    )),
                    Line::from(Span::styled(
                        format!("Amount: {}", mv.range),
                        theme::faded(theme::TEXT, b),
                    )),
                    Line::from(Span::styled(
                        format!("Chance: {}", mv.chance),
                        theme::faded(theme::TEXT, b),
                    )),
                    Line::from(Span::styled(
                        mv.description.clone(),
                        theme::faded(theme::MUTED, b),
                    )),
                ]),
                rows[2],
            );
        }
    }
}
