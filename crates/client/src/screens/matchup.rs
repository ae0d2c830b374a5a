//! Matchup card shown before each fight: the player's card against the
//! next opponent's, with records, gyms, rankings and weights.

use anyhow::Result;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::input::InputState;
use crate::presentation::theme;
use crate::session::Session;

use super::transition::Transition;
use super::{Screen, ScreenIntent, ScreenKind, UpdateCtx};

/// The player's fixed card details.
const PLAYER_NAME: &str = "KID KEATON";
const PLAYER_GYM: &str = "HARBOR";
const PLAYER_WEIGHT: u32 = 117;

/// Per-tick easing applied to the pause dim.
const PAUSE_FADE_STEP: f32 = 1.0 / 32.0;

pub struct MatchupScreen {
    transition: Transition,
    pause_alpha: f32,
}

impl MatchupScreen {
    pub fn new() -> Self {
        Self {
            transition: Transition::new(1.5, 0.5),
            pause_alpha: 0.0,
        }
    }

    fn brightness(&self) -> f32 {
        self.transition.alpha() * (1.0 - self.pause_alpha / 2.0)
    }
}

impl Screen for MatchupScreen {
    fn name(&self) -> &'static str {
        "matchup"
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
        // Ease the dim in while something above holds input focus.
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
        _session: &mut Session,
    ) -> Result<Vec<ScreenIntent>> {
        let mut intents = Vec::new();
        if input.is_pause() {
            intents.push(ScreenIntent::Push(ScreenKind::Pause));
        }
        if input.is_start() {
            intents.push(ScreenIntent::LoadScene {
                slow: false,
                next: vec![ScreenKind::Gameplay],
            });
        }
        Ok(intents)
    }

    fn draw(&self, frame: &mut Frame, session: &Session) {
        let b = self.brightness();
        let opponent = session.roster.for_wins(session.profile.wins);
        let profile = &session.profile;

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(frame.area());

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "MINOR CIRCUIT",
                theme::faded(theme::ACCENT, b),
            )))
            .alignment(Alignment::Center),
            rows[0],
        );

        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(40),
                Constraint::Percentage(20),
                Constraint::Percentage(40),
            ])
            .split(rows[1]);

        self.draw_card(
            frame,
            cards[0],
            b,
            &[
                (String::new(), theme::TEXT),
                (PLAYER_NAME.to_string(), theme::TEXT),
                (
                    format!(
                        "{} - {}  {}KO",
                        profile.wins, profile.losses, profile.wins
                    ),
                    theme::TEXT,
                ),
                (String::new(), theme::TEXT),
                (format!("FROM {PLAYER_GYM} BOXING GYM"), theme::MUTED),
                (format!("WEIGHT: {PLAYER_WEIGHT}"), theme::MUTED),
            ],
        );

        frame.render_widget(
            Paragraph::new(vec![
                Line::from(""),
                Line::from(""),
                Line::from(Span::styled("VS.", theme::faded(theme::ACCENT, b))),
            ])
            .alignment(Alignment::Center),
            cards[1],
        );

        self.draw_card(
            frame,
            cards[2],
            b,
            &[
                (format!("RANKED #{}", opponent.ranking), theme::GOOD),
                (opponent.full_name().to_uppercase(), theme::TEXT),
                (opponent.record_line(profile.losses), theme::TEXT),
                (String::new(), theme::TEXT),
                (
                    format!("FROM {} BOXING GYM", opponent.gym.to_uppercase()),
                    theme::MUTED,
                ),
                (format!("WEIGHT: {}", opponent.weight), theme::MUTED),
            ],
        );

        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled("PUSH", theme::faded(theme::ACCENT, b))),
                Line::from(Span::styled("START!", theme::faded(theme::ACCENT, b))),
            ])
            .alignment(Alignment::Center),
            rows[2],
        );
    }
}

impl MatchupScreen {
    fn draw_card(
        &self,
        frame: &mut Frame,
        area: Rect,
        brightness: f32,
        rows: &[(String, ratatui::style::Color)],
    ) {
        let lines: Vec<Line> = rows
            .iter()
            .map(|(text, color)| {
                Line::from(Span::styled(
                    text.clone(),
                    theme::faded(*color, brightness),
                ))
            })
            .collect();
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            area,
        );
    }
}
