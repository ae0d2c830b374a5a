//! The match itself: move selection, turn resolution, and the two
//! fighters' pose state.
//!
//! One confirm input drives one resolution (see `ringside-core`'s match
//! engine for the turn coupling). Left/right walk the equipped-move bar
//! with wraparound; once the match is frozen, start advances the career:
//! to training, or past the final opponent to a wiped save and the main
//! menu.

use anyhow::Result;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Gauge, Paragraph},
};

use ringside_core::{MatchEngine, MatchResult, MoveOutcome, Pcg32, Side};

use crate::input::InputState;
use crate::presentation::theme;
use crate::session::Session;

use super::transition::Transition;
use super::{Screen, ScreenIntent, ScreenKind, UpdateCtx};

/// The player always starts a match at this HP.
const PLAYER_MAX_HP: u32 = 100;

/// Wins needed to take the title and end the career.
const TITLE_WINS: u32 = 4;

/// Seconds an action pose holds before snapping back to idle.
const MAX_ANIM_TIME: f32 = 0.5;

/// Per-tick easing applied to the pause dim.
const PAUSE_FADE_STEP: f32 = 1.0 / 32.0;

/// What a fighter's sprite would be doing, reduced to a label.
#[derive(Clone, Debug, PartialEq, Eq)]
enum Pose {
    Idle,
    /// Knocked out; sticky until the screen goes away.
    Down,
    /// Holding the pose of a thrown move.
    Acting(String),
}

/// Pose plus the timer that expires it.
#[derive(Clone, Debug)]
struct PoseState {
    pose: Pose,
    elapsed: f32,
}

impl PoseState {
    fn new() -> Self {
        Self {
            pose: Pose::Idle,
            elapsed: 0.0,
        }
    }

    fn set_acting(&mut self, name: &str) {
        if self.pose == Pose::Down {
            return;
        }
        self.pose = Pose::Acting(name.to_string());
        self.elapsed = 0.0;
    }

    fn set_down(&mut self) {
        self.pose = Pose::Down;
    }

    fn update(&mut self, dt: f32) {
        if matches!(self.pose, Pose::Acting(_)) {
            self.elapsed += dt;
            if self.elapsed > MAX_ANIM_TIME {
                self.pose = Pose::Idle;
                self.elapsed = 0.0;
            }
        }
    }

    fn label(&self) -> String {
        match &self.pose {
            Pose::Idle => "ready".to_string(),
            Pose::Down => "D O W N".to_string(),
            Pose::Acting(name) => format!("{}!", name.to_uppercase()),
        }
    }
}

pub struct GameplayScreen {
    transition: Transition,
    engine: MatchEngine<Pcg32>,
    selected_move: usize,
    max_moves: usize,
    pause_alpha: f32,
    player_pose: PoseState,
    enemy_pose: PoseState,
    opponent_name: String,
    result: Option<MatchResult>,
}

impl GameplayScreen {
    pub fn new(session: &mut Session) -> Self {
        // Sorting descending sinks the sentinel slots, so the equipped
        // moves form a contiguous prefix for menu navigation.
        session.profile.equipped.sort_descending();
        let max_moves = session.profile.equipped.active_count();
        let wins = session.profile.wins;
        let opponent_name = session.roster.for_wins(wins).full_name();

        let engine = MatchEngine::new(PLAYER_MAX_HP, wins, Pcg32::from_entropy());
        tracing::info!(
            opponent = %opponent_name,
            enemy_hp = engine.enemy.max_hp,
            "match start"
        );

        Self {
            transition: Transition::new(1.5, 0.5),
            engine,
            selected_move: 0,
            max_moves,
            pause_alpha: 0.0,
            player_pose: PoseState::new(),
            enemy_pose: PoseState::new(),
            opponent_name,
            result: None,
        }
    }

    fn brightness(&self) -> f32 {
        self.transition.alpha() * (1.0 - self.pause_alpha / 2.0)
    }

    /// Runs one confirm through the engine and applies the animation cues.
    fn resolve_turn(&mut self, session: &mut Session) -> Result<()> {
        let Some(catalog_index) = session.profile.equipped.get(self.selected_move) else {
            return Ok(());
        };

        let report = self
            .engine
            .confirm(&session.catalog, catalog_index, &mut session.profile)?;

        let move_name = session
            .catalog
            .get(report.move_index)
            .map(|mv| mv.name.as_str())
            .unwrap_or("?");
        let pose = match report.side {
            Side::Player => &mut self.player_pose,
            Side::Enemy => &mut self.enemy_pose,
        };
        if report.outcome != MoveOutcome::Incapacitated {
            pose.set_acting(move_name);
        }

        tracing::debug!(side = %report.side, mv = move_name, outcome = ?report.outcome, "turn");

        if let Some(result) = report.concluded {
            self.result = Some(result);
            match result {
                MatchResult::PlayerWon => self.enemy_pose.set_down(),
                MatchResult::PlayerLost => self.player_pose.set_down(),
            }
            tracing::info!(?result, wins = session.profile.wins, "match over");
        }
        Ok(())
    }

    /// Advances the career once the match is frozen.
    fn advance_career(&self, session: &mut Session) -> Result<Vec<ScreenIntent>> {
        if session.profile.wins < TITLE_WINS {
            return Ok(vec![ScreenIntent::LoadScene {
                slow: false,
                next: vec![ScreenKind::Training],
            }]);
        }

        // Title won: the career is complete. Wipe the save and start over
        // from the menu.
        tracing::info!(score = session.profile.score, "title won, career complete");
        session.save.wipe()?;
        session.profile = ringside_core::Profile::fresh();
        Ok(vec![ScreenIntent::LoadScene {
            slow: false,
            next: vec![ScreenKind::Background, ScreenKind::MainMenu],
        }])
    }
}

impl Screen for GameplayScreen {
    fn name(&self) -> &'static str {
        "gameplay"
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

        // Gameplay progression (here: pose timers) halts while the pause
        // menu holds focus.
        if ctx.focused && self.transition.accepts_input() {
            self.player_pose.update(ctx.dt);
            self.enemy_pose.update(ctx.dt);
        }
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

        if input.is_menu_select() && !self.engine.is_match_over() {
            self.resolve_turn(session)?;
        }

        if input.is_start() && self.engine.is_match_over() {
            return self.advance_career(session);
        }

        if self.max_moves > 0 {
            if input.is_menu_left() {
                self.selected_move = match self.selected_move {
                    0 => self.max_moves - 1,
                    n => n - 1,
                };
            }
            if input.is_menu_right() {
                self.selected_move = (self.selected_move + 1) % self.max_moves;
            }
        }

        Ok(Vec::new())
    }

    fn draw(&self, frame: &mut Frame, session: &Session) {
        let b = self.brightness();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(frame.area());

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("Score: {}", session.profile.score),
                theme::faded(theme::ACCENT, b),
            )))
            .alignment(Alignment::Center),
            rows[0],
        );

        let panels = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[1]);
        self.draw_fighter(frame, panels[0], b, true);
        self.draw_fighter(frame, panels[1], b, false);

        self.draw_move_bar(frame, rows[2], b, session);
    }
}

impl GameplayScreen {
    fn draw_fighter(&self, frame: &mut Frame, area: Rect, b: f32, is_player: bool) {
        let (fighter, pose, name) = if is_player {
            (&self.engine.player, &self.player_pose, "Player")
        } else {
            (&self.engine.enemy, &self.enemy_pose, self.opponent_name.as_str())
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .margin(1)
            .split(area);

        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled(name, theme::faded(theme::TITLE, b))),
                Line::from(Span::styled(
                    pose.label(),
                    theme::faded(theme::ACCENT, b),
                )),
            ]),
            chunks[0],
        );

        let ratio = if fighter.max_hp == 0 {
            0.0
        } else {
            f64::from(fighter.current_hp) / f64::from(fighter.max_hp)
        };
        frame.render_widget(
            Gauge::default()
                .gauge_style(theme::health(fighter.current_hp, fighter.max_hp, b))
                .ratio(ratio)
                .label(format!("{}/{}", fighter.current_hp, fighter.max_hp)),
            chunks[1],
        );

        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled(
                    format!("Damage Taken: {}", fighter.damage_received),
                    theme::faded(theme::TEXT, b),
                )),
                Line::from(Span::styled(
                    format!("Damage Given: {}", fighter.damage_given),
                    theme::faded(theme::TEXT, b),
                )),
                Line::from(Span::styled(
                    format!("Success: {}", fighter.move_successful),
                    theme::faded(theme::MUTED, b),
                )),
            ]),
            chunks[3],
        );
    }

    fn draw_move_bar(&self, frame: &mut Frame, area: Rect, b: f32, session: &Session) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Length(1)])
            .split(area);

        if self.engine.is_match_over() {
            let banner = match self.result {
                Some(MatchResult::PlayerWon) => "K.O.!  PUSH START!",
                _ => "DOWN FOR THE COUNT...  PUSH START!",
            };
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    banner,
                    theme::faded(theme::ACCENT, b),
                )))
                .alignment(Alignment::Center),
                chunks[1],
            );
            return;
        }

        // Selected move details, then the move bar.
        if let Some(mv) = session
            .profile
            .equipped
            .get(self.selected_move)
            .and_then(|idx| session.catalog.get(idx))
        {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    format!(
                        "{}: {}-{} damage. {}% chance to hit.",
                        mv.kind, mv.range.min, mv.range.max, mv.chance
                    ),
                    theme::faded(theme::MUTED, b),
                )))
                .alignment(Alignment::Center),
                chunks[0],
            );
        }

        let mut spans = Vec::new();
        for slot in 0..self.max_moves {
            let Some(mv) = session
                .profile
                .equipped
                .get(slot)
                .and_then(|idx| session.catalog.get(idx))
            else {
                continue;
            };
            let selected = slot == self.selected_move;
            spans.push(Span::styled(
                if selected { ">" } else { " " },
                theme::faded(theme::ACCENT, b),
            ));
            spans.push(Span::styled(
                mv.name.clone(),
                theme::menu_entry(selected, b),
            ));
            spans.push(Span::raw("  "));
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
            chunks[1],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
    use ringside_core::Combatant;

    fn input_with(code: KeyCode) -> InputState {
        let mut input = InputState::default();
        input.record(KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        });
        input
    }

    #[test]
    fn entry_sorts_equipped_and_counts_moves() {
        let mut session = Session::for_tests();
        session.profile.equipped = ringside_core::EquippedMoves::from_slots([2, -1, 0, -1]);

        let screen = GameplayScreen::new(&mut session);

        assert_eq!(session.profile.equipped.slots(), &[2, 0, -1, -1]);
        assert_eq!(screen.max_moves, 2);
    }

    #[test]
    fn move_bar_navigation_wraps() {
        let mut session = Session::for_tests();
        let mut screen = GameplayScreen::new(&mut session);
        assert_eq!(screen.max_moves, 2);

        screen
            .handle_input(&input_with(KeyCode::Left), &mut session)
            .expect("input");
        assert_eq!(screen.selected_move, 1);
        screen
            .handle_input(&input_with(KeyCode::Right), &mut session)
            .expect("input");
        assert_eq!(screen.selected_move, 0);
    }

    #[test]
    fn confirm_resolves_a_player_turn_and_cues_a_pose() {
        let mut session = Session::for_tests();
        let mut screen = GameplayScreen::new(&mut session);

        screen
            .handle_input(&input_with(KeyCode::Char('z')), &mut session)
            .expect("input");

        assert!(screen.engine.is_player_turn());
        assert!(matches!(screen.player_pose.pose, Pose::Acting(_)));
    }

    #[test]
    fn pause_key_pushes_the_pause_screen() {
        let mut session = Session::for_tests();
        let mut screen = GameplayScreen::new(&mut session);
        let intents = screen
            .handle_input(&input_with(KeyCode::Esc), &mut session)
            .expect("input");
        assert_eq!(intents, vec![ScreenIntent::Push(ScreenKind::Pause)]);
    }

    #[test]
    fn start_after_knockout_heads_to_training() {
        let mut session = Session::for_tests();
        let mut screen = GameplayScreen::new(&mut session);
        // Rig a nearly-dead opponent so the first landed jab ends it.
        screen.engine = MatchEngine::with_combatants(
            Combatant::new(100_000),
            Combatant::new(1),
            Pcg32::new(4),
        );
        // Slot 1 holds the jab after the descending sort; the default slot
        // 0 is the block, which would never finish the fight.
        screen.selected_move = 1;

        for _ in 0..200 {
            if screen.engine.is_match_over() {
                break;
            }
            screen
                .handle_input(&input_with(KeyCode::Char('z')), &mut session)
                .expect("input");
        }
        assert!(screen.engine.is_match_over());
        assert_eq!(screen.result, Some(MatchResult::PlayerWon));
        assert_eq!(session.profile.wins, 1);
        assert_eq!(screen.enemy_pose.pose, Pose::Down);

        let intents = screen
            .handle_input(&input_with(KeyCode::Enter), &mut session)
            .expect("input");
        assert_eq!(
            intents,
            vec![ScreenIntent::LoadScene {
                slow: false,
                next: vec![ScreenKind::Training],
            }]
        );
    }

    #[test]
    fn poses_expire_back_to_idle_but_down_sticks() {
        let mut pose = PoseState::new();
        pose.set_acting("Jab");
        pose.update(0.3);
        assert!(matches!(pose.pose, Pose::Acting(_)));
        pose.update(0.3);
        assert_eq!(pose.pose, Pose::Idle);

        pose.set_down();
        pose.update(10.0);
        assert_eq!(pose.pose, Pose::Down);
        pose.set_acting("Jab");
        assert_eq!(pose.pose, Pose::Down);
    }
}
