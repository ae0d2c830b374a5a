//! Screen framework: the capability trait, screen intents, and the
//! constructors the stack uses to build screens by kind.
//!
//! Screens are independent types implementing [`Screen`] and composing the
//! shared [`transition::Transition`] state machine; there is no base-screen
//! hierarchy. Input handlers return [`ScreenIntent`] values that the stack
//! applies after the update pass, instead of mutating the stack from inside
//! a callback.

pub mod background;
pub mod gameplay;
pub mod loading;
pub mod main_menu;
pub mod matchup;
pub mod menu;
pub mod options;
pub mod pause;
pub mod stack;
pub mod training;
pub mod transition;

use anyhow::Result;
use ratatui::Frame;

use crate::input::InputState;
use crate::session::Session;
use transition::Transition;

/// Per-tick context the stack hands to every screen's update.
#[derive(Clone, Copy, Debug)]
pub struct UpdateCtx {
    /// Seconds since the previous tick.
    pub dt: f32,
    /// True when no screen above this one has taken input focus.
    pub focused: bool,
    /// True when a non-popup screen above is covering this one.
    pub covered: bool,
    /// Number of screens currently on the stack.
    pub screen_count: usize,
}

/// What a screen wants the stack to do once the tick's update pass is over.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScreenIntent {
    /// Push a new screen on top (menus, popups).
    Push(ScreenKind),
    /// Begin this screen's off-transition and remove it when done.
    Exit,
    /// Tear the whole stack down through a loading screen, then activate
    /// the given screens.
    LoadScene { slow: bool, next: Vec<ScreenKind> },
    /// Quit the application.
    Quit,
}

/// Identifies a screen the stack can construct.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenKind {
    Background,
    MainMenu,
    Options,
    Pause,
    Matchup,
    Gameplay,
    Training,
}

/// One layer of the screen stack.
pub trait Screen {
    /// Stable name used in logs.
    fn name(&self) -> &'static str;

    /// Popups contest input focus but do not cover the screens beneath.
    fn is_popup(&self) -> bool {
        false
    }

    /// Screens that must not transition off just because something
    /// non-popup sits above them (the backdrop, the match scenes).
    fn ignores_coverage(&self) -> bool {
        false
    }

    fn transition(&self) -> &Transition;

    fn transition_mut(&mut self) -> &mut Transition;

    /// Runs every tick for every screen on the stack, covered or not.
    fn update(&mut self, _ctx: UpdateCtx, _session: &mut Session) -> Result<Vec<ScreenIntent>> {
        Ok(Vec::new())
    }

    /// Runs at most once per tick, only for the topmost eligible screen.
    fn handle_input(
        &mut self,
        _input: &InputState,
        _session: &mut Session,
    ) -> Result<Vec<ScreenIntent>> {
        Ok(Vec::new())
    }

    fn draw(&self, frame: &mut Frame, session: &Session);
}

/// Builds a screen by kind. Screens that snapshot session state at entry
/// (gameplay, training) take it here.
pub fn build(kind: ScreenKind, session: &mut Session) -> Box<dyn Screen> {
    match kind {
        ScreenKind::Background => Box::new(background::BackgroundScreen::new()),
        ScreenKind::MainMenu => Box::new(main_menu::MainMenuScreen::new()),
        ScreenKind::Options => Box::new(options::OptionsScreen::new()),
        ScreenKind::Pause => Box::new(pause::PauseScreen::new()),
        ScreenKind::Matchup => Box::new(matchup::MatchupScreen::new()),
        ScreenKind::Gameplay => Box::new(gameplay::GameplayScreen::new(session)),
        ScreenKind::Training => Box::new(training::TrainingScreen::new(session)),
    }
}
