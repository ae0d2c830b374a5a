//! The screen stack: owns every live screen, routes update/draw/input, and
//! applies screen intents between ticks.
//!
//! The update pass walks the stack top-down. Every screen updates every
//! tick; the first screen in an input-accepting state gets the tick's input,
//! and the first such *non-popup* screen marks everything beneath it as
//! covered. Structural changes (push, exit, scene loads) are collected as
//! intents during the walk and applied afterwards, so the walk itself never
//! mutates the stack.

use anyhow::Result;
use ratatui::Frame;

use crate::input::InputState;
use crate::session::Session;

use super::loading::LoadingScreen;
use super::transition::TransitionState;
use super::{Screen, ScreenIntent, ScreenKind, UpdateCtx, build};

/// Structural change queued during the update walk.
enum Deferred {
    ExitAt(usize),
    Push(ScreenKind),
    Load { slow: bool, next: Vec<ScreenKind> },
    Quit,
}

#[derive(Default)]
pub struct ScreenStack {
    screens: Vec<Box<dyn Screen>>,
}

impl ScreenStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.screens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    pub fn push(&mut self, screen: Box<dyn Screen>) {
        tracing::debug!(screen = screen.name(), "push screen");
        self.screens.push(screen);
    }

    pub fn push_kind(&mut self, kind: ScreenKind, session: &mut Session) {
        self.push(build(kind, session));
    }

    /// Runs one tick over the whole stack. Returns true when a screen has
    /// requested that the application quit.
    pub fn update(&mut self, dt: f32, input: &InputState, session: &mut Session) -> Result<bool> {
        let mut other_has_focus = false;
        let mut covered = false;
        let mut deferred: Vec<Deferred> = Vec::new();
        let mut finished: Vec<usize> = Vec::new();
        let screen_count = self.screens.len();

        // Top-down over a fixed snapshot of the stack; intents are applied
        // only after the walk.
        for idx in (0..screen_count).rev() {
            let screen = &mut self.screens[idx];

            let effective_cover = covered && !screen.ignores_coverage();
            if screen.transition_mut().update(dt, effective_cover) {
                finished.push(idx);
            }

            let ctx = UpdateCtx {
                dt,
                focused: !other_has_focus,
                covered,
                screen_count,
            };
            let intents = screen.update(ctx, session)?;
            Self::defer(&mut deferred, idx, intents);

            if screen.transition().accepts_input() {
                // First eligible screen gets the input, exactly once.
                if !other_has_focus {
                    let intents = screen.handle_input(input, session)?;
                    Self::defer(&mut deferred, idx, intents);
                    other_has_focus = true;
                }
                // An active non-popup covers everything beneath it.
                if !screen.is_popup() {
                    covered = true;
                }
            }
        }

        Ok(self.apply(deferred, finished, session))
    }

    /// Bottom-up draw pass; hidden screens are skipped.
    pub fn draw(&self, frame: &mut Frame, session: &Session) {
        for screen in &self.screens {
            if screen.transition().state() == TransitionState::Hidden {
                continue;
            }
            screen.draw(frame, session);
        }
    }

    /// Starts the off-transition of every screen and brings up a loading
    /// screen that will activate `next` once the stack has drained.
    pub fn load_scene(&mut self, slow: bool, next: Vec<ScreenKind>) {
        tracing::info!(?next, "scene change");
        for idx in (0..self.screens.len()).rev() {
            self.exit_at(idx);
        }
        self.push(Box::new(LoadingScreen::new(slow, next)));
    }

    fn defer(deferred: &mut Vec<Deferred>, idx: usize, intents: Vec<ScreenIntent>) {
        for intent in intents {
            deferred.push(match intent {
                ScreenIntent::Exit => Deferred::ExitAt(idx),
                ScreenIntent::Push(kind) => Deferred::Push(kind),
                ScreenIntent::LoadScene { slow, next } => Deferred::Load { slow, next },
                ScreenIntent::Quit => Deferred::Quit,
            });
        }
    }

    /// Applies queued work: exits first (indices still valid), then removal
    /// of finished screens, then pushes and scene loads.
    fn apply(&mut self, deferred: Vec<Deferred>, mut finished: Vec<usize>, session: &mut Session) -> bool {
        let mut quit = false;

        for item in &deferred {
            if let Deferred::ExitAt(idx) = item {
                if self.screens[*idx].transition().off_time <= 0.0 {
                    finished.push(*idx);
                } else {
                    self.screens[*idx].transition_mut().begin_exit();
                }
            }
        }

        finished.sort_unstable_by(|a, b| b.cmp(a));
        finished.dedup();
        for idx in finished {
            let screen = self.screens.remove(idx);
            tracing::debug!(screen = screen.name(), "remove screen");
        }

        for item in deferred {
            match item {
                Deferred::ExitAt(_) => {}
                Deferred::Push(kind) => self.push_kind(kind, session),
                Deferred::Load { slow, next } => self.load_scene(slow, next),
                Deferred::Quit => quit = true,
            }
        }

        quit
    }

    /// Exits the screen at `idx`: instantly when its off-time is zero,
    /// otherwise via the off-transition.
    fn exit_at(&mut self, idx: usize) {
        if self.screens[idx].transition().off_time <= 0.0 {
            let screen = self.screens.remove(idx);
            tracing::debug!(screen = screen.name(), "remove screen");
        } else {
            self.screens[idx].transition_mut().begin_exit();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::Screen;
    use crate::screens::transition::Transition;
    use crate::session::Session;

    use std::cell::RefCell;
    use std::rc::Rc;

    /// Observations a [`Probe`] screen shares with the test body.
    #[derive(Default)]
    struct ProbeLog {
        inputs_seen: u32,
        last_focused: Option<bool>,
        last_covered: Option<bool>,
        last_state: Option<TransitionState>,
    }

    /// Minimal screen recording what the stack feeds it.
    struct Probe {
        transition: Transition,
        popup: bool,
        ignores_coverage: bool,
        intents_on_input: Vec<ScreenIntent>,
        log: Rc<RefCell<ProbeLog>>,
    }

    impl Probe {
        fn new(on_time: f32, off_time: f32) -> (Self, Rc<RefCell<ProbeLog>>) {
            let log = Rc::new(RefCell::new(ProbeLog::default()));
            let probe = Self {
                transition: Transition::new(on_time, off_time),
                popup: false,
                ignores_coverage: false,
                intents_on_input: Vec::new(),
                log: Rc::clone(&log),
            };
            (probe, log)
        }
    }

    impl Screen for Probe {
        fn name(&self) -> &'static str {
            "probe"
        }

        fn is_popup(&self) -> bool {
            self.popup
        }

        fn ignores_coverage(&self) -> bool {
            self.ignores_coverage
        }

        fn transition(&self) -> &Transition {
            &self.transition
        }

        fn transition_mut(&mut self) -> &mut Transition {
            &mut self.transition
        }

        fn update(&mut self, ctx: UpdateCtx, _session: &mut Session) -> Result<Vec<ScreenIntent>> {
            let mut log = self.log.borrow_mut();
            log.last_focused = Some(ctx.focused);
            log.last_covered = Some(ctx.covered);
            log.last_state = Some(self.transition.state());
            Ok(Vec::new())
        }

        fn handle_input(
            &mut self,
            _input: &InputState,
            _session: &mut Session,
        ) -> Result<Vec<ScreenIntent>> {
            self.log.borrow_mut().inputs_seen += 1;
            Ok(std::mem::take(&mut self.intents_on_input))
        }

        fn draw(&self, _frame: &mut Frame, _session: &Session) {}
    }

    fn tick(stack: &mut ScreenStack, session: &mut Session) -> bool {
        stack
            .update(0.016, &InputState::default(), session)
            .expect("stack update")
    }

    #[test]
    fn only_the_topmost_active_screen_gets_input() {
        let mut session = Session::for_tests();
        let mut stack = ScreenStack::new();
        let (below, below_log) = Probe::new(0.0, 0.0);
        let (top, top_log) = Probe::new(0.0, 0.0);
        stack.push(Box::new(below));
        stack.push(Box::new(top));

        tick(&mut stack, &mut session);

        assert_eq!(top_log.borrow().inputs_seen, 1);
        assert_eq!(below_log.borrow().inputs_seen, 0);
        assert_eq!(below_log.borrow().last_focused, Some(false));
    }

    #[test]
    fn covered_screen_still_updates_and_eventually_hides() {
        let mut session = Session::for_tests();
        let mut stack = ScreenStack::new();
        let (below, below_log) = Probe::new(0.0, 0.1);
        let (top, _) = Probe::new(0.0, 0.0);
        stack.push(Box::new(below));
        stack.push(Box::new(top));

        for _ in 0..20 {
            tick(&mut stack, &mut session);
        }

        let log = below_log.borrow();
        assert_eq!(log.last_covered, Some(true));
        assert_eq!(log.last_state, Some(TransitionState::Hidden));
        // Updated every tick despite the cover.
        assert!(log.last_focused.is_some());
    }

    #[test]
    fn popup_does_not_cover_the_screen_beneath() {
        let mut session = Session::for_tests();
        let mut stack = ScreenStack::new();
        let (below, below_log) = Probe::new(0.0, 0.1);
        let (mut popup, popup_log) = Probe::new(0.0, 0.0);
        popup.popup = true;
        stack.push(Box::new(below));
        stack.push(Box::new(popup));

        for _ in 0..20 {
            tick(&mut stack, &mut session);
        }

        let log = below_log.borrow();
        assert_eq!(log.last_covered, Some(false));
        assert_eq!(log.last_focused, Some(false), "popup holds input focus");
        assert_eq!(log.last_state, Some(TransitionState::Active));
        assert_eq!(popup_log.borrow().inputs_seen, 20);
    }

    #[test]
    fn coverage_ignoring_screen_stays_active_under_cover() {
        let mut session = Session::for_tests();
        let mut stack = ScreenStack::new();
        let (mut backdrop, backdrop_log) = Probe::new(0.0, 0.1);
        backdrop.ignores_coverage = true;
        let (top, _) = Probe::new(0.0, 0.0);
        stack.push(Box::new(backdrop));
        stack.push(Box::new(top));

        for _ in 0..20 {
            tick(&mut stack, &mut session);
        }

        assert_eq!(
            backdrop_log.borrow().last_state,
            Some(TransitionState::Active)
        );
    }

    #[test]
    fn exit_intent_with_zero_off_time_removes_immediately() {
        let mut session = Session::for_tests();
        let mut stack = ScreenStack::new();
        let (below, _) = Probe::new(0.0, 0.0);
        let (mut top, _) = Probe::new(0.0, 0.0);
        top.intents_on_input = vec![ScreenIntent::Exit];
        stack.push(Box::new(below));
        stack.push(Box::new(top));

        tick(&mut stack, &mut session);
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn exit_intent_with_off_time_fades_then_removes() {
        let mut session = Session::for_tests();
        let mut stack = ScreenStack::new();
        let (mut top, _) = Probe::new(0.0, 0.05);
        top.intents_on_input = vec![ScreenIntent::Exit];
        stack.push(Box::new(top));

        tick(&mut stack, &mut session);
        assert_eq!(stack.len(), 1, "still fading off");

        for _ in 0..10 {
            tick(&mut stack, &mut session);
        }
        assert!(stack.is_empty());
    }

    #[test]
    fn quit_intent_bubbles_out_of_update() {
        let mut session = Session::for_tests();
        let mut stack = ScreenStack::new();
        let (mut top, _) = Probe::new(0.0, 0.0);
        top.intents_on_input = vec![ScreenIntent::Quit];
        stack.push(Box::new(top));

        assert!(tick(&mut stack, &mut session));
    }
}
