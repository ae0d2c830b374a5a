//! Per-screen transition state machine.
//!
//! Every screen fades on over `on_time`, sits Active, and fades off over
//! `off_time`, either to Hidden while covered by another screen or to
//! removal once an exit has been requested. `position` runs from 1.0 (fully
//! off) to 0.0 (fully on) and moves by `dt / time` per tick; a zero time
//! crosses in a single step. Re-requesting exit restarts the off clock;
//! there is no other way to cancel a transition in flight.

/// Where a screen currently is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionState {
    /// Fading on; already receives input if topmost.
    TransitioningOn,
    /// Fully on.
    Active,
    /// Fading off, either toward Hidden or toward removal.
    TransitioningOff,
    /// Fully covered by another screen; skipped by the draw pass.
    Hidden,
}

#[derive(Clone, Copy, Debug)]
pub struct Transition {
    pub on_time: f32,
    pub off_time: f32,
    /// 1.0 = fully off, 0.0 = fully on.
    position: f32,
    state: TransitionState,
    exiting: bool,
}

impl Transition {
    pub fn new(on_time: f32, off_time: f32) -> Self {
        Self {
            on_time,
            off_time,
            position: 1.0,
            state: TransitionState::TransitioningOn,
            exiting: false,
        }
    }

    /// Instantaneous transitions in both directions.
    pub fn instant() -> Self {
        Self::new(0.0, 0.0)
    }

    pub fn state(&self) -> TransitionState {
        self.state
    }

    /// Fade level in [0,1]: 1 when fully on.
    pub fn alpha(&self) -> f32 {
        1.0 - self.position
    }

    pub fn is_exiting(&self) -> bool {
        self.exiting
    }

    /// True in the states that may receive input when topmost.
    pub fn accepts_input(&self) -> bool {
        matches!(
            self.state,
            TransitionState::TransitioningOn | TransitionState::Active
        )
    }

    /// Request removal via the off-transition.
    pub fn begin_exit(&mut self) {
        self.exiting = true;
    }

    /// Advances the state machine by one tick.
    ///
    /// Returns true exactly when an exiting screen has finished its off
    /// transition and should be removed from the stack.
    pub fn update(&mut self, dt: f32, covered: bool) -> bool {
        if self.exiting {
            self.state = TransitionState::TransitioningOff;
            return !self.advance(dt, self.off_time, 1.0);
        }

        if covered {
            // Covered screens fade off but stay on the stack as Hidden.
            if self.advance(dt, self.off_time, 1.0) {
                self.state = TransitionState::TransitioningOff;
            } else {
                self.state = TransitionState::Hidden;
            }
        } else if self.advance(dt, self.on_time, -1.0) {
            self.state = TransitionState::TransitioningOn;
        } else {
            self.state = TransitionState::Active;
        }
        false
    }

    /// Moves `position` toward an endpoint. Returns true while still in
    /// motion, false once the endpoint is reached.
    fn advance(&mut self, dt: f32, time: f32, direction: f32) -> bool {
        let delta = if time <= 0.0 { 1.0 } else { dt / time };
        self.position += delta * direction;

        if (direction < 0.0 && self.position <= 0.0)
            || (direction > 0.0 && self.position >= 1.0)
        {
            self.position = self.position.clamp(0.0, 1.0);
            return false;
        }
        true
    }
}
