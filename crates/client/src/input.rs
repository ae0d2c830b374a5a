//! Logical input events for one tick.
//!
//! Raw terminal key events are collected once per frame and reduced to the
//! game's logical actions. Only `KeyEventKind::Press` is accepted, which is
//! the terminal analogue of was-up-now-down edge detection: holding a key
//! does not re-fire the action. The per-tick state is consumed by exactly
//! one screen (the topmost eligible one).

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// Edge-triggered logical input flags for a single tick.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputState {
    menu_up: bool,
    menu_down: bool,
    menu_left: bool,
    menu_right: bool,
    menu_select: bool,
    menu_cancel: bool,
    start: bool,
    pause: bool,
}

impl InputState {
    /// Folds one raw key event into the tick's flags.
    pub fn record(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Up => self.menu_up = true,
            KeyCode::Down => self.menu_down = true,
            KeyCode::Left => self.menu_left = true,
            KeyCode::Right => self.menu_right = true,
            KeyCode::Char('z') | KeyCode::Char('Z') => self.menu_select = true,
            KeyCode::Enter => self.start = true,
            // Escape doubles as menu-cancel and the pause action.
            KeyCode::Esc => {
                self.menu_cancel = true;
                self.pause = true;
            }
            _ => {}
        }
    }

    /// Checks for a "menu up" input action.
    pub fn is_menu_up(&self) -> bool {
        self.menu_up
    }

    /// Checks for a "menu down" input action.
    pub fn is_menu_down(&self) -> bool {
        self.menu_down
    }

    /// Checks for a "menu left" input action.
    pub fn is_menu_left(&self) -> bool {
        self.menu_left
    }

    /// Checks for a "menu right" input action.
    pub fn is_menu_right(&self) -> bool {
        self.menu_right
    }

    /// Checks for a "menu select" (confirm / turn-advance) input action.
    pub fn is_menu_select(&self) -> bool {
        self.menu_select
    }

    /// Checks for a "menu cancel" input action.
    pub fn is_menu_cancel(&self) -> bool {
        self.menu_cancel
    }

    /// Checks for a "start" (confirm-and-advance-scene) input action.
    pub fn is_start(&self) -> bool {
        self.start
    }

    /// Checks for a "pause the game" input action.
    pub fn is_pause(&self) -> bool {
        self.pause
    }
}
