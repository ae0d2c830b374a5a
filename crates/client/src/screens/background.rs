//! The backdrop that sits under the whole menu stack.
//!
//! Unlike every other screen this one never transitions off when covered:
//! being covered is its job. It only leaves the stack through a scene load.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::presentation::theme;
use crate::session::Session;

use super::Screen;
use super::transition::Transition;

const TITLE: &str = r#"
 ____  ___ _   _  ____ ____ ___ ____  _____
|  _ \|_ _| \ | |/ ___/ ___|_ _|  _ \| ____|
| |_) || ||  \| | |  _\___ \| || | | |  _|
|  _ < | || |\  | |_| |___) | || |_| | |___
|_| \_\___|_| \_|\____|____/___|____/|_____|
"#;

pub struct BackgroundScreen {
    transition: Transition,
}

impl BackgroundScreen {
    pub fn new() -> Self {
        Self {
            transition: Transition::new(0.5, 0.5),
        }
    }
}

impl Screen for BackgroundScreen {
    fn name(&self) -> &'static str {
        "background"
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

    fn draw(&self, frame: &mut Frame, _session: &Session) {
        let brightness = self.transition.alpha();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(7),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(frame.area());

        let mut lines: Vec<Line> = TITLE
            .lines()
            .map(|l| Line::from(Span::styled(l, theme::faded(theme::DARK_RED, brightness))))
            .collect();
        lines.push(Line::from(Span::styled(
            "a turn-based boxing story",
            theme::faded(theme::MUTED, brightness),
        )));
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            chunks[1],
        );

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "arrows: navigate   z: select   enter: start   esc: back",
                theme::faded(theme::MUTED, brightness * 0.8),
            )))
            .alignment(Alignment::Center),
            chunks[3],
        );
    }
}
